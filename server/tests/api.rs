//! End-to-end exercise of the REST surface over a real socket.

use serde_json::json;
use server::{routes, state};

async fn spawn_server() -> String {
    let app = routes::app(state::AppState::new());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn login(client: &reqwest::Client, base: &str, role: &str, email: &str, password: &str) -> serde_json::Value {
    let response = client
        .post(format!("{base}/api/auth/login"))
        .json(&json!({ "role": role, "email": email, "password": password }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success(), "login failed for {email}");
    response.json().await.unwrap()
}

#[tokio::test]
async fn full_flow_from_signup_to_customer_statement() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    // Admin signup and login.
    let response = client
        .post(format!("{base}/api/auth/register"))
        .json(&json!({ "email": "root@bank.example", "password": "pw" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let admin = login(&client, &base, "ADMIN", "root@bank.example", "pw").await;
    let admin_token = admin["token"].as_str().unwrap().to_owned();

    // Admin registers a manager and a bank under them.
    let response = client
        .post(format!("{base}/api/admin/bank-manager/register"))
        .bearer_auth(&admin_token)
        .json(&json!({
            "name": "Priya", "email": "priya@fn.example", "password": "pw",
            "gender": "FEMALE", "contactNo": "5550101", "age": 34,
            "street": "", "city": "", "pincode": ""
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let managers: serde_json::Value = client
        .get(format!("{base}/api/admin/bank-managers"))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let manager_id = managers[0]["id"].as_i64().unwrap();

    let response = client
        .post(format!("{base}/api/admin/bank/add"))
        .bearer_auth(&admin_token)
        .json(&json!({
            "bankName": "First National", "bankCode": "FN001", "website": "",
            "bankAddress": "", "bankEmail": "hq@fn.example", "phoneNumber": "",
            "country": "India", "currency": "INR", "bankManagerId": manager_id
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    // Manager logs in, registers a customer, opens an account, deposits.
    let manager = login(&client, &base, "BANK", "priya@fn.example", "pw").await;
    let manager_token = manager["token"].as_str().unwrap().to_owned();
    assert!(manager["bankId"].as_i64().is_some());

    let response = client
        .post(format!("{base}/api/customer/register"))
        .bearer_auth(&manager_token)
        .json(&json!({
            "name": "Arun", "email": "arun@mail.example", "password": "pw",
            "gender": "MALE", "contact": "5550102", "age": 29,
            "street": "", "city": "", "pincode": ""
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let response = client
        .post(format!("{base}/api/bank/account/add"))
        .bearer_auth(&manager_token)
        .json(&json!({
            "customerEmail": "arun@mail.example", "accountNumber": "AC100",
            "ifscCode": "FN0001", "accountType": "SAVINGS"
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let response = client
        .post(format!("{base}/api/bank/account/deposit"))
        .bearer_auth(&manager_token)
        .json(&json!({ "email": "arun@mail.example", "amount": 250.0 }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    // Customer logs in and reads their statement.
    let customer = login(&client, &base, "CUSTOMER", "arun@mail.example", "pw").await;
    let customer_token = customer["token"].as_str().unwrap().to_owned();
    assert_eq!(customer["accountNumber"].as_str(), Some("AC100"));

    let account: serde_json::Value = client
        .get(format!("{base}/api/customer/account/AC100"))
        .bearer_auth(&customer_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!((account["balance"].as_f64().unwrap() - 250.0).abs() < f64::EPSILON);

    let rows: serde_json::Value = client
        .get(format!("{base}/api/customer/transactions"))
        .bearer_auth(&customer_token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["type"].as_str(), Some("DEPOSIT"));
    assert_eq!(rows[0]["balance"].as_f64(), Some(250.0));
}

#[tokio::test]
async fn requests_without_a_bearer_token_get_401() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client.get(format!("{base}/api/admin/banks")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);

    let response = client
        .get(format!("{base}/api/admin/banks"))
        .bearer_auth("made-up-token")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_role_gets_403_and_locked_accounts_refuse_deposits() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base}/api/auth/register"))
        .json(&json!({ "email": "root@bank.example", "password": "pw" }))
        .send()
        .await
        .unwrap();
    let admin = login(&client, &base, "ADMIN", "root@bank.example", "pw").await;
    let admin_token = admin["token"].as_str().unwrap().to_owned();

    // An admin token must not open teller endpoints.
    let response = client
        .get(format!("{base}/api/bank/account/exists?email=x%40y.com"))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::FORBIDDEN);

    // Locking an unknown account 404s with the store's message.
    let response = client
        .put(format!("{base}/api/admin/lock/AC999"))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), "Account not found");
}
