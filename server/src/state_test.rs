use super::*;
use models::LoginRequest;

async fn seeded() -> (AppState, String) {
    let state = AppState::new();
    state
        .register_manager(RegisterManagerRequest {
            name: "Priya".to_owned(),
            email: "priya@fn.example".to_owned(),
            password: "pw".to_owned(),
            gender: "FEMALE".to_owned(),
            contact_no: "5550101".to_owned(),
            age: 34,
            street: String::new(),
            city: String::new(),
            pincode: String::new(),
        })
        .await
        .unwrap();
    let managers = state.list_managers().await;
    let manager_id = managers[0].id.unwrap();
    let bank = state
        .add_bank(AddBankRequest {
            bank_name: "First National".to_owned(),
            bank_code: "FN001".to_owned(),
            website: String::new(),
            bank_address: String::new(),
            bank_email: "hq@fn.example".to_owned(),
            phone_number: String::new(),
            country: "India".to_owned(),
            currency: "INR".to_owned(),
            bank_manager_id: manager_id,
        })
        .await
        .unwrap();
    let bank_id = bank.id.unwrap();
    state
        .register_customer(
            bank_id,
            RegisterCustomerRequest {
                name: "Arun".to_owned(),
                email: "arun@mail.example".to_owned(),
                password: "pw".to_owned(),
                gender: "MALE".to_owned(),
                contact: "5550102".to_owned(),
                age: 29,
                street: String::new(),
                city: String::new(),
                pincode: String::new(),
            },
        )
        .await
        .unwrap();
    state
        .add_account(AddAccountRequest {
            customer_email: "arun@mail.example".to_owned(),
            account_number: "AC100".to_owned(),
            ifsc_code: "FN0001".to_owned(),
            account_type: "SAVINGS".to_owned(),
        })
        .await
        .unwrap();
    (state, "arun@mail.example".to_owned())
}

#[tokio::test]
async fn deposit_raises_the_balance_and_appends_a_ledger_row() {
    let (state, email) = seeded().await;
    state.deposit(&email, 250.0).await.unwrap();

    let detail = state.account_detail(&email).await.unwrap();
    assert!((detail.balance - 250.0).abs() < f64::EPSILON);

    let rows = state.transactions_for_email(&email).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind, Some(TransactionKind::Deposit));
    assert_eq!(rows[0].balance, Some(250.0));
    assert!(rows[0].transaction_id.is_some());
}

#[tokio::test]
async fn withdraw_rejects_more_than_the_balance() {
    let (state, email) = seeded().await;
    state.deposit(&email, 100.0).await.unwrap();

    let err = state.withdraw(&email, 150.0).await.unwrap_err();
    assert_eq!(err, StoreError::InsufficientBalance);
    assert_eq!(err.to_string(), "Insufficient balance");

    state.withdraw(&email, 60.0).await.unwrap();
    let detail = state.account_detail(&email).await.unwrap();
    assert!((detail.balance - 40.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn locked_accounts_refuse_money_movement() {
    let (state, email) = seeded().await;
    state.deposit(&email, 100.0).await.unwrap();
    state.set_lock("AC100", true).await.unwrap();

    assert_eq!(state.deposit(&email, 10.0).await.unwrap_err(), StoreError::Inactive);
    assert_eq!(state.withdraw(&email, 10.0).await.unwrap_err(), StoreError::Inactive);
    assert!(StoreError::Inactive.to_string().contains("inactive"));

    state.set_lock("AC100", false).await.unwrap();
    state.deposit(&email, 10.0).await.unwrap();
}

#[tokio::test]
async fn transfer_moves_money_and_writes_both_ledger_sides() {
    let (state, email) = seeded().await;
    let bank_id = state.list_banks().await[0].id.unwrap();
    state
        .register_customer(
            bank_id,
            RegisterCustomerRequest {
                name: "Beena".to_owned(),
                email: "beena@mail.example".to_owned(),
                password: "pw".to_owned(),
                gender: "FEMALE".to_owned(),
                contact: "5550103".to_owned(),
                age: 31,
                street: String::new(),
                city: String::new(),
                pincode: String::new(),
            },
        )
        .await
        .unwrap();
    state
        .add_account(AddAccountRequest {
            customer_email: "beena@mail.example".to_owned(),
            account_number: "AC200".to_owned(),
            ifsc_code: "FN0001".to_owned(),
            account_type: "SAVINGS".to_owned(),
        })
        .await
        .unwrap();
    state.deposit(&email, 500.0).await.unwrap();

    let confirmation = state.transfer("AC100", "AC200", 200.0, "rent").await.unwrap();
    assert!(confirmation.contains("AC200"));

    let sender = state.account_by_number("AC100").await.unwrap();
    let receiver = state.account_by_number("AC200").await.unwrap();
    assert!((sender.balance - 300.0).abs() < f64::EPSILON);
    assert!((receiver.balance - 200.0).abs() < f64::EPSILON);

    let sender_rows = state.transactions_for_account("AC100").await;
    assert_eq!(sender_rows.len(), 2);
    let debit = &sender_rows[1];
    assert_eq!(debit.kind, Some(TransactionKind::Transfer));
    assert_eq!(debit.recipient_account.as_deref(), Some("AC200"));
    assert_eq!(debit.recipient_bank.as_deref(), Some("First National"));
    assert_eq!(debit.purpose.as_deref(), Some("rent"));
    assert_eq!(debit.balance, Some(300.0));

    let receiver_rows = state.transactions_for_account("AC200").await;
    assert_eq!(receiver_rows.len(), 1);
    let credit = &receiver_rows[0];
    assert_eq!(credit.kind, Some(TransactionKind::Deposit));
    assert_eq!(credit.recipient_account.as_deref(), Some("AC100"));
    assert_eq!(credit.recipient_bank.as_deref(), Some("First National"));
    assert_eq!(credit.purpose.as_deref(), Some("Received from AC100"));
    assert_eq!(credit.balance, Some(200.0));
}

#[tokio::test]
async fn transfer_rejects_insufficient_balance_and_unknown_receiver() {
    let (state, email) = seeded().await;
    state.deposit(&email, 50.0).await.unwrap();
    assert_eq!(state.transfer("AC100", "AC999", 10.0, "x").await.unwrap_err(), StoreError::NotFound("Receiver account"));
    assert_eq!(state.transfer("AC100", "AC100", 100.0, "x").await.unwrap_err(), StoreError::InsufficientBalance);
}

#[tokio::test]
async fn login_mints_distinct_tokens_carrying_role_context() {
    let (state, email) = seeded().await;

    let first = state.login(Role::Customer, &email, "pw").await.unwrap();
    let second = state.login(Role::Customer, &email, "pw").await.unwrap();
    assert_ne!(first.token, second.token);
    assert_eq!(first.account_number.as_deref(), Some("AC100"));

    let info = state.session(&first.token).await.unwrap();
    assert_eq!(info.role, Role::Customer);
    assert!(info.require(Role::Customer).is_ok());
    assert_eq!(info.require(Role::Admin).unwrap_err(), StoreError::Forbidden);

    let manager = state.login(Role::Bank, "priya@fn.example", "pw").await.unwrap();
    assert!(manager.bank_id.is_some());

    assert!(state.login(Role::Customer, &email, "wrong").await.is_err());
    assert!(state.session("no-such-token").await.is_none());
}

#[tokio::test]
async fn admin_signup_rejects_duplicates() {
    let state = AppState::new();
    let request = RegisterAdminRequest { email: "root@bank.example".to_owned(), password: "pw".to_owned() };
    state.register_admin(request.clone()).await.unwrap();
    assert_eq!(state.register_admin(request).await.unwrap_err(), StoreError::Duplicate);

    let login = LoginRequest {
        role: Role::Admin,
        email: "root@bank.example".to_owned(),
        password: "pw".to_owned(),
    };
    assert!(state.login(login.role, &login.email, &login.password).await.is_ok());
}

#[tokio::test]
async fn deleting_a_customer_removes_their_account() {
    let (state, email) = seeded().await;
    let bank_id = state.list_banks().await[0].id.unwrap();

    state.delete_customer(bank_id, &email).await.unwrap();
    assert!(state.list_bank_customers(bank_id).await.is_empty());
    assert!(!state.account_exists(&email).await);
    assert_eq!(state.delete_customer(bank_id, &email).await.unwrap_err(), StoreError::NotFound("Customer"));
}

#[tokio::test]
async fn customer_views_join_bank_and_account_fields() {
    let (state, email) = seeded().await;
    let customers = state.list_all_customers().await;
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].bank_name.as_deref(), Some("First National"));
    assert_eq!(customers[0].account_number.as_deref(), Some("AC100"));
    assert_eq!(customers[0].status, Some(AccountStatus::Active));

    let info = state.customer_info(&email).await.unwrap();
    assert_eq!(info.bank_code.as_deref(), Some("FN001"));
    assert_eq!(info.customer_name.as_deref(), Some("Arun"));
}

#[tokio::test]
async fn duplicate_accounts_are_rejected() {
    let (state, _) = seeded().await;
    let err = state
        .add_account(AddAccountRequest {
            customer_email: "arun@mail.example".to_owned(),
            account_number: "AC101".to_owned(),
            ifsc_code: "FN0001".to_owned(),
            account_type: "SAVINGS".to_owned(),
        })
        .await
        .unwrap_err();
    assert_eq!(err, StoreError::AccountExists);
}
