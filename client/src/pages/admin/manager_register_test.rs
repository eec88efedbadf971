use super::*;

fn filled_form() -> ManagerForm {
    ManagerForm {
        name: "Priya Sharma".to_owned(),
        email: "priya@fn.example".to_owned(),
        password: "secret1".to_owned(),
        gender: "FEMALE".to_owned(),
        contact_no: "5550101".to_owned(),
        age: "34".to_owned(),
        street: "2 High St".to_owned(),
        city: "Pune".to_owned(),
        pincode: "411001".to_owned(),
    }
}

#[test]
fn accepts_a_complete_form() {
    let request = validate_manager(&filled_form()).unwrap();
    assert_eq!(request.name, "Priya Sharma");
    assert_eq!(request.age, 34);
    assert_eq!(request.gender, "FEMALE");
}

#[test]
fn rejects_blank_name_and_bad_email() {
    let mut form = filled_form();
    form.name = " ".to_owned();
    assert!(validate_manager(&form).is_err());

    let mut form = filled_form();
    form.email = "nope".to_owned();
    assert!(validate_manager(&form).is_err());
}

#[test]
fn rejects_short_password() {
    let mut form = filled_form();
    form.password = "abc".to_owned();
    assert_eq!(validate_manager(&form).unwrap_err(), "Password must be at least 6 characters.");
}

#[test]
fn rejects_non_numeric_or_out_of_range_age() {
    let mut form = filled_form();
    form.age = "soon".to_owned();
    assert_eq!(validate_manager(&form).unwrap_err(), "Please enter a valid age.");

    let mut form = filled_form();
    form.age = "17".to_owned();
    assert_eq!(validate_manager(&form).unwrap_err(), "Age must be between 18 and 100.");
}

#[test]
fn rejects_missing_gender_selection() {
    let mut form = filled_form();
    form.gender = String::new();
    assert_eq!(validate_manager(&form).unwrap_err(), "Please select a gender.");
}
