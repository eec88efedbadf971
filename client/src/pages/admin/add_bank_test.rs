use super::*;

fn filled_form() -> AddBankForm {
    AddBankForm {
        bank_name: "First National".to_owned(),
        bank_code: "FN001".to_owned(),
        website: "https://fn.example".to_owned(),
        bank_address: "1 Main St".to_owned(),
        bank_email: "hq@fn.example".to_owned(),
        phone_number: "5550100".to_owned(),
        country: "India".to_owned(),
        currency: "INR".to_owned(),
        bank_manager_id: "7".to_owned(),
    }
}

#[test]
fn accepts_a_complete_form() {
    let request = validate_add_bank(&filled_form()).unwrap();
    assert_eq!(request.bank_name, "First National");
    assert_eq!(request.bank_manager_id, 7);
}

#[test]
fn rejects_any_blank_required_field() {
    let mut form = filled_form();
    form.bank_code = "  ".to_owned();
    assert_eq!(validate_add_bank(&form).unwrap_err(), "Please enter the bank code.");
}

#[test]
fn rejects_invalid_bank_email() {
    let mut form = filled_form();
    form.bank_email = "not-an-email".to_owned();
    assert!(validate_add_bank(&form).is_err());
}

#[test]
fn rejects_missing_manager_selection() {
    let mut form = filled_form();
    form.bank_manager_id = String::new();
    assert_eq!(validate_add_bank(&form).unwrap_err(), "Please select a bank manager.");
}

#[test]
fn trims_fields_before_sending() {
    let mut form = filled_form();
    form.bank_name = "  First National  ".to_owned();
    let request = validate_add_bank(&form).unwrap();
    assert_eq!(request.bank_name, "First National");
}
