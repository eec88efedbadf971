use super::*;
use models::TransactionKind;

fn ledger_row() -> Transaction {
    Transaction {
        transaction_id: Some("TX-77".to_owned()),
        kind: Some(TransactionKind::Deposit),
        amount: Some(250.0),
        balance: Some(1250.5),
        purpose: Some("salary".to_owned()),
        date: Some("2024-03-07T09:30:00".to_owned()),
        ..Transaction::default()
    }
}

#[test]
fn statement_html_is_a_complete_document() {
    let html = statement_html("Account Statement", "AC100", &[ledger_row()]);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Account Statement</h1>"));
    assert!(html.contains("<p>AC100</p>"));
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn statement_html_renders_formatted_cells() {
    let html = statement_html("Statement", "AC100", &[ledger_row()]);
    assert!(html.contains("<td>2024-03-07 09:30</td>"));
    assert!(html.contains("<td>TX-77</td>"));
    assert!(html.contains("<td>DEPOSIT</td>"));
    assert!(html.contains("<td class=\"num\">\u{20B9} 250.00</td>"));
    assert!(html.contains("<td class=\"num\">\u{20B9} 1250.50</td>"));
}

#[test]
fn statement_html_names_the_transfer_recipient() {
    let mut row = ledger_row();
    row.kind = Some(TransactionKind::Transfer);
    row.recipient_account = Some("AC200".to_owned());
    row.recipient_bank = Some("First National".to_owned());
    let html = statement_html("Statement", "AC100", &[row]);
    assert!(html.contains("<th>Recipient</th>"));
    assert!(html.contains("<td>AC200 (First National)</td>"));

    let plain = statement_html("Statement", "AC100", &[ledger_row()]);
    assert!(plain.contains(&format!("<td>{}</td>", crate::util::format::MISSING)));
}

#[test]
fn statement_html_escapes_untrusted_text() {
    let mut row = ledger_row();
    row.purpose = Some("<script>alert(1)</script>".to_owned());
    let html = statement_html("S & T", "a<b", &[row]);
    assert!(html.contains("<h1>S &amp; T</h1>"));
    assert!(html.contains("<p>a&lt;b</p>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn statement_html_with_no_rows_keeps_the_header() {
    let html = statement_html("Statement", "empty range", &[]);
    assert!(html.contains("<tbody>\n</tbody>"));
    assert!(html.contains("<th>Balance</th>"));
}

#[test]
fn missing_fields_render_placeholders() {
    let html = statement_html("Statement", "AC100", &[Transaction::default()]);
    assert!(html.contains(&format!("<td>{}</td>", crate::util::format::MISSING)));
}
