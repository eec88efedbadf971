//! Client-side statement export.
//!
//! The export is a self-contained HTML document built entirely in the
//! browser from rows already fetched, then handed to the user as a file
//! download via a Blob object URL. No server round-trip, no PDF engine.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use models::Transaction;

use crate::util::format;

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Build the printable statement document.
///
/// `subtitle` names the account or range being exported; rows render in the
/// order given, one table row per ledger entry.
#[must_use]
pub fn statement_html(title: &str, subtitle: &str, rows: &[Transaction]) -> String {
    let mut body = String::new();
    for row in rows {
        let kind = row.kind.map_or(format::MISSING, |k| k.as_str());
        body.push_str("<tr>");
        body.push_str(&format!("<td>{}</td>", escape_html(&format::timestamp(row.timestamp()))));
        body.push_str(&format!("<td>{}</td>", escape_html(&format::opt_text(row.transaction_id.as_deref()))));
        body.push_str(&format!("<td>{}</td>", escape_html(kind)));
        body.push_str(&format!("<td>{}</td>", escape_html(&format::opt_text(row.purpose.as_deref()))));
        body.push_str(&format!(
            "<td>{}</td>",
            escape_html(&format::recipient(row.recipient_account.as_deref(), row.recipient_bank.as_deref()))
        ));
        body.push_str(&format!("<td class=\"num\">{}</td>", escape_html(&format::opt_money(row.amount))));
        body.push_str(&format!("<td class=\"num\">{}</td>", escape_html(&format::opt_money(row.balance))));
        body.push_str("</tr>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; margin: 2rem; }}\n\
         table {{ border-collapse: collapse; width: 100%; }}\n\
         th, td {{ border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }}\n\
         td.num {{ text-align: right; }}\n\
         </style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n<p>{subtitle}</p>\n\
         <table>\n<thead><tr>\
         <th>Date</th><th>Transaction ID</th><th>Type</th><th>Purpose</th><th>Recipient</th><th>Amount</th><th>Balance</th>\
         </tr></thead>\n<tbody>\n{body}</tbody>\n</table>\n</body>\n</html>\n",
        title = escape_html(title),
        subtitle = escape_html(subtitle),
        body = body,
    )
}

/// Trigger a browser download of the document.
///
/// No-op outside the browser.
pub fn download_html(filename: &str, html: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str(html));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/html");
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };
        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(filename);
                anchor.click();
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, html);
    }
}
