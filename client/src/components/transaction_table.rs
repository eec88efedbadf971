//! Shared ledger table.

use leptos::prelude::*;
use models::Transaction;

use crate::util::format;

/// Render a list of ledger rows as a table.
///
/// Every page that shows transactions goes through this one component so
/// column order and cell formatting stay consistent. An empty list renders
/// a message instead of a bare header.
#[component]
pub fn TransactionTable(rows: Vec<Transaction>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="table-empty">"No transactions to show."</p> }.into_any();
    }

    view! {
        <table class="ledger">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Transaction ID"</th>
                    <th>"Account"</th>
                    <th>"Type"</th>
                    <th>"Purpose"</th>
                    <th>"Recipient"</th>
                    <th class="ledger__num">"Amount"</th>
                    <th class="ledger__num">"Balance"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        let kind = row.kind.map_or(format::MISSING, |k| k.as_str());
                        view! {
                            <tr>
                                <td>{format::timestamp(row.timestamp())}</td>
                                <td>{format::opt_text(row.transaction_id.as_deref())}</td>
                                <td>{format::opt_text(row.account_number.as_deref())}</td>
                                <td>{kind}</td>
                                <td>{format::opt_text(row.purpose.as_deref())}</td>
                                <td>{format::recipient(row.recipient_account.as_deref(), row.recipient_bank.as_deref())}</td>
                                <td class="ledger__num">{format::opt_money(row.amount)}</td>
                                <td class="ledger__num">{format::opt_money(row.balance)}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
