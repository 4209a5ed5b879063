//! Convenience builders for invoice-driven journal entries.
//!
//! Used by the invoicing collaborator: sending an invoice debits
//! receivables and credits revenue; receiving a payment debits cash and
//! credits receivables. These postings are best-effort — if the tenant's
//! chart of accounts is not initialized, the caller skips ledger posting
//! without blocking the invoice operation.

use kontabil_shared::types::AccountId;
use rust_decimal::Decimal;

use super::types::{JournalLineInput, Side};

/// Builds the two lines for an invoice being issued:
/// Debit Accounts Receivable / Credit Revenue.
#[must_use]
pub fn invoice_lines(
    receivable_account: AccountId,
    revenue_account: AccountId,
    amount: Decimal,
) -> Vec<JournalLineInput> {
    vec![
        JournalLineInput {
            account_id: receivable_account,
            side: Side::Debit,
            amount,
            memo: None,
        },
        JournalLineInput {
            account_id: revenue_account,
            side: Side::Credit,
            amount,
            memo: None,
        },
    ]
}

/// Builds the two lines for an invoice payment being received:
/// Debit Cash / Credit Accounts Receivable.
#[must_use]
pub fn invoice_payment_lines(
    cash_account: AccountId,
    receivable_account: AccountId,
    amount: Decimal,
) -> Vec<JournalLineInput> {
    vec![
        JournalLineInput {
            account_id: cash_account,
            side: Side::Debit,
            amount,
            memo: None,
        },
        JournalLineInput {
            account_id: receivable_account,
            side: Side::Credit,
            amount,
            memo: None,
        },
    ]
}

/// Description for an invoice entry.
#[must_use]
pub fn invoice_description(invoice_number: &str) -> String {
    format!("Invoice {invoice_number}")
}

/// Description for an invoice payment entry.
#[must_use]
pub fn invoice_payment_description(invoice_number: &str) -> String {
    format!("Payment for invoice {invoice_number}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_invoice_lines() {
        let ar = AccountId::new();
        let revenue = AccountId::new();
        let lines = invoice_lines(ar, revenue, dec!(250.00));

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].account_id, ar);
        assert_eq!(lines[0].side, Side::Debit);
        assert_eq!(lines[1].account_id, revenue);
        assert_eq!(lines[1].side, Side::Credit);
        assert_eq!(lines[0].amount, lines[1].amount);
    }

    #[test]
    fn test_invoice_payment_lines() {
        let cash = AccountId::new();
        let ar = AccountId::new();
        let lines = invoice_payment_lines(cash, ar, dec!(250.00));

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].account_id, cash);
        assert_eq!(lines[0].side, Side::Debit);
        assert_eq!(lines[1].account_id, ar);
        assert_eq!(lines[1].side, Side::Credit);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(invoice_description("INV-0042"), "Invoice INV-0042");
        assert_eq!(
            invoice_payment_description("INV-0042"),
            "Payment for invoice INV-0042"
        );
    }
}
