use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use vibe_cart::summary::TAX_RATE;
use vibe_core::{round2, Email};

/// Receipt number prefix; the rest is a millisecond timestamp plus a
/// random disambiguator. Collisions are improbable but the store still
/// enforces uniqueness.
const RECEIPT_PREFIX: &str = "RCP";

/// Checkout input: one ordered line as submitted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: u64,
    pub title: String,
    pub price: f64,
    pub qty: u32,
}

/// A line snapshotted into a receipt; `subtotal = price * qty`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub product_id: u64,
    pub title: String,
    pub price: f64,
    pub qty: u32,
    pub subtotal: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    Pending,
    Completed,
    Failed,
}

/// Immutable record of a completed checkout.
///
/// Items are a deep copy of the submitted order, independent of whatever
/// cart produced them. There is no update path by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub receipt_number: String,
    pub name: String,
    pub email: Email,
    pub items: Vec<ReceiptItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub status: ReceiptStatus,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
}

impl Receipt {
    /// Build a receipt from a validated order, computing all derived
    /// fields explicitly (no schema hooks here).
    pub fn create(name: String, email: Email, order: Vec<OrderItem>) -> Self {
        let items: Vec<ReceiptItem> = order
            .into_iter()
            .map(|item| ReceiptItem {
                subtotal: item.price * f64::from(item.qty),
                product_id: item.product_id,
                title: item.title,
                price: item.price,
                qty: item.qty,
            })
            .collect();

        let subtotal = round2(items.iter().map(|i| i.subtotal).sum());
        let tax = round2(subtotal * TAX_RATE);
        let total = round2(subtotal + tax);

        Self {
            receipt_number: generate_receipt_number(),
            name,
            email,
            items,
            subtotal,
            tax,
            total,
            status: ReceiptStatus::Completed,
            payment_method: "mock_payment".to_string(),
            created_at: Utc::now(),
        }
    }
}

fn generate_receipt_number() -> String {
    let millis = Utc::now().timestamp_millis();
    let nonce: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{RECEIPT_PREFIX}-{millis}-{nonce:06}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> Email {
        Email::parse("buyer@example.com").unwrap()
    }

    fn order() -> Vec<OrderItem> {
        vec![
            OrderItem {
                product_id: 1,
                title: "Shirt".to_string(),
                price: 10.00,
                qty: 2,
            },
            OrderItem {
                product_id: 2,
                title: "Mug".to_string(),
                price: 5.50,
                qty: 1,
            },
        ]
    }

    #[test]
    fn totals_follow_the_ten_percent_rule() {
        let receipt = Receipt::create("Buyer".to_string(), email(), order());
        assert_eq!(receipt.subtotal, 25.50);
        assert_eq!(receipt.tax, 2.55);
        assert_eq!(receipt.total, 28.05);
        assert_eq!(receipt.status, ReceiptStatus::Completed);
    }

    #[test]
    fn items_preserve_input_order_with_derived_subtotals() {
        let receipt = Receipt::create("Buyer".to_string(), email(), order());
        assert_eq!(receipt.items.len(), 2);
        assert_eq!(receipt.items[0].product_id, 1);
        assert_eq!(receipt.items[0].subtotal, 20.00);
        assert_eq!(receipt.items[1].product_id, 2);
        assert_eq!(receipt.items[1].subtotal, 5.50);
    }

    #[test]
    fn receipt_numbers_carry_prefix_millis_and_nonce() {
        let receipt = Receipt::create("Buyer".to_string(), email(), order());
        let parts: Vec<&str> = receipt.receipt_number.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "RCP");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 6);
        assert!(parts[2].parse::<u32>().is_ok());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use vibe_core::round2;

        proptest! {
            /// Property: whatever the order, subtotal + tax reconciles
            /// with total and tax is 10% of the subtotal.
            #[test]
            fn receipt_totals_reconcile(
                prices in proptest::collection::vec(0.01f64..500.0, 1..8),
                qtys in proptest::collection::vec(1u32..20, 8)
            ) {
                let order: Vec<OrderItem> = prices
                    .iter()
                    .zip(qtys.iter())
                    .enumerate()
                    .map(|(i, (&price, &qty))| OrderItem {
                        product_id: i as u64 + 1,
                        title: format!("P{i}"),
                        price: round2(price),
                        qty,
                    })
                    .collect();

                let receipt = Receipt::create("B".to_string(), email(), order);
                prop_assert!((receipt.total - (receipt.subtotal + receipt.tax)).abs() < 1e-9);
                prop_assert!((receipt.tax - round2(receipt.subtotal * 0.10)).abs() < 1e-9);
            }
        }
    }
}
