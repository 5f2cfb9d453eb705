//! # Receipt
//!
//! The immutable record of a completed transaction, plus its text
//! rendering. The text is what the register prints, what goes into the
//! customer's purchase history and what the external store persists, so
//! the format is fixed line by line:
//!
//! ```text
//! ====== ЧЕК ======
//! Дата: <YYYY-MM-DD HH:MM:SS>
//!
//! 1. <item name> — <quantity> — <cost, 2 digits> ₽
//! 2. ...
//!
//! ИТОГО: <total, 2 digits> ₽
//! Наличными: <paid_cash, 2 digits> ₽
//! Бонусами:  <paid_bonus, 2 digits> ₽
//! =================
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::money::Money;
use crate::payment::PaymentResult;

/// Immutable record of a completed checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Rendered receipt text.
    pub text: String,

    /// Total charged, rounded to two fractional digits.
    pub total: Money,

    /// How the total was split between cash and bonus points.
    pub payment: PaymentResult,
}

/// Renders the receipt text for a settled cart.
pub(crate) fn render(
    cart: &Cart,
    total: Money,
    payment: &PaymentResult,
    at: NaiveDateTime,
) -> String {
    let mut lines = Vec::new();

    lines.push("====== ЧЕК ======".to_string());
    lines.push(format!("Дата: {}", at.format("%Y-%m-%d %H:%M:%S")));
    lines.push(String::new());

    for (i, entry) in cart.entries().iter().enumerate() {
        lines.push(format!(
            "{}. {} — {} — {} ₽",
            i + 1,
            entry.item.name,
            entry.quantity,
            entry.cost()
        ));
    }

    lines.push(String::new());
    lines.push(format!("ИТОГО: {} ₽", total));
    lines.push(format!("Наличными: {} ₽", payment.paid_cash));
    lines.push(format!("Бонусами:  {} ₽", payment.paid_bonus));
    lines.push("=================".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_exact_format() {
        let mut cart = Cart::new();
        cart.add(Item::unit_good("A", Money::new(dec!(10))), dec!(2), true)
            .unwrap();
        cart.add(Item::weighted_good("B", Money::new(dec!(5))), dec!(3), true)
            .unwrap();

        let total = Money::new(dec!(35.00));
        let payment = PaymentResult {
            paid_cash: total,
            paid_bonus: Money::zero(),
        };
        let at = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(12, 30, 45)
            .unwrap();

        let text = render(&cart, total, &payment, at);
        let expected = "\
====== ЧЕК ======
Дата: 2025-03-14 12:30:45

1. A — 2 — 20.00 ₽
2. B — 3 — 15.00 ₽

ИТОГО: 35.00 ₽
Наличными: 35.00 ₽
Бонусами:  0.00 ₽
=================";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_fractional_weight_line() {
        let mut cart = Cart::new();
        cart.add(
            Item::weighted_good("Кабель", Money::new(dec!(1200.0))),
            dec!(0.5),
            true,
        )
        .unwrap();

        let total = cart.total().round2();
        let payment = PaymentResult {
            paid_cash: Money::zero(),
            paid_bonus: total,
        };
        let at = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let text = render(&cart, total, &payment, at);
        assert!(text.contains("1. Кабель — 0.5 — 600.00 ₽"));
        assert!(text.contains("ИТОГО: 600.00 ₽"));
        assert!(text.contains("Бонусами:  600.00 ₽"));
    }
}
