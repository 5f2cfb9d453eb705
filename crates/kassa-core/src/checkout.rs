//! # Checkout Service
//!
//! Orchestrates validation, totaling, payment and receipt synthesis.
//!
//! ## Checkout Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Pipeline                                    │
//! │                                                                         │
//! │   Idle ──► Validating ─────► Paying ─────► Receipted                   │
//! │               │                 │                                       │
//! │               │ EmptyCart       │ CheckoutFailed                        │
//! │               │ Unweighed-      │   (reason code +                      │
//! │               │ ItemsPresent    │    original message)                  │
//! │               │ InvalidTotal    │                                       │
//! │               ▼                 ▼                                       │
//! │             abort             abort                                     │
//! │                                                                         │
//! │  Side effects are confined to the Paying step (balance debits) and     │
//! │  the Receipted step (history append). A failure in any earlier step    │
//! │  leaves customer and cart exactly as they were.                        │
//! │                                                                         │
//! │  The cart itself is NEVER mutated here; clearing it after a            │
//! │  successful checkout is the caller's responsibility.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Local, NaiveDateTime};

use crate::cart::Cart;
use crate::customer::Customer;
use crate::error::{CoreError, CoreResult};
use crate::payment::PaymentStrategy;
use crate::receipt;
use crate::receipt::Receipt;

/// The checkout orchestrator.
///
/// Stateless; every call gets the session state passed in explicitly,
/// which keeps the pipeline testable without any interactive loop around
/// it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckoutService;

impl CheckoutService {
    /// Creates a checkout service.
    pub fn new() -> Self {
        CheckoutService
    }

    /// Runs the checkout pipeline, stamping the receipt with the current
    /// local time.
    pub fn checkout(
        &self,
        customer: &mut Customer,
        cart: &Cart,
        strategy: PaymentStrategy,
    ) -> CoreResult<Receipt> {
        self.checkout_at(customer, cart, strategy, Local::now().naive_local())
    }

    /// Runs the checkout pipeline with an explicit receipt timestamp.
    ///
    /// ## Errors
    /// - [`CoreError::EmptyCart`] if the cart has zero entries
    /// - [`CoreError::UnweighedItemsPresent`] if a weight-priced entry is
    ///   still unweighed
    /// - [`CoreError::InvalidTotal`] if the rounded total is ≤ 0
    /// - [`CoreError::CheckoutFailed`] for any payment-stage failure; the
    ///   original message is carried along with a structured
    ///   [`PaymentFailure`](crate::error::PaymentFailure) code
    pub fn checkout_at(
        &self,
        customer: &mut Customer,
        cart: &Cart,
        strategy: PaymentStrategy,
        at: NaiveDateTime,
    ) -> CoreResult<Receipt> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        if cart.has_unweighed_items() {
            return Err(CoreError::UnweighedItemsPresent);
        }

        // The single rounding point: line costs stay exact until here.
        let total = cart.total().round2();
        if !total.is_positive() {
            return Err(CoreError::InvalidTotal { total });
        }

        let payment = strategy
            .pay(customer, total)
            .map_err(|err| CoreError::CheckoutFailed {
                reason: err.payment_failure(),
                message: err.to_string(),
            })?;

        let text = receipt::render(cart, total, &payment, at);
        customer.add_purchase(text.clone());

        Ok(Receipt {
            text,
            total,
            payment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaymentFailure;
    use crate::item::Item;
    use crate::money::Money;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn customer(cash: Decimal, bonus: Decimal) -> Customer {
        Customer::new("Покупатель", Money::new(cash), Money::new(bonus))
    }

    #[test]
    fn test_empty_cart_aborts_without_side_effects() {
        let mut c = customer(dec!(100), dec!(30));
        let cart = Cart::new();

        let err = CheckoutService::new()
            .checkout_at(&mut c, &cart, PaymentStrategy::CashOnly, at())
            .unwrap_err();

        assert!(matches!(err, CoreError::EmptyCart));
        assert_eq!(c.cash(), Money::new(dec!(100)));
        assert!(c.purchase_history().is_empty());
    }

    #[test]
    fn test_unweighed_items_abort_without_side_effects() {
        let mut c = customer(dec!(100), dec!(30));
        let mut cart = Cart::new();
        cart.add(
            Item::weighted_good("Кабель", Money::new(dec!(1200.0))),
            dec!(0.1),
            false,
        )
        .unwrap();

        let err = CheckoutService::new()
            .checkout_at(&mut c, &cart, PaymentStrategy::CashOnly, at())
            .unwrap_err();

        assert!(matches!(err, CoreError::UnweighedItemsPresent));
        assert_eq!(c.cash(), Money::new(dec!(100)));
        assert!(c.purchase_history().is_empty());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_zero_priced_cart_is_invalid_total() {
        let mut c = customer(dec!(100), dec!(0));
        let mut cart = Cart::new();
        cart.add(Item::service("Акция", Money::zero()), dec!(1), true)
            .unwrap();

        let err = CheckoutService::new()
            .checkout_at(&mut c, &cart, PaymentStrategy::CashOnly, at())
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidTotal { .. }));
    }

    #[test]
    fn test_payment_failure_collapsed_with_reason_and_message() {
        let mut c = customer(dec!(10), dec!(0));
        let mut cart = Cart::new();
        cart.add(Item::unit_good("Мышь", Money::new(dec!(1499.0))), dec!(1), true)
            .unwrap();

        let err = CheckoutService::new()
            .checkout_at(&mut c, &cart, PaymentStrategy::CashOnly, at())
            .unwrap_err();

        match err {
            CoreError::CheckoutFailed { reason, message } => {
                assert_eq!(reason, PaymentFailure::InsufficientFunds);
                assert_eq!(message, "Недостаточно наличных");
            }
            other => panic!("expected CheckoutFailed, got {other:?}"),
        }

        // Balances and history untouched
        assert_eq!(c.cash(), Money::new(dec!(10)));
        assert!(c.purchase_history().is_empty());
    }

    #[test]
    fn test_end_to_end_cash_checkout() {
        // Cart: UnitGood "A" price 10 × 2, WeightedGood "B" 5/kg weighed to 3 kg
        let mut c = customer(dec!(100), dec!(0));
        let mut cart = Cart::new();
        cart.add(Item::unit_good("A", Money::new(dec!(10))), dec!(2), true)
            .unwrap();
        cart.add(Item::weighted_good("B", Money::new(dec!(5))), dec!(0.1), false)
            .unwrap();
        cart.weigh(1, dec!(3)).unwrap();

        let receipt = CheckoutService::new()
            .checkout_at(&mut c, &cart, PaymentStrategy::CashOnly, at())
            .unwrap();

        assert_eq!(receipt.total, Money::new(dec!(35.00)));
        assert_eq!(receipt.payment.paid_cash, Money::new(dec!(35.00)));
        assert_eq!(receipt.payment.paid_bonus, Money::zero());
        assert!(receipt.text.contains("ИТОГО: 35.00 ₽"));

        assert_eq!(c.cash(), Money::new(dec!(65.00)));
        assert_eq!(c.purchase_history().len(), 1);
        assert_eq!(c.purchase_history()[0], receipt.text);

        // Checkout never mutates the cart
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_mixed_checkout_records_split() {
        let mut c = customer(dec!(1000), dec!(30));
        let mut cart = Cart::new();
        cart.add(Item::unit_good("A", Money::new(dec!(50))), dec!(2), true)
            .unwrap();

        let receipt = CheckoutService::new()
            .checkout_at(
                &mut c,
                &cart,
                PaymentStrategy::mixed(Money::new(dec!(50))),
                at(),
            )
            .unwrap();

        assert_eq!(receipt.payment.paid_bonus, Money::new(dec!(30)));
        assert_eq!(receipt.payment.paid_cash, Money::new(dec!(70)));
        assert!(receipt.text.contains("Наличными: 70.00 ₽"));
        assert!(receipt.text.contains("Бонусами:  30.00 ₽"));
    }

    #[test]
    fn test_total_rounds_half_to_even_at_totaling() {
        // 3 × 11.115 = 33.345 → rounds to 33.34 at the totaling step
        let mut c = customer(dec!(100), dec!(0));
        let mut cart = Cart::new();
        cart.add(Item::unit_good("A", Money::new(dec!(11.115))), dec!(3), true)
            .unwrap();

        let receipt = CheckoutService::new()
            .checkout_at(&mut c, &cart, PaymentStrategy::CashOnly, at())
            .unwrap();

        assert_eq!(receipt.total, Money::new(dec!(33.34)));
        assert_eq!(c.cash(), Money::new(dec!(100)) - Money::new(dec!(33.34)));
    }
}
