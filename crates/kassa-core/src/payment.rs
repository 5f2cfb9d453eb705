//! # Payment Settlement
//!
//! Settlement policies for a checkout total.
//!
//! ## Settlement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Payment Settlement                                   │
//! │                                                                         │
//! │  CheckoutService ──► PaymentStrategy::pay(customer, total)             │
//! │                                │                                        │
//! │          ┌─────────────────────┼──────────────────────┐                │
//! │          ▼                     ▼                      ▼                │
//! │      CashOnly              BonusOnly               Mixed               │
//! │      debit cash            debit bonus       clamp bonus share,       │
//! │      (total, 0)            (0, total)        check BOTH balances,     │
//! │                                              then debit BOTH          │
//! │                                                                        │
//! │  Invariant: paid_cash + paid_bonus == total, exactly.                  │
//! │  Mixed is all-or-nothing: a failed settlement debits NOTHING.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// How a completed payment was split between the two balances.
///
/// Produced once per successful settlement; `paid_cash + paid_bonus`
/// equals the checkout total exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResult {
    /// Share debited from the cash balance.
    pub paid_cash: Money,

    /// Share debited from the bonus-point balance.
    pub paid_bonus: Money,
}

/// The closed set of settlement policies.
///
/// No open-ended extension is required, so this is an enum with a `pay`
/// method rather than a trait object hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStrategy {
    /// The whole total from the cash balance.
    CashOnly,
    /// The whole total from the bonus-point balance.
    BonusOnly,
    /// Up to `bonus_to_use` from bonus points, remainder from cash.
    Mixed {
        /// Requested bonus share. Clamped to ≥ 0 at construction.
        bonus_to_use: Money,
    },
}

impl PaymentStrategy {
    /// Creates a mixed strategy, clamping the requested bonus share to zero
    /// or above.
    pub fn mixed(bonus_to_use: Money) -> Self {
        PaymentStrategy::Mixed {
            bonus_to_use: bonus_to_use.max(Money::zero()),
        }
    }

    /// Settles `total` against the customer's ledger.
    ///
    /// The caller (the checkout service) guarantees `total > 0`.
    ///
    /// ## Errors
    /// Balance-insufficiency errors from the ledger. For `Mixed`, both
    /// balances are checked before either is debited: a failure performs
    /// no debit at all.
    pub fn pay(&self, customer: &mut Customer, total: Money) -> CoreResult<PaymentResult> {
        match *self {
            PaymentStrategy::CashOnly => {
                customer.pay_cash(total)?;
                Ok(PaymentResult {
                    paid_cash: total,
                    paid_bonus: Money::zero(),
                })
            }
            PaymentStrategy::BonusOnly => {
                customer.pay_bonus(total)?;
                Ok(PaymentResult {
                    paid_cash: Money::zero(),
                    paid_bonus: total,
                })
            }
            PaymentStrategy::Mixed { bonus_to_use } => {
                let bonus_used = bonus_to_use.min(total).min(customer.bonus_points());
                let cash_due = total - bonus_used;

                // Affordability must be known before either balance moves.
                if !customer.can_pay_cash(cash_due) {
                    return Err(CoreError::InsufficientFunds {
                        required: cash_due,
                        available: customer.cash(),
                    });
                }

                // Both checks passed: bonus_used ≤ bonus_points by the
                // clamp above, cash_due ≤ cash by the check above.
                customer.pay_bonus(bonus_used)?;
                customer.pay_cash(cash_due)?;

                Ok(PaymentResult {
                    paid_cash: cash_due,
                    paid_bonus: bonus_used,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(v: &str) -> Money {
        Money::new(v.parse().unwrap())
    }

    #[test]
    fn test_cash_only() {
        let mut c = Customer::new("Покупатель", money("100"), money("30"));
        let result = PaymentStrategy::CashOnly.pay(&mut c, money("35")).unwrap();

        assert_eq!(result.paid_cash, money("35"));
        assert_eq!(result.paid_bonus, Money::zero());
        assert_eq!(c.cash(), money("65"));
        assert_eq!(c.bonus_points(), money("30"));
    }

    #[test]
    fn test_bonus_only() {
        let mut c = Customer::new("Покупатель", money("100"), money("30"));
        let result = PaymentStrategy::BonusOnly.pay(&mut c, money("30")).unwrap();

        assert_eq!(result.paid_cash, Money::zero());
        assert_eq!(result.paid_bonus, money("30"));
        assert_eq!(c.bonus_points(), Money::zero());
    }

    #[test]
    fn test_bonus_only_insufficient() {
        let mut c = Customer::new("Покупатель", money("100"), money("30"));
        let err = PaymentStrategy::BonusOnly
            .pay(&mut c, money("31"))
            .unwrap_err();
        assert!(matches!(err, CoreError::InsufficientBonus { .. }));
        assert_eq!(c.bonus_points(), money("30"));
    }

    #[test]
    fn test_mixed_clamps_requested_bonus_at_construction() {
        let strategy = PaymentStrategy::mixed(Money::new(dec!(-50)));
        assert_eq!(
            strategy,
            PaymentStrategy::Mixed {
                bonus_to_use: Money::zero()
            }
        );
    }

    #[test]
    fn test_mixed_uses_min_of_request_total_and_balance() {
        // total=100, bonus_points=30, cash=1000, requested=50
        // → bonus_used=30, cash_due=70
        let mut c = Customer::new("Покупатель", money("1000"), money("30"));
        let result = PaymentStrategy::mixed(money("50"))
            .pay(&mut c, money("100"))
            .unwrap();

        assert_eq!(result.paid_bonus, money("30"));
        assert_eq!(result.paid_cash, money("70"));
        assert_eq!(c.bonus_points(), Money::zero());
        assert_eq!(c.cash(), money("930"));
    }

    #[test]
    fn test_mixed_split_sums_to_total() {
        let mut c = Customer::new("Покупатель", money("1000"), money("30"));
        let total = money("100");
        let result = PaymentStrategy::mixed(money("50")).pay(&mut c, total).unwrap();
        assert_eq!(result.paid_cash + result.paid_bonus, total);
    }

    #[test]
    fn test_mixed_is_atomic_on_cash_shortfall() {
        // total=100, bonus_points=100, cash=0, requested clamped to 0
        // → cash_due=100 > cash=0 → fail with NO debit on either balance
        let mut c = Customer::new("Покупатель", money("0"), money("100"));
        let err = PaymentStrategy::mixed(money("-10"))
            .pay(&mut c, money("100"))
            .unwrap_err();

        assert!(matches!(err, CoreError::InsufficientFunds { .. }));
        assert_eq!(c.bonus_points(), money("100"));
        assert_eq!(c.cash(), money("0"));
    }
}
