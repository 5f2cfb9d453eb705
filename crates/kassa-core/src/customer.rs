//! # Customer Ledger
//!
//! Holds the customer's cash and bonus-point balances plus the purchase
//! history. The debit methods here are the ONLY mutators of the balances;
//! no overdraft is ever permitted.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// A store customer and their session-long ledger.
///
/// Balances only ever decrease (via [`pay_cash`](Customer::pay_cash) /
/// [`pay_bonus`](Customer::pay_bonus)); the history only ever grows (via
/// [`add_purchase`](Customer::add_purchase)).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Customer display name.
    pub name: String,

    /// Cash balance. Never negative.
    cash: Money,

    /// Bonus-point balance, denominated in rubles. Never negative.
    bonus_points: Money,

    /// Receipt texts of completed purchases, oldest first.
    purchase_history: Vec<String>,
}

impl Customer {
    /// Creates a customer with starting balances and empty history.
    pub fn new(name: impl Into<String>, cash: Money, bonus_points: Money) -> Self {
        Customer {
            name: name.into(),
            cash,
            bonus_points,
            purchase_history: Vec::new(),
        }
    }

    /// Current cash balance.
    #[inline]
    pub fn cash(&self) -> Money {
        self.cash
    }

    /// Current bonus-point balance.
    #[inline]
    pub fn bonus_points(&self) -> Money {
        self.bonus_points
    }

    /// Completed-purchase receipts, oldest first.
    pub fn purchase_history(&self) -> &[String] {
        &self.purchase_history
    }

    /// Whether the cash balance covers `amount`. Pure, no mutation.
    #[inline]
    pub fn can_pay_cash(&self, amount: Money) -> bool {
        self.cash >= amount
    }

    /// Whether the bonus balance covers `amount`. Pure, no mutation.
    #[inline]
    pub fn can_pay_bonus(&self, amount: Money) -> bool {
        self.bonus_points >= amount
    }

    /// Debits the cash balance by exactly `amount`.
    ///
    /// ## Errors
    /// - [`CoreError::NegativeAmount`] if `amount < 0`
    /// - [`CoreError::InsufficientFunds`] if the balance is short; the
    ///   balance is left untouched
    pub fn pay_cash(&mut self, amount: Money) -> CoreResult<()> {
        if amount.is_negative() {
            return Err(CoreError::NegativeAmount { amount });
        }
        if self.cash < amount {
            return Err(CoreError::InsufficientFunds {
                required: amount,
                available: self.cash,
            });
        }
        self.cash -= amount;
        Ok(())
    }

    /// Debits the bonus-point balance by exactly `amount`.
    ///
    /// ## Errors
    /// - [`CoreError::NegativeAmount`] if `amount < 0`
    /// - [`CoreError::InsufficientBonus`] if the balance is short; the
    ///   balance is left untouched
    pub fn pay_bonus(&mut self, amount: Money) -> CoreResult<()> {
        if amount.is_negative() {
            return Err(CoreError::NegativeAmount { amount });
        }
        if self.bonus_points < amount {
            return Err(CoreError::InsufficientBonus {
                required: amount,
                available: self.bonus_points,
            });
        }
        self.bonus_points -= amount;
        Ok(())
    }

    /// Appends a receipt to the purchase history. Never fails.
    pub fn add_purchase(&mut self, receipt_text: impl Into<String>) {
        self.purchase_history.push(receipt_text.into());
    }
}
