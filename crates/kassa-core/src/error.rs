//! # Error Types
//!
//! Domain-specific error types for kassa-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  Cart / Customer errors          surfaced immediately to the caller    │
//! │  ├── InvalidQuantity                                                    │
//! │  ├── IndexOutOfRange                                                    │
//! │  ├── InvalidWeight / NotWeighable                                       │
//! │  └── NegativeAmount / Insufficient*                                     │
//! │                                                                         │
//! │  CheckoutService                                                        │
//! │  ├── EmptyCart / UnweighedItemsPresent / InvalidTotal                   │
//! │  └── CheckoutFailed ◄── any payment-stage failure, collapsed into      │
//! │                         one variant carrying the original message      │
//! │                         AND a structured reason code                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (amounts, indices, item names)
//! 3. Errors are enum variants, never String
//! 4. Display messages are the user-facing register text (Russian), because
//!    the session loop prints them verbatim

use rust_decimal::Decimal;
use thiserror::Error;

use crate::money::Money;

/// Core business logic errors.
///
/// All errors are recoverable: the session loop catches them, shows the
/// message and continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Quantity passed to [`Cart::add`](crate::cart::Cart::add) was zero or negative.
    #[error("Количество/вес должно быть больше 0")]
    InvalidQuantity { quantity: Decimal },

    /// Index does not address a current cart position.
    ///
    /// Indices are re-evaluated fresh on every call; removing an entry
    /// shifts everything after it.
    #[error("Нет товара с таким номером")]
    IndexOutOfRange { index: usize, len: usize },

    /// Weight passed to [`Cart::weigh`](crate::cart::Cart::weigh) was zero or negative.
    #[error("Вес должен быть больше 0")]
    InvalidWeight { weight: Decimal },

    /// The addressed entry is not a weight-priced good.
    #[error("Этот товар не нужно взвешивать")]
    NotWeighable { name: String },

    /// A debit was attempted with a negative amount.
    #[error("Сумма не может быть отрицательной")]
    NegativeAmount { amount: Money },

    /// Cash balance is smaller than the requested debit.
    #[error("Недостаточно наличных")]
    InsufficientFunds { required: Money, available: Money },

    /// Bonus-point balance is smaller than the requested debit.
    #[error("Недостаточно бонусов")]
    InsufficientBonus { required: Money, available: Money },

    /// Checkout was attempted on a cart with zero entries.
    #[error("Корзина пуста")]
    EmptyCart,

    /// Checkout was attempted while a weight-priced entry is still unweighed.
    #[error("Есть товары, которые не взвешены")]
    UnweighedItemsPresent,

    /// The rounded cart total came out non-positive.
    #[error("Сумма покупки некорректна")]
    InvalidTotal { total: Money },

    /// A payment-stage failure, collapsed by the checkout service.
    ///
    /// `message` is the original error text; `reason` is the structured
    /// code callers should match on instead of the message.
    #[error("Оплата не прошла: {message}")]
    CheckoutFailed {
        reason: PaymentFailure,
        message: String,
    },
}

/// Structured reason code carried by [`CoreError::CheckoutFailed`].
///
/// The session loop uses this to decide whether removing items from the
/// cart can make the purchase affordable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentFailure {
    /// Not enough cash for the cash share of the payment.
    InsufficientFunds,
    /// Not enough bonus points for the bonus share.
    InsufficientBonus,
    /// Any other payment-stage failure.
    Other,
}

impl CoreError {
    /// Maps a payment-stage error onto its structured failure code.
    pub(crate) fn payment_failure(&self) -> PaymentFailure {
        match self {
            CoreError::InsufficientFunds { .. } => PaymentFailure::InsufficientFunds,
            CoreError::InsufficientBonus { .. } => PaymentFailure::InsufficientBonus,
            _ => PaymentFailure::Other,
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
