//! # kassa-core: Pure Checkout Logic for Kassa
//!
//! This crate is the **heart** of Kassa. It contains the whole checkout
//! pipeline as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kassa Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/terminal (console register)               │   │
//! │  │    Catalog ──► Cart UI ──► Weigh UI ──► Pay UI ──► Receipt     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ direct calls                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kassa-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   item    │  │   cart    │  │ customer  │  │  payment  │  │   │
//! │  │   │ ItemKind  │  │ CartEntry │  │  ledger   │  │ strategies│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   money   │  │ checkout  │  │  receipt  │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • SINGLE ROUNDING POINT                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Decimal money type, rounded once at totaling
//! - [`item`] - Priced entities (unit goods, weighted goods, services)
//! - [`cart`] - Line entries, weighing lifecycle, totaling
//! - [`customer`] - Cash/bonus ledger and purchase history
//! - [`payment`] - Settlement strategies (cash, bonus, mixed)
//! - [`checkout`] - The pipeline: validate → total → pay → receipt
//! - [`receipt`] - Transaction record and its fixed text format
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same cart + same ledger = same receipt
//! 2. **No I/O**: console, file system and network live in the app crate
//! 3. **Decimal Money**: exact arithmetic, one rounding point at totaling
//! 4. **Explicit Errors**: all errors are typed variants, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use kassa_core::{Cart, CheckoutService, Customer, Item, Money, PaymentStrategy};
//! use rust_decimal::Decimal;
//!
//! let mut customer = Customer::new(
//!     "Покупатель",
//!     Money::new(Decimal::new(10000, 2)), // 100.00
//!     Money::zero(),
//! );
//!
//! let mut cart = Cart::new();
//! cart.add(
//!     Item::unit_good("Мышь", Money::new(Decimal::new(3500, 2))), // 35.00
//!     Decimal::ONE,
//!     true,
//! )?;
//!
//! let receipt = CheckoutService::new().checkout(
//!     &mut customer,
//!     &cart,
//!     PaymentStrategy::CashOnly,
//! )?;
//!
//! assert!(receipt.text.contains("ИТОГО: 35.00 ₽"));
//! assert_eq!(customer.purchase_history().len(), 1);
//! cart.clear();
//! # Ok::<(), kassa_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod customer;
pub mod error;
pub mod item;
pub mod money;
pub mod payment;
pub mod receipt;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kassa_core::Cart` instead of
// `use kassa_core::cart::Cart`

pub use cart::{Cart, CartEntry};
pub use checkout::CheckoutService;
pub use customer::Customer;
pub use error::{CoreError, CoreResult, PaymentFailure};
pub use item::{Item, ItemKind};
pub use money::Money;
pub use payment::{PaymentResult, PaymentStrategy};
pub use receipt::Receipt;
