//! # Cart
//!
//! The ordered collection of line entries being assembled for checkout.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Register Action            Cart Method            State Change        │
//! │  ───────────────            ───────────            ────────────        │
//! │                                                                         │
//! │  Pick catalog item ───────► add() ───────────────► entries.push(..)   │
//! │                                                                         │
//! │  Put item on scale ───────► weigh() ─────────────► quantity = weight  │
//! │                                                     weighed = true     │
//! │                                                                         │
//! │  Remove a line ───────────► remove() ────────────► entries.remove(i)  │
//! │                                                                         │
//! │  Show totals ─────────────► total() ─────────────► (read only)        │
//! │                                                                         │
//! │  After checkout ──────────► clear() ─────────────► entries.clear()    │
//! │                                                                         │
//! │  NOTE: entries are addressed by index; indices are re-evaluated        │
//! │        fresh on each call and are NOT stable across removals.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::item::Item;
use crate::money::Money;

/// One line in the cart.
///
/// ## Design Notes
/// - `item` is a snapshot: the cart displays and prices consistent data even
///   if the catalog changes after the line was added
/// - `weighed` is always `true` for kinds that need no weighing step; for
///   weight-priced goods it stays `false` until [`Cart::weigh`] runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Item snapshot frozen at add time.
    pub item: Item,

    /// Quantity in units, or weight in kilograms. Always > 0.
    pub quantity: Decimal,

    /// Whether the quantity is authoritative.
    pub weighed: bool,
}

impl CartEntry {
    /// Cost of this line (unit price × quantity).
    #[inline]
    pub fn cost(&self) -> Money {
        self.item.cost(self.quantity)
    }

    /// True iff this line still needs a weighing step.
    #[inline]
    pub fn needs_weighing(&self) -> bool {
        self.item.requires_weighing() && !self.weighed
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Insertion order is preserved; the index is the addressing scheme
/// - No entry has quantity ≤ 0
/// - Non-weighable entries always have `weighed == true`
///
/// Checkout never mutates the cart; the caller clears it after a
/// successful checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            entries: Vec::new(),
        }
    }

    /// Read access to the entries, in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of lines in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds an item to the cart.
    ///
    /// For weight-priced goods the caller-supplied `weighed` hint is
    /// honored, which allows deferring the real weight by passing a
    /// placeholder quantity and `weighed = false`. For every other kind
    /// the flag is forced `true`: the quantity is authoritative at add
    /// time and no weighing step exists.
    ///
    /// ## Errors
    /// [`CoreError::InvalidQuantity`] if `quantity ≤ 0`; the cart is left
    /// unchanged.
    pub fn add(&mut self, item: Item, quantity: Decimal, weighed: bool) -> CoreResult<()> {
        if quantity <= Decimal::ZERO {
            return Err(CoreError::InvalidQuantity { quantity });
        }

        let weighed = if item.requires_weighing() {
            weighed
        } else {
            true
        };

        self.entries.push(CartEntry {
            item,
            quantity,
            weighed,
        });
        Ok(())
    }

    /// Removes the entry at `index`.
    ///
    /// ## Errors
    /// [`CoreError::IndexOutOfRange`] if `index` is not a valid current
    /// position.
    pub fn remove(&mut self, index: usize) -> CoreResult<()> {
        if index >= self.entries.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.entries.remove(index);
        Ok(())
    }

    /// Records the scale reading for the entry at `index`.
    ///
    /// On success the entry's quantity becomes `weight` and the line is
    /// marked weighed.
    ///
    /// ## Errors
    /// - [`CoreError::IndexOutOfRange`] for a bad index
    /// - [`CoreError::InvalidWeight`] if `weight ≤ 0`
    /// - [`CoreError::NotWeighable`] if the entry's item is not a
    ///   weight-priced good (quantity is left unchanged)
    pub fn weigh(&mut self, index: usize, weight: Decimal) -> CoreResult<()> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })?;

        if weight <= Decimal::ZERO {
            return Err(CoreError::InvalidWeight { weight });
        }

        if !entry.item.requires_weighing() {
            return Err(CoreError::NotWeighable {
                name: entry.item.name.clone(),
            });
        }

        entry.quantity = weight;
        entry.weighed = true;
        Ok(())
    }

    /// Sum of all line costs. Pure; repeated calls see the same result.
    ///
    /// Not rounded here: the checkout service rounds once at totaling.
    pub fn total(&self) -> Money {
        self.entries
            .iter()
            .fold(Money::zero(), |acc, entry| acc + entry.cost())
    }

    /// True iff any weight-priced entry still awaits its weighing step.
    pub fn has_unweighed_items(&self) -> bool {
        self.entries.iter().any(CartEntry::needs_weighing)
    }

    /// Empties the cart. Called by the session after a successful checkout.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
