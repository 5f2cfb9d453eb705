//! # Item Types
//!
//! Priced entities sold at the register.
//!
//! ## Variant Set
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          ItemKind                                       │
//! │                                                                         │
//! │  UnitGood       priced per unit        quantity known at add time      │
//! │  WeightedGood   priced per kilogram    quantity set by a weighing step │
//! │  Service        flat fee               quantity known at add time      │
//! │                                                                         │
//! │  cost(quantity) = unit_price × quantity  for ALL variants.             │
//! │  The kind only decides whether a weighing step is required.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The "does this item need weighing" question is answered in exactly one
//! place: [`ItemKind::requires_weighing`]. Cart logic queries the flag
//! instead of inspecting variants at every call site.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// The closed set of item variants.
///
/// No open-ended extension is required, so this is an enum rather than a
/// trait object hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A good priced per unit.
    UnitGood,
    /// A good priced per kilogram; must be weighed before checkout.
    WeightedGood,
    /// A flat-fee service.
    Service,
}

impl ItemKind {
    /// Whether a quantity for this kind must be established by an explicit
    /// weighing step before checkout.
    #[inline]
    pub const fn requires_weighing(&self) -> bool {
        matches!(self, ItemKind::WeightedGood)
    }
}

/// A priced catalog entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name shown at the register and on the receipt.
    pub name: String,

    /// Price per unit (or per kilogram for weighted goods).
    pub unit_price: Money,

    /// Which variant this item is.
    pub kind: ItemKind,
}

impl Item {
    /// Creates a unit-priced good.
    pub fn unit_good(name: impl Into<String>, unit_price: Money) -> Self {
        Item {
            name: name.into(),
            unit_price,
            kind: ItemKind::UnitGood,
        }
    }

    /// Creates a weight-priced good (`unit_price` is per kilogram).
    pub fn weighted_good(name: impl Into<String>, price_per_kg: Money) -> Self {
        Item {
            name: name.into(),
            unit_price: price_per_kg,
            kind: ItemKind::WeightedGood,
        }
    }

    /// Creates a flat-fee service.
    pub fn service(name: impl Into<String>, fee: Money) -> Self {
        Item {
            name: name.into(),
            unit_price: fee,
            kind: ItemKind::Service,
        }
    }

    /// Cost of `quantity` units (or kilograms) of this item.
    ///
    /// Linear for every variant; quantities may be fractional.
    #[inline]
    pub fn cost(&self, quantity: Decimal) -> Money {
        self.unit_price * quantity
    }

    /// Whether this item must be weighed before checkout.
    #[inline]
    pub fn requires_weighing(&self) -> bool {
        self.kind.requires_weighing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cost_is_linear_for_all_kinds() {
        let phone = Item::unit_good("Смартфон", Money::new(dec!(24999.0)));
        assert_eq!(phone.cost(dec!(2)), Money::new(dec!(49998.0)));

        let cable = Item::weighted_good("Кабель", Money::new(dec!(1200.0)));
        assert_eq!(cable.cost(dec!(0.5)), Money::new(dec!(600.0)));

        let delivery = Item::service("Доставка", Money::new(dec!(900.0)));
        assert_eq!(delivery.cost(dec!(1)), Money::new(dec!(900.0)));
    }

    #[test]
    fn test_cost_with_fractional_weight() {
        let paste = Item::weighted_good("Термопаста", Money::new(dec!(15000.0)));
        assert_eq!(paste.cost(dec!(0.125)), Money::new(dec!(1875.0)));
    }

    #[test]
    fn test_only_weighted_goods_require_weighing() {
        assert!(!ItemKind::UnitGood.requires_weighing());
        assert!(ItemKind::WeightedGood.requires_weighing());
        assert!(!ItemKind::Service.requires_weighing());

        let cable = Item::weighted_good("Кабель", Money::new(dec!(1200.0)));
        assert!(cable.requires_weighing());
    }
}
