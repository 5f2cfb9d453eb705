//! # Catalog
//!
//! The fixed list of items sold by the store. Addressed by 1-based
//! position at the prompt, 0-based internally.

use rust_decimal_macros::dec;

use kassa_core::{Item, Money};

/// The store catalog, in display order.
pub fn catalog() -> Vec<Item> {
    vec![
        // Unit-priced goods
        Item::unit_good("Смартфон", Money::new(dec!(24999.0))),
        Item::unit_good("Ноутбук", Money::new(dec!(69999.0))),
        Item::unit_good("Монитор 27\"", Money::new(dec!(17999.0))),
        Item::unit_good("Клавиатура", Money::new(dec!(2999.0))),
        Item::unit_good("Мышь", Money::new(dec!(1499.0))),
        Item::unit_good("Наушники", Money::new(dec!(4999.0))),
        // Weight-priced goods
        Item::weighted_good("Кабель (на отрез, кг)", Money::new(dec!(1200.0))),
        Item::weighted_good("Термопаста (на отрез, кг)", Money::new(dec!(15000.0))),
        // Services
        Item::service("Доставка", Money::new(dec!(900.0))),
        Item::service("Настройка ноутбука", Money::new(dec!(1500.0))),
        Item::service("Расширенная гарантия", Money::new(dec!(3500.0))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let items = catalog();
        assert_eq!(items.len(), 11);

        let weighted: Vec<_> = items.iter().filter(|i| i.requires_weighing()).collect();
        assert_eq!(weighted.len(), 2);
        assert!(weighted.iter().all(|i| i.name.contains("на отрез")));
    }
}
