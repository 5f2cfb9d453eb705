//! # Session
//!
//! The interactive register loop.
//!
//! ## Menu Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Session Loop                                     │
//! │                                                                         │
//! │  1 Каталог ────────────► browse / search, grouped by category          │
//! │  2 Добавить ───────────► Cart::add (weigh now or defer for weighted)   │
//! │  3 Показать корзину ───► lines + [НЕ ВЗВЕШЕНО] markers + total         │
//! │  4 Взвесить ───────────► Cart::weigh                                   │
//! │  5 Удалить ────────────► Cart::remove                                  │
//! │  6 Оплатить ───────────► weigh-before-pay loop, strategy choice,       │
//! │                          CheckoutService::checkout, receipt print,     │
//! │                          ReceiptStore::save, cart cleared              │
//! │  7 История ────────────► customer.purchase_history()                   │
//! │  0 Выход                                                               │
//! │                                                                         │
//! │  Every domain error is recoverable: it is printed and the loop         │
//! │  continues. Indices are 1-based at the prompt, 0-based internally.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{info, warn};

use kassa_core::{
    Cart, CheckoutService, CoreError, Customer, Item, Money, PaymentFailure, PaymentStrategy,
};

use crate::catalog;
use crate::config::TerminalConfig;
use crate::receipt_store::ReceiptStore;

/// Placeholder weight for weighted goods added before the scale is used.
/// Never reaches checkout: the entry stays flagged unweighed until a real
/// weight overwrites it.
const PLACEHOLDER_WEIGHT_KG: Decimal = dec!(0.1);

/// One interactive register session: the catalog, the cart, the customer
/// ledger and the receipt log, driven by a menu loop.
pub struct Session {
    catalog: Vec<Item>,
    cart: Cart,
    customer: Customer,
    store: ReceiptStore,
    checkout: CheckoutService,
}

impl Session {
    /// Builds a session from the terminal configuration.
    pub fn new(config: &TerminalConfig) -> Self {
        Session {
            catalog: catalog::catalog(),
            cart: Cart::new(),
            customer: Customer::new(
                config.customer_name.clone(),
                config.starting_cash,
                config.starting_bonus,
            ),
            store: ReceiptStore::new(&config.receipts_path),
            checkout: CheckoutService::new(),
        }
    }

    /// Runs the menu loop until the customer exits or stdin closes.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_header();
            self.print_menu();
            let choice = prompt("Выбери пункт: ")?;

            match choice.as_str() {
                "1" => self.catalog_menu()?,
                "2" => self.add_to_cart()?,
                "3" => self.show_cart(),
                "4" => self.weigh_item()?,
                "5" => self.remove_from_cart()?,
                "6" => self.pay()?,
                "7" => self.show_purchases(),
                "0" => {
                    println!("Выход.");
                    return Ok(());
                }
                _ => println!("Неизвестная команда."),
            }

            prompt("\nНажми Enter, чтобы продолжить...")?;
        }
    }

    // ---------- UI ----------

    fn print_header(&self) {
        println!("\n==============================");
        println!("   МАГАЗИН ТЕХНИКИ (консоль)");
        println!("==============================");
        println!("Покупатель: {}", self.customer.name);
        println!(
            "Наличные: {} ₽ | Бонусы: {}",
            self.customer.cash(),
            self.customer.bonus_points()
        );
        println!(
            "Корзина: {} поз. | Сумма: {} ₽",
            self.cart.len(),
            self.cart.total()
        );
        println!("==============================\n");
    }

    fn print_menu(&self) {
        println!("1 — Каталог (просмотр/поиск)");
        println!("2 — Добавить в корзину");
        println!("3 — Показать корзину");
        println!("4 — Взвесить товар в корзине");
        println!("5 — Удалить из корзины");
        println!("6 — Оплатить");
        println!("7 — История покупок");
        println!("0 — Выход");
    }

    // ---------- Catalog ----------

    fn catalog_menu(&self) -> io::Result<()> {
        println!("\n--- Каталог ---");
        println!("1 — Показать весь каталог");
        println!("2 — Поиск по названию");
        let choice = prompt("Выбери: ")?;

        match choice.as_str() {
            "1" => self.show_catalog(&self.catalog.iter().collect::<Vec<_>>()),
            "2" => {
                let query = prompt("Введите часть названия (например 'ноут'): ")?.to_lowercase();
                let filtered: Vec<_> = self
                    .catalog
                    .iter()
                    .filter(|item| item.name.to_lowercase().contains(&query))
                    .collect();
                self.show_catalog(&filtered);
            }
            _ => println!("Неизвестный пункт."),
        }
        Ok(())
    }

    /// Coarse display category, derived from the item name.
    fn category_of(name: &str) -> &'static str {
        let n = name.to_lowercase();
        if n.contains("ноут") {
            return "Ноутбуки";
        }
        if n.contains("смартф") || n.contains("телефон") {
            return "Смартфоны";
        }
        if n.contains("монитор") {
            return "Мониторы";
        }
        if n.contains("мыш") || n.contains("клав") {
            return "Периферия";
        }
        if n.contains("науш") {
            return "Аудио";
        }
        if n.contains("достав") || n.contains("настрой") || n.contains("гарант") {
            return "Услуги";
        }
        if n.contains("кабель") || n.contains("термопаст") {
            return "Расходники";
        }
        "Другое"
    }

    fn show_catalog(&self, items: &[&Item]) {
        if items.is_empty() {
            println!("Ничего не найдено.");
            return;
        }

        // Group by category; BTreeMap keeps categories sorted for display
        let mut groups: BTreeMap<&'static str, Vec<&Item>> = BTreeMap::new();
        for &item in items {
            groups
                .entry(Self::category_of(&item.name))
                .or_default()
                .push(item);
        }

        let mut idx = 1;
        for (category, group) in &groups {
            println!("\n[{category}]");
            for &item in group {
                println!("{idx}. {}", Self::price_line(item));
                idx += 1;
            }
        }

        println!("\n(Нумерация соответствует общему каталогу в пункте 'Добавить в корзину')");
    }

    fn price_line(item: &Item) -> String {
        if item.requires_weighing() {
            format!("{} — {} ₽/кг", item.name, item.unit_price)
        } else {
            format!("{} — {} ₽/ед.", item.name, item.unit_price)
        }
    }

    // ---------- Cart actions ----------

    fn add_to_cart(&mut self) -> io::Result<()> {
        println!("\n--- Общий каталог ---");
        for (i, item) in self.catalog.iter().enumerate() {
            println!("{}. {}", i + 1, Self::price_line(item));
        }
        println!("---------------------");

        let Some(index) = read_index(prompt("Номер товара/услуги: ")?) else {
            return Ok(());
        };
        let Some(item) = self.catalog.get(index) else {
            println!("Нет такого номера.");
            return Ok(());
        };
        let item = item.clone();

        let result = if item.requires_weighing() {
            println!("Это взвешиваемый товар.");
            let choice = prompt("Добавить сразу с весом? (y/n): ")?.to_lowercase();
            if choice == "y" {
                let Some(weight) = read_decimal(prompt("Вес (кг): ")?) else {
                    return Ok(());
                };
                self.cart.add(item, weight, true)
            } else {
                // Deferred: placeholder weight, flagged as unweighed
                self.cart.add(item, PLACEHOLDER_WEIGHT_KG, false)
            }
        } else {
            let Some(amount) = read_decimal(prompt("Количество (например 1): ")?) else {
                return Ok(());
            };
            self.cart.add(item, amount, true)
        };

        match result {
            Ok(()) => println!("Добавлено в корзину."),
            Err(err) => println!("Ошибка: {err}"),
        }
        Ok(())
    }

    fn show_cart(&self) {
        println!("\n--- Корзина ---");
        if self.cart.is_empty() {
            println!("Пусто.");
            return;
        }

        for (i, entry) in self.cart.entries().iter().enumerate() {
            let marker = if entry.needs_weighing() {
                " [НЕ ВЗВЕШЕНО]"
            } else {
                ""
            };
            println!(
                "{}. {} — amount={} — {} ₽{marker}",
                i + 1,
                entry.item.name,
                entry.quantity,
                entry.cost()
            );
        }

        println!("Итого: {} ₽", self.cart.total());
        println!("--------------");
    }

    fn weigh_item(&mut self) -> io::Result<()> {
        self.show_cart();
        if self.cart.is_empty() {
            return Ok(());
        }

        let Some(index) = read_index(prompt("Номер позиции для взвешивания: ")?) else {
            return Ok(());
        };
        let Some(weight) = read_decimal(prompt("Введите вес (кг): ")?) else {
            return Ok(());
        };

        match self.cart.weigh(index, weight) {
            Ok(()) => println!("Товар взвешен."),
            Err(err) => println!("Ошибка: {err}"),
        }
        Ok(())
    }

    fn remove_from_cart(&mut self) -> io::Result<()> {
        self.show_cart();
        if self.cart.is_empty() {
            return Ok(());
        }

        let Some(index) = read_index(prompt("Номер позиции для удаления: ")?) else {
            return Ok(());
        };
        match self.cart.remove(index) {
            Ok(()) => println!("Удалено."),
            Err(err) => println!("Ошибка: {err}"),
        }
        Ok(())
    }

    // ---------- Payment ----------

    fn pay(&mut self) -> io::Result<()> {
        self.show_cart();
        if self.cart.is_empty() {
            return Ok(());
        }

        // Unweighed lines block checkout; offer to weigh them right away
        if self.cart.has_unweighed_items() {
            println!("\nЕсть товары, которые НЕ ВЗВЕШЕНЫ. Нужно взвесить перед оплатой.");
            while self.cart.has_unweighed_items() {
                self.show_cart();
                let raw = prompt("Номер позиции, которую взвесить (0 — отмена оплаты): ")?;
                if raw == "0" {
                    return Ok(());
                }
                let Some(index) = read_index(raw) else {
                    continue;
                };
                let Some(weight) = read_decimal(prompt("Введите вес (кг): ")?) else {
                    continue;
                };
                if let Err(err) = self.cart.weigh(index, weight) {
                    println!("Ошибка: {err}");
                }
            }
        }

        println!("\n--- Оплата ---");
        println!("1 — Только наличными");
        println!("2 — Только бонусами");
        println!("3 — Смешанная (бонусы + наличные)");
        let choice = prompt("Выбери: ")?;

        let strategy = match choice.as_str() {
            "1" => PaymentStrategy::CashOnly,
            "2" => PaymentStrategy::BonusOnly,
            "3" => {
                let Some(bonus) = read_decimal(prompt("Сколько бонусов списать? ")?) else {
                    return Ok(());
                };
                PaymentStrategy::mixed(Money::new(bonus))
            }
            _ => {
                println!("Неизвестный вариант оплаты.");
                return Ok(());
            }
        };

        // Retry loop: on an affordability failure the customer may remove
        // lines until the total fits the balances
        loop {
            match self
                .checkout
                .checkout(&mut self.customer, &self.cart, strategy)
            {
                Ok(receipt) => {
                    println!("\n{}", receipt.text);

                    match self.store.save(&receipt.text) {
                        Ok(()) => {
                            println!("\nЧек сохранён в файл: {}", self.store.path().display())
                        }
                        Err(err) => {
                            warn!(error = %err, "failed to persist receipt");
                            println!("\nНе удалось сохранить чек: {err}");
                        }
                    }

                    info!(total = %receipt.total, "checkout complete");
                    self.cart.clear();
                    return Ok(());
                }
                Err(CoreError::CheckoutFailed { reason, message })
                    if matches!(
                        reason,
                        PaymentFailure::InsufficientFunds | PaymentFailure::InsufficientBonus
                    ) =>
                {
                    println!("\nОплата не прошла: {message}");
                    println!(
                        "\nНе хватает средств. Удаляйте товары из корзины, пока сумма не станет меньше."
                    );
                    self.show_cart();
                    let raw = prompt("Номер позиции для удаления (0 — отмена оплаты): ")?;
                    if raw == "0" {
                        return Ok(());
                    }
                    let Some(index) = read_index(raw) else {
                        continue;
                    };
                    if let Err(err) = self.cart.remove(index) {
                        println!("Ошибка удаления: {err}");
                    }
                }
                Err(err) => {
                    println!("\nОплата не прошла: {err}");
                    return Ok(());
                }
            }
        }
    }

    // ---------- Purchases ----------

    fn show_purchases(&self) {
        println!("\n--- История покупок (в памяти) ---");
        if self.customer.purchase_history().is_empty() {
            println!("Пока нет покупок.");
            return;
        }

        for (i, text) in self.customer.purchase_history().iter().enumerate() {
            println!("\nПокупка #{}", i + 1);
            println!("{text}");
        }
    }
}

/// Prints `text`, flushes and reads one trimmed line from stdin.
fn prompt(text: &str) -> io::Result<String> {
    print!("{text}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        ));
    }
    Ok(line.trim().to_string())
}

/// Parses a 1-based position into a 0-based index; prints on bad input.
fn read_index(raw: String) -> Option<usize> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Some(n - 1),
        _ => {
            println!("Ошибка: введите номер позиции.");
            None
        }
    }
}

/// Parses a decimal amount; prints on bad input.
fn read_decimal(raw: String) -> Option<Decimal> {
    match raw.parse::<Decimal>() {
        Ok(d) => Some(d),
        Err(_) => {
            println!("Ошибка: введите число.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_grouping_matches_catalog() {
        assert_eq!(Session::category_of("Ноутбук"), "Ноутбуки");
        assert_eq!(Session::category_of("Смартфон"), "Смартфоны");
        assert_eq!(Session::category_of("Клавиатура"), "Периферия");
        assert_eq!(Session::category_of("Настройка ноутбука"), "Ноутбуки");
        assert_eq!(Session::category_of("Кабель (на отрез, кг)"), "Расходники");
        assert_eq!(Session::category_of("Пылесос"), "Другое");
    }

    #[test]
    fn test_read_index_is_one_based() {
        assert_eq!(read_index("1".to_string()), Some(0));
        assert_eq!(read_index("11".to_string()), Some(10));
        assert_eq!(read_index("0".to_string()), None);
        assert_eq!(read_index("abc".to_string()), None);
    }

    #[test]
    fn test_read_decimal() {
        assert_eq!(read_decimal("2.5".to_string()), Some(dec!(2.5)));
        assert_eq!(read_decimal("нет".to_string()), None);
    }
}
