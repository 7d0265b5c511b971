#![allow(dead_code)]

use chrono::{Duration, NaiveDateTime};
use payment_analytics::application::engine::PaymentEngine;
use payment_analytics::domain::account::Account;
use payment_analytics::domain::payment::{Payment, ProductCategory};
use payment_analytics::interfaces::{InputFormat, load_batch};
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

pub const PAYMENTS_JSON: &str = "tests/fixtures/payments.json";
pub const PAYMENTS_CSV: &str = "tests/fixtures/payments.csv";
pub const CSV_HEADER: [&str; 7] = [
    "from_account",
    "from_bic",
    "to_account",
    "to_bic",
    "amount",
    "date_time",
    "product_category",
];

const CATEGORIES: [ProductCategory; 6] = [
    ProductCategory::Food,
    ProductCategory::Education,
    ProductCategory::Medicine,
    ProductCategory::Clothes,
    ProductCategory::Entertainment,
    ProductCategory::Transport,
];

pub fn at(s: &str) -> NaiveDateTime {
    s.parse().expect("Invalid timestamp in test")
}

/// Engine loaded the way the binary loads it: clear, then save the whole batch.
pub fn fixture_engine(path: &str, format: InputFormat) -> PaymentEngine {
    let batch = load_batch(Path::new(path), Some(format)).expect("Failed to load fixture");
    assert_eq!(batch.rejected, 0, "Fixture contains invalid records");

    let mut engine = PaymentEngine::new();
    engine.clear();
    engine.save(batch.payments);
    engine
}

/// Random payments over a handful of accounts within one week of April 2023.
///
/// Timestamps land on whole minutes so period bounds hit them exactly now and then.
pub fn random_payments(seed: u64, count: usize) -> Vec<Payment> {
    let mut rng = StdRng::seed_from_u64(seed);
    let accounts: Vec<Account> = (1..=4)
        .map(|i| Account::new(format!("{i}0000"), format!("BIC{}", i % 2)))
        .collect();
    let origin = at("2023-04-10T00:00:00");

    (0..count)
        .map(|_| {
            let from = accounts[rng.gen_range(0..accounts.len())].clone();
            let to = accounts[rng.gen_range(0..accounts.len())].clone();
            let amount = f64::from(rng.gen_range(0..20u32)) / 2.0;
            let date_time = origin + Duration::minutes(rng.gen_range(0..7 * 24 * 60));
            let category = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
            Payment::new(from, to, amount, date_time, category)
        })
        .collect()
}
