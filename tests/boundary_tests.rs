use common::{at, random_payments};
use payment_analytics::application::engine::PaymentEngine;
use payment_analytics::domain::payment::Payment;
use payment_analytics::domain::ports::PaymentStore;
use payment_analytics::error::PaymentError;
use std::collections::HashMap;

mod common;

const SEEDS: [u64; 4] = [1, 7, 42, 2023];

fn engine_with(payments: Vec<Payment>) -> PaymentEngine {
    let mut engine = PaymentEngine::new();
    engine.save(payments);
    engine
}

#[test]
fn test_period_results_lie_strictly_inside_bounds() {
    let windows = [
        ("2023-04-10T00:00:00", "2023-04-17T00:00:00"),
        ("2023-04-12T06:30:00", "2023-04-12T18:45:00"),
        ("2023-04-14T00:00:00", "2023-04-14T00:01:00"),
    ];

    for seed in SEEDS {
        let engine = engine_with(random_payments(seed, 500));
        for (start, end) in windows {
            let (start, end) = (at(start), at(end));
            let found = engine.find_all_in_period(start, end);

            assert!(
                found
                    .iter()
                    .all(|p| start < p.date_time() && p.date_time() < end)
            );
            let expected = engine
                .store()
                .all()
                .filter(|p| start < p.date_time() && p.date_time() < end)
                .count();
            assert_eq!(found.len(), expected);

            let sum: f64 = found.iter().map(|p| p.amount()).sum();
            assert_eq!(engine.payment_sum_in_period(start, end), sum);
        }
    }
}

#[test]
fn test_boundary_timestamps_are_excluded() {
    for seed in SEEDS {
        let engine = engine_with(random_payments(seed, 200));
        let first = engine.store().all().next().unwrap().date_time();

        assert!(
            engine
                .find_all_in_period(first, at("2030-01-01T00:00:00"))
                .iter()
                .all(|p| p.date_time() != first)
        );
        assert!(
            engine
                .find_all_in_period(at("2000-01-01T00:00:00"), first)
                .iter()
                .all(|p| p.date_time() != first)
        );
    }
}

#[test]
fn test_spent_more_than_planned_properties() {
    for seed in SEEDS {
        let engine = engine_with(random_payments(seed, 300));

        let mut totals: HashMap<_, f64> = HashMap::new();
        for p in engine.store().all() {
            *totals.entry(p.product_category()).or_default() += p.amount();
        }

        let mut previous = None;
        for planned in [0.0, 50.0, 100.0, 150.0, 200.0, 1_000.0] {
            let over = engine.spent_more_than_planned(planned);
            assert!(over.iter().all(|category| totals[category] > planned));
            assert!(
                totals
                    .iter()
                    .filter(|&(_, &total)| total > planned)
                    .all(|(category, _)| over.contains(category))
            );
            if let Some(previous) = &previous {
                assert!(over.is_subset(previous));
            }
            previous = Some(over);
        }
    }
}

#[test]
fn test_grouped_by_category_partitions_sender() {
    for seed in SEEDS {
        let engine = engine_with(random_payments(seed, 300));
        let sent: Vec<&Payment> = engine
            .store()
            .all()
            .filter(|p| p.from().matches("10000", "BIC1"))
            .collect();

        let groups = engine.grouped_by_category("10000", "BIC1");
        let grouped: usize = groups.values().map(Vec::len).sum();
        assert_eq!(grouped, sent.len());

        for (category, payments) in &groups {
            assert!(!payments.is_empty());
            assert!(payments.iter().all(|p| p.product_category() == *category));
            assert!(payments.iter().all(|p| p.from().matches("10000", "BIC1")));
        }
    }
}

#[test]
fn test_biggest_payment_days_carry_the_maximum() {
    for seed in SEEDS {
        let engine = engine_with(random_payments(seed, 100));
        let max = engine
            .store()
            .all()
            .map(|p| p.amount())
            .fold(f64::MIN, f64::max);

        let days = engine.find_days_with_biggest_payment().unwrap();
        assert!(!days.is_empty());
        for day in &days {
            assert!(
                engine
                    .store()
                    .all()
                    .any(|p| p.date() == *day && p.amount() == max)
            );
        }

        let first = engine.find_first_day_with_biggest_payment().unwrap();
        assert!(days.contains(&first));
    }
}

#[test]
fn test_counts_per_account_add_up() {
    for seed in SEEDS {
        let engine = engine_with(random_payments(seed, 250));
        let infos = engine.find_payments_count_for_account();

        let total: usize = infos.iter().map(|info| info.count).sum();
        assert_eq!(total, 250);
        for info in &infos {
            assert_eq!(
                engine.payments_count(info.account.account_number(), info.account.bic()),
                info.count
            );
        }
    }
}

#[test]
fn test_empty_store_queries() {
    let engine = PaymentEngine::new();
    let (start, end) = (at("2023-01-01T00:00:00"), at("2024-01-01T00:00:00"));

    assert!(engine.find_all_in_period(start, end).is_empty());
    assert_eq!(engine.spent_on_food(start, end), 0.0);
    assert_eq!(engine.payment_sum_in_period(start, end), 0.0);
    assert!(engine.spent_more_than_planned(0.0).is_empty());
    assert!(engine.grouped_by_category("1", "1").is_empty());
    assert!(engine.payments_between_different_accounts().is_empty());
    assert!(engine.find_payments_count_for_account().is_empty());
    assert_eq!(engine.payments_count("1", "1"), 0);
    assert!(matches!(
        engine.find_days_with_biggest_payment(),
        Err(PaymentError::EmptyStore)
    ));
    assert!(matches!(
        engine.find_first_day_with_biggest_payment(),
        Err(PaymentError::EmptyStore)
    ));
}
