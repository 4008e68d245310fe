//! Property-based tests for generator invariants
//!
//! These tests verify that the day-loop invariants hold across randomly
//! drawn configurations and entropy streams.

use chrono::{Days, NaiveDate};
use overpeak::domain::{
    Category, GenerationConfig, Record, RecordGenerator, StdRngSource,
};
use proptest::prelude::*;

/// A valid configuration plus the generated records for one seeded run.
fn generated_run() -> impl Strategy<Value = (GenerationConfig, Vec<Record>)> {
    (
        0u64..3650,
        0u64..400,
        1u32..=500,
        1u32..=40,
        (1u32..=10, 0u32..=10),
        any::<u64>(),
    )
        .prop_filter_map(
            "valid non-degenerate config",
            |(start_offset, len, quantity, num_records, (range_start, range_extra), seed)| {
                let start = NaiveDate::from_ymd_opt(2020, 1, 1)
                    .unwrap()
                    .checked_add_days(Days::new(start_offset))?;
                let end = start.checked_add_days(Days::new(len))?;
                let config = GenerationConfig::from_raw(
                    start,
                    end,
                    quantity,
                    num_records,
                    range_start,
                    range_start + range_extra,
                )
                .ok()?;
                if config.step() == 0 {
                    return None;
                }
                let records = RecordGenerator::new(StdRngSource::seeded(seed))
                    .generate(&config)
                    .ok()?;
                Some((config, records))
            },
        )
}

/// Maximal runs of consecutive Denial records, with a flag marking runs cut
/// short by the end of the date range.
fn denial_runs(records: &[Record]) -> Vec<(Vec<&Record>, bool)> {
    let mut runs = Vec::new();
    let mut current: Vec<&Record> = Vec::new();
    for record in records {
        match record.category {
            Category::Denial => current.push(record),
            Category::Concurrent => {
                if !current.is_empty() {
                    runs.push((std::mem::take(&mut current), false));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push((current, true));
    }
    runs
}

proptest! {
    #[test]
    fn one_record_per_calendar_day((config, records) in generated_run()) {
        prop_assert_eq!(records.len() as i64, config.total_days());

        let mut expected = config.start_date();
        for record in &records {
            prop_assert_eq!(record.date, expected);
            expected = expected.succ_opt().unwrap();
        }
        prop_assert_eq!(records.last().unwrap().date, config.end_date());
    }

    #[test]
    fn day_cursor_is_monotonic((_, records) in generated_run()) {
        for pair in records.windows(2) {
            prop_assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
    }

    #[test]
    fn categories_partition_the_output((_, records) in generated_run()) {
        let concurrent = records
            .iter()
            .filter(|r| r.category == Category::Concurrent)
            .count();
        let denial = records
            .iter()
            .filter(|r| r.category == Category::Denial)
            .count();
        prop_assert_eq!(concurrent + denial, records.len());
    }

    #[test]
    fn ramp_starts_at_step((config, records) in generated_run()) {
        prop_assert_eq!(records[0].value, i64::from(config.step()));
        prop_assert_eq!(records[0].category, Category::Concurrent);
    }

    #[test]
    fn denial_run_lengths_stay_in_bounds((config, records) in generated_run()) {
        let bounds = config.overpeak().bounds();
        for (run, truncated) in denial_runs(&records) {
            prop_assert!(run.len() as u32 <= *bounds.end());
            if !truncated {
                prop_assert!(run.len() as u32 >= *bounds.start());
            }
        }
    }

    #[test]
    fn denial_entry_value_is_at_or_above_threshold((config, records) in generated_run()) {
        for (run, _) in denial_runs(&records) {
            prop_assert!(run[0].value >= i64::from(config.quantity()));
        }
    }

    #[test]
    fn trajectory_returns_within_one_step_after_a_run((config, records) in generated_run()) {
        // The triangular excursion hands the decrement phase a value exactly
        // one step below the run's entry value, for even and odd runs alike.
        let step = i64::from(config.step());
        for (index, pair) in records.windows(2).enumerate() {
            let is_run_end = pair[0].category == Category::Denial
                && pair[1].category == Category::Concurrent;
            if is_run_end {
                let entry = records[..=index]
                    .iter()
                    .rev()
                    .take_while(|r| r.category == Category::Denial)
                    .last()
                    .unwrap();
                prop_assert_eq!(pair[1].value, entry.value - step);
            }
        }
    }
}

#[test]
fn degenerate_step_produces_no_output() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    let config = GenerationConfig::from_raw(start, end, 5, 10, 1, 3).unwrap();

    let result = RecordGenerator::new(StdRngSource::seeded(1)).generate(&config);
    assert!(result.is_err());
}
