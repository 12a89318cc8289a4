use chrono::{DateTime, Duration, TimeZone, Utc};
use log_sentinel::analyzer::Analyzer;
use log_sentinel::domain::{LogLevel, MAX_SAMPLED_EVENTS, instant};
use log_sentinel::parser::parse_line;
use proptest::prelude::*;

fn at(offset_ms: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap() + Duration::milliseconds(offset_ms)
}

fn line(offset_ms: i64, level: LogLevel, message: &str) -> String {
    format!("{} [{level}] {message}", instant::format(&at(offset_ms)))
}

fn feed(analyzer: &mut Analyzer, raw: &str) {
    analyzer.observe_line();
    analyzer.fold(&parse_line(raw));
}

#[derive(Debug, Clone)]
enum Input {
    Entry(i64, LogLevel),
    Garbage(String),
}

fn any_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        3 => (0i64..86_400_000, prop::sample::select(LogLevel::ALL.to_vec()))
            .prop_map(|(offset, level)| Input::Entry(offset, level)),
        1 => "[a-z ]{0,20}".prop_map(Input::Garbage),
    ]
}

fn render(input: &Input, index: usize) -> String {
    match input {
        Input::Entry(offset, level) => line(*offset, *level, &format!("event {index}")),
        Input::Garbage(text) => text.clone(),
    }
}

proptest! {
    #[test]
    fn line_counts_balance_after_every_observation(inputs in prop::collection::vec(any_input(), 0..200)) {
        let mut analyzer = Analyzer::new("prop.log");

        for (index, input) in inputs.iter().enumerate() {
            feed(&mut analyzer, &render(input, index));
            prop_assert_eq!(
                analyzer.total_lines(),
                analyzer.parsed_lines() + analyzer.parse_errors()
            );
        }

        let summary = analyzer.snapshot();
        prop_assert_eq!(summary.meta.total_lines, inputs.len() as u64);
        prop_assert_eq!(summary.summary.total(), summary.meta.parsed_lines);
    }

    #[test]
    fn time_range_is_min_and_max_of_parsed_entries(inputs in prop::collection::vec(any_input(), 0..100)) {
        let mut analyzer = Analyzer::new("prop.log");
        for (index, input) in inputs.iter().enumerate() {
            feed(&mut analyzer, &render(input, index));
        }

        let offsets: Vec<i64> = inputs
            .iter()
            .filter_map(|input| match input {
                Input::Entry(offset, _) => Some(*offset),
                Input::Garbage(_) => None,
            })
            .collect();

        let range = analyzer.snapshot().time_range;
        match (offsets.iter().min(), offsets.iter().max()) {
            (Some(min), Some(max)) => {
                let range = range.unwrap();
                prop_assert_eq!(range.start, at(*min));
                prop_assert_eq!(range.end, at(*max));
            }
            _ => prop_assert!(range.is_none()),
        }
    }

    #[test]
    fn error_truncation_law(n in 0usize..250) {
        let mut analyzer = Analyzer::new("errors.log");
        for i in 0..n {
            feed(&mut analyzer, &line(i as i64, LogLevel::Error, &format!("error {i}")));
        }

        let errors = analyzer.snapshot().errors;
        prop_assert_eq!(errors.total_count, n as u64);
        prop_assert_eq!(errors.items.len(), n.min(MAX_SAMPLED_EVENTS));
        prop_assert_eq!(errors.truncated, n > MAX_SAMPLED_EVENTS);
    }
}

#[test]
fn test_samples_are_first_hundred_in_arrival_order() {
    let mut analyzer = Analyzer::new("mixed.log");

    // Interleave the two sampled levels with unsampled ones, arriving out of
    // timestamp order.
    for i in 0..300i64 {
        let offset = (300 - i) * 1000;
        let level = match i % 3 {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            _ => LogLevel::Info,
        };
        feed(&mut analyzer, &line(offset, level, &format!("msg {i}")));
    }

    let summary = analyzer.snapshot();
    let expected_errors: Vec<String> = (0..300)
        .filter(|i| i % 3 == 0)
        .take(MAX_SAMPLED_EVENTS)
        .map(|i| format!("msg {i}"))
        .collect();
    let actual_errors: Vec<&str> = summary
        .errors
        .items
        .iter()
        .map(|event| event.message.as_str())
        .collect();

    assert_eq!(actual_errors, expected_errors);
    assert_eq!(summary.errors.total_count, 100);
    assert!(!summary.errors.truncated);
    assert_eq!(summary.warnings.items[0].message, "msg 1");
    assert_eq!(summary.warnings.items.len(), 100);
    assert_eq!(summary.summary.info, 100);
}

#[test]
fn test_later_entries_do_not_disturb_full_buffer() {
    let mut analyzer = Analyzer::new("warn.log");
    for i in 0..MAX_SAMPLED_EVENTS as i64 {
        feed(&mut analyzer, &line(i, LogLevel::Warn, &format!("early {i}")));
    }
    let before = analyzer.snapshot().warnings.items;

    for i in 0..50i64 {
        feed(&mut analyzer, &line(-i, LogLevel::Warn, "late"));
    }
    let after = analyzer.snapshot().warnings;

    assert_eq!(after.items, before);
    assert_eq!(after.total_count, 150);
    assert!(after.truncated);
}

#[test]
fn test_independent_analyzers_do_not_share_state() {
    let mut first = Analyzer::new("a.log");
    let mut second = Analyzer::new("b.log");

    feed(&mut first, &line(0, LogLevel::Error, "only in a"));

    assert_eq!(first.snapshot().errors.total_count, 1);
    assert_eq!(second.snapshot().errors.total_count, 0);
    feed(&mut second, "");
    assert_eq!(first.parse_errors(), 0);
    assert_eq!(second.parse_errors(), 1);
}
