//! Integration tests for template rendering and destination feeding
//!
//! These tests verify:
//! - Placeholder grammar through the public serializers
//! - Greedy and first-success delivery order
//! - Ordered failure aggregation
//! - Sync/async path separation
//! - Upfront cancellation

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use log_template_core::prelude::*;
use log_template_core::template::LINE_ENDING;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

fn sample_event() -> LogEvent {
    LogEvent::new("LogId1", LogType::Error)
        .with_context("Context1")
        .with_description("Description1")
        .with_source("Source1")
        .with_tags(vec![
            Some("tag1".to_string()),
            Some("tag2".to_string()),
            Some("tag3".to_string()),
        ])
        .with_item(LogItem::new("user", "alice"))
        .with_item(LogItem::new("retries", 2))
        .with_timestamp(Utc.with_ymd_and_hms(2019, 2, 13, 0, 0, 0).single().unwrap())
}

/// Shared journal of `(destination, path)` calls in invocation order
type Journal = Arc<Mutex<Vec<(String, &'static str)>>>;

/// Destination that renders with its own serializer and records each call
struct RecordingDestination {
    name: String,
    fail: bool,
    journal: Journal,
    serializer: TextSerializer,
    written: Mutex<Vec<String>>,
}

impl RecordingDestination {
    fn new(name: &str, fail: bool, journal: &Journal) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            fail,
            journal: Arc::clone(journal),
            serializer: TextSerializer::new("[$LogType] $Context"),
            written: Mutex::new(Vec::new()),
        })
    }

    fn deliver(&self, events: &[LogEvent], path: &'static str) -> Result<()> {
        self.journal.lock().push((self.name.clone(), path));
        if self.fail {
            return Err(LoggerError::destination(&self.name, "connection refused"));
        }

        let mut written = self.written.lock();
        for event in events {
            written.push(self.serializer.serialize(event)?);
        }
        Ok(())
    }
}

impl Destination for RecordingDestination {
    fn send(&self, events: &[LogEvent]) -> Result<()> {
        self.deliver(events, "sync")
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl AsyncDestination for RecordingDestination {
    async fn send_async(&self, events: &[LogEvent], _cancel: &CancellationToken) -> Result<()> {
        tokio::task::yield_now().await;
        self.deliver(events, "async")
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn as_sync(list: &[Arc<RecordingDestination>]) -> Vec<Arc<dyn Destination>> {
    list.iter().map(|d| Arc::clone(d) as Arc<dyn Destination>).collect()
}

fn as_async(list: &[Arc<RecordingDestination>]) -> Vec<Arc<dyn AsyncDestination>> {
    list.iter().map(|d| Arc::clone(d) as Arc<dyn AsyncDestination>).collect()
}

fn journal_entries(journal: &Journal) -> Vec<(String, &'static str)> {
    journal.lock().clone()
}

fn failure_names(err: LoggerError) -> Vec<String> {
    match err {
        LoggerError::Feeding(feeding) => feeding.failures().iter().map(|f| f.destination.clone()).collect(),
        other => panic!("expected FeedingError, got {other}"),
    }
}

// ============================================================================
// Template rendering
// ============================================================================

#[test]
fn test_context_inside_text() {
    let serializer = TextSerializer::new("qwerty$Contextqwertyu");
    assert_eq!(serializer.serialize(&sample_event()).unwrap(), "qwertyContext1qwertyu");
}

#[test]
fn test_context_truncated() {
    let serializer = TextSerializer::new("$Context(3)");
    assert_eq!(serializer.serialize(&sample_event()).unwrap(), "Con");
}

#[test]
fn test_log_date_with_format() {
    let serializer = TextSerializer::new("$LogDate(MMM-dd-yyyy)");
    assert_eq!(serializer.serialize(&sample_event()).unwrap(), "Feb-13-2019");
}

#[test]
fn test_log_date_empty_parens_falls_back() {
    let config = FormatterConfig::new().with_date_format("dd-MM-yyyy");
    let serializer = TextSerializer::with_config("$LogDate()", &config);
    assert_eq!(serializer.serialize(&sample_event()).unwrap(), "13-02-2019()");
}

#[test]
fn test_tags_joined_and_repeated() {
    let serializer = TextSerializer::new("$Tags");
    assert_eq!(serializer.serialize(&sample_event()).unwrap(), "tag1 tag2 tag3");

    let serializer = TextSerializer::new("$Tags$Tags$Tags");
    assert_eq!(
        serializer.serialize(&sample_event()).unwrap(),
        "tag1 tag2 tag3tag1 tag2 tag3tag1 tag2 tag3"
    );
}

#[test]
fn test_unknown_placeholder_is_literal() {
    let serializer = ExtendedTextSerializer::new("$Context $Whatever $LogType");
    assert_eq!(serializer.serialize(&sample_event()).unwrap(), "Context1 $Whatever Error");
}

#[test]
fn test_field_values_are_not_expanded() {
    let event = sample_event().with_context("evil$NewLine[Critical] forged $LogDate(yyyy)");
    let serializer = TextSerializer::new("[$LogType] $Context");

    assert_eq!(
        serializer.serialize(&event).unwrap(),
        "[Error] evil$NewLine[Critical] forged $LogDate(yyyy)"
    );
}

#[test]
fn test_extended_full_template() {
    let config = FormatterConfig::new().with_date_format("yyyy-MM-dd");
    let serializer = ExtendedTextSerializer::with_config(
        "$LogDate $LogId(5) [$LogType(4)] $Source/$Context: $Description$NewLine$LogItems",
        &config,
    );

    let expected = [
        "2019-02-13 LogId [Erro] Source1/Context1: Description1",
        "user: alice",
        "retries: 2",
    ]
    .join(LINE_ENDING);
    assert_eq!(serializer.serialize(&sample_event()).unwrap(), expected);
}

#[test]
fn test_serializers_behind_trait_objects() {
    let serializers: Vec<Box<dyn LogSerializer>> = vec![
        Box::new(TextSerializer::new("$LogId")),
        Box::new(PathSerializer::new("$LogId")),
        Box::new(ExtendedTextSerializer::new("$LogId")),
        Box::new(FuncSerializer::new(|e: &LogEvent| Ok(e.id.clone()))),
    ];

    for serializer in &serializers {
        assert_eq!(serializer.serialize(&sample_event()).unwrap(), "LogId1", "{}", serializer.name());
    }
}

// ============================================================================
// Feeding
// ============================================================================

#[test]
fn test_greedy_partial_failure() {
    let journal = Journal::default();
    let destinations = vec![
        RecordingDestination::new("d1", true, &journal),
        RecordingDestination::new("d2", false, &journal),
        RecordingDestination::new("d3", true, &journal),
    ];

    let err = FeedingStrategy::Greedy
        .feed(&[sample_event()], &as_sync(&destinations))
        .unwrap_err();

    if let LoggerError::Feeding(feeding) = &err {
        assert!(feeding
            .causes()
            .all(|cause| matches!(cause, LoggerError::Destination { .. })));
    }
    assert_eq!(failure_names(err), vec!["d1", "d3"]);
    assert_eq!(
        journal_entries(&journal),
        vec![
            ("d1".to_string(), "sync"),
            ("d2".to_string(), "sync"),
            ("d3".to_string(), "sync"),
        ]
    );
    assert_eq!(destinations[1].written.lock().clone(), vec!["[Error] Context1"]);
}

#[test]
fn test_greedy_all_succeed() {
    let journal = Journal::default();
    let destinations = vec![
        RecordingDestination::new("d1", false, &journal),
        RecordingDestination::new("d2", false, &journal),
    ];

    FeedingStrategy::Greedy
        .feed(&[sample_event(), sample_event()], &as_sync(&destinations))
        .expect("no failures");

    assert_eq!(journal_entries(&journal).len(), 2);
    assert_eq!(destinations[0].written.lock().len(), 2);
}

#[test]
fn test_first_success_failover() {
    let journal = Journal::default();
    let destinations = vec![
        RecordingDestination::new("d1", true, &journal),
        RecordingDestination::new("d2", false, &journal),
        RecordingDestination::new("d3", false, &journal),
    ];

    FeedingStrategy::FirstSuccess
        .feed(&[sample_event()], &as_sync(&destinations))
        .expect("d2 accepts the batch");

    assert_eq!(
        journal_entries(&journal),
        vec![("d1".to_string(), "sync"), ("d2".to_string(), "sync")]
    );
    assert!(destinations[2].written.lock().is_empty());
}

#[test]
fn test_first_success_all_fail() {
    let journal = Journal::default();
    let destinations = vec![
        RecordingDestination::new("d1", true, &journal),
        RecordingDestination::new("d2", true, &journal),
        RecordingDestination::new("d3", true, &journal),
    ];

    let err = FeedingStrategy::FirstSuccess
        .feed(&[sample_event()], &as_sync(&destinations))
        .unwrap_err();

    assert_eq!(failure_names(err), vec!["d1", "d2", "d3"]);
    assert_eq!(journal_entries(&journal).len(), 3);
}

#[tokio::test]
async fn test_async_greedy_sequential_order() {
    let journal = Journal::default();
    let destinations = vec![
        RecordingDestination::new("d1", true, &journal),
        RecordingDestination::new("d2", false, &journal),
        RecordingDestination::new("d3", true, &journal),
    ];
    let cancel = CancellationToken::new();

    let err = FeedingStrategy::Greedy
        .feed_async(&[sample_event()], &as_async(&destinations), &cancel)
        .await
        .unwrap_err();

    assert_eq!(failure_names(err), vec!["d1", "d3"]);
    assert_eq!(
        journal_entries(&journal),
        vec![
            ("d1".to_string(), "async"),
            ("d2".to_string(), "async"),
            ("d3".to_string(), "async"),
        ]
    );
}

#[tokio::test]
async fn test_async_first_success_failover() {
    let journal = Journal::default();
    let destinations = vec![
        RecordingDestination::new("d1", true, &journal),
        RecordingDestination::new("d2", false, &journal),
        RecordingDestination::new("d3", false, &journal),
    ];
    let cancel = CancellationToken::new();

    FeedingStrategy::FirstSuccess
        .feed_async(&[sample_event()], &as_async(&destinations), &cancel)
        .await
        .expect("d2 accepts the batch");

    assert_eq!(
        journal_entries(&journal),
        vec![("d1".to_string(), "async"), ("d2".to_string(), "async")]
    );
}

#[tokio::test]
async fn test_async_cancelled_before_start() {
    let journal = Journal::default();
    let destinations = vec![RecordingDestination::new("d1", false, &journal)];
    let cancel = CancellationToken::new();
    cancel.cancel();

    for strategy in [FeedingStrategy::Greedy, FeedingStrategy::FirstSuccess] {
        let err = strategy
            .feed_async(&[sample_event()], &as_async(&destinations), &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, LoggerError::Cancelled));
    }

    assert!(journal_entries(&journal).is_empty());
}

#[tokio::test]
async fn test_async_empty_destination_list() {
    let cancel = CancellationToken::new();
    for strategy in [FeedingStrategy::Greedy, FeedingStrategy::FirstSuccess] {
        strategy
            .feed_async(&[sample_event()], &[], &cancel)
            .await
            .expect("nothing to feed");
    }
}

#[test]
fn test_strategy_reused_across_threads() {
    let journal = Journal::default();
    let destinations = Arc::new(as_sync(&[
        RecordingDestination::new("d1", false, &journal),
        RecordingDestination::new("d2", false, &journal),
    ]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let destinations = Arc::clone(&destinations);
            std::thread::spawn(move || {
                FeedingStrategy::Greedy.feed(&[sample_event()], &destinations)
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread joined").expect("feed succeeded");
    }
    assert_eq!(journal_entries(&journal).len(), 8);
}
