//! Basic tests for wordtally-engine

use std::sync::Arc;
use std::thread;
use std::time::Duration;
use wordtally_engine::*;

fn compute(text: &str) -> StatisticsResult {
    StatisticsAggregator::default()
        .compute_text(text, &Locale::Default)
        .unwrap()
}

#[test]
fn test_scenario_counts() {
    assert_eq!(compute(""), StatisticsResult::new(0, 0));
    assert_eq!(compute("Hello, world!"), StatisticsResult::new(2, 13));
    assert_eq!(compute("cafe\u{301}"), StatisticsResult::new(1, 4));
    assert_eq!(compute("   "), StatisticsResult::new(0, 3));

    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
    assert_eq!(compute(family).grapheme_count, 1);
}

#[test]
fn test_numbers_and_contractions() {
    assert_eq!(compute("It costs 3.50 today").word_count, 4);
    assert_eq!(compute("don't stop").word_count, 2);
}

#[test]
fn test_word_count_matches_word_like_segments() {
    let aggregator = StatisticsAggregator::default();
    let snapshot = TextSnapshot::new("One, two; three... four!");

    let resolved = aggregator
        .segmentation(AnalyzerKind::Word, &snapshot, &Locale::Default)
        .unwrap();
    let words: Vec<&str> = resolved
        .segmentation
        .segments()
        .filter(Segment::is_word_like)
        .map(|segment| segment.text(snapshot.as_str()))
        .collect();

    assert_eq!(words, ["One", "two", "three", "four"]);
    assert_eq!(
        aggregator.compute(&snapshot, &Locale::Default).unwrap().word_count,
        4
    );
}

#[test]
fn test_locale_fallback_is_silent() {
    let aggregator = StatisticsAggregator::default();
    let text = "Unsupported locales still count: 日本語 and English.";

    for tag in ["zz-!!", "%%", "not a locale", "x"] {
        let stats = aggregator.compute_text(text, &Locale::new(tag)).unwrap();
        assert_eq!(stats, compute(text), "locale {tag:?}");
    }
}

#[test]
fn test_supported_locales() {
    let aggregator = StatisticsAggregator::default();
    for tag in ["en", "en-US", "ja-JP", "th", "fr_FR.UTF-8"] {
        let analysis = aggregator
            .analyze(&TextSnapshot::new("Hello world"), &Locale::new(tag))
            .unwrap();
        assert_eq!(analysis.stats.word_count, 2, "locale {tag:?}");
        assert!(!analysis.metadata.locale_fallback, "locale {tag:?}");
    }
}

#[test]
fn test_input_sources_agree() {
    let aggregator = StatisticsAggregator::default();
    let text = "Grüße aus Köln";

    let from_text = Input::from_text(text).into_snapshot().unwrap();
    let from_bytes = Input::from_bytes(text.as_bytes().to_vec())
        .into_snapshot()
        .unwrap();
    let utf16: Vec<u16> = text.encode_utf16().collect();

    let expected = aggregator.compute(&from_text, &Locale::Default).unwrap();
    assert_eq!(
        aggregator.compute(&from_bytes, &Locale::Default).unwrap(),
        expected
    );
    assert_eq!(
        aggregator.compute_utf16(&utf16, &Locale::Default).unwrap(),
        expected
    );
    assert_eq!(expected, StatisticsResult::new(3, 14));
}

#[test]
fn test_invalid_text_error_message() {
    let err = StatisticsAggregator::default()
        .compute_utf8(vec![b'a', 0xFF, b'b'], &Locale::Default)
        .unwrap_err();

    assert!(err.is_invalid_text());
    assert!(err.to_string().contains("byte 1"), "{err}");
}

#[test]
fn test_concurrent_computations() {
    let aggregator = Arc::new(StatisticsAggregator::default());
    let texts = [
        "Hello, world!",
        "cafe\u{301}",
        "日本語のテキスト",
        "   ",
        "one two three four",
    ];
    let expected: Vec<StatisticsResult> = texts.iter().map(|t| compute(t)).collect();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let aggregator = Arc::clone(&aggregator);
            thread::spawn(move || {
                (0..50)
                    .map(|j| {
                        let index = (i + j) % texts.len();
                        let stats = aggregator
                            .compute_text(texts[index], &Locale::Default)
                            .unwrap();
                        (index, stats)
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for (index, stats) in handle.join().unwrap() {
            assert_eq!(stats, expected[index]);
        }
    }
}

#[test]
fn test_live_statistics_tracks_edits() {
    let live = LiveStatistics::spawn(StatisticsAggregator::default()).unwrap();

    let mut text = String::new();
    let mut last = 0;
    for c in "The quick brown fox".chars() {
        text.push(c);
        last = live
            .submit(TextSnapshot::new(text.clone()), Locale::Default)
            .unwrap();
    }

    let update = live
        .wait_for(last, Duration::from_secs(10))
        .unwrap()
        .expect("final update");
    assert_eq!(update.generation, last);
    assert_eq!(update.result.unwrap(), StatisticsResult::new(4, 19));
}

#[test]
fn test_live_statistics_reports_errors_per_update() {
    let live = LiveStatistics::spawn(StatisticsAggregator::default()).unwrap();
    let generation = live
        .submit(TextSnapshot::new("fine"), Locale::new("!!"))
        .unwrap();

    let update = live
        .wait_for(generation, Duration::from_secs(10))
        .unwrap()
        .unwrap();
    assert_eq!(update.result.unwrap(), StatisticsResult::new(1, 4));
}
