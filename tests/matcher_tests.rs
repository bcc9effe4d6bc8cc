use lexiscore::core::{DocumentMetrics, ReadabilityMetrics, SentimentScores};
use lexiscore::errors::AnalysisError;
use lexiscore::io::table::OutputTable;
use lexiscore::matcher::{apply_batch, apply_metrics, UnmatchedPolicy};
use pretty_assertions::assert_eq;

fn bundle(id: &str) -> DocumentMetrics {
    DocumentMetrics {
        id: id.to_string(),
        sentiment: SentimentScores {
            positive_score: 2,
            negative_score: 1,
            polarity_score: 0.333,
            subjectivity_score: 1.0,
        },
        readability: ReadabilityMetrics {
            avg_sentence_length: 3.0,
            pct_complex_words: 0.667,
            fog_index: 1.467,
            avg_words_per_sentence: 3.0,
            complex_word_count: 4,
            word_count: 6,
            syllable_count: 8,
            personal_pronoun_count: 2,
            avg_word_length: 3.167,
        },
    }
}

fn table() -> OutputTable {
    OutputTable::new(
        vec!["URL_ID".into(), "URL".into()],
        vec![
            vec!["Art101".into(), "https://example.com/a".into()],
            vec!["Art102".into(), "https://example.com/b".into()],
        ],
    )
}

#[test]
fn writes_all_thirteen_columns_for_a_matching_row() {
    let mut table = table();
    assert!(apply_metrics(&mut table, &bundle("Art101")));

    let expected = [
        "2", "1", "0.333", "1", "3", "0.667", "1.467", "3", "4", "6", "8", "2", "3.167",
    ];
    for (offset, cell) in expected.iter().enumerate() {
        assert_eq!(table.cell("Art101", offset), Some(*cell));
    }
}

#[test]
fn other_rows_are_left_untouched() {
    let mut table = table();
    apply_metrics(&mut table, &bundle("Art101"));
    assert_eq!(table.cell("Art102", 0), None);
}

#[test]
fn unmatched_bundle_leaves_table_unchanged() {
    let mut mutated = table();
    let pristine = table();

    let report = apply_batch(&mut mutated, &[bundle("Ghost99")], UnmatchedPolicy::Warn).unwrap();
    assert_eq!(mutated, pristine);
    assert_eq!(report.matched, 0);
    assert_eq!(report.unmatched, ["Ghost99"]);
}

#[test]
fn ignore_policy_still_counts_unmatched() {
    let mut table = table();
    let report =
        apply_batch(&mut table, &[bundle("Ghost99")], UnmatchedPolicy::Ignore).unwrap();
    assert_eq!(report.unmatched, ["Ghost99"]);
}

#[test]
fn fail_policy_aborts_on_first_unmatched() {
    let mut table = table();
    let err = apply_batch(
        &mut table,
        &[bundle("Art101"), bundle("Ghost99")],
        UnmatchedPolicy::Fail,
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AnalysisError>(),
        Some(AnalysisError::UnmatchedDocument(id)) if id == "Ghost99"
    ));
}

#[test]
fn write_time_rounding_is_applied() {
    let mut table = table();
    let mut metrics = bundle("Art101");
    metrics.sentiment.polarity_score = 1.0 / 3.0;
    metrics.readability.pct_complex_words = 2.0 / 3.0;

    apply_metrics(&mut table, &metrics);
    assert_eq!(table.cell("Art101", 2), Some("0.333"));
    assert_eq!(table.cell("Art101", 5), Some("0.667"));
}

#[test]
fn write_time_rounding_is_idempotent() {
    let mut once = table();
    apply_metrics(&mut once, &bundle("Art101"));
    let mut twice = once.clone();
    apply_metrics(&mut twice, &bundle("Art101"));
    assert_eq!(once, twice);
}

#[test]
fn batch_reports_matched_and_unmatched_counts() {
    let mut table = table();
    let report = apply_batch(
        &mut table,
        &[bundle("Art101"), bundle("Art102"), bundle("Ghost99")],
        UnmatchedPolicy::Warn,
    )
    .unwrap();
    assert_eq!(report.matched, 2);
    assert_eq!(report.unmatched, ["Ghost99"]);
}
