use lexiscore::analysis::readability::analyze;
use lexiscore::core::ReadabilityMetrics;
use lexiscore::lexicon::Lexicon;
use pretty_assertions::assert_eq;

#[test]
fn whitespace_placeholder_yields_all_zeros() {
    let metrics = analyze(" ", &Lexicon::default());
    assert_eq!(metrics, ReadabilityMetrics::default());
}

#[test]
fn counts_personal_pronouns_case_insensitively() {
    let metrics = analyze("I love this. We love that.", &Lexicon::default());
    assert_eq!(metrics.personal_pronoun_count, 2);
    assert_eq!(metrics.word_count, 6);
    assert_eq!(metrics.avg_sentence_length, 3.0);
    assert_eq!(metrics.avg_words_per_sentence, 3.0);
    assert_eq!(metrics.complex_word_count, 4);
    assert_eq!(metrics.pct_complex_words, 0.667);
    assert_eq!(metrics.fog_index, 1.467);
    assert_eq!(metrics.syllable_count, 8);
    assert_eq!(metrics.avg_word_length, 3.167);
}

#[test]
fn sentences_without_words_fall_back_to_zero_ratios() {
    // All tokens are numeric, so the sentence survives but no word does.
    let metrics = analyze("42 7 99.", &Lexicon::default());
    assert_eq!(metrics.word_count, 0);
    assert_eq!(metrics.avg_sentence_length, 0.0);
    assert_eq!(metrics.pct_complex_words, 0.0);
    assert_eq!(metrics.fog_index, 0.0);
    assert_eq!(metrics.avg_word_length, 0.0);
}

#[test]
fn complex_words_are_longer_than_two_chars() {
    let metrics = analyze("we go far today.", &Lexicon::default());
    assert_eq!(metrics.word_count, 4);
    assert_eq!(metrics.complex_word_count, 2);
    assert_eq!(metrics.pct_complex_words, 0.5);
    assert_eq!(metrics.fog_index, 1.8);
    assert_eq!(metrics.avg_word_length, 3.0);
}

#[test]
fn syllables_count_vowel_cluster_runs() {
    // "queue" has one maximal vowel run, "audio" has two.
    let metrics = analyze("queue audio.", &Lexicon::default());
    assert_eq!(metrics.syllable_count, 3);
}

#[test]
fn stop_words_are_excluded_from_word_stats() {
    let stop_words = Lexicon::from_words(["the"]);
    let metrics = analyze("The the the cat.", &stop_words);
    assert_eq!(metrics.word_count, 1);
    assert_eq!(metrics.avg_sentence_length, 1.0);
}

#[test]
fn avg_words_per_sentence_duplicates_avg_sentence_length() {
    let metrics = analyze("One two three. Four five.", &Lexicon::default());
    assert_eq!(metrics.avg_words_per_sentence, metrics.avg_sentence_length);
}

#[test]
fn ratios_are_rounded_to_three_decimals() {
    // 7 words over 3 sentences: 2.3333... rounds to 2.333.
    let metrics = analyze("ant bee cat. dog elk fox. gnu.", &Lexicon::default());
    assert_eq!(metrics.avg_sentence_length, 2.333);
}
