use lexiscore::lexicon::Lexicon;
use lexiscore::{clean, split_sentences};
use pretty_assertions::assert_eq;

#[test]
fn lowercases_and_keeps_alphabetic_tokens() {
    let tokens = clean("Good GOOD bad", &Lexicon::default());
    assert_eq!(tokens, ["good", "good", "bad"]);
}

#[test]
fn drops_numeric_and_mixed_tokens() {
    let tokens = clean("version 2 of abc123 shipped 42 times", &Lexicon::default());
    assert_eq!(tokens, ["version", "of", "shipped", "times"]);
}

#[test]
fn removes_stop_words_by_lowercased_form() {
    let stop_words = Lexicon::from_words(["the", "and"]);
    let tokens = clean("The cat AND the dog", &stop_words);
    assert_eq!(tokens, ["cat", "dog"]);
}

#[test]
fn strips_contraction_suffixes() {
    let tokens = clean("don't can't it's we'll I'm", &Lexicon::default());
    assert_eq!(tokens, ["do", "ca", "it", "we", "i"]);
}

#[test]
fn drops_apostrophe_words_without_a_known_suffix() {
    let tokens = clean("O'Brien met at o'clock", &Lexicon::default());
    assert_eq!(tokens, ["met", "at"]);
}

#[test]
fn punctuation_only_input_is_empty() {
    assert!(clean("... !!! ??? ---", &Lexicon::default()).is_empty());
}

#[test]
fn empty_input_yields_empty_sequence() {
    assert!(clean("", &Lexicon::default()).is_empty());
}

#[test]
fn splits_sentences_on_terminators() {
    let sentences = split_sentences("I love this. We love that.");
    assert_eq!(sentences, ["I love this", "We love that"]);
}

#[test]
fn collapses_terminator_runs_into_one_boundary() {
    let sentences = split_sentences("Wait... what?! Really.");
    assert_eq!(sentences, ["Wait", "what", "Really"]);
}

#[test]
fn whitespace_only_text_has_no_sentences() {
    assert!(split_sentences(" ").is_empty());
    assert!(split_sentences("   \t ").is_empty());
    assert!(split_sentences("").is_empty());
}

#[test]
fn unterminated_prose_is_a_single_sentence() {
    assert_eq!(split_sentences("good good bad").len(), 1);
}
