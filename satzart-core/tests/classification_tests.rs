//! Integration tests for the classification cascade

use satzart_core::{
    collect_markers, get_lexicon, Category, Classifier, ClauseLabel, Lexicon, Sentence, Token,
    VERB_FIRST_CONDITIONAL,
};

fn classifier() -> Classifier {
    Classifier::german().unwrap()
}

fn finite(text: &str) -> Token {
    Token::new(text, Category::Verb).with_feats("Mood=Ind|Tense=Pres|VerbForm=Fin")
}

fn aux(text: &str) -> Token {
    Token::new(text, Category::Auxiliary).with_feats("Mood=Ind|Tense=Pres|VerbForm=Fin")
}

fn noun(text: &str) -> Token {
    Token::new(text, Category::Other).with_tag("NN")
}

fn pron(text: &str) -> Token {
    Token::new(text, Category::Pronoun).with_tag("PPER")
}

fn subj(text: &str, head: usize) -> Token {
    pron(text).with_dep("nsubj", Some(head))
}

fn punct(text: &str) -> Token {
    Token::new(text, Category::Punctuation).with_tag("$.")
}

fn comma() -> Token {
    Token::new(",", Category::Punctuation).with_tag("$,")
}

#[test]
fn test_fragment_is_ellipsis_without_markers() {
    // "Ein schöner Tag."
    let sentence = Sentence::new(vec![
        Token::new("Ein", Category::Determiner),
        Token::new("schöner", Category::Other),
        noun("Tag"),
        punct("."),
    ]);
    let result = classifier().classify(&sentence);
    assert_eq!(result.label, ClauseLabel::Ellipsis);
    assert!(result.markers.is_empty());
}

#[test]
fn test_fragment_with_question_mark_is_still_ellipsis() {
    // "Noch Kaffee?"  (no finite verb)
    let sentence = Sentence::new(vec![
        Token::new("Noch", Category::Other),
        noun("Kaffee"),
        punct("?"),
    ]);
    assert_eq!(classifier().classify(&sentence).label, ClauseLabel::Ellipsis);
}

#[test]
fn test_question_mark_wins_over_everything() {
    // "Komm, weil es regnet, um zu helfen?"
    let sentence = Sentence::new(vec![
        Token::new("Komm", Category::Verb).with_feats("Mood=Imp|VerbForm=Fin"),
        comma(),
        Token::new("weil", Category::SubordinatingConjunction),
        pron("es"),
        finite("regnet"),
        comma(),
        Token::new("um", Category::SubordinatingConjunction),
        Token::new("zu", Category::Other),
        Token::new("helfen", Category::Verb).with_feats("VerbForm=Inf"),
        punct("?"),
    ]);
    let result = classifier().classify(&sentence);
    assert_eq!(result.label, ClauseLabel::Interrogative);
    assert_eq!(result.markers.into_vec(), vec!["weil"]);
}

#[test]
fn test_causal_subordinator_with_comma_und_is_hypotaxis() {
    // "Weil es regnet, bleiben wir, und sie liest."
    let sentence = Sentence::new(vec![
        Token::new("Weil", Category::SubordinatingConjunction),
        pron("es"),
        finite("regnet"),
        comma(),
        finite("bleiben"),
        pron("wir"),
        comma(),
        Token::new("und", Category::CoordinatingConjunction),
        pron("sie"),
        finite("liest"),
        punct("."),
    ]);
    let result = classifier().classify(&sentence);
    assert_eq!(result.label, ClauseLabel::Hypotaxis);
    assert_eq!(result.markers.into_vec(), vec!["weil"]);
}

#[test]
fn test_relative_clause_is_hypotaxis() {
    // "Die Frau, die dort steht, lacht."
    let sentence = Sentence::new(vec![
        Token::new("Die", Category::Determiner).with_feats("PronType=Art"),
        noun("Frau"),
        comma(),
        Token::new("die", Category::Pronoun).with_feats("Case=Nom|PronType=Rel"),
        Token::new("dort", Category::Other),
        finite("steht"),
        comma(),
        finite("lacht"),
        punct("."),
    ]);
    let result = classifier().classify(&sentence);
    assert_eq!(result.label, ClauseLabel::Hypotaxis);
    assert_eq!(result.markers.into_vec(), vec!["die"]);
}

#[test]
fn test_article_after_comma_is_not_a_marker() {
    // "Er kam, die Frau ging."  (article die)
    let sentence = Sentence::new(vec![
        subj("Er", 1),
        finite("kam"),
        comma(),
        Token::new("die", Category::Determiner).with_feats("PronType=Art"),
        noun("Frau"),
        finite("ging"),
        punct("."),
    ]);
    let lexicon = get_lexicon("de").unwrap();
    assert!(collect_markers(&sentence, lexicon).is_empty());
    assert_eq!(classifier().classify(&sentence).label, ClauseLabel::MainClause);
}

#[test]
fn test_verb_first_conditional_wins_over_imperative_fallback() {
    // "Regnet es, bleiben wir zu Hause."
    let sentence = Sentence::new(vec![
        finite("Regnet"),
        pron("es"),
        comma(),
        finite("bleiben"),
        pron("wir"),
        Token::new("zu", Category::Other),
        noun("Hause"),
        punct("."),
    ]);
    let result = classifier().classify(&sentence);
    assert_eq!(result.label, ClauseLabel::Hypotaxis);
    assert_eq!(result.rule, "verb-first-conditional");
    assert_eq!(result.markers.into_vec(), vec![VERB_FIRST_CONDITIONAL]);
}

#[test]
fn test_imperative_fallback_for_untagged_mood() {
    // "Gib mir das Buch."  (no Mood=Imp from the tagger)
    let sentence = Sentence::new(vec![
        Token::new("Gib", Category::Verb).with_tag("VVIMP").with_feats("VerbForm=Fin"),
        pron("mir"),
        Token::new("das", Category::Determiner).with_feats("PronType=Art"),
        noun("Buch"),
        punct("."),
    ]);
    assert_eq!(classifier().classify(&sentence).label, ClauseLabel::Imperative);
}

#[test]
fn test_imperative_after_opening_quote() {
    // "„Geh nach Hause!"
    let sentence = Sentence::new(vec![
        punct("„"),
        Token::new("Geh", Category::Verb).with_feats("VerbForm=Fin"),
        Token::new("nach", Category::Other),
        noun("Hause"),
        punct("!"),
    ]);
    assert_eq!(classifier().classify(&sentence).label, ClauseLabel::Imperative);
}

#[test]
fn test_declarative_exclamation() {
    // "Das ist großartig!"
    let sentence = Sentence::new(vec![
        subj("Das", 1),
        aux("ist"),
        Token::new("großartig", Category::Other),
        punct("!"),
    ]);
    assert_eq!(
        classifier().classify(&sentence).label,
        ClauseLabel::Exclamative
    );
}

#[test]
fn test_semicolon_parataxis() {
    // "Er arbeitet; sie schläft."
    let sentence = Sentence::new(vec![
        subj("Er", 1),
        finite("arbeitet"),
        Token::new(";", Category::Punctuation),
        subj("sie", 4),
        finite("schläft"),
        punct("."),
    ]);
    assert_eq!(classifier().classify(&sentence).label, ClauseLabel::Parataxis);
}

#[test]
fn test_dependency_parataxis_without_comma() {
    // "Er lacht und sie weint."  (TIGER: conjunct attached to the coordinator)
    let sentence = Sentence::new(vec![
        pron("Er").with_dep("sb", Some(1)),
        finite("lacht").with_dep("ROOT", None),
        Token::new("und", Category::CoordinatingConjunction).with_dep("cd", Some(1)),
        pron("sie").with_dep("sb", Some(4)),
        finite("weint").with_dep("cj", Some(2)),
        punct("."),
    ]);
    assert_eq!(classifier().classify(&sentence).label, ClauseLabel::Parataxis);
}

#[test]
fn test_noun_coordination_is_main_clause() {
    // "Äpfel und Birnen schmecken gut."
    let sentence = Sentence::new(vec![
        noun("Äpfel"),
        Token::new("und", Category::CoordinatingConjunction),
        noun("Birnen").with_dep("conj", Some(1)),
        finite("schmecken"),
        Token::new("gut", Category::Other),
        punct("."),
    ]);
    assert_eq!(classifier().classify(&sentence).label, ClauseLabel::MainClause);
}

#[test]
fn test_classification_is_idempotent() {
    let sentence = Sentence::new(vec![
        pron("Sie"),
        finite("sagt"),
        comma(),
        Token::new("dass", Category::SubordinatingConjunction),
        pron("er"),
        finite("kommt"),
        punct("."),
    ]);
    let classifier = classifier();
    assert_eq!(classifier.classify(&sentence), classifier.classify(&sentence));
}

#[test]
fn test_custom_lexicon() {
    let content = r#"
        [metadata]
        code = "xx"
        name = "Minimal"

        [markers]
        subordinators = ["because"]

        [coordination]
        coordinators = ["and"]
        comma_connectors = ["and"]

        [infinitive]
        particle = "to"

        [relations]
        conjunct = ["conj"]
        subject = ["nsubj"]
    "#;
    let lexicon = Lexicon::from_toml_str("minimal", content).unwrap();
    let classifier = Classifier::new(std::sync::Arc::new(lexicon));

    // "Because it rains, we stay."
    let sentence = Sentence::new(vec![
        Token::new("Because", Category::SubordinatingConjunction),
        pron("it"),
        finite("rains"),
        comma(),
        finite("stay"),
        pron("we"),
        punct("."),
    ]);
    let result = classifier.classify(&sentence);
    assert_eq!(result.label, ClauseLabel::Hypotaxis);
    assert_eq!(result.markers.into_vec(), vec!["because"]);
}
