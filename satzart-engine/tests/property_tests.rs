//! Property tests for aggregation and execution strategies

use proptest::prelude::*;
use satzart_core::{Category, Sentence, Token};
use satzart_engine::{
    AnnotatedDocument, ClauseAnalyzer, ConlluAnnotator, EngineConfig, ExecutionMode,
};

fn arb_token() -> impl Strategy<Value = Token> {
    prop_oneof![
        Just(Token::new("kommt", Category::Verb).with_feats("VerbForm=Fin")),
        Just(Token::new("Geh", Category::Verb).with_feats("Mood=Imp|VerbForm=Fin")),
        Just(Token::new("zu", Category::Other)),
        Just(Token::new("gehen", Category::Verb).with_feats("VerbForm=Inf")),
        Just(Token::new("weil", Category::SubordinatingConjunction)),
        Just(Token::new("und", Category::CoordinatingConjunction)),
        Just(Token::new("Haus", Category::Other)),
        Just(Token::new(",", Category::Punctuation)),
        Just(Token::new("?", Category::Punctuation)),
        Just(Token::new("!", Category::Punctuation)),
    ]
}

fn arb_document() -> impl Strategy<Value = AnnotatedDocument> {
    prop::collection::vec(prop::collection::vec(arb_token(), 0..12), 0..40).prop_map(|sentences| {
        AnnotatedDocument::from_sentences(sentences.into_iter().map(Sentence::new).collect())
    })
}

fn analyzer(config: EngineConfig) -> ClauseAnalyzer {
    ClauseAnalyzer::builder()
        .annotator(ConlluAnnotator::new())
        .config(config)
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_equals_sequential(document in arb_document()) {
        let sequential = analyzer(EngineConfig::sequential()).analyze_document(&document).unwrap();
        let parallel = analyzer(EngineConfig::builder().threads(Some(3)).build().unwrap())
            .analyze_with_mode(&document, ExecutionMode::Parallel)
            .unwrap();
        prop_assert_eq!(sequential, parallel);
    }

    #[test]
    fn counts_sum_to_non_blank_sentences(document in arb_document()) {
        let analysis = analyzer(EngineConfig::sequential()).analyze_document(&document).unwrap();
        let non_blank = document.sentences().iter().filter(|s| !s.is_blank()).count();

        prop_assert_eq!(analysis.total(), non_blank);
        prop_assert_eq!(analysis.distribution().values().sum::<usize>(), non_blank);
        let indices: Vec<usize> = analysis.sentences().iter().map(|s| s.index).collect();
        prop_assert_eq!(indices, (1..=non_blank).collect::<Vec<_>>());

        let marker_total: usize = analysis.sentences().iter().map(|s| s.intro.len()).sum();
        prop_assert_eq!(analysis.intro_counts().values().sum::<usize>(), marker_total);
    }
}
