//! Construction detectors consulted by the classification cascade
//!
//! Each detector is a total function of a sentence and a lexicon. Variants
//! taking precomputed features (`*_with`) let the cascade share work between
//! rules.

mod conditional;
mod coordination;
mod imperative;
mod infinitive;

pub use conditional::{is_verb_first_conditional, is_verb_first_conditional_with};
pub use coordination::{detect_coordination, detect_coordination_with, CoordinationKind};
pub use imperative::{
    detect_imperative, is_imperative_fallback, is_imperative_fallback_with, is_imperative_strict,
    ImperativeKind,
};
pub use infinitive::{detect_infinitive, InfinitiveClause};
