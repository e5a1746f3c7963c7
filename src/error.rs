use std::num::ParseFloatError;

use regex_automata::meta::BuildError;
use thiserror::Error;

/// Everything that can go wrong while building or running a [`Simplifier`]
///
/// [`Simplifier`]: crate::Simplifier
#[derive(Debug, Error)]
pub enum SimplifyError {
    /// Matched numeric literal is not a decimal number after separator normalization
    #[error("cannot parse number {literal:?}: {source}")]
    Number {
        literal: String,
        #[source]
        source: ParseFloatError,
    },

    /// Numeric literal does not fit into a float
    #[error("number {literal:?} is too large")]
    NonFinite { literal: String },

    /// Rule pattern failed to compile
    #[error("regex compilation failed: {0}")]
    BadPattern(#[from] Box<BuildError>),
}

impl From<BuildError> for SimplifyError {
    fn from(err: BuildError) -> Self {
        Self::BadPattern(Box::new(err))
    }
}
