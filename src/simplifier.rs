use std::borrow::Cow;

use crate::{pass::Pass, rules, SimplifyError};

/// Rewrites numbers in German text into easy language
///
/// Holds [`Pass`] objects and applies them in order, each pass sees output of previous one
#[derive(Debug, Clone)]
pub struct Simplifier {
    passes: Vec<Pass>,
}

impl Simplifier {
    /// Builds the fixed German rule set
    pub fn new() -> Result<Self, SimplifyError> {
        Ok(Self {
            passes: rules::german()?,
        })
    }

    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    /// Runs all passes against text. Text without numbers is returned as is
    pub fn simplify<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, SimplifyError> {
        self.passes
            .iter()
            .try_fold(Cow::Borrowed(text), |text, pass| {
                let applied = pass.apply(text)?;
                log::debug!("after {}: {:?}", pass.name(), applied);

                Ok(applied)
            })
    }
}
