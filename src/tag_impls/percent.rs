use std::borrow::Cow;

use crate::{Match, SimplifyError, Tag};

/// Replaces percentage captured in group 1 with a qualitative phrase
///
/// Group 1 uses decimal comma: `12,5`
#[derive(Clone, Debug)]
pub struct Percentage;

#[allow(clippy::new_without_default)]
impl Percentage {
    pub fn new() -> Self {
        Self
    }

    pub fn new_boxed() -> Box<Self> {
        Box::new(Self::new())
    }

    /// First matching bound wins. Values in (50, 60) land in the "ein Drittel" bucket
    #[allow(clippy::float_cmp)]
    pub fn describe(value: f64) -> &'static str {
        if value == 25.0 {
            "jeder Vierte"
        } else if value == 50.0 {
            "die Hälfte"
        } else if value == 75.0 {
            "drei von vier"
        } else if value < 15.0 {
            "wenige"
        } else if value < 60.0 {
            "mehr als ein Drittel"
        } else if value < 90.0 {
            "mehr als die Hälfte"
        } else {
            "fast alle"
        }
    }
}

impl Tag for Percentage {
    fn generate<'tag, 'inp: 'tag>(
        &'tag self,
        m: &Match<'inp>,
    ) -> Result<Cow<'tag, str>, SimplifyError> {
        let literal = m.get_group(1).unwrap_or_else(|| m.get_match());
        let normalized = literal.replace(',', ".");

        let value = normalized
            .parse::<f64>()
            .map_err(|source| SimplifyError::Number {
                literal: literal.to_string(),
                source,
            })?;

        log::trace!("{literal} percent -> {value}");

        Ok(Self::describe(value).into())
    }
}
