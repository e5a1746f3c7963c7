use std::borrow::Cow;

use super::digits::to_ascii_digit;
use crate::{Match, SimplifyError, Tag};

/// Replacement for anything that rounds to a million or more
pub const MILLIONS_PHRASE: &str = "So viel Geld, dass man 100 Autos kaufen konnte";

/// Replacement for tens of thousands when text does not talk about money
pub const CROWD_PHRASE: &str = "So viele Menschen, wie in ein grobes Fußballstadion passen";

// checked against the whole pass input, not the surrounding words
const MONEY_MARKER: &str = "Euro";

/// Rounds German formatted number (`.` thousands separator, `,` decimal separator) or replaces
/// it with a figurative comparison
#[derive(Clone, Debug)]
pub struct Number;

#[allow(clippy::new_without_default)]
impl Number {
    pub fn new() -> Self {
        Self
    }

    pub fn new_boxed() -> Box<Self> {
        Box::new(Self::new())
    }

    /// Drops thousands separators, turns decimal comma into point and digits of any script
    /// into ASCII. `_` is kept only between two digits where it acts as digit separator
    fn normalize(literal: &str) -> String {
        let chars: Vec<char> = literal
            .chars()
            .filter(|&c| c != '.')
            .map(|c| match c {
                ',' => '.',
                c => to_ascii_digit(c).unwrap_or(c),
            })
            .collect();

        let mut normalized = String::with_capacity(chars.len());

        for (i, &c) in chars.iter().enumerate() {
            if c == '_'
                && i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(char::is_ascii_digit)
            {
                continue;
            }

            normalized.push(c);
        }

        normalized
    }

    pub fn parse(literal: &str) -> Result<f64, SimplifyError> {
        let value = Self::normalize(literal)
            .parse::<f64>()
            .map_err(|source| SimplifyError::Number {
                literal: literal.to_string(),
                source,
            })?;

        if !value.is_finite() {
            return Err(SimplifyError::NonFinite {
                literal: literal.to_string(),
            });
        }

        Ok(value)
    }

    /// Nearest multiple of 1000, ties go to even thousand
    fn round_to_thousand(value: u64) -> u64 {
        let (thousands, rest) = (value / 1000, value % 1000);

        let thousands = if rest > 500 || (rest == 500 && thousands % 2 == 1) {
            thousands + 1
        } else {
            thousands
        };

        thousands * 1000
    }

    /// Picks replacement for value that is already rounded to an integer
    pub fn describe(rounded: f64, mentions_money: bool) -> Cow<'static, str> {
        if rounded >= 1_000_000.0 {
            return MILLIONS_PHRASE.into();
        }

        if rounded >= 10_000.0 && !mentions_money {
            return CROWD_PHRASE.into();
        }

        // below a million and never negative, fits
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = rounded as u64;

        if rounded >= 1000 {
            format!("etwa {}", Self::round_to_thousand(rounded)).into()
        } else {
            format!("etwa {rounded}").into()
        }
    }
}

impl Tag for Number {
    fn generate<'tag, 'inp: 'tag>(
        &'tag self,
        m: &Match<'inp>,
    ) -> Result<Cow<'tag, str>, SimplifyError> {
        let literal = m.get_match();
        let rounded = Self::parse(literal)?.round_ties_even();

        let replacement = Self::describe(rounded, m.get_input().contains(MONEY_MARKER));
        log::trace!("{literal} -> {rounded} -> {replacement}");

        Ok(replacement)
    }
}
