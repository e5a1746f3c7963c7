//! Rewrites numbers in German text into easy language.
//!
//! # Table of contents
//! * [Description](#description)
//! * [Rules](#rules)
//! * [Tag trait](#tag-trait)
//! * [CLI tool](#cli-tool)
//! * [Feature flags](#feature-flags)
//!
//! # Description
//!
//! Text for readers who benefit from easy language should avoid precise figures. This crate
//! finds percentages and numbers in German text and replaces them with rough or figurative
//! phrasings while leaving years and full dates untouched.
//!
//! ```rust
//! assert_eq!(
//!     leicht::simplify("Es waren 4567 Teilnehmer, 50 Prozent kamen Am 3. Mai 2020").unwrap(),
//!     "Es waren etwa 5000 Teilnehmer, die Hälfte kamen Am 3. Mai 2020"
//! );
//! ```
//!
//! # Rules
//!
//! [`Simplifier`] runs a fixed list of regex passes, each one on the output of the previous:
//!
//! 1. `25 Prozent` and similar become `jeder Vierte`, `die Hälfte`, `wenige`, ...
//! 2. years after `Im Jahr`, `Am`, `den`, `der`, `vom` or `ab` are hidden as `YEAR_<year>`
//! 3. dates like `Am 3. Mai 2020` are hidden as `DATE_Am_3_Mai_2020`
//! 4. remaining numbers are rounded (`etwa 5000`) or replaced with a comparison when huge
//! 5. `YEAR_` placeholders come back as `Im Jahr <year>`
//! 6. `DATE_` placeholders come back as written
//!
//! Output of the rules is not stable: running it again may rewrite the `100` inside of the
//! million phrase.
//!
//! # Tag trait
//!
//! [`Tag`] produces replacement for a single regex [`Match`]. Tags may fail, in which case the
//! whole text fails to simplify.
//!
//! # CLI tool
//!
//! `cargo run -- "Es gab 15000 Besucher"` prints `Simplified Text: ` followed by the result.
//!
//! # Feature flags
//!
//! Name | Description | Default?
//! ---|---|---
//! `cli` | required to run CLI tool | yes

mod error;
mod r#match;
mod pass;
mod rules;
mod simplifier;
mod tag;

pub mod tag_impls;

pub use error::SimplifyError;
pub use pass::Pass;
pub use r#match::Match;
pub use simplifier::Simplifier;
pub use tag::Tag;

use std::sync::OnceLock;

static SIMPLIFIER: OnceLock<Simplifier> = OnceLock::new();

/// Simplifies text with a shared lazily built [`Simplifier`]
pub fn simplify(text: &str) -> Result<String, SimplifyError> {
    let simplifier = match SIMPLIFIER.get() {
        Some(simplifier) => simplifier,
        None => {
            let built = Simplifier::new()?;
            SIMPLIFIER.get_or_init(|| built)
        }
    };

    Ok(simplifier.simplify(text)?.into_owned())
}
