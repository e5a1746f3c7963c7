mod digits;
mod number;
mod percent;

pub use number::{Number, CROWD_PHRASE, MILLIONS_PHRASE};
pub use percent::Percentage;

use std::borrow::Cow;

use crate::{Match, SimplifyError, Tag};

/// Expands regex template using current match
///
/// Syntax doc: <https://docs.rs/regex-automata/latest/regex_automata/util/interpolate/index.html>
#[derive(Clone, Debug)]
pub struct Template(String);

impl Template {
    pub fn new(template: &str) -> Self {
        Self(template.to_string())
    }

    pub fn new_boxed(template: &str) -> Box<Self> {
        Box::new(Self::new(template))
    }
}

impl Tag for Template {
    fn generate<'tag, 'inp: 'tag>(
        &'tag self,
        m: &Match<'inp>,
    ) -> Result<Cow<'tag, str>, SimplifyError> {
        Ok(m.interpolate(&self.0).into())
    }
}

/// Rebuilds date from `DATE_<prefix>_<day>_<month>_<year>` placeholder groups
///
/// Prefix is followed by a space only when it was captured
#[derive(Clone, Debug)]
pub struct DateRestore;

#[allow(clippy::new_without_default)]
impl DateRestore {
    pub fn new() -> Self {
        Self
    }

    pub fn new_boxed() -> Box<Self> {
        Box::new(Self::new())
    }
}

impl Tag for DateRestore {
    fn generate<'tag, 'inp: 'tag>(
        &'tag self,
        m: &Match<'inp>,
    ) -> Result<Cow<'tag, str>, SimplifyError> {
        let prefix = match m.get_group(1) {
            Some(prefix) if !prefix.is_empty() => format!("{prefix} "),
            _ => String::new(),
        };

        let day = m.get_group(2).unwrap_or_default();
        let month = m.get_group(3).unwrap_or_default();
        let year = m.get_group(4).unwrap_or_default();

        Ok(format!("{prefix}{day}. {month} {year}").into())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::Match;

    use regex_automata::meta::Regex;

    pub(crate) fn make_match<'a>(pattern: &str, input: &'a str) -> Match<'a> {
        let re = Regex::new(pattern).unwrap();
        let mut caps = re.create_captures();

        re.captures(input, &mut caps);
        assert!(caps.is_match(), "{pattern} does not match {input}");

        Match {
            captures: caps,
            input,
        }
    }

    pub(crate) fn apply(tag: &dyn Tag, pattern: &str, input: &str) -> String {
        tag.generate(&make_match(pattern, input)).unwrap().into_owned()
    }

    #[test]
    fn template() {
        let tag = Template::new("YEAR_$1");

        assert_eq!(apply(&tag, r"Am (\d{4})", "Am 1989"), "YEAR_1989");
    }

    #[test]
    fn template_braced_groups() {
        let tag = Template::new("${2}_${1}");

        assert_eq!(apply(&tag, r"(\w+) (\w+)", "swap us"), "us_swap");
    }

    #[test]
    fn template_unmatched_group_is_empty() {
        let tag = Template::new("DATE_${1}_${2}");

        assert_eq!(apply(&tag, r"(Am)?\s?(\d+)\.", " 3."), "DATE__3");
    }

    #[test]
    fn date_restore_with_prefix() {
        let tag = DateRestore::new();

        assert_eq!(
            apply(&tag, r"(Am)?_(\d+)_(\w+?)_(\d+)", "Am_3_Mai_2020"),
            "Am 3. Mai 2020"
        );
    }

    #[test]
    fn date_restore_without_prefix() {
        let tag = DateRestore::new();

        assert_eq!(
            apply(&tag, r"(Am)?_(\d+)_(\w+?)_(\d+)", "_24_Dezember_1999"),
            "24. Dezember 1999"
        );
    }
}
