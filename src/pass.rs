use std::{borrow::Cow, fmt};

use regex_automata::{meta::Regex, util::syntax};

use crate::{tag::Tag, Match, SimplifyError};

/// Single rewrite step: regex and the tag producing replacement for each of its matches
#[derive(Clone)]
pub struct Pass {
    name: &'static str,
    pattern: String,
    tag: Box<dyn Tag>,
    regex: Regex,
}

// skips 20 pages of debug output of `regex` field
#[allow(clippy::missing_fields_in_debug)]
impl fmt::Debug for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pass")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .field("tag", &self.tag)
            .finish()
    }
}

impl Pass {
    /// Compiles pattern. Matching is case sensitive with unicode aware `\b`, `\d`, `\w` and `\s`
    pub fn new(name: &'static str, pattern: &str, tag: Box<dyn Tag>) -> Result<Self, SimplifyError> {
        let regex = Regex::builder()
            .syntax(syntax::Config::new().unicode(true).case_insensitive(false))
            .build(pattern)?;

        Ok(Self {
            name,
            pattern: pattern.to_string(),
            tag,
            regex,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Produces string with all non-overlapping matches replaced by tag output. Tag sees the
    /// full `text` as match input
    pub fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, SimplifyError> {
        let input = text.as_ref();

        let mut caps_iter = self.regex.captures_iter(input);

        let Some(mut captures) = caps_iter.next() else {
            return Ok(text);
        };

        let mut last_replacement = 0;
        let mut output = String::with_capacity(text.len());

        loop {
            let m = Match { input, captures };
            let range = m.get_range();

            let repl = self.tag.generate(&m)?;
            log::trace!("{}: {:?} -> {:?}", self.name, m.get_match(), repl);

            output.push_str(&input[last_replacement..range.start]);
            output.push_str(&repl);

            last_replacement = range.end;

            captures = match caps_iter.next() {
                Some(caps) => caps,
                None => break,
            };
        }

        output.push_str(&input[last_replacement..]);

        Ok(Cow::Owned(output))
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::Pass;
    use crate::{tag_impls::Template, SimplifyError};

    #[test]
    fn no_match_borrows() {
        let pass = Pass::new("", r"\d+", Template::new_boxed("N")).unwrap();

        assert!(matches!(
            pass.apply(Cow::Borrowed("no digits")).unwrap(),
            Cow::Borrowed("no digits")
        ));
    }

    #[test]
    fn replaces_all_matches() {
        let pass = Pass::new("", r"(\d+)", Template::new_boxed("<$1>")).unwrap();

        assert_eq!(
            pass.apply(Cow::Borrowed("1 and 22 and 333")).unwrap(),
            "<1> and <22> and <333>"
        );
    }

    #[test]
    fn case_sensitive() {
        let pass = Pass::new("", r"\bAm\b", Template::new_boxed("X")).unwrap();

        assert_eq!(pass.apply(Cow::Borrowed("Am am AM")).unwrap(), "X am AM");
    }

    #[test]
    fn unicode_classes() {
        let pass = Pass::new("", r"\b\w+\b", Template::new_boxed("w")).unwrap();

        assert_eq!(pass.apply(Cow::Borrowed("Hälfte März")).unwrap(), "w w");
    }

    #[test]
    fn bad_pattern() {
        assert!(matches!(
            Pass::new("", r"(unclosed", Template::new_boxed("")),
            Err(SimplifyError::BadPattern(_))
        ));
    }
}
