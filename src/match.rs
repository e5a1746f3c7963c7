use std::ops::Range;

use regex_automata::util::captures::Captures;

/// Holds [`regex_automata::util::captures::Captures`] and full input of the pass
#[derive(Debug)]
pub struct Match<'a> {
    pub(crate) captures: Captures,
    pub(crate) input: &'a str,
}

impl<'a> Match<'a> {
    /// Returns full match range (regex group 0)
    #[inline]
    pub fn get_range(&self) -> Range<usize> {
        // SAFETY: Match is only created inside the crate from captures of a successful match
        unsafe { self.captures.get_match().unwrap_unchecked() }.range()
    }

    /// Returns full match (regex group 0)
    #[inline]
    pub fn get_match(&self) -> &'a str {
        // SAFETY: Match is only created inside the crate from captures of a successful match
        unsafe { self.input.get_unchecked(self.get_range()) }
    }

    /// Returns text of capture group, `None` if group did not participate in match
    pub fn get_group(&self, index: usize) -> Option<&'a str> {
        self.captures
            .get_group(index)
            .map(|span| &self.input[span.range()])
    }

    /// Text the whole pass runs on, not just the matched part
    pub fn get_input(&self) -> &'a str {
        self.input
    }

    /// Uses regex interpolation syntax to use current match in template. Groups that did not
    /// participate expand to nothing
    #[must_use]
    pub fn interpolate(&self, template: &str) -> String {
        let mut dst = String::new();

        self.captures
            .interpolate_string_into(self.input, template, &mut dst);

        dst
    }
}
