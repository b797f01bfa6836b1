//! Strip filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;

/// A filter that removes one leading and one trailing edge mark from tokens.
///
/// Edge marks are apostrophes and hyphens by default. At most one character is
/// removed from each end, so `"--dash"` becomes `"-dash"` and `"'quoted'"`
/// becomes `"quoted"`. Stopped tokens pass through untouched.
#[derive(Clone, Debug)]
pub struct StripFilter {
    marks: Vec<char>,
}

impl StripFilter {
    /// Create a strip filter for apostrophes and hyphens.
    pub fn new() -> Self {
        Self::with_marks(['\'', '-'])
    }

    /// Create a strip filter for a custom set of edge characters.
    pub fn with_marks<I: IntoIterator<Item = char>>(marks: I) -> Self {
        StripFilter {
            marks: marks.into_iter().collect(),
        }
    }

    /// Strip a single term.
    pub fn strip<'a>(&self, term: &'a str) -> &'a str {
        let is_mark = |c: char| self.marks.contains(&c);

        let mut chars = term.chars();
        let term = match chars.next() {
            Some(first) if is_mark(first) => chars.as_str(),
            _ => term,
        };

        let mut chars = term.chars();
        match chars.next_back() {
            Some(last) if is_mark(last) => chars.as_str(),
            _ => term,
        }
    }
}

impl Default for StripFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StripFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let marks = self.clone();
        Box::new(tokens.map(move |token| {
            if token.is_stopped() {
                return token;
            }
            let stripped = marks.strip(&token.text);
            if stripped.len() == token.text.len() {
                token
            } else {
                let text = stripped.to_string();
                token.with_text(text)
            }
        }))
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}
