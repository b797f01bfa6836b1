//! Length filter implementation.

use super::Filter;

use crate::analysis::token::{Token, TokenStream};

/// A filter that stops tokens shorter than a minimum number of characters.
///
/// Like [`StopFilter`](super::stop::StopFilter), it can either remove short
/// tokens or only mark them as stopped.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min_len: usize,
    remove_stopped: bool,
}

impl LengthFilter {
    /// Create a filter removing tokens with fewer than `min_len` characters.
    pub fn new(min_len: usize) -> Self {
        LengthFilter {
            min_len,
            remove_stopped: true,
        }
    }

    /// Set whether short tokens are removed or only marked as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Get the minimum length.
    pub fn min_len(&self) -> usize {
        self.min_len
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let filtered: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() || token.len() >= self.min_len {
                    Some(token)
                } else if self.remove_stopped {
                    None
                } else {
                    Some(token.stop())
                }
            })
            .collect();

        Box::new(filtered.into_iter())
    }

    fn name(&self) -> &'static str {
        "length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_filter() {
        let filter = LengthFilter::new(3);
        let tokens = vec![
            Token::new("an", 0),
            Token::new("ant", 1),
            Token::new("", 2),
            Token::new("anteater", 3),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "ant");
        assert_eq!(result[1].text, "anteater");
    }

    #[test]
    fn test_length_filter_marks() {
        let filter = LengthFilter::new(3).remove_stopped(false);
        let tokens = vec![Token::new("ox", 0), Token::new("yak", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).collect();

        assert_eq!(result.len(), 2);
        assert!(result[0].is_stopped());
        assert!(!result[1].is_stopped());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LengthFilter::new(3).name(), "length");
        assert_eq!(LengthFilter::new(3).min_len(), 3);
    }
}
