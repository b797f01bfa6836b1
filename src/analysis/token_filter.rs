//! Token filter implementations for token transformation.
//!
//! Filters receive a stream of tokens and produce a new stream. The filters
//! used for frequency ranking mark tokens as stopped rather than removing
//! them, so that adjacency in the original stream survives for bigram
//! construction.
//!
//! # Available Filters
//!
//! - [`strip::StripFilter`] - Removes one leading and one trailing apostrophe/hyphen
//! - [`length::LengthFilter`] - Stops tokens shorter than a minimum length
//! - [`stop::StopFilter`] - Stops (or removes) stop words
//!
//! # Filter Chaining
//!
//! ```text
//! WordTokenizer → Strip → Length(3) → Stop(marking) → unigram / bigram counts
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so one filter chain can serve concurrent
/// analyses.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use folio::analysis::token::{Token, TokenStream};
/// use folio::analysis::token_filter::Filter;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> TokenStream {
///         let reversed: Vec<Token> = tokens
///             .map(|mut t| {
///                 t.text = t.text.chars().rev().collect();
///                 t
///             })
///             .collect();
///         Box::new(reversed.into_iter())
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod length;
pub mod stop;
pub mod strip;

pub use length::LengthFilter;
pub use stop::StopFilter;
pub use strip::StripFilter;
