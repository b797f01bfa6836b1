//! Text analysis module for Folio.
//!
//! This module provides the building blocks of a document profile:
//! tokenization, token filtering, sentence segmentation, frequency ranking,
//! sentiment scoring and per-page statistics. Every stage is a pure function of
//! its input and never fails.

pub mod analyzer;
pub mod frequency;
pub mod lexicon;
pub mod page;
pub mod segment;
pub mod sentiment;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
