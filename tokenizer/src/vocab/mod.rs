//! # Vocabularies
//!
//! The bidirectional mapping between glycan tokens and their integer ids,
//! plus the flat JSON format used to persist it.
//!
//! Vocabularies implement the [`Vocab`] trait, which is what the tokenizers
//! use to look tokens up.

pub(crate) mod base_vocab;
pub mod glyco_vocab;
mod vocab_file;

pub use base_vocab::Vocab;
pub use glyco_vocab::{GlycoVocab, SpecialToken};
