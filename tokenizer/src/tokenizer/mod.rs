//! # Tokenizers
//!
//! The [`Tokenizer`] trait splits text into tokens and maps them onto a
//! [`Vocab`][crate::vocab::Vocab]. [`GlycoBertTokenizer`] builds on it to
//! produce fixed-length, padded batches and to decode them again.

pub(crate) mod base_tokenizer;
mod glyco_tokenizer;
pub(crate) mod tokenization_utils;

pub use base_tokenizer::Tokenizer;
pub use glyco_tokenizer::GlycoBertTokenizer;
