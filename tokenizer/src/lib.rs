//! Tokenization for GlycoBERT-style models.
//!
//! Glycan structures are written as whitespace-separated tokens (monosaccharides,
//! linkages, branch brackets, ...). [`GlycoBertTokenizer`] maps them onto a
//! fixed vocabulary and produces padded id matrices plus attention masks that
//! can be fed straight into a transformer.
//!
//! ```rust
//! use glycobert_tokenizer::GlycoBertTokenizer;
//!
//! let tokenizer =
//!     GlycoBertTokenizer::new(["Gal", "(b1-4)", "GlcNAc"], 6).unwrap();
//!
//! let encoded = tokenizer.encode("Gal (b1-4) GlcNAc");
//! assert_eq!(encoded.token_ids.row(0).to_vec(), vec![1, 5, 6, 7, 2, 0]);
//! assert_eq!(encoded.attention_mask.row(0).to_vec(), vec![1, 1, 1, 1, 1, 0]);
//!
//! let decoded = tokenizer.decode(encoded.token_ids.row(0), true).unwrap();
//! assert_eq!(decoded, "Gal (b1-4) GlcNAc");
//! ```

pub mod config;
pub mod encoding;
mod errors;
pub mod tokenizer;
pub mod vocab;

pub use crate::{
    config::TokenizerConfig,
    encoding::EncodedBatch,
    errors::TokenizerError,
    tokenizer::{GlycoBertTokenizer, Tokenizer},
    vocab::{GlycoVocab, SpecialToken, Vocab},
};
