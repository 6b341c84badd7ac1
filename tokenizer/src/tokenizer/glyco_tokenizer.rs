// Copyright 2018 The Open AI Team Authors, The Google AI Language Team Authors
// Copyright 2018 The HuggingFace Inc. team.
// Copyright 2019-2020 Guillaume Becquin
// Copyright 2020 Maarten van Gompel
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{
    config::TokenizerConfig,
    encoding::EncodedBatch,
    errors::TokenizerError,
    tokenizer::{
        base_tokenizer::Tokenizer, tokenization_utils::whitespace_tokenize,
    },
    vocab::{GlycoVocab, SpecialToken, Vocab},
};
use ndarray::ArrayView2;
use std::{borrow::Borrow, path::Path};

/// # GlycoBERT tokenizer
/// Turns whitespace-separated glycan tokens into fixed-length rows of ids
/// (`[CLS] tokens... [SEP] [PAD]...`) with a matching attention mask, and
/// turns those ids back into text.
///
/// The vocabulary is never modified after construction, so one tokenizer can
/// be shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct GlycoBertTokenizer {
    vocab: GlycoVocab,
    max_seq_length: usize,
}

impl GlycoBertTokenizer {
    pub const DEFAULT_MAX_SEQ_LENGTH: usize =
        TokenizerConfig::DEFAULT_MAX_SEQ_LENGTH;

    /// Where the vocabulary is conventionally saved.
    pub const DEFAULT_VOCAB_FILE: &'static str = "vocab.json";

    /// Create a tokenizer from a list of vocabulary symbols.
    ///
    /// Special tokens are always assigned the first ids, regardless of where
    /// (or whether) they appear in `symbols`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glycobert_tokenizer::GlycoBertTokenizer;
    ///
    /// let tokenizer =
    ///     GlycoBertTokenizer::new(["Gal", "(b1-4)", "GlcNAc"], 8).unwrap();
    ///
    /// assert_eq!(tokenizer.vocab_size(), 8);
    /// ```
    pub fn new<I, S>(
        symbols: I,
        max_seq_length: usize,
    ) -> Result<Self, TokenizerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        GlycoBertTokenizer::from_existing_vocab(
            GlycoVocab::from_symbols(symbols),
            max_seq_length,
        )
    }

    pub fn with_config<I, S>(
        symbols: I,
        config: &TokenizerConfig,
    ) -> Result<Self, TokenizerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        GlycoBertTokenizer::new(symbols, config.max_seq_length)
    }

    /// Wrap a vocabulary built by [`GlycoVocab::from_symbols`] or
    /// [`GlycoVocab::load`].
    pub fn from_existing_vocab(
        vocab: GlycoVocab,
        max_seq_length: usize,
    ) -> Result<Self, TokenizerError> {
        if max_seq_length == 0 {
            return Err(TokenizerError::InvalidMaxSeqLength);
        }

        Ok(GlycoBertTokenizer {
            vocab,
            max_seq_length,
        })
    }

    /// Create a tokenizer from a vocabulary file written by
    /// [`GlycoBertTokenizer::save_vocabulary`].
    ///
    /// Ids are reassigned from the order tokens appear in the file, not read
    /// from it. Loading a file that was edited by hand, or which doesn't
    /// start with the special tokens in their usual order, may therefore give
    /// tokens different ids to the ones written in the file.
    pub fn load_vocabulary(
        path: impl AsRef<Path>,
        max_seq_length: usize,
    ) -> Result<Self, TokenizerError> {
        let vocab = GlycoVocab::load(path)?;
        GlycoBertTokenizer::from_existing_vocab(vocab, max_seq_length)
    }

    /// Save the token to id mapping as JSON, overwriting `path` if it
    /// already exists.
    pub fn save_vocabulary(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<(), TokenizerError> {
        self.vocab.save(path)
    }

    pub fn max_seq_length(&self) -> usize { self.max_seq_length }

    /// The number of distinct tokens, including the special tokens.
    pub fn vocab_size(&self) -> usize { self.vocab.len() }

    /// Encode a single text as a batch with one row.
    pub fn encode<S: AsRef<str>>(&self, text: S) -> EncodedBatch {
        self.encode_batch([text])
    }

    /// Encode each text independently, one row per text.
    ///
    /// Rows shorter than the maximum sequence length are right-padded. Longer
    /// rows keep only their first `max_seq_length` ids, which means the
    /// trailing `[SEP]` is lost when a text is too long.
    pub fn encode_batch<S, ST>(&self, texts: S) -> EncodedBatch
    where
        S: AsRef<[ST]>,
        ST: AsRef<str>,
    {
        let texts = texts.as_ref();
        let mut batch = EncodedBatch::padded(
            texts.len(),
            self.max_seq_length,
            SpecialToken::Pad.id(),
        );

        for (row, text) in texts.iter().enumerate() {
            let token_ids = self.encode_row(text.as_ref());
            batch.fill_row(row, &token_ids);
        }

        batch
    }

    fn encode_row(&self, text: &str) -> Vec<i64> {
        let tokens = self.tokenize(text);
        let token_ids = self.convert_tokens_to_ids(&tokens);
        let mut token_ids = self.build_input_with_special_tokens(token_ids);

        if token_ids.len() > self.max_seq_length {
            tracing::trace!(
                length = token_ids.len(),
                max_seq_length = self.max_seq_length,
                "Truncating an encoded sequence",
            );
            token_ids.truncate(self.max_seq_length);
        }

        token_ids
    }

    /// Decode a single row of ids back into space-separated tokens.
    ///
    /// `[PAD]` is always dropped. The other special tokens are only dropped
    /// when `skip_special_tokens` is set.
    pub fn decode<I>(
        &self,
        token_ids: I,
        skip_special_tokens: bool,
    ) -> Result<String, TokenizerError>
    where
        I: IntoIterator,
        I::Item: Borrow<i64>,
    {
        let kept = token_ids
            .into_iter()
            .map(|id| *id.borrow())
            .filter(|&id| !self.is_skipped(id, skip_special_tokens));
        let tokens = self.convert_ids_to_tokens(kept)?;

        Ok(tokens.join(" "))
    }

    /// Decode every row of a batch, in order.
    pub fn decode_batch(
        &self,
        token_ids: ArrayView2<'_, i64>,
        skip_special_tokens: bool,
    ) -> Result<Vec<String>, TokenizerError> {
        token_ids
            .outer_iter()
            .map(|row| self.decode(row, skip_special_tokens))
            .collect()
    }

    fn is_skipped(&self, id: i64, skip_special_tokens: bool) -> bool {
        if skip_special_tokens {
            self.vocab.is_special_id(id)
        } else {
            id == SpecialToken::Pad.id()
        }
    }
}

impl Tokenizer<GlycoVocab> for GlycoBertTokenizer {
    fn vocab(&self) -> &GlycoVocab { &self.vocab }

    fn tokenize<S: AsRef<str>>(&self, text: S) -> Vec<String> {
        whitespace_tokenize(text.as_ref())
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn build_input_with_special_tokens(
        &self,
        token_ids: Vec<i64>,
    ) -> Vec<i64> {
        let mut output = Vec::with_capacity(token_ids.len() + 2);
        output.push(self.vocab.token_to_id(GlycoVocab::CLS));
        output.extend(token_ids);
        output.push(self.vocab.token_to_id(GlycoVocab::SEPARATOR));
        output
    }
}
