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

use crate::{errors::TokenizerError, vocab::Vocab};
use std::borrow::Borrow;

/// # Base trait for tokenizers
pub trait Tokenizer<T: Vocab> {
    /// returns a reference to the tokenizer vocabulary
    fn vocab(&self) -> &T;

    /// Tokenize a string, returns a vector of tokens as strings.
    ///
    /// # Parameters
    /// - text : text (string-like) to tokenize
    ///
    /// # Returns
    /// `Vec<String>` containing the tokens string representation
    fn tokenize<S: AsRef<str>>(&self, text: S) -> Vec<String>;

    /// Tokenize a list of strings, each one independently.
    fn tokenize_list<S, ST>(&self, text_list: S) -> Vec<Vec<String>>
    where
        S: AsRef<[ST]>,
        ST: AsRef<str>,
    {
        text_list
            .as_ref()
            .iter()
            .map(|text| self.tokenize(text))
            .collect()
    }

    /// Convert a slice of string-like to a vector ot token indices
    ///
    /// # Parameters
    /// - tokens: list of token string-like to convert to ids
    ///
    /// # Returns
    /// `Vec<i64>` with the token indices. Tokens missing from the vocabulary
    /// get the unknown token's index.
    fn convert_tokens_to_ids<S, ST>(&self, tokens: S) -> Vec<i64>
    where
        S: AsRef<[ST]>,
        ST: AsRef<str>,
    {
        tokens
            .as_ref()
            .iter()
            .map(|v| self.vocab().token_to_id(v.as_ref()))
            .collect()
    }

    /// Convert a sequence of ids back to their tokens.
    ///
    /// Fails on the first id that isn't in the vocabulary.
    fn convert_ids_to_tokens<'a, I>(
        &'a self,
        token_ids: I,
    ) -> Result<Vec<&'a str>, TokenizerError>
    where
        I: IntoIterator,
        I::Item: Borrow<i64>,
        T: 'a,
    {
        token_ids
            .into_iter()
            .map(|id| {
                let id = *id.borrow();
                self.vocab()
                    .id_to_token(id)
                    .ok_or(TokenizerError::UnknownId { id })
            })
            .collect()
    }

    /// Wrap a sequence of token ids in the markers the model expects, for
    /// example `[CLS] X [SEP]`.
    fn build_input_with_special_tokens(
        &self,
        token_ids: Vec<i64>,
    ) -> Vec<i64>;
}
