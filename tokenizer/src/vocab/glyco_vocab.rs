// Copyright 2018 The Open AI Team Authors, The Google AI Language Team Authors
// Copyright 2018 The HuggingFace Inc. team.
// Copyright 2019 Guillaume Becquin
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
    errors::TokenizerError,
    vocab::{
        base_vocab::{swap_key_values, Vocab},
        vocab_file,
    },
};
use std::{
    collections::{btree_map::Entry, BTreeMap},
    fmt::{self, Display, Formatter},
    path::Path,
};

/// The reserved tokens every [`GlycoVocab`] starts with.
///
/// The discriminant of each variant is the id the token is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecialToken {
    Pad = 0,
    Cls = 1,
    Separator = 2,
    Unknown = 3,
    Mask = 4,
}

impl SpecialToken {
    /// Every special token, in id order.
    pub const ALL: [SpecialToken; 5] = [
        SpecialToken::Pad,
        SpecialToken::Cls,
        SpecialToken::Separator,
        SpecialToken::Unknown,
        SpecialToken::Mask,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SpecialToken::Pad => "[PAD]",
            SpecialToken::Cls => "[CLS]",
            SpecialToken::Separator => "[SEP]",
            SpecialToken::Unknown => "[UNK]",
            SpecialToken::Mask => "[MASK]",
        }
    }

    pub const fn id(self) -> i64 { self as i64 }

    /// Find the special token with this string representation, if any.
    pub fn lookup(token: &str) -> Option<SpecialToken> {
        SpecialToken::ALL
            .iter()
            .copied()
            .find(|special| special.as_str() == token)
    }
}

impl Display for SpecialToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// # GlycoBERT Vocab
/// Vocabulary for the glycan tokenizer. The special values always come first,
/// in the order given by [`SpecialToken::ALL`]:
/// - PAD token
/// - CLS token
/// - SEP token
/// - UNK token
/// - MASK token
///
/// Caller-supplied symbols follow, numbered in the order they were first
/// seen. The only ways to create one are [`GlycoVocab::from_symbols`] and
/// [`GlycoVocab::load`], so the special ids are always 0 to 4.
#[derive(Debug, Clone, PartialEq)]
pub struct GlycoVocab {
    pub(crate) values: BTreeMap<String, i64>,
    pub(crate) indices: BTreeMap<i64, String>,
    pub(crate) special_value_indices: BTreeMap<String, i64>,
    pub(crate) special_indices: BTreeMap<i64, String>,
}

impl GlycoVocab {
    /// Returns the PAD token (`[PAD]`)
    pub const PAD: &'static str = SpecialToken::Pad.as_str();

    /// Returns the CLS token (`[CLS]`)
    pub const CLS: &'static str = SpecialToken::Cls.as_str();

    /// Returns the SEP token (`[SEP]`)
    pub const SEPARATOR: &'static str = SpecialToken::Separator.as_str();

    /// Returns the UNK token (`[UNK]`)
    pub const UNKNOWN: &'static str = SpecialToken::Unknown.as_str();

    /// Returns the MASK token (`[MASK]`)
    pub const MASK: &'static str = SpecialToken::Mask.as_str();

    pub const SPECIAL_VALUES: &'static [&'static str] = &[
        GlycoVocab::PAD,
        GlycoVocab::CLS,
        GlycoVocab::SEPARATOR,
        GlycoVocab::UNKNOWN,
        GlycoVocab::MASK,
    ];

    /// Build a vocabulary from a list of symbols.
    ///
    /// Symbols which collide with a special token are dropped (the special
    /// token keeps its reserved id) and only the first occurrence of a
    /// repeated symbol is kept, so ids are always contiguous.
    pub fn from_symbols<I, S>(symbols: I) -> GlycoVocab
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let special_value_indices: BTreeMap<String, i64> = SpecialToken::ALL
            .iter()
            .map(|special| (special.as_str().to_string(), special.id()))
            .collect();

        let mut values = special_value_indices.clone();
        let mut next_index = SpecialToken::ALL.len() as i64;
        let mut reserved = 0_usize;
        let mut duplicates = 0_usize;

        for symbol in symbols {
            let symbol = symbol.as_ref();

            if SpecialToken::lookup(symbol).is_some() {
                reserved += 1;
                continue;
            }

            match values.entry(symbol.to_string()) {
                Entry::Vacant(entry) => {
                    entry.insert(next_index);
                    next_index += 1;
                },
                Entry::Occupied(_) => duplicates += 1,
            }
        }

        let indices = swap_key_values(&values);
        let special_indices = swap_key_values(&special_value_indices);

        tracing::debug!(
            vocab_size = values.len(),
            reserved,
            duplicates,
            "Built the vocabulary",
        );

        GlycoVocab {
            values,
            indices,
            special_value_indices,
            special_indices,
        }
    }

    /// Read a vocabulary previously written by [`GlycoVocab::save`].
    ///
    /// Only the order of the tokens in the file matters. The persisted ids
    /// are ignored and recomputed, so a file which doesn't list the special
    /// tokens first (in their fixed order) will come back with different ids.
    pub fn load(path: impl AsRef<Path>) -> Result<GlycoVocab, TokenizerError> {
        vocab_file::load(path.as_ref())
    }

    /// Write the token to id mapping to `path` as a JSON object, replacing
    /// any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TokenizerError> {
        vocab_file::save(self, path.as_ref())
    }

    /// The number of distinct tokens, including the special tokens.
    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Every token, in id order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.indices.values().map(|s| s.as_str())
    }
}

impl Vocab for GlycoVocab {
    fn values(&self) -> &BTreeMap<String, i64> { &self.values }

    fn indices(&self) -> &BTreeMap<i64, String> { &self.indices }

    fn special_values(&self) -> &BTreeMap<String, i64> {
        &self.special_value_indices
    }

    fn special_indices(&self) -> &BTreeMap<i64, String> {
        &self.special_indices
    }

    fn token_to_id(&self, token: &str) -> i64 {
        self._token_to_id(token, &self.values, SpecialToken::Unknown.id())
    }
}
