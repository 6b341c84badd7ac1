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

use std::collections::BTreeMap;

pub(crate) fn swap_key_values<T: Clone, U: Copy + Ord>(
    input_map: &BTreeMap<T, U>,
) -> BTreeMap<U, T> {
    input_map
        .iter()
        .map(|(key, &value)| (value, key.clone()))
        .collect()
}

/// # Base Vocab trait
/// Defines a common interface to the vocabularies for use in the tokenizers.
pub trait Vocab {
    /// Return the map of token strings to IDs
    fn values(&self) -> &BTreeMap<String, i64>;

    /// Return the map of token IDs to strings
    fn indices(&self) -> &BTreeMap<i64, String>;

    /// Return the map of special token strings to IDs
    fn special_values(&self) -> &BTreeMap<String, i64>;

    /// Return the map of token IDs to strings for special values
    fn special_indices(&self) -> &BTreeMap<i64, String>;

    /// Converts a token to an id, provided a `BTreeMap` of values and the id
    /// to fall back to when the token is unknown.
    ///
    /// This is not meant to be directly used, the method `token_to_id`
    /// offers a more convenient interface for most vocabularies.
    fn _token_to_id(
        &self,
        token: &str,
        values: &BTreeMap<String, i64>,
        unknown_id: i64,
    ) -> i64 {
        values.get(token).copied().unwrap_or(unknown_id)
    }

    /// Converts a token to an id.
    ///
    /// # Returns
    /// - `i64`: token index for the value provided. If not found in the
    ///   vocabulary, returns the unknown token index
    fn token_to_id(&self, token: &str) -> i64;

    /// Converts an id back to its token, or `None` when no token has that id.
    fn id_to_token(&self, id: i64) -> Option<&str> {
        self.indices().get(&id).map(|s| s.as_str())
    }

    /// Is this id reserved for one of the vocabulary's special tokens?
    fn is_special_id(&self, id: i64) -> bool {
        self.special_indices().contains_key(&id)
    }
}
