use serde::{Deserialize, Serialize};

/// Settings used when constructing a
/// [`GlycoBertTokenizer`][crate::GlycoBertTokenizer].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Every encoded row is padded or truncated to exactly this many ids.
    pub max_seq_length: usize,
}

impl TokenizerConfig {
    pub const DEFAULT_MAX_SEQ_LENGTH: usize = 512;
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            max_seq_length: TokenizerConfig::DEFAULT_MAX_SEQ_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_the_default_length() {
        let config: TokenizerConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config, TokenizerConfig::default());
        assert_eq!(config.max_seq_length, 512);
    }

    #[test]
    fn explicit_length_is_respected() {
        let config: TokenizerConfig =
            serde_json::from_str(r#"{"max_seq_length": 64}"#).unwrap();

        assert_eq!(config.max_seq_length, 64);
    }
}
