//! The pieces behind the `glycobert` command-line tool.

use anyhow::{Context, Error};
use glycobert_tokenizer::{EncodedBatch, GlycoBertTokenizer};
use serde::{Deserialize, Serialize};
use std::{
    io::{Read, Write},
    path::Path,
};

/// Parse a symbols file: one symbol per line, blank lines ignored.
pub fn parse_symbols(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Build a vocabulary from a symbols file and save it as JSON.
pub fn build_vocabulary(
    symbols_file: &Path,
    output: &Path,
) -> Result<GlycoBertTokenizer, Error> {
    let text = std::fs::read_to_string(symbols_file).with_context(|| {
        format!("Unable to read \"{}\"", symbols_file.display())
    })?;
    let symbols = parse_symbols(&text);
    tracing::debug!(symbols = symbols.len(), "Read the vocabulary symbols");

    let tokenizer = GlycoBertTokenizer::new(
        symbols,
        GlycoBertTokenizer::DEFAULT_MAX_SEQ_LENGTH,
    )?;
    tokenizer
        .save_vocabulary(output)
        .context("Unable to save the vocabulary")?;

    tracing::info!(
        vocab_size = tokenizer.vocab_size(),
        output = %output.display(),
        "Saved the vocabulary",
    );

    Ok(tokenizer)
}

/// An [`EncodedBatch`] as plain nested JSON arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedJson {
    pub token_ids: Vec<Vec<i64>>,
    pub attention_mask: Vec<Vec<i64>>,
}

impl From<&EncodedBatch> for EncodedJson {
    fn from(batch: &EncodedBatch) -> Self {
        EncodedJson {
            token_ids: batch
                .token_ids
                .outer_iter()
                .map(|row| row.to_vec())
                .collect(),
            attention_mask: batch
                .attention_mask
                .outer_iter()
                .map(|row| row.to_vec())
                .collect(),
        }
    }
}

/// Encode every text and write the batch to `writer` as a line of JSON.
pub fn encode_texts<W: Write>(
    tokenizer: &GlycoBertTokenizer,
    texts: &[String],
    mut writer: W,
) -> Result<(), Error> {
    let batch = tokenizer.encode_batch(texts);
    tracing::debug!(rows = batch.len(), "Encoded");

    serde_json::to_writer(&mut writer, &EncodedJson::from(&batch))
        .context("Unable to write the encoded batch")?;
    writeln!(writer)?;

    Ok(())
}

/// Either a single row of ids or a list of rows.
///
/// `[]` is read as a batch with no rows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TokenIds {
    Batch(Vec<Vec<i64>>),
    Single(Vec<i64>),
}

impl TokenIds {
    pub fn into_rows(self) -> Vec<Vec<i64>> {
        match self {
            TokenIds::Single(row) => vec![row],
            TokenIds::Batch(rows) => rows,
        }
    }
}

/// Read token ids as JSON from `reader` and write one decoded line per row.
pub fn decode_ids<R: Read, W: Write>(
    tokenizer: &GlycoBertTokenizer,
    reader: R,
    mut writer: W,
    skip_special_tokens: bool,
) -> Result<(), Error> {
    let ids: TokenIds = serde_json::from_reader(reader)
        .context("Expected a JSON array of token ids or an array of arrays")?;

    for (row, token_ids) in ids.into_rows().into_iter().enumerate() {
        let text = tokenizer
            .decode(&token_ids, skip_special_tokens)
            .with_context(|| format!("Unable to decode row {}", row))?;
        writeln!(writer, "{}", text)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn tokenizer() -> GlycoBertTokenizer {
        GlycoBertTokenizer::new(["Gal", "(b1-4)", "GlcNAc"], 6).unwrap()
    }

    #[test]
    fn symbols_skip_blank_lines() {
        let symbols = parse_symbols("Gal\n\n  (b1-4) \r\nGlcNAc\n");

        assert_eq!(symbols, vec!["Gal", "(b1-4)", "GlcNAc"]);
    }

    #[test]
    fn build_and_save_a_vocabulary() {
        let dir = tempfile::tempdir().unwrap();
        let symbols = dir.path().join("symbols.txt");
        let output = dir.path().join("vocab.json");
        fs::write(&symbols, "Gal\n[PAD]\nMan\n").unwrap();

        let tokenizer = build_vocabulary(&symbols, &output).unwrap();

        assert_eq!(tokenizer.vocab_size(), 7);
        let reloaded =
            GlycoBertTokenizer::load_vocabulary(&output, 512).unwrap();
        assert_eq!(reloaded, tokenizer);
    }

    #[test]
    fn missing_symbols_file() {
        let dir = tempfile::tempdir().unwrap();

        let error = build_vocabulary(
            &dir.path().join("missing.txt"),
            &dir.path().join("vocab.json"),
        )
        .unwrap_err();

        assert!(error.to_string().contains("missing.txt"));
    }

    #[test]
    fn encode_as_json() {
        let mut output = Vec::new();
        let texts = vec!["Gal (b1-4) GlcNAc".to_string(), "Man".to_string()];

        encode_texts(&tokenizer(), &texts, &mut output).unwrap();

        let got: EncodedJson = serde_json::from_slice(&output).unwrap();
        let should_be = EncodedJson {
            token_ids: vec![vec![1, 5, 6, 7, 2, 0], vec![1, 3, 2, 0, 0, 0]],
            attention_mask: vec![
                vec![1, 1, 1, 1, 1, 0],
                vec![1, 1, 1, 0, 0, 0],
            ],
        };
        assert_eq!(got, should_be);
    }

    #[test]
    fn decode_a_single_row() {
        let mut output = Vec::new();

        let input = "[1, 5, 6, 7, 2, 0]";

        decode_ids(&tokenizer(), input.as_bytes(), &mut output, false).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "[CLS] Gal (b1-4) GlcNAc [SEP]\n"
        );
    }

    #[test]
    fn decode_several_rows() {
        let mut output = Vec::new();
        let input = "[[1, 5, 2, 0], [1, 7, 6, 2]]";

        decode_ids(&tokenizer(), input.as_bytes(), &mut output, true).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "Gal\nGlcNAc (b1-4)\n");
    }

    #[test]
    fn an_empty_array_is_an_empty_batch() {
        let mut output = Vec::new();

        decode_ids(&tokenizer(), "[]".as_bytes(), &mut output, false).unwrap();

        assert!(output.is_empty());
        let ids: TokenIds = serde_json::from_str("[]").unwrap();
        assert_eq!(ids, TokenIds::Batch(Vec::new()));
    }

    #[test]
    fn an_empty_row_decodes_to_a_blank_line() {
        let mut output = Vec::new();

        decode_ids(&tokenizer(), "[[]]".as_bytes(), &mut output, false)
            .unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "\n");
    }

    #[test]
    fn unknown_ids_fail_to_decode() {
        let mut output = Vec::new();

        let error =
            decode_ids(&tokenizer(), "[1, 99]".as_bytes(), &mut output, true)
                .unwrap_err();

        assert!(error.to_string().contains("row 0"));
    }

    #[test]
    fn decode_rejects_non_arrays() {
        let mut output = Vec::new();

        let input = r#"{"ids": 1}"#;

        let result =
            decode_ids(&tokenizer(), input.as_bytes(), &mut output, true);

        assert!(result.is_err());
    }
}
