//! The on-disk vocabulary format: a flat JSON object mapping each token to
//! its id, written in id order.

use crate::{
    errors::TokenizerError,
    vocab::{GlycoVocab, Vocab},
};
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use serde_json::Value;
use std::{
    collections::BTreeMap,
    fmt,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

/// Serializes an id to token mapping as `{token: id}` in id order.
struct Entries<'a>(&'a BTreeMap<i64, String>);

impl Serialize for Entries<'_> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(id, token)| (token, id)))
    }
}

/// Every entry of a vocabulary file, in document order.
#[derive(Debug)]
struct VocabFile {
    entries: Vec<(String, Value)>,
}

impl<'de> Deserialize<'de> for VocabFile {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_map(VocabFileVisitor)
    }
}

struct VocabFileVisitor;

impl<'de> Visitor<'de> for VocabFileVisitor {
    type Value = VocabFile;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object mapping tokens to ids")
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut map: A,
    ) -> Result<VocabFile, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));

        while let Some((token, id)) = map.next_entry::<String, Value>()? {
            entries.push((token, id));
        }

        Ok(VocabFile { entries })
    }
}

#[tracing::instrument(skip(vocab))]
pub(crate) fn save(
    vocab: &GlycoVocab,
    path: &Path,
) -> Result<(), TokenizerError> {
    let io_error = |source| TokenizerError::Io {
        path: path.to_path_buf(),
        source,
    };

    let f = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(f);

    serde_json::to_writer_pretty(&mut writer, &Entries(vocab.indices()))
        .map_err(|source| {
            if source.is_io() {
                io_error(source.into())
            } else {
                TokenizerError::Serialize {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
    writer.flush().map_err(io_error)?;

    tracing::debug!(tokens = vocab.len(), "Saved the vocabulary");

    Ok(())
}

#[tracing::instrument]
pub(crate) fn load(path: &Path) -> Result<GlycoVocab, TokenizerError> {
    let f = File::open(path).map_err(|source| TokenizerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let VocabFile { entries } = serde_json::from_reader(BufReader::new(f))
        .map_err(|source| TokenizerError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let vocab =
        GlycoVocab::from_symbols(entries.iter().map(|(token, _)| token));

    let renumbered = entries
        .iter()
        .filter(|(token, persisted)| {
            persisted.as_i64().is_some()
                && persisted.as_i64() != vocab.values().get(token).copied()
        })
        .count();

    if renumbered > 0 {
        tracing::warn!(
            renumbered,
            "Some tokens were assigned different ids to the ones in the file",
        );
    }

    tracing::debug!(
        entries = entries.len(),
        vocab_size = vocab.len(),
        "Loaded the vocabulary",
    );

    Ok(vocab)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn tokens_are_written_in_id_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        let vocab = GlycoVocab::from_symbols(["Man", "Gal"]);

        save(&vocab, &path).unwrap();

        let written: Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let expected = serde_json::json!({
            "[PAD]": 0,
            "[CLS]": 1,
            "[SEP]": 2,
            "[UNK]": 3,
            "[MASK]": 4,
            "Man": 5,
            "Gal": 6,
        });
        assert_eq!(written, expected);
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.find("\"Man\"").unwrap() < text.find("\"Gal\"").unwrap());
    }

    #[test]
    fn saving_overwrites_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(&path, "this is not JSON, and it is quite long").unwrap();

        save(&GlycoVocab::from_symbols(["Gal"]), &path).unwrap();

        let reloaded = load(&path).unwrap();
        assert_eq!(reloaded.len(), 6);
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn write_failures_are_io_errors() {
        let symbols: Vec<String> =
            (0..5000).map(|i| format!("token-{}", i)).collect();
        let vocab = GlycoVocab::from_symbols(&symbols);

        let error = save(&vocab, Path::new("/dev/full")).unwrap_err();

        assert!(matches!(error, TokenizerError::Io { .. }), "{:?}", error);
    }

    #[test]
    fn round_trip_keeps_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        let original =
            GlycoVocab::from_symbols(["GlcNAc", "(b1-4)", "Gal", "(a2-3)"]);

        save(&original, &path).unwrap();
        let reloaded = load(&path).unwrap();

        assert_eq!(reloaded, original);
    }

    #[test]
    fn persisted_ids_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(&path, r#"{"Gal": 0, "[PAD]": 1, "Man": "x", "Fuc": 99}"#)
            .unwrap();

        let vocab = load(&path).unwrap();

        let symbols: Vec<_> = vocab.symbols().collect();
        assert_eq!(
            symbols,
            vec!["[PAD]", "[CLS]", "[SEP]", "[UNK]", "[MASK]", "Gal", "Man", "Fuc"]
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let error = load(&dir.path().join("missing.json")).unwrap_err();

        assert!(matches!(error, TokenizerError::Io { .. }));
    }

    #[test]
    fn non_object_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(&path, r#"["Gal", "Man"]"#).unwrap();

        let error = load(&path).unwrap_err();

        assert!(matches!(error, TokenizerError::Parse { .. }));
    }

    #[test]
    fn truncated_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(&path, r#"{"Gal": 5, "Man""#).unwrap();

        let error = load(&path).unwrap_err();

        assert!(matches!(error, TokenizerError::Parse { .. }));
    }
}
