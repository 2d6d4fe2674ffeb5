//! Save functionality for trained artifacts.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use pairforge_core::{ByteFallbackMap, MergeList, Result, TrainerError, Vocabulary};

use super::format::{ByteRecord, MergeRecord, SerializedModel, VocabRecord, MODEL_FILE};

/// Writes the three trained artifacts as one `model.json`.
pub struct ModelSaver<'a> {
    vocabulary: &'a Vocabulary,
    merges: &'a MergeList,
    fallback: &'a ByteFallbackMap,
}

impl<'a> ModelSaver<'a> {
    pub fn new(
        vocabulary: &'a Vocabulary,
        merges: &'a MergeList,
        fallback: &'a ByteFallbackMap,
    ) -> Self {
        Self {
            vocabulary,
            merges,
            fallback,
        }
    }

    /// Save to `<dir>/model.json`, creating the directory if needed.
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir).map_err(|e| {
            TrainerError::Save(format!("failed to create {}: {e}", dir.display()))
        })?;

        let path = dir.join(MODEL_FILE);
        let file = File::create(&path).map_err(|e| {
            TrainerError::Save(format!("failed to create {}: {e}", path.display()))
        })?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.serialize())?;
        log::info!("saved model to {}", path.display());
        Ok(())
    }

    fn serialize(&self) -> SerializedModel {
        let vocab = self
            .vocabulary
            .iter()
            .map(|(id, symbol, frequency)| VocabRecord {
                id,
                symbol: symbol.to_string(),
                frequency,
            })
            .collect();

        let merges = self
            .merges
            .iter()
            .map(|rule| MergeRecord {
                left: rule.left.to_string(),
                right: rule.right.to_string(),
                merged: rule.merged.to_string(),
                rank: rule.rank,
            })
            .collect();

        let byte_fallback = (0..=255u8)
            .map(|byte| ByteRecord {
                byte,
                token: self.fallback.token(byte).to_string(),
            })
            .collect();

        SerializedModel {
            version: env!("CARGO_PKG_VERSION").to_string(),
            vocab,
            merges,
            byte_fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_shape() {
        let mut vocabulary = Vocabulary::new();
        let id = vocabulary.add_symbol("es");
        vocabulary.set_frequency(id, 9);
        let mut merges = MergeList::new();
        merges.push("e".into(), "s".into());
        let fallback = ByteFallbackMap::new().unwrap();

        let saver = ModelSaver::new(&vocabulary, &merges, &fallback);
        let serialized = saver.serialize();

        assert_eq!(serialized.vocab.len(), 1);
        assert_eq!(serialized.vocab[0].frequency, 9);
        assert_eq!(serialized.merges[0].merged, "es");
        assert_eq!(serialized.byte_fallback.len(), 256);
    }
}
