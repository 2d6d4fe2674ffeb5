//! Load functionality for trained artifacts.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use pairforge_core::{ByteFallbackMap, MergeList, Result, TrainerError, Vocabulary};

use super::format::{SerializedModel, MODEL_FILE};

/// Reads `model.json` back into the three trained artifacts, validating
/// structural invariants as it goes.
pub struct ModelLoader;

impl ModelLoader {
    pub fn load(dir: &Path) -> Result<(Vocabulary, MergeList, ByteFallbackMap)> {
        let path = dir.join(MODEL_FILE);
        let file = File::open(&path).map_err(|e| {
            TrainerError::Load(format!("failed to open {}: {e}", path.display()))
        })?;
        let reader = BufReader::new(file);
        let serialized: SerializedModel = serde_json::from_reader(reader)?;
        Self::deserialize(serialized)
    }

    fn deserialize(data: SerializedModel) -> Result<(Vocabulary, MergeList, ByteFallbackMap)> {
        // Vocabulary ids must be dense and in order.
        let mut records = data.vocab;
        records.sort_by_key(|r| r.id);
        let mut vocabulary = Vocabulary::with_capacity(records.len());
        for record in records {
            let id = vocabulary.add_symbol(&record.symbol);
            if id != record.id {
                return Err(TrainerError::Load(format!(
                    "vocabulary ids not contiguous: {:?} expected id {}, found {id}",
                    record.symbol, record.id
                )));
            }
            vocabulary.set_frequency(id, record.frequency);
        }

        // Merge ranks must match list order and merged symbols must be the
        // concatenation of their halves.
        let mut merges = MergeList::new();
        for record in data.merges {
            if format!("{}{}", record.left, record.right) != record.merged {
                return Err(TrainerError::Load(format!(
                    "merge {} is not a concatenation: {:?} + {:?} != {:?}",
                    record.rank, record.left, record.right, record.merged
                )));
            }
            let rank = merges.push(record.left.as_str().into(), record.right.as_str().into());
            if rank != record.rank {
                return Err(TrainerError::Load(format!(
                    "merge ranks out of order: expected {}, found {rank}",
                    record.rank
                )));
            }
        }

        // The fallback table is canonical; verify the records agree with it
        // and cover all 256 byte values.
        let fallback = ByteFallbackMap::new()?;
        if data.byte_fallback.len() != 256 {
            return Err(TrainerError::Load(format!(
                "byte fallback table has {} entries, expected 256",
                data.byte_fallback.len()
            )));
        }
        let mut seen = [false; 256];
        for record in &data.byte_fallback {
            if fallback.token(record.byte) != record.token {
                return Err(TrainerError::Load(format!(
                    "byte fallback mismatch for {:#04x}: {:?}",
                    record.byte, record.token
                )));
            }
            seen[record.byte as usize] = true;
        }
        if seen.iter().any(|covered| !covered) {
            return Err(TrainerError::Load("byte fallback table has gaps".into()));
        }

        Ok((vocabulary, merges, fallback))
    }
}
