//! On-disk record layout for trained artifacts.
//!
//! Three record sequences round-trip a trained model: vocabulary entries,
//! merge rules, and the byte-fallback table.

use serde::{Deserialize, Serialize};

/// One vocabulary symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabRecord {
    pub id: u32,
    pub symbol: String,
    pub frequency: u64,
}

/// One merge rule, rank order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeRecord {
    pub left: String,
    pub right: String,
    pub merged: String,
    pub rank: u32,
}

/// One byte-fallback mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ByteRecord {
    pub byte: u8,
    pub token: String,
}

/// Complete serialized model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedModel {
    /// Format version
    pub version: String,
    pub vocab: Vec<VocabRecord>,
    pub merges: Vec<MergeRecord>,
    pub byte_fallback: Vec<ByteRecord>,
}

/// File name the saver writes and the loader expects.
pub const MODEL_FILE: &str = "model.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_roundtrip() {
        let model = SerializedModel {
            version: "1".to_string(),
            vocab: vec![VocabRecord {
                id: 0,
                symbol: "es".to_string(),
                frequency: 9,
            }],
            merges: vec![MergeRecord {
                left: "e".to_string(),
                right: "s".to_string(),
                merged: "es".to_string(),
                rank: 0,
            }],
            byte_fallback: vec![ByteRecord {
                byte: 0x61,
                token: "<0x61>".to_string(),
            }],
        };

        let json = serde_json::to_string(&model).unwrap();
        let parsed: SerializedModel = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.vocab[0].symbol, "es");
        assert_eq!(parsed.merges[0].rank, 0);
        assert_eq!(parsed.byte_fallback[0].byte, 0x61);
    }
}
