use serde::{Deserialize, Serialize};

/// One `{attribute, value}` pair in a metadata record.
///
/// Field order matters: `attribute` before `value` is also the
/// lexicographic key order the descriptor format requires.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AttributeEntry {
    pub attribute: String,
    pub value: String,
}

/// The full metadata record for one input file.
///
/// An ordered list, not a map: the downstream consumer may care about
/// order, and duplicate attribute names are permitted because optional
/// attributes are appended, never merged.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    #[serde(rename = "metadataEntries")]
    pub metadata_entries: Vec<AttributeEntry>,
}

impl MetadataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute at the end of the record.
    pub fn push(&mut self, attribute: &str, value: impl Into<String>) {
        self.metadata_entries.push(AttributeEntry {
            attribute: attribute.to_string(),
            value: value.into(),
        });
    }

    /// Returns the value of the first entry named `attribute`, if any.
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.metadata_entries
            .iter()
            .find(|e| e.attribute == attribute)
            .map(|e| e.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.metadata_entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metadata_entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order_and_duplicates() {
        let mut record = MetadataRecord::new();
        record.push("a", "1");
        record.push("b", "2");
        record.push("a", "3");

        assert_eq!(record.len(), 3);
        assert_eq!(record.get("a"), Some("1"));
        assert_eq!(record.metadata_entries[2].value, "3");
    }

    #[test]
    fn test_serde_wire_names() {
        let mut record = MetadataRecord::new();
        record.push("file_type", "FASTQ");

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"metadataEntries\""));
        assert!(json.contains("\"attribute\":\"file_type\""));
        assert!(json.contains("\"value\":\"FASTQ\""));

        let back: MetadataRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
