// Donor registry records: the read-only snapshot the engine validates against.

use serde::{Deserialize, Serialize};

/// Donor category used by the registry.
///
/// The registry wire form stores this as the strings `"0"` and `"1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DonorKind {
    /// Government donor (`"0"`).
    #[serde(rename = "0")]
    Government,
    /// Non-government donor (`"1"`).
    #[serde(rename = "1")]
    NonGovernment,
}

/// One row of the donor registry.
///
/// The engine never mutates records; a whole snapshot is supplied by the
/// caller and may be replaced wholesale at any time via
/// `CodeEngine::update_donors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorRecord {
    /// Full donor name, e.g. "World Health Organization".
    pub name: String,
    /// The assigned identifier code, e.g. "WHO".
    pub ceb_code: String,
    /// Free-text contributor category from the registry.
    pub contributor_type: String,
    /// Government / non-government flag.
    #[serde(rename = "type")]
    pub kind: DonorKind,
}

impl DonorRecord {
    /// Convenience constructor used mostly by tests and fixtures.
    pub fn new(name: &str, ceb_code: &str, contributor_type: &str, kind: DonorKind) -> Self {
        Self {
            name: name.to_string(),
            ceb_code: ceb_code.to_string(),
            contributor_type: contributor_type.to_string(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn donor_kind_serializes_to_wire_strings() {
        assert_eq!(serde_json::to_string(&DonorKind::Government).unwrap(), "\"0\"");
        assert_eq!(
            serde_json::to_string(&DonorKind::NonGovernment).unwrap(),
            "\"1\""
        );
    }

    #[test]
    fn record_round_trips_registry_json() {
        let json = r#"{
            "name": "World Health Organization",
            "cebCode": "WHO",
            "contributorType": "UN Agency",
            "type": "1"
        }"#;
        let record: DonorRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "World Health Organization");
        assert_eq!(record.ceb_code, "WHO");
        assert_eq!(record.kind, DonorKind::NonGovernment);

        let back = serde_json::to_string(&record).unwrap();
        let again: DonorRecord = serde_json::from_str(&back).unwrap();
        assert_eq!(again, record);
    }
}
