//! Field registry: canonical column labels and their request aliases.
//!
//! Inbound payloads may key each field either by the Notion column label
//! ("Chief Complaint") or by a lower-camel request alias ("chiefComplaint").
//! Resolution consults the canonical label first, then the aliases in
//! declaration order, so precedence is explicit rather than an accident
//! of evaluation order.

use serde_json::{Map, Value};

/// Canonical column labels of the target database.
pub mod labels {
    pub const CASE_ID: &str = "Case ID";
    pub const STATUS: &str = "Status";
    pub const URGENCY: &str = "Urgency";
    pub const SPECIALTY: &str = "Specialty";
    pub const AGE: &str = "Age";
    pub const GENDER: &str = "Gender";
    pub const COUNTRY: &str = "Country";
    pub const CHIEF_COMPLAINT: &str = "Chief Complaint";
    pub const IMAGING_NOTES: &str = "Imaging Notes";
    pub const NOTES: &str = "Notes";
    pub const HOSPITAL_SHORTLIST: &str = "Hospital Shortlist";
    pub const MISSING_INFO: &str = "Missing Info";
    pub const BUDGET: &str = "Budget";
    pub const SOURCE: &str = "Source";
    pub const CREATED_AT: &str = "Created At";
    pub const ASSIGNED_TO: &str = "Assigned To";
    /// Output-only column, stamped at translation time; never read from
    /// the request, so it has no registry entry.
    pub const LAST_EDITED: &str = "Last Edited";
}

/// One recognized field: its canonical label plus accepted request aliases.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

/// Every field the normalizer recognizes, in schema order.
///
/// "Assigned To" is listed so that a supplied value is acknowledged in the
/// provided-fields echo, but it is never carried into a submission: the
/// column is People-typed and expects opaque user ids that free text
/// cannot resolve.
pub const REGISTRY: &[FieldSpec] = &[
    FieldSpec {
        canonical: labels::CASE_ID,
        aliases: &["caseId", "CaseID"],
    },
    FieldSpec {
        canonical: labels::STATUS,
        aliases: &["status"],
    },
    FieldSpec {
        canonical: labels::URGENCY,
        aliases: &["urgency"],
    },
    FieldSpec {
        canonical: labels::SPECIALTY,
        aliases: &["specialty"],
    },
    FieldSpec {
        canonical: labels::AGE,
        aliases: &["age"],
    },
    FieldSpec {
        canonical: labels::GENDER,
        aliases: &["gender"],
    },
    FieldSpec {
        canonical: labels::COUNTRY,
        aliases: &["country"],
    },
    FieldSpec {
        canonical: labels::CHIEF_COMPLAINT,
        aliases: &["chiefComplaint"],
    },
    FieldSpec {
        canonical: labels::IMAGING_NOTES,
        aliases: &["imagingNotes"],
    },
    FieldSpec {
        canonical: labels::NOTES,
        aliases: &["notes"],
    },
    FieldSpec {
        canonical: labels::HOSPITAL_SHORTLIST,
        aliases: &["hospitalShortlist"],
    },
    FieldSpec {
        canonical: labels::MISSING_INFO,
        aliases: &["missingInfo"],
    },
    FieldSpec {
        canonical: labels::BUDGET,
        aliases: &["budget"],
    },
    FieldSpec {
        canonical: labels::SOURCE,
        aliases: &["source"],
    },
    FieldSpec {
        canonical: labels::CREATED_AT,
        aliases: &["createdAt"],
    },
    FieldSpec {
        canonical: labels::ASSIGNED_TO,
        aliases: &["assignedTo"],
    },
];

impl FieldSpec {
    /// Look up this field in a payload object. The canonical label wins
    /// when both it and an alias are present.
    pub fn resolve<'a>(&self, object: &'a Map<String, Value>) -> Option<&'a Value> {
        if let Some(value) = object.get(self.canonical) {
            return Some(value);
        }
        self.aliases.iter().find_map(|alias| object.get(*alias))
    }

    /// Whether the caller supplied this field under any accepted key.
    pub fn supplied(&self, object: &Map<String, Value>) -> bool {
        object.contains_key(self.canonical)
            || self.aliases.iter().any(|alias| object.contains_key(*alias))
    }
}

/// Find the registry entry for a canonical label.
pub fn spec_for(canonical: &str) -> Option<&'static FieldSpec> {
    REGISTRY.iter().find(|spec| spec.canonical == canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn canonical_label_wins_over_alias() {
        let body = object(json!({"Status": "New", "status": "Old"}));
        let spec = spec_for(labels::STATUS).unwrap();
        assert_eq!(spec.resolve(&body), Some(&json!("New")));
    }

    #[test]
    fn alias_used_when_canonical_absent() {
        let body = object(json!({"chiefComplaint": "headache"}));
        let spec = spec_for(labels::CHIEF_COMPLAINT).unwrap();
        assert_eq!(spec.resolve(&body), Some(&json!("headache")));
    }

    #[test]
    fn supplied_tracks_any_accepted_key() {
        let body = object(json!({"caseId": "C-1"}));
        let spec = spec_for(labels::CASE_ID).unwrap();
        assert!(spec.supplied(&body));
        assert!(!spec_for(labels::BUDGET).unwrap().supplied(&body));
    }
}
