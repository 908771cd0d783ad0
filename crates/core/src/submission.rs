//! Normalized form of one inbound referral case.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::fields::{REGISTRY, labels, spec_for};
use crate::normalize::{coerce_list, coerce_number, coerce_string};

/// Source label recorded when the caller does not supply one.
pub const DEFAULT_SOURCE: &str = "web-intake";

/// One referral case after field resolution and coercion.
///
/// Lives for the duration of a single request: built from the raw body,
/// validated, translated to a property set, then discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseSubmission {
    pub case_id: String,
    pub status: String,
    pub urgency: String,
    pub specialty: String,
    pub age: Option<f64>,
    pub gender: String,
    pub country: String,
    pub chief_complaint: String,
    pub imaging_notes: String,
    pub notes: String,
    pub hospital_shortlist: Vec<String>,
    pub missing_info: Vec<String>,
    pub budget: Option<f64>,
    pub source: String,
    pub created_at: Option<DateTime<Utc>>,
    /// Canonical labels of the fields the caller supplied, in schema order.
    pub provided: Vec<String>,
}

impl CaseSubmission {
    /// Normalize an arbitrary JSON value into a submission.
    ///
    /// A non-object body yields an all-empty submission, which validation
    /// then rejects with the full missing-field list.
    pub fn from_value(body: &Value) -> Self {
        let empty = serde_json::Map::new();
        let object = body.as_object().unwrap_or(&empty);

        let get = |canonical: &str| spec_for(canonical).and_then(|spec| spec.resolve(object));

        let provided = REGISTRY
            .iter()
            .filter(|spec| spec.supplied(object))
            .map(|spec| spec.canonical.to_string())
            .collect();

        let source = coerce_string(get(labels::SOURCE));
        let created_at = DateTime::parse_from_rfc3339(&coerce_string(get(labels::CREATED_AT)))
            .ok()
            .map(|dt| dt.with_timezone(&Utc));

        // "Assigned To" is resolvable but intentionally not read: the
        // column expects opaque Notion user ids, not free text.
        Self {
            case_id: coerce_string(get(labels::CASE_ID)),
            status: coerce_string(get(labels::STATUS)),
            urgency: coerce_string(get(labels::URGENCY)),
            specialty: coerce_string(get(labels::SPECIALTY)),
            age: coerce_number(get(labels::AGE)),
            gender: coerce_string(get(labels::GENDER)),
            country: coerce_string(get(labels::COUNTRY)),
            chief_complaint: coerce_string(get(labels::CHIEF_COMPLAINT)),
            imaging_notes: coerce_string(get(labels::IMAGING_NOTES)),
            notes: coerce_string(get(labels::NOTES)),
            hospital_shortlist: coerce_list(get(labels::HOSPITAL_SHORTLIST)),
            missing_info: coerce_list(get(labels::MISSING_INFO)),
            budget: coerce_number(get(labels::BUDGET)),
            source: if source.is_empty() {
                DEFAULT_SOURCE.to_string()
            } else {
                source
            },
            created_at,
            provided,
        }
    }

    /// Whether a field, addressed by canonical label, resolved to a value.
    ///
    /// Unknown labels report absent, so a misspelled required-field
    /// configuration can never be satisfied silently.
    pub fn has_value(&self, canonical: &str) -> bool {
        match canonical {
            labels::CASE_ID => !self.case_id.is_empty(),
            labels::STATUS => !self.status.is_empty(),
            labels::URGENCY => !self.urgency.is_empty(),
            labels::SPECIALTY => !self.specialty.is_empty(),
            labels::AGE => self.age.is_some(),
            labels::GENDER => !self.gender.is_empty(),
            labels::COUNTRY => !self.country.is_empty(),
            labels::CHIEF_COMPLAINT => !self.chief_complaint.is_empty(),
            labels::IMAGING_NOTES => !self.imaging_notes.is_empty(),
            labels::NOTES => !self.notes.is_empty(),
            labels::HOSPITAL_SHORTLIST => !self.hospital_shortlist.is_empty(),
            labels::MISSING_INFO => !self.missing_info.is_empty(),
            labels::BUDGET => self.budget.is_some(),
            labels::SOURCE => !self.source.is_empty(),
            labels::CREATED_AT => self.created_at.is_some(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_alias_keys() {
        let body = json!({
            "caseId": " C-104 ",
            "status": "New",
            "urgency": "High",
            "specialty": "Neurology",
            "chiefComplaint": "  persistent headache  ",
            "hospitalShortlist": "Mayo, Cleveland",
        });
        let submission = CaseSubmission::from_value(&body);

        assert_eq!(submission.case_id, "C-104");
        assert_eq!(submission.chief_complaint, "persistent headache");
        assert_eq!(submission.hospital_shortlist, vec!["Mayo", "Cleveland"]);
        assert_eq!(submission.source, DEFAULT_SOURCE);
    }

    #[test]
    fn canonical_key_wins_when_both_present() {
        let body = json!({"Urgency": "Routine", "urgency": "Emergency"});
        let submission = CaseSubmission::from_value(&body);
        assert_eq!(submission.urgency, "Routine");
    }

    #[test]
    fn provided_lists_supplied_canonical_labels() {
        let body = json!({"caseId": "C-1", "Status": "New", "assignedTo": "dr smith"});
        let submission = CaseSubmission::from_value(&body);
        assert_eq!(
            submission.provided,
            vec![labels::CASE_ID, labels::STATUS, labels::ASSIGNED_TO]
        );
    }

    #[test]
    fn created_at_parses_rfc3339_only() {
        let body = json!({"createdAt": "2026-08-01T10:30:00Z"});
        let submission = CaseSubmission::from_value(&body);
        assert!(submission.created_at.is_some());

        let body = json!({"createdAt": "yesterday"});
        let submission = CaseSubmission::from_value(&body);
        assert!(submission.created_at.is_none());
    }

    #[test]
    fn non_object_body_is_all_empty() {
        let submission = CaseSubmission::from_value(&json!([1, 2, 3]));
        assert!(submission.case_id.is_empty());
        assert!(submission.provided.is_empty());
    }

    #[test]
    fn numeric_fields_degrade_to_absent() {
        let body = json!({"age": "forty", "budget": ""});
        let submission = CaseSubmission::from_value(&body);
        assert_eq!(submission.age, None);
        assert_eq!(submission.budget, None);

        let body = json!({"age": 62, "budget": "15000"});
        let submission = CaseSubmission::from_value(&body);
        assert_eq!(submission.age, Some(62.0));
        assert_eq!(submission.budget, Some(15000.0));
    }
}
