//! Required-field validation.

use thiserror::Error;

use crate::fields::labels;
use crate::submission::CaseSubmission;

/// The canonical required set. Deployments can require further fields
/// through configuration without a code change.
pub const REQUIRED_FIELDS: &[&str] = &[
    labels::CASE_ID,
    labels::STATUS,
    labels::URGENCY,
    labels::SPECIALTY,
];

/// One or more required fields were absent or empty after trimming.
///
/// Echoes the canonical labels the caller did supply so they can diagnose
/// naming mistakes. Field values are never echoed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("missing required fields: {}", missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<String>,
    pub provided: Vec<String>,
}

/// Check the canonical required set plus any extra configured labels.
pub fn validate(submission: &CaseSubmission, extra: &[String]) -> Result<(), ValidationError> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .copied()
        .chain(extra.iter().map(String::as_str))
        .filter(|canonical| !submission.has_value(canonical))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            missing,
            provided: submission.provided.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete() -> serde_json::Value {
        json!({
            "caseId": "C-104",
            "status": "New",
            "urgency": "High",
            "specialty": "Neurology",
        })
    }

    #[test]
    fn complete_submission_passes() {
        let submission = CaseSubmission::from_value(&complete());
        assert!(validate(&submission, &[]).is_ok());
    }

    #[test]
    fn names_every_missing_field() {
        let submission = CaseSubmission::from_value(&json!({"caseId": "C-104"}));
        let err = validate(&submission, &[]).unwrap_err();
        assert_eq!(
            err.missing,
            vec![labels::STATUS, labels::URGENCY, labels::SPECIALTY]
        );
        assert_eq!(err.provided, vec![labels::CASE_ID]);
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut body = complete();
        body["status"] = json!("   ");
        let submission = CaseSubmission::from_value(&body);
        let err = validate(&submission, &[]).unwrap_err();
        assert_eq!(err.missing, vec![labels::STATUS]);
    }

    #[test]
    fn extra_required_fields_are_enforced() {
        let submission = CaseSubmission::from_value(&complete());
        let extra = vec![labels::CHIEF_COMPLAINT.to_string()];
        let err = validate(&submission, &extra).unwrap_err();
        assert_eq!(err.missing, vec![labels::CHIEF_COMPLAINT]);

        let mut body = complete();
        body["chiefComplaint"] = json!("chest pain");
        let submission = CaseSubmission::from_value(&body);
        assert!(validate(&submission, &extra).is_ok());
    }

    #[test]
    fn unknown_extra_label_is_always_missing() {
        let submission = CaseSubmission::from_value(&complete());
        let extra = vec!["No Such Column".to_string()];
        let err = validate(&submission, &extra).unwrap_err();
        assert_eq!(err.missing, vec!["No Such Column"]);
    }
}
