//! Scalar, list, and identifier coercions.
//!
//! Inbound payloads are hand-assembled by a variety of callers, so every
//! coercion here is total: a value of the wrong shape degrades to "no
//! value" rather than an error. Only the database identifier has a hard
//! failure mode, and even that is a value, not a panic.

use crate::error::InvalidDatabaseId;
use serde_json::Value;

/// Coerce an optional JSON value to a trimmed string.
///
/// `null`/absent become the empty string; strings pass through; any other
/// value is rendered to its JSON text form.
pub fn coerce_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string().trim().to_string(),
    }
}

/// Coerce an optional JSON value to a number.
///
/// Absent, empty, and unparseable values all yield `None` — never zero
/// and never an error.
pub fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Some(_) => None,
    }
}

/// Coerce an optional JSON value to an ordered list of non-empty strings.
///
/// Native arrays are taken element-wise; any other value is treated as a
/// comma-separated string. Empty segments are dropped, order preserved.
pub fn coerce_list(value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| coerce_string(Some(item)))
            .filter(|item| !item.is_empty())
            .collect(),
        Some(other) => coerce_string(Some(other))
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

/// Normalize a Notion database identifier to canonical dashed form.
///
/// Accepts a bare 32-character hex token, a dashed UUID, or a URL with
/// either embedded in it. Dashes are stripped, the first run of 32 hex
/// digits is taken, and the result is re-grouped 8-4-4-4-12 in lowercase.
pub fn normalize_database_id(input: &str) -> Result<String, InvalidDatabaseId> {
    let stripped: String = input.chars().filter(|c| *c != '-').collect();

    let bytes = stripped.as_bytes();
    let mut run = 0usize;
    let mut token = None;
    for (i, b) in bytes.iter().enumerate() {
        if b.is_ascii_hexdigit() {
            run += 1;
            if run == 32 {
                token = Some(&stripped[i + 1 - 32..=i]);
                break;
            }
        } else {
            run = 0;
        }
    }

    let token = token.ok_or_else(|| InvalidDatabaseId {
        raw: input.to_string(),
    })?;
    let hex = token.to_ascii_lowercase();

    Ok(format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_coercion_handles_absent_and_null() {
        assert_eq!(coerce_string(None), "");
        assert_eq!(coerce_string(Some(&Value::Null)), "");
    }

    #[test]
    fn string_coercion_trims_and_stringifies() {
        assert_eq!(coerce_string(Some(&json!("  hi  "))), "hi");
        assert_eq!(coerce_string(Some(&json!(42))), "42");
        assert_eq!(coerce_string(Some(&json!(true))), "true");
    }

    #[test]
    fn number_coercion_never_errors() {
        assert_eq!(coerce_number(None), None);
        assert_eq!(coerce_number(Some(&json!(""))), None);
        assert_eq!(coerce_number(Some(&json!("  "))), None);
        assert_eq!(coerce_number(Some(&json!("not a number"))), None);
        assert_eq!(coerce_number(Some(&json!("41.5"))), Some(41.5));
        assert_eq!(coerce_number(Some(&json!(7))), Some(7.0));
    }

    #[test]
    fn list_coercion_from_array() {
        let value = json!(["Mayo", "  Cleveland  ", "", 3]);
        assert_eq!(coerce_list(Some(&value)), vec!["Mayo", "Cleveland", "3"]);
    }

    #[test]
    fn list_coercion_from_comma_string() {
        let value = json!("A, B, ,C");
        assert_eq!(coerce_list(Some(&value)), vec!["A", "B", "C"]);
    }

    #[test]
    fn list_coercion_absent_is_empty() {
        assert_eq!(coerce_list(None), Vec::<String>::new());
        assert_eq!(coerce_list(Some(&Value::Null)), Vec::<String>::new());
    }

    #[test]
    fn database_id_from_bare_token() {
        let id = normalize_database_id("2d31c70fce6f80969f7ad4bd1ecd16a4").unwrap();
        assert_eq!(id, "2d31c70f-ce6f-8096-9f7a-d4bd1ecd16a4");
    }

    #[test]
    fn database_id_is_idempotent() {
        let canonical = "2d31c70f-ce6f-8096-9f7a-d4bd1ecd16a4";
        assert_eq!(normalize_database_id(canonical).unwrap(), canonical);
        assert_eq!(
            normalize_database_id("2D31C70F-CE6F-8096-9F7A-D4BD1ECD16A4").unwrap(),
            canonical
        );
    }

    #[test]
    fn database_id_extracted_from_url() {
        let url = "https://www.notion.so/acme/Case-Tracker-2d31c70fce6f80969f7ad4bd1ecd16a4?v=abc";
        assert_eq!(
            normalize_database_id(url).unwrap(),
            "2d31c70f-ce6f-8096-9f7a-d4bd1ecd16a4"
        );
    }

    #[test]
    fn database_id_rejects_short_and_nonhex() {
        assert!(normalize_database_id("2d31c70f").is_err());
        assert!(normalize_database_id("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz").is_err());
        assert!(normalize_database_id("").is_err());
    }
}
