//! Notion property-set construction.
//!
//! Maps a normalized submission onto the target database's column
//! encodings. The one load-bearing rule: a field with no resolvable value
//! is omitted from the set entirely, because the Notion API rejects
//! explicit null/empty for these property types.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::labels;
use crate::submission::CaseSubmission;

/// A `{"text": {"content": ...}}` fragment of a title or rich_text value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RichTextObject {
    pub text: TextContent,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextContent {
    pub content: String,
}

/// A select or multi_select option, addressed by label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectOption {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DateValue {
    pub start: String,
}

/// One property value in the Notion page encoding.
///
/// Serializes to the external tagged form, e.g.
/// `{"select": {"name": "High"}}` or `{"number": 42.0}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PropertyValue {
    #[serde(rename = "title")]
    Title(Vec<RichTextObject>),
    #[serde(rename = "rich_text")]
    RichText(Vec<RichTextObject>),
    #[serde(rename = "select")]
    Select(SelectOption),
    #[serde(rename = "multi_select")]
    MultiSelect(Vec<SelectOption>),
    #[serde(rename = "number")]
    Number(f64),
    #[serde(rename = "date")]
    Date(DateValue),
}

impl PropertyValue {
    pub fn title(content: &str) -> Self {
        Self::Title(vec![RichTextObject {
            text: TextContent {
                content: content.to_string(),
            },
        }])
    }

    pub fn rich_text(content: &str) -> Self {
        Self::RichText(vec![RichTextObject {
            text: TextContent {
                content: content.to_string(),
            },
        }])
    }

    pub fn select(name: &str) -> Self {
        Self::Select(SelectOption {
            name: name.to_string(),
        })
    }

    pub fn multi_select(names: &[String]) -> Self {
        Self::MultiSelect(
            names
                .iter()
                .map(|name| SelectOption { name: name.clone() })
                .collect(),
        )
    }

    pub fn date(instant: DateTime<Utc>) -> Self {
        Self::Date(DateValue {
            start: instant.to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }
}

/// The typed key/value map sent as a page's `properties` object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PropertySet(BTreeMap<String, PropertyValue>);

impl PropertySet {
    pub fn insert(&mut self, label: &str, value: PropertyValue) {
        self.0.insert(label.to_string(), value);
    }

    pub fn get(&self, label: &str) -> Option<&PropertyValue> {
        self.0.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.0.iter()
    }
}

/// Build the outbound property set for one submission.
///
/// `now` is the translation moment: it stamps "Last Edited" always, and
/// "Created At" when the caller did not supply a creation time. Fields
/// that resolved to nothing are left out per the omission rule above;
/// "Assigned To" is never populated (see the field registry).
pub fn build_properties(submission: &CaseSubmission, now: DateTime<Utc>) -> PropertySet {
    let mut set = PropertySet::default();

    set.insert(labels::CASE_ID, PropertyValue::title(&submission.case_id));

    let selects = [
        (labels::STATUS, &submission.status),
        (labels::URGENCY, &submission.urgency),
        (labels::SPECIALTY, &submission.specialty),
        (labels::GENDER, &submission.gender),
        (labels::COUNTRY, &submission.country),
        (labels::SOURCE, &submission.source),
    ];
    for (label, value) in selects {
        if !value.is_empty() {
            set.insert(label, PropertyValue::select(value));
        }
    }

    let texts = [
        (labels::CHIEF_COMPLAINT, &submission.chief_complaint),
        (labels::IMAGING_NOTES, &submission.imaging_notes),
        (labels::NOTES, &submission.notes),
    ];
    for (label, value) in texts {
        if !value.is_empty() {
            set.insert(label, PropertyValue::rich_text(value));
        }
    }

    let lists = [
        (labels::HOSPITAL_SHORTLIST, &submission.hospital_shortlist),
        (labels::MISSING_INFO, &submission.missing_info),
    ];
    for (label, values) in lists {
        if !values.is_empty() {
            set.insert(label, PropertyValue::multi_select(values));
        }
    }

    let numbers = [
        (labels::AGE, submission.age),
        (labels::BUDGET, submission.budget),
    ];
    for (label, value) in numbers {
        if let Some(n) = value {
            set.insert(label, PropertyValue::Number(n));
        }
    }

    set.insert(
        labels::CREATED_AT,
        PropertyValue::date(submission.created_at.unwrap_or(now)),
    );
    set.insert(labels::LAST_EDITED, PropertyValue::date(now));

    set
}
