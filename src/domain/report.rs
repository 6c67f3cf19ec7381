//! Audit report wire model.
//!
//! These types mirror the JSON body returned by the validation endpoint and are
//! decoded exactly once, when the response arrives. Decoding is deliberately
//! lenient: the server is an external collaborator, so absent pages, `null`
//! collections and unexpected status strings all decode to well-defined values
//! instead of failing the whole response.
//!
//! # Wire format
//!
//! ```json
//! {
//!   "overall_status": "FAIL",
//!   "page_1": { "fields": { "company_name": { "valid": true, "value": "Acme" } } },
//!   "page_2": { "rows": [
//!     { "row_number": 1, "row_status": "PASS", "fields": {
//!         "business_person_name": { "valid": true, "value": "Jane Roe" },
//!         "criteria_code": { "valid": true, "value": "1.a" },
//!         "transaction_type": { "valid": true, "value": "Lease" } } }
//!   ] }
//! }
//! ```
//!
//! # Scalar leniency
//!
//! - `valid` follows truthiness: `true`, non-zero numbers, non-empty strings and
//!   any array/object are valid; `false`, `0`, `""`, `null` and absence are not.
//! - `value` and `error` treat `null`, `""`, `0` and `false` as empty. Other
//!   scalars are kept as their JSON text (`2024` becomes `"2024"`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Text shown for an [`AuditStatus::Missing`] status.
const MISSING_STATUS_TEXT: &str = "UNKNOWN";

/// Error text attached to a field the server did not return.
pub const MISSING_FIELD_ERROR: &str = "Missing";

/// Document-level or row-level verdict.
///
/// Only the exact string `"PASS"` decodes to [`AuditStatus::Pass`]. Anything the
/// server sends that is neither `"PASS"` nor `"FAIL"` is kept verbatim in
/// [`AuditStatus::Other`] so it can be displayed, and is treated as a failure
/// everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuditStatus {
    /// Exactly `"PASS"`.
    Pass,
    /// Exactly `"FAIL"`.
    Fail,
    /// Any other value, as sent.
    Other(String),
    /// Absent or `null`.
    #[default]
    Missing,
}

impl AuditStatus {
    /// Classifies a raw status string.
    ///
    /// ```
    /// use pdf_audit::domain::AuditStatus;
    ///
    /// assert_eq!(AuditStatus::parse("PASS"), AuditStatus::Pass);
    /// assert_eq!(AuditStatus::parse("pass"), AuditStatus::Other("pass".into()));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "PASS" => Self::Pass,
            "FAIL" => Self::Fail,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns `true` only for [`AuditStatus::Pass`].
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns the status as the server sent it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Other(raw) => raw,
            Self::Missing => MISSING_STATUS_TEXT,
        }
    }
}

impl std::fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AuditStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => Self::Missing,
            Value::String(raw) => Self::parse(&raw),
            other => Self::Other(other.to_string()),
        })
    }
}

impl Serialize for AuditStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Missing => serializer.serialize_none(),
            other => serializer.serialize_str(other.as_str()),
        }
    }
}

/// Validity verdict plus extracted value and error for one form field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldResult {
    /// Whether the extracted value passed validation.
    #[serde(default, deserialize_with = "truthy")]
    pub valid: bool,

    /// Extracted value; `None` when the server sent nothing displayable.
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub value: Option<String>,

    /// Validation message, if any.
    #[serde(default, deserialize_with = "falsy_as_none")]
    pub error: Option<String>,
}

impl FieldResult {
    /// The result substituted for a field the server did not return.
    ///
    /// ```
    /// use pdf_audit::domain::FieldResult;
    ///
    /// let missing = FieldResult::missing();
    /// assert!(!missing.valid);
    /// assert_eq!(missing.error.as_deref(), Some("Missing"));
    /// ```
    #[must_use]
    pub fn missing() -> Self {
        Self {
            valid: false,
            value: None,
            error: Some(MISSING_FIELD_ERROR.to_string()),
        }
    }
}

/// Header fields extracted from the first page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageOne {
    /// Field name to result. Keys beyond the four expected ones are kept but ignored.
    ///
    /// Falsy entries (`null`, `false`, `0`, `""`) are dropped so they resolve
    /// to [`FieldResult::missing`]; other non-object entries decode as an
    /// invalid, empty result. A `fields` member that is not an object is empty.
    #[serde(default, deserialize_with = "lenient_fields")]
    pub fields: BTreeMap<String, FieldResult>,
}

/// The three fields audited in each page-2 table row.
///
/// Each slot is optional on the wire; see [`RowFields::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RowFields {
    /// Business or person name column.
    #[serde(default, deserialize_with = "lenient_slot")]
    pub business_person_name: Option<FieldResult>,
    /// Criteria code column (e.g. `1.a`).
    #[serde(default, deserialize_with = "lenient_slot")]
    pub criteria_code: Option<FieldResult>,
    /// Transaction type column.
    #[serde(default, deserialize_with = "lenient_slot")]
    pub transaction_type: Option<FieldResult>,
}

impl RowFields {
    /// Returns the slot's result, or [`FieldResult::missing`] when absent.
    #[must_use]
    pub fn resolve(slot: Option<&FieldResult>) -> FieldResult {
        slot.cloned().unwrap_or_else(FieldResult::missing)
    }
}

/// Validity verdict plus extracted fields for one table row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RowResult {
    /// Row number as displayed by the server (usually 1-based).
    #[serde(default, deserialize_with = "display_text")]
    pub row_number: Option<String>,
    /// Row verdict.
    #[serde(default)]
    pub row_status: AuditStatus,
    /// Per-column results.
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: RowFields,
}

/// Related-party table extracted from the second page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageTwo {
    /// Rows in the order the server returned them.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rows: Vec<RowResult>,
}

/// The complete server response for one validation request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditReport {
    /// Document-wide verdict.
    #[serde(default)]
    pub overall_status: AuditStatus,
    /// Page-1 header fields.
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_1: PageOne,
    /// Page-2 table rows.
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_2: PageTwo,
}

impl AuditReport {
    /// Decodes a response body.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error when the body is not JSON or when a present
    /// member has an impossible shape (for example `"rows": "none"`).
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(is_truthy(&Value::deserialize(deserializer)?))
}

/// `None` for falsy entries; truthy non-objects carry no verdict or value.
fn field_entry(value: Value) -> Option<FieldResult> {
    if !is_truthy(&value) {
        return None;
    }
    Some(if value.is_object() {
        serde_json::from_value(value).unwrap_or_default()
    } else {
        FieldResult::default()
    })
}

fn lenient_fields<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BTreeMap<String, FieldResult>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(entries) => entries
            .into_iter()
            .filter_map(|(key, entry)| field_entry(entry).map(|field| (key, field)))
            .collect(),
        _ => BTreeMap::new(),
    })
}

fn lenient_slot<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<FieldResult>, D::Error> {
    Ok(field_entry(Value::deserialize(deserializer)?))
}

fn falsy_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn display_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}
