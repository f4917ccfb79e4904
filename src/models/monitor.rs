use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::highlight::highlight_property;

/// Current verdict of a runtime monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Verdict {
    True,
    False,
    #[default]
    Unknown,
}

impl From<Option<bool>> for Verdict {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Verdict::True,
            Some(false) => Verdict::False,
            None => Verdict::Unknown,
        }
    }
}

impl From<Verdict> for Option<bool> {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::True => Some(true),
            Verdict::False => Some(false),
            Verdict::Unknown => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::True => write!(f, "True"),
            Verdict::False => write!(f, "False"),
            Verdict::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Events that justify a verdict, as opaque JSON records
pub type Witness = Vec<Value>;

/// A property being checked by a live monitoring server
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonitorRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub property: String,
    #[serde(default)]
    pub verdict: Verdict,
    #[serde(default)]
    pub witness: Option<Witness>,
}

impl MonitorRecord {
    /// Filler for indices of a sparse monitor list that have not been reported
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }

    /// Display name: the title, then the id, then a generic label
    pub fn display_name(&self) -> &str {
        self.title
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("Property")
    }

    pub fn has_witness(&self) -> bool {
        self.witness.as_ref().is_some_and(|w| !w.is_empty())
    }

    /// Property text decorated for display
    pub fn property_markup(&self) -> String {
        highlight_property(&self.property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verdict_maps_json_null_to_unknown() {
        let record: MonitorRecord = serde_json::from_value(json!({
            "id": "p1",
            "title": "No crash",
            "property": "globally: no /crash",
            "verdict": null,
            "witness": null
        }))
        .unwrap();
        assert_eq!(record.verdict, Verdict::Unknown);
        assert!(!record.has_witness());
    }

    #[test]
    fn missing_fields_default() {
        let record: MonitorRecord =
            serde_json::from_value(json!({ "property": "globally: some /a", "verdict": false }))
                .unwrap();
        assert_eq!(record.verdict, Verdict::False);
        assert_eq!(record.display_name(), "Property");
    }

    #[test]
    fn verdict_serializes_as_nullable_bool() {
        assert_eq!(serde_json::to_value(Verdict::True).unwrap(), json!(true));
        assert_eq!(serde_json::to_value(Verdict::Unknown).unwrap(), json!(null));
    }

    #[test]
    fn empty_witness_is_not_revealable() {
        let record = MonitorRecord {
            witness: Some(vec![]),
            ..MonitorRecord::placeholder()
        };
        assert!(!record.has_witness());
        assert!(!record.is_placeholder());
    }
}
