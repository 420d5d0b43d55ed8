//! Issue creation request body.
//!
//! Builds the JSON body for `POST /rest/api/3/issue` from the values a user
//! types into the form.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::AtlassianDoc;

/// Issue type used when none is chosen.
pub const DEFAULT_ISSUE_TYPE: &str = "Task";

/// How the issue type is identified in the request.
///
/// JIRA accepts either the numeric ID of an issue type or its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IssueType {
    /// Identified by numeric ID, serialized as `{"id": "10001"}`.
    ById {
        /// The numeric ID, kept as a string.
        id: String,
    },
    /// Identified by name, serialized as `{"name": "Bug"}`.
    ByName {
        /// The issue type name.
        name: String,
    },
}

impl IssueType {
    /// Resolve a user-supplied value.
    ///
    /// A non-empty value made only of ASCII digits is an ID; anything else is
    /// a name.
    pub fn parse(value: &str) -> Self {
        if is_numeric_id(value) {
            IssueType::ById {
                id: value.to_string(),
            }
        } else {
            IssueType::ByName {
                name: value.to_string(),
            }
        }
    }

    /// The ID or name as given.
    pub fn value(&self) -> &str {
        match self {
            IssueType::ById { id } => id,
            IssueType::ByName { name } => name,
        }
    }
}

impl Default for IssueType {
    fn default() -> Self {
        IssueType::ByName {
            name: DEFAULT_ISSUE_TYPE.to_string(),
        }
    }
}

impl From<&str> for IssueType {
    fn from(value: &str) -> Self {
        IssueType::parse(value)
    }
}

impl From<String> for IssueType {
    fn from(value: String) -> Self {
        IssueType::parse(&value)
    }
}

impl From<u64> for IssueType {
    fn from(value: u64) -> Self {
        IssueType::ById {
            id: value.to_string(),
        }
    }
}

impl From<u32> for IssueType {
    fn from(value: u32) -> Self {
        IssueType::from(u64::from(value))
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

fn is_numeric_id(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Reference to a project by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    /// The project key, e.g. "SCRUM".
    pub key: String,
}

/// Fields of a new issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueFields {
    /// The project the issue belongs to.
    pub project: ProjectRef,
    /// One-line summary.
    pub summary: String,
    /// Rich-text description.
    pub description: AtlassianDoc,
    /// The issue type.
    #[serde(rename = "issuetype")]
    pub issue_type: IssueType,
}

/// The complete body of an issue creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuePayload {
    /// The issue fields.
    pub fields: IssueFields,
}

impl IssuePayload {
    /// The payload rendered as indented JSON.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the body for creating an issue.
///
/// No field is validated here: empty or oversized values are passed through
/// and left for JIRA to accept or reject.
pub fn build_issue_payload(
    project_key: &str,
    summary: &str,
    description: &str,
    issue_type: impl Into<IssueType>,
) -> IssuePayload {
    IssuePayload {
        fields: IssueFields {
            project: ProjectRef {
                key: project_key.to_string(),
            },
            summary: summary.to_string(),
            description: AtlassianDoc::from_plain_text(description),
            issue_type: issue_type.into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_payload() {
        let payload = build_issue_payload("SCRUM", "Test Issue", "Test Description", "Task");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "fields": {
                    "project": {"key": "SCRUM"},
                    "summary": "Test Issue",
                    "description": {
                        "type": "doc",
                        "version": 1,
                        "content": [
                            {
                                "type": "paragraph",
                                "content": [{"type": "text", "text": "Test Description"}]
                            }
                        ]
                    },
                    "issuetype": {"name": "Task"}
                }
            })
        );
    }

    #[test]
    fn test_numeric_issue_type_is_id() {
        for value in ["10001", "0", "42"] {
            let payload = build_issue_payload("P", "s", "d", value);
            assert_eq!(
                serde_json::to_value(&payload.fields.issue_type).unwrap(),
                json!({"id": value})
            );
        }
    }

    #[test]
    fn test_named_issue_type_is_name() {
        for value in ["Bug", "Story", "Task", "10001a", "-1", "1.5", " 10", ""] {
            let payload = build_issue_payload("P", "s", "d", value);
            assert_eq!(
                serde_json::to_value(&payload.fields.issue_type).unwrap(),
                json!({"name": value})
            );
        }
    }

    #[test]
    fn test_non_ascii_digits_are_names() {
        // Arabic-Indic digits are not accepted as an ID
        assert_eq!(
            IssueType::parse("١٢٣"),
            IssueType::ByName {
                name: "١٢٣".to_string()
            }
        );
    }

    #[test]
    fn test_integer_issue_type_is_id() {
        let payload = build_issue_payload("P", "s", "d", 10002u64);
        assert_eq!(
            payload.fields.issue_type,
            IssueType::ById {
                id: "10002".to_string()
            }
        );
    }

    #[test]
    fn test_default_issue_type_is_task() {
        let payload = build_issue_payload("P", "s", "d", IssueType::default());
        assert_eq!(payload.fields.issue_type.value(), "Task");
    }

    #[test]
    fn test_description_kept_verbatim() {
        let description = "Steps:\n1. open\n2. <click>\n\n\"done\"";
        let payload = build_issue_payload("P", "s", description, "Bug");
        assert_eq!(payload.fields.description.paragraph_count(), 1);
        assert_eq!(payload.fields.description.to_plain_text(), description);
    }

    #[test]
    fn test_empty_fields_are_not_validated() {
        let payload = build_issue_payload("", "", "", "Task");
        assert_eq!(payload.fields.project.key, "");
        assert_eq!(payload.fields.summary, "");
    }

    #[test]
    fn test_payload_deserializes_issue_type_variants() {
        let by_id: IssueType = serde_json::from_value(json!({"id": "10001"})).unwrap();
        let by_name: IssueType = serde_json::from_value(json!({"name": "Bug"})).unwrap();
        assert_eq!(by_id, IssueType::parse("10001"));
        assert_eq!(by_name, IssueType::parse("Bug"));
    }

    #[test]
    fn test_to_pretty_json() {
        let payload = build_issue_payload("SCRUM", "Test Issue", "Test Description", "Task");
        let pretty = payload.to_pretty_json().unwrap();
        assert!(pretty.contains("\"issuetype\""));
        assert!(pretty.contains('\n'));
    }
}
