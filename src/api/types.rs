//! JIRA API request and response types.
//!
//! These types model the parts of the JIRA REST API v3 used for issue
//! creation: the Atlassian Document Format body and the creation response.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Root node type of an ADF document.
const DOC_TYPE: &str = "doc";

/// ADF schema version accepted by JIRA Cloud.
const DOC_VERSION: u32 = 1;

/// Atlassian Document Format (ADF) content.
///
/// JIRA uses ADF for rich text fields like descriptions. Plain text is
/// wrapped as a single paragraph holding a single text node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlassianDoc {
    /// The document type (always "doc" for root documents).
    #[serde(rename = "type")]
    pub doc_type: String,
    /// The document version.
    pub version: u32,
    /// The content nodes within the document.
    #[serde(default)]
    pub content: Vec<AdfNode>,
}

/// A node inside an ADF document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdfNode {
    /// The node type, e.g. "paragraph" or "text".
    #[serde(rename = "type")]
    pub node_type: String,
    /// Child nodes. Omitted for leaf nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<AdfNode>,
    /// Text of a "text" node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl AdfNode {
    /// A paragraph node with the given children.
    pub fn paragraph(content: Vec<AdfNode>) -> Self {
        Self {
            node_type: "paragraph".to_string(),
            content,
            text: None,
        }
    }

    /// A text node carrying `text` verbatim.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            node_type: "text".to_string(),
            content: Vec::new(),
            text: Some(text.into()),
        }
    }
}

impl AtlassianDoc {
    /// Wrap plain text into a document with one paragraph and one text run.
    ///
    /// Newlines and markup are kept inside the single text run.
    pub fn from_plain_text(text: &str) -> Self {
        Self {
            doc_type: DOC_TYPE.to_string(),
            version: DOC_VERSION,
            content: vec![AdfNode::paragraph(vec![AdfNode::text(text)])],
        }
    }

    /// Extract the text back out of the document.
    ///
    /// Text runs are concatenated; consecutive block nodes are separated by a
    /// newline. For a document built by `from_plain_text` this returns the
    /// original string unchanged.
    pub fn to_plain_text(&self) -> String {
        let blocks: Vec<String> = self.content.iter().map(Self::node_text).collect();
        blocks.join("\n")
    }

    fn node_text(node: &AdfNode) -> String {
        let mut result = node.text.clone().unwrap_or_default();
        for child in &node.content {
            result.push_str(&Self::node_text(child));
        }
        result
    }

    /// Number of paragraph nodes at the top level.
    pub fn paragraph_count(&self) -> usize {
        self.content
            .iter()
            .filter(|node| node.node_type == "paragraph")
            .count()
    }
}

impl Default for AtlassianDoc {
    fn default() -> Self {
        Self {
            doc_type: DOC_TYPE.to_string(),
            version: DOC_VERSION,
            content: vec![],
        }
    }
}

/// The response to a successful issue creation.
///
/// Returned by `POST /rest/api/3/issue`. The body is kept exactly as JIRA
/// sent it; `key`, `id` and `self` are read on demand so an unusual but
/// well-formed response never turns a created issue into an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatedIssue {
    body: Value,
}

impl CreatedIssue {
    /// Wrap a parsed response body.
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// The issue key, e.g. "SCRUM-1".
    pub fn key(&self) -> Option<&str> {
        self.body.get("key").and_then(Value::as_str)
    }

    /// The issue ID. JIRA sends a string, but a number is accepted too.
    pub fn id(&self) -> Option<String> {
        match self.body.get("id")? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    /// The REST URL of the new issue.
    pub fn self_url(&self) -> Option<&str> {
        self.body.get("self").and_then(Value::as_str)
    }

    /// Look up any top-level field of the response.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.body.get(field)
    }

    /// The raw response body.
    pub fn as_json(&self) -> &Value {
        &self.body
    }

    /// The response rendered as indented JSON.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.body).unwrap_or_else(|_| self.body.to_string())
    }
}

impl From<Value> for CreatedIssue {
    fn from(body: Value) -> Self {
        Self::new(body)
    }
}

impl fmt::Display for CreatedIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key() {
            Some(key) => write!(f, "{}", key),
            None => write!(f, "(no key in response)"),
        }
    }
}
