//! Typed document header, derived from the raw properties.

use super::PropertyValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Property keys with a fixed meaning.
pub mod keys {
    /// Related prior documents (required)
    pub const REFERENCES: &str = "ΣΧΕΤ";
    /// Primary recipients (required)
    pub const TO: &str = "ΠΡΟΣ";
    /// Informational recipients (required)
    pub const INFO: &str = "ΚΟΙΝ";
    /// Classification level (required, single value)
    pub const CLASSIFICATION: &str = "ΒΑΘΜΟΣ";
    /// Draft indicator (required, single value)
    pub const DRAFT: &str = "ΣΧΕΔΙΟ";

    /// Subject line (optional, kept in the header extras)
    pub const SUBJECT: &str = "ΘΕΜΑ";

    /// Every key the header reads.
    pub const KNOWN: [&str; 5] = [REFERENCES, TO, INFO, CLASSIFICATION, DRAFT];
}

/// Value of the draft indicator on the original copy.
pub const ORIGINAL_DRAFT: &str = "Σ.";

/// Document header after post-processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Related documents
    pub references: References,

    /// Whether there is exactly one reference
    pub single_reference: bool,

    /// Primary recipients
    pub to: RecipientList,

    /// Informational recipients
    pub info: RecipientList,

    /// Primary recipients fit inline as a short list
    pub multi_send: bool,

    /// Informational recipients fit inline as a short list
    pub multi_info: bool,

    /// Recipients must be rendered as a numbered table
    pub recipient_table: bool,

    /// Classification level, as written
    pub classification: String,

    /// Short classification code
    pub classification_code: ClassificationCode,

    /// Draft indicator, as written
    pub draft: String,

    /// Whether this document is a copy rather than the original
    pub is_copy: bool,

    /// Properties with no fixed meaning
    pub extra: BTreeMap<String, PropertyValue>,
}

/// Related documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum References {
    /// One reference, rendered without a label
    Single(String),
    /// Several references, each labelled with a Greek ordinal
    Multiple(Vec<LabeledReference>),
}

impl References {
    /// Number of references.
    pub fn len(&self) -> usize {
        match self {
            References::Single(_) => 1,
            References::Multiple(refs) => refs.len(),
        }
    }

    /// Check if there are no labelled references.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A reference with its Greek ordinal label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledReference {
    /// Greek ordinal letter (`α`, `β`, ...)
    pub label: String,
    /// Reference text
    pub value: String,
}

/// A recipient property, either inline or numbered for a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "layout", content = "recipients", rename_all = "snake_case")]
pub enum RecipientList {
    /// Rendered inline, as parsed
    Inline(PropertyValue),
    /// Rendered as rows of a recipient table
    Numbered(Vec<NumberedRecipient>),
}

impl RecipientList {
    /// Number of recipients.
    pub fn len(&self) -> usize {
        match self {
            RecipientList::Inline(value) => value.len(),
            RecipientList::Numbered(rows) => rows.len(),
        }
    }

    /// Check if there are no recipients.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One row of the recipient table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedRecipient {
    /// Sequence number, continuous across primary and informational recipients
    pub number: usize,
    /// Recipient name
    pub name: String,
}

/// Short classification code printed in page margins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationCode {
    /// Secret (`ΑΠ`)
    #[serde(rename = "ΑΠ")]
    Secret,
    /// Confidential (`ΕΠ`)
    #[serde(rename = "ΕΠ")]
    Confidential,
    /// No code
    #[default]
    #[serde(rename = "")]
    None,
}

impl ClassificationCode {
    /// The printed code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationCode::Secret => "ΑΠ",
            ClassificationCode::Confidential => "ΕΠ",
            ClassificationCode::None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_code_str() {
        assert_eq!(ClassificationCode::Secret.as_str(), "ΑΠ");
        assert_eq!(ClassificationCode::default().as_str(), "");
    }

    #[test]
    fn test_recipient_list_len() {
        let inline = RecipientList::Inline(PropertyValue::Scalar("ΓΕΣ".to_string()));
        assert_eq!(inline.len(), 1);

        let numbered = RecipientList::Numbered(vec![NumberedRecipient {
            number: 1,
            name: "ΓΕΣ".to_string(),
        }]);
        assert!(!numbered.is_empty());
    }
}
