//! Document-level header rules, applied after the line pass.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::model::{
    keys, ClassificationCode, Document, Header, LabeledReference, NumberedRecipient,
    PropertyMap, PropertyValue, RecipientList, References, ORIGINAL_DRAFT,
};
use crate::parser::index::{greek_ordinal, GREEK_ORDINALS};

/// Longest recipient list that is still written inline.
pub const INLINE_RECIPIENT_LIMIT: usize = 3;

/// Classification substring that always requires a recipient table.
pub const HIGH_SENSITIVITY_MARKER: &str = "ΑΠΟΡΡΗΤΟ";

const SECRET_PREFIX: &str = "ΑΠΟΡ";
const CONFIDENTIAL: &str = "ΕΜΠΙΣΤΕΥΤΙΚΟ";

/// Derive the typed header from the document properties.
///
/// The rules run in a fixed order; the recipient table decision combines
/// list lengths and the classification level.
pub fn post_process(doc: &Document) -> Result<Header> {
    let props = &doc.properties;

    let references = label_references(required(props, keys::REFERENCES)?);
    let single_reference = matches!(references, References::Single(_));

    let to = required(props, keys::TO)?;
    let info = required(props, keys::INFO)?;
    let multi_send = is_short_list(to);
    let multi_info = is_short_list(info);
    let mut recipient_table = is_long_list(to) || is_long_list(info);

    let classification = required_scalar(props, keys::CLASSIFICATION)?;
    if classification.contains(HIGH_SENSITIVITY_MARKER) {
        recipient_table = true;
    }

    let (to, info) = if recipient_table {
        number_recipients(to, info)
    } else {
        (
            RecipientList::Inline(to.clone()),
            RecipientList::Inline(info.clone()),
        )
    };

    let classification_code = classification_code(classification);
    let draft = required_scalar(props, keys::DRAFT)?;
    let is_copy = draft != ORIGINAL_DRAFT;

    log::debug!(
        "Header: single_reference={} multi_send={} multi_info={} recipient_table={} code={:?} is_copy={}",
        single_reference,
        multi_send,
        multi_info,
        recipient_table,
        classification_code.as_str(),
        is_copy
    );

    let extra: BTreeMap<String, PropertyValue> = props
        .iter()
        .filter(|(key, _)| !keys::KNOWN.contains(key))
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();

    Ok(Header {
        references,
        single_reference,
        to,
        info,
        multi_send,
        multi_info,
        recipient_table,
        classification: classification.to_string(),
        classification_code,
        draft: draft.to_string(),
        is_copy,
        extra,
    })
}

fn required<'a>(props: &'a PropertyMap, key: &str) -> Result<&'a PropertyValue> {
    props
        .get(key)
        .ok_or_else(|| Error::MissingProperty(key.to_string()))
}

fn required_scalar<'a>(props: &'a PropertyMap, key: &str) -> Result<&'a str> {
    required(props, key)?
        .as_scalar()
        .ok_or_else(|| Error::UnexpectedList(key.to_string()))
}

fn label_references(value: &PropertyValue) -> References {
    match value {
        PropertyValue::Scalar(reference) => References::Single(reference.clone()),
        PropertyValue::List(values) => {
            if values.len() > GREEK_ORDINALS.len() {
                log::warn!(
                    "{} references given, only the first {} can be labelled",
                    values.len(),
                    GREEK_ORDINALS.len()
                );
            }
            let labeled = values
                .iter()
                .enumerate()
                .map_while(|(i, value)| {
                    greek_ordinal(i + 1).map(|label| LabeledReference {
                        label: label.to_string(),
                        value: value.clone(),
                    })
                })
                .collect();
            References::Multiple(labeled)
        }
    }
}

fn is_short_list(value: &PropertyValue) -> bool {
    !value.is_scalar() && value.len() <= INLINE_RECIPIENT_LIMIT
}

fn is_long_list(value: &PropertyValue) -> bool {
    !value.is_scalar() && value.len() > INLINE_RECIPIENT_LIMIT
}

/// Number primary then informational recipients continuously from 1.
fn number_recipients(to: &PropertyValue, info: &PropertyValue) -> (RecipientList, RecipientList) {
    let mut numbers = 1..;
    let mut number = |value: &PropertyValue| {
        value
            .values()
            .zip(numbers.by_ref())
            .map(|(name, number)| NumberedRecipient {
                number,
                name: name.to_string(),
            })
            .collect::<Vec<_>>()
    };
    let to = number(to);
    let info = number(info);
    (RecipientList::Numbered(to), RecipientList::Numbered(info))
}

fn classification_code(classification: &str) -> ClassificationCode {
    if classification.contains(SECRET_PREFIX) {
        ClassificationCode::Secret
    } else if classification == CONFIDENTIAL {
        ClassificationCode::Confidential
    } else {
        ClassificationCode::None
    }
}

impl Document {
    /// Derive and store the typed header.
    pub fn finalize_header(&mut self) -> Result<&Header> {
        let header = post_process(self)?;
        Ok(self.header.insert(header))
    }
}
