//! Nesting of appendices, addenda and attachments.

use crate::error::{Error, Result};
use crate::model::{Document, Part, PartChild, PartKind};

/// Attach every sub-part to its parent.
///
/// Appendices are listed in the body's children and addenda in the children
/// of the most recent appendix; both stay at the top level. Attachments are
/// moved, whole, into the children of the most recent addendum and leave the
/// top-level list. The relative order of the remaining parts is unchanged.
pub fn restructure(doc: &mut Document) -> Result<()> {
    let parts = std::mem::take(&mut doc.parts);
    let mut kept: Vec<Part> = Vec::with_capacity(parts.len());
    let mut body_children = Vec::new();
    let mut appendix: Option<usize> = None;
    let mut addendum: Option<usize> = None;

    for part in parts {
        match part.kind {
            PartKind::Body => kept.push(part),
            PartKind::Appendix => {
                body_children.push(part.summary());
                appendix = Some(kept.len());
                kept.push(part);
            }
            PartKind::Addendum => {
                let parent = appendix.ok_or_else(|| out_of_order(&part))?;
                kept[parent].children.push(part.summary());
                addendum = Some(kept.len());
                kept.push(part);
            }
            PartKind::Attachment => {
                let parent = addendum.ok_or_else(|| out_of_order(&part))?;
                log::debug!(
                    "Moving attachment {} under {}",
                    part.name,
                    kept[parent].name
                );
                kept[parent].children.push(PartChild::Part(part));
            }
        }
    }

    if !body_children.is_empty() {
        let body = kept
            .iter_mut()
            .find(|p| p.kind == PartKind::Body)
            .ok_or(Error::MissingBody)?;
        body.children.extend(body_children);
    }

    doc.parts = kept;
    Ok(())
}

fn out_of_order(part: &Part) -> Error {
    Error::HierarchyOrder {
        part: part.name.clone(),
        kind: part.kind,
    }
}
