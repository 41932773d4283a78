//! Integration tests for parsing complete documents.

use std::io::Write;

use armydoc::error::TableStateKind;
use armydoc::model::{ClassificationCode, Numeral, RecipientList, References};
use armydoc::{
    parse_file, parse_str, parse_str_with_options, Alignment, Block, Error, LineKind,
    Orientation, ParseOptions, PartChild, PartKind, PropertyValue,
};

const ORDER: &str = "\
ΣΧΕΤ = Φ.900/1/123 | Φ.900/2/456
ΠΡΟΣ = 1η ΜΠ | 2η ΜΠ
ΚΟΙΝ = ΓΕΣ
ΒΑΘΜΟΣ = ΕΜΠΙΣΤΕΥΤΙΚΟ
ΣΧΕΔΙΟ = Σ.
ΘΕΜΑ = Άσκηση
# ΚΟΡΜΟΣ
1. Σας γνωρίζουμε *ότι*
\tη μονάδα κινείται/
\tα. Πρώτο σκέλος
.//
% name:Δύναμη_Μονάδων border:1
:Μονάδα | Δύναμη: | <
^ | 120 | 30
/%
## Α Διάθεση Δυνάμεων
>< ΠΙΝΑΚΑΣ ><
$
# Α-1 Χάρτης Περιοχής
img: maps/area.png
# Α-1-1 Υπόμνημα
(γ) Σημεία ελέγχου
# Β Διοικητική Μέριμνα
ΤΕΛΟΣ
Αυτή η γραμμή δεν διαβάζεται
";

#[test]
fn test_parse_properties() {
    let doc = parse_str(ORDER).unwrap();
    assert_eq!(doc.properties.len(), 6);
    assert_eq!(
        doc.properties.get("ΠΡΟΣ"),
        Some(&PropertyValue::List(vec![
            "1η ΜΠ".to_string(),
            "2η ΜΠ".to_string()
        ]))
    );
    assert_eq!(
        doc.properties.get("ΘΕΜΑ").and_then(|v| v.as_scalar()),
        Some("Άσκηση")
    );
}

#[test]
fn test_parse_header() {
    let doc = parse_str(ORDER).unwrap();
    let header = doc.header.as_ref().unwrap();

    assert!(!header.single_reference);
    match &header.references {
        References::Multiple(refs) => {
            assert_eq!(refs.len(), 2);
            assert_eq!(refs[0].label, "α");
            assert_eq!(refs[1].label, "β");
            assert_eq!(refs[1].value, "Φ.900/2/456");
        }
        other => panic!("expected labelled references, got {:?}", other),
    }

    assert!(header.multi_send);
    assert!(!header.multi_info);
    assert!(!header.recipient_table);
    assert!(matches!(header.to, RecipientList::Inline(_)));
    assert_eq!(header.classification_code, ClassificationCode::Confidential);
    assert!(!header.is_copy);
    assert!(header.extra.contains_key("ΘΕΜΑ"));
}

#[test]
fn test_parse_top_level_parts() {
    let doc = parse_str(ORDER).unwrap();
    let names: Vec<&str> = doc.parts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["ΚΟΡΜΟΣ", "Α", "Α-1", "Β"]);

    let appendix = doc.find_part("Α").unwrap();
    assert_eq!(appendix.orientation, Orientation::Landscape);
    assert_eq!(appendix.description, "Διάθεση Δυνάμεων");
    assert_eq!(appendix.description_normalized, "ΔΙΑΘΕΣΗ ΔΥΝΑΜΕΩΝ");
}

#[test]
fn test_parse_hierarchy() {
    let doc = parse_str(ORDER).unwrap();

    let body = doc.body().unwrap();
    let children: Vec<&str> = body.children.iter().map(|c| c.name()).collect();
    assert_eq!(children, vec!["Α", "Β"]);

    let appendix = doc.find_part("Α").unwrap();
    assert_eq!(appendix.children.len(), 1);
    assert_eq!(appendix.children[0].name(), "Α-1");

    let addendum = doc.find_part("Α-1").unwrap();
    match &addendum.children[..] {
        [PartChild::Part(attachment)] => {
            assert_eq!(attachment.name, "Α-1-1");
            assert_eq!(attachment.kind, PartKind::Attachment);
            assert_eq!(attachment.block_count(), 1);
        }
        other => panic!("expected one nested attachment, got {:?}", other),
    }

    assert!(doc.find_part("Α-1-1").is_none());
    assert_eq!(doc.block_count(), 9);
}

#[test]
fn test_parse_body_blocks() {
    let doc = parse_str(ORDER).unwrap();
    let blocks = &doc.body().unwrap().blocks;
    assert_eq!(blocks.len(), 5);

    let first = blocks[0].as_line().unwrap();
    assert_eq!(first.kind, LineKind::Indexed);
    assert_eq!(first.index_token(), Some("1."));
    assert_eq!(first.content, "Σας γνωρίζουμε <b>ότι</b>");

    let second = blocks[1].as_line().unwrap();
    assert_eq!(second.kind, LineKind::Continuation);
    assert_eq!(second.indent, 1);
    assert!(second.no_line_break);
    assert_eq!(second.content, "η μονάδα κινείται");

    let third = blocks[2].as_line().unwrap();
    assert_eq!(third.index.as_ref().unwrap().numeral, Numeral::Greek(1));

    assert_eq!(blocks[3], Block::Separator);
}

#[test]
fn test_parse_table() {
    let doc = parse_str(ORDER).unwrap();
    let table = doc.body().unwrap().blocks[4].as_table().unwrap();

    assert_eq!(table.id, 1);
    assert_eq!(table.name.as_deref(), Some("Δύναμη Μονάδων"));
    assert_eq!(table.attribute("border"), Some("1"));
    assert_eq!(table.row_count(), 2);

    let header_row = &table.rows[0];
    assert_eq!(header_row.len(), 2);
    assert_eq!(header_row[0].alignment, Alignment::Left);
    assert_eq!(header_row[0].rowspan, 2);
    assert_eq!(header_row[1].content, "Δύναμη");
    assert_eq!(header_row[1].alignment, Alignment::Right);
    assert_eq!(header_row[1].colspan, 2);

    let values: Vec<&str> = table.rows[1].iter().map(|c| c.content.as_str()).collect();
    assert_eq!(values, vec!["120", "30"]);
}

#[test]
fn test_parse_layout_blocks() {
    let doc = parse_str(ORDER).unwrap();

    let appendix = doc.find_part("Α").unwrap();
    assert_eq!(
        appendix.blocks,
        vec![
            Block::CenteredLine {
                content: "ΠΙΝΑΚΑΣ".to_string(),
                no_line_break: false,
            },
            Block::PageBreak,
        ]
    );

    let addendum = doc.find_part("Α-1").unwrap();
    assert_eq!(
        addendum.blocks,
        vec![Block::Image {
            path: "maps/area.png".to_string()
        }]
    );
}

#[test]
fn test_parse_raw_keeps_flat_parts() {
    let doc = parse_str_with_options(ORDER, ParseOptions::new().raw()).unwrap();
    assert!(doc.header.is_none());
    assert_eq!(doc.part_count(), 5);
    assert!(doc.parts.iter().all(|p| p.children.is_empty()));
}

#[test]
fn test_parse_recipient_table() {
    let source = ORDER
        .replace("ΚΟΙΝ = ΓΕΣ", "ΚΟΙΝ = ΓΕΣ | ΓΕΕΘΑ | ΑΣΔΕΝ | 1η ΣΤΡΑΤΙΑ")
        .replace("ΕΜΠΙΣΤΕΥΤΙΚΟ", "ΑΠΟΡΡΗΤΟ");
    let doc = parse_str(&source).unwrap();
    let header = doc.header.unwrap();

    assert!(header.recipient_table);
    assert_eq!(header.classification_code, ClassificationCode::Secret);
    match (&header.to, &header.info) {
        (RecipientList::Numbered(to), RecipientList::Numbered(info)) => {
            assert_eq!(to.len(), 2);
            assert_eq!(info.first().map(|r| r.number), Some(3));
            assert_eq!(info.last().map(|r| r.number), Some(6));
        }
        other => panic!("expected numbered recipients, got {:?}", other),
    }
}

#[test]
fn test_parse_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ORDER.as_bytes()).unwrap();

    let doc = parse_file(file.path()).unwrap();
    assert_eq!(doc, parse_str(ORDER).unwrap());
}

#[test]
fn test_parse_unclosed_table() {
    let source = "# ΚΟΡΜΟΣ\n% name:Α\nα | β\nΤΕΛΟΣ\n";
    let err = parse_str_with_options(source, ParseOptions::new().raw()).unwrap_err();
    assert!(matches!(
        err,
        Error::TableState {
            kind: TableStateKind::Unclosed,
            ..
        }
    ));
}

#[test]
fn test_parse_attachment_without_addendum() {
    let source = "# ΚΟΡΜΟΣ\n# Α Τίτλος\n# Α-1-1 Συνημμένο\nΤΕΛΟΣ\n";
    let options = ParseOptions::new().with_post_processing(false);
    let err = parse_str_with_options(source, options).unwrap_err();
    assert!(matches!(
        err,
        Error::HierarchyOrder {
            kind: PartKind::Attachment,
            ..
        }
    ));
}

#[test]
fn test_parse_malformed_property() {
    let err = parse_str("ΣΧΕΤ = α = β\n# ΚΟΡΜΟΣ\nΤΕΛΟΣ\n").unwrap_err();
    assert!(matches!(err, Error::MalformedProperty { line: 1, .. }));
}

#[test]
fn test_parse_missing_required_property() {
    let source = ORDER.replace("ΣΧΕΔΙΟ = Σ.\n", "");
    let err = parse_str(&source).unwrap_err();
    assert!(matches!(err, Error::MissingProperty(ref key) if key == "ΣΧΕΔΙΟ"));
}
