//! HTML rendering for parsed documents.
//!
//! Each top-level part renders to its own `<section>`, independently of the
//! others, so parts can be rendered concurrently. The results are joined in
//! part order: the first part starts the output and every later part is
//! appended after it.

use std::borrow::Cow;
use std::fmt::Write;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{
    keys, Block, Document, Header, Line, LineKind, Orientation, Part, PartChild, PartKind,
    RecipientList, References, Table,
};

use super::RenderOptions;

/// One rendered top-level part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPart {
    /// Part name
    pub name: String,
    /// Part kind
    pub kind: PartKind,
    /// Page orientation
    pub orientation: Orientation,
    /// HTML fragment
    pub html: String,
}

/// Render every top-level part to an HTML fragment, in part order.
pub fn render_parts(doc: &Document, options: &RenderOptions) -> Result<Vec<RenderedPart>> {
    let renderer = HtmlRenderer::new(doc, options);
    let render = |part: &Part| -> Result<RenderedPart> {
        Ok(RenderedPart {
            name: part.name.clone(),
            kind: part.kind,
            orientation: part.orientation,
            html: renderer.render_part(part)?,
        })
    };

    if options.parallel {
        doc.parts.par_iter().map(render).collect()
    } else {
        doc.parts.iter().map(render).collect()
    }
}

/// Convert a document to a complete HTML page.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let parts = render_parts(doc, options)?;
    log::debug!("Rendered {} parts", parts.len());

    let mut output = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    if let Some(title) = doc.properties.get(keys::SUBJECT).and_then(|v| v.as_scalar()) {
        push(&mut output, format_args!("<title>{}</title>\n", escape(title)))?;
    }
    output.push_str("</head>\n<body>\n");
    for part in &parts {
        output.push_str(&part.html);
    }
    output.push_str("</body>\n</html>\n");
    Ok(output)
}

/// Renders parts of one document.
pub struct HtmlRenderer<'a> {
    doc: &'a Document,
    options: &'a RenderOptions,
}

impl<'a> HtmlRenderer<'a> {
    /// Create a renderer for a document.
    pub fn new(doc: &'a Document, options: &'a RenderOptions) -> Self {
        Self { doc, options }
    }

    /// Render one part, including any attachments nested under it.
    pub fn render_part(&self, part: &Part) -> Result<String> {
        let mut out = String::new();
        self.write_part(&mut out, part)?;
        Ok(out)
    }

    fn write_part(&self, out: &mut String, part: &Part) -> Result<()> {
        push(
            out,
            format_args!(
                "<section class=\"part {}\" data-name=\"{}\" data-orientation=\"{}\">\n",
                part.kind,
                escape(&part.name),
                orientation_name(part.orientation)
            ),
        )?;

        if part.kind == PartKind::Body {
            if let Some(header) = &self.doc.header {
                self.write_header(out, header)?;
            }
        } else {
            push(
                out,
                format_args!(
                    "<h1><span class=\"part-name\">{}</span> {}</h1>\n",
                    escape(&part.name),
                    escape(&part.description_normalized)
                ),
            )?;
        }

        for block in &part.blocks {
            self.write_block(out, block)?;
        }

        if self.options.include_children {
            self.write_children(out, &part.children)?;
        }
        out.push_str("</section>\n");

        for nested in part.nested_parts() {
            self.write_part(out, nested)?;
        }
        Ok(())
    }

    fn write_header(&self, out: &mut String, header: &Header) -> Result<()> {
        push(
            out,
            format_args!(
                "<header class=\"classification\" data-code=\"{}\">{}</header>\n",
                header.classification_code.as_str(),
                escape(&header.classification)
            ),
        )?;
        if header.is_copy {
            out.push_str("<div class=\"copy\"></div>\n");
        }

        self.write_recipients(out, "to", &header.to)?;
        self.write_recipients(out, "info", &header.info)?;

        match &header.references {
            References::Single(reference) => push(
                out,
                format_args!("<div class=\"references\">{}</div>\n", escape(reference)),
            )?,
            References::Multiple(references) => {
                out.push_str("<ol class=\"references\">\n");
                for reference in references {
                    push(
                        out,
                        format_args!(
                            "<li><span class=\"label\">{}.</span> {}</li>\n",
                            reference.label,
                            escape(&reference.value)
                        ),
                    )?;
                }
                out.push_str("</ol>\n");
            }
        }
        Ok(())
    }

    fn write_recipients(&self, out: &mut String, class: &str, list: &RecipientList) -> Result<()> {
        match list {
            RecipientList::Inline(value) => {
                push(out, format_args!("<ul class=\"{}\">\n", class))?;
                for name in value.values() {
                    push(out, format_args!("<li>{}</li>\n", escape(name)))?;
                }
                out.push_str("</ul>\n");
            }
            RecipientList::Numbered(rows) => {
                push(out, format_args!("<table class=\"recipients {}\">\n", class))?;
                for row in rows {
                    push(
                        out,
                        format_args!(
                            "<tr><td>{}.</td><td>{}</td></tr>\n",
                            row.number,
                            escape(&row.name)
                        ),
                    )?;
                }
                out.push_str("</table>\n");
            }
        }
        Ok(())
    }

    fn write_block(&self, out: &mut String, block: &Block) -> Result<()> {
        match block {
            Block::Line(line) => self.write_line(out, line),
            Block::CenteredLine {
                content,
                no_line_break,
            } => {
                push(
                    out,
                    format_args!(
                        "<div class=\"center-line{}\">{}</div>\n",
                        no_break_class(*no_line_break),
                        content
                    ),
                )
            }
            Block::Separator => {
                out.push_str("<div class=\"dot-line\"></div>\n");
                Ok(())
            }
            Block::Image { path } => {
                push(out, format_args!("<img src=\"{}\">\n", escape(path)))
            }
            Block::PageBreak => {
                out.push_str("<div class=\"page-break\"></div>\n");
                Ok(())
            }
            Block::Table(table) => self.write_table(out, table),
        }
    }

    fn write_line(&self, out: &mut String, line: &Line) -> Result<()> {
        let class = match line.kind {
            LineKind::Indexed => "line",
            LineKind::Continuation => "line continuation",
            LineKind::Plain => "plain",
        };
        let index = line
            .index_token()
            .unwrap_or(self.options.index_placeholder.as_str());
        push(
            out,
            format_args!(
                "<div class=\"{} indent-{}{}\"><span class=\"index\">{}</span><span class=\"content\">{}</span></div>\n",
                class,
                line.indent,
                no_break_class(line.no_line_break),
                index,
                line.content
            ),
        )
    }

    fn write_table(&self, out: &mut String, table: &Table) -> Result<()> {
        push(out, format_args!("<table data-id=\"{}\"", table.id))?;
        if table.has_merged_cells() {
            out.push_str(" class=\"merged\"");
        }
        for (key, value) in &table.attributes {
            push(
                out,
                format_args!(" data-{}=\"{}\"", escape(key), escape(value)),
            )?;
        }
        out.push_str(">\n");

        if let Some(name) = &table.name {
            push(out, format_args!("<caption>{}</caption>\n", escape(name)))?;
        }
        for row in &table.rows {
            out.push_str("<tr>");
            for cell in row {
                out.push_str("<td");
                if cell.is_merged() {
                    if cell.colspan > 1 {
                        push(out, format_args!(" colspan=\"{}\"", cell.colspan))?;
                    }
                    if cell.rowspan > 1 {
                        push(out, format_args!(" rowspan=\"{}\"", cell.rowspan))?;
                    }
                }
                push(
                    out,
                    format_args!(
                        " style=\"text-align: {}\">{}</td>",
                        cell.alignment.as_css(),
                        cell.content
                    ),
                )?;
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</table>\n");
        Ok(())
    }

    fn write_children(&self, out: &mut String, children: &[PartChild]) -> Result<()> {
        if children.is_empty() {
            return Ok(());
        }
        out.push_str("<ul class=\"children\">\n");
        for child in children {
            push(
                out,
                format_args!(
                    "<li><span class=\"part-name\">{}</span> {}</li>\n",
                    escape(child.name()),
                    escape(child.description())
                ),
            )?;
        }
        out.push_str("</ul>\n");
        Ok(())
    }
}

fn push(out: &mut String, args: std::fmt::Arguments<'_>) -> Result<()> {
    out.write_fmt(args)
        .map_err(|e| Error::Render(format!("HTML formatting error: {}", e)))
}

fn orientation_name(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Portrait => "portrait",
        Orientation::Landscape => "landscape",
    }
}

fn no_break_class(no_line_break: bool) -> &'static str {
    if no_line_break {
        " nonl"
    } else {
        ""
    }
}

/// Escape text for HTML element content and attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}
