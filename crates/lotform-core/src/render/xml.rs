//! Nested-document XML writer
//!
//! Renders a `serde_json::Value` tree as indented XML. Mapping keys become
//! element names, arrays repeat their parent element name per item, scalars
//! become text content, and nulls and empty mappings become empty elements.
//! Text content is escaped by the writer.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde_json::Value;

use crate::errors::{LotformError, Result};

/// Render a nested document as pretty-printed XML
///
/// The top level must be a mapping with exactly one entry, which becomes
/// the document's root element.
///
/// # Errors
///
/// Returns `Render` when the top level is not a single-entry mapping or
/// when the writer fails.
pub fn render_document(document: &Value) -> Result<String> {
    let (root_name, root_value) = match document {
        Value::Object(entries) if entries.len() == 1 => {
            let (name, value) = entries.iter().next().ok_or_else(|| LotformError::Render {
                message: "document root mapping is empty".to_string(),
            })?;
            (name.as_str(), value)
        }
        _ => {
            return Err(LotformError::Render {
                message: "document root must be a mapping with exactly one entry".to_string(),
            });
        }
    };

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_element(&mut writer, root_name, root_value)?;

    String::from_utf8(writer.into_inner()).map_err(|err| LotformError::Render {
        message: err.to_string(),
    })
}

fn write_element(writer: &mut Writer<Vec<u8>>, name: &str, value: &Value) -> Result<()> {
    match value {
        // Arrays repeat the element name once per item
        Value::Array(items) => {
            for item in items {
                write_element(writer, name, item)?;
            }
            Ok(())
        }
        Value::Object(entries) if entries.is_empty() => write_empty(writer, name),
        Value::Object(entries) => {
            writer
                .write_event(Event::Start(BytesStart::new(name)))
                .map_err(render_error)?;
            for (key, child) in entries {
                write_element(writer, key, child)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(render_error)?;
            Ok(())
        }
        Value::Null => write_empty(writer, name),
        Value::String(text) if text.is_empty() => write_empty(writer, name),
        Value::String(text) => write_text(writer, name, text),
        Value::Number(number) => write_text(writer, name, &number.to_string()),
        Value::Bool(flag) => write_text(writer, name, &flag.to_string()),
    }
}

fn write_text(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(render_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(render_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(render_error)?;
    Ok(())
}

fn write_empty(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<()> {
    writer
        .write_event(Event::Empty(BytesStart::new(name)))
        .map_err(render_error)?;
    Ok(())
}

fn render_error(err: impl std::fmt::Display) -> LotformError {
    LotformError::Render {
        message: err.to_string(),
    }
}
