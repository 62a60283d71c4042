//! Android `strings.xml` parser.
//!
//! Only `<string name="...">` elements that are direct children of the
//! document root are declared entries. Anything nested deeper (inside
//! `<string-array>`, `<plurals>` or arbitrary wrappers) is ignored.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::core::KeySet;

const ENTRY_TAG: &[u8] = b"string";
const NAME_ATTRIBUTE: &str = "name";

/// Parse a resource definition file and return its declared entry names.
pub fn parse_resource_file(path: &Path) -> Result<KeySet> {
    let content = fs::read(path)
        .map_err(anyhow::Error::from)
        .and_then(|bytes| decode_resource(&bytes))
        .with_context(|| format!("Failed to read resource file: {:?}", path))?;

    parse_resource_str(&content)
        .with_context(|| format!("Failed to parse resource file: {:?}", path))
}

/// Decode file bytes as UTF-8, or as UTF-16 when a byte order mark says so.
fn decode_resource(bytes: &[u8]) -> Result<String> {
    match bytes {
        [0xff, 0xfe, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xfe, 0xff, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        [0xef, 0xbb, 0xbf, rest @ ..] => Ok(String::from_utf8(rest.to_vec())?),
        _ => Ok(String::from_utf8(bytes.to_vec())?),
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> Result<String> {
    if bytes.len() % 2 != 0 {
        bail!("Truncated UTF-16 content");
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| to_unit([pair[0], pair[1]]))
        .collect();
    Ok(String::from_utf16(&units)?)
}

/// Parse resource XML from memory.
pub fn parse_resource_str(content: &str) -> Result<KeySet> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut names = KeySet::new();
    let mut depth: usize = 0;
    let mut seen_root = false;

    loop {
        let position = reader.buffer_position();
        match reader
            .read_event()
            .with_context(|| format!("Malformed XML at byte {}", position))?
        {
            Event::Start(element) => {
                check_root(depth, &mut seen_root)?;
                if depth == 1 {
                    collect_name(&element, &mut names)?;
                }
                depth += 1;
            }
            Event::Empty(element) => {
                check_root(depth, &mut seen_root)?;
                if depth == 1 {
                    collect_name(&element, &mut names)?;
                }
            }
            Event::Text(text) if depth == 0 => {
                if text.iter().any(|b| !b.is_ascii_whitespace()) {
                    bail!("Text outside the root element at byte {}", position);
                }
            }
            Event::CData(_) if depth == 0 => {
                bail!("CDATA outside the root element at byte {}", position);
            }
            Event::End(_) => {
                // Mismatched end tags are rejected by the reader itself.
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        bail!("Document has no root element");
    }
    if depth != 0 {
        bail!("Unexpected end of document: {} unclosed element(s)", depth);
    }

    Ok(names)
}

fn check_root(depth: usize, seen_root: &mut bool) -> Result<()> {
    if depth == 0 {
        if *seen_root {
            bail!("Document has more than one root element");
        }
        *seen_root = true;
    }
    Ok(())
}

fn collect_name(element: &BytesStart<'_>, names: &mut KeySet) -> Result<()> {
    if element.name().as_ref() != ENTRY_TAG {
        return Ok(());
    }

    let Some(attribute) = element.try_get_attribute(NAME_ATTRIBUTE)? else {
        return Ok(());
    };
    let name = attribute.unescape_value()?;
    if !name.is_empty() {
        names.insert(name.into_owned());
    }
    Ok(())
}
