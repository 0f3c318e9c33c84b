//! vCard 3.0 subset reader and writer.
//!
//! The reader is lenient: it only looks at the property name of each content
//! line and at the text after the first `:`, so parameters, unknown
//! properties and garbage lines from third-party writers are tolerated.
//! Only `N`, `TEL` and `EMAIL` end up in a [`Contact`].

use super::ContactMap;
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, trace};

/// Country code written in front of every stored phone number.
pub const COUNTRY_CODE: &str = "+54";

/// Number of trailing digits kept from a `TEL` value.
const PHONE_DIGITS: usize = 10;

/// Render one contact as a vCard block, without a trailing newline.
///
/// Property order and names are fixed so other readers (and QR scanners)
/// see the same bytes every time.
pub fn serialize(contact: &Contact) -> String {
    format!(
        "BEGIN:VCARD\n\
         VERSION:3.0\n\
         FN;CHARSET=UTF-8:{first} {last}\n\
         N;CHARSET=UTF-8:{last};{first};;;\n\
         TEL;CELL;VOICE:{COUNTRY_CODE}{phone}\n\
         EMAIL;CHARSET=UTF-8;type=INTERNET:{email}\n\
         END:VCARD",
        first = contact.first_name,
        last = contact.last_name,
        phone = contact.phone,
        email = contact.email,
    )
}

/// Render several contacts, one block per contact, each followed by `\n`.
pub fn serialize_all<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> String {
    let mut out = String::new();
    for contact in contacts {
        out.push_str(&serialize(contact));
        out.push('\n');
    }
    out
}

/// Parse every complete record in `input`.
///
/// A record is every property line up to an `END` line; a `BEGIN` line is
/// optional and only discards a record left open before it. The result is
/// keyed by display name; a later record with the same name replaces an
/// earlier one. A record that never reaches `END` is dropped.
pub fn parse(input: &str) -> ContactMap {
    let mut parser = VcardParser::default();
    let mut contacts = ContactMap::new();
    for line in strip_bom(input).lines() {
        if let Some(contact) = parser.feed(line) {
            contacts.insert(contact.display_name(), contact);
        }
    }
    parser.finish();
    contacts
}

/// Parse the first complete record in `input`, if any. Later records are
/// not looked at, even when they share its display name.
pub fn parse_one(input: &str) -> Option<Contact> {
    let mut parser = VcardParser::default();
    strip_bom(input).lines().find_map(|line| parser.feed(line))
}

/// Read and parse a vCard file.
///
/// A path that does not exist yields an empty map rather than an error;
/// any other read failure is reported.
pub fn parse_file(path: &Path) -> StoreResult<ContactMap> {
    if !path.exists() {
        debug!(path = %path.display(), "vCard file not found, nothing to import");
        return Ok(ContactMap::new());
    }

    let input = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    let contacts = parse(&input);
    debug!(path = %path.display(), count = contacts.len(), "Parsed vCard file");
    Ok(contacts)
}

fn strip_bom(input: &str) -> &str {
    input.strip_prefix('\u{feff}').unwrap_or(input)
}

/// A lexed content line: the property name and the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ContentLine<'a> {
    name: &'a str,
    value: &'a str,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split a line into property name and value.
///
/// The name is the leading run of word characters and must be directly
/// followed by `:` or `;`. The value is everything after the first `:` on
/// the line, or empty when there is none.
fn lex_line(line: &str) -> Option<ContentLine<'_>> {
    let name_end = line.find(|c: char| !is_word_char(c))?;
    if name_end == 0 || !matches!(line[name_end..].chars().next(), Some(':' | ';')) {
        return None;
    }

    let value = line.split_once(':').map_or("", |(_, value)| value);
    Some(ContentLine {
        name: &line[..name_end],
        value,
    })
}

/// Reduce a `TEL` value to its trailing ten digits.
///
/// A `;` followed by anything cuts the value there, then `+`, `-` and
/// whitespace are dropped. Returns an empty string when what remains does
/// not end in ten ASCII digits.
// NOTE: keeping the trailing digits (not the leading ones) silently drops
// extra leading digits such as a country code; confirm with the product
// owner before changing it.
fn extract_phone(value: &str) -> String {
    let value = match value.find(';') {
        Some(i) if i + 1 < value.len() => &value[..i],
        _ => value,
    };

    let cleaned: Vec<char> = value
        .chars()
        .filter(|c| !matches!(c, '+' | '-') && !c.is_whitespace())
        .collect();

    if cleaned.len() < PHONE_DIGITS {
        return String::new();
    }

    let tail = &cleaned[cleaned.len() - PHONE_DIGITS..];
    if tail.iter().all(char::is_ascii_digit) {
        tail.iter().collect()
    } else {
        String::new()
    }
}

/// Take `last;first` from the start of an `N` value.
///
/// Both components must be plain word runs; anything else yields two empty
/// names.
fn extract_name(value: &str) -> (String, String) {
    let last_end = value.find(|c: char| !is_word_char(c)).unwrap_or(value.len());
    let Some(rest) = value[last_end..].strip_prefix(';') else {
        return (String::new(), String::new());
    };

    let first_end = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
    (value[..last_end].to_string(), rest[..first_end].to_string())
}

/// Properties collected for the record being read.
#[derive(Debug, Default)]
struct CardBuilder {
    properties: HashMap<String, String>,
}

impl CardBuilder {
    /// Store a property; a repeated property keeps its last value.
    fn record(&mut self, line: ContentLine<'_>) {
        let value = match line.name {
            "TEL" => extract_phone(line.value),
            "N" => {
                let (last, first) = extract_name(line.value);
                format!("{last};{first}")
            }
            _ => line.value.to_string(),
        };
        self.properties.insert(line.name.to_string(), value);
    }

    fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn build(mut self) -> Contact {
        let (last_name, first_name) = self
            .properties
            .remove("N")
            .and_then(|n| n.split_once(';').map(|(l, f)| (l.to_string(), f.to_string())))
            .unwrap_or_default();

        Contact {
            last_name,
            first_name,
            phone: self.properties.remove("TEL").unwrap_or_default(),
            email: self.properties.remove("EMAIL").unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default)]
enum ParserState {
    /// No record open: nothing read since the last `END`.
    #[default]
    Idle,
    /// Collecting properties until `END`.
    InCard(CardBuilder),
}

/// Line-oriented vCard reader.
#[derive(Debug, Default)]
struct VcardParser {
    state: ParserState,
}

impl VcardParser {
    /// Consume one line. Returns the contact completed by an `END` line.
    fn feed(&mut self, line: &str) -> Option<Contact> {
        let Some(content) = lex_line(line) else {
            trace!(line, "Skipping unrecognized vCard line");
            return None;
        };

        let is_begin = content.name.eq_ignore_ascii_case("BEGIN");
        let is_end = content.name.eq_ignore_ascii_case("END");

        let (state, contact) = match std::mem::take(&mut self.state) {
            ParserState::Idle if is_end => {
                trace!("END without an open record");
                (ParserState::Idle, None)
            }
            ParserState::InCard(builder) if is_end => (ParserState::Idle, Some(builder.build())),
            ParserState::InCard(builder) if is_begin => {
                if !builder.is_empty() {
                    debug!("Record restarted before END, dropping partial record");
                }
                (ParserState::InCard(CardBuilder::default()), None)
            }
            ParserState::Idle if is_begin => (ParserState::InCard(CardBuilder::default()), None),
            ParserState::Idle => {
                let mut builder = CardBuilder::default();
                builder.record(content);
                (ParserState::InCard(builder), None)
            }
            ParserState::InCard(mut builder) => {
                builder.record(content);
                (ParserState::InCard(builder), None)
            }
        };

        self.state = state;
        contact
    }

    fn finish(self) {
        if matches!(self.state, ParserState::InCard(_)) {
            debug!("Input ended inside a record, dropping it");
        }
    }
}
