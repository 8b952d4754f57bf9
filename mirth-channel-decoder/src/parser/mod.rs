//! Channel export parser
//!
//! Streams one exported `<channel>` document with `quick-xml` and collects the
//! handful of elements the report needs. Everything else in the export
//! (filters, transformer steps, channel properties, ...) is skipped unread.
//!
//! Only direct children are matched: a `<name>` nested inside some other
//! element never overrides the channel name.

mod connector;

use crate::types::{Channel, Connector, DecoderError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

pub(crate) type XmlReader<'i> = Reader<&'i [u8]>;

/// Parse one channel export document
pub fn parse_channel(xml: &str) -> Result<Channel> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                expect_root(&e)?;
                return read_channel(&mut reader);
            }
            Event::Empty(e) => {
                expect_root(&e)?;
                return ChannelFields::default().finish();
            }
            Event::Eof => return Err(DecoderError::MissingElement("channel")),
            _ => {}
        }
    }
}

fn expect_root(e: &BytesStart<'_>) -> Result<()> {
    if e.local_name().as_ref() == b"channel" {
        Ok(())
    } else {
        Err(DecoderError::UnexpectedRoot(
            String::from_utf8_lossy(e.name().as_ref()).into_owned(),
        ))
    }
}

#[derive(Default)]
struct ChannelFields {
    name: Option<String>,
    description: Option<String>,
    enabled: Option<bool>,
    source: Option<Connector>,
    destinations: Vec<Connector>,
}

impl ChannelFields {
    fn finish(self) -> Result<Channel> {
        Ok(Channel {
            name: self.name.ok_or(DecoderError::MissingElement("name"))?,
            description: self
                .description
                .ok_or(DecoderError::MissingElement("description"))?,
            enabled: self.enabled.ok_or(DecoderError::MissingElement("enabled"))?,
            source: self
                .source
                .ok_or(DecoderError::MissingElement("sourceConnector"))?,
            destinations: self.destinations,
        })
    }
}

fn read_channel(reader: &mut XmlReader<'_>) -> Result<Channel> {
    let mut fields = ChannelFields::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"name" => fields.name = Some(read_chardata(reader, "name")?),
                b"description" => {
                    fields.description = Some(read_chardata(reader, "description")?)
                }
                b"enabled" => {
                    let raw = read_chardata(reader, "enabled")?;
                    fields.enabled = Some(parse_enabled(&raw)?);
                }
                b"sourceConnector" => {
                    fields.source = Some(connector::read_connector(reader, "sourceConnector")?)
                }
                b"destinationConnectors" => {
                    connector::read_destinations(reader, &mut fields.destinations)?
                }
                _ => skip(reader, &e)?,
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"name" => fields.name = Some(String::new()),
                b"description" => fields.description = Some(String::new()),
                b"enabled" => fields.enabled = Some(false),
                b"sourceConnector" => fields.source = Some(Connector::default()),
                _ => {}
            },
            Event::End(_) => return fields.finish(),
            Event::Eof => return Err(DecoderError::UnexpectedEof("channel")),
            _ => {}
        }
    }
}

/// Parse an `<enabled>` value.
///
/// Accepts the usual boolean spellings (`true`, `True`, `TRUE`, `t`, `1`, ...).
/// An empty element counts as disabled.
fn parse_enabled(raw: &str) -> Result<bool> {
    match raw.trim() {
        "" => Ok(false),
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(DecoderError::InvalidEnabled(other.to_string())),
    }
}

/// Collect the entity-decoded character data directly inside the current
/// element, consuming its end tag. Nested elements are skipped.
pub(crate) fn read_chardata(reader: &mut XmlReader<'_>, element: &'static str) -> Result<String> {
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Text(t) => text.push_str(&t.unescape().map_err(quick_xml::Error::from)?),
            Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
            Event::Start(e) => skip(reader, &e)?,
            Event::End(_) => return Ok(text),
            Event::Eof => return Err(DecoderError::UnexpectedEof(element)),
            _ => {}
        }
    }
}

/// Consume an element we don't care about, including its end tag
pub(crate) fn skip(reader: &mut XmlReader<'_>, start: &BytesStart<'_>) -> Result<()> {
    reader.read_to_end(start.name())?;
    Ok(())
}
