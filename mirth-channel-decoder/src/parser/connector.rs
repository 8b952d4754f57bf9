//! Connector elements: `<sourceConnector>` and `<destinationConnectors>/<connector>`

use super::{read_chardata, skip, XmlReader};
use crate::types::{Connector, DecoderError, Property, Result};
use quick_xml::events::{BytesStart, Event};

/// Read the body of a connector element, consuming its end tag
pub(super) fn read_connector(
    reader: &mut XmlReader<'_>,
    element: &'static str,
) -> Result<Connector> {
    let mut connector = Connector::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"name" => connector.name = read_chardata(reader, "name")?,
                b"properties" => read_properties(reader, &mut connector.properties)?,
                b"transformer" => read_transformer(reader, &mut connector)?,
                _ => skip(reader, &e)?,
            },
            Event::Empty(e) if e.local_name().as_ref() == b"name" => connector.name.clear(),
            Event::End(_) => return Ok(connector),
            Event::Eof => return Err(DecoderError::UnexpectedEof(element)),
            _ => {}
        }
    }
}

/// Append every `<connector>` child of `<destinationConnectors>`
pub(super) fn read_destinations(
    reader: &mut XmlReader<'_>,
    destinations: &mut Vec<Connector>,
) -> Result<()> {
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"connector" => destinations.push(read_connector(reader, "connector")?),
                _ => skip(reader, &e)?,
            },
            Event::Empty(e) if e.local_name().as_ref() == b"connector" => {
                destinations.push(Connector::default())
            }
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(DecoderError::UnexpectedEof("destinationConnectors")),
            _ => {}
        }
    }
}

fn read_properties(reader: &mut XmlReader<'_>, properties: &mut Vec<Property>) -> Result<()> {
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"property" => {
                let name = name_attribute(&e)?;
                let value = reader.read_text(e.name())?.into_owned();
                log::trace!("property {:?} = {:?}", name, value);
                properties.push(Property { name, value });
            }
            Event::Empty(e) if e.local_name().as_ref() == b"property" => {
                properties.push(Property {
                    name: name_attribute(&e)?,
                    value: String::new(),
                });
            }
            Event::Start(e) => skip(reader, &e)?,
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(DecoderError::UnexpectedEof("properties")),
            _ => {}
        }
    }
}

fn read_transformer(reader: &mut XmlReader<'_>, connector: &mut Connector) -> Result<()> {
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"inboundProtocol" => {
                    connector.inbound_protocol = read_chardata(reader, "inboundProtocol")?
                }
                b"outboundProtocol" => {
                    connector.outbound_protocol = read_chardata(reader, "outboundProtocol")?
                }
                _ => skip(reader, &e)?,
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"inboundProtocol" => connector.inbound_protocol.clear(),
                b"outboundProtocol" => connector.outbound_protocol.clear(),
                _ => {}
            },
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(DecoderError::UnexpectedEof("transformer")),
            _ => {}
        }
    }
}

/// Unescaped `name` attribute, empty when absent
fn name_attribute(e: &BytesStart<'_>) -> Result<String> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.local_name().as_ref() == b"name" {
            let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
            return Ok(value.into_owned());
        }
    }
    Ok(String::new())
}
