//! Core types for the Mirth channel decoder library
//!
//! This module defines the records produced by parsing one exported channel
//! document. Records are immutable after parsing and carry no rendering logic
//! of their own beyond small display helpers.

use std::path::PathBuf;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Name of the property that selects a connector's formatting strategy
pub const DATA_TYPE_PROPERTY: &str = "DataType";

/// One `<property name="..">value</property>` entry of a connector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Property {
    /// Value of the `name` attribute
    pub name: String,
    /// Raw inner content, markup and entity references kept verbatim
    pub value: String,
}

impl Property {
    /// Create a property from a name/value pair
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A source or destination connector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Connector {
    /// Connector name (not rendered in the report)
    pub name: String,
    /// Properties in document order
    pub properties: Vec<Property>,
    /// `transformer/inboundProtocol`, rendered for source connectors
    pub inbound_protocol: String,
    /// `transformer/outboundProtocol`, rendered for destination connectors
    pub outbound_protocol: String,
}

impl Connector {
    /// Value of the first `DataType` property, if any
    pub fn data_type(&self) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == DATA_TYPE_PROPERTY)
            .map(|p| p.value.as_str())
    }
}

/// One exported channel document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub source: Connector,
    pub destinations: Vec<Connector>,
}

/// Map a raw transformer protocol to its report label.
///
/// `HL7V2` is shown as `HL7 2.x`; everything else passes through unchanged.
pub fn protocol_label(protocol: &str) -> &str {
    match protocol {
        "HL7V2" => "HL7 2.x",
        other => other,
    }
}

/// Errors that can occur while decoding channel exports
#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Expected root element <channel>, found <{0}>")]
    UnexpectedRoot(String),

    #[error("Missing required element <{0}>")]
    MissingElement(&'static str),

    #[error("Unexpected end of document inside <{0}>")]
    UnexpectedEof(&'static str),

    #[error("Invalid <enabled> value: {0:?}")]
    InvalidEnabled(String),

    #[error("Connector has no DataType property")]
    MissingDataType,

    #[error("{0} not defined")]
    UnknownDataType(String),

    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<DecoderError>,
    },
}

impl DecoderError {
    /// Attach the path of the file being decoded
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            already @ DecoderError::File { .. } => already,
            other => DecoderError::File {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_label() {
        assert_eq!(protocol_label("HL7V2"), "HL7 2.x");
        assert_eq!(protocol_label("XML"), "XML");
        assert_eq!(protocol_label("hl7v2"), "hl7v2");
        assert_eq!(protocol_label(""), "");
    }

    #[test]
    fn test_data_type_first_match() {
        let connector = Connector {
            properties: vec![
                Property::new("host", "a"),
                Property::new("DataType", "File Reader"),
                Property::new("DataType", "File Writer"),
            ],
            ..Default::default()
        };
        assert_eq!(connector.data_type(), Some("File Reader"));
        assert_eq!(Connector::default().data_type(), None);
    }

    #[test]
    fn test_error_in_file_wraps_once() {
        let err = DecoderError::MissingDataType
            .in_file("a.xml")
            .in_file("b.xml");
        assert_eq!(err.to_string(), "a.xml: Connector has no DataType property");
    }
}
