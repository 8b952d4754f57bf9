//! CSV summary assembly
//!
//! One row per channel, preceded by a fixed header. Rows are rendered in full
//! before they are appended, so a failing channel never leaves a partial row
//! in the buffer.

use crate::config::DecoderConfig;
use crate::connectors;
use crate::types::{protocol_label, Channel, Result};

/// Row terminator
pub const LINE_SEPARATOR: &str = "\r\n";
/// Field delimiter
pub const DELIMITER: &str = ",";
/// Separator between the values of a multi-valued field
pub const MULTIPLE_VALUES: &str = "; ";
/// First-column marker for disabled channels
pub const DISABLED_MARKER: &str = "Disabled";

/// Header columns, kept byte-identical to the legacy exporter
pub const HEADER: [&str; 6] = [
    "Name",
    "Description",
    "Source Data Type",
    "Source Protocol : Address",
    "Destination Data Type",
    "Destination Protocol : Address",
];

/// One rendered report row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRow {
    pub disabled: String,
    pub name: String,
    pub description: String,
    pub source_protocol: String,
    pub source_descriptor: String,
    pub destination_protocols: String,
    pub destination_descriptors: String,
}

impl ChannelRow {
    /// Render every column of a channel.
    ///
    /// Destinations are described before the source, so a bad destination is
    /// the error reported when both are unsupported.
    pub fn from_channel(channel: &Channel, config: &DecoderConfig) -> Result<Self> {
        let mut descriptors = Vec::with_capacity(channel.destinations.len());
        let mut protocols = Vec::with_capacity(channel.destinations.len());
        for destination in &channel.destinations {
            descriptors.push(connectors::describe(destination, config)?);
            protocols.push(protocol_label(&destination.outbound_protocol));
        }

        Ok(Self {
            disabled: if channel.enabled {
                String::new()
            } else {
                DISABLED_MARKER.to_string()
            },
            name: channel.name.trim().to_string(),
            description: sanitize_description(&channel.description),
            source_protocol: protocol_label(&channel.source.inbound_protocol).to_string(),
            source_descriptor: connectors::describe(&channel.source, config)?,
            destination_protocols: protocols.join(MULTIPLE_VALUES),
            destination_descriptors: descriptors.join(MULTIPLE_VALUES),
        })
    }

    /// The row as a delimited line, terminator included
    pub fn to_line(&self) -> String {
        let mut line = [
            self.disabled.as_str(),
            self.name.as_str(),
            self.description.as_str(),
            self.source_protocol.as_str(),
            self.source_descriptor.as_str(),
            self.destination_protocols.as_str(),
            self.destination_descriptors.as_str(),
        ]
        .join(DELIMITER);
        line.push_str(LINE_SEPARATOR);
        line
    }
}

/// Make free text safe for a single delimited field.
///
/// Surrounding whitespace is trimmed, each line break (`\r\n`, `\n` or `\r`)
/// becomes `". "` and commas become semicolons.
pub fn sanitize_description(text: &str) -> String {
    text.trim()
        .replace("\r\n", ". ")
        .replace(['\n', '\r'], ". ")
        .replace(',', ";")
}

/// Finished report text plus a few totals for logging
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub channels: usize,
    pub disabled_channels: usize,
    pub destinations: usize,
}

/// Accumulates rows into the report buffer
#[derive(Debug)]
pub struct ReportBuilder {
    config: DecoderConfig,
    report: Report,
}

impl ReportBuilder {
    /// Start a report; the header row is written immediately
    pub fn new(config: DecoderConfig) -> Self {
        let mut text = HEADER.join(DELIMITER);
        text.push_str(LINE_SEPARATOR);
        Self {
            config,
            report: Report {
                text,
                ..Default::default()
            },
        }
    }

    /// Render a channel and append its row.
    ///
    /// On error the buffer is left exactly as it was.
    pub fn push_channel(&mut self, channel: &Channel) -> Result<()> {
        let row = ChannelRow::from_channel(channel, &self.config)?;
        self.report.text.push_str(&row.to_line());
        self.report.channels += 1;
        self.report.destinations += channel.destinations.len();
        if !channel.enabled {
            self.report.disabled_channels += 1;
        }
        Ok(())
    }

    /// Number of rows appended so far
    pub fn len(&self) -> usize {
        self.report.channels
    }

    pub fn is_empty(&self) -> bool {
        self.report.channels == 0
    }

    pub fn finish(self) -> Report {
        self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Connector, Property};

    fn connector(data_type: &str, host: &str, inbound: &str, outbound: &str) -> Connector {
        Connector {
            name: String::new(),
            properties: vec![
                Property::new("DataType", data_type),
                Property::new("host", host),
            ],
            inbound_protocol: inbound.to_string(),
            outbound_protocol: outbound.to_string(),
        }
    }

    fn channel(enabled: bool, destinations: Vec<Connector>) -> Channel {
        Channel {
            name: "  Lab Results \n".to_string(),
            description: "Line one,\r\nline two\nthree\rfour".to_string(),
            enabled,
            source: connector("File Reader", "/in", "HL7V2", "XML"),
            destinations,
        }
    }

    #[test]
    fn test_sanitize_description() {
        assert_eq!(
            sanitize_description("  a, b\r\nc\nd\re  "),
            "a; b. c. d. e"
        );
        assert_eq!(sanitize_description("\r\n\r\n"), "");
        assert_eq!(sanitize_description("x\r\n\ny"), "x. . y");
    }

    #[test]
    fn test_row_for_enabled_channel() {
        let row = ChannelRow::from_channel(&channel(true, vec![]), &DecoderConfig::new()).unwrap();
        assert_eq!(row.disabled, "");
        assert_eq!(row.name, "Lab Results");
        assert_eq!(row.description, "Line one;. line two. three. four");
        assert_eq!(row.source_protocol, "HL7 2.x");
        assert_eq!(row.source_descriptor, "FILE: /in");
        assert_eq!(row.destination_protocols, "");
        assert_eq!(row.destination_descriptors, "");
    }

    #[test]
    fn test_row_for_disabled_channel_with_destinations() {
        let destinations = vec![
            connector("HTTP Sender", "A", "XML", "HL7V2"),
            connector("HTTP Sender", "B", "XML", "XML"),
        ];
        let row = ChannelRow::from_channel(&channel(false, destinations), &DecoderConfig::new())
            .unwrap();
        assert_eq!(row.disabled, "Disabled");
        assert_eq!(row.destination_descriptors, "A; B");
        assert_eq!(row.destination_protocols, "HL7 2.x; XML");
        assert_eq!(
            row.to_line(),
            "Disabled,Lab Results,Line one;. line two. three. four,HL7 2.x,FILE: /in,HL7 2.x; XML,A; B\r\n"
        );
    }

    #[test]
    fn test_builder_header_and_totals() {
        let mut builder = ReportBuilder::new(DecoderConfig::new());
        assert!(builder.is_empty());
        builder.push_channel(&channel(true, vec![])).unwrap();
        builder
            .push_channel(&channel(false, vec![connector("Channel Writer", "", "", "")]))
            .unwrap();
        assert_eq!(builder.len(), 2);

        let report = builder.finish();
        let lines: Vec<&str> = report.text.split_terminator("\r\n").collect();
        assert_eq!(
            lines[0],
            "Name,Description,Source Data Type,Source Protocol : Address,Destination Data Type,Destination Protocol : Address"
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with(",,Channel Writer"));
        assert_eq!(report.channels, 2);
        assert_eq!(report.disabled_channels, 1);
        assert_eq!(report.destinations, 1);
    }

    #[test]
    fn test_failed_channel_leaves_buffer_untouched() {
        let mut builder = ReportBuilder::new(DecoderConfig::new());
        builder.push_channel(&channel(true, vec![])).unwrap();
        let before = builder.report.text.clone();

        let bad = channel(true, vec![connector("JMS Writer", "q", "", "")]);
        assert!(builder.push_channel(&bad).is_err());
        assert_eq!(builder.report.text, before);
        assert_eq!(builder.len(), 1);
    }
}
