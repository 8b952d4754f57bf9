//! Main decoder API
//!
//! This module provides the primary interface for the decoder library.
//! The Decoder struct holds the configuration and turns channel export files
//! into parsed channels or a complete report.

use crate::config::DecoderConfig;
use crate::parser::parse_channel;
use crate::report::{Report, ReportBuilder};
use crate::types::{Channel, DecoderError, Result};
use std::path::Path;

/// The main decoder struct - entry point for all decoding operations
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with an explicit configuration
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Parse a channel export held in memory
    pub fn decode_str(&self, xml: &str) -> Result<Channel> {
        parse_channel(xml.strip_prefix('\u{feff}').unwrap_or(xml))
    }

    /// Read and parse one channel export file
    ///
    /// Errors carry the offending path.
    ///
    /// # Example
    /// ```no_run
    /// use mirth_channel_decoder::Decoder;
    /// use std::path::Path;
    ///
    /// let decoder = Decoder::new();
    /// let channel = decoder.decode_file(Path::new("ADT Inbound.xml")).unwrap();
    /// println!("{} has {} destinations", channel.name, channel.destinations.len());
    /// ```
    pub fn decode_file(&self, path: &Path) -> Result<Channel> {
        log::debug!("Decoding channel export: {:?}", path);

        let bytes = std::fs::read(path).map_err(|e| DecoderError::from(e).in_file(path))?;

        // Exports are normally UTF-8; fall back to Latin-1 for older files
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("{:?} is not UTF-8, trying Latin-1 encoding", path);
                e.into_bytes().iter().map(|&b| b as char).collect()
            }
        };

        self.decode_str(&content).map_err(|e| e.in_file(path))
    }

    /// Build the full report for a list of export files, in the given order.
    ///
    /// The first failing file aborts the whole report; nothing rendered for
    /// earlier files is returned in that case.
    ///
    /// # Example
    /// ```no_run
    /// use mirth_channel_decoder::Decoder;
    ///
    /// let report = Decoder::new()
    ///     .build_report(["exports/a.xml", "exports/b.xml"])
    ///     .unwrap();
    /// print!("{}", report.text);
    /// ```
    pub fn build_report<I, P>(&self, paths: I) -> Result<Report>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut builder = ReportBuilder::new(self.config.clone());

        for path in paths {
            let path = path.as_ref();
            let channel = self.decode_file(path)?;
            builder
                .push_channel(&channel)
                .map_err(|e| e.in_file(path))?;
            log::debug!("Added channel {:?} from {:?}", channel.name.trim(), path);
        }

        let report = builder.finish();
        log::info!(
            "Report built: {} channels ({} disabled), {} destinations",
            report.channels,
            report.disabled_channels,
            report.destinations
        );
        Ok(report)
    }
}
