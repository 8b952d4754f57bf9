//! Mirth Channel Decoder Library
//!
//! A small, stateless library that reads Mirth channel export XML files and
//! summarizes each channel as one CSV row.
//!
//! # Architecture
//!
//! - [`parser`] turns one export document into a [`Channel`]
//! - [`connectors`] renders a connector's endpoint descriptor, dispatching on
//!   its `DataType` property
//! - [`report`] assembles rows into the final CSV text
//! - [`Decoder`] ties them together for files on disk
//!
//! The library does NOT walk directories or write to stdout. Both live in the
//! application layer (mirth-channel-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use mirth_channel_decoder::{Decoder, DecoderConfig, EmailSubjectMode};
//!
//! let config = DecoderConfig::new().with_email_subject(EmailSubjectMode::Corrected);
//! let decoder = Decoder::with_config(config);
//!
//! let report = decoder
//!     .build_report(["exports/ADT Inbound.xml", "exports/Lab Results.xml"])
//!     .unwrap();
//! print!("{}", report.text);
//! ```

// Public modules
pub mod config;
pub mod connectors;
pub mod decoder;
pub mod parser;
pub mod report;
pub mod types;

// Re-export main types for convenience
pub use config::{DecoderConfig, EmailSubjectMode};
pub use connectors::ConnectorKind;
pub use decoder::Decoder;
pub use parser::parse_channel;
pub use report::{ChannelRow, Report, ReportBuilder};
pub use types::{protocol_label, Channel, Connector, DecoderError, Property, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
