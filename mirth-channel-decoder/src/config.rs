//! Decoder configuration types
//!
//! This module defines the small amount of configuration the decoder library
//! accepts. Input discovery and output handling belong to the application layer.

use serde::{Deserialize, Serialize};

/// Configuration for the decoder library
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// How the Email Sender descriptor treats the `subject` property
    #[serde(default)]
    pub email_subject: EmailSubjectMode,
}

/// Rendering mode for Email Sender connectors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailSubjectMode {
    /// Byte-compatible with the legacy exporter: `subject` lands in the port
    /// slot and the subject slot stays empty.
    #[default]
    Legacy,
    /// `subject` is rendered in its own slot after the sender address.
    Corrected,
}

impl DecoderConfig {
    /// Create a new decoder configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: choose the Email Sender rendering mode
    pub fn with_email_subject(mut self, mode: EmailSubjectMode) -> Self {
        self.email_subject = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_legacy() {
        assert_eq!(DecoderConfig::new().email_subject, EmailSubjectMode::Legacy);
    }

    #[test]
    fn test_decoder_config_builder() {
        let config = DecoderConfig::new().with_email_subject(EmailSubjectMode::Corrected);
        assert_eq!(config.email_subject, EmailSubjectMode::Corrected);
    }
}
