//! Connector kinds keyed by the `DataType` property

use super::lookup::{first, first_non_empty, scan, scan_all};
use crate::config::{DecoderConfig, EmailSubjectMode};
use crate::types::{DecoderError, Property};
use std::fmt;
use std::str::FromStr;

/// Every connector kind the report knows how to describe.
///
/// Any other `DataType` value is rejected so unmodeled connector types are
/// noticed instead of silently producing blank columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorKind {
    FileReader,
    FileWriter,
    ChannelReader,
    ChannelWriter,
    DatabaseWriter,
    JavaScriptReader,
    JavaScriptWriter,
    LlpListener,
    LlpSender,
    SmtpSender,
    HttpSender,
    HttpListener,
    EmailSender,
    WebServiceSender,
    DocumentWriter,
}

impl ConnectorKind {
    pub const ALL: [ConnectorKind; 15] = [
        ConnectorKind::FileReader,
        ConnectorKind::FileWriter,
        ConnectorKind::ChannelReader,
        ConnectorKind::ChannelWriter,
        ConnectorKind::DatabaseWriter,
        ConnectorKind::JavaScriptReader,
        ConnectorKind::JavaScriptWriter,
        ConnectorKind::LlpListener,
        ConnectorKind::LlpSender,
        ConnectorKind::SmtpSender,
        ConnectorKind::HttpSender,
        ConnectorKind::HttpListener,
        ConnectorKind::EmailSender,
        ConnectorKind::WebServiceSender,
        ConnectorKind::DocumentWriter,
    ];

    /// The `DataType` value that selects this kind
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectorKind::FileReader => "File Reader",
            ConnectorKind::FileWriter => "File Writer",
            ConnectorKind::ChannelReader => "Channel Reader",
            ConnectorKind::ChannelWriter => "Channel Writer",
            ConnectorKind::DatabaseWriter => "Database Writer",
            ConnectorKind::JavaScriptReader => "JavaScript Reader",
            ConnectorKind::JavaScriptWriter => "JavaScript Writer",
            ConnectorKind::LlpListener => "LLP Listener",
            ConnectorKind::LlpSender => "LLP Sender",
            ConnectorKind::SmtpSender => "SMTP Sender",
            ConnectorKind::HttpSender => "HTTP Sender",
            ConnectorKind::HttpListener => "HTTP Listener",
            ConnectorKind::EmailSender => "Email Sender",
            ConnectorKind::WebServiceSender => "Web Service Sender",
            ConnectorKind::DocumentWriter => "Document Writer",
        }
    }

    /// Render the one-line endpoint descriptor for this kind
    pub fn describe(self, properties: &[Property], config: &DecoderConfig) -> String {
        match self {
            ConnectorKind::FileReader => {
                format!("FILE: {}", first(properties, "host").unwrap_or_default())
            }
            ConnectorKind::FileWriter => {
                format!("FTP: {}", first(properties, "host").unwrap_or_default())
            }
            ConnectorKind::ChannelReader | ConnectorKind::ChannelWriter => self.as_str().to_string(),
            ConnectorKind::DatabaseWriter => first_non_empty(properties, "URL")
                .unwrap_or("DB:")
                .to_string(),
            ConnectorKind::JavaScriptReader | ConnectorKind::JavaScriptWriter => {
                format!("JS: {}", first(properties, "host").unwrap_or_default())
            }
            ConnectorKind::LlpListener | ConnectorKind::LlpSender => {
                let [host, port, template] = scan_all(properties, ["host", "port", "template"]);
                format!("LLP: {host}:{port}/{template}")
            }
            ConnectorKind::SmtpSender => {
                let [host, port] = scan_all(properties, ["smtpHost", "smtpPort"]);
                format!("SMTP: {host}:{port}")
            }
            ConnectorKind::HttpSender => first(properties, "host").unwrap_or("HTTP:").to_string(),
            ConnectorKind::HttpListener => {
                let [host, port] = scan_all(properties, ["host", "port"]);
                format!("HTTP://{host}:{port}")
            }
            ConnectorKind::EmailSender => email_sender(properties, config.email_subject),
            ConnectorKind::WebServiceSender => format!(
                "SOAP: {}",
                first(properties, "dispatcherWsdlUrl").unwrap_or_default()
            ),
            ConnectorKind::DocumentWriter => {
                let [host, pattern, doc_type] =
                    scan_all(properties, ["host", "outputPattern", "documentType"]);
                format!("{}: {host}/{pattern}", doc_type.to_uppercase())
            }
        }
    }
}

fn email_sender(properties: &[Property], mode: EmailSubjectMode) -> String {
    const HOST: usize = 0;
    const PORT: usize = 1;
    const FROM: usize = 2;
    const SUBJECT: usize = 3;

    let [host, port, from, subject] = match mode {
        EmailSubjectMode::Legacy => scan(
            properties,
            &[
                ("hostname", HOST),
                ("smtpPort", PORT),
                ("fromAddress", FROM),
                ("subject", PORT),
            ],
            &[HOST, PORT],
        ),
        EmailSubjectMode::Corrected => {
            scan_all(properties, ["hostname", "smtpPort", "fromAddress", "subject"])
        }
    };
    format!("SMTP: {host}:{port}/{from}>{subject}")
}

impl FromStr for ConnectorKind {
    type Err = DecoderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConnectorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DecoderError::UnknownDataType(s.to_string()))
    }
}

impl fmt::Display for ConnectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
