//! Connector descriptors
//!
//! Mirth stores every connector type in the same generic
//! `<property name="..">value</property>` bag. The `DataType` property picks a
//! [`ConnectorKind`], and each kind knows which properties matter and how to
//! render them as a one-line endpoint descriptor.

pub mod kind;
pub mod lookup;

pub use kind::ConnectorKind;

use crate::config::DecoderConfig;
use crate::types::{Connector, DecoderError, Result};

/// Render the endpoint descriptor for a connector.
///
/// Fails if the connector has no `DataType` property or names a kind the
/// report does not model.
pub fn describe(connector: &Connector, config: &DecoderConfig) -> Result<String> {
    let data_type = connector.data_type().ok_or_else(|| {
        log::error!("Connector {:?} has no DataType property", connector.name);
        DecoderError::MissingDataType
    })?;

    let kind: ConnectorKind = data_type.parse().map_err(|e| {
        log::error!("Unsupported connector DataType {:?}", data_type);
        e
    })?;

    Ok(kind.describe(&connector.properties, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Property;

    fn connector(pairs: &[(&str, &str)]) -> Connector {
        Connector {
            name: "sourceConnector".to_string(),
            properties: pairs.iter().map(|(n, v)| Property::new(*n, *v)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_describe_dispatches_on_data_type() {
        let c = connector(&[("host", "x"), ("DataType", "File Reader")]);
        assert_eq!(describe(&c, &DecoderConfig::new()).unwrap(), "FILE: x");
    }

    #[test]
    fn test_describe_missing_data_type() {
        let c = connector(&[("host", "x")]);
        assert!(matches!(
            describe(&c, &DecoderConfig::new()),
            Err(DecoderError::MissingDataType)
        ));
    }

    #[test]
    fn test_describe_unknown_data_type() {
        let c = connector(&[("DataType", "Database Reader")]);
        let err = describe(&c, &DecoderConfig::new()).unwrap_err();
        assert_eq!(err.to_string(), "Database Reader not defined");
    }
}
