//! Wire protocol and signing metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Wire protocol a service speaks.
///
/// The set is closed: any other protocol name is rejected when the model is
/// loaded, so generators can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProtocolKind {
    /// JSON-RPC style protocol.
    Json,
    /// RESTful JSON protocol.
    RestJson,
    /// CBOR encoding of the JSON protocol.
    Cbor,
    /// Ion encoding of the JSON protocol.
    Ion,
    /// Query-string requests with XML responses.
    Query,
    /// RESTful XML protocol.
    RestXml,
    /// EC2 dialect of the query protocol.
    Ec2,
    /// Services fronted by API Gateway.
    ApiGateway,
}

impl ProtocolKind {
    /// Every supported protocol, in declaration order.
    pub const ALL: [ProtocolKind; 8] = [
        ProtocolKind::Json,
        ProtocolKind::RestJson,
        ProtocolKind::Cbor,
        ProtocolKind::Ion,
        ProtocolKind::Query,
        ProtocolKind::RestXml,
        ProtocolKind::Ec2,
        ProtocolKind::ApiGateway,
    ];

    /// Name used in model documents.
    pub fn wire_name(&self) -> &'static str {
        match self {
            ProtocolKind::Json => "json",
            ProtocolKind::RestJson => "rest-json",
            ProtocolKind::Cbor => "cbor",
            ProtocolKind::Ion => "ion",
            ProtocolKind::Query => "query",
            ProtocolKind::RestXml => "rest-xml",
            ProtocolKind::Ec2 => "ec2",
            ProtocolKind::ApiGateway => "api-gateway",
        }
    }

    /// JSON family: json, rest-json, cbor and ion share the JSON client runtime.
    pub fn is_json_family(&self) -> bool {
        matches!(
            self,
            ProtocolKind::Json | ProtocolKind::RestJson | ProtocolKind::Cbor | ProtocolKind::Ion
        )
    }

    /// Query family: query and rest-xml share the XML client runtime.
    pub fn is_query_family(&self) -> bool {
        matches!(self, ProtocolKind::Query | ProtocolKind::RestXml)
    }
}

impl fmt::Display for ProtocolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.wire_name()) }
}

impl FromStr for ProtocolKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProtocolKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.wire_name() == s)
            .ok_or_else(|| ModelError::UnknownProtocol(s.to_string()))
    }
}

impl TryFrom<String> for ProtocolKind {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
}

impl From<ProtocolKind> for String {
    fn from(kind: ProtocolKind) -> Self { kind.wire_name().to_string() }
}

/// Request signing scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SignatureVersion {
    /// Signature version 4.
    #[default]
    #[serde(rename = "v4")]
    V4,
    /// Legacy query-string signature version 2.
    #[serde(rename = "v2")]
    V2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_parse_back() {
        for kind in ProtocolKind::ALL {
            assert_eq!(kind.wire_name().parse::<ProtocolKind>().expect("parse"), kind);
        }
    }

    #[test]
    fn test_unknown_protocol_rejected() {
        let err = "smoke-signals".parse::<ProtocolKind>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownProtocol(ref p) if p == "smoke-signals"));
    }

    #[test]
    fn test_families() {
        assert!(ProtocolKind::Cbor.is_json_family());
        assert!(ProtocolKind::RestXml.is_query_family());
        assert!(!ProtocolKind::Ec2.is_query_family());
        assert!(!ProtocolKind::ApiGateway.is_json_family());
    }
}
