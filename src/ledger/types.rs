//! Ledger data types
//!
//! Identifiers and response payloads exchanged with a Sui full node.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of hex digits in a normalised 32-byte identifier
const HEX_LEN: usize = 64;

/// Error returned when an identifier is not valid hex
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid identifier {0:?}: expected 0x-prefixed hex of at most 32 bytes")]
pub struct ParseIdError(pub String);

/// Lower-case, zero-padded, 0x-prefixed form of a 32-byte hex identifier
fn normalize_hex(input: &str) -> Result<String, ParseIdError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty()
        || digits.len() > HEX_LEN
        || !digits.chars().all(|c| c.is_ascii_hexdigit())
    {
        return Err(ParseIdError(input.to_string()));
    }

    Ok(format!("0x{:0>width$}", digits.to_ascii_lowercase(), width = HEX_LEN))
}

macro_rules! hex_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse and normalise a hex identifier
            pub fn parse(input: &str) -> Result<Self, ParseIdError> {
                normalize_hex(input).map(Self)
            }

            /// Normalised string form
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseIdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

hex_id!(
    /// Globally unique reference to a piece of ledger-resident state
    ObjectId
);

hex_id!(
    /// Account address
    Address
);

impl ObjectId {
    /// The shared system clock object (`0x6`)
    pub fn clock() -> Self {
        Self(format!("0x{:0>width$}", "6", width = HEX_LEN))
    }
}

/// Transaction digest as returned by the ledger (base58, kept opaque)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================
// Object reads
// ============================================

/// Which parts of an object to include in a read
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectOptions {
    pub show_content: bool,
    pub show_owner: bool,
}

impl ObjectOptions {
    /// Content and owner, the combination the journal viewer needs
    pub fn content_and_owner() -> Self {
        Self {
            show_content: true,
            show_owner: true,
        }
    }
}

/// Result of `sui_getObject`: either data or an error describing why there is none
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ObjectResponse {
    #[serde(default)]
    pub data: Option<ObjectData>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// Current state of a ledger object
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectData {
    pub object_id: ObjectId,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub digest: Option<String>,
    /// Ownership metadata, kept raw since the ledger has several owner kinds
    #[serde(default)]
    pub owner: Option<serde_json::Value>,
    #[serde(default)]
    pub content: Option<ObjectContent>,
}

/// Parsed object content
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectContent {
    /// `moveObject` or `package`
    pub data_type: String,
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub fields: Option<serde_json::Value>,
}

impl ObjectContent {
    pub fn is_move_object(&self) -> bool {
        self.data_type == "moveObject"
    }
}

// ============================================
// Transaction reads
// ============================================

/// Result of `sui_getTransactionBlock`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransactionResponse {
    pub digest: Digest,
    #[serde(default)]
    pub effects: Option<TransactionEffects>,
}

impl TransactionResponse {
    /// Id of the first object the transaction created
    pub fn first_created(&self) -> Option<&ObjectId> {
        self.effects
            .as_ref()?
            .created
            .first()
            .map(|created| &created.reference.object_id)
    }
}

/// Subset of finalized effects the front-end reads
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TransactionEffects {
    #[serde(default)]
    pub created: Vec<OwnedObjectRef>,
}

/// An object reference paired with its new owner
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OwnedObjectRef {
    #[serde(default)]
    pub owner: Option<serde_json::Value>,
    pub reference: ObjectRef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRef {
    pub object_id: ObjectId,
    #[serde(default)]
    pub version: Option<serde_json::Value>,
    #[serde(default)]
    pub digest: Option<String>,
}
