use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::Error;

/// 32-byte on-chain account address, rendered as base58.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; 32]);

impl Address {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = bs58::decode(s).into_vec().map_err(|e| Error::InvalidField {
            field: "address",
            reason: format!("not base58: {e}"),
        })?;
        let bytes: [u8; 32] = decoded.try_into().map_err(|v: Vec<u8>| Error::InvalidField {
            field: "address",
            reason: format!("expected 32 bytes, got {}", v.len()),
        })?;
        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "native")]
impl From<Address> for solana_pubkey::Pubkey {
    fn from(address: Address) -> Self {
        solana_pubkey::Pubkey::new_from_array(address.0)
    }
}

#[cfg(feature = "native")]
impl From<solana_pubkey::Pubkey> for Address {
    fn from(pubkey: solana_pubkey::Pubkey) -> Self {
        Self(pubkey.to_bytes())
    }
}

/// Raw 32-byte digest carried in event payloads, rendered as lowercase hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashBytes([u8; 32]);

impl HashBytes {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for HashBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for HashBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashBytes({self})")
    }
}

impl Serialize for HashBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Fields shared by every decoded event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventContext {
    /// Slot in which the transaction landed.
    #[serde(serialize_with = "as_decimal")]
    pub slot: u64,
    /// Position of the top-level instruction within the transaction.
    pub instruction_index: u32,
    /// Position of the event among those decoded for this instruction.
    pub inner_instruction_index: u32,
    /// Transaction signature (base58).
    pub signature: String,
    /// Unix block time, when the RPC node reported one.
    pub block_time: Option<i64>,
}

/// Log output of one instruction as handed over by the ingestion side.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionLogs {
    /// Transaction signature (base58).
    pub signature: String,
    pub slot: u64,
    #[serde(default)]
    pub block_time: Option<i64>,
    pub instruction_index: u32,
    /// Raw log lines in emission order.
    pub logs: Vec<String>,
}

impl TransactionLogs {
    /// Parses a JSON array of instruction log batches.
    pub fn batch_from_json(json: &str) -> Result<Vec<Self>, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Serializes integers as decimal strings so JS consumers keep full precision.
pub fn as_decimal<T: fmt::Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Decimal-string form of integer sequences.
#[allow(clippy::ptr_arg, reason = "serde passes the field itself to serialize_with")]
pub fn as_decimal_vec<T: fmt::Display, S: Serializer>(
    values: &Vec<T>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(ToString::to_string))
}
