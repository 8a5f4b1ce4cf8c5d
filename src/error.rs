#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("truncated buffer: need {needed} bytes at offset {offset}, have {available}")]
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("invalid field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("invalid payload encoding: {reason}")]
    InvalidEncoding { reason: String },

    #[error("value out of u128 range: {value}")]
    ValueOutOfRange { value: String },

    #[error("{field} {value} does not fit the order index scale (must be < 1000000)")]
    OrderIndexOverflow { field: &'static str, value: u64 },

    #[error("amount overflow: {reason}")]
    AmountOverflow { reason: String },

    #[error("decimals {decimals} exceeds the maximum of {max}")]
    DecimalsOutOfRange { decimals: u32, max: u32 },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Errors confined to a single payload. The scanner counts these as
    /// malformed and moves on to the next line.
    pub fn is_payload_error(&self) -> bool {
        matches!(
            self,
            Self::TruncatedBuffer { .. } | Self::InvalidField { .. } | Self::InvalidEncoding { .. }
        )
    }
}
