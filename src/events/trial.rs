use serde::Serialize;

use crate::amounts::calculate_delta_amount;
use crate::codec::ByteReader;
use crate::error::Error;
use crate::types::{Address, EventContext, HashBytes, as_decimal};

/// Where a [`TrialId`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TrialIdSource {
    /// The trial account address emitted by the program.
    OnChain,
    /// Positional placeholder built from the event coordinates. Not a chain
    /// identity; consumers must not join it against trial accounts.
    Synthetic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialId {
    pub value: String,
    pub source: TrialIdSource,
}

impl TrialId {
    pub fn is_synthetic(&self) -> bool {
        self.source == TrialIdSource::Synthetic
    }

    /// `<signature>:<instruction_index>:<inner_instruction_index>`
    pub fn synthetic(context: &EventContext) -> Self {
        Self {
            value: format!(
                "{}:{}:{}",
                context.signature, context.instruction_index, context.inner_instruction_index
            ),
            source: TrialIdSource::Synthetic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialRegistered {
    #[serde(flatten)]
    pub context: EventContext,
    pub trial_id: TrialId,
    /// Present only when the payload carried the trial account.
    pub trial_address: Option<Address>,
    pub who: Address,
    pub pool_address: Address,
    #[serde(serialize_with = "as_decimal")]
    pub multiplier: u64,
    pub qk_with_config_hash: HashBytes,
    pub extra_data_hash: HashBytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialResolved {
    #[serde(flatten)]
    pub context: EventContext,
    pub trial_address: Address,
    pub pool_address: Address,
    pub who: Address,
    #[serde(serialize_with = "as_decimal")]
    pub result_index: u64,
    #[serde(serialize_with = "as_decimal")]
    pub result_k: u128,
    #[serde(serialize_with = "as_decimal")]
    pub randomness: u128,
}

impl TrialResolved {
    /// Balance change for a trial of `multiplier` that resolved to `result_k`.
    pub fn delta_amount(&self, multiplier: u128) -> Result<i128, Error> {
        calculate_delta_amount(self.result_k, multiplier)
    }
}

/// Decodes `TrialRegistered`. Older program builds end the payload before the
/// trailing `Option<Pubkey>`; those events get a [`TrialIdSource::Synthetic`]
/// id instead of guessing one.
pub fn parse_trial_registered_with_synthetic(
    data: &[u8],
    context: EventContext,
) -> Result<TrialRegistered, Error> {
    let mut reader = ByteReader::new(data);
    let who = reader.address()?;
    let pool_address = reader.address()?;
    let multiplier = reader.u64()?;
    let qk_with_config_hash = reader.hash()?;
    let extra_data_hash = reader.hash()?;

    let trial_address = if !reader.is_empty() && reader.option_tag("trial")? {
        Some(reader.address()?)
    } else {
        None
    };

    let trial_id = match trial_address {
        Some(address) => TrialId {
            value: address.to_string(),
            source: TrialIdSource::OnChain,
        },
        None => TrialId::synthetic(&context),
    };

    Ok(TrialRegistered {
        context,
        trial_id,
        trial_address,
        who,
        pool_address,
        multiplier,
        qk_with_config_hash,
        extra_data_hash,
    })
}

pub fn parse_trial_resolved(data: &[u8], context: EventContext) -> Result<TrialResolved, Error> {
    let mut reader = ByteReader::new(data);
    Ok(TrialResolved {
        trial_address: reader.address()?,
        pool_address: reader.address()?,
        who: reader.address()?,
        result_index: reader.u64()?,
        result_k: reader.u128()?,
        randomness: reader.u128()?,
        context,
    })
}
