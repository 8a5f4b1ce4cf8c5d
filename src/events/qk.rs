use serde::Serialize;

use crate::codec::ByteReader;
use crate::error::Error;
use crate::hash::{QK_CONFIG_HASH_VERSION, calculate_qk_with_config_hash};
use crate::types::{Address, EventContext, as_decimal, as_decimal_vec};

/// A pool registered a payout curve. `q` holds outcome probabilities and `k`
/// the matching multipliers, both scaled by 10^18.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QkWithConfigRegistered {
    #[serde(flatten)]
    pub context: EventContext,
    pub pool_address: Address,
    #[serde(serialize_with = "as_decimal_vec")]
    pub q: Vec<u128>,
    #[serde(serialize_with = "as_decimal_vec")]
    pub k: Vec<u128>,
    #[serde(serialize_with = "as_decimal")]
    pub fee_loss_multiplier: u64,
    #[serde(serialize_with = "as_decimal")]
    pub fee_mint_multiplier: u64,
    /// Content hash of the configuration, see [`crate::hash`].
    pub qk_with_config_hash: String,
}

pub fn parse_qk_with_config_registered(
    data: &[u8],
    context: EventContext,
) -> Result<QkWithConfigRegistered, Error> {
    let mut reader = ByteReader::new(data);
    let pool_address = reader.address()?;
    let q = reader.u128_vec()?;
    let k = reader.u128_vec()?;
    let fee_loss_multiplier = reader.u64()?;
    let fee_mint_multiplier = reader.u64()?;

    if q.len() != k.len() {
        return Err(Error::InvalidField {
            field: "k",
            reason: format!("q has {} entries but k has {}", q.len(), k.len()),
        });
    }

    let qk_with_config_hash = calculate_qk_with_config_hash(
        &q,
        &k,
        &fee_loss_multiplier,
        &fee_mint_multiplier,
        QK_CONFIG_HASH_VERSION,
    )?;

    Ok(QkWithConfigRegistered {
        context,
        pool_address,
        q,
        k,
        fee_loss_multiplier,
        fee_mint_multiplier,
        qk_with_config_hash,
    })
}
