use serde::Serialize;

use crate::codec::ByteReader;
use crate::error::Error;
use crate::types::{Address, EventContext, as_decimal};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolRegistered {
    #[serde(flatten)]
    pub context: EventContext,
    pub pool_address: Address,
    pub manager_address: Address,
    #[serde(serialize_with = "as_decimal")]
    pub fee_play_multiplier: u64,
    #[serde(serialize_with = "as_decimal")]
    pub fee_loss_multiplier: u64,
    #[serde(serialize_with = "as_decimal")]
    pub fee_mint_multiplier: u64,
    #[serde(serialize_with = "as_decimal")]
    pub fee_host_percent: u64,
    #[serde(serialize_with = "as_decimal")]
    pub fee_pool_percent: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolManagerUpdated {
    #[serde(flatten)]
    pub context: EventContext,
    pub pool_address: Address,
    pub new_pool_manager: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolAccumulatedAmountUpdated {
    #[serde(flatten)]
    pub context: EventContext,
    pub pool_address: Address,
    pub trial_address: Address,
    #[serde(serialize_with = "as_decimal")]
    pub new_accumulated_amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolAccumulatedAmountReleased {
    #[serde(flatten)]
    pub context: EventContext,
    pub pool_address: Address,
    pub trial_address: Address,
    pub receiver: Address,
    #[serde(serialize_with = "as_decimal")]
    pub released_amount: u64,
}

pub fn parse_pool_registered(data: &[u8], context: EventContext) -> Result<PoolRegistered, Error> {
    let mut reader = ByteReader::new(data);
    Ok(PoolRegistered {
        pool_address: reader.address()?,
        manager_address: reader.address()?,
        fee_play_multiplier: reader.u64()?,
        fee_loss_multiplier: reader.u64()?,
        fee_mint_multiplier: reader.u64()?,
        fee_host_percent: reader.u64()?,
        fee_pool_percent: reader.u64()?,
        context,
    })
}

pub fn parse_pool_manager_updated(
    data: &[u8],
    context: EventContext,
) -> Result<PoolManagerUpdated, Error> {
    let mut reader = ByteReader::new(data);
    Ok(PoolManagerUpdated {
        pool_address: reader.address()?,
        new_pool_manager: reader.address()?,
        context,
    })
}

pub fn parse_pool_accumulated_amount_updated(
    data: &[u8],
    context: EventContext,
) -> Result<PoolAccumulatedAmountUpdated, Error> {
    let mut reader = ByteReader::new(data);
    Ok(PoolAccumulatedAmountUpdated {
        pool_address: reader.address()?,
        trial_address: reader.address()?,
        new_accumulated_amount: reader.u64()?,
        context,
    })
}

pub fn parse_pool_accumulated_amount_released(
    data: &[u8],
    context: EventContext,
) -> Result<PoolAccumulatedAmountReleased, Error> {
    let mut reader = ByteReader::new(data);
    Ok(PoolAccumulatedAmountReleased {
        pool_address: reader.address()?,
        trial_address: reader.address()?,
        receiver: reader.address()?,
        released_amount: reader.u64()?,
        context,
    })
}
