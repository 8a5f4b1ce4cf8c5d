use serde::Serialize;

use crate::codec::ByteReader;
use crate::error::Error;
use crate::types::{Address, EventContext, as_decimal};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeeType {
    Play,
    Loss,
    Mint,
}

impl FeeType {
    pub fn from_code(code: u8) -> Result<Self, Error> {
        match code {
            0 => Ok(Self::Play),
            1 => Ok(Self::Loss),
            2 => Ok(Self::Mint),
            _ => Err(Error::InvalidField {
                field: "fee_type",
                reason: format!("unknown fee type code: {code}"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeCharged {
    #[serde(flatten)]
    pub context: EventContext,
    pub fee_type: FeeType,
    pub pool_address: Address,
    pub trial_address: Address,
    #[serde(serialize_with = "as_decimal")]
    pub fee_amount: u64,
}

pub fn parse_fee_charged(data: &[u8], context: EventContext) -> Result<FeeCharged, Error> {
    let mut reader = ByteReader::new(data);
    Ok(FeeCharged {
        fee_type: FeeType::from_code(reader.u8()?)?,
        pool_address: reader.address()?,
        trial_address: reader.address()?,
        fee_amount: reader.u64()?,
        context,
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::events::test_support::{PayloadBuilder, context};

    #[test]
    fn decodes_each_fee_type() {
        for (code, expected) in [(0, FeeType::Play), (1, FeeType::Loss), (2, FeeType::Mint)] {
            let data = PayloadBuilder::new()
                .u8(code)
                .address(1)
                .address(2)
                .u64(12_345)
                .build();
            let event = parse_fee_charged(&data, context(0)).unwrap();
            assert_eq!(event.fee_type, expected);
            assert_eq!(event.fee_amount, 12_345);
            assert_eq!(event.trial_address, Address::new([2; 32]));
        }
    }

    #[test]
    fn rejects_unknown_fee_type() {
        let data = PayloadBuilder::new()
            .u8(7)
            .address(1)
            .address(2)
            .u64(1)
            .build();
        let err = parse_fee_charged(&data, context(0)).unwrap_err();
        let Error::InvalidField { field, reason } = err else {
            panic!("expected invalid field");
        };
        assert_eq!(field, "fee_type");
        assert_eq!(reason, "unknown fee type code: 7");
    }

    #[test]
    fn fee_type_string_forms() {
        assert_eq!(FeeType::Mint.to_string(), "mint");
        assert_eq!(
            serde_json::to_value(FeeType::Loss).unwrap(),
            serde_json::json!("loss")
        );
    }
}
