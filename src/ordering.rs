//! Total order key over decoded events.
//!
//! `slot * 10^12 + instruction_index * 10^6 + inner_instruction_index`. Both
//! indices must stay below 10^6 or the fields would overlap; out-of-range
//! values are rejected with [`Error::OrderIndexOverflow`]. `u128` holds the
//! largest valid key (`u64::MAX * 10^12 + 10^12 - 1`) without overflow.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::Error;
use crate::events::TypedEvent;

pub const SLOT_SCALE: u128 = 1_000_000_000_000;
pub const INSTRUCTION_SCALE: u128 = 1_000_000;
pub const MAX_INDEX: u32 = 999_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderIndex(u128);

impl OrderIndex {
    pub fn value(self) -> u128 {
        self.0
    }
}

impl fmt::Display for OrderIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for OrderIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn check_index(field: &'static str, value: u32) -> Result<u128, Error> {
    if value > MAX_INDEX {
        return Err(Error::OrderIndexOverflow {
            field,
            value: u64::from(value),
        });
    }
    Ok(u128::from(value))
}

pub fn calculate_order_index(
    slot: u64,
    instruction_index: u32,
    inner_instruction_index: u32,
) -> Result<OrderIndex, Error> {
    let instruction = check_index("instruction_index", instruction_index)?;
    let inner = check_index("inner_instruction_index", inner_instruction_index)?;
    Ok(OrderIndex(
        u128::from(slot) * SLOT_SCALE + instruction * INSTRUCTION_SCALE + inner,
    ))
}

/// Stable-sorts events from independently decoded transactions into causal
/// order. Fails on the first event whose coordinates cannot be keyed.
pub fn sort_by_order_index(events: &mut [TypedEvent]) -> Result<(), Error> {
    for event in events.iter() {
        event.order_index()?;
    }
    events.sort_by_cached_key(|event| event.order_index().ok());
    Ok(())
}
