//! Fixed table of Fare Protocol event discriminators.
//!
//! Each value is the Anchor event discriminator, the first eight bytes of
//! `sha256("event:<Name>")`. They are wire-format constants of the on-chain
//! program and must never be edited independently of it.

use serde::Serialize;

pub const DISCRIMINATOR_LEN: usize = 8;

pub type Discriminator = [u8; DISCRIMINATOR_LEN];

pub mod discriminators {
    use super::Discriminator;

    pub const POOL_REGISTERED: Discriminator = [77, 114, 165, 230, 33, 230, 135, 215];
    pub const QK_WITH_CONFIG_REGISTERED: Discriminator = [159, 28, 4, 76, 127, 235, 215, 90];
    pub const TRIAL_REGISTERED: Discriminator = [182, 0, 212, 203, 142, 87, 214, 221];
    pub const TRIAL_RESOLVED: Discriminator = [196, 198, 203, 60, 5, 136, 167, 206];
    pub const FEE_CHARGED: Discriminator = [10, 15, 44, 253, 165, 0, 86, 248];
    pub const POOL_MANAGER_UPDATED: Discriminator = [84, 76, 126, 12, 135, 157, 81, 120];
    pub const POOL_ACCUMULATED_AMOUNT_UPDATED: Discriminator =
        [200, 54, 121, 99, 14, 180, 19, 138];
    pub const POOL_ACCUMULATED_AMOUNT_RELEASED: Discriminator =
        [24, 220, 55, 231, 249, 157, 219, 208];
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::VariantNames,
    strum_macros::EnumIter,
)]
pub enum EventKind {
    PoolRegistered,
    QkWithConfigRegistered,
    TrialRegistered,
    TrialResolved,
    FeeCharged,
    PoolManagerUpdated,
    PoolAccumulatedAmountUpdated,
    PoolAccumulatedAmountReleased,
}

impl EventKind {
    pub const fn discriminator(self) -> Discriminator {
        match self {
            Self::PoolRegistered => discriminators::POOL_REGISTERED,
            Self::QkWithConfigRegistered => discriminators::QK_WITH_CONFIG_REGISTERED,
            Self::TrialRegistered => discriminators::TRIAL_REGISTERED,
            Self::TrialResolved => discriminators::TRIAL_RESOLVED,
            Self::FeeCharged => discriminators::FEE_CHARGED,
            Self::PoolManagerUpdated => discriminators::POOL_MANAGER_UPDATED,
            Self::PoolAccumulatedAmountUpdated => discriminators::POOL_ACCUMULATED_AMOUNT_UPDATED,
            Self::PoolAccumulatedAmountReleased => {
                discriminators::POOL_ACCUMULATED_AMOUNT_RELEASED
            }
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    pub fn all() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

/// Length check first, then element-wise.
pub fn bytes_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| x == y)
}

/// Resolves a discriminator to its event kind. Anything that is not exactly
/// one of the eight known signatures yields `None`.
pub fn identify_event_type(discriminator: &[u8]) -> Option<EventKind> {
    EventKind::all().find(|kind| bytes_equal(&kind.discriminator(), discriminator))
}
