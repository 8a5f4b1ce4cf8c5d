pub mod fee;
pub mod pool;
pub mod qk;
pub mod trial;

use serde::Serialize;

use crate::discriminator::EventKind;
use crate::error::Error;
use crate::ordering::{OrderIndex, calculate_order_index};
use crate::types::EventContext;

pub use fee::{FeeCharged, FeeType, parse_fee_charged};
pub use pool::{
    PoolAccumulatedAmountReleased, PoolAccumulatedAmountUpdated, PoolManagerUpdated,
    PoolRegistered, parse_pool_accumulated_amount_released,
    parse_pool_accumulated_amount_updated, parse_pool_manager_updated, parse_pool_registered,
};
pub use qk::{QkWithConfigRegistered, parse_qk_with_config_registered};
pub use trial::{
    TrialId, TrialIdSource, TrialRegistered, TrialResolved, parse_trial_registered_with_synthetic,
    parse_trial_resolved,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FareEvent {
    PoolRegistered(PoolRegistered),
    QkWithConfigRegistered(QkWithConfigRegistered),
    TrialRegistered(TrialRegistered),
    TrialResolved(TrialResolved),
    FeeCharged(FeeCharged),
    PoolManagerUpdated(PoolManagerUpdated),
    PoolAccumulatedAmountUpdated(PoolAccumulatedAmountUpdated),
    PoolAccumulatedAmountReleased(PoolAccumulatedAmountReleased),
}

impl FareEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::PoolRegistered(_) => EventKind::PoolRegistered,
            Self::QkWithConfigRegistered(_) => EventKind::QkWithConfigRegistered,
            Self::TrialRegistered(_) => EventKind::TrialRegistered,
            Self::TrialResolved(_) => EventKind::TrialResolved,
            Self::FeeCharged(_) => EventKind::FeeCharged,
            Self::PoolManagerUpdated(_) => EventKind::PoolManagerUpdated,
            Self::PoolAccumulatedAmountUpdated(_) => EventKind::PoolAccumulatedAmountUpdated,
            Self::PoolAccumulatedAmountReleased(_) => EventKind::PoolAccumulatedAmountReleased,
        }
    }

    pub fn context(&self) -> &EventContext {
        match self {
            Self::PoolRegistered(e) => &e.context,
            Self::QkWithConfigRegistered(e) => &e.context,
            Self::TrialRegistered(e) => &e.context,
            Self::TrialResolved(e) => &e.context,
            Self::FeeCharged(e) => &e.context,
            Self::PoolManagerUpdated(e) => &e.context,
            Self::PoolAccumulatedAmountUpdated(e) => &e.context,
            Self::PoolAccumulatedAmountReleased(e) => &e.context,
        }
    }
}

/// One decoded event tagged with its discriminator name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedEvent {
    pub event_type: EventKind,
    pub event: FareEvent,
}

impl TypedEvent {
    pub fn new(event: FareEvent) -> Self {
        Self {
            event_type: event.kind(),
            event,
        }
    }

    pub fn context(&self) -> &EventContext {
        self.event.context()
    }

    pub fn order_index(&self) -> Result<OrderIndex, Error> {
        let ctx = self.context();
        calculate_order_index(ctx.slot, ctx.instruction_index, ctx.inner_instruction_index)
    }
}

/// Routes a post-discriminator payload to the decoder for `kind`.
pub fn decode_event(kind: EventKind, data: &[u8], context: EventContext) -> Result<TypedEvent, Error> {
    let event = match kind {
        EventKind::PoolRegistered => FareEvent::PoolRegistered(parse_pool_registered(data, context)?),
        EventKind::QkWithConfigRegistered => {
            FareEvent::QkWithConfigRegistered(parse_qk_with_config_registered(data, context)?)
        }
        EventKind::TrialRegistered => {
            FareEvent::TrialRegistered(parse_trial_registered_with_synthetic(data, context)?)
        }
        EventKind::TrialResolved => FareEvent::TrialResolved(parse_trial_resolved(data, context)?),
        EventKind::FeeCharged => FareEvent::FeeCharged(parse_fee_charged(data, context)?),
        EventKind::PoolManagerUpdated => {
            FareEvent::PoolManagerUpdated(parse_pool_manager_updated(data, context)?)
        }
        EventKind::PoolAccumulatedAmountUpdated => FareEvent::PoolAccumulatedAmountUpdated(
            parse_pool_accumulated_amount_updated(data, context)?,
        ),
        EventKind::PoolAccumulatedAmountReleased => FareEvent::PoolAccumulatedAmountReleased(
            parse_pool_accumulated_amount_released(data, context)?,
        ),
    };
    Ok(TypedEvent::new(event))
}


#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::test_support::{PayloadBuilder, context};
    use super::*;

    #[test]
    fn decode_event_tags_with_matching_kind() {
        let data = PayloadBuilder::new().address(1).address(2).build();
        let typed = decode_event(EventKind::PoolManagerUpdated, &data, context(3)).unwrap();
        assert_eq!(typed.event_type, EventKind::PoolManagerUpdated);
        assert_eq!(typed.event.kind(), typed.event_type);
        assert_eq!(typed.context().inner_instruction_index, 3);
        assert_eq!(typed.order_index().unwrap().to_string(), "100000002000003");
    }

    #[test]
    fn decode_event_surfaces_truncation() {
        let err = decode_event(EventKind::TrialResolved, &[0u8; 10], context(0)).unwrap_err();
        assert!(err.is_payload_error());
    }

    #[test]
    fn typed_event_serializes_with_event_type_tag() {
        let data = PayloadBuilder::new().address(1).address(2).u64(5).build();
        let typed =
            decode_event(EventKind::PoolAccumulatedAmountUpdated, &data, context(0)).unwrap();
        let json = serde_json::to_value(&typed).unwrap();
        assert_eq!(json["eventType"], "PoolAccumulatedAmountUpdated");
        assert_eq!(json["event"]["newAccumulatedAmount"], "5");
        assert_eq!(json["event"]["slot"], "100");
        assert_eq!(json["event"]["instructionIndex"], 2);
    }
}
