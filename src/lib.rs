#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod amounts;
pub mod codec;
pub mod discriminator;
pub mod error;
pub mod events;
pub mod hash;
pub mod ordering;
pub mod scanner;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use amounts::{MAX_DECIMALS, calculate_delta_amount, format_amount};
pub use codec::{AsU128, ByteReader, read_u64, read_u128, write_u128};
pub use discriminator::{Discriminator, EventKind, bytes_equal, identify_event_type};
pub use error::Error;
pub use events::{
    FareEvent, FeeCharged, FeeType, PoolAccumulatedAmountReleased, PoolAccumulatedAmountUpdated,
    PoolManagerUpdated, PoolRegistered, QkWithConfigRegistered, TrialId, TrialIdSource,
    TrialRegistered, TrialResolved, TypedEvent, decode_event,
};
pub use hash::{QK_CONFIG_HASH_VERSION, calculate_qk_with_config_hash};
pub use ordering::{OrderIndex, calculate_order_index, sort_by_order_index};
pub use scanner::{
    LogScanner, ParsedLogs, ScannerConfig, SkipCounts, parse_transaction, parse_transaction_logs,
};
pub use types::{Address, EventContext, HashBytes, TransactionLogs};
