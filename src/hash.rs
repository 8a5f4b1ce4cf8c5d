//! Content hash for qk payout-curve configurations.
//!
//! Canonical byte layout, all integers little-endian:
//!
//! ```text
//! for i in 0..len: q[i] as u128 || k[i] as u128
//! fee_loss_multiplier as u128
//! fee_mint_multiplier as u128
//! version as u32
//! ```
//!
//! The digest is SHA-256, rendered as 64 lowercase hex characters. Pools
//! registering identical curves get identical hashes, so the value is used as
//! a deduplication key downstream. The arrays are hashed in the order given;
//! callers keep them sorted by ascending `k`.

use sha2::{Digest, Sha256};

use crate::codec::{AsU128, write_u128};
use crate::error::Error;

/// Version tag of the layout above.
pub const QK_CONFIG_HASH_VERSION: u32 = 1;

pub fn calculate_qk_with_config_hash<Q, K, F, M>(
    q: &[Q],
    k: &[K],
    fee_loss_multiplier: &F,
    fee_mint_multiplier: &M,
    version: u32,
) -> Result<String, Error>
where
    Q: AsU128,
    K: AsU128,
    F: AsU128 + ?Sized,
    M: AsU128 + ?Sized,
{
    if q.len() != k.len() {
        return Err(Error::InvalidField {
            field: "q",
            reason: format!("q has {} entries but k has {}", q.len(), k.len()),
        });
    }

    let mut hasher = Sha256::new();
    for (q_i, k_i) in q.iter().zip(k) {
        hasher.update(write_u128(q_i)?);
        hasher.update(write_u128(k_i)?);
    }
    hasher.update(write_u128(fee_loss_multiplier)?);
    hasher.update(write_u128(fee_mint_multiplier)?);
    hasher.update(version.to_le_bytes());

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;

    const HALF: u128 = 500_000_000_000_000_000;
    const TWO_X: u128 = 2_000_000_000_000_000_000;

    fn sample_hash(q: &[u128], k: &[u128]) -> String {
        calculate_qk_with_config_hash(
            q,
            k,
            &10_000_000_000_000_000_u128,
            &5_000_000_000_000_000_u128,
            QK_CONFIG_HASH_VERSION,
        )
        .unwrap()
    }

    #[test]
    fn pins_canonical_byte_layout() {
        assert_eq!(
            sample_hash(&[HALF, HALF], &[0, TWO_X]),
            "30f13cf4cf5103bec6cd711b4417f0d66c1cf5214561a2e9186ab51a55c9ebaa"
        );
        let empty: [u128; 0] = [];
        assert_eq!(
            calculate_qk_with_config_hash(&empty, &empty, &0_u64, &0_u64, 0).unwrap(),
            "6db65fd59fd356f6729140571b5bcd6bb3b83492a16e1bf0a3884442fc3c8a0e"
        );
    }

    #[test]
    fn identical_inputs_hash_identically() {
        let first = sample_hash(&[HALF, HALF], &[0, TWO_X]);
        let second = sample_hash(&[HALF, HALF], &[0, TWO_X]);
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn any_single_element_change_changes_the_hash() {
        let base = sample_hash(&[HALF, HALF], &[0, TWO_X]);
        assert_ne!(base, sample_hash(&[HALF + 1, HALF], &[0, TWO_X]));
        assert_ne!(base, sample_hash(&[HALF, HALF - 1], &[0, TWO_X]));
        assert_ne!(base, sample_hash(&[HALF, HALF], &[1, TWO_X]));
        assert_ne!(base, sample_hash(&[HALF, HALF], &[0, TWO_X + 1]));
        assert_ne!(base, sample_hash(&[HALF, HALF], &[TWO_X, 0]));
    }

    #[test]
    fn fee_multipliers_and_version_are_part_of_the_key() {
        let q = [HALF, HALF];
        let k = [0, TWO_X];
        let base = calculate_qk_with_config_hash(&q, &k, &1_u64, &2_u64, 1).unwrap();
        assert_ne!(
            base,
            calculate_qk_with_config_hash(&q, &k, &2_u64, &1_u64, 1).unwrap()
        );
        assert_ne!(
            base,
            calculate_qk_with_config_hash(&q, &k, &1_u64, &2_u64, 2).unwrap()
        );
    }

    #[test]
    fn decimal_string_inputs_match_numeric_inputs() {
        let from_strings = calculate_qk_with_config_hash(
            &["500000000000000000", "500000000000000000"],
            &["0", "2000000000000000000"],
            "10000000000000000",
            "5000000000000000",
            QK_CONFIG_HASH_VERSION,
        )
        .unwrap();
        assert_eq!(from_strings, sample_hash(&[HALF, HALF], &[0, TWO_X]));
    }

    #[test]
    fn out_of_range_coefficients_propagate() {
        let err = calculate_qk_with_config_hash(
            &["-1"],
            &["0"],
            "0",
            "0",
            QK_CONFIG_HASH_VERSION,
        )
        .unwrap_err();
        assert!(matches!(err, Error::ValueOutOfRange { .. }));

        let err = calculate_qk_with_config_hash(
            &[1_u128],
            &[0_u128],
            "340282366920938463463374607431768211456",
            "0",
            QK_CONFIG_HASH_VERSION,
        )
        .unwrap_err();
        assert!(matches!(err, Error::ValueOutOfRange { .. }));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = calculate_qk_with_config_hash(&[1_u128, 2], &[1_u128], &0_u64, &0_u64, 1)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: "q", .. }));
    }
}
