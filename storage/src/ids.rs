// storage/src/ids.rs
//
// Record identifiers are 12-digit numeric strings drawn uniformly from
// [10^11, 10^12 - 1]. They double as sign-in identifiers, so draws come
// from the OS entropy source rather than a seeded PRNG.

use std::future::Future;

use rand::rngs::OsRng;
use rand::Rng;

use crate::errors::{StorageError, StorageResult};

/// Collision-retry bound for identifier allocation. At 12-digit scale a
/// single retry is already rare; hitting the bound means the identifier
/// space (or the probe) is broken and the operation must fail loudly.
pub const MAX_ID_ATTEMPTS: u32 = 32;

const ID_MIN: u64 = 100_000_000_000;
const ID_MAX: u64 = 999_999_999_999;

pub fn random_record_id() -> String {
    OsRng.gen_range(ID_MIN..=ID_MAX).to_string()
}

pub fn is_record_id(value: &str) -> bool {
    value.len() == 12 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Draws identifiers until `probe` reports one unused, bounded by
/// [`MAX_ID_ATTEMPTS`].
pub(crate) async fn allocate<F, Fut>(mut probe: F) -> StorageResult<String>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = StorageResult<bool>>,
{
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = random_record_id();
        if !probe(candidate.clone()).await? {
            return Ok(candidate);
        }
    }
    Err(StorageError::IdSpaceExhausted(MAX_ID_ATTEMPTS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_twelve_digits() {
        for _ in 0..1000 {
            let id = random_record_id();
            assert!(is_record_id(&id), "bad id: {id}");
        }
    }

    #[test]
    fn format_check_rejects_near_misses() {
        assert!(!is_record_id("12345678901"));
        assert!(!is_record_id("1234567890123"));
        assert!(!is_record_id("12345678901a"));
        assert!(!is_record_id(""));
    }

    #[tokio::test]
    async fn allocation_stops_after_bounded_attempts() {
        let mut probes = 0u32;
        let result = allocate(|_| {
            probes += 1;
            async { Ok(true) }
        })
        .await;
        assert!(matches!(result, Err(StorageError::IdSpaceExhausted(n)) if n == MAX_ID_ATTEMPTS));
        assert_eq!(probes, MAX_ID_ATTEMPTS);
    }

    #[tokio::test]
    async fn allocation_returns_first_free_candidate() {
        let mut probes = 0u32;
        let id = allocate(|_| {
            probes += 1;
            let taken = probes < 3;
            async move { Ok(taken) }
        })
        .await
        .unwrap();
        assert!(is_record_id(&id));
        assert_eq!(probes, 3);
    }
}
