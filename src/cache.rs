// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

//! A process-wide memoization of raw input text to normalized identifier
//! text.
//!
//! Strictly a performance layer: every computation for a given key is
//! deterministic, so a racing recompute produces an identical value and the
//! last writer wins. Nothing observes whether a value came from the cache,
//! and a poisoned lock simply bypasses it.

use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex};

use lru::LruCache;

const CAPACITY: NonZeroUsize = NonZeroUsize::new(512).unwrap();

static NAMES: LazyLock<Mutex<LruCache<Box<str>, Box<str>>>> =
    LazyLock::new(|| Mutex::new(LruCache::new(CAPACITY)));

/// Returns the memoized normalization of `raw`, computing and inserting it
/// on a miss. The computation runs outside the lock.
pub(crate) fn normalized<E>(
    raw: &str,
    compute: impl FnOnce() -> Result<String, E>,
) -> Result<Box<str>, E> {
    if let Ok(mut cache) = NAMES.lock() {
        if let Some(hit) = cache.get(raw) {
            return Ok(hit.clone());
        }
    }

    let computed: Box<str> = compute()?.into();

    if let Ok(mut cache) = NAMES.lock() {
        cache.put(raw.into(), computed.clone());
    }
    Ok(computed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn get(raw: &str, value: &str) -> Box<str> {
        let value = value.to_owned();
        let result: Result<_, Infallible> = normalized(raw, || Ok(value));
        result.unwrap()
    }

    #[test]
    fn test_memoization() {
        let first = get("cache-test-input", "cache_test_OUTPUT");
        // A second lookup returns the stored value, whatever the compute
        // closure would now say.
        let result: Result<_, Infallible> =
            normalized("cache-test-input", || Ok("something else".to_owned()));
        assert_eq!(result.unwrap(), first);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let result: Result<Box<str>, &str> = normalized("cache-err-input", || Err("nope"));
        assert!(result.is_err());
        let result: Result<Box<str>, &str> =
            normalized("cache-err-input", || Ok("fine".to_owned()));
        assert_eq!(result.unwrap().as_ref(), "fine");
    }

    #[test]
    fn test_bounded() {
        for i in 0..2 * CAPACITY.get() {
            get(&format!("cache-bound-{i}"), "x");
        }
        if let Ok(cache) = NAMES.lock() {
            assert!(cache.len() <= CAPACITY.get());
        }
    }
}
