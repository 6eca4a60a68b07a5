//! Admission Module
//!
//! Decides whether a `put` is accepted or silently dropped.

/// Returns true when both the key and the value are present.
///
/// A `put` failing this check is a no-op: nothing is stored and no error is
/// reported to the caller.
pub fn is_admissible<K, V>(key: Option<&K>, value: Option<&V>) -> bool {
    key.is_some() && value.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits_present_pair() {
        assert!(is_admissible(Some(&"a"), Some(&1)));
    }

    #[test]
    fn test_rejects_missing_parts() {
        assert!(!is_admissible::<&str, i32>(None, Some(&1)));
        assert!(!is_admissible::<&str, i32>(Some(&"a"), None));
        assert!(!is_admissible::<&str, i32>(None, None));
    }
}
