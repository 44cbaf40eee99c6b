//! Operator-facing failure and notice reporting.

use std::collections::BTreeMap;

use crate::Error;

/// Extra key/value context attached to a report.
pub type Metadata = BTreeMap<String, String>;

/// Surfaces failures and notices to whoever runs the linker.
///
/// Reporting never changes control flow; callers decide what happens next.
pub trait Reporter: Send + Sync {
    /// Report a failure.
    fn failure(&self, error: &Error, metadata: &Metadata);

    /// Report an informational notice.
    fn notice(&self, message: &str, metadata: &Metadata);
}

/// Build a [`Metadata`] map from string pairs.
pub fn metadata<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Metadata
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_is_sorted() {
        let meta = metadata([("repo", "acme/widgets"), ("issue", "5")]);
        let keys: Vec<&str> = meta.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["issue", "repo"]);
    }
}
