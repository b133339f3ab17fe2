use serde::Deserialize;

/// Numeric row id as issued by the gateway.
pub type EntityId = i64;

/// List endpoints answer either a DRF-style page object or a bare array.
/// Both shapes deserialize into this envelope; callers only ever see the
/// rows.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Paginated {
        results: Vec<T>,
        #[serde(default)]
        count: Option<u64>,
        #[serde(default)]
        next: Option<String>,
    },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_results(self) -> Vec<T> {
        match self {
            ListEnvelope::Paginated { results, .. } => results,
            ListEnvelope::Bare(items) => items,
        }
    }

    /// Total row count: the server-reported count when present, otherwise
    /// the length of the delivered page.
    pub fn total_count(&self) -> usize {
        match self {
            ListEnvelope::Paginated {
                count: Some(count), ..
            } => *count as usize,
            ListEnvelope::Paginated { results, .. } => results.len(),
            ListEnvelope::Bare(items) => items.len(),
        }
    }

    pub fn next_url(&self) -> Option<&str> {
        match self {
            ListEnvelope::Paginated { next, .. } => next.as_deref(),
            ListEnvelope::Bare(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_shape() {
        let env: ListEnvelope<i64> =
            serde_json::from_str(r#"{"results":[1,2],"count":7,"next":"/api/jobs/?page=2"}"#)
                .unwrap();
        assert_eq!(env.total_count(), 7);
        assert_eq!(env.next_url(), Some("/api/jobs/?page=2"));
        assert_eq!(env.into_results(), vec![1, 2]);
    }

    #[test]
    fn test_bare_array_shape() {
        let env: ListEnvelope<i64> = serde_json::from_str("[3,4,5]").unwrap();
        assert_eq!(env.total_count(), 3);
        assert!(env.next_url().is_none());
        assert_eq!(env.into_results(), vec![3, 4, 5]);
    }
}
