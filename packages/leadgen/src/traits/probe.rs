//! Domain existence probe trait.

use async_trait::async_trait;

/// A lightweight existence check for a candidate domain.
///
/// Probe failure of any kind (timeout, connection refused, DNS) reads as
/// "does not exist". The live implementation is a header-only HTTP check
/// with a short timeout; false negatives from slow sites are accepted.
#[async_trait]
pub trait DomainProbe: Send + Sync {
    async fn exists(&self, domain: &str) -> bool;
}
