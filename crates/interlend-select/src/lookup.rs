//! Item lookup collaborator boundary

use async_trait::async_trait;
use interlend_types::{InstanceId, Item};

use crate::error::SelectionError;

/// Capability for fetching every copy of an instance across the consortium.
///
/// Production implementations wrap the consortium-wide search service; tests
/// inject an in-memory fake. The returned feed is untrusted: it may be
/// empty, carry duplicate records, or omit tenant and status fields. The
/// core performs exactly one fetch per selection call and does not retry,
/// batch, or cache; that responsibility belongs to the implementation.
#[async_trait]
pub trait ItemLookup: Send + Sync {
    /// Fetch all items of an instance, across all tenants
    async fn fetch_items(&self, instance_id: InstanceId) -> Result<Vec<Item>, SelectionError>;
}
