//! Multi-tenant ranker
//!
//! Answers "give me every candidate in best-first order". Used when the
//! caller wants a fallback chain: try tenants in order until one succeeds
//! downstream.

use std::sync::Arc;

use interlend_types::{InstanceId, TenantId};
use tracing::debug;

use crate::error::SelectionError;
use crate::lookup::ItemLookup;
use crate::tally;
use crate::tier::{score_tenants, TenantScore};

/// Ranks every candidate tenant for a title-level request
pub struct TenantRanker {
    lookup: Arc<dyn ItemLookup>,
}

impl TenantRanker {
    /// Create a ranker over an item lookup collaborator
    pub fn new(lookup: Arc<dyn ItemLookup>) -> Self {
        Self { lookup }
    }

    /// Rank every tenant owning at least one copy of the instance,
    /// best-first.
    ///
    /// Tenants whose items all lack a counted status still appear; they
    /// simply sort last. May be empty, never fails on an empty feed.
    pub async fn rank_tenants(
        &self,
        instance_id: InstanceId,
    ) -> Result<Vec<TenantId>, SelectionError> {
        let scores = self.rank_detailed(instance_id).await?;
        Ok(scores.into_iter().map(|score| score.tenant_id).collect())
    }

    /// Rank with full per-tenant scores, best-first
    pub async fn rank_detailed(
        &self,
        instance_id: InstanceId,
    ) -> Result<Vec<TenantScore>, SelectionError> {
        let items = self.lookup.fetch_items(instance_id).await?;
        let tally = tally::aggregate(&items);
        let scores = score_tenants(&tally);

        debug!(
            instance_id = %instance_id,
            items = items.len(),
            tenants = scores.len(),
            "Ranked candidate tenants"
        );

        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::tests::FixedLookup;
    use interlend_types::{Item, ItemStatus};
    use uuid::Uuid;

    fn item(tenant: &str, status: &str) -> Item {
        Item::new(Uuid::new_v4(), tenant, ItemStatus::from_label(status))
    }

    #[tokio::test]
    async fn test_rank_orders_by_tier_policy() {
        let ranker = TenantRanker::new(Arc::new(FixedLookup::new(vec![
            item("a", "Paged"),
            item("a", "Awaiting pickup"),
            item("a", "Awaiting delivery"),
            item("b", "Available"),
            item("c", "Checked out"),
            item("c", "In transit"),
        ])));

        let order = ranker.rank_tenants(Uuid::new_v4()).await.unwrap();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[tokio::test]
    async fn test_empty_feed_ranks_nothing() {
        let ranker = TenantRanker::new(Arc::new(FixedLookup::new(vec![])));

        let order = ranker.rank_tenants(Uuid::new_v4()).await.unwrap();
        assert!(order.is_empty());
    }

    #[tokio::test]
    async fn test_statusless_tenant_sorts_last_but_is_included() {
        let statusless = Item {
            id: Uuid::new_v4(),
            tenant_id: Some("z".to_string()),
            status: None,
        };
        let ranker = TenantRanker::new(Arc::new(FixedLookup::new(vec![
            item("a", "Paged"),
            statusless,
        ])));

        let order = ranker.rank_tenants(Uuid::new_v4()).await.unwrap();
        assert_eq!(order, vec!["a", "z"]);
    }

    #[tokio::test]
    async fn test_lookup_failure_propagates() {
        let ranker = TenantRanker::new(Arc::new(FixedLookup::failing()));

        let result = ranker.rank_tenants(Uuid::new_v4()).await;
        assert!(matches!(result, Err(SelectionError::LookupFailed(_, _))));
    }
}
