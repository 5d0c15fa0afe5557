//! Single-tenant picker
//!
//! Answers "is there a single good tenant for this instance?". Short-circuits
//! to at most one tenant; callers needing an ordered fallback chain use the
//! ranker instead.

use std::sync::Arc;

use interlend_types::{InstanceId, TenantId};
use tracing::{debug, info};

use crate::error::SelectionError;
use crate::lookup::ItemLookup;
use crate::tally;
use crate::tier::{score_tenants, StatusTier, TenantScore};

/// Outcome of a detailed pick
#[derive(Debug, Clone)]
pub struct PickDecision {
    /// Winning tenant's score under the tiered policy
    pub score: TenantScore,

    /// Highest tier in which the winner had a positive count
    pub matched_tier: StatusTier,
}

/// Picks the single tenant most likely to fulfill a title-level request
pub struct TenantPicker {
    lookup: Arc<dyn ItemLookup>,
}

impl TenantPicker {
    /// Create a picker over an item lookup collaborator
    pub fn new(lookup: Arc<dyn ItemLookup>) -> Self {
        Self { lookup }
    }

    /// Pick the best tenant for an instance, if any tenant qualifies.
    ///
    /// A tenant qualifies when it owns at least one item with a counted
    /// status. `Ok(None)` means no tenant qualifies; that is a legitimate
    /// outcome, not an error.
    pub async fn pick_tenant(
        &self,
        instance_id: InstanceId,
    ) -> Result<Option<TenantId>, SelectionError> {
        let decision = self.pick_detailed(instance_id).await?;
        Ok(decision.map(|d| d.score.tenant_id))
    }

    /// Pick the best tenant along with the tier that justified the decision
    pub async fn pick_detailed(
        &self,
        instance_id: InstanceId,
    ) -> Result<Option<PickDecision>, SelectionError> {
        let items = self.lookup.fetch_items(instance_id).await?;
        let tally = tally::aggregate(&items);

        debug!(
            instance_id = %instance_id,
            items = items.len(),
            tenants = tally.len(),
            "Aggregated item feed"
        );

        // Scores come back best-first; skip tenants with no counted status,
        // they have no positive sum in any tier.
        let best = score_tenants(&tally)
            .into_iter()
            .find(|score| score.total > 0);

        match best {
            Some(score) => {
                // total > 0 guarantees at least the catch-all tier matched
                let matched_tier = score.matched_tier().unwrap_or(StatusTier::AnyStatus);

                info!(
                    instance_id = %instance_id,
                    tenant_id = %score.tenant_id,
                    tier = %matched_tier,
                    available = score.available,
                    in_circulation = score.in_circulation,
                    total = score.total,
                    "Picked tenant"
                );

                Ok(Some(PickDecision {
                    score,
                    matched_tier,
                }))
            }
            None => {
                info!(instance_id = %instance_id, "No eligible tenant for instance");
                Ok(None)
            }
        }
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
    async fn test_available_beats_everything() {
        let picker = TenantPicker::new(Arc::new(FixedLookup::new(vec![
            item("a", "Paged"),
            item("b", "Available"),
        ])));

        let picked = picker.pick_tenant(Uuid::new_v4()).await.unwrap();
        assert_eq!(picked.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_no_items_picks_nothing() {
        let picker = TenantPicker::new(Arc::new(FixedLookup::new(vec![])));

        let picked = picker.pick_tenant(Uuid::new_v4()).await.unwrap();
        assert_eq!(picked, None);
    }

    #[tokio::test]
    async fn test_matched_tier_reported() {
        let picker = TenantPicker::new(Arc::new(FixedLookup::new(vec![
            item("a", "Checked out"),
            item("a", "In transit"),
        ])));

        let decision = picker.pick_detailed(Uuid::new_v4()).await.unwrap().unwrap();
        assert_eq!(decision.score.tenant_id, "a");
        assert_eq!(decision.matched_tier, StatusTier::InCirculation);
    }

    #[tokio::test]
    async fn test_lookup_failure_propagates() {
        let picker = TenantPicker::new(Arc::new(FixedLookup::failing()));

        let result = picker.pick_tenant(Uuid::new_v4()).await;
        assert!(matches!(result, Err(SelectionError::LookupFailed(_, _))));
    }
}
