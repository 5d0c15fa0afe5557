//! Routing facade
//!
//! Combines the picker, the ranker and the consortium directory into the
//! decision surface the request-routing orchestrator calls: pick the tenant
//! for the primary request, or produce an ordered fallback chain.

use std::sync::Arc;

use interlend_core::TenantDirectory;
use interlend_types::{InstanceId, TenantId};
use serde::Serialize;
use tracing::warn;

use crate::error::SelectionError;
use crate::lookup::ItemLookup;
use crate::picker::TenantPicker;
use crate::ranker::TenantRanker;
use crate::tier::StatusTier;

/// Routing decision for a title-level request
#[derive(Debug, Clone, Serialize)]
pub struct RoutingDecision {
    /// Instance the request was placed against
    pub instance_id: InstanceId,

    /// Tenant that should receive the primary request
    pub tenant_id: TenantId,

    /// Tier that justified the pick
    pub matched_tier: StatusTier,

    /// Target tenant's API base URL, when the tenant is registered in the
    /// consortium directory
    pub endpoint: Option<String>,
}

/// Tenant selection entry point for the surrounding service
pub struct SelectionService {
    picker: TenantPicker,
    ranker: TenantRanker,
    directory: Arc<TenantDirectory>,
}

impl SelectionService {
    /// Create the service over a lookup collaborator and the consortium
    /// directory
    pub fn new(lookup: Arc<dyn ItemLookup>, directory: Arc<TenantDirectory>) -> Self {
        Self {
            picker: TenantPicker::new(lookup.clone()),
            ranker: TenantRanker::new(lookup),
            directory,
        }
    }

    /// Decide which tenant should receive the primary request for an
    /// instance.
    ///
    /// `Ok(None)` means no tenant qualifies. Selection itself never
    /// consults the directory; it is only used here to resolve the chosen
    /// tenant's connection details.
    pub async fn route_primary(
        &self,
        instance_id: InstanceId,
    ) -> Result<Option<RoutingDecision>, SelectionError> {
        let decision = match self.picker.pick_detailed(instance_id).await? {
            Some(decision) => decision,
            None => return Ok(None),
        };

        let entry = self.directory.get(&decision.score.tenant_id);
        if entry.is_none() {
            warn!(
                instance_id = %instance_id,
                tenant_id = %decision.score.tenant_id,
                "Picked tenant is not registered in the consortium directory"
            );
        }

        Ok(Some(RoutingDecision {
            instance_id,
            tenant_id: decision.score.tenant_id,
            matched_tier: decision.matched_tier,
            endpoint: entry.map(|entry| entry.base_url),
        }))
    }

    /// Ordered fallback chain of candidate tenants for an instance
    pub async fn fallback_order(
        &self,
        instance_id: InstanceId,
    ) -> Result<Vec<TenantId>, SelectionError> {
        self.ranker.rank_tenants(instance_id).await
    }
}
