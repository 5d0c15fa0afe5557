//! Consortium membership directory
//!
//! Tracks the tenants participating in the consortium and how to reach them.
//! Routing decisions are made from item data alone; the directory is only
//! consulted afterwards, to resolve the chosen tenant's connection details.

use interlend_types::TenantId;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Participation status of a consortium member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TenantStatus {
    /// Member is participating and may receive requests
    Active,
    /// Member is temporarily excluded from fulfillment
    Suspended,
}

impl Default for TenantStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// A consortium member tenant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantEntry {
    /// Unique tenant identifier
    pub id: TenantId,

    /// Human-readable institution name
    pub name: String,

    /// Base URL of the tenant's own API, used when targeting it downstream
    pub base_url: String,

    /// Current participation status
    pub status: TenantStatus,
}

impl TenantEntry {
    /// Create a new active member entry
    pub fn new(id: impl Into<TenantId>, base_url: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            base_url: base_url.into(),
            status: TenantStatus::Active,
        }
    }

    /// Set the institution name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether the tenant may receive requests
    pub fn is_active(&self) -> bool {
        matches!(self.status, TenantStatus::Active)
    }
}

/// Directory of consortium member tenants
#[derive(Debug, Default)]
pub struct TenantDirectory {
    tenants: Arc<RwLock<HashMap<TenantId, TenantEntry>>>,
}

impl TenantDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            tenants: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a member, replacing any existing entry with the same id
    pub fn register(&self, entry: TenantEntry) {
        info!(
            tenant_id = %entry.id,
            base_url = %entry.base_url,
            "Registering consortium member"
        );

        let mut tenants = self.tenants.write();
        tenants.insert(entry.id.clone(), entry);
    }

    /// Remove a member
    pub fn unregister(&self, tenant_id: &str) {
        info!(tenant_id = %tenant_id, "Unregistering consortium member");
        let mut tenants = self.tenants.write();
        tenants.remove(tenant_id);
    }

    /// Update a member's participation status
    pub fn set_status(&self, tenant_id: &str, status: TenantStatus) {
        let mut tenants = self.tenants.write();
        if let Some(entry) = tenants.get_mut(tenant_id) {
            entry.status = status;
            debug!(
                tenant_id = %tenant_id,
                status = ?status,
                "Member status updated"
            );
        }
    }

    /// Look up a member by id
    pub fn get(&self, tenant_id: &str) -> Option<TenantEntry> {
        let tenants = self.tenants.read();
        tenants.get(tenant_id).cloned()
    }

    /// All registered members
    pub fn get_all(&self) -> Vec<TenantEntry> {
        let tenants = self.tenants.read();
        tenants.values().cloned().collect()
    }

    /// All active members
    pub fn active(&self) -> Vec<TenantEntry> {
        let tenants = self.tenants.read();
        tenants
            .values()
            .filter(|entry| entry.is_active())
            .cloned()
            .collect()
    }

    /// Whether a member is registered and active
    pub fn is_active(&self, tenant_id: &str) -> bool {
        let tenants = self.tenants.read();
        tenants
            .get(tenant_id)
            .map(TenantEntry::is_active)
            .unwrap_or(false)
    }

    /// Number of registered members
    pub fn count(&self) -> usize {
        let tenants = self.tenants.read();
        tenants.len()
    }
}
