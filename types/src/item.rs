//! Items and the identifiers they carry

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::status::ItemStatus;

/// Identifier of a logical title shared across the consortium
pub type InstanceId = Uuid;

/// Identifier of a physical copy
pub type ItemId = Uuid;

/// Identifier of an independently administered tenant
pub type TenantId = String;

/// A physical copy of an instance, as reported by the remote item feed.
///
/// The feed is untrusted: tenant and status may be absent, and the same item
/// may appear more than once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Item identity, used to deduplicate the feed
    pub id: ItemId,

    /// Owning tenant; items without one cannot be routed to
    #[serde(default)]
    pub tenant_id: Option<TenantId>,

    /// Circulation status; items without one carry no tally weight
    #[serde(default)]
    pub status: Option<ItemStatus>,
}

impl Item {
    /// Create an item owned by a tenant with a known status
    pub fn new(id: ItemId, tenant_id: impl Into<TenantId>, status: ItemStatus) -> Self {
        Self {
            id,
            tenant_id: Some(tenant_id.into()),
            status: Some(status),
        }
    }

    /// Owning tenant, treating a blank tenant id the same as a missing one
    pub fn owning_tenant(&self) -> Option<&str> {
        self.tenant_id
            .as_deref()
            .map(str::trim)
            .filter(|tenant| !tenant.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_tenant_treated_as_missing() {
        let mut item = Item::new(Uuid::new_v4(), "tenant-a", ItemStatus::Available);
        assert_eq!(item.owning_tenant(), Some("tenant-a"));

        item.tenant_id = Some("   ".to_string());
        assert_eq!(item.owning_tenant(), None);

        item.tenant_id = None;
        assert_eq!(item.owning_tenant(), None);
    }

    #[test]
    fn test_deserialize_feed_record() {
        let json = r#"{
            "id": "7a5abf0e-cb5c-4b4f-9454-e21b2ba1e9b6",
            "tenantId": "tenant-a",
            "status": "Checked out"
        }"#;

        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.owning_tenant(), Some("tenant-a"));
        assert_eq!(item.status, Some(ItemStatus::CheckedOut));
    }

    #[test]
    fn test_deserialize_sparse_feed_record() {
        let json = r#"{"id": "7a5abf0e-cb5c-4b4f-9454-e21b2ba1e9b6"}"#;

        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.tenant_id, None);
        assert_eq!(item.status, None);
    }
}
