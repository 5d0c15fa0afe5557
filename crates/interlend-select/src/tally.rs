//! Per-tenant status tallies
//!
//! Built fresh for every selection call and discarded when it returns;
//! nothing here is persisted or shared.

use std::collections::{BTreeMap, HashSet};

use interlend_types::{Item, ItemId, ItemStatus, TenantId};
use tracing::trace;

/// Occurrence count of each status within one tenant
pub type StatusCounts = BTreeMap<ItemStatus, u64>;

/// Mapping from tenant to its status counts.
///
/// `BTreeMap` keeps tenant iteration order stable, which the documented
/// tenant-id tie-break relies on.
pub type StatusTally = BTreeMap<TenantId, StatusCounts>;

/// Group items by owning tenant and count status occurrences.
///
/// - Items without a tenant id (or with a blank one) are dropped; there is
///   no tenant to route to.
/// - Duplicate records for the same item id count once; the first
///   occurrence wins.
/// - Statuses are only counted when present. A tenant whose items all lack
///   a status still gets an entry, so the ranker can include it.
///
/// Never fails; an empty input yields an empty tally.
pub fn aggregate(items: &[Item]) -> StatusTally {
    let mut seen: HashSet<ItemId> = HashSet::new();
    let mut tally = StatusTally::new();

    for item in items {
        let tenant = match item.owning_tenant() {
            Some(tenant) => tenant,
            None => {
                trace!(item_id = %item.id, "Skipping item without owning tenant");
                continue;
            }
        };

        if !seen.insert(item.id) {
            trace!(item_id = %item.id, "Skipping duplicate item record");
            continue;
        }

        let counts = tally.entry(tenant.to_string()).or_default();
        if let Some(status) = &item.status {
            *counts.entry(status.clone()).or_insert(0) += 1;
        } else {
            trace!(item_id = %item.id, tenant_id = %tenant, "Item has no status");
        }
    }

    tally
}
