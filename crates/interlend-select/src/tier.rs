//! Status priority policy shared by the picker and the ranker
//!
//! The policy is an explicit ordered tier table rather than conditionals
//! scattered across the two strategies, so tier order and membership stay
//! auditable and the picker and ranker can never disagree on relative
//! tenant preference.

use std::cmp::Ordering;

use interlend_types::{ItemStatus, TenantId};
use serde::Serialize;

use crate::tally::{StatusCounts, StatusTally};

/// Priority tier of the routing policy, most preferred first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusTier {
    /// Items sitting on the shelf, ready to be paged
    Available,
    /// Items circulating and expected back: checked out or in transit
    InCirculation,
    /// Catch-all: any status, including unrecognized labels
    AnyStatus,
}

impl StatusTier {
    /// Fixed evaluation order of the policy
    pub const POLICY: [StatusTier; 3] = [Self::Available, Self::InCirculation, Self::AnyStatus];

    /// Whether a status belongs to this tier
    pub fn contains(&self, status: &ItemStatus) -> bool {
        match self {
            Self::Available => matches!(status, ItemStatus::Available),
            Self::InCirculation => {
                matches!(status, ItemStatus::CheckedOut | ItemStatus::InTransit)
            }
            Self::AnyStatus => true,
        }
    }
}

impl std::fmt::Display for StatusTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::InCirculation => write!(f, "in-circulation"),
            Self::AnyStatus => write!(f, "any-status"),
        }
    }
}

/// A tenant's standing under the tiered policy.
///
/// Ordering is best-first: descending available count, then descending
/// in-circulation count, then descending total count, then ascending tenant
/// id. The final ascending tenant id makes full ties deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantScore {
    /// Scored tenant
    pub tenant_id: TenantId,

    /// Tier-1 sum: items with status Available
    pub available: u64,

    /// Tier-2 sum: items checked out or in transit
    pub in_circulation: u64,

    /// Tier-3 sum: every counted status
    pub total: u64,
}

impl TenantScore {
    fn from_counts(tenant_id: TenantId, counts: &StatusCounts) -> Self {
        let mut score = Self {
            tenant_id,
            available: 0,
            in_circulation: 0,
            total: 0,
        };

        for (status, count) in counts {
            if StatusTier::Available.contains(status) {
                score.available += count;
            }
            if StatusTier::InCirculation.contains(status) {
                score.in_circulation += count;
            }
            score.total += count;
        }

        score
    }

    /// Sum of status counts falling in a tier
    pub fn tier_sum(&self, tier: StatusTier) -> u64 {
        match tier {
            StatusTier::Available => self.available,
            StatusTier::InCirculation => self.in_circulation,
            StatusTier::AnyStatus => self.total,
        }
    }

    /// Highest tier with a positive sum: the tier that justifies picking
    /// this tenant. `None` when the tenant has no counted status at all.
    pub fn matched_tier(&self) -> Option<StatusTier> {
        StatusTier::POLICY
            .iter()
            .copied()
            .find(|tier| self.tier_sum(*tier) > 0)
    }
}

impl Ord for TenantScore {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .available
            .cmp(&self.available)
            .then_with(|| other.in_circulation.cmp(&self.in_circulation))
            .then_with(|| other.total.cmp(&self.total))
            .then_with(|| self.tenant_id.cmp(&other.tenant_id))
    }
}

impl PartialOrd for TenantScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Score every tenant in the tally, best-first
pub fn score_tenants(tally: &StatusTally) -> Vec<TenantScore> {
    let mut scores: Vec<TenantScore> = tally
        .iter()
        .map(|(tenant, counts)| TenantScore::from_counts(tenant.clone(), counts))
        .collect();

    scores.sort();
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(tenant: &str, available: u64, in_circulation: u64, total: u64) -> TenantScore {
        TenantScore {
            tenant_id: tenant.to_string(),
            available,
            in_circulation,
            total,
        }
    }

    #[test]
    fn test_tier_membership() {
        assert!(StatusTier::Available.contains(&ItemStatus::Available));
        assert!(!StatusTier::Available.contains(&ItemStatus::CheckedOut));

        assert!(StatusTier::InCirculation.contains(&ItemStatus::CheckedOut));
        assert!(StatusTier::InCirculation.contains(&ItemStatus::InTransit));
        assert!(!StatusTier::InCirculation.contains(&ItemStatus::Paged));

        // Catch-all matches everything, recognized or not
        assert!(StatusTier::AnyStatus.contains(&ItemStatus::Paged));
        assert!(StatusTier::AnyStatus.contains(&ItemStatus::Other("Declared lost".to_string())));
    }

    #[test]
    fn test_available_dominates_other_tiers() {
        // One available copy beats a hundred circulating ones
        let a = score("a", 1, 0, 1);
        let b = score("b", 0, 100, 100);

        assert!(a < b, "available tier must dominate");
    }

    #[test]
    fn test_within_tier_majority_wins() {
        let a = score("a", 0, 3, 3);
        let b = score("b", 0, 4, 4);

        assert!(b < a);
    }

    #[test]
    fn test_total_breaks_circulation_tie() {
        let a = score("a", 0, 3, 3);
        let b = score("b", 0, 3, 10);

        assert!(b < a);
    }

    #[test]
    fn test_full_tie_resolved_by_tenant_id() {
        let a = score("a", 2, 1, 4);
        let b = score("b", 2, 1, 4);

        assert!(a < b, "full ties fall back to tenant id order");
    }

    #[test]
    fn test_matched_tier() {
        assert_eq!(score("a", 1, 2, 5).matched_tier(), Some(StatusTier::Available));
        assert_eq!(
            score("a", 0, 2, 5).matched_tier(),
            Some(StatusTier::InCirculation)
        );
        assert_eq!(score("a", 0, 0, 5).matched_tier(), Some(StatusTier::AnyStatus));
        assert_eq!(score("a", 0, 0, 0).matched_tier(), None);
    }

    #[test]
    fn test_score_tenants_orders_best_first() {
        let mut tally = StatusTally::new();
        tally.insert("a".to_string(), {
            let mut counts = StatusCounts::new();
            counts.insert(ItemStatus::Paged, 3);
            counts
        });
        tally.insert("b".to_string(), {
            let mut counts = StatusCounts::new();
            counts.insert(ItemStatus::Available, 1);
            counts
        });
        tally.insert("c".to_string(), {
            let mut counts = StatusCounts::new();
            counts.insert(ItemStatus::CheckedOut, 1);
            counts.insert(ItemStatus::InTransit, 1);
            counts
        });

        let scored = score_tenants(&tally);
        let order: Vec<&str> = scored
            .iter()
            .map(|s| s.tenant_id.as_str())
            .collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }
}
