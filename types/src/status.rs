//! Item circulation status labels

use serde::{Deserialize, Serialize};

/// Circulation status of an item, as reported by the owning tenant.
///
/// The item feed carries free-form labels; only a fixed subset participates
/// in the routing priority policy. Anything else is preserved verbatim as
/// `Other` so the catch-all tier can still count it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemStatus {
    /// On the shelf, ready to be paged
    Available,
    /// Loaned out to a patron
    CheckedOut,
    /// Moving between service points
    InTransit,
    /// Requested and being pulled from the shelf
    Paged,
    /// Held at a service point for a patron
    AwaitingPickup,
    /// Waiting to be routed to its pickup location
    AwaitingDelivery,
    /// Any label the policy does not recognize
    Other(String),
}

impl ItemStatus {
    /// Parse a wire label into a status
    pub fn from_label(label: &str) -> Self {
        match label {
            "Available" => Self::Available,
            "Checked out" => Self::CheckedOut,
            "In transit" => Self::InTransit,
            "Paged" => Self::Paged,
            "Awaiting pickup" => Self::AwaitingPickup,
            "Awaiting delivery" => Self::AwaitingDelivery,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire label for this status
    pub fn label(&self) -> &str {
        match self {
            Self::Available => "Available",
            Self::CheckedOut => "Checked out",
            Self::InTransit => "In transit",
            Self::Paged => "Paged",
            Self::AwaitingPickup => "Awaiting pickup",
            Self::AwaitingDelivery => "Awaiting delivery",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for ItemStatus {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<ItemStatus> for String {
    fn from(status: ItemStatus) -> Self {
        status.label().to_string()
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
