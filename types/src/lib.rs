//! Interlend Types - shared domain model
//!
//! Identifiers and item records used across the interlend crates. These are
//! wire-facing: `Item` deserializes directly from the consortium-wide item
//! search feed.

pub mod item;
pub mod status;

pub use item::{InstanceId, Item, ItemId, TenantId};
pub use status::ItemStatus;
