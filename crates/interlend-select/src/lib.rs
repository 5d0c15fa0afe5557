//! Interlend Select - cross-tenant routing core
//!
//! Decides which tenant of a library consortium should fulfill a
//! title-level request, based on the distribution of item availability
//! statuses across tenants.
//!
//! # Architecture
//!
//! ```text
//! InstanceId
//!     │
//!     ▼
//! ┌─────────────────────────┐
//! │      ItemLookup         │  one remote call: every copy, every tenant
//! └───────────┬─────────────┘
//!             ▼
//! ┌─────────────────────────┐
//! │     Status tally        │  group by tenant, count statuses
//! └───────────┬─────────────┘
//!             ▼
//! ┌─────────────────────────┐
//! │      Tier policy        │  Available, then CheckedOut/InTransit,
//! └───────────┬─────────────┘  then any status
//!       ┌─────┴──────┐
//!       ▼            ▼
//! TenantPicker  TenantRanker
//! (best single) (all, best-first)
//! ```
//!
//! Both strategies consume one shared scoring function, so they can never
//! disagree on relative tenant preference. The whole pipeline is a pure
//! computation over data fetched once per call; nothing is cached or
//! persisted between calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use interlend_select::{SelectionService, TenantPicker};
//!
//! let picker = TenantPicker::new(lookup);
//!
//! // At most one "best" tenant
//! let tenant = picker.pick_tenant(instance_id).await?;
//!
//! // Or the full fallback chain
//! let service = SelectionService::new(lookup, directory);
//! let order = service.fallback_order(instance_id).await?;
//! ```

// Core modules
mod error;
mod lookup;
pub mod tally;
pub mod tier;

// Selection strategies
mod picker;
mod ranker;

// Routing facade
mod service;

// Re-exports: Error types
pub use error::SelectionError;

// Re-exports: Collaborator boundary
pub use lookup::ItemLookup;

// Re-exports: Aggregation
pub use tally::{aggregate, StatusCounts, StatusTally};

// Re-exports: Tier policy and scoring
pub use tier::{score_tenants, StatusTier, TenantScore};

// Re-exports: Strategies and facade
pub use picker::{PickDecision, TenantPicker};
pub use ranker::TenantRanker;
pub use service::{RoutingDecision, SelectionService};
