//! Error types for the selection core

use interlend_types::InstanceId;
use thiserror::Error;

/// Selection error types
///
/// "No eligible tenant" is not an error; the picker and ranker surface it as
/// an empty result and the caller decides how to react.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The remote item lookup failed. No tenant decision can be made
    /// without item data, so this propagates to the caller.
    #[error("Item lookup failed for instance {0}: {1}")]
    LookupFailed(InstanceId, String),
}
