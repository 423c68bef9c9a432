//! Line-oriented extraction engine.
//!
//! This is deliberately not a C parser: lines are classified by prefix
//! match against lexical markers, and region boundaries are tracked with a
//! hand-rolled brace counter (keyword strategy) or explicit end markers
//! (marker strategy). Extracted declarations are never validated.

pub mod classify;
pub mod guard;
pub mod region;
pub mod transform;

pub use classify::{Classified, LineKind, classify};
pub use guard::{compose_header, guard_token};
pub use region::RegionTracker;
pub use transform::{TransformedHeader, transform};
