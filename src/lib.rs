//! Provider-agnostic DNS zones and resource record sets.
//!
//! [`zone::ZoneApi`] is the surface callers program against; [`zone::MockZoneApi`]
//! is the in-memory reference backend whose behavior real providers are tested
//! against.

pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod ordering;
pub mod zone;

pub use config::MockConfig;
pub use model::{ResourceRecordSet, Zone};
pub use zone::{MockZoneApi, ZoneApi, ZoneError, ZoneStore};
