pub mod api;
pub mod errors;
pub mod store;
pub mod synthesis;

pub use api::{MockZoneApi, ZoneApi, ZoneIter};
pub use errors::{ErrorKind, Result, ZoneError};
pub use store::{RecordSetCollection, ZoneStore};
pub use synthesis::SoaTemplate;

/// Zone constants
pub mod constants {
    /// Zone every freshly initialized mock API starts with
    pub const DEFAULT_SEED_ZONE: &str = "denominator.io.";

    /// Type mnemonic of the start-of-authority record
    pub const SOA: &str = "SOA";

    /// Type mnemonic of the name server record
    pub const NS: &str = "NS";
}
