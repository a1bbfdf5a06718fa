use super::rdata::SoaData;
use serde::{Deserialize, Serialize};

/// A zone as seen by callers, derived from its SOA record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Fully-qualified zone name, with trailing dot
    pub name: String,
    /// Provider identifier; the name itself for the in-memory backend
    pub id: String,
    /// Default TTL, taken from the SOA minimum
    pub ttl: u32,
    /// Administrative contact, taken from the SOA rname
    pub email: String,
}

impl Zone {
    pub fn from_soa(name: &str, soa: &SoaData) -> Self {
        Self {
            name: name.to_string(),
            id: name.to_string(),
            ttl: soa.minimum,
            email: soa.rname.clone(),
        }
    }
}
