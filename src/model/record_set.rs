use super::rdata::{AData, NsData, RData, SoaData};
use crate::zone::{Result, ZoneError};
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// All records sharing a name and type, immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecordSet {
    name: String,
    #[serde(rename = "type")]
    rtype: String,
    ttl: Option<u32>,
    records: Vec<RData>,
}

impl ResourceRecordSet {
    pub fn builder() -> ResourceRecordSetBuilder {
        ResourceRecordSetBuilder::default()
    }

    /// Fully-qualified owner name, with trailing dot
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type mnemonic shared by every record in the set
    pub fn rtype(&self) -> &str {
        &self.rtype
    }

    pub fn ttl(&self) -> Option<u32> {
        self.ttl
    }

    pub fn records(&self) -> &[RData] {
        &self.records
    }
}

/// Renders `<name> <type> <ttl> [<rdata>, ...]`, with `-` for an absent TTL.
///
/// This rendering is the record set's storage identity; see [`crate::ordering`].
impl fmt::Display for ResourceRecordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.name, self.rtype)?;
        match self.ttl {
            Some(ttl) => write!(f, "{} [", ttl)?,
            None => write!(f, "- [")?,
        }
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", record)?;
        }
        write!(f, "]")
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResourceRecordSetBuilder {
    name: Option<String>,
    rtype: Option<String>,
    ttl: Option<u32>,
    records: Vec<RData>,
}

impl ResourceRecordSetBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn rtype(mut self, rtype: impl Into<String>) -> Self {
        self.rtype = Some(rtype.into());
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn add(mut self, record: impl Into<RData>) -> Self {
        self.records.push(record.into());
        self
    }

    pub fn add_all<I>(mut self, records: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<RData>,
    {
        self.records.extend(records.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<ResourceRecordSet> {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ZoneError::InvalidRecordSet("name is required".to_string()))?;
        let rtype = self
            .rtype
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ZoneError::InvalidRecordSet(format!("type is required for {}", name)))?;

        if self.records.is_empty() {
            return Err(ZoneError::InvalidRecordSet(format!(
                "{} {} has no records",
                name, rtype
            )));
        }

        if let Some(mismatch) = self.records.iter().find(|r| r.rtype() != rtype) {
            return Err(ZoneError::InvalidRecordSet(format!(
                "{} record in {} {} set",
                mismatch.rtype(),
                name,
                rtype
            )));
        }

        Ok(ResourceRecordSet {
            name,
            rtype,
            ttl: self.ttl,
            records: self.records,
        })
    }
}

fn single(name: &str, ttl: u32, record: RData) -> ResourceRecordSet {
    ResourceRecordSet {
        name: name.to_string(),
        rtype: record.rtype().to_string(),
        ttl: Some(ttl),
        records: vec![record],
    }
}

/// SOA record set holding a single record
pub fn soa(name: &str, ttl: u32, data: SoaData) -> ResourceRecordSet {
    single(name, ttl, RData::Soa(data))
}

/// NS record set holding a single name server
pub fn ns(name: &str, ttl: u32, nsdname: &str) -> ResourceRecordSet {
    single(
        name,
        ttl,
        RData::Ns(NsData {
            nsdname: nsdname.to_string(),
        }),
    )
}

/// A record set holding a single address
pub fn a(name: &str, ttl: u32, address: Ipv4Addr) -> ResourceRecordSet {
    single(name, ttl, RData::A(AData { address }))
}
