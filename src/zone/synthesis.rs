//! Mandatory SOA and NS record sets for a newly created zone

use super::store::RecordSetCollection;
use crate::model::{ResourceRecordSet, SoaData, record_set};
use serde::{Deserialize, Serialize};

/// Values used when synthesizing a zone's apex records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoaTemplate {
    /// TTL of the SOA record set
    pub soa_ttl: u32,
    /// TTL of the NS record set
    pub ns_ttl: u32,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
    /// Prepended to the zone name to form the primary name server
    pub primary_prefix: String,
    /// Prepended to the zone name to form the admin mailbox
    pub admin_prefix: String,
}

impl Default for SoaTemplate {
    fn default() -> Self {
        Self {
            soa_ttl: 3600,
            ns_ttl: 86400,
            serial: 1,
            refresh: 3600,
            retry: 600,
            expire: 604800, // 1 week
            minimum: 86400,
            primary_prefix: "ns1.".to_string(),
            admin_prefix: "admin.".to_string(),
        }
    }
}

impl SoaTemplate {
    fn primary(&self, zone: &str) -> String {
        format!("{}{}", self.primary_prefix, zone)
    }

    /// SOA record set owned by the zone apex
    pub fn soa_record_set(&self, zone: &str) -> ResourceRecordSet {
        let data = SoaData {
            mname: self.primary(zone),
            rname: format!("{}{}", self.admin_prefix, zone),
            serial: self.serial,
            refresh: self.refresh,
            retry: self.retry,
            expire: self.expire,
            minimum: self.minimum,
        };
        record_set::soa(zone, self.soa_ttl, data)
    }

    /// NS record set pointing at the primary name server
    pub fn ns_record_set(&self, zone: &str) -> ResourceRecordSet {
        record_set::ns(zone, self.ns_ttl, &self.primary(zone))
    }

    /// A fresh collection holding the zone's SOA and NS record sets
    pub fn seed(&self, zone: &str) -> RecordSetCollection {
        let collection = RecordSetCollection::new();
        collection.insert(self.soa_record_set(zone));
        collection.insert(self.ns_record_set(zone));
        collection
    }
}
