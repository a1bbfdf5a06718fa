//! Zone operations exposed to callers, and the in-memory backend

use super::store::{Entries, RecordSetCollection, ZoneStore};
use super::synthesis::SoaTemplate;
use super::{Result, ZoneError, constants};
use crate::config::MockConfig;
use crate::filter::{filter, name_and_type_equal_to, name_equal_to};
use crate::model::{RData, ResourceRecordSet, Zone};
use std::iter::FusedIterator;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Zone operations every DNS provider backend implements
pub trait ZoneApi: Send + Sync {
    /// Create an empty zone named `name`, seeded with its SOA and NS records
    fn create(&self, name: &str) -> Result<()>;

    /// Single-pass iteration over all zones
    fn iter(&self) -> Box<dyn Iterator<Item = Result<Zone>> + '_>;

    /// Zones whose name equals `name`
    fn iter_by_name(&self, name: &str) -> Box<dyn Iterator<Item = Result<Zone>> + '_> {
        Box::new(filter(self.iter(), name_equal_to(name)))
    }
}

/// In-memory [`ZoneApi`] backed by a [`ZoneStore`]
pub struct MockZoneApi {
    store: Arc<ZoneStore>,
    template: SoaTemplate,
}

impl MockZoneApi {
    /// Wrap `store` and seed it with the default "denominator.io." zone
    pub fn new(store: Arc<ZoneStore>) -> Result<Self> {
        Self::with_config(store, &MockConfig::default())
    }

    pub fn with_config(store: Arc<ZoneStore>, config: &MockConfig) -> Result<Self> {
        let api = Self {
            store,
            template: config.soa.clone(),
        };

        if let Some(seed) = &config.seed_zone {
            api.create(seed)?;
        }

        info!("Mock zone API ready with {} zone(s)", api.store.len());
        Ok(api)
    }

    pub fn store(&self) -> &Arc<ZoneStore> {
        &self.store
    }

    /// Record sets of `zone` in canonical order, or `None` if no such zone
    pub fn record_sets(&self, zone: &str) -> Option<Vec<ResourceRecordSet>> {
        self.store.get(zone).map(|collection| collection.iter().collect())
    }
}

impl ZoneApi for MockZoneApi {
    fn create(&self, name: &str) -> Result<()> {
        // Built in full before publishing so readers never see a partial zone
        let collection = self.template.seed(name);
        self.store.publish(name, collection)?;
        info!("Created zone: {}", name);
        Ok(())
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Result<Zone>> + '_> {
        Box::new(ZoneIter {
            entries: self.store.entries(),
        })
    }
}

/// Derives a [`Zone`] per stored entry from its SOA record set
pub struct ZoneIter<'a> {
    entries: Entries<'a>,
}

impl Iterator for ZoneIter<'_> {
    type Item = Result<Zone>;

    fn next(&mut self) -> Option<Self::Item> {
        let (name, collection) = self.entries.next()?;
        Some(derive_zone(&name, &collection))
    }
}

impl FusedIterator for ZoneIter<'_> {}

fn derive_zone(name: &str, collection: &RecordSetCollection) -> Result<Zone> {
    let mut apex_soa = filter(collection.iter(), name_and_type_equal_to(name, constants::SOA));
    let soa = apex_soa.next();

    let Some(soa_data) = soa
        .as_ref()
        .and_then(|rrset| rrset.records().first())
        .and_then(RData::as_soa)
    else {
        error!("SOA record for zone {} was not present", name);
        return Err(ZoneError::MissingSoa(name.to_string()));
    };

    if apex_soa.next().is_some() {
        error!("Zone {} contains duplicate SOA records", name);
        return Err(ZoneError::DuplicateSoa(name.to_string()));
    }

    debug!("Derived zone {} from SOA", name);
    Ok(Zone::from_soa(name, soa_data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SoaData, record_set};
    use crate::zone::ErrorKind;

    fn api() -> MockZoneApi {
        MockZoneApi::new(Arc::new(ZoneStore::new())).unwrap()
    }

    #[test]
    fn test_seeded_zone() {
        let zones: Vec<Zone> = api().iter().collect::<Result<_>>().unwrap();

        assert_eq!(
            zones,
            vec![Zone {
                name: "denominator.io.".to_string(),
                id: "denominator.io.".to_string(),
                ttl: 86400,
                email: "admin.denominator.io.".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_soa_is_consistency_error() {
        let api = api();
        let broken = RecordSetCollection::new();
        broken.insert(record_set::ns("broken.example.", 86400, "ns1.broken.example."));
        api.store().publish("broken.example.", broken).unwrap();

        let results: Vec<Result<Zone>> = api.iter().collect();
        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0],
            Err(ZoneError::MissingSoa("broken.example.".to_string()))
        );
        assert_eq!(results[1].as_ref().unwrap().name, "denominator.io.");

        // Filtering by another name still surfaces the failure
        let by_name: Vec<Result<Zone>> = api.iter_by_name("denominator.io.").collect();
        assert_eq!(by_name.len(), 2);
        assert!(by_name[0].is_err());
    }

    #[test]
    fn test_second_apex_soa_is_consistency_error() {
        let api = api();
        let collection = api.store().get("denominator.io.").unwrap();

        let replacement = SoaData::builder()
            .mname("ns1.denominator.io.")
            .rname("other.denominator.io.")
            .serial(2)
            .refresh(3600)
            .retry(600)
            .expire(604800)
            .minimum(5)
            .build()
            .unwrap();
        assert!(collection.insert(record_set::soa("denominator.io.", 1000, replacement)));

        let results: Vec<Result<Zone>> = api.iter().collect();
        assert_eq!(
            results,
            vec![Err(ZoneError::DuplicateSoa("denominator.io.".to_string()))]
        );
        assert_eq!(results[0].as_ref().unwrap_err().kind(), ErrorKind::Consistency);
    }

    #[test]
    fn test_soa_must_be_at_apex() {
        let api = api();
        let misplaced = RecordSetCollection::new();
        misplaced.insert(SoaTemplate::default().soa_record_set("other.example."));
        api.store().publish("zone.example.", misplaced).unwrap();

        let err = api
            .iter_by_name("zone.example.")
            .find(|r| r.is_err())
            .unwrap()
            .unwrap_err();
        assert_eq!(err, ZoneError::MissingSoa("zone.example.".to_string()));
    }

    #[test]
    fn test_no_seed_zone() {
        let config = MockConfig {
            seed_zone: None,
            ..MockConfig::default()
        };
        let api = MockZoneApi::with_config(Arc::new(ZoneStore::new()), &config).unwrap();
        assert_eq!(api.iter().count(), 0);
    }

    #[test]
    fn test_record_sets_unknown_zone() {
        assert!(api().record_sets("missing.example.").is_none());
    }
}
