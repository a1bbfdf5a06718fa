pub mod rdata;
pub mod record_set;
pub mod zone;

pub use rdata::{AData, AaaaData, CnameData, MxData, NsData, RData, SoaData, TxtData};
pub use record_set::{ResourceRecordSet, ResourceRecordSetBuilder};
pub use zone::Zone;
