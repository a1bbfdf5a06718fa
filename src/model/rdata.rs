//! Typed record data carried by a [`ResourceRecordSet`](super::ResourceRecordSet).

use crate::zone::{Result, ZoneError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Start of authority data (RFC 1035 section 3.3.13)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoaData {
    /// Primary name server for the zone
    pub mname: String,
    /// Mailbox of the responsible person, encoded as a domain name
    pub rname: String,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    /// Negative caching TTL, also used as the zone's default TTL
    pub minimum: u32,
}

impl SoaData {
    pub fn builder() -> SoaDataBuilder {
        SoaDataBuilder::default()
    }
}

/// Builder for [`SoaData`]; every field is required
#[derive(Debug, Clone, Default)]
pub struct SoaDataBuilder {
    mname: Option<String>,
    rname: Option<String>,
    serial: Option<u32>,
    refresh: Option<u32>,
    retry: Option<u32>,
    expire: Option<u32>,
    minimum: Option<u32>,
}

impl SoaDataBuilder {
    pub fn mname(mut self, mname: impl Into<String>) -> Self {
        self.mname = Some(mname.into());
        self
    }

    pub fn rname(mut self, rname: impl Into<String>) -> Self {
        self.rname = Some(rname.into());
        self
    }

    pub fn serial(mut self, serial: u32) -> Self {
        self.serial = Some(serial);
        self
    }

    pub fn refresh(mut self, refresh: u32) -> Self {
        self.refresh = Some(refresh);
        self
    }

    pub fn retry(mut self, retry: u32) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn expire(mut self, expire: u32) -> Self {
        self.expire = Some(expire);
        self
    }

    pub fn minimum(mut self, minimum: u32) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn build(self) -> Result<SoaData> {
        fn required<T>(value: Option<T>, field: &str) -> Result<T> {
            value.ok_or_else(|| ZoneError::InvalidRecordData(format!("SOA {} is required", field)))
        }

        Ok(SoaData {
            mname: required(self.mname, "mname")?,
            rname: required(self.rname, "rname")?,
            serial: required(self.serial, "serial")?,
            refresh: required(self.refresh, "refresh")?,
            retry: required(self.retry, "retry")?,
            expire: required(self.expire, "expire")?,
            minimum: required(self.minimum, "minimum")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NsData {
    pub nsdname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AData {
    pub address: Ipv4Addr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AaaaData {
    pub address: Ipv6Addr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CnameData {
    pub cname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MxData {
    pub preference: u16,
    pub exchange: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxtData {
    pub txtdata: String,
}

/// One record's worth of typed data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum RData {
    #[serde(rename = "SOA")]
    Soa(SoaData),
    #[serde(rename = "NS")]
    Ns(NsData),
    A(AData),
    #[serde(rename = "AAAA")]
    Aaaa(AaaaData),
    #[serde(rename = "CNAME")]
    Cname(CnameData),
    #[serde(rename = "MX")]
    Mx(MxData),
    #[serde(rename = "TXT")]
    Txt(TxtData),
}

impl RData {
    /// Type mnemonic of this record, e.g. "SOA"
    pub fn rtype(&self) -> &'static str {
        match self {
            Self::Soa(_) => "SOA",
            Self::Ns(_) => "NS",
            Self::A(_) => "A",
            Self::Aaaa(_) => "AAAA",
            Self::Cname(_) => "CNAME",
            Self::Mx(_) => "MX",
            Self::Txt(_) => "TXT",
        }
    }

    pub fn as_soa(&self) -> Option<&SoaData> {
        match self {
            Self::Soa(soa) => Some(soa),
            _ => None,
        }
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Soa(soa) => write!(
                f,
                "{} {} {} {} {} {} {}",
                soa.mname, soa.rname, soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum
            ),
            Self::Ns(ns) => write!(f, "{}", ns.nsdname),
            Self::A(a) => write!(f, "{}", a.address),
            Self::Aaaa(aaaa) => write!(f, "{}", aaaa.address),
            Self::Cname(cname) => write!(f, "{}", cname.cname),
            Self::Mx(mx) => write!(f, "{} {}", mx.preference, mx.exchange),
            Self::Txt(txt) => write!(f, "\"{}\"", txt.txtdata),
        }
    }
}

impl From<SoaData> for RData {
    fn from(data: SoaData) -> Self {
        Self::Soa(data)
    }
}

impl From<NsData> for RData {
    fn from(data: NsData) -> Self {
        Self::Ns(data)
    }
}

impl From<AData> for RData {
    fn from(data: AData) -> Self {
        Self::A(data)
    }
}

impl From<AaaaData> for RData {
    fn from(data: AaaaData) -> Self {
        Self::Aaaa(data)
    }
}

impl From<CnameData> for RData {
    fn from(data: CnameData) -> Self {
        Self::Cname(data)
    }
}

impl From<MxData> for RData {
    fn from(data: MxData) -> Self {
        Self::Mx(data)
    }
}

impl From<TxtData> for RData {
    fn from(data: TxtData) -> Self {
        Self::Txt(data)
    }
}
