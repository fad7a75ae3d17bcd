// core/src/geo.rs

//! Geolocation collaborator used by the visitor log.

use std::net::IpAddr;

use async_trait::async_trait;

pub use crate::models::GeoLocation;

/// Resolves an address to a coarse location. Failures are expected and are
/// absorbed by the caller.
#[async_trait]
pub trait GeoLocator: Send + Sync {
  async fn locate(&self, ip: IpAddr) -> anyhow::Result<GeoLocation>;
}

/// Used when lookups are switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLocator;

#[async_trait]
impl GeoLocator for NoopLocator {
  async fn locate(&self, _ip: IpAddr) -> anyhow::Result<GeoLocation> {
    Ok(GeoLocation::unknown())
  }
}

/// Whether an external lookup could say anything about this address.
pub fn is_public(ip: &IpAddr) -> bool {
  match ip {
    IpAddr::V4(v4) => {
      !(v4.is_loopback() || v4.is_private() || v4.is_link_local() || v4.is_unspecified() || v4.is_broadcast())
    }
    IpAddr::V6(v6) => {
      if let Some(mapped) = v6.to_ipv4_mapped() {
        return is_public(&IpAddr::V4(mapped));
      }
      let first = v6.segments()[0];
      let unique_local = first & 0xfe00 == 0xfc00;
      let link_local = first & 0xffc0 == 0xfe80;
      !(v6.is_loopback() || v6.is_unspecified() || unique_local || link_local)
    }
  }
}
