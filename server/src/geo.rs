// server/src/geo.rs

//! ip-api.com client used by the visitor log.

use std::net::IpAddr;
use std::time::Duration;

use anyhow::{bail, Context};
use async_trait::async_trait;
use kennel::{GeoLocation, GeoLocator};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct IpApiResponse {
  status: String,
  #[serde(default)]
  message: Option<String>,
  #[serde(default)]
  country: Option<String>,
  #[serde(default)]
  city: Option<String>,
}

pub struct IpApiLocator {
  client: reqwest::Client,
  base_url: String,
}

impl IpApiLocator {
  pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .context("building geolocation HTTP client")?;
    Ok(Self {
      client,
      base_url: base_url.into(),
    })
  }
}

#[async_trait]
impl GeoLocator for IpApiLocator {
  async fn locate(&self, ip: IpAddr) -> anyhow::Result<GeoLocation> {
    let url = format!("{}/{}", self.base_url, ip);
    let response = self
      .client
      .get(&url)
      .query(&[("fields", "status,message,country,city")])
      .send()
      .await
      .with_context(|| format!("requesting {}", url))?
      .error_for_status()?;

    let body: IpApiResponse = response.json().await.context("decoding geolocation response")?;
    if body.status != "success" {
      bail!(
        "geolocation lookup for {} failed: {}",
        ip,
        body.message.as_deref().unwrap_or("no reason given")
      );
    }

    debug!(%ip, country = ?body.country, city = ?body.city, "Resolved client location.");
    Ok(GeoLocation {
      country: body.country.filter(|c| !c.is_empty()),
      city: body.city.filter(|c| !c.is_empty()),
    })
  }
}
