// core/src/models/visitor.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_PAGE: &str = "/";

/// One logged inbound request. Created once, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
  pub id: Uuid,
  pub ip_address: String,
  pub user_agent: Option<String>,
  pub country: Option<String>,
  pub city: Option<String>,
  pub visit_time: DateTime<Utc>,
  pub page_visited: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoLocation {
  pub country: Option<String>,
  pub city: Option<String>,
}

impl GeoLocation {
  pub fn unknown() -> Self {
    Self::default()
  }
}

#[derive(Debug, Clone)]
pub struct NewVisit {
  pub ip_address: String,
  pub user_agent: Option<String>,
  pub page_visited: String,
  pub location: GeoLocation,
}

impl NewVisit {
  pub fn new(ip_address: impl Into<String>, user_agent: Option<String>, path: &str) -> Self {
    let page_visited = if path.is_empty() { DEFAULT_PAGE } else { path };
    Self {
      ip_address: ip_address.into(),
      user_agent: user_agent.filter(|ua| !ua.is_empty()),
      page_visited: page_visited.to_string(),
      location: GeoLocation::unknown(),
    }
  }

  pub fn located(mut self, location: GeoLocation) -> Self {
    self.location = location;
    self
  }

  pub fn into_visitor(self, id: Uuid, visit_time: DateTime<Utc>) -> Visitor {
    Visitor {
      id,
      ip_address: self.ip_address,
      user_agent: self.user_agent,
      country: self.location.country,
      city: self.location.city,
      visit_time,
      page_visited: self.page_visited,
    }
  }
}
