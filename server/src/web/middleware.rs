// server/src/web/middleware.rs

use std::net::{IpAddr, SocketAddr};

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::middleware::Next;
use actix_web::{web, Error};
use tracing::{debug, Instrument};

use crate::state::AppState;

const UNKNOWN_CLIENT: &str = "unknown";

/// Records a visitor entry for the request, then hands it on without waiting
/// for the record to be written.
pub async fn log_visits(req: ServiceRequest, next: Next<impl MessageBody>) -> Result<ServiceResponse<impl MessageBody>, Error> {
  if let Some(state) = req.app_data::<web::Data<AppState>>() {
    let path = req.path().to_string();
    if state.visitors.should_log(&path) {
      let ip = {
        let conn = req.connection_info();
        conn.realip_remote_addr().map(normalize_ip).unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
      };
      let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(String::from);
      let visitors = state.visitors.clone();

      debug!(%ip, %path, "Scheduling visit log.");
      actix_web::rt::spawn(
        async move {
          visitors.log_visit(&ip, user_agent, &path).await;
        }
        .in_current_span(),
      );
    }
  }

  next.call(req).await
}

/// Strips the port (and IPv6 brackets) from a peer or forwarded address.
pub fn normalize_ip(raw: &str) -> String {
  let raw = raw.trim();
  if let Ok(socket) = raw.parse::<SocketAddr>() {
    return socket.ip().to_string();
  }
  let unbracketed = raw.trim_start_matches('[').trim_end_matches(']');
  if let Ok(ip) = unbracketed.parse::<IpAddr>() {
    return ip.to_string();
  }
  raw.to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalize_ip_drops_ports_and_brackets() {
    assert_eq!(normalize_ip("203.0.113.7:51234"), "203.0.113.7");
    assert_eq!(normalize_ip("[2001:db8::1]:443"), "2001:db8::1");
    assert_eq!(normalize_ip("[2001:db8::1]"), "2001:db8::1");
    assert_eq!(normalize_ip(" 198.51.100.4 "), "198.51.100.4");
    assert_eq!(normalize_ip("proxy.internal"), "proxy.internal");
  }
}
