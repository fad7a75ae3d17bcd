// server/src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod middleware;
pub mod routes;

// main.rs and the integration tests assemble the App from these two.
pub use middleware::log_visits;
pub use routes::configure_app_routes;
