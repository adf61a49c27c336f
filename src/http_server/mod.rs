//! # campus HTTP Server Module
//!
//! Combines the REST API and health routers into one Axum server.
//!
//! # Endpoints
//!
//! - `/` - Service banner
//! - `/health` - Health check
//! - `/students`, `/teachers`, `/subjects` - CRUD endpoints

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
