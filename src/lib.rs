//! campus - a small REST API for students, teachers and subjects
//!
//! CRUD over three SQLite tables with validated payloads and partial
//! updates that distinguish an absent field from an explicit null.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod patch;
pub mod rest_api;
pub mod store;
pub mod validation;
