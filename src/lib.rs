//! REST API over a single `teams` table.
//!
//! Requests flow through [`routes`] into the [`db`] data-access functions,
//! which own every SQL statement and translate store outcomes into
//! [`error::StoreError`].

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
