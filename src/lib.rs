//! client-registry - single-endpoint HTTP service for client identity records
//!
//! `POST /client` validates a payload, matches it against stored records by
//! `(lastName, firstName, patrName, birthDate)`, and either creates a record
//! (generated id, derived FIO and age) or updates the matched record's
//! status.
//!
//! # Modules
//!
//! - [`client`]: validation, derived fields, upsert service
//! - [`store`]: whole-collection persistence and identity lookup
//! - [`http_server`]: axum routes, envelopes, configuration
//! - [`submit`]: one-shot upstream submitter
//! - [`observability`]: structured JSON logging
//! - [`cli`]: command line entry points

pub mod cli;
pub mod client;
pub mod http_server;
pub mod observability;
pub mod store;
pub mod submit;
