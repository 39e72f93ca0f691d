//! User records service library.
//!
//! Hexagonal layout: [`domain`] holds the record types, ports and service;
//! [`inbound`] adapts HTTP requests onto the driving ports; [`outbound`]
//! implements the table port for each store.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
