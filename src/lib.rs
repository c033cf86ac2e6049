//! Developer-profile backend library modules.
//!
//! The crate follows a hexagonal layout: [`domain`] holds the profile
//! aggregate and its ports, [`inbound`] adapts HTTP requests onto the
//! driving ports, [`outbound`] implements the driven ports over PostgreSQL,
//! and [`server`] wires the two sides together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
