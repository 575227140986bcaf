// Service Areas - API Core
//
// HTTP API for providers and the priced geographic areas they serve, with a
// point lookup that answers "who serves this location?".
//
// Domains live under domains/*; each has models (SQL), data (API shapes) and
// activities (operations run inside a request session).

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
