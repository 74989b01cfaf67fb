//! Request handlers, one module per record collection.
//!
//! Every handler is an independent, stateless request/response unit:
//! parse/validate the input, run exactly one repository call, shape the
//! result (or a 404) back to the client.

pub mod documents;
pub mod events;
pub mod health;
pub mod prisons;
pub mod qr;
pub mod testimonies;
pub mod timeline;
pub mod victims;
