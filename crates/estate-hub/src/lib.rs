//! Read-only marketplace catalogs: the service-provider directory, the partner
//! lead list, and the FAQ knowledge base, with filtering, relevance search, and
//! ranking over each.

pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
pub mod faq;
pub mod leads;
pub mod router;
pub mod store;
pub mod telemetry;
