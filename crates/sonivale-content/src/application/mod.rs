//! Application layer for the Community Content context.

pub mod ingest;
pub mod query_handlers;
