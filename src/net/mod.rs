//! HTTP plumbing: endpoint URLs, wire types, and the authenticated pipeline.

pub mod endpoints;
pub mod pipeline;
pub mod types;
