//! Execute trait for content commands
//!
//! Commands are structs where the fields ARE the parameters. Each command
//! implements [`Execute`] against the context it operates on and returns its
//! result as JSON, so callers get one uniform response shape.

use async_trait::async_trait;
use serde_json::Value;

/// A command that runs against a context and produces a JSON result
#[async_trait]
pub trait Execute<C, E> {
    async fn execute(&self, ctx: &C) -> std::result::Result<Value, E>;
}
