//! Content engine for the pie catalog
//!
//! This crate provides the storage and query core for pie records. Data lives
//! as JSON files under a data root, one file per record plus one file per
//! record's metadata map. It is designed for a single small catalog with
//! multi-process safety via file locking.
//!
//! ## Overview
//!
//! - **File-per-record** - Each pie is one JSON file; its metadata map is another
//! - **Context, not logic** - [`ContentContext`] exposes I/O primitives; commands do the work
//! - **Typed queries** - [`PieQuery`] filters on metadata substrings with AND/OR combination
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use pierack_content::{ContentContext, Execute, pie::AddPie};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = ContentContext::new("/path/to/.pierack");
//!
//! let result = AddPie::new("Apple Crumble")
//!     .with_description("A classic with a buttery topping")
//!     .execute(&ctx).await?;
//!
//! println!("Created pie: {}", result["id"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage Structure
//!
//! ```text
//! <data_root>/
//! ├── pies/
//! │   └── {id}.json        # core fields: id, title, description, created_at
//! ├── meta/
//! │   └── {id}.json        # key-value metadata map for that record
//! └── .lock                # advisory lock file
//! ```

mod context;
mod error;
mod execute;
pub mod query;
pub mod sanitize;
pub mod types;

// Command modules
pub mod pie;

pub use context::{ContentContext, ContentLock, META_INGREDIENTS, META_PIE_TYPE};
pub use error::{ContentError, Result};
pub use execute::Execute;
pub use query::{MetaCompare, MetaFilter, MetaRelation, PieQuery, QueryResults, QueryScope};

// Re-export commonly used types
pub use types::{ContentType, ContentTypeLabels, NativeField, Pie, PieId, PieRecord, TypeRegistry};
