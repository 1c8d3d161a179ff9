//! Core types for the content engine

mod content_type;
mod ids;
mod pie;

// Re-export all types
pub use content_type::{ContentType, ContentTypeLabels, NativeField, TypeRegistry};
pub use ids::PieId;
pub use pie::{Pie, PieRecord};
