//! The pie catalog server
//!
//! Admin screens, the public listing page, and embedded static assets over
//! the content engine. The binary in `main.rs` is the composition root:
//! components are constructed there and handed down explicitly; nothing
//! registers itself in a global.

pub mod config;
pub mod error;
pub mod handlers;
pub mod page;
pub mod server;
pub mod state;

pub use config::PierackConfig;
pub use server::build_router;
pub use state::AppState;
