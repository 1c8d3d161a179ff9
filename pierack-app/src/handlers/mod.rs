//! HTTP handlers

pub mod admin;
pub mod assets;
pub mod public;
