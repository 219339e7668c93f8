//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Error types
//! - Logo image loading
//! - Document rendering
//! - Export and archive on disk

pub mod error;
pub mod export;
pub mod logo;
pub mod renderer;
