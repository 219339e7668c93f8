//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Edit commands sent by form callbacks
//! - The editing session that applies them

pub mod commands;
pub mod session;
