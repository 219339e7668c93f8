//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (LineItem, Ledger, view state, numbering, settings)
//! - `controllers/` - Orchestration (edit commands, editing session)
//! - `services/` - Pure operations (alarms, projection, labels, QR payload, CSV)
//! - `infrastructure/` - External integrations (logo files, renderer, export sink, archive, errors)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;
