//! Services layer - pure business operations.
//!
//! This module contains logic with no side effects beyond logging:
//! - Threshold alarm evaluation
//! - Projection of ledger + view state into a document model
//! - Localized labels
//! - QR verification payload
//! - Items CSV export

pub mod alarms;
pub mod csv_export;
pub mod labels;
pub mod projection;
pub mod qr_payload;
