//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Money helpers and line items
//! - The item ledger and its totals
//! - Threshold configuration and alerts
//! - Document view-state, numbering and the projected document model
//! - Archived records of issued documents
//! - Application settings

pub mod document_model;
pub mod document_record;
pub mod ledger;
pub mod line_item;
pub mod money;
pub mod numbering;
pub mod settings;
pub mod thresholds;
pub mod view_state;

pub use document_model::{DocumentModel, IssuedDocument, RenderedItem};
pub use document_record::{DocumentRecord, DocumentSummary, RecordedItem};
pub use ledger::{Ledger, LedgerSnapshot, Totals};
pub use line_item::{ItemPatch, LineItem, LineItemId};
pub use numbering::DocumentNumber;
pub use settings::AppSettings;
pub use thresholds::{Alert, AlertKind, ThresholdConfig};
pub use view_state::{ClientInfo, DocumentKind, DocumentViewState, Language, LogoFormat, LogoRef, VendorInfo};
