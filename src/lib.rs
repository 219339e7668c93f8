//! DigiReceipt core: the line-item ledger, threshold alarms and the
//! document view-state behind the quote/invoice form.
//!
//! The UI layer owns a single [`AppState`] and forwards every form event to
//! it as an [`EditCommand`]. Rendering, logo decoding and saving are
//! collaborators behind the traits in [`app::infrastructure`].

pub mod app;

pub use app::controllers::commands::EditCommand;
pub use app::controllers::session::EditingSession;
pub use app::domain::{
    Alert, AlertKind, AppSettings, ClientInfo, DocumentKind, DocumentModel, DocumentNumber,
    DocumentRecord, DocumentSummary, DocumentViewState, ItemPatch, Language, Ledger,
    LedgerSnapshot, LineItem, LineItemId, ThresholdConfig, Totals, VendorInfo,
};
pub use app::infrastructure::error::{AppError, IssueError, LedgerError, LogoError, Result};
pub use app::state::{AppState, GeneratedDocument};
