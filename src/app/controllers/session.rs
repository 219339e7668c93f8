use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::commands::EditCommand;
use crate::app::domain::document_model::{DocumentModel, IssuedDocument};
use crate::app::domain::document_record::DocumentRecord;
use crate::app::domain::ledger::{Ledger, LedgerSnapshot};
use crate::app::domain::line_item::{LineItem, LineItemId};
use crate::app::domain::numbering::DocumentNumber;
use crate::app::domain::settings::AppSettings;
use crate::app::domain::thresholds::{Alert, ThresholdConfig};
use crate::app::domain::view_state::{DocumentViewState, LogoRef};
use crate::app::infrastructure::error::{IssueError, LedgerError, Result};
use crate::app::services::{alarms, projection, qr_payload};

/// One document being edited: its ledger, what is shown, and its alarm limits.
#[derive(Debug, Clone, Default)]
pub struct EditingSession {
    ledger: Ledger,
    view: DocumentViewState,
    thresholds: ThresholdConfig,
}

impl EditingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session pre-filled from saved preferences.
    pub fn from_settings(settings: &AppSettings) -> Self {
        let view = DocumentViewState {
            show_client_info: settings.show_client_info,
            vendor: settings.vendor.clone(),
            document_kind: settings.default_document_kind,
            language: settings.language,
            ..Default::default()
        };
        Self {
            ledger: Ledger::new(),
            view,
            thresholds: settings.thresholds.clone(),
        }
    }

    /// Reopen an archived document for editing.
    ///
    /// Items go back through the ledger, so a tampered record is rejected
    /// the same way bad form input is. The logo has to be attached again.
    pub fn from_record(
        record: &DocumentRecord,
        thresholds: ThresholdConfig,
    ) -> std::result::Result<Self, LedgerError> {
        let mut ledger = Ledger::new();
        for item in &record.items {
            let id = ledger.add_item(item.description.clone(), item.quantity, item.unit_price)?;
            if !item.visible {
                ledger.set_visible(id, false)?;
            }
        }
        ledger.set_discount(record.discount)?;

        let view = DocumentViewState {
            show_client_info: record.show_client_info,
            client: record.client.clone(),
            vendor: record.vendor.clone(),
            logo: None,
            document_kind: record.kind,
            language: record.language,
        };
        debug!(number = %record.number, items = ledger.len(), "document reopened");
        Ok(Self {
            ledger,
            view,
            thresholds,
        })
    }

    /// Apply one edit. Returns the new item's id for `AddItem`.
    ///
    /// On error nothing has changed.
    pub fn apply(&mut self, command: EditCommand) -> std::result::Result<Option<LineItemId>, LedgerError> {
        let mut added = None;
        match command {
            EditCommand::AddItem {
                description,
                quantity,
                unit_price,
            } => {
                added = Some(self.ledger.add_item(description, quantity, unit_price)?);
            }
            EditCommand::UpdateItem(id, patch) => self.ledger.update_item(id, patch)?,
            EditCommand::RemoveItem(id) => {
                self.ledger.remove_item(id)?;
            }
            EditCommand::RemoveLastItem => {
                self.ledger.remove_last();
            }
            EditCommand::SetItemVisible(id, visible) => self.ledger.set_visible(id, visible)?,
            EditCommand::SetDiscount(amount) => self.ledger.set_discount(amount)?,
            EditCommand::SetVendor(vendor) => self.view.set_vendor(vendor),
            EditCommand::SetClient(client) => self.view.set_client(client),
            EditCommand::ToggleClientInfo => self.view.toggle_client_info(),
            EditCommand::SetDocumentKind(kind) => self.view.set_document_kind(kind),
            EditCommand::SetLanguage(language) => self.view.set_language(language),
            EditCommand::AttachLogo(logo) => self.view.attach_logo(logo),
            EditCommand::DetachLogo => self.view.detach_logo(),
            EditCommand::SetThresholds(config) => {
                debug!(?config, "thresholds changed");
                self.thresholds = config;
            }
        }
        Ok(added)
    }

    pub fn attach_logo(&mut self, logo: LogoRef) {
        self.view.attach_logo(logo);
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn view(&self) -> &DocumentViewState {
        &self.view
    }

    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        self.ledger.snapshot()
    }

    /// Alerts for the current state, recomputed on every call.
    pub fn alerts(&self) -> Vec<Alert> {
        alarms::evaluate(&self.ledger.snapshot(), &self.thresholds)
    }

    pub fn document_model(&self) -> DocumentModel {
        projection::render_model(&self.ledger.snapshot(), &self.view)
    }

    /// Check that the visible items make a printable document.
    pub fn check_issuable(&self) -> std::result::Result<(), IssueError> {
        let visible: Vec<&LineItem> = self.ledger.items().iter().filter(|i| i.visible).collect();

        if let Some(item) = visible
            .iter()
            .find(|i| !i.description.trim().is_empty() && !i.is_billable())
        {
            return Err(IssueError::IncompleteItem(item.id));
        }
        if !visible.iter().any(|i| i.is_billable()) {
            return Err(IssueError::NoBillableItems);
        }
        Ok(())
    }

    /// Freeze the current state into a numbered document with its QR payload.
    pub fn issue(&self, number: DocumentNumber, issued_at: DateTime<Utc>) -> Result<IssuedDocument> {
        self.check_issuable()?;
        let model = self.document_model();
        let qr_payload = qr_payload::build_payload(number, issued_at, &model)?;
        info!(%number, kind = model.kind.as_str(), amount_due = %model.amount_due, "document issued");
        Ok(IssuedDocument {
            number,
            issued_at,
            model,
            qr_payload,
        })
    }

    /// Archive form of `document`, which must have been issued from this session.
    pub fn record(&self, document: &IssuedDocument) -> DocumentRecord {
        DocumentRecord::new(document, self.ledger.items(), &self.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::line_item::ItemPatch;
    use crate::app::domain::thresholds::AlertKind;
    use crate::app::domain::view_state::{DocumentKind, Language, VendorInfo};
    use crate::app::infrastructure::error::AppError;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_worked_example_through_commands() {
        let mut session = EditingSession::new();
        let widget = session
            .apply(EditCommand::add_item("Widget", dec!(5), dec!(10.00)))
            .unwrap()
            .unwrap();
        session
            .apply(EditCommand::add_item("Gadget", dec!(3), dec!(20.00)))
            .unwrap();
        assert_eq!(session.ledger().grand_total(), dec!(110.00));

        session.apply(EditCommand::SetItemVisible(widget, false)).unwrap();
        assert_eq!(session.ledger().grand_total(), dec!(60.00));

        session
            .apply(EditCommand::SetThresholds(ThresholdConfig {
                max_grand_total: Some(dec!(50)),
                ..Default::default()
            }))
            .unwrap();
        let alerts = session.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::TotalExceeded);
        assert_eq!(alerts[0].observed_value, dec!(60.00));
    }

    #[test]
    fn test_failed_command_changes_nothing() {
        let mut session = EditingSession::new();
        let err = session
            .apply(EditCommand::add_item("Bad", dec!(-1), dec!(5)))
            .unwrap_err();
        assert!(matches!(err, LedgerError::Validation { .. }));
        assert!(session.ledger().is_empty());

        let err = session.apply(EditCommand::RemoveItem(LineItemId(99))).unwrap_err();
        assert_eq!(err, LedgerError::NotFound(LineItemId(99)));
    }

    #[test]
    fn test_non_add_commands_return_none() {
        let mut session = EditingSession::new();
        let id = session
            .apply(EditCommand::add_item("a", dec!(1), dec!(1)))
            .unwrap()
            .unwrap();
        assert_eq!(
            session
                .apply(EditCommand::UpdateItem(id, ItemPatch::default().quantity(dec!(2))))
                .unwrap(),
            None
        );
        assert_eq!(session.apply(EditCommand::ToggleClientInfo).unwrap(), None);
        assert!(session.view().show_client_info);
        assert_eq!(session.apply(EditCommand::RemoveLastItem).unwrap(), None);
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_from_settings_prefills_view() {
        let settings = AppSettings {
            language: Language::Urdu,
            default_document_kind: DocumentKind::Quote,
            show_client_info: true,
            vendor: VendorInfo {
                name: "Corner Shop".to_string(),
                ..Default::default()
            },
            thresholds: ThresholdConfig {
                max_quantity: Some(dec!(10)),
                ..Default::default()
            },
            ..Default::default()
        };
        let session = EditingSession::from_settings(&settings);
        assert_eq!(session.view().language, Language::Urdu);
        assert_eq!(session.view().document_kind, DocumentKind::Quote);
        assert!(session.view().show_client_info);
        assert_eq!(session.view().vendor.name, "Corner Shop");
        assert_eq!(session.thresholds().max_quantity, Some(dec!(10)));
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_issue_requires_billable_item() {
        let mut session = EditingSession::new();
        assert!(matches!(
            session.issue(DocumentNumber(1), at()),
            Err(AppError::Issue(IssueError::NoBillableItems))
        ));

        // A blank row alone is not billable
        session.apply(EditCommand::add_item("", Decimal::ZERO, Decimal::ZERO)).unwrap();
        assert_eq!(session.check_issuable(), Err(IssueError::NoBillableItems));
    }

    #[test]
    fn test_issue_rejects_named_item_without_price() {
        let mut session = EditingSession::new();
        session.apply(EditCommand::add_item("Widget", dec!(5), dec!(10))).unwrap();
        let free = session
            .apply(EditCommand::add_item("Freebie", dec!(1), Decimal::ZERO))
            .unwrap()
            .unwrap();
        assert_eq!(session.check_issuable(), Err(IssueError::IncompleteItem(free)));

        // Hiding the incomplete row makes the document printable
        session.apply(EditCommand::SetItemVisible(free, false)).unwrap();
        assert!(session.check_issuable().is_ok());
    }

    #[test]
    fn test_issue_builds_document() {
        let mut session = EditingSession::new();
        session.apply(EditCommand::add_item("Widget", dec!(5), dec!(10))).unwrap();
        session.apply(EditCommand::SetDiscount(dec!(5))).unwrap();

        let doc = session.issue(DocumentNumber(3), at()).unwrap();
        assert_eq!(doc.number.to_string(), "0003");
        assert_eq!(doc.model.amount_due, dec!(45.00));
        assert!(doc.qr_payload.contains("\"no\":\"0003\""));
        assert!(doc.qr_payload.contains("\"amount_due\":\"45.00\""));

        // Issuing is read-only
        let again = session.issue(DocumentNumber(3), at()).unwrap();
        assert_eq!(doc, again);
    }

    #[test]
    fn test_record_round_trip_keeps_hidden_items() {
        let mut session = EditingSession::new();
        session.apply(EditCommand::add_item("Widget", dec!(5), dec!(10))).unwrap();
        let hidden = session
            .apply(EditCommand::add_item("Sample", dec!(1), dec!(99)))
            .unwrap()
            .unwrap();
        session.apply(EditCommand::SetItemVisible(hidden, false)).unwrap();
        session.apply(EditCommand::SetDiscount(dec!(5))).unwrap();
        session.apply(EditCommand::SetDocumentKind(DocumentKind::Quote)).unwrap();
        session.apply(EditCommand::ToggleClientInfo).unwrap();

        let doc = session.issue(DocumentNumber(8), at()).unwrap();
        let record = session.record(&doc);
        assert_eq!(record.items.len(), 2);
        assert!(!record.items[1].visible);
        assert_eq!(record.amount_due, dec!(45.00));

        let thresholds = ThresholdConfig {
            max_quantity: Some(dec!(3)),
            ..Default::default()
        };
        let reopened = EditingSession::from_record(&record, thresholds.clone()).unwrap();
        assert_eq!(reopened.ledger().grand_total(), dec!(50.00));
        assert_eq!(reopened.ledger().totals().amount_due, dec!(45.00));
        assert_eq!(reopened.ledger().len(), 2);
        assert!(!reopened.ledger().items()[1].visible);
        assert_eq!(reopened.view().document_kind, DocumentKind::Quote);
        assert!(reopened.view().show_client_info);
        assert_eq!(reopened.thresholds(), &thresholds);
        assert_eq!(reopened.document_model(), doc.model);
    }

    #[test]
    fn test_from_record_rejects_invalid_items() {
        let mut session = EditingSession::new();
        session.apply(EditCommand::add_item("Widget", dec!(5), dec!(10))).unwrap();
        let doc = session.issue(DocumentNumber(1), at()).unwrap();
        let mut record = session.record(&doc);
        record.items[0].quantity = dec!(-5);

        let err = EditingSession::from_record(&record, ThresholdConfig::default()).unwrap_err();
        assert!(matches!(err, LedgerError::Validation { field: "quantity", .. }));
    }
}
