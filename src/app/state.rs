use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use super::controllers::commands::EditCommand;
use super::controllers::session::EditingSession;
use super::domain::line_item::LineItemId;
use super::domain::document_record::DocumentSummary;
use super::domain::numbering::DocumentNumber;
use super::domain::settings::AppSettings;
use super::domain::view_state::LogoRef;
use super::infrastructure::error::{AppError, IssueError, LedgerError, LogoError, Result};
use super::infrastructure::export::{DirectorySink, DocumentArchive, DocumentSink};
use super::infrastructure::logo::{FileLogoLoader, LogoLoader};
use super::infrastructure::renderer::{Artifact, DocumentRenderer, TextReceiptRenderer};
use super::services::csv_export::items_csv;

/// Paths of everything written for one generated document.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDocument {
    pub number: DocumentNumber,
    pub document_path: PathBuf,
    pub items_csv_path: PathBuf,
    pub record_path: PathBuf,
    pub qr_payload: String,
}

/// Main application coordinator.
///
/// Owns the settings, the current editing session and the collaborators.
/// The UI holds exactly one of these and calls into it from its callbacks.
pub struct AppState {
    pub settings: AppSettings,
    /// Where settings are persisted; `None` keeps them in memory only.
    settings_path: Option<PathBuf>,
    session: EditingSession,
    logo_loader: Box<dyn LogoLoader>,
    renderer: Box<dyn DocumentRenderer>,
    sink: Box<dyn DocumentSink>,
    archive: DocumentArchive,
}

impl AppState {
    /// State backed by the user's settings file and the default collaborators.
    pub fn load() -> Self {
        let settings = AppSettings::load();
        Self::with_settings(settings, Some(AppSettings::get_config_path()))
    }

    pub fn with_settings(settings: AppSettings, settings_path: Option<PathBuf>) -> Self {
        let sink = DirectorySink::new(settings.export_dir.clone());
        let archive = DocumentArchive::new(settings.export_dir.join("records"));
        let session = EditingSession::from_settings(&settings);
        Self {
            settings,
            settings_path,
            session,
            logo_loader: Box::new(FileLogoLoader::default()),
            renderer: Box::new(TextReceiptRenderer::default()),
            sink: Box::new(sink),
            archive,
        }
    }

    pub fn set_renderer(&mut self, renderer: Box<dyn DocumentRenderer>) {
        self.renderer = renderer;
    }

    pub fn set_sink(&mut self, sink: Box<dyn DocumentSink>) {
        self.sink = sink;
    }

    pub fn set_logo_loader(&mut self, loader: Box<dyn LogoLoader>) {
        self.logo_loader = loader;
    }

    pub fn session(&self) -> &EditingSession {
        &self.session
    }

    pub fn apply(&mut self, command: EditCommand) -> std::result::Result<Option<LineItemId>, LedgerError> {
        self.session.apply(command)
    }

    /// Load a logo from disk and attach it. On failure the current logo stays.
    pub fn attach_logo_file(&mut self, path: &Path) -> std::result::Result<(), LogoError> {
        let logo: LogoRef = self.logo_loader.load_path(path)?;
        self.session.attach_logo(logo);
        Ok(())
    }

    /// Discard the current document and start a blank one from settings.
    pub fn new_document(&mut self) {
        self.session = EditingSession::from_settings(&self.settings);
    }

    pub fn next_document_number(&self) -> std::result::Result<DocumentNumber, IssueError> {
        DocumentNumber::after(self.settings.last_document_number).ok_or(IssueError::NumberingExhausted)
    }

    /// Every archived document, oldest first.
    pub fn past_documents(&self) -> Result<Vec<DocumentSummary>> {
        self.archive.list()
    }

    /// Replace the current document with an archived one for re-editing.
    ///
    /// Thresholds come from the current settings. On error the current
    /// document is kept.
    pub fn load_document(&mut self, number: DocumentNumber) -> Result<()> {
        let record = self
            .archive
            .load(number)?
            .ok_or(AppError::DocumentNotFound(number))?;
        self.session = EditingSession::from_record(&record, self.settings.thresholds.clone())?;
        info!(%number, "past document loaded");
        Ok(())
    }

    pub fn generate(&mut self) -> Result<GeneratedDocument> {
        self.generate_at(Utc::now())
    }

    /// Persist `number` as the last issued one before anything is written.
    fn reserve_number(&mut self, number: DocumentNumber) -> Result<()> {
        let previous = self.settings.last_document_number;
        self.settings.last_document_number = number.0;
        if let Some(path) = &self.settings_path {
            if let Err(e) = self.settings.save_to(path) {
                self.settings.last_document_number = previous;
                error!(%number, error = %e, "document number could not be reserved");
                return Err(e);
            }
        }
        Ok(())
    }

    /// Issue, render, archive and store the current document.
    ///
    /// Nothing is written until the document has been issued and rendered.
    /// The number is then saved to settings before any file is created, so
    /// a number is never handed out twice. A failure after that point
    /// leaves the number consumed and the next attempt uses a fresh one.
    pub fn generate_at(&mut self, issued_at: DateTime<Utc>) -> Result<GeneratedDocument> {
        let number = self.next_document_number()?;
        let document = self.session.issue(number, issued_at)?;

        let rendered = self.renderer.render(&document)?;
        let csv = Artifact {
            file_name: format!("{}_items.csv", number),
            media_type: "text/csv",
            bytes: items_csv(&document.model)?,
        };
        let record = self.session.record(&document);

        self.reserve_number(number)?;

        let document_path = self.sink.store(&rendered)?;
        let items_csv_path = self.sink.store(&csv)?;
        let record_path = self.archive.save(&record).inspect_err(|e| {
            warn!(%number, error = %e, "document stored but could not be archived");
        })?;
        info!(%number, path = %document_path.display(), "document generated");

        Ok(GeneratedDocument {
            number,
            document_path,
            items_csv_path,
            record_path,
            qr_payload: document.qr_payload,
        })
    }
}
