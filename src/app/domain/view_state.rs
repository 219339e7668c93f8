use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DocumentKind {
    #[default]
    Invoice,
    Quote,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "invoice",
            DocumentKind::Quote => "quote",
        }
    }
}

/// Language of the printed labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    English,
    Urdu,
}

/// The business issuing the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    /// National tax number.
    #[serde(default)]
    pub ntn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub ntn: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogoFormat {
    Png,
    Jpeg,
}

/// Opaque handle to a loaded logo image.
///
/// Only the logo loader creates these; the image bytes are not serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogoRef {
    id: String,
    file_name: String,
    format: LogoFormat,
    #[serde(skip)]
    bytes: Vec<u8>,
}

impl LogoRef {
    pub(crate) fn new(id: String, file_name: String, format: LogoFormat, bytes: Vec<u8>) -> Self {
        Self {
            id,
            file_name,
            format,
            bytes,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn format(&self) -> LogoFormat {
        self.format
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// What the rendered document shows, independent of the ledger's numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentViewState {
    pub show_client_info: bool,
    pub client: ClientInfo,
    pub vendor: VendorInfo,
    pub logo: Option<LogoRef>,
    pub document_kind: DocumentKind,
    pub language: Language,
}

impl DocumentViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_client_info(&mut self) {
        self.show_client_info = !self.show_client_info;
        debug!(show_client_info = self.show_client_info, "client info toggled");
    }

    pub fn set_show_client_info(&mut self, show: bool) {
        self.show_client_info = show;
    }

    pub fn set_document_kind(&mut self, kind: DocumentKind) {
        if self.document_kind != kind {
            debug!(kind = kind.as_str(), "document kind changed");
            self.document_kind = kind;
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn attach_logo(&mut self, logo: LogoRef) {
        debug!(logo = %logo.id, file = %logo.file_name, "logo attached");
        self.logo = Some(logo);
    }

    pub fn detach_logo(&mut self) {
        if self.logo.take().is_some() {
            debug!("logo detached");
        }
    }

    pub fn set_client(&mut self, client: ClientInfo) {
        self.client = client;
    }

    pub fn set_vendor(&mut self, vendor: VendorInfo) {
        self.vendor = vendor;
    }
}
