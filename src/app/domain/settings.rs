use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::thresholds::ThresholdConfig;
use super::view_state::{DocumentKind, Language, VendorInfo};
use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub default_document_kind: DocumentKind,

    /// Vendor details pre-filled into every new document
    #[serde(default)]
    pub vendor: VendorInfo,

    #[serde(default)]
    pub thresholds: ThresholdConfig,

    #[serde(default)]
    pub show_client_info: bool,

    /// Number of the last issued document (0 = none issued yet)
    #[serde(default)]
    pub last_document_number: u32,

    /// Where generated documents are written
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

fn default_export_dir() -> PathBuf {
    let mut path = dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push("DigiReceipt");
    path
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: Language::English,
            default_document_kind: DocumentKind::Invoice,
            vendor: VendorInfo::default(),
            thresholds: ThresholdConfig::default(),
            show_client_info: false,
            last_document_number: 0,
            export_dir: default_export_dir(),
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, or create defaults if missing
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        match Self::load_from(&config_path) {
            Some(settings) => settings,
            None => {
                let default = Self::default();
                // Try to save defaults for next time
                if let Err(e) = default.save_to(&config_path) {
                    warn!(error = %e, "could not write default settings");
                }
                default
            }
        }
    }

    /// Load settings from `path`.
    ///
    /// Returns `None` when the file does not exist. A file that exists but
    /// fails to parse yields defaults, so a corrupt config never blocks startup.
    pub fn load_from(path: &Path) -> Option<Self> {
        let contents = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(settings) => Some(settings),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse settings, using defaults");
                Some(Self::default())
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!(path = %path.display(), "settings saved");

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("digireceipt");
        path.push("settings.json");
        path
    }
}
