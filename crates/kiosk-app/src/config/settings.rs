use std::path::{Path, PathBuf};

use kiosk_core::prelude::*;
use kiosk_submit::ClientConfig;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const KIOSK_DIR: &str = ".kiosk";
const DATA_DIRNAME: &str = "data";

// ─────────────────────────────────────────────────────────────────────────────
// Paths
// ─────────────────────────────────────────────────────────────────────────────

pub fn config_path(kiosk_path: &Path) -> PathBuf {
    kiosk_path.join(KIOSK_DIR).join(CONFIG_FILENAME)
}

/// Directory holding the submission records and the retry queue
pub fn data_dir(kiosk_path: &Path) -> PathBuf {
    kiosk_path.join(KIOSK_DIR).join(DATA_DIRNAME)
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from .kiosk/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(kiosk_path: &Path) -> Settings {
    let config_path = config_path(kiosk_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings and repair invalid combinations
///
/// Validation failures are logged, never fatal.
pub fn load_validated_settings(kiosk_path: &Path) -> Settings {
    let settings = load_settings(kiosk_path);
    match settings.validate() {
        Ok(()) => settings,
        Err(e) => {
            warn!("{}", e);
            settings.sanitized()
        }
    }
}

/// Delivery settings for the submission client
pub fn client_config(kiosk_path: &Path, settings: &Settings) -> ClientConfig {
    ClientConfig {
        data_dir: data_dir(kiosk_path),
        persist_locally: settings.capabilities.persists_locally,
        endpoint_url: settings.remote_endpoint().map(str::to_string),
        timeout: settings.submission.timeout(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Init Directory
// ─────────────────────────────────────────────────────────────────────────────

/// Initialize the kiosk configuration directory
///
/// Creates:
/// - `.kiosk/` directory if it doesn't exist
/// - `.kiosk/config.toml` with defaults if missing
/// - `.kiosk/data/` for submission records
///
/// Idempotent: an existing config is never overwritten.
pub fn init_kiosk_directory(kiosk_path: &Path) -> Result<()> {
    let kiosk_dir = kiosk_path.join(KIOSK_DIR);

    if !kiosk_dir.exists() {
        std::fs::create_dir_all(&kiosk_dir)
            .map_err(|e| Error::config(format!("Failed to create .kiosk dir: {}", e)))?;
        info!("Created .kiosk directory");
    }

    let config_path = kiosk_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, generate_default_config())
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config.toml");
    }

    let data_dir = kiosk_dir.join(DATA_DIRNAME);
    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)
            .map_err(|e| Error::config(format!("Failed to create data dir: {}", e)))?;
    }

    Ok(())
}

fn generate_default_config() -> String {
    r#"# Kiosk Presenter Configuration

[capabilities]
has_video = true          # Show the video selection screen after Home
has_feedback = true       # Offer the star rating screen
submits_remotely = false  # POST submissions to submission.endpoint_url
persists_locally = true   # Keep formdata.json / feedback.json in .kiosk/data

[validation]
# Phone numbers: exactly N digits, or a range
phone_policy = { kind = "exact", digits = 10 }
# phone_policy = { kind = "range", min = 7, max = 15 }

[feedback]
submit_policy = "on_button"   # or "on_select" to submit when a star is tapped

[submission]
# endpoint_url = "https://script.google.com/macros/s/.../exec"
timeout_ms = 10000
retry_pending_on_start = true

[timing]
message_clear_ms = 2000       # How long a field error stays visible
thank_you_timeout_ms = 0      # 0 = stay on ThankYou until Home is pressed

# [[videos]]
# id = "intro.mp4"
# title = "Introduction"
# duration_secs = 45
"#
    .to_string()
}
