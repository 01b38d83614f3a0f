//! Configuration file parsing for the kiosk
//!
//! Supports `.kiosk/config.toml` inside the kiosk directory.

pub mod settings;
pub mod types;

pub use settings::{
    client_config, config_path, data_dir, init_kiosk_directory, load_settings,
    load_validated_settings,
};
pub use types::*;
