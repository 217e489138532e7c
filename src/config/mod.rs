//! Configuration and path management for habitual.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, ExportSettings, GeneralSettings, Settings};
