//! Config - 통합 설정 관리
//!
//! - `settings.rs` - CenterSettings, DispatchPolicy
//! - `loader.rs` - settings.json 검색/병합 로더

mod loader;
mod settings;

pub use loader::{load_settings_file, strip_json_comments, SettingsLoader, CONFIG_DIR_NAME};
pub use settings::{
    merge_settings, CenterSettings, DispatchPolicy, SettingsFile, DEFAULT_NAMESPACE,
};
