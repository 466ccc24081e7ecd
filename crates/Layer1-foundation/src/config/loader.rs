//! Settings Loader
//!
//! Command Center 설정 로더 (`.cmdcenter` 폴더)
//!
//! ## 검색 우선순위
//!
//! 1. User-level: `~/.cmdcenter/settings.json`
//! 2. Project-level: `.cmdcenter/settings.json`
//! 3. Local (gitignored): `.cmdcenter/settings.local.json`
//!
//! 각 레벨의 설정이 이전 레벨을 오버라이드합니다.

use super::settings::{merge_settings, CenterSettings, SettingsFile};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 설정 폴더 이름
pub const CONFIG_DIR_NAME: &str = ".cmdcenter";

// ============================================================================
// SettingsLoader - 설정 로더
// ============================================================================

/// 설정 로더
///
/// 검색 경로는 낮은 우선순위부터 순서대로 보관하고, 뒤의 파일이 앞의 값을 덮어씁니다.
pub struct SettingsLoader {
    search_paths: Vec<SettingsPath>,
}

/// 설정 파일 경로 정보
#[derive(Debug, Clone)]
struct SettingsPath {
    path: PathBuf,
    description: &'static str,
}

impl SettingsLoader {
    /// 새 로더 생성 (user → project → local)
    pub fn new(working_dir: &Path) -> Self {
        let mut search_paths = Vec::new();

        if let Some(home) = dirs::home_dir() {
            search_paths.push(SettingsPath {
                path: home.join(CONFIG_DIR_NAME).join("settings.json"),
                description: "User settings",
            });
        }

        search_paths.push(SettingsPath {
            path: working_dir.join(CONFIG_DIR_NAME).join("settings.json"),
            description: "Project settings",
        });

        // gitignored
        search_paths.push(SettingsPath {
            path: working_dir.join(CONFIG_DIR_NAME).join("settings.local.json"),
            description: "Local settings",
        });

        Self { search_paths }
    }

    /// 커스텀 검색 경로로 생성 (앞쪽이 낮은 우선순위)
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        let search_paths = paths
            .into_iter()
            .map(|path| SettingsPath {
                path,
                description: "Custom settings",
            })
            .collect();

        Self { search_paths }
    }

    /// 모든 경로에서 설정 로드하여 병합
    ///
    /// 읽을 수 없는 파일은 경고 후 건너뜁니다.
    pub fn load_all(&self) -> CenterSettings {
        let mut merged = SettingsFile::default();

        for settings_path in &self.search_paths {
            if !settings_path.path.exists() {
                continue;
            }

            match load_settings_file(&settings_path.path) {
                Ok(file) => {
                    info!(
                        "Loaded {} from: {}",
                        settings_path.description,
                        settings_path.path.display()
                    );
                    merged = merge_settings(merged, file);
                }
                Err(e) => {
                    warn!(
                        "Failed to load settings from {}: {}",
                        settings_path.path.display(),
                        e
                    );
                }
            }
        }

        merged.resolve()
    }
}

// ============================================================================
// 유틸리티 함수
// ============================================================================

/// 파일에서 설정 로드
pub fn load_settings_file(path: &Path) -> Result<SettingsFile> {
    let content = std::fs::read_to_string(path)?;
    let content = strip_json_comments(&content);

    let file: SettingsFile = serde_json::from_str(&content).map_err(|e| {
        Error::Config(format!("Invalid settings.json at {}: {}", path.display(), e))
    })?;

    debug!(
        "Loaded settings from {}: namespaces={:?}, dispatch={:?}",
        path.display(),
        file.namespaces,
        file.dispatch
    );

    Ok(file)
}

/// JSON 주석 제거 (// 및 /* */)
pub fn strip_json_comments(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape_next = false;

    while let Some(c) = chars.next() {
        if escape_next {
            output.push(c);
            escape_next = false;
            continue;
        }

        if c == '\\' && in_string {
            output.push(c);
            escape_next = true;
            continue;
        }

        if c == '"' {
            in_string = !in_string;
            output.push(c);
            continue;
        }

        if !in_string && c == '/' {
            match chars.peek() {
                Some('/') => {
                    // 라인 주석
                    chars.next();
                    for c in chars.by_ref() {
                        if c == '\n' {
                            output.push(c);
                            break;
                        }
                    }
                    continue;
                }
                Some('*') => {
                    // 블록 주석
                    chars.next();
                    while let Some(c) = chars.next() {
                        if c == '*' && chars.peek() == Some(&'/') {
                            chars.next();
                            break;
                        }
                    }
                    continue;
                }
                _ => {}
            }
        }

        output.push(c);
    }

    output
}

// ============================================================================
// 테스트
// ============================================================================
