//! Center Settings - Command Center 설정 타입
//!
//! 스캔할 네임스페이스 목록, 디스패치 정책, 매니페스트 디렉토리

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 기본 네임스페이스 (빌트인 명령어가 선언되는 곳)
pub const DEFAULT_NAMESPACE: &str = "commands";

// ============================================================================
// DispatchPolicy - 실행 실패 처리 정책
// ============================================================================

/// 디스패치 도중 `execute()` 실패 시 처리 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DispatchPolicy {
    /// 첫 실패에서 즉시 중단하고 에러 전파 (기본값)
    #[default]
    FailFast,

    /// 실패를 기록하고 다음 명령어 계속 실행
    ContinueOnError,
}

impl std::fmt::Display for DispatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FailFast => write!(f, "fail-fast"),
            Self::ContinueOnError => write!(f, "continue-on-error"),
        }
    }
}

// ============================================================================
// CenterSettings - 최종 설정
// ============================================================================

/// Command Center 설정 (병합 완료된 값)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenterSettings {
    /// 스캔할 네임스페이스 (순서대로 스캔)
    pub namespaces: Vec<String>,

    /// 디스패치 정책
    pub dispatch: DispatchPolicy,

    /// 데이터 기반 후보 매니페스트 디렉토리
    pub manifest_dir: Option<PathBuf>,
}

impl CenterSettings {
    pub fn with_namespaces<I, S>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.namespaces = namespaces.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dispatch(mut self, dispatch: DispatchPolicy) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn with_manifest_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.manifest_dir = Some(dir.into());
        self
    }
}

impl Default for CenterSettings {
    fn default() -> Self {
        Self {
            namespaces: vec![DEFAULT_NAMESPACE.to_string()],
            dispatch: DispatchPolicy::default(),
            manifest_dir: None,
        }
    }
}

// ============================================================================
// SettingsFile - settings.json 파일 구조
// ============================================================================

/// settings.json 파일 구조
///
/// 모든 필드가 선택적이며, 여러 레벨의 파일을 병합한 뒤 `resolve()`로 확정합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespaces: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatch: Option<DispatchPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_dir: Option<PathBuf>,
}

impl SettingsFile {
    /// 기본값을 채워 최종 설정으로 변환
    pub fn resolve(self) -> CenterSettings {
        let defaults = CenterSettings::default();
        CenterSettings {
            namespaces: self.namespaces.unwrap_or(defaults.namespaces),
            dispatch: self.dispatch.unwrap_or(defaults.dispatch),
            manifest_dir: self.manifest_dir,
        }
    }
}

/// 두 설정 파일 병합 (later가 earlier를 오버라이드)
pub fn merge_settings(earlier: SettingsFile, later: SettingsFile) -> SettingsFile {
    SettingsFile {
        // 네임스페이스 목록은 통째로 교체 (순서가 의미를 가짐)
        namespaces: later.namespaces.or(earlier.namespaces),
        dispatch: later.dispatch.or(earlier.dispatch),
        manifest_dir: later.manifest_dir.or(earlier.manifest_dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = CenterSettings::default();
        assert_eq!(settings.namespaces, vec!["commands"]);
        assert_eq!(settings.dispatch, DispatchPolicy::FailFast);
        assert!(settings.manifest_dir.is_none());
    }

    #[test]
    fn test_settings_file_parsing() {
        let json = r#"{
            "namespaces": ["commands", "extras"],
            "dispatch": "continueOnError",
            "manifestDir": "/etc/cmdcenter/manifests"
        }"#;

        let file: SettingsFile = serde_json::from_str(json).unwrap();
        let settings = file.resolve();

        assert_eq!(settings.namespaces, vec!["commands", "extras"]);
        assert_eq!(settings.dispatch, DispatchPolicy::ContinueOnError);
        assert_eq!(
            settings.manifest_dir,
            Some(PathBuf::from("/etc/cmdcenter/manifests"))
        );
    }

    #[test]
    fn test_merge_settings() {
        let earlier = SettingsFile {
            namespaces: Some(vec!["commands".into()]),
            dispatch: Some(DispatchPolicy::ContinueOnError),
            manifest_dir: None,
        };
        let later = SettingsFile {
            namespaces: Some(vec!["extras".into()]),
            ..Default::default()
        };

        let merged = merge_settings(earlier, later).resolve();

        // later의 namespaces가 우선
        assert_eq!(merged.namespaces, vec!["extras"]);
        // later에 dispatch가 없으므로 earlier 유지
        assert_eq!(merged.dispatch, DispatchPolicy::ContinueOnError);
    }

    #[test]
    fn test_dispatch_display() {
        assert_eq!(DispatchPolicy::FailFast.to_string(), "fail-fast");
        assert_eq!(DispatchPolicy::ContinueOnError.to_string(), "continue-on-error");
    }
}
