//! Command Metadata - 후보에 부착되는 선언적 플래그

use serde::{Deserialize, Serialize};

/// 명령어 메타데이터
///
/// 후보 정의 시점에 부착되며, 발견 단계에서 한 번만 읽힙니다.
/// 메타데이터가 없는 후보는 명령어 후보로 취급하지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// `false`면 스캔 시 인스턴스를 만들지 않음 (기본값: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl CommandMetadata {
    /// 활성화된 메타데이터
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    /// 비활성화된 메타데이터
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }
}

impl Default for CommandMetadata {
    fn default() -> Self {
        Self::enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_enabled() {
        assert!(CommandMetadata::default().enabled);
        assert!(!CommandMetadata::disabled().enabled);
    }

    #[test]
    fn test_enabled_defaults_when_absent() {
        let meta: CommandMetadata = serde_json::from_str("{}").unwrap();
        assert!(meta.enabled);

        let meta: CommandMetadata = serde_json::from_str(r#"{ "enabled": false }"#).unwrap();
        assert!(!meta.enabled);
    }
}
