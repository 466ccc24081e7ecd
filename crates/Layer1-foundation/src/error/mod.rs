//! Error types for Command Center
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Command Center 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 발견(discovery) 관련
    // ========================================================================
    /// 열거자가 네임스페이스를 해석하지 못함
    ///
    /// `unknown`이면 해당 열거자가 그 네임스페이스를 모르는 경우이고,
    /// 아니면 읽기/파싱 같은 실제 실패입니다.
    #[error("Namespace lookup failed: {namespace} - {message}")]
    Lookup {
        namespace: String,
        message: String,
        unknown: bool,
    },

    /// 메타데이터가 붙었지만 Command 계약을 따르지 않는 후보
    #[error("Failed to create command for [{candidate}]. {message}")]
    Configuration { candidate: String, message: String },

    /// 인자 없는 생성 실패
    #[error("Error instantiating command for [{candidate}] : {message}")]
    Construction { candidate: String, message: String },

    // ========================================================================
    // 실행 관련
    // ========================================================================
    #[error("Command execution failed: {command} - {message}")]
    Execution { command: String, message: String },

    #[error("Command center is not ready (state: {0})")]
    NotReady(String),

    #[error("Command center already scanned (state: {0})")]
    AlreadyScanned(String),

    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 일반
    // ========================================================================
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // 기타
    // ========================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// 발견 단계에서 후보 하나에 한정되는 에러인지 확인
    pub fn is_discovery_error(&self) -> bool {
        matches!(
            self,
            Error::Lookup { .. } | Error::Configuration { .. } | Error::Construction { .. }
        )
    }

    /// 사용자에게 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::Configuration { .. }
                | Error::NotFound(_)
                | Error::InvalidInput(_)
                | Error::Config(_)
        )
    }

    /// 열거자가 알지 못하는 네임스페이스인지 확인
    pub fn is_unknown_namespace(&self) -> bool {
        matches!(self, Error::Lookup { unknown: true, .. })
    }

    /// Lookup 에러 생성 헬퍼 (읽기/파싱 실패)
    pub fn lookup(namespace: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Lookup {
            namespace: namespace.into(),
            message: message.into(),
            unknown: false,
        }
    }

    /// Lookup 에러 생성 헬퍼 (모르는 네임스페이스)
    pub fn unknown_namespace(namespace: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Lookup {
            namespace: namespace.into(),
            message: message.into(),
            unknown: true,
        }
    }

    /// Configuration 에러 생성 헬퍼
    pub fn configuration(candidate: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Configuration {
            candidate: candidate.into(),
            message: message.into(),
        }
    }

    /// Construction 에러 생성 헬퍼
    pub fn construction(candidate: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Construction {
            candidate: candidate.into(),
            message: message.into(),
        }
    }

    /// Execution 에러 생성 헬퍼
    pub fn execution(command: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Execution {
            command: command.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_errors() {
        assert!(Error::lookup("ghost", "no such namespace").is_discovery_error());
        assert!(Error::configuration("Broken", "must implement Command").is_discovery_error());
        assert!(Error::construction("NeedsArgs", "no zero-argument constructor").is_discovery_error());
        assert!(!Error::execution("speak", "boom").is_discovery_error());
    }

    #[test]
    fn test_unknown_namespace() {
        let unknown = Error::unknown_namespace("ghost", "not declared");
        let broken = Error::lookup("commands", "invalid manifest");

        assert!(unknown.is_unknown_namespace());
        assert!(unknown.is_discovery_error());
        assert!(!broken.is_unknown_namespace());
        assert_eq!(
            unknown.to_string(),
            "Namespace lookup failed: ghost - not declared"
        );
    }

    #[test]
    fn test_user_facing_errors() {
        assert!(Error::Config("bad settings".into()).is_user_facing());
        assert!(Error::configuration("Broken", "must implement Command").is_user_facing());
        assert!(!Error::Internal("oops".into()).is_user_facing());
        assert!(!Error::lookup("ghost", "missing").is_user_facing());
    }

    #[test]
    fn test_error_messages() {
        let err = Error::construction("NeedsArgs", "no zero-argument constructor");
        assert_eq!(
            err.to_string(),
            "Error instantiating command for [NeedsArgs] : no zero-argument constructor"
        );

        let err = Error::configuration("Broken", "Candidate must implement Command");
        assert_eq!(
            err.to_string(),
            "Failed to create command for [Broken]. Candidate must implement Command"
        );
    }
}
