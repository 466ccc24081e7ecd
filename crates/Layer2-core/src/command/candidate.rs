//! Candidate - 발견 단계에서 검토되는 명령어 후보

use super::metadata::CommandMetadata;
use super::traits::Command;
use cmdcenter_foundation::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// 인자 없는 생성 경로
pub type Constructor = Arc<dyn Fn() -> Result<Box<dyn Command>> + Send + Sync>;

// ============================================================================
// Capability - 후보가 선언하는 계약
// ============================================================================

/// 후보가 구현한다고 선언한 인터페이스
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `Command` 트레이트
    Command,

    /// 그 외 인터페이스 (데이터 기반 매니페스트에서만 등장)
    Other(String),
}

impl Capability {
    /// 매니페스트 문자열 파싱
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "command" | "Command" => Self::Command,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command => write!(f, "command"),
            Self::Other(name) => write!(f, "{}", name),
        }
    }
}

// ============================================================================
// Candidate
// ============================================================================

/// 명령어 후보
///
/// 열거자가 만들어 내며, 스캔 동안에만 존재합니다.
#[derive(Clone)]
pub struct Candidate {
    id: String,
    metadata: Option<CommandMetadata>,
    conformances: Vec<Capability>,
    constructor: Option<Constructor>,
}

impl Candidate {
    /// 메타데이터, 계약, 생성자가 모두 없는 후보
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata: None,
            conformances: Vec::new(),
            constructor: None,
        }
    }

    /// 타입 `T`로부터 후보 생성
    ///
    /// `T: Command` 제약으로 계약 준수가 컴파일 타임에 보장되고,
    /// `Default`가 인자 없는 생성 경로가 됩니다.
    pub fn of<T>(id: impl Into<String>) -> Self
    where
        T: Command + Default + 'static,
    {
        Self::with_factory(id, || Ok(Box::new(T::default()) as Box<dyn Command>))
    }

    /// 팩토리 함수로 후보 생성 (팩토리는 실패할 수 있음)
    pub fn with_factory<F>(id: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn Command>> + Send + Sync + 'static,
    {
        Self::new(id)
            .implementing(Capability::Command)
            .with_constructor(Arc::new(factory))
    }

    /// 빌더 패턴: 메타데이터 부착
    pub fn with_metadata(mut self, metadata: CommandMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// 빌더 패턴: 구현 계약 추가
    pub fn implementing(mut self, capability: Capability) -> Self {
        if !self.conformances.contains(&capability) {
            self.conformances.push(capability);
        }
        self
    }

    /// 빌더 패턴: 생성자 설정
    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructor = Some(constructor);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// 부착된 메타데이터 (없으면 명령어 후보가 아님)
    pub fn metadata(&self) -> Option<CommandMetadata> {
        self.metadata
    }

    /// 메타데이터가 있고 `enabled = true`인지
    pub fn is_enabled(&self) -> bool {
        self.metadata.is_some_and(|m| m.enabled)
    }

    pub fn conformances(&self) -> &[Capability] {
        &self.conformances
    }

    /// `Command` 계약 준수 여부
    pub fn conforms(&self) -> bool {
        self.conformances.contains(&Capability::Command)
    }

    /// 인자 없는 생성 경로가 있는지
    pub fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// 인자 없이 인스턴스 생성
    ///
    /// 생성자가 없거나 실패하면 `Error::Construction`을 반환합니다.
    pub fn instantiate(&self) -> Result<Box<dyn Command>> {
        let constructor = self
            .constructor
            .as_ref()
            .ok_or_else(|| Error::construction(&self.id, "no zero-argument constructor"))?;

        constructor().map_err(|e| match e {
            Error::Construction { .. } => e,
            other => Error::construction(&self.id, other.to_string()),
        })
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("id", &self.id)
            .field("metadata", &self.metadata)
            .field("conformances", &self.conformances)
            .field("has_constructor", &self.constructor.is_some())
            .finish()
    }
}
