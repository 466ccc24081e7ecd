//! cmdcenter-core: Core Runtime for Command Center
//!
//! Layer2 - 명령어 발견/검증/등록/디스패치
//!
//! # 주요 모듈
//!
//! - `command`: 명령어 계약, 메타데이터, 후보 열거, 레지스트리, 디스패처
//!
//! # 사용 예시
//!
//! ```ignore
//! use cmdcenter_core::{command_center, CommandCatalog, CommandMetadata};
//!
//! // 빌트인 카탈로그로 전역 레지스트리 초기화 후 실행
//! let center = command_center();
//! center.lock().run()?;
//!
//! // 직접 등록
//! center.lock().add(Box::new(MyCommand::default()));
//! ```

pub mod command;

// Re-exports: Command
pub use command::{
    // Singleton
    command_center,
    init_command_center,
    // Types
    Candidate,
    CandidateEnumerator,
    Capability,
    ChainedEnumerator,
    Command,
    CommandCatalog,
    CommandCenter,
    CommandMetadata,
    DispatchReport,
    Enumeration,
    FactoryTable,
    LazyCommandCenter,
    ManifestEnumerator,
    RegistryState,
    ScanReport,
};

// Layer1 re-exports
pub use cmdcenter_foundation::{CenterSettings, DispatchPolicy, Error, Result};

/// Layer2 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
