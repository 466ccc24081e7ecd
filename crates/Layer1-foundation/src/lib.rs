//! # cmdcenter-foundation
//!
//! Foundation layer for Command Center:
//! - Error: 중앙 에러 타입 (발견/실행/설정)
//! - Config: 네임스페이스 목록과 디스패치 정책 (settings.json)

pub mod config;
pub mod error;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config
// ============================================================================
pub use config::{CenterSettings, DispatchPolicy, SettingsLoader};

/// Layer1 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
