//! Built-in Commands
//!
//! 카탈로그 선언 예시로 제공되는 빌트인 명령어
//! - `SpeakCommand`: 기본 메타데이터로 선언
//! - `EatCommand`: `enabled = false`로 선언되어 스캔 시 건너뜀
//! - `SpeakExtendedCommand`: `Speech`를 조합해 동작을 덮어쓰는 독립 명령어

mod eat;
mod speak;
mod speak_extended;

pub use eat::EatCommand;
pub use speak::{SpeakCommand, Speech};
pub use speak_extended::SpeakExtendedCommand;

use super::catalog::CommandCatalog;
use cmdcenter_foundation::config::DEFAULT_NAMESPACE;

/// 빌트인 명령어를 카탈로그에 선언 (Speak → Eat → SpeakExtended)
pub fn declare_builtins(catalog: &mut CommandCatalog) {
    speak::declare(catalog, DEFAULT_NAMESPACE);
    eat::declare(catalog, DEFAULT_NAMESPACE);
    speak_extended::declare(catalog, DEFAULT_NAMESPACE);
}
