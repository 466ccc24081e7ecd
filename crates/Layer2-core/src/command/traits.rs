//! Command traits - 핵심 명령어 인터페이스

use cmdcenter_foundation::Result;

// ============================================================================
// Command Trait - 모든 명령어가 구현해야 하는 인터페이스
// ============================================================================

/// 명령어 트레이트
///
/// Command Center에 등록되는 모든 명령어는 이 트레이트를 구현해야 합니다.
/// 레지스트리는 `execute()`의 결과 값을 보지 않고 성공/실패만 확인합니다.
///
/// 레지스트리가 프로세스 전역으로 공유되므로 `Send + Sync`가 필요합니다.
pub trait Command: Send + Sync {
    /// 명령어 실행
    fn execute(&self) -> Result<()>;
}

impl<T: Command + ?Sized> Command for Box<T> {
    fn execute(&self) -> Result<()> {
        (**self).execute()
    }
}
