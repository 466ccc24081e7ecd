//! Global Command Center - 프로세스 전역 싱글톤
//!
//! 첫 접근 시 한 번만 스캔하고, 이후 접근은 같은 인스턴스를 돌려줍니다.
//! 여러 스레드가 동시에 첫 접근을 해도 스캔은 한 번만 실행됩니다.
//!
//! 잠금을 쥔 채로 실행되는 `execute()` 안에서 다시 잠그면 교착 상태가 됩니다.

use super::catalog::CommandCatalog;
use super::enumerator::CandidateEnumerator;
use super::registry::CommandCenter;
use cmdcenter_foundation::CenterSettings;
use parking_lot::Mutex;
use std::sync::OnceLock;
use tracing::{debug, error};

/// 지연 초기화되는 Command Center 셀
pub struct LazyCommandCenter {
    cell: OnceLock<Mutex<CommandCenter>>,
}

impl LazyCommandCenter {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// 첫 호출이면 스캔 후 저장, 아니면 기존 인스턴스 반환
    ///
    /// 두 번째 호출부터는 `settings`와 `enumerator`를 사용하지 않습니다.
    pub fn get_or_scan(
        &self,
        settings: &CenterSettings,
        enumerator: &dyn CandidateEnumerator,
    ) -> &Mutex<CommandCenter> {
        self.cell.get_or_init(|| {
            debug!("Initializing command center");
            let mut center = CommandCenter::from_settings(settings);
            if let Err(e) = center.scan(enumerator) {
                error!("Command center scan failed: {}", e);
            }
            Mutex::new(center)
        })
    }

    /// 초기화된 경우에만 반환
    pub fn get(&self) -> Option<&Mutex<CommandCenter>> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Default for LazyCommandCenter {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// 전역 Command Center
// ============================================================================

static COMMAND_CENTER: LazyCommandCenter = LazyCommandCenter::new();

/// 전역 Command Center 초기화
///
/// 이미 초기화되어 있으면 기존 인스턴스를 그대로 반환합니다.
pub fn init_command_center(
    settings: &CenterSettings,
    enumerator: &dyn CandidateEnumerator,
) -> &'static Mutex<CommandCenter> {
    COMMAND_CENTER.get_or_scan(settings, enumerator)
}

/// 전역 Command Center 가져오기 (기본 설정 + 빌트인 카탈로그)
pub fn command_center() -> &'static Mutex<CommandCenter> {
    if let Some(center) = COMMAND_CENTER.get() {
        return center;
    }

    let catalog = CommandCatalog::with_builtins();
    COMMAND_CENTER.get_or_scan(&CenterSettings::default(), &catalog)
}
