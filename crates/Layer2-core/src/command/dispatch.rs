//! Dispatch - 등록된 명령어를 순서대로 실행

use super::registry::AdmittedCommand;
use cmdcenter_foundation::{DispatchPolicy, Error, Result};
use tracing::{debug, error, warn};

/// 디스패치 결과
#[derive(Debug, Default)]
pub struct DispatchReport {
    /// 실행한 명령어 ID (실행 순서)
    pub executed: Vec<String>,

    /// 실패 목록 (`ContinueOnError`에서만 채워짐)
    pub failures: Vec<Error>,
}

impl DispatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// 성공한 명령어 수
    pub fn succeeded(&self) -> usize {
        self.executed.len() - self.failures.len()
    }
}

/// 명령어 목록을 등록 순서대로 한 번씩 실행
///
/// - `FailFast`: 첫 실패를 `Error::Execution`으로 즉시 반환, 나머지는 실행하지 않음
/// - `ContinueOnError`: 실패를 기록하고 다음 명령어로 진행
pub(crate) fn dispatch(commands: &[AdmittedCommand], policy: DispatchPolicy) -> Result<DispatchReport> {
    let mut report = DispatchReport::default();

    for admitted in commands {
        debug!("Executing command: {}", admitted.id);
        report.executed.push(admitted.id.clone());

        if let Err(e) = admitted.command.execute() {
            let failure = match e {
                Error::Execution { .. } => e,
                other => Error::execution(&admitted.id, other.to_string()),
            };

            match policy {
                DispatchPolicy::FailFast => {
                    error!("Command {} failed, aborting dispatch: {}", admitted.id, failure);
                    return Err(failure);
                }
                DispatchPolicy::ContinueOnError => {
                    warn!("Command {} failed, continuing: {}", admitted.id, failure);
                    report.failures.push(failure);
                }
            }
        }
    }

    Ok(report)
}
