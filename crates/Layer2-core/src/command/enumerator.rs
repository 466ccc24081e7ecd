//! Candidate Enumerator - 네임스페이스별 후보 열거 인터페이스

use super::candidate::Candidate;
use cmdcenter_foundation::{Error, Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// 네임스페이스 열거 결과
///
/// 여러 소스를 합친 열거자는 일부 소스가 실패해도 나머지 후보를 돌려주고,
/// 실패는 `failures`에 담습니다.
#[derive(Debug, Default)]
pub struct Enumeration {
    pub candidates: Vec<Candidate>,
    pub failures: Vec<Error>,
}

/// 후보 열거자
///
/// 네임스페이스 이름을 받아 그 안의 후보 목록을 돌려줍니다.
/// 알 수 없는 네임스페이스는 `Error::unknown_namespace`로 알립니다.
/// 반환 순서가 곧 등록 순서가 됩니다.
pub trait CandidateEnumerator: Send + Sync {
    fn list_candidates(&self, namespace: &str) -> Result<Vec<Candidate>>;

    /// 후보와 부분 실패를 함께 열거 (기본: 부분 실패 없음)
    fn enumerate(&self, namespace: &str) -> Result<Enumeration> {
        self.list_candidates(namespace).map(|candidates| Enumeration {
            candidates,
            failures: Vec::new(),
        })
    }
}

impl<T: CandidateEnumerator + ?Sized> CandidateEnumerator for Arc<T> {
    fn list_candidates(&self, namespace: &str) -> Result<Vec<Candidate>> {
        (**self).list_candidates(namespace)
    }

    fn enumerate(&self, namespace: &str) -> Result<Enumeration> {
        (**self).enumerate(namespace)
    }
}

// ============================================================================
// ChainedEnumerator - 여러 열거자를 순서대로 조회
// ============================================================================

/// 여러 열거자를 이어 붙인 열거자
///
/// 네임스페이스를 아는 열거자들의 후보를 등록 순서대로 합칩니다.
/// 네임스페이스를 모르는 소스는 조용히 건너뛰고, 그 밖의 실패는
/// `Enumeration::failures`로 넘깁니다.
/// 후보를 돌려준 소스가 하나도 없으면 첫 실패를 에러로 돌려줍니다.
#[derive(Default)]
pub struct ChainedEnumerator {
    sources: Vec<Arc<dyn CandidateEnumerator>>,
}

impl ChainedEnumerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: Arc<dyn CandidateEnumerator>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl CandidateEnumerator for ChainedEnumerator {
    fn list_candidates(&self, namespace: &str) -> Result<Vec<Candidate>> {
        let listing = self.enumerate(namespace)?;
        for failure in &listing.failures {
            warn!("Partial enumeration of {}: {}", namespace, failure);
        }
        Ok(listing.candidates)
    }

    fn enumerate(&self, namespace: &str) -> Result<Enumeration> {
        let mut found: Option<Vec<Candidate>> = None;
        let mut failures = Vec::new();
        let mut unknown = None;

        for source in &self.sources {
            match source.enumerate(namespace) {
                Ok(listing) => {
                    found.get_or_insert_with(Vec::new).extend(listing.candidates);
                    failures.extend(listing.failures);
                }
                Err(e) if e.is_unknown_namespace() => {
                    debug!("Enumerator does not know {}: {}", namespace, e);
                    unknown.get_or_insert(e);
                }
                Err(e) => failures.push(e),
            }
        }

        if let Some(candidates) = found {
            return Ok(Enumeration {
                candidates,
                failures,
            });
        }

        let mut failures = failures.into_iter();
        match failures.next() {
            Some(first) => {
                for rest in failures {
                    warn!("Failed to enumerate {}: {}", namespace, rest);
                }
                Err(first)
            }
            None => Err(unknown.unwrap_or_else(|| {
                Error::unknown_namespace(namespace, "no enumerator configured")
            })),
        }
    }
}
