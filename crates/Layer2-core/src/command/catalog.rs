//! Command Catalog - 선언적 후보 등록 테이블
//!
//! 각 명령어 모듈이 시작 시 자신을 한 번 선언하면,
//! 스캔 시점에 네임스페이스별로 후보를 돌려줍니다.

use super::candidate::Candidate;
use super::enumerator::CandidateEnumerator;
use super::metadata::CommandMetadata;
use super::traits::Command;
use cmdcenter_foundation::{Error, Result};
use std::collections::HashMap;
use tracing::debug;

/// 명령어 카탈로그 (네임스페이스 -> 후보 목록, 선언 순서 유지)
#[derive(Debug, Default, Clone)]
pub struct CommandCatalog {
    entries: HashMap<String, Vec<Candidate>>,

    /// 네임스페이스 선언 순서
    order: Vec<String>,
}

impl CommandCatalog {
    /// 빈 카탈로그 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 빌트인 명령어가 선언된 카탈로그 생성
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        super::builtin::declare_builtins(&mut catalog);
        catalog
    }

    /// 빈 네임스페이스 선언
    pub fn declare_namespace(&mut self, namespace: impl Into<String>) -> &mut Self {
        let namespace = namespace.into();
        if !self.entries.contains_key(&namespace) {
            self.order.push(namespace.clone());
            self.entries.insert(namespace, Vec::new());
        }
        self
    }

    /// 타입 `T`를 메타데이터와 함께 선언
    pub fn declare<T>(
        &mut self,
        namespace: impl Into<String>,
        id: impl Into<String>,
        metadata: CommandMetadata,
    ) -> &mut Self
    where
        T: Command + Default + 'static,
    {
        self.declare_candidate(namespace, Candidate::of::<T>(id).with_metadata(metadata))
    }

    /// 임의 후보 선언 (메타데이터 없는 후보, 팩토리 기반 후보 등)
    pub fn declare_candidate(
        &mut self,
        namespace: impl Into<String>,
        candidate: Candidate,
    ) -> &mut Self {
        let namespace = namespace.into();
        debug!("Declaring candidate {} in namespace {}", candidate.id(), namespace);

        self.declare_namespace(namespace.clone());
        self.entries.entry(namespace).or_default().push(candidate);
        self
    }

    /// 선언된 네임스페이스 목록 (선언 순서)
    pub fn namespaces(&self) -> &[String] {
        &self.order
    }

    /// 전체 후보 수
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CandidateEnumerator for CommandCatalog {
    fn list_candidates(&self, namespace: &str) -> Result<Vec<Candidate>> {
        self.entries
            .get(namespace)
            .cloned()
            .ok_or_else(|| Error::unknown_namespace(namespace, "namespace is not declared in the catalog"))
    }
}
