//! Candidate Manifest - 데이터 기반 후보 선언
//!
//! `<dir>/<namespace>.json` 파일에서 후보를 읽어 옵니다.
//! 계약 준수 여부가 파일에 선언되므로, 여기서 온 후보는
//! 스캔 시 런타임 검증(ConfigurationError)이 의미를 가집니다.
//!
//! ```text
//! {
//!   // 주석 허용
//!   "candidates": [
//!     { "id": "SpeakCommand", "implements": ["command"], "command": {} },
//!     { "id": "EatCommand", "implements": ["command"], "command": { "enabled": false } },
//!     { "id": "Greeter", "factory": "SpeakCommand", "implements": ["command"], "command": {} }
//!   ]
//! }
//! ```

use super::candidate::{Candidate, Capability, Constructor};
use super::enumerator::CandidateEnumerator;
use super::metadata::CommandMetadata;
use super::traits::Command;
use cmdcenter_foundation::config::strip_json_comments;
use cmdcenter_foundation::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

// ============================================================================
// FactoryTable - 이름으로 찾는 인자 없는 생성자
// ============================================================================

/// 팩토리 테이블 (이름 -> 인자 없는 생성자)
#[derive(Default, Clone)]
pub struct FactoryTable {
    factories: HashMap<String, Constructor>,
}

impl FactoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 빌트인 명령어 팩토리가 등록된 테이블
    pub fn with_builtins() -> Self {
        use super::builtin::{EatCommand, SpeakCommand, SpeakExtendedCommand};

        let mut table = Self::new();
        table
            .register::<EatCommand>("EatCommand")
            .register::<SpeakCommand>("SpeakCommand")
            .register::<SpeakExtendedCommand>("SpeakExtendedCommand");
        table
    }

    /// 타입 `T`의 `Default`를 팩토리로 등록
    pub fn register<T>(&mut self, name: impl Into<String>) -> &mut Self
    where
        T: Command + Default + 'static,
    {
        self.register_fn(name, || Ok(Box::new(T::default()) as Box<dyn Command>))
    }

    /// 팩토리 함수 등록
    pub fn register_fn<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Result<Box<dyn Command>> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
        self
    }

    pub fn get(&self, name: &str) -> Option<Constructor> {
        self.factories.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

// ============================================================================
// ManifestFile - <namespace>.json 파일 구조
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    candidates: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ManifestEntry {
    /// 후보 ID
    id: String,

    /// 팩토리 이름 (없으면 ID 사용)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    factory: Option<String>,

    /// 구현한다고 선언한 인터페이스
    #[serde(default)]
    implements: Vec<String>,

    /// 명령어 메타데이터 (없으면 후보가 아님)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    command: Option<CommandMetadata>,

    /// 생성자 인자 (있으면 인자 없는 생성 불가)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    args: Vec<String>,
}

impl ManifestEntry {
    fn into_candidate(self, factories: &FactoryTable) -> Candidate {
        let mut candidate = Candidate::new(&self.id);

        for name in &self.implements {
            candidate = candidate.implementing(Capability::parse(name));
        }

        if let Some(metadata) = self.command {
            candidate = candidate.with_metadata(metadata);
        }

        if !self.args.is_empty() {
            debug!(
                "Candidate {} requires constructor arguments {:?}",
                self.id, self.args
            );
            return candidate;
        }

        let factory_name = self.factory.as_deref().unwrap_or(&self.id);
        match factories.get(factory_name) {
            Some(constructor) => candidate.with_constructor(constructor),
            None => {
                debug!("No factory named {} for candidate {}", factory_name, self.id);
                candidate
            }
        }
    }
}

// ============================================================================
// ManifestEnumerator
// ============================================================================

/// 매니페스트 디렉토리 기반 열거자
pub struct ManifestEnumerator {
    dir: PathBuf,
    factories: FactoryTable,
}

impl ManifestEnumerator {
    pub fn new(dir: impl Into<PathBuf>, factories: FactoryTable) -> Self {
        Self {
            dir: dir.into(),
            factories,
        }
    }

    /// 네임스페이스의 매니페스트 경로
    pub fn manifest_path(&self, namespace: &str) -> Result<PathBuf> {
        let valid = !namespace.is_empty()
            && namespace
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
            && !namespace.contains("..");

        if !valid {
            return Err(Error::unknown_namespace(namespace, "invalid namespace identifier"));
        }

        Ok(self.dir.join(format!("{}.json", namespace)))
    }
}

impl CandidateEnumerator for ManifestEnumerator {
    fn list_candidates(&self, namespace: &str) -> Result<Vec<Candidate>> {
        let path = self.manifest_path(namespace)?;

        if !path.exists() {
            return Err(Error::unknown_namespace(
                namespace,
                format!("manifest not found: {}", path.display()),
            ));
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::lookup(namespace, format!("{}: {}", path.display(), e)))?;
        let content = strip_json_comments(&content);

        let file: ManifestFile = serde_json::from_str(&content).map_err(|e| {
            Error::lookup(namespace, format!("invalid manifest {}: {}", path.display(), e))
        })?;

        info!(
            "Loaded {} candidates from manifest {}",
            file.candidates.len(),
            path.display()
        );

        Ok(file
            .candidates
            .into_iter()
            .map(|entry| entry.into_candidate(&self.factories))
            .collect())
    }
}

// ============================================================================
// 테스트
// ============================================================================
