//! Command Center - 명령어 발견/검증/등록/디스패치
//!
//! 설정된 네임스페이스를 순서대로 스캔하여 후보를 검사하고,
//! 조건을 만족하는 후보만 인스턴스화하여 등록 순서대로 보관합니다.
//!
//! ## 상태 전이
//!
//! ```text
//! Uninitialized ──scan()──▶ Scanning(ns_0) ──▶ … ──▶ Scanning(ns_n) ──▶ Ready
//! ```
//!
//! 디스패치(`run()`)는 `Ready` 상태에서만 허용됩니다.

use super::candidate::Candidate;
use super::dispatch::{dispatch, DispatchReport};
use super::enumerator::CandidateEnumerator;
use super::traits::Command;
use chrono::{DateTime, Utc};
use cmdcenter_foundation::{CenterSettings, DispatchPolicy, Error, Result};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, error, info, warn};

// ============================================================================
// RegistryState
// ============================================================================

/// 레지스트리 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryState {
    /// 아직 스캔 전
    Uninitialized,

    /// 네임스페이스 스캔 중
    Scanning { namespace: String },

    /// 스캔 완료, 디스패치 가능
    Ready,
}

impl fmt::Display for RegistryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Scanning { namespace } => write!(f, "scanning({})", namespace),
            Self::Ready => write!(f, "ready"),
        }
    }
}

// ============================================================================
// AdmittedCommand / ScanReport
// ============================================================================

/// 등록된 명령어 인스턴스
pub(crate) struct AdmittedCommand {
    pub(crate) id: String,
    pub(crate) command: Box<dyn Command>,
}

impl AdmittedCommand {
    fn id(&self) -> &str {
        &self.id
    }
}

/// 스캔 결과 요약
#[derive(Debug, Default)]
pub struct ScanReport {
    /// 스캔한 네임스페이스 (순서대로)
    pub namespaces: Vec<String>,

    /// 등록된 후보 ID (등록 순서)
    pub admitted: Vec<String>,

    /// `enabled = false`로 건너뛴 후보
    pub disabled: Vec<String>,

    /// 메타데이터가 없어 무시한 후보
    pub ignored: Vec<String>,

    /// 이미 등록되었거나 실패로 확정되어 건너뛴 후보
    pub duplicates: Vec<String>,

    /// Lookup/Configuration/Construction 에러
    pub failures: Vec<Error>,

    /// 스캔 완료 시각
    pub completed_at: Option<DateTime<Utc>>,
}

impl ScanReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// 설정 오류(계약 미준수) 목록
    pub fn configuration_errors(&self) -> Vec<&Error> {
        self.failures
            .iter()
            .filter(|e| matches!(e, Error::Configuration { .. }))
            .collect()
    }

    /// 생성 실패 목록
    pub fn construction_errors(&self) -> Vec<&Error> {
        self.failures
            .iter()
            .filter(|e| matches!(e, Error::Construction { .. }))
            .collect()
    }

    /// 해석하지 못한 네임스페이스 목록
    pub fn lookup_errors(&self) -> Vec<&Error> {
        self.failures
            .iter()
            .filter(|e| matches!(e, Error::Lookup { .. }))
            .collect()
    }
}

// ============================================================================
// CommandCenter
// ============================================================================

/// 명령어 레지스트리 + 디스패처
pub struct CommandCenter {
    /// 스캔할 네임스페이스
    namespaces: Vec<String>,

    /// 등록된 명령어 (등록 순서 = 실행 순서)
    commands: Vec<AdmittedCommand>,

    /// 등록된 ID (중복 방지)
    admitted_ids: HashSet<String>,

    /// 설정/생성 실패로 확정된 ID (다시 시도하지 않음)
    failed_ids: HashSet<String>,

    state: RegistryState,

    /// 기본 디스패치 정책
    dispatch: DispatchPolicy,

    report: ScanReport,

    /// 수동 등록 카운터 (ID 생성용)
    manual_counter: usize,
}

impl CommandCenter {
    /// 새 레지스트리 생성 (스캔 전)
    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespaces: namespaces.into_iter().map(Into::into).collect(),
            commands: Vec::new(),
            admitted_ids: HashSet::new(),
            failed_ids: HashSet::new(),
            state: RegistryState::Uninitialized,
            dispatch: DispatchPolicy::default(),
            report: ScanReport::default(),
            manual_counter: 0,
        }
    }

    /// 설정으로 생성
    pub fn from_settings(settings: &CenterSettings) -> Self {
        Self::new(settings.namespaces.iter().cloned()).with_dispatch(settings.dispatch)
    }

    /// 빌더 패턴: 디스패치 정책 설정
    pub fn with_dispatch(mut self, dispatch: DispatchPolicy) -> Self {
        self.dispatch = dispatch;
        self
    }

    // ========================================================================
    // 발견 (discovery)
    // ========================================================================

    /// 모든 네임스페이스 스캔
    ///
    /// `Uninitialized` 상태에서 한 번만 호출할 수 있습니다.
    /// 후보 하나의 실패는 그 후보에만 한정되며 스캔은 계속됩니다.
    pub fn scan(&mut self, enumerator: &dyn CandidateEnumerator) -> Result<&ScanReport> {
        if self.state != RegistryState::Uninitialized {
            return Err(Error::AlreadyScanned(self.state.to_string()));
        }

        info!("Scanning {} namespaces for commands", self.namespaces.len());

        for namespace in self.namespaces.clone() {
            self.state = RegistryState::Scanning {
                namespace: namespace.clone(),
            };
            self.scan_namespace(&namespace, enumerator);
            self.report.namespaces.push(namespace);
        }

        self.state = RegistryState::Ready;
        self.report.completed_at = Some(Utc::now());

        info!(
            "Command center ready: {} admitted, {} disabled, {} failed",
            self.report.admitted.len(),
            self.report.disabled.len(),
            self.report.failures.len()
        );

        Ok(&self.report)
    }

    /// 네임스페이스 하나 스캔
    fn scan_namespace(&mut self, namespace: &str, enumerator: &dyn CandidateEnumerator) {
        let listing = match enumerator.enumerate(namespace) {
            Ok(listing) => listing,
            Err(e) => {
                self.record_lookup_failure(namespace, e);
                return;
            }
        };

        // 일부 소스만 실패한 경우: 실패는 기록하고 나머지 후보는 계속 검사
        for failure in listing.failures {
            self.record_lookup_failure(namespace, failure);
        }

        debug!("Found {} candidates in {}", listing.candidates.len(), namespace);

        for candidate in listing.candidates {
            self.consider(candidate);
        }
    }

    fn record_lookup_failure(&mut self, namespace: &str, e: Error) {
        let e = match e {
            Error::Lookup { .. } => e,
            other => Error::lookup(namespace, other.to_string()),
        };
        warn!("Failed to resolve namespace {}: {}", namespace, e);
        self.report.failures.push(e);
    }

    /// 후보 하나 검사: 메타데이터 → (이전 실패) → 계약 → enabled → 중복 → 생성
    ///
    /// 한 번 실패한 ID는 이후 네임스페이스에 다시 나와도 건너뜁니다.
    fn consider(&mut self, candidate: Candidate) {
        let id = candidate.id().to_string();

        let Some(metadata) = candidate.metadata() else {
            debug!("Ignoring {}: no command metadata", id);
            self.report.ignored.push(id);
            return;
        };

        if self.failed_ids.contains(&id) {
            debug!("Command {} already failed during this scan, skipping", id);
            self.report.duplicates.push(id);
            return;
        }

        if !candidate.conforms() {
            let err = Error::configuration(&id, "Candidate must implement Command");
            error!("{}", err);
            self.failed_ids.insert(id);
            self.report.failures.push(err);
            return;
        }

        if !metadata.enabled {
            info!(
                "Skipped instantiation for [{}]. Set enabled to true to instantiate this command.",
                id
            );
            self.report.disabled.push(id);
            return;
        }

        if self.admitted_ids.contains(&id) {
            debug!("Command {} is already registered, skipping", id);
            self.report.duplicates.push(id);
            return;
        }

        match candidate.instantiate() {
            Ok(command) => {
                self.admit(id.clone(), command);
                self.report.admitted.push(id);
            }
            Err(e) => {
                warn!("{}", e);
                self.failed_ids.insert(id);
                self.report.failures.push(e);
            }
        }
    }

    fn admit(&mut self, id: String, command: Box<dyn Command>) {
        info!("Registered command: {}", id);
        self.admitted_ids.insert(id.clone());
        self.commands.push(AdmittedCommand { id, command });
    }

    // ========================================================================
    // 수동 등록
    // ========================================================================

    /// 이미 만들어진 인스턴스를 직접 등록 (검증 없이 맨 뒤에 추가)
    ///
    /// 생성된 ID를 반환합니다.
    pub fn add(&mut self, command: Box<dyn Command>) -> String {
        let id = loop {
            self.manual_counter += 1;
            let id = format!("manual#{}", self.manual_counter);
            if !self.admitted_ids.contains(&id) {
                break id;
            }
        };

        self.admit(id.clone(), command);
        id
    }

    /// ID를 지정해 직접 등록
    ///
    /// 같은 ID가 이미 있으면 등록하지 않고 `false`를 반환합니다.
    pub fn add_named(&mut self, id: impl Into<String>, command: Box<dyn Command>) -> bool {
        let id = id.into();

        if self.admitted_ids.contains(&id) {
            warn!("Command {} is already registered", id);
            return false;
        }

        self.admit(id, command);
        true
    }

    // ========================================================================
    // 디스패치
    // ========================================================================

    /// 등록된 모든 명령어를 기본 정책으로 실행
    pub fn run(&self) -> Result<DispatchReport> {
        self.run_with(self.dispatch)
    }

    /// 지정한 정책으로 실행
    pub fn run_with(&self, policy: DispatchPolicy) -> Result<DispatchReport> {
        if self.state != RegistryState::Ready {
            return Err(Error::NotReady(self.state.to_string()));
        }

        info!("Dispatching {} commands ({})", self.commands.len(), policy);
        dispatch(&self.commands, policy)
    }

    // ========================================================================
    // 접근자
    // ========================================================================

    pub fn state(&self) -> &RegistryState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == RegistryState::Ready
    }

    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    pub fn dispatch_policy(&self) -> DispatchPolicy {
        self.dispatch
    }

    pub fn report(&self) -> &ScanReport {
        &self.report
    }

    /// 등록 순서대로 명령어 ID
    pub fn ids(&self) -> Vec<&str> {
        self.commands.iter().map(AdmittedCommand::id).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.admitted_ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Debug for CommandCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandCenter")
            .field("namespaces", &self.namespaces)
            .field("state", &self.state)
            .field("commands", &self.ids())
            .field("dispatch", &self.dispatch)
            .finish()
    }
}
