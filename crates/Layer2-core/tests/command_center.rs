//! Command Center 통합 테스트
//!
//! 열거자 → 스캔 → 등록 → 디스패치 전체 흐름 검증

use cmdcenter_core::{
    Candidate, CandidateEnumerator, Capability, CenterSettings, ChainedEnumerator, Command,
    CommandCatalog, CommandCenter, CommandMetadata, DispatchPolicy, Error, FactoryTable,
    LazyCommandCenter, ManifestEnumerator, Result,
};
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

// ============================================================================
// 헬퍼
// ============================================================================

type Log = Arc<Mutex<Vec<String>>>;

struct Recorder {
    name: String,
    log: Log,
}

impl Command for Recorder {
    fn execute(&self) -> Result<()> {
        self.log.lock().unwrap().push(self.name.clone());
        Ok(())
    }
}

fn recorder(name: &str, log: &Log) -> Candidate {
    let log = Arc::clone(log);
    let command_name = name.to_string();
    Candidate::with_factory(name, move || {
        Ok(Box::new(Recorder {
            name: command_name.clone(),
            log: Arc::clone(&log),
        }) as Box<dyn Command>)
    })
    .with_metadata(CommandMetadata::enabled())
}

/// 호출 횟수를 세는 열거자
struct CountingEnumerator {
    inner: CommandCatalog,
    calls: AtomicUsize,
}

impl CountingEnumerator {
    fn new(inner: CommandCatalog) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CandidateEnumerator for CountingEnumerator {
    fn list_candidates(&self, namespace: &str) -> Result<Vec<Candidate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_candidates(namespace)
    }
}

fn settings(namespaces: &[&str]) -> CenterSettings {
    CenterSettings::default().with_namespaces(namespaces.iter().copied())
}

// ============================================================================
// 싱글톤
// ============================================================================

#[test]
fn test_singleton_scans_once() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut catalog = CommandCatalog::new();
    catalog.declare_candidate("commands", recorder("A", &log));
    let enumerator = CountingEnumerator::new(catalog);

    let lazy = LazyCommandCenter::new();
    let settings = settings(&["commands"]);

    let first = lazy.get_or_scan(&settings, &enumerator);
    for _ in 0..5 {
        let again = lazy.get_or_scan(&settings, &enumerator);
        assert!(std::ptr::eq(first, again));
    }

    // 네임스페이스 하나 → 열거자 호출 한 번
    assert_eq!(enumerator.calls(), 1);
    assert_eq!(first.lock().ids(), vec!["A"]);
}

#[test]
fn test_concurrent_first_access_scans_once() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut catalog = CommandCatalog::new();
    catalog
        .declare_candidate("first", recorder("A", &log))
        .declare_candidate("second", recorder("B", &log));
    let enumerator = CountingEnumerator::new(catalog);

    let lazy = LazyCommandCenter::new();
    let settings = settings(&["first", "second"]);

    let addresses: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| {
                scope.spawn(|| {
                    let center = lazy.get_or_scan(&settings, &enumerator);
                    center as *const _ as usize
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // 모든 스레드가 같은 인스턴스를 봄
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    // 스캔 한 번 = 네임스페이스 수만큼만 호출
    assert_eq!(enumerator.calls(), 2);

    let center = lazy.get().unwrap().lock();
    assert_eq!(center.ids(), vec!["A", "B"]);
}

// ============================================================================
// 발견/검증/등록
// ============================================================================

#[test]
fn test_disabled_candidate_never_admitted() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut catalog = CommandCatalog::new();
    catalog
        .declare_candidate(
            "commands",
            recorder("X", &log).with_metadata(CommandMetadata::disabled()),
        )
        .declare_candidate("commands", recorder("Y", &log));

    let mut center = CommandCenter::new(["commands"]);
    center.scan(&catalog).unwrap();
    center.run().unwrap();

    assert_eq!(center.ids(), vec!["Y"]);
    assert_eq!(*log.lock().unwrap(), vec!["Y"]);
}

#[test]
fn test_configuration_error_does_not_block_others() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut catalog = CommandCatalog::new();
    catalog
        .declare_candidate("commands", recorder("Before", &log))
        .declare_candidate(
            "commands",
            Candidate::new("NotACommand").with_metadata(CommandMetadata::enabled()),
        )
        .declare_candidate("commands", recorder("After", &log));

    let mut center = CommandCenter::new(["commands"]);
    let report = center.scan(&catalog).unwrap();

    assert_eq!(report.configuration_errors().len(), 1);
    assert!(report.configuration_errors()[0].is_discovery_error());
    assert_eq!(center.ids(), vec!["Before", "After"]);
}

#[test]
fn test_duplicate_candidate_constructed_once() {
    let constructed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&constructed);
    let shared = Candidate::with_factory("Shared", move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(Recorder {
            name: "Shared".into(),
            log: Arc::new(Mutex::new(Vec::new())),
        }) as Box<dyn Command>)
    })
    .with_metadata(CommandMetadata::enabled());

    let mut catalog = CommandCatalog::new();
    catalog
        .declare_candidate("first", shared.clone())
        .declare_candidate("second", shared);

    let mut center = CommandCenter::new(["first", "second"]);
    center.scan(&catalog).unwrap();

    assert_eq!(center.len(), 1);
    assert_eq!(constructed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_manual_registration_joins_next_run() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut catalog = CommandCatalog::new();
    catalog.declare_candidate("commands", recorder("Scanned", &log));

    let lazy = LazyCommandCenter::new();
    let center = lazy.get_or_scan(&settings(&["commands"]), &catalog);

    center.lock().run().unwrap();
    center.lock().add(Box::new(Recorder {
        name: "Manual".into(),
        log: Arc::clone(&log),
    }));
    center.lock().run().unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec!["Scanned", "Scanned", "Manual"]
    );
}

#[test]
fn test_unknown_namespace_does_not_block_others() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut catalog = CommandCatalog::new();
    catalog.declare_candidate("commands", recorder("A", &log));

    let mut center = CommandCenter::new(["missing", "commands"]);
    let report = center.scan(&catalog).unwrap();

    assert_eq!(report.lookup_errors().len(), 1);
    assert_eq!(center.ids(), vec!["A"]);
}

// ============================================================================
// 빌트인 / 매니페스트
// ============================================================================

#[test]
fn test_builtin_catalog() {
    let catalog = CommandCatalog::with_builtins();
    let mut center = CommandCenter::from_settings(&CenterSettings::default());
    let report = center.scan(&catalog).unwrap();

    assert_eq!(report.disabled, vec!["EatCommand"]);
    assert_eq!(center.ids(), vec!["SpeakCommand", "SpeakExtendedCommand"]);
    assert!(center.run().unwrap().is_success());
}

#[test]
fn test_manifest_scan() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("extras.json"),
        r#"{
            "candidates": [
                { "id": "Greeter", "factory": "SpeakCommand", "implements": ["command"], "command": {} },
                { "id": "Lunch", "factory": "EatCommand", "implements": ["command"], "command": { "enabled": false } },
                { "id": "Runner", "factory": "SpeakCommand", "implements": ["runnable"], "command": {} },
                { "id": "NeedsArgs", "factory": "SpeakCommand", "implements": ["command"], "command": {}, "args": ["name"] },
                { "id": "Helper", "factory": "SpeakCommand", "implements": ["command"] }
            ]
        }"#,
    )
    .unwrap();

    let manifests = ManifestEnumerator::new(temp.path(), FactoryTable::with_builtins());
    let mut center = CommandCenter::new(["extras"]);
    let report = center.scan(&manifests).unwrap();

    assert_eq!(report.admitted, vec!["Greeter"]);
    assert_eq!(report.disabled, vec!["Lunch"]);
    assert_eq!(report.ignored, vec!["Helper"]);
    assert_eq!(report.configuration_errors().len(), 1);
    assert_eq!(report.construction_errors().len(), 1);
}

#[test]
fn test_chained_catalog_and_manifest() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("commands.json"),
        r#"{ "candidates": [
            { "id": "SpeakCommand", "implements": ["command"], "command": {} },
            { "id": "Greeter", "factory": "SpeakExtendedCommand", "implements": ["command"], "command": {} }
        ] }"#,
    )
    .unwrap();

    let chain = ChainedEnumerator::new()
        .with(Arc::new(CommandCatalog::with_builtins()))
        .with(Arc::new(ManifestEnumerator::new(
            temp.path(),
            FactoryTable::with_builtins(),
        )));

    let mut center = CommandCenter::new(["commands"]).with_dispatch(DispatchPolicy::ContinueOnError);
    let report = center.scan(&chain).unwrap();

    // SpeakCommand는 카탈로그에서 먼저 등록되고 매니페스트 쪽은 중복
    assert_eq!(report.duplicates, vec!["SpeakCommand"]);
    assert_eq!(
        center.ids(),
        vec!["SpeakCommand", "SpeakExtendedCommand", "Greeter"]
    );
}

#[test]
fn test_malformed_manifest_is_reported_alongside_catalog() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("commands.json"), "{ not json").unwrap();

    let chain = ChainedEnumerator::new()
        .with(Arc::new(CommandCatalog::with_builtins()))
        .with(Arc::new(ManifestEnumerator::new(
            temp.path(),
            FactoryTable::with_builtins(),
        )));

    let mut center = CommandCenter::from_settings(&CenterSettings::default());
    let report = center.scan(&chain).unwrap();

    let lookups = report.lookup_errors();
    assert_eq!(lookups.len(), 1);
    assert!(lookups[0].to_string().contains("invalid manifest"));
    assert_eq!(center.ids(), vec!["SpeakCommand", "SpeakExtendedCommand"]);
}

#[test]
fn test_missing_manifest_is_silent_alongside_catalog() {
    let temp = TempDir::new().unwrap();

    let chain = ChainedEnumerator::new()
        .with(Arc::new(CommandCatalog::with_builtins()))
        .with(Arc::new(ManifestEnumerator::new(
            temp.path(),
            FactoryTable::with_builtins(),
        )));

    let mut center = CommandCenter::from_settings(&CenterSettings::default());
    let report = center.scan(&chain).unwrap();

    assert!(!report.has_failures());
    assert_eq!(center.len(), 2);
}

#[test]
fn test_non_conformant_capability_reported_by_name() {
    let mut catalog = CommandCatalog::new();
    catalog.declare_candidate(
        "commands",
        Candidate::new("Widget")
            .implementing(Capability::Other("renderable".into()))
            .with_metadata(CommandMetadata::enabled()),
    );

    let mut center = CommandCenter::new(["commands"]);
    let report = center.scan(&catalog).unwrap();

    let message = report.failures[0].to_string();
    assert!(message.contains("[Widget]"));
    assert!(matches!(report.failures[0], Error::Configuration { .. }));
}
