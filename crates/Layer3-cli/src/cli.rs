//! CLI 동작 - 설정 해석, 열거자 구성, run/list

use anyhow::Context;
use cmdcenter_core::{
    init_command_center, CenterSettings, ChainedEnumerator, CommandCatalog, CommandCenter,
    DispatchPolicy, Error, FactoryTable, ManifestEnumerator,
};
use cmdcenter_foundation::config::{load_settings_file, SettingsLoader};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// 명령줄에서 받은 설정 오버라이드
#[derive(Debug, Default)]
pub struct Overrides {
    pub namespaces: Vec<String>,
    pub manifest_dir: Option<std::path::PathBuf>,
    pub continue_on_error: bool,
}

/// 설정 로드
///
/// `--config`가 주어지면 그 파일만 읽고, 없으면 user/project/local 설정을 병합합니다.
pub fn load_settings(config: Option<&Path>, working_dir: &Path) -> anyhow::Result<CenterSettings> {
    match config {
        Some(path) => {
            if !path.exists() {
                return Err(Error::NotFound(format!("settings file {}", path.display())).into());
            }
            info!("Using settings file: {}", path.display());
            let file = load_settings_file(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            Ok(file.resolve())
        }
        None => Ok(SettingsLoader::new(working_dir).load_all()),
    }
}

/// 명령줄 오버라이드 적용 (설정 파일보다 우선)
pub fn apply_overrides(
    mut settings: CenterSettings,
    overrides: &Overrides,
) -> cmdcenter_core::Result<CenterSettings> {
    if overrides.namespaces.iter().any(|ns| ns.trim().is_empty()) {
        return Err(Error::InvalidInput("namespace must not be empty".into()));
    }

    if !overrides.namespaces.is_empty() {
        settings = settings.with_namespaces(overrides.namespaces.iter().cloned());
    }
    if let Some(dir) = &overrides.manifest_dir {
        settings = settings.with_manifest_dir(dir.clone());
    }
    if overrides.continue_on_error {
        settings = settings.with_dispatch(DispatchPolicy::ContinueOnError);
    }
    Ok(settings)
}

/// 빌트인 카탈로그 + (설정된 경우) 매니페스트 디렉토리
pub fn build_enumerator(settings: &CenterSettings) -> ChainedEnumerator {
    let mut chain = ChainedEnumerator::new().with(Arc::new(CommandCatalog::with_builtins()));

    if let Some(dir) = &settings.manifest_dir {
        if !dir.is_dir() {
            warn!("Manifest directory does not exist: {}", dir.display());
        }
        chain = chain.with(Arc::new(ManifestEnumerator::new(
            dir.clone(),
            FactoryTable::with_builtins(),
        )));
    }

    chain
}

/// 스캔 후 모든 명령어 실행
pub fn run(settings: &CenterSettings) -> anyhow::Result<()> {
    let enumerator = build_enumerator(settings);
    let center = init_command_center(settings, &enumerator).lock();

    let report = center.run()?;
    info!(
        "Dispatch finished: {} executed, {} succeeded",
        report.executed.len(),
        report.succeeded()
    );

    if !report.is_success() {
        for failure in &report.failures {
            eprintln!("✗ {}", failure);
        }
    }

    Ok(())
}

/// 스캔 후 등록된 명령어와 스캔 결과 출력
pub fn list(settings: &CenterSettings) -> anyhow::Result<()> {
    let enumerator = build_enumerator(settings);
    let center = init_command_center(settings, &enumerator).lock();

    print!("{}", render_list(&center));
    Ok(())
}

/// 목록 출력 문자열 생성
pub fn render_list(center: &CommandCenter) -> String {
    let report = center.report();
    let mut lines = vec![
        String::new(),
        format!("📋 Commands ({})", center.dispatch_policy()),
        String::new(),
    ];

    if center.is_empty() {
        lines.push("  (none)".to_string());
    }
    for (index, id) in center.ids().iter().enumerate() {
        lines.push(format!("  {:>2}. {}", index + 1, id));
    }

    lines.push(String::new());
    lines.push(format!("Namespaces: {}", report.namespaces.join(", ")));
    if let Some(at) = report.completed_at {
        lines.push(format!("Scanned at: {}", at.format("%Y-%m-%d %H:%M:%S UTC")));
    }

    if !report.disabled.is_empty() {
        lines.push(format!("Disabled:   {}", report.disabled.join(", ")));
    }
    if !report.ignored.is_empty() {
        lines.push(format!("Ignored:    {}", report.ignored.join(", ")));
    }
    if !report.duplicates.is_empty() {
        lines.push(format!("Duplicates: {}", report.duplicates.join(", ")));
    }
    if report.has_failures() {
        lines.push(String::new());
        lines.push("Failures:".to_string());
        for failure in &report.failures {
            lines.push(format!("  ✗ {}", failure));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}
