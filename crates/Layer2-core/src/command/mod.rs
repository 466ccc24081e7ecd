//! # Command System
//!
//! 메타데이터 기반 명령어 레지스트리
//!
//! ## 흐름
//!
//! ```text
//! CandidateEnumerator ──▶ Candidate ──▶ CommandCenter::scan()
//!   (catalog, manifest)     │               │
//!                           │     metadata? ─┼─ 없음 → 무시
//!                           │     이전 실패? ─┼─ 예 → 건너뜀 (재시도 없음)
//!                           │     conforms? ─┼─ 아니오 → ConfigurationError
//!                           │     enabled?  ─┼─ 아니오 → 건너뜀 (info)
//!                           │     중복?     ─┼─ 예 → 건너뜀
//!                           └──▶ instantiate ─▶ 등록 (순서 유지)
//!
//! CommandCenter::run() ──▶ 등록 순서대로 execute()
//! ```
//!
//! ## 예시
//!
//! ```ignore
//! let mut catalog = CommandCatalog::new();
//! catalog.declare::<MyCommand>("commands", "MyCommand", CommandMetadata::default());
//!
//! let center = init_command_center(&CenterSettings::default(), &catalog);
//! center.lock().run()?;
//! ```

mod candidate;
mod catalog;
mod dispatch;
mod enumerator;
mod global;
mod manifest;
mod metadata;
mod registry;
mod traits;

pub mod builtin;

pub use builtin::{EatCommand, SpeakCommand, SpeakExtendedCommand, Speech};
pub use candidate::{Candidate, Capability, Constructor};
pub use catalog::CommandCatalog;
pub use dispatch::DispatchReport;
pub use enumerator::{CandidateEnumerator, ChainedEnumerator, Enumeration};
pub use global::{command_center, init_command_center, LazyCommandCenter};
pub use manifest::{FactoryTable, ManifestEnumerator};
pub use metadata::CommandMetadata;
pub use registry::{CommandCenter, RegistryState, ScanReport};
pub use traits::Command;
