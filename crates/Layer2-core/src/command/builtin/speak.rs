//! Speak command

use crate::command::{Command, CommandCatalog, CommandMetadata};
use cmdcenter_foundation::Result;

/// 공유 기본 동작: 한 줄 출력
///
/// 여러 명령어가 상속 대신 값으로 들고 재사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speech {
    line: &'static str,
}

impl Speech {
    pub const fn new(line: &'static str) -> Self {
        Self { line }
    }

    pub fn line(&self) -> &'static str {
        self.line
    }

    pub fn speak(&self) {
        println!("{}", self.line);
    }
}

impl Default for Speech {
    fn default() -> Self {
        Self::new("Performing Speak.")
    }
}

/// 기본 메타데이터로 선언되는 명령어
#[derive(Debug, Default)]
pub struct SpeakCommand {
    speech: Speech,
}

impl SpeakCommand {
    pub fn speech(&self) -> Speech {
        self.speech
    }
}

impl Command for SpeakCommand {
    fn execute(&self) -> Result<()> {
        self.speech.speak();
        Ok(())
    }
}

pub(super) fn declare(catalog: &mut CommandCatalog, namespace: &str) {
    catalog.declare::<SpeakCommand>(namespace, "SpeakCommand", CommandMetadata::default());
}
