//! Speak extended command

use super::speak::Speech;
use crate::command::{Command, CommandCatalog, CommandMetadata};
use cmdcenter_foundation::Result;

const EXTENDED_LINE: &str = "Performing extended Speak.";

/// `SpeakCommand`와 같은 `Speech` 동작을 쓰되 출력 문구를 바꾼 명령어
///
/// `SpeakCommand`와는 별개 후보로 등록됩니다.
#[derive(Debug)]
pub struct SpeakExtendedCommand {
    speech: Speech,
}

impl SpeakExtendedCommand {
    pub fn speech(&self) -> Speech {
        self.speech
    }
}

impl Default for SpeakExtendedCommand {
    fn default() -> Self {
        Self {
            speech: Speech::new(EXTENDED_LINE),
        }
    }
}

impl Command for SpeakExtendedCommand {
    fn execute(&self) -> Result<()> {
        self.speech.speak();
        Ok(())
    }
}

pub(super) fn declare(catalog: &mut CommandCatalog, namespace: &str) {
    catalog.declare::<SpeakExtendedCommand>(
        namespace,
        "SpeakExtendedCommand",
        CommandMetadata::default(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::SpeakCommand;

    #[test]
    fn test_overrides_shared_speech() {
        let base = SpeakCommand::default();
        let extended = SpeakExtendedCommand::default();

        assert_ne!(base.speech(), extended.speech());
        assert_eq!(extended.speech().line(), "Performing extended Speak.");
    }
}
