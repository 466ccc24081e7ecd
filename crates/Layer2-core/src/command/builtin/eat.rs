//! Eat command

use crate::command::{Command, CommandCatalog, CommandMetadata};
use cmdcenter_foundation::Result;

/// `enabled = false`로 선언되는 명령어
#[derive(Debug, Default)]
pub struct EatCommand;

impl Command for EatCommand {
    fn execute(&self) -> Result<()> {
        println!("Performing Eat Command.");
        Ok(())
    }
}

pub(super) fn declare(catalog: &mut CommandCatalog, namespace: &str) {
    catalog.declare::<EatCommand>(namespace, "EatCommand", CommandMetadata::disabled());
}
