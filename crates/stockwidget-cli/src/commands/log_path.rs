use std::path::PathBuf;

use super::CommandResult;

pub fn run(log_path: PathBuf) -> CommandResult {
    CommandResult::LogPath { log_path }
}
