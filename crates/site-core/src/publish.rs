//! Best-effort push of the patched document to remote storage.

use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::Command;

use site_fs::NormalizedPath;

use crate::config::PublishConfig;

/// How a publish attempt ended.
///
/// Publishing is the one step of an update that never fails the run:
/// the patched document is already durable on local disk by the time
/// this executes, so remote trouble is reported and tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The tool ran and exited zero.
    Published,
    /// The tool is not installed; nothing was attempted.
    ToolUnavailable,
    /// The tool ran and failed, or could not be spawned.
    Failed { message: String },
}

/// Invokes the configured upload tool (`s3cmd put <doc> <dest> --acl-public`).
pub struct Publisher {
    tool: String,
    destination: String,
}

impl Publisher {
    pub fn new(config: &PublishConfig) -> Self {
        Self {
            tool: config.tool.clone(),
            destination: config.destination.clone(),
        }
    }

    /// Upload `document` to the configured destination.
    pub fn publish(&self, document: &NormalizedPath) -> PublishOutcome {
        let Some(tool_path) = resolve_tool(&self.tool) else {
            tracing::warn!("{} not found, skipping publish", self.tool);
            return PublishOutcome::ToolUnavailable;
        };

        let result = Command::new(&tool_path)
            .arg("put")
            .arg(document.as_str())
            .arg(&self.destination)
            .arg("--acl-public")
            .output();

        match result {
            Ok(output) if output.status.success() => {
                tracing::info!("published {document} to {}", self.destination);
                PublishOutcome::Published
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let message = match stderr.trim() {
                    "" => format!(
                        "{} exited with status {:?}",
                        self.tool,
                        output.status.code()
                    ),
                    trimmed => format!("{} failed: {trimmed}", self.tool),
                };
                tracing::warn!("{message}");
                PublishOutcome::Failed { message }
            }
            Err(e) => {
                let message = format!("failed to run {}: {e}", self.tool);
                tracing::warn!("{message}");
                PublishOutcome::Failed { message }
            }
        }
    }
}

/// Find the tool on PATH, or take it verbatim when given as a path.
fn resolve_tool(tool: &str) -> Option<PathBuf> {
    if tool.contains('/') || tool.contains('\\') {
        let direct = PathBuf::from(tool);
        return direct.is_file().then_some(direct);
    }
    let path_var = env::var_os("PATH")?;
    find_in(&path_var, tool)
}

fn find_in(path_var: &OsStr, tool: &str) -> Option<PathBuf> {
    env::split_paths(path_var)
        .map(|dir| dir.join(tool))
        .find(|candidate| candidate.is_file())
}
