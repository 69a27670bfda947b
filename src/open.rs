//! Opening a built search URL in the user's browser.

use std::process::Command;

use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("could not start browser opener '{program}': {source}")]
    Spawn {
        program: &'static str,
        source: std::io::Error,
    },

    #[error("browser opener '{program}' exited with {status}")]
    Status {
        program: &'static str,
        status: std::process::ExitStatus,
    },
}

/// Opens URLs outside the process. Implemented by `SystemLauncher` for production;
/// mock implementations used in tests.
pub trait Launcher {
    fn launch(&self, url: &str) -> Result<(), OpenError>;
}

/// Launcher backed by the platform's URL opener.
pub struct SystemLauncher;

impl SystemLauncher {
    fn command(url: &str) -> (&'static str, Command) {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            ("open", cmd)
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(url);
            ("cmd", cmd)
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            ("xdg-open", cmd)
        }
    }
}

impl Launcher for SystemLauncher {
    fn launch(&self, url: &str) -> Result<(), OpenError> {
        let (program, mut cmd) = Self::command(url);
        debug!(program, "launching browser");
        let status = cmd
            .status()
            .map_err(|source| OpenError::Spawn { program, source })?;
        if !status.success() {
            return Err(OpenError::Status { program, status });
        }
        Ok(())
    }
}
