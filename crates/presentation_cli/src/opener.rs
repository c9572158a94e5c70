//! Desktop URL opener
//!
//! Hands URLs to the platform's "open" command so whatever app is registered
//! for the scheme (or the browser, for web URLs) takes over.

use std::process::{Command, Stdio};

use integration_maplauncher::UrlOpener;
use tracing::{debug, warn};

/// Opens URLs through a system command
#[derive(Debug, Clone)]
pub struct CommandUrlOpener {
    program: String,
    args: Vec<String>,
}

impl CommandUrlOpener {
    /// Opener using the platform default command
    #[must_use]
    pub fn system() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("open", &[])
        } else if cfg!(target_os = "windows") {
            // `cmd /C start` would split the URL at `&`
            Self::new("rundll32", &["url.dll,FileProtocolHandler"])
        } else {
            Self::new("xdg-open", &[])
        }
    }

    /// Opener running `program args.. <url>`
    #[must_use]
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }

    /// Command that opens `url`, passed as a single argument
    fn command(&self, url: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null());
        command
    }
}

impl UrlOpener for CommandUrlOpener {
    fn open(&self, url: &str) -> bool {
        debug!(program = %self.program, %url, "Spawning URL opener");

        let status = self.command(url).status();

        match status {
            Ok(status) if status.success() => true,
            Ok(status) => {
                warn!(program = %self.program, %status, "URL opener exited with failure");
                false
            },
            Err(e) => {
                warn!(program = %self.program, error = %e, "Failed to run URL opener");
                false
            },
        }
    }
}
