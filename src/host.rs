//! Host-window collaborator: closing the mini-app and opening links.
//!
//! The hosting platform may own the window; without it, the app falls back
//! to the operating system's opener and tears the window down itself.
//! Failures here are cosmetic and never block gameplay.

use async_trait::async_trait;
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument, warn};

/// Errors from host-window actions.
#[derive(Debug, Display, Error, From)]
pub enum HostError {
    /// The platform opener could not be spawned.
    #[display("failed to launch opener: {_0}")]
    Spawn(std::io::Error),
    /// The opener ran but reported failure.
    #[display("opener exited with status {status}")]
    Exited {
        /// Exit status reported by the opener process.
        status: std::process::ExitStatus,
    },
}

/// Window-control surface exposed by the hosting platform.
#[async_trait]
pub trait HostWindow: Send + Sync {
    /// Opens an external URL outside the app.
    async fn open_url(&self, url: &str) -> Result<(), HostError>;

    /// Requests that the host close the app window.
    ///
    /// Returns true when the host handled the request; otherwise the
    /// caller tears down its own window.
    fn close(&self) -> bool;
}

/// Fallback using the operating system's opener.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeWindow;

impl NativeWindow {
    fn opener() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "windows") {
            "explorer"
        } else {
            "xdg-open"
        }
    }
}

#[async_trait]
impl HostWindow for NativeWindow {
    #[instrument(skip(self))]
    async fn open_url(&self, url: &str) -> Result<(), HostError> {
        let status = tokio::process::Command::new(Self::opener())
            .arg(url)
            .status()
            .await?;

        if !status.success() {
            warn!(url, %status, "Opener reported failure");
            return Err(HostError::Exited { status });
        }

        info!(url, "Opened external URL");
        Ok(())
    }

    fn close(&self) -> bool {
        debug!("No host integration; window close handled natively");
        false
    }
}
