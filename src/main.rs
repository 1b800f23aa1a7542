#![forbid(unsafe_code)]

use std::io::stdout;
use std::os::unix::io::AsRawFd;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Result;
use nix::unistd::ttyname;
use tracing::debug;

use ttywatch::{cli, monitor};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ttywatch=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli::parse_args()?;

    // Set up interrupt handling
    let shutdown = Arc::new(AtomicBool::new(false));
    let _ = signal_hook::flag::register(signal_hook::consts::SIGINT, shutdown.clone());
    let _ = signal_hook::flag::register(signal_hook::consts::SIGTERM, shutdown.clone());

    // Our own terminal is always active while we print to it, so it is
    // excluded from reporting. With stdout redirected there is nothing
    // to exclude.
    let self_tty = ttyname(stdout().as_raw_fd()).ok();
    match &self_tty {
        Some(path) => debug!("excluding own terminal {}", path.display()),
        None => debug!("stdout is not a terminal; self-exclusion disabled"),
    }

    monitor::start_watching(config, self_tty, shutdown)
}
