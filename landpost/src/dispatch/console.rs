use super::{HostUi, SecondaryChannel};
use anyhow::Result;
use log::debug;

/// [`SecondaryChannel`] that prints each payload on stdout, one per line.
#[derive(Debug, Default)]
pub struct StdoutChannel;

impl SecondaryChannel for StdoutChannel {
	fn send_data(&self, payload: &str) -> Result<()> {
		println!("{payload}");
		Ok(())
	}
}

/// [`HostUi`] for terminals: alerts go to stderr.
#[derive(Debug, Default)]
pub struct LogHost;

impl HostUi for LogHost {
	fn show_alert(&self, text: &str) {
		eprintln!("{text}");
	}
	fn close(&self) {
		debug!("host closed");
	}
}
