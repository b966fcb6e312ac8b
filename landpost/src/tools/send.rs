use super::read_feature;
use anyhow::{Result, bail};
use clap::Args;
use landpost::{
	config::Config,
	dispatch::{DispatchRouter, HttpPrimaryChannel, LogHost, StdoutChannel},
};
use log::info;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON feature file, or "-" for stdin
	#[arg(required = true)]
	filename: PathBuf,

	/// YAML configuration file
	#[arg(long, short)]
	config: Option<PathBuf>,

	/// backend base url, overrides the configuration
	#[arg(long)]
	backend: Option<String>,

	/// user id attached to the backend submission; without it the feature is only printed
	#[arg(long, short)]
	user_id: Option<u64>,

	/// byte budget for the serialized feature
	#[arg(long, short)]
	budget: Option<usize>,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let mut config = Config::load(arguments.config.as_deref())?;
	config.dispatch.override_optional_backend_url(&arguments.backend);
	config.dispatch.override_optional_compression_budget(&arguments.budget);

	let primary = config
		.dispatch
		.backend_url
		.as_deref()
		.map(HttpPrimaryChannel::new)
		.transpose()?;
	if arguments.user_id.is_some() && primary.is_none() {
		bail!("a user id needs a backend, set dispatch.backend_url or pass --backend");
	}

	let feature = read_feature(&arguments.filename)?;
	let router = DispatchRouter::new(primary, StdoutChannel, LogHost, &config.dispatch);
	let outcome = router.dispatch(&feature, arguments.user_id).await?;

	info!(
		"{} bytes, primary {:?}, secondary {:?}",
		outcome.size(),
		outcome.primary,
		outcome.secondary
	);
	Ok(())
}
