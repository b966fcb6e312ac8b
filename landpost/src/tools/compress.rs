use super::read_feature;
use anyhow::Result;
use clap::Args;
use landpost::geometry::compress_feature;
use log::warn;
use std::path::PathBuf;

const DEFAULT_BUDGET: usize = 3600;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON feature file, or "-" for stdin
	#[arg(required = true)]
	filename: PathBuf,

	/// byte budget for the serialized feature
	#[arg(long, short, default_value_t = DEFAULT_BUDGET)]
	budget: usize,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let feature = read_feature(&arguments.filename)?;
	let compressed = compress_feature(&feature, arguments.budget)?;
	if !compressed.is_within_budget() {
		warn!("best effort is {} bytes, over the {} byte budget", compressed.size, compressed.budget);
	}
	eprintln!("{} bytes, stride {:?}", compressed.size, compressed.stride);
	println!("{}", compressed.feature.to_json_string()?);
	Ok(())
}
