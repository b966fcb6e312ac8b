use anyhow::Result;
use clap::Args;
use landpost::{
	config::Config,
	geometry::compress_feature,
	lookup::{HttpLookupProvider, LookupProvider},
};
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// cadastral number, e.g. 77:01:0001001:1234
	#[arg(required = true)]
	cad_num: String,

	/// YAML configuration file
	#[arg(long, short)]
	config: Option<PathBuf>,

	/// override the search endpoint
	#[arg(long)]
	url: Option<String>,

	/// also compress the result to this many bytes
	#[arg(long, short)]
	budget: Option<usize>,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let mut config = Config::load(arguments.config.as_deref())?;
	config.lookup.override_optional_url(&arguments.url);

	let provider = HttpLookupProvider::new(config.lookup)?;
	let feature = provider.lookup(&arguments.cad_num).await?;

	let feature = match arguments.budget {
		Some(budget) => {
			let compressed = compress_feature(&feature, budget)?;
			eprintln!("{} bytes, stride {:?}", compressed.size, compressed.stride);
			compressed.feature
		}
		None => {
			eprintln!("{} bytes", feature.serialized_size()?);
			feature
		}
	};

	println!("{}", feature.to_json_string()?);
	Ok(())
}
