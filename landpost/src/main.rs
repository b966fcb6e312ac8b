mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Look up a parcel by cadastral number and print it as GeoJSON
	Lookup(tools::lookup::Subcommand),

	/// Compress a GeoJSON feature to fit a byte budget
	Compress(tools::compress::Subcommand),

	/// Compress a GeoJSON feature and dispatch it
	Send(tools::send::Subcommand),

	/// Decode a submission the way the receiving side does
	Receive(tools::receive::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Lookup(arguments) => tools::lookup::run(arguments),
		Commands::Compress(arguments) => tools::compress::run(arguments),
		Commands::Send(arguments) => tools::send::run(arguments),
		Commands::Receive(arguments) => tools::receive::run(arguments),
	}
}
