use anyhow::{Context, Result};
use clap::Args;
use landpost::dispatch::{Submission, decode_submission};
use std::{fs, path::PathBuf};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// submission body, or "-" for stdin
	#[arg(required = true)]
	filename: PathBuf,

	/// read a host message instead of a backend body
	#[arg(long)]
	message: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let path = &arguments.filename;
	let body = if path.as_os_str() == "-" {
		std::io::read_to_string(std::io::stdin()).context("reading stdin")?
	} else {
		fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?
	};

	let kind = if arguments.message {
		Submission::HostMessage
	} else {
		Submission::Backend
	};
	let parcel = decode_submission(&body, kind)?;

	println!("source: {}", parcel.source_label);
	if let Some(user_id) = parcel.user_id {
		println!("user: {user_id}");
	}
	println!("geometry: {}", parcel.geometry.type_name());
	if let Some(legal) = &parcel.legal {
		for (label, value) in legal.labeled() {
			println!("{label}: {value}");
		}
	}
	Ok(())
}
