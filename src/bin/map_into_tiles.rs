#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	clap::Parser,
	std::{path::PathBuf, process::ExitCode},
	tracing::error,
	u5_binmaps::{config::LogLevel, logging, tiles},
};

fn main() -> ExitCode {
	#[derive(Parser)]
	#[clap(about = "Turns a 256x256 .map file into a 255x255 .tiles tilemap next to it")]
	struct Args {
		mapPath: PathBuf,
	}
	let Args { mapPath } = Args::parse();
	logging::init(LogLevel::default());
	match tiles::convertMapFile(&mapPath) {
		Ok(_) => ExitCode::SUCCESS,
		Err(err) => {
			error!("{err}");
			ExitCode::FAILURE
		}
	}
}
