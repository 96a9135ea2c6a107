#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	std::process::ExitCode,
	tracing::{error, warn},
	u5_binmaps::{
		config::{Config, LogLevel, CONFIG_FILE},
		driver, logging, MapTOMLFile,
	},
};

fn main() -> ExitCode {
	let levelHandle = logging::init(LogLevel::default());
	let result = Config::load(CONFIG_FILE).and_then(|config| {
		if let Err(err) = levelHandle.reload(config.logLevel) {
			warn!("{err}");
		}
		driver::run(
			&config,
			&MapTOMLFile { path: config.overworld.source.clone() },
			&MapTOMLFile { path: config.underworld.source.clone() },
		)
	});
	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("{err}");
			ExitCode::FAILURE
		}
	}
}
