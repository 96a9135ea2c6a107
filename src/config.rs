use {
	crate::error::{Error, Result},
	serde::Deserialize,
	std::{
		fs,
		io::ErrorKind,
		path::{Path, PathBuf},
	},
	tracing::level_filters::LevelFilter,
};

pub const CONFIG_FILE: &str = "binmaps.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub logLevel: LogLevel,
	pub overworld: MapJob,
	pub underworld: MapJob,
}

/// Where one map is read from and where its flat binary goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapJob {
	pub source: PathBuf,
	pub output: PathBuf,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Error,
	Warn,
	#[default]
	Info,
	Debug,
	Trace,
}

impl From<LogLevel> for LevelFilter {
	fn from(level: LogLevel) -> Self {
		match level {
			LogLevel::Error => LevelFilter::ERROR,
			LogLevel::Warn => LevelFilter::WARN,
			LogLevel::Info => LevelFilter::INFO,
			LogLevel::Debug => LevelFilter::DEBUG,
			LogLevel::Trace => LevelFilter::TRACE,
		}
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			logLevel: LogLevel::default(),
			overworld: MapJob { source: "u5world.toml".into(), output: "brita.map".into() },
			underworld: MapJob { source: "u5underworld.toml".into(), output: "under.map".into() },
		}
	}
}

/// Partial form of [`Config`]: a job table may set just one of its keys.
#[derive(Deserialize, Default)]
#[serde(default)]
struct ConfigTOML {
	logLevel: Option<LogLevel>,
	overworld: MapJobTOML,
	underworld: MapJobTOML,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct MapJobTOML {
	source: Option<PathBuf>,
	output: Option<PathBuf>,
}

impl MapJobTOML {
	fn over(self, default: MapJob) -> MapJob {
		MapJob { source: self.source.unwrap_or(default.source), output: self.output.unwrap_or(default.output) }
	}
}

impl Config {
	pub fn parse(text: &str, path: impl Into<PathBuf>) -> Result<Self> {
		let ConfigTOML { logLevel, overworld, underworld } =
			toml::from_str(text).map_err(|source| Error::Toml { path: path.into(), source })?;
		let default = Self::default();
		Ok(Self {
			logLevel: logLevel.unwrap_or(default.logLevel),
			overworld: overworld.over(default.overworld),
			underworld: underworld.over(default.underworld),
		})
	}

	/// Loads `path`, or the defaults when there is no such file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		match fs::read_to_string(path) {
			Ok(text) => Self::parse(&text, path),
			Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
			Err(source) => Err(Error::Io { path: path.into(), source }),
		}
	}
}
