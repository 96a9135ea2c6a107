use {
	crate::{map::MAP_ROWS, tiles::MAP_FILE_LEN},
	std::{io, path::PathBuf},
	thiserror::Error,
};

#[derive(Debug, Error)]
pub enum Error {
	#[error("{}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("{}: {source}", .path.display())]
	Toml {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("map has {found} rows, expected {}", MAP_ROWS)]
	RowCount { found: usize },

	#[error("row {row}, column {column}: {value} is not a byte value")]
	ByteRange { row: usize, column: usize, value: i64 },

	#[error("map file is {found} bytes, expected {}", MAP_FILE_LEN)]
	MapSize { found: usize },

	#[error("map source failed: {0}")]
	Source(String),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

pub(crate) trait IoResultExt<T> {
	fn atPath(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
	fn atPath(self, path: impl Into<PathBuf>) -> Result<T> {
		self.map_err(|source| Error::Io { path: path.into(), source })
	}
}
