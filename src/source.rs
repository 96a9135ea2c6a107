use {
	crate::{
		error::{Error, IoResultExt, Result},
		map::MapData,
	},
	serde::{Deserialize, Serialize},
	std::{
		fs,
		path::{Path, PathBuf},
	},
	tracing::debug,
};

/// Something that can produce a fresh [`MapData`] on demand.
pub trait MapSource {
	fn map(&self) -> Result<MapData>;
}

impl<F: Fn() -> Result<MapData>> MapSource for F {
	fn map(&self) -> Result<MapData> {
		self()
	}
}

/// The on-disk form of a map's static tables: `rows = [[...], ...]`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MapTOML {
	pub rows: Vec<Vec<i64>>,
}

impl MapTOML {
	pub fn parse(text: &str, path: impl Into<PathBuf>) -> Result<Self> {
		toml::from_str(text).map_err(|source| Error::Toml { path: path.into(), source })
	}

	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		debug!(path = %path.display(), "reading map source");
		Self::parse(&fs::read_to_string(path).atPath(path)?, path)
	}

	pub fn fromMap(map: &MapData) -> Self {
		Self { rows: map.rows().iter().map(|row| row.iter().copied().map(i64::from).collect()).collect() }
	}
}

impl MapSource for MapTOML {
	fn map(&self) -> Result<MapData> {
		MapData::fromValues(self.rows.clone())
	}
}

/// A map source backed by a TOML file that is read each time a map is requested.
#[derive(Debug, Clone)]
pub struct MapTOMLFile {
	pub path: PathBuf,
}

impl MapSource for MapTOMLFile {
	fn map(&self) -> Result<MapData> {
		MapTOML::open(&self.path)?.map()
	}
}
