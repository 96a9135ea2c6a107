use {
	crate::error::{Error, IoResultExt, Result},
	std::{
		fs::File,
		io::{BufWriter, Write},
		path::Path,
	},
	tracing::debug,
};

pub const MAP_ROWS: usize = 256;

pub type RowData = Vec<u8>;

/// One complete map: exactly [`MAP_ROWS`] rows of tile bytes, in row order.
/// Rows are not required to share a length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapData {
	rows: Box<[RowData]>,
}

impl MapData {
	pub fn new(rows: Vec<RowData>) -> Result<Self> {
		if rows.len() != MAP_ROWS {
			return Err(Error::RowCount { found: rows.len() });
		}
		Ok(Self { rows: rows.into_boxed_slice() })
	}

	/// Builds a map out of untyped integers, as found in TOML sources.
	/// A value outside `0..=255` is rejected, never wrapped.
	pub fn fromValues(values: Vec<Vec<i64>>) -> Result<Self> {
		if values.len() != MAP_ROWS {
			return Err(Error::RowCount { found: values.len() });
		}
		let mut rows = Vec::with_capacity(MAP_ROWS);
		for (row, rowValues) in values.into_iter().enumerate() {
			rows.push(
				rowValues
					.into_iter()
					.enumerate()
					.map(|(column, value)| {
						u8::try_from(value).map_err(|_| Error::ByteRange { row, column, value })
					})
					.collect::<Result<RowData>>()?,
			);
		}
		Self::new(rows)
	}

	pub fn rows(&self) -> &[RowData] {
		&self.rows
	}

	pub fn byteLen(&self) -> usize {
		self.rows.iter().map(Vec::len).sum()
	}

	pub fn flatten(&self) -> Vec<u8> {
		self.rows.concat()
	}
}

/// Writes `data` to `name` as raw bytes: row 0 through row 255, back to back.
/// Any existing file is truncated. On failure a partially written file may remain.
pub fn writeMap(name: impl AsRef<Path>, data: &MapData) -> Result<()> {
	let name = name.as_ref();
	let mut out = BufWriter::new(File::create(name).atPath(name)?);
	for row in data.rows() {
		out.write_all(row).atPath(name)?;
	}
	out.into_inner().map_err(|err| err.into_error()).atPath(name)?.sync_all().atPath(name)?;
	debug!(path = %name.display(), bytes = data.byteLen(), "map written");
	Ok(())
}

#[cfg(test)]
mod tests {
	use {super::*, std::fs, tempfile::TempDir};

	fn singleByteRows() -> MapData {
		MapData::new((0..MAP_ROWS).map(|i| vec![i as u8]).collect()).unwrap()
	}

	#[test]
	fn rejectsWrongRowCount() {
		assert!(matches!(MapData::new(vec![vec![0]; 255]), Err(Error::RowCount { found: 255 })));
		assert!(matches!(MapData::new(vec![vec![0]; 257]), Err(Error::RowCount { found: 257 })));
		assert!(matches!(MapData::fromValues(Vec::new()), Err(Error::RowCount { found: 0 })));
	}

	#[test]
	fn fromValuesKeepsByteBoundaries() {
		let mut values = vec![Vec::new(); MAP_ROWS];
		values[0] = vec![0];
		values[255] = vec![255];
		let map = MapData::fromValues(values).unwrap();
		assert_eq!(map.flatten(), [0, 255]);
	}

	#[test]
	fn fromValuesRejectsOutOfRange() {
		for bad in [256, -1, i64::MAX] {
			let mut values = vec![vec![7, 7]; MAP_ROWS];
			values[42][1] = bad;
			match MapData::fromValues(values) {
				Err(Error::ByteRange { row: 42, column: 1, value }) => assert_eq!(value, bad),
				other => panic!("{other:?}"),
			}
		}
	}

	#[test]
	fn writesRowsInOrder() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("brita.map");
		writeMap(&path, &singleByteRows()).unwrap();
		assert_eq!(fs::read(&path).unwrap(), (0..=255).collect::<Vec<u8>>());
	}

	#[test]
	fn lengthIsSumOfRowLengths() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("ragged.map");
		let map = MapData::new((0..MAP_ROWS).map(|i| vec![0xAB; i % 5]).collect()).unwrap();
		writeMap(&path, &map).unwrap();
		let written = fs::read(&path).unwrap();
		assert_eq!(written.len(), map.byteLen());
		assert_eq!(written, map.flatten());
	}

	#[test]
	fn emptyRowsGiveEmptyFile() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("empty.map");
		writeMap(&path, &MapData::new(vec![Vec::new(); MAP_ROWS]).unwrap()).unwrap();
		assert_eq!(fs::metadata(&path).unwrap().len(), 0);
	}

	#[test]
	fn overwritesInsteadOfAppending() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("under.map");
		fs::write(&path, vec![0xFF; 4096]).unwrap();
		let map = singleByteRows();
		writeMap(&path, &map).unwrap();
		let first = fs::read(&path).unwrap();
		writeMap(&path, &map).unwrap();
		assert_eq!(first, fs::read(&path).unwrap());
		assert_eq!(first.len(), MAP_ROWS);
	}

	#[test]
	fn missingDirectoryIsIoError() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("nowhere").join("brita.map");
		match writeMap(&path, &singleByteRows()) {
			Err(Error::Io { path: errPath, .. }) => assert_eq!(errPath, path),
			other => panic!("{other:?}"),
		}
	}
}
