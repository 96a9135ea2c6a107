//! Conversion of flat `.map` files into `.tiles` tilemaps.
//!
//! The maps are 256x256 but the tilemap hardware wants 255x255, so the last
//! column of every row and the last row are dropped. Each tile entry is a
//! little-endian `u16`: low byte is the index inside a 256-tile set, bit 8
//! selects the second set. CLUT bits stay zero.

use {
	crate::{
		error::{Error, IoResultExt, Result},
		map::MAP_ROWS,
	},
	byteorder::{ByteOrder, LE},
	std::{
		fs,
		path::{Path, PathBuf},
	},
	tracing::info,
};

pub const MAP_SIDE: usize = MAP_ROWS;
pub const MAP_FILE_LEN: usize = MAP_SIDE * MAP_SIDE;
pub const TILEMAP_SIDE: usize = MAP_SIDE - 1;
pub const TILE_ENTRY_LEN: usize = 2;
pub const TILES_FILE_LEN: usize = TILEMAP_SIDE * TILEMAP_SIDE * TILE_ENTRY_LEN;

const TILESET_SIZE: u16 = 256;

#[inline]
pub fn tileEntry(tileIndex: u16) -> u16 {
	(u16::from(tileIndex >= TILESET_SIZE) << 8) | (tileIndex & 0x00FF)
}

pub fn mapIntoTiles(map: &[u8]) -> Result<Vec<u8>> {
	if map.len() != MAP_FILE_LEN {
		return Err(Error::MapSize { found: map.len() });
	}
	let mut tiles = vec![0; TILES_FILE_LEN];
	let mut entries = tiles.chunks_exact_mut(TILE_ENTRY_LEN);
	for row in map.chunks_exact(MAP_SIDE).take(TILEMAP_SIDE) {
		for (&byte, entry) in row[..TILEMAP_SIDE].iter().zip(&mut entries) {
			LE::write_u16(entry, tileEntry(byte.into()));
		}
	}
	Ok(tiles)
}

pub fn tilesPath(mapPath: impl AsRef<Path>) -> PathBuf {
	mapPath.as_ref().with_extension("tiles")
}

/// Reads a `.map` file and writes its `.tiles` counterpart next to it.
pub fn convertMapFile(mapPath: impl AsRef<Path>) -> Result<PathBuf> {
	let mapPath = mapPath.as_ref();
	let map = fs::read(mapPath).atPath(mapPath)?;
	let tiles = mapIntoTiles(&map)?;
	let tilesPath = tilesPath(mapPath);
	info!(path = %tilesPath.display(), "creating tilemap");
	fs::write(&tilesPath, tiles).atPath(&tilesPath)?;
	Ok(tilesPath)
}
