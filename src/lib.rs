#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

//! Builds the flat binary `.map` files of the overworld and underworld, and
//! turns them into `.tiles` tilemaps.

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod map;
pub mod source;
pub mod tiles;

pub use {
	error::{Error, Result},
	map::{writeMap, MapData, RowData, MAP_ROWS},
	source::{MapSource, MapTOML, MapTOMLFile},
};
