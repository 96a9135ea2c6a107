use {
	crate::{
		config::{Config, MapJob},
		error::Result,
		map::writeMap,
		source::MapSource,
	},
	tracing::info,
};

/// Builds the overworld map, then the underworld map. Stops at the first failure.
pub fn run(config: &Config, overworld: &dyn MapSource, underworld: &dyn MapSource) -> Result<()> {
	build("overworld", &config.overworld, overworld)?;
	build("underworld", &config.underworld, underworld)
}

fn build(name: &str, job: &MapJob, source: &dyn MapSource) -> Result<()> {
	// The output is not touched until the source has delivered its map.
	let data = source.map()?;
	writeMap(&job.output, &data)?;
	info!(map = name, path = %job.output.display(), bytes = data.byteLen(), "wrote map");
	Ok(())
}
