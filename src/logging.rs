use {
	std::io,
	tracing::level_filters::LevelFilter,
	tracing_subscriber::{fmt, prelude::*, reload},
};

pub type LevelHandle = reload::Handle<LevelFilter, tracing_subscriber::Registry>;

/// Installs the stderr subscriber. The level can be changed later through the
/// returned handle, once a config file has been read.
pub fn init(level: impl Into<LevelFilter>) -> LevelHandle {
	let (filter, handle) = reload::Layer::new(level.into());
	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(io::stderr).with_target(false))
		.init();
	handle
}
