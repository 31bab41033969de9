mod bio;
mod math;
mod physics;
mod presets;

pub use bio::build_analysis_config;
pub use math::build_viewport;
pub use physics::{build_frame_clock, build_launch};
pub use presets::load_catalog;
