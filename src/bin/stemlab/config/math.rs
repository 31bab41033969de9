use anyhow::{Context, Result};

use stemlab::math::Viewport;

use crate::cli::ViewportOptions;

pub fn build_viewport(opts: &ViewportOptions) -> Result<Viewport> {
    Viewport::new(opts.x_min, opts.x_max, opts.y_min, opts.y_max).context("Invalid viewport")
}
