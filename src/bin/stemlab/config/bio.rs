use anyhow::{Result, bail};

use stemlab::bio::AnalysisConfig;

use crate::cli::PatternOptions;

pub fn build_analysis_config(opts: &PatternOptions) -> Result<AnalysisConfig> {
    if opts.min_len == 0 {
        bail!("--min-pattern must be at least 1");
    }
    if opts.min_len > opts.max_len {
        bail!(
            "--min-pattern ({}) is larger than --max-pattern ({})",
            opts.min_len,
            opts.max_len
        );
    }

    Ok(AnalysisConfig {
        min_pattern_len: opts.min_len,
        max_pattern_len: opts.max_len,
        max_patterns: opts.max_patterns,
    })
}
