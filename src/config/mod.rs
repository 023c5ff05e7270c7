pub mod local;
pub mod toml_config;

use crate::core::ConfigProvider;

/// Input file read by the `postal-analyzer` binary, relative to the working directory.
pub const INPUT_FILE: &str = "codigos_postales_hmo.csv";

/// Fixed configuration used when no config file is involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfig;

impl ConfigProvider for DefaultConfig {
    fn input_path(&self) -> &str {
        INPUT_FILE
    }

    fn base_dir(&self) -> &str {
        "."
    }

    fn monitoring_enabled(&self) -> bool {
        false
    }
}
