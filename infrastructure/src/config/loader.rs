//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `SIMTRIAGE_*` environment variables with `__` as the section
    ///    separator (e.g. `SIMTRIAGE_MODEL__ID`, `SIMTRIAGE_MODEL__TIMEOUT_SECS`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./simtriage.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        let project_path = PathBuf::from("simtriage.toml");
        if project_path.exists() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("SIMTRIAGE_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.model.id, "gpt-3.5-turbo");
        assert_eq!(config.corpus.exemplar_limit, 3);
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "[model]\nid = \"gpt-4o-mini\"\ntimeout_secs = 5").unwrap();

        let path = file.path().to_path_buf();
        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.model.id, "gpt-4o-mini");
        assert_eq!(config.model.timeout_secs, 5);
        // Untouched sections keep their defaults
        assert_eq!(config.corpus.exemplar_limit, 3);
    }
}
