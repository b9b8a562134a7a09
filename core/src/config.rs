use std::path::{Path, PathBuf};
use std::result::Result as StdResult;
use std::time::Duration;

use anyhow::Context as _;
use rust_embed::RustEmbed;
use serde::Deserialize;

use evx_webclient::ApiConfig;

use crate::action::Pacing;
use crate::fsutil;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(skip)]
    pub source_config_file: Option<PathBuf>,
    pub api: ApiConfig,

    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    #[serde(default = "RunConfig::default_pacing_ms")]
    pub pacing_ms: u64,

    #[serde(default = "RunConfig::default_results_file")]
    pub results_file: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pacing_ms: Self::default_pacing_ms(),
            results_file: Self::default_results_file(),
        }
    }
}

impl RunConfig {
    fn default_pacing_ms() -> u64 {
        1000
    }

    fn default_results_file() -> PathBuf {
        "test-results.json".into()
    }

    pub fn pacing(&self) -> Pacing {
        Pacing::every(Duration::from_millis(self.pacing_ms))
    }
}

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

impl Config {
    pub const FILENAME: &str = "evx.toml";

    pub fn example_toml() -> String {
        let file = Asset::get(Self::FILENAME).unwrap();
        std::str::from_utf8(file.data.as_ref()).unwrap().to_owned()
    }

    pub fn from_toml(s: &str) -> StdResult<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn from_toml_file(filepath: PathBuf) -> anyhow::Result<Self> {
        let toml = fsutil::read_to_string(&filepath).context("Cannot read a file")?;
        let mut cfg = Self::from_toml(&toml)
            .with_context(|| format!("Invalid config TOML: {:?}", filepath))?;
        cfg.source_config_file = Some(filepath);
        Ok(cfg)
    }

    /// Find config file in ancestor dirs, including current dir.
    pub fn find_file_in_ancestors(cur_dir: impl AsRef<Path>) -> anyhow::Result<PathBuf> {
        let cur_dir = cur_dir.as_ref();
        cur_dir
            .ancestors()
            .map(|dir| dir.join(Self::FILENAME))
            .find(|path| path.is_file())
            .with_context(|| {
                format!(
                    "No config found: Cannot find '{}' in current dir or its ancestors",
                    Self::FILENAME
                )
            })
    }

    pub fn from_file_finding_in_ancestors(cur_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_filepath = Config::find_file_in_ancestors(cur_dir)?;
        Self::from_toml_file(config_filepath)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn example_toml_should_be_parsable() {
        let toml = Config::example_toml();
        let cfg = dbg!(Config::from_toml(&toml)).unwrap();

        let Config {
            source_config_file,
            api,
            run,
        } = cfg;

        assert_eq!(source_config_file, None);
        assert_eq!(
            api.endpoint.as_str(),
            "https://ltgxvskqotbuclrinhej.supabase.co/functions/v1/ai-extract-event"
        );
        assert!(!api.token.is_empty());
        assert_eq!(api.timeout_secs, 30);

        assert_eq!(run.pacing_ms, 1000);
        assert_eq!(run.results_file, Path::new("test-results.json"));
        assert_eq!(run.pacing().interval(), Duration::from_millis(1000));
    }

    #[test]
    fn run_section_is_optional_with_defaults() {
        let cfg = Config::from_toml(
            r#"
            [api]
            endpoint = "https://example.com/extract"
            token = "secret"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.api.timeout_secs, ApiConfig::DEFAULT_TIMEOUT_SECS);
        assert_eq!(cfg.run, RunConfig::default());
    }
}
