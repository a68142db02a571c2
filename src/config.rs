use serde::Deserialize;
use std::fs;
use std::path::Path;

const ENV_CONFIG_PATH: &str = "CLAIMCHECK_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "claimcheck.yaml";

/// How the scoring service treats incoming claim records.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    /// Substitute the demo record for requests that name no product.
    #[serde(default = "default_true")]
    pub fallback_to_demo: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { fallback_to_demo: true }
    }
}

/// Contents of `claimcheck.yaml`; only the `server` table is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerSection,
}

/// Everything `claimcheck serve` needs to start.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerSection,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerSection::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Bind address from `HOST`/`PORT`, scoring behaviour from the YAML file.
    /// `path` wins over `CLAIMCHECK_CONFIG_PATH`; an unreadable file means defaults.
    pub fn from_env(path: Option<&str>) -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path = path.map(str::to_string).unwrap_or_else(|| {
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
        });

        let server = Self::load_config_file(Path::new(&config_path))
            .map(|cf| cf.server)
            .unwrap_or_default();

        Self { server, port, host }
    }

    fn load_config_file(path: &Path) -> Option<ConfigFile> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no claimcheck config file, keeping default server settings");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match parse_config(&contents) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "loaded claimcheck server settings");
                    Some(config)
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "claimcheck config is not valid YAML, keeping defaults");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "claimcheck config could not be read, keeping defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_config(contents: &str) -> Result<ConfigFile, serde_yaml::Error> {
    let contents = contents.trim();
    if contents.is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str(contents)
}
