use anyhow::Result;
use esmap_core::cluster::ClusterConfig;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "escapemap.toml";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";
const DEFAULT_GEOCODING_ENDPOINT: &str = "http://localhost:3000/api/geocode";
const DEFAULT_DATA_DIR: &str = "./data";

const ENV_NAME_API_BASE_URL: &str = "ESCAPEMAP_API_BASE_URL";
const ENV_NAME_GEOCODING_ENDPOINT: &str = "ESCAPEMAP_GEOCODING_ENDPOINT";
const ENV_NAME_DATA_DIR: &str = "ESCAPEMAP_DATA_DIR";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub geocoding_endpoint: String,
    pub data_dir: PathBuf,
    pub cluster: ClusterConfig,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    raw::Config::default()
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::from(raw_config);
        if let Ok(url) = env::var(ENV_NAME_API_BASE_URL) {
            cfg.api_base_url = url;
        }
        if let Ok(endpoint) = env::var(ENV_NAME_GEOCODING_ENDPOINT) {
            cfg.geocoding_endpoint = endpoint;
        }
        if let Ok(dir) = env::var(ENV_NAME_DATA_DIR) {
            cfg.data_dir = dir.into();
        }
        Ok(cfg)
    }
}

impl From<raw::Config> for Config {
    fn from(from: raw::Config) -> Self {
        let raw::Config {
            api,
            geocoding,
            storage,
            map,
        } = from;
        let mut cluster = ClusterConfig::default();
        if let Some(map) = map {
            if let Some(zoom) = map.min_zoom_to_show {
                cluster.min_zoom_to_show = zoom;
            }
            if let Some(zoom) = map.cluster_zoom {
                cluster.cluster_zoom = zoom;
            }
            if let Some(distance) = map.cluster_distance_deg {
                cluster.distance_deg = distance;
            }
        }
        Self {
            api_base_url: api
                .map(|api| api.base_url)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            geocoding_endpoint: geocoding
                .map(|geocoding| geocoding.endpoint)
                .unwrap_or_else(|| DEFAULT_GEOCODING_ENDPOINT.to_string()),
            data_dir: storage
                .map(|storage| storage.data_dir)
                .unwrap_or_else(|| DEFAULT_DATA_DIR.into()),
            cluster,
        }
    }
}
