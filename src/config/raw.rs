use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: Option<Api>,
    pub geocoding: Option<Geocoding>,
    pub storage: Option<Storage>,
    pub map: Option<Map>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Api {
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub endpoint: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Storage {
    pub data_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub min_zoom_to_show: Option<f64>,
    pub cluster_zoom: Option<f64>,
    pub cluster_distance_deg: Option<f64>,
}
