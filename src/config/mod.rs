use crate::errors::{AppError, AppResult};
use crate::models::coordinate::Coordinate;
use crate::models::policy::Policy;
use crate::models::site::BusinessSite;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Main salon".to_string(),
            latitude: 25.276987,
            longitude: 55.296249,
            radius_meters: 500.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_staff_id")]
    pub staff_id: String,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default = "default_enforce_distance")]
    pub enforce_distance: bool,
}

fn default_staff_id() -> String {
    "staff".to_string()
}
fn default_enforce_distance() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            staff_id: default_staff_id(),
            site: SiteConfig::default(),
            enforce_distance: default_enforce_distance(),
        }
    }
}

impl Config {
    /// Per-user configuration directory (`~/.staffclock`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".staffclock")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("staffclock.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("staffclock.sqlite")
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Validated site (coordinate range, positive radius).
    pub fn site(&self) -> AppResult<BusinessSite> {
        let location = Coordinate::new(self.site.latitude, self.site.longitude)?;
        BusinessSite::new(&self.site.name, location, self.site.radius_meters)
    }

    pub fn policy(&self) -> Policy {
        Policy {
            enforce_distance: self.enforce_distance,
        }
    }

    /// Write the configuration file (unless `is_test`) and create an empty
    /// database file. Returns the configuration that was set up.
    pub fn init_all(
        custom_db: Option<String>,
        config_path: &Path,
        is_test: bool,
    ) -> AppResult<Self> {
        let mut cfg = if config_path.exists() {
            Self::load_from(config_path)?
        } else {
            Self::default()
        };

        if let Some(name) = custom_db {
            let p = Path::new(&name);
            cfg.database = if p.is_absolute() || p.parent().is_some_and(|d| !d.as_os_str().is_empty()) {
                p.to_string_lossy().to_string()
            } else {
                Self::config_dir().join(p).to_string_lossy().to_string()
            };
        }

        if !is_test {
            cfg.save_to(config_path)?;
        }

        let db_path = Path::new(&cfg.database);
        if let Some(dir) = db_path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        if !db_path.exists() {
            fs::File::create(db_path)?;
        }

        Ok(cfg)
    }
}
