use crate::errors::{AppError, AppResult};
use chrono::Weekday;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_kind")]
    pub default_kind: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default = "default_week_start")]
    pub week_start: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_kind() -> String {
    "once".to_string()
}
fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}
fn default_time_format() -> String {
    "%H:%M".to_string()
}
fn default_week_start() -> String {
    "monday".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_kind: default_kind(),
            date_format: default_date_format(),
            time_format: default_time_format(),
            week_start: default_week_start(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rplanner")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rplanner")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rplanner.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rplanner.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    fn validate(&self) -> AppResult<()> {
        if crate::models::RecurrenceKind::from_code(&self.default_kind).is_none() {
            return Err(AppError::Config(format!(
                "default_kind '{}' is not one of once, daily, weekly, yearly",
                self.default_kind
            )));
        }
        check_format("date_format", &self.date_format)?;
        check_format("time_format", &self.time_format)?;
        if self.week_start_day().is_none() {
            return Err(AppError::Config(format!(
                "week_start '{}' must be 'monday' or 'sunday'",
                self.week_start
            )));
        }
        Ok(())
    }

    /// First column of the month grid.
    pub fn week_start_day(&self) -> Option<Weekday> {
        match self.week_start.trim().to_lowercase().as_str() {
            "monday" | "mon" => Some(Weekday::Mon),
            "sunday" | "sun" => Some(Weekday::Sun),
            _ => None,
        }
    }

    /// A relative database name lives inside the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Create the config directory when the database lives inside it,
    /// so a fresh install works before `init`.
    pub fn ensure_database_dir(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        if Path::new(&self.database).parent() == Some(dir.as_path()) && !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(())
    }

    /// Initialize configuration and database files.
    ///
    /// Returns the database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}

/// Reject strftime patterns chrono cannot render.
fn check_format(field: &str, fmt: &str) -> AppResult<()> {
    if fmt.trim().is_empty() || StrftimeItems::new(fmt).any(|i| matches!(i, Item::Error)) {
        return Err(AppError::Config(format!(
            "{field} '{fmt}' is not a valid strftime pattern"
        )));
    }
    Ok(())
}
