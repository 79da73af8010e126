use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::cli::collector::Collect;
use crate::errors::LeaveError;

const DEFAULT_DIR_NAME: &str = ".leaveform";
const CONFIG_FILE: &str = "leave.json";
const TMP_SUFFIX: &str = "tmp";

/// Persistent per-user record backing the running leave balance.
///
/// The on-disk balance key keeps the spelling used by earlier releases so
/// existing config files stay readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub name: String,
    pub department: String,
    #[serde(rename = "remaing_days_leave")]
    pub remaining_days_leave: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "Samwise Gamgee".into(),
            department: "The Shire".into(),
            remaining_days_leave: 26,
        }
    }
}

/// Owns the config file path and all reads/writes against it.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at the default location, `$LEAVEFORM_HOME` or `~/.leaveform`.
    pub fn new() -> Result<Self, LeaveError> {
        Ok(Self::at_path(app_data_dir().join(CONFIG_FILE)))
    }

    /// Store backed by an explicit config file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the existing record, or collects and persists a fresh one when
    /// the file is absent (or `force` is set). A corrupt file is a hard
    /// parse error, not a reinitialization.
    pub fn load_or_init(
        &self,
        collector: &mut dyn Collect,
        force: bool,
    ) -> Result<Config, LeaveError> {
        if self.path.exists() && !force {
            let data = fs::read_to_string(&self.path)?;
            let config: Config = serde_json::from_str(&data)?;
            tracing::info!(path = %self.path.display(), "loaded config");
            return Ok(config);
        }

        let defaults = Config::default();
        let name = collector.collect("name", &defaults.name)?;
        let department = collector.collect("department", &defaults.department)?;
        let balance_input = collector.collect(
            "days of leave remaining",
            &defaults.remaining_days_leave.to_string(),
        )?;
        let remaining_days_leave = balance_input
            .trim()
            .parse::<i64>()
            .map_err(|err| LeaveError::invalid_number(balance_input.clone(), err))?;

        let config = Config {
            name,
            department,
            remaining_days_leave,
        };
        self.save(&config)?;
        tracing::info!(path = %self.path.display(), "initialized config");
        Ok(config)
    }

    /// Rewrites only the balance field and returns the updated record.
    pub fn update_balance(&self, new_balance: i64) -> Result<Config, LeaveError> {
        let data = fs::read_to_string(&self.path)?;
        let mut config: Config = serde_json::from_str(&data)?;
        config.remaining_days_leave = new_balance;
        self.save(&config)?;
        tracing::info!(balance = new_balance, "updated leave balance");
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), LeaveError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Application data directory, defaulting to `~/.leaveform`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("LEAVEFORM_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn ensure_dir(path: &Path) -> Result<(), LeaveError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), LeaveError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LeaveError;
    use tempfile::tempdir;

    struct Scripted {
        answers: Vec<String>,
    }

    impl Scripted {
        fn new(answers: &[&str]) -> Self {
            let mut answers: Vec<String> = answers.iter().map(|s| s.to_string()).collect();
            answers.reverse();
            Self { answers }
        }
    }

    impl Collect for Scripted {
        fn collect(&mut self, _field: &str, default: &str) -> Result<String, LeaveError> {
            match self.answers.pop() {
                Some(answer) if answer.is_empty() => Ok(default.to_string()),
                Some(answer) => Ok(answer),
                None => Err(LeaveError::Aborted),
            }
        }
    }

    #[test]
    fn init_collects_and_persists() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at_path(dir.path().join("leave.json"));
        let mut collector = Scripted::new(&["Frodo Baggins", "", "30"]);

        let config = store.load_or_init(&mut collector, false).unwrap();
        assert_eq!(config.name, "Frodo Baggins");
        assert_eq!(config.department, "The Shire");
        assert_eq!(config.remaining_days_leave, 30);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("remaing_days_leave"));
    }

    #[test]
    fn existing_config_skips_collection() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at_path(dir.path().join("leave.json"));
        store.save(&Config::default()).unwrap();

        let mut collector = Scripted::new(&[]);
        let config = store.load_or_init(&mut collector, false).unwrap();
        assert_eq!(config.name, "Samwise Gamgee");
    }

    #[test]
    fn force_reinitializes_over_existing_file() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at_path(dir.path().join("leave.json"));
        store.save(&Config::default()).unwrap();

        let mut collector = Scripted::new(&["Meriadoc Brandybuck", "Buckland", "12"]);
        let config = store.load_or_init(&mut collector, true).unwrap();
        assert_eq!(config.name, "Meriadoc Brandybuck");
        assert_eq!(config.remaining_days_leave, 12);
    }

    #[test]
    fn update_balance_touches_only_the_balance() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at_path(dir.path().join("leave.json"));
        store.save(&Config::default()).unwrap();

        let updated = store.update_balance(21).unwrap();
        assert_eq!(updated.name, "Samwise Gamgee");
        assert_eq!(updated.department, "The Shire");
        assert_eq!(updated.remaining_days_leave, 21);
    }

    #[test]
    fn update_balance_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at_path(dir.path().join("leave.json"));
        store.save(&Config::default()).unwrap();

        store.update_balance(21).unwrap();
        let first = std::fs::read_to_string(store.path()).unwrap();
        store.update_balance(21).unwrap();
        let second = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn corrupt_config_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("leave.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = ConfigStore::at_path(&path);

        let mut collector = Scripted::new(&[]);
        let err = store.load_or_init(&mut collector, false).unwrap_err();
        assert!(matches!(err, LeaveError::Serde(_)));
    }

    #[test]
    fn negative_balance_is_allowed() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at_path(dir.path().join("leave.json"));
        store.save(&Config::default()).unwrap();

        let updated = store.update_balance(-3).unwrap();
        assert_eq!(updated.remaining_days_leave, -3);
    }
}
