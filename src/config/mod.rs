use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Symbolic range names inside the workbook. The defaults match the files
/// `tutorbill init` creates; a remote sheet binding would map them to A1
/// ranges instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ranges {
    #[serde(default = "default_sessions_range")]
    pub sessions: String,
    #[serde(default = "default_clients_range")]
    pub clients: String,
    #[serde(default = "default_cutoffs_range")]
    pub cutoffs: String,
    #[serde(default = "default_payments_range")]
    pub payments: String,
    #[serde(default = "default_counter_range")]
    pub counter: String,
}

fn default_sessions_range() -> String {
    "sessions".to_string()
}
fn default_clients_range() -> String {
    "clients".to_string()
}
fn default_cutoffs_range() -> String {
    "cutoffs".to_string()
}
fn default_payments_range() -> String {
    "payments".to_string()
}
fn default_counter_range() -> String {
    "counter".to_string()
}

impl Default for Ranges {
    fn default() -> Self {
        Self {
            sessions: default_sessions_range(),
            clients: default_clients_range(),
            cutoffs: default_cutoffs_range(),
            payments: default_payments_range(),
            counter: default_counter_range(),
        }
    }
}

/// Who the documents and emails come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sender {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Smtp {
    #[serde(default)]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
}

fn default_smtp_port() -> u16 {
    465
}

impl Default for Smtp {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_smtp_port(),
            user: String::new(),
            password: String::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub workbook: String,
    pub output_dir: String,
    #[serde(default)]
    pub ranges: Ranges,
    #[serde(default)]
    pub sender: Sender,
    #[serde(default)]
    pub smtp: Smtp,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook: Self::workbook_dir().to_string_lossy().to_string(),
            output_dir: Self::output_dir().to_string_lossy().to_string(),
            ranges: Ranges::default(),
            sender: Sender::default(),
            smtp: Smtp::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("tutorbill")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".tutorbill")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tutorbill.conf")
    }

    /// Default workbook location when none is configured
    pub fn workbook_dir() -> PathBuf {
        Self::config_dir().join("workbook")
    }

    /// Default folder for rendered documents
    pub fn output_dir() -> PathBuf {
        Self::config_dir().join("invoices")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration file; returns the config it wrote so
    /// the caller can also create the workbook skeleton.
    pub fn init_all(custom_workbook: Option<String>, is_test: bool) -> io::Result<Config> {
        let dir = Self::config_dir();

        // Workbook dir: user provided or default
        let workbook = if let Some(name) = custom_workbook {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::workbook_dir()
        };

        let config = Config {
            workbook: workbook.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("config serialization: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }

    /// Names of required fields that are still empty, for `config --check`.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.workbook.trim().is_empty() {
            missing.push("workbook");
        }
        if self.output_dir.trim().is_empty() {
            missing.push("output_dir");
        }
        if self.sender.name.trim().is_empty() {
            missing.push("sender.name");
        }
        if self.sender.email.trim().is_empty() {
            missing.push("sender.email");
        }
        if self.smtp.host.trim().is_empty() {
            missing.push("smtp.host");
        }
        missing
    }
}
