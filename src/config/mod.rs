use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::data_dir_default().to_string_lossy().to_string(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("attendo")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".attendo")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("attendo.conf")
    }

    /// Default location of the JSON data directory
    pub fn data_dir_default() -> PathBuf {
        Self::config_dir().join("data")
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

    /// Table rule character configured for listings, defaulting to '-'.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Initialize configuration file and data directory.
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_dir: Option<String>, is_test: bool) -> io::Result<Config> {
        let dir = Self::config_dir();

        // Data dir: user provided or default
        let data_dir = if let Some(name) = custom_dir {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::data_dir_default()
        };

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            separator_char: default_separator_char(),
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(&data_dir)?;
        println!("✅ Data dir:    {:?}", data_dir);

        Ok(config)
    }
}
