use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Settings for one of the interactive programs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramConfig {
    /// Path of the data file, relative to the working directory.
    pub file: PathBuf,

    /// Letter accepted as "yes" by the program's confirmation prompts.
    ///
    /// Compared case-insensitively.
    pub confirm: char,
}

impl ProgramConfig {
    fn new(file: &str, confirm: char) -> Self {
        Self {
            file: PathBuf::from(file),
            confirm,
        }
    }
}

/// Configuration for the record filtering programs.
///
/// Every setting has a default, so an empty file (or no file at all) is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Character separating fields in every data file.
    pub delimiter: char,

    /// Collection point search.
    pub collection: ProgramConfig,

    /// Transport route search.
    pub routes: ProgramConfig,

    /// Vehicle rotation search.
    pub rotation: ProgramConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            collection: default_collection(),
            routes: default_routes(),
            rotation: default_rotation(),
        }
    }
}

/// Errors raised while loading or saving a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("Failed to access config file {}: {source}", path.display())]
    Io {
        /// Location of the config file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The file is not valid TOML for this configuration.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

const fn default_delimiter() -> char {
    ';'
}

fn default_collection() -> ProgramConfig {
    ProgramConfig::new("pontos_de_descartes.txt", 'y')
}

fn default_routes() -> ProgramConfig {
    ProgramConfig::new("rotas_de_transportes.txt", 's')
}

fn default_rotation() -> ProgramConfig {
    ProgramConfig::new("rodizio_de_veiculos.txt", 's')
}

/// Per-program settings as written on disk, where every key is optional.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PartialProgram {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    confirm: Option<char>,
}

impl PartialProgram {
    fn or(self, default: ProgramConfig) -> ProgramConfig {
        ProgramConfig {
            file: self.file.unwrap_or(default.file),
            confirm: self.confirm.unwrap_or(default.confirm),
        }
    }
}

impl From<ProgramConfig> for PartialProgram {
    fn from(program: ProgramConfig) -> Self {
        Self {
            file: Some(program.file),
            confirm: Some(program.confirm),
        }
    }
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_delimiter")]
        delimiter: char,

        #[serde(default)]
        collection: PartialProgram,

        #[serde(default)]
        routes: PartialProgram,

        #[serde(default)]
        rotation: PartialProgram,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                delimiter,
                collection,
                routes,
                rotation,
            } => Self {
                delimiter,
                collection: collection.or(default_collection()),
                routes: routes.or(default_routes()),
                rotation: rotation.or(default_rotation()),
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            delimiter: config.delimiter,
            collection: config.collection.into(),
            routes: config.routes.into(),
            rotation: config.rotation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\ndelimiter = \"|\"\n[routes]\nfile = \"data/routes.txt\"\nconfirm = \"y\"\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.delimiter, '|');
        assert_eq!(config.routes.file, PathBuf::from("data/routes.txt"));
        assert_eq!(config.routes.confirm, 'y');
        assert_eq!(config.collection, default_collection());
        assert_eq!(config.rotation, default_rotation());
    }

    #[test]
    fn partial_program_keeps_remaining_defaults() {
        let config: Config =
            toml::from_str("_version = \"1\"\n[rotation]\nconfirm = \"Y\"\n").unwrap();
        assert_eq!(config.rotation.confirm, 'Y');
        assert_eq!(config.rotation.file, default_rotation().file);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(matches!(error, ConfigError::Io { .. }));
        assert!(error.to_string().starts_with("Failed to access config file"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ndelimiter = \"too long\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.to_string().starts_with("Failed to parse config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("lrec.toml");
        let mut config = Config::default();
        config.collection.file = PathBuf::from("pontos.csv");
        config.delimiter = ',';

        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
