//! Drive-mapping configuration.
//!
//! Lists the network drives a machine is expected to have, as YAML.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! persistent: false
//! drives:
//!   - local: "Z:"
//!     address: 'alice:secret@\\fileserver\public'
//!   - address: '\\backup01\IPC$'
//! ```

use std::collections::HashSet;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use win_unc_core::{UncDirectory, is_unc_path, parse_unc_directory};

use crate::error::{ConfigError, Result};

/// One expected connection.
///
/// # Examples
///
/// ```
/// # use win_unc_config::DriveMapping;
/// let mapping = DriveMapping {
///     local: Some("Z:".into()),
///     address: r"alice@\\fileserver\public".into(),
/// };
/// assert_eq!(mapping.directory().username(), Some("alice"));
/// assert_eq!(mapping.directory().path(), r"\\fileserver\public");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveMapping {
    /// Local device such as `Z:`. Absent for connections without a drive
    /// letter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    /// Address in `[username][:password]@\\host\share` form.
    pub address: String,
}

impl DriveMapping {
    /// Parses [`address`](DriveMapping::address) into a directory.
    pub fn directory(&self) -> UncDirectory {
        parse_unc_directory(&self.address)
    }

    fn validate(&self) -> Result<()> {
        if let Some(local) = &self.local {
            if !is_drive_letter(local) {
                return Err(ConfigError::InvalidMapping(format!(
                    "'{local}' is not a drive letter"
                )));
            }
        }
        let directory = self.directory();
        if !is_unc_path(directory.path()) {
            return Err(ConfigError::InvalidMapping(format!(
                "'{}' is not a UNC path",
                directory.path()
            )));
        }
        Ok(())
    }
}

/// Top-level drive configuration.
///
/// Loaded from a YAML file (typically `win-unc.yml`).
///
/// # Examples
///
/// ```no_run
/// use win_unc_config::DriveConfig;
///
/// let config = DriveConfig::load("win-unc.yml").unwrap();
/// for mapping in &config.drives {
///     println!("{}", mapping.directory());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    /// Whether connections should survive a logoff. `None` leaves the
    /// system default untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent: Option<bool>,
    /// Expected connections.
    #[serde(default)]
    pub drives: Vec<DriveMapping>,
}

impl DriveConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ConfigError::IoError) if the file cannot
    /// be read, or [`YamlError`](crate::ConfigError::YamlError) if parsing
    /// fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader)?;
        debug!(path = %path.display(), drives = config.drives.len(), "loaded drive config");
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ConfigError::IoError) if the file cannot
    /// be written, or [`YamlError`](crate::ConfigError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Checks the version, every mapping, and that no local device is
    /// mapped twice.
    ///
    /// # Examples
    ///
    /// ```
    /// # let yaml = r#"
    /// # version: "1.0"
    /// # drives:
    /// #   - { local: "Z:", address: '\\a\share' }
    /// #   - { local: "z", address: '\\b\share' }
    /// # "#;
    /// # let config: win_unc_config::DriveConfig = serde_yaml::from_str(yaml).unwrap();
    /// assert!(matches!(
    ///     config.validate(),
    ///     Err(win_unc_config::ConfigError::DuplicateDevice(_))
    /// ));
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(ConfigError::EmptyVersion);
        }

        let mut seen_devices: HashSet<String> = HashSet::new();
        for mapping in &self.drives {
            mapping.validate()?;
            if let Some(local) = &mapping.local {
                if !seen_devices.insert(device_key(local)) {
                    return Err(ConfigError::DuplicateDevice(local.clone()));
                }
            }
        }
        Ok(())
    }

    /// Finds the mapping for a local device, ignoring case and a trailing
    /// colon.
    pub fn find_by_local(&self, device: &str) -> Option<&DriveMapping> {
        let key = device_key(device);
        self.drives
            .iter()
            .find(|mapping| mapping.local.as_deref().is_some_and(|local| device_key(local) == key))
    }
}

/// Returns `true` for `X:` or a bare `X`.
fn is_drive_letter(device: &str) -> bool {
    let mut chars = device.trim_end_matches(':').chars();
    matches!((chars.next(), chars.next()), (Some(letter), None) if letter.is_ascii_alphabetic())
}

fn device_key(device: &str) -> String {
    device.trim_end_matches(':').to_ascii_uppercase()
}
