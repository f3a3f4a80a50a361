//! Drive-mapping configuration for Windows network drives.
//!
//! A [`DriveConfig`] lists the connections a machine should have, each as a
//! [`DriveMapping`] from an optional local device to an address in
//! `[username][:password]@\\host\share` form.
//!
//! # Quick start
//!
//! ```no_run
//! use win_unc_config::DriveConfig;
//!
//! let config = DriveConfig::load("win-unc.yml").unwrap();
//! config.validate().unwrap();
//! if let Some(mapping) = config.find_by_local("Z:") {
//!     println!("Z: -> {}", mapping.directory().path());
//! }
//! ```

mod config;
mod error;

pub use config::{DriveConfig, DriveMapping};
pub use error::{ConfigError, Result};
