// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "speckledash";

const LOG_DIR: &str = "logs";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Stream, branch or commit URL prefilled in the connect form.
    pub stream_url: String,
    /// Access token prefilled in the connect form. When empty, a local account
    /// for the stream's server is used.
    pub token: Option<String>,
    pub branch_limit: u32,
    pub commit_limit: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            stream_url: "https://speckle.xyz/streams/2c010399e5/".to_string(),
            token: None,
            branch_limit: 15,
            commit_limit: 20,
            log_level: "info".to_string(),
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn load_config_from(path: &Path) -> AppConfig {
    confy::load_path(path).unwrap_or_default()
}

/// Directory for log files, beside the configuration file.
pub fn log_dir() -> Result<PathBuf, confy::ConfyError> {
    let config_file = confy::get_configuration_file_path(CONFIG_NAME, None)?;
    Ok(config_file
        .parent()
        .map(|dir| dir.join(LOG_DIR))
        .unwrap_or_else(|| PathBuf::from(LOG_DIR)))
}
