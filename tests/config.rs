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

use pretty_assertions::assert_eq;
use speckledash::config::{AppConfig, load_config_from};
use tempfile::tempdir;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().unwrap();

    let config = load_config_from(&dir.path().join("speckledash.toml"));

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.branch_limit, 15);
    assert_eq!(config.commit_limit, 20);
    assert_eq!(config.token, None);
}

#[test]
fn stored_file_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("speckledash.toml");
    let stored = AppConfig {
        stream_url: "http://localhost:3000/streams/abc".to_string(),
        token: Some("secret".to_string()),
        commit_limit: 5,
        ..AppConfig::default()
    };

    confy::store_path(&path, &stored).unwrap();

    assert_eq!(load_config_from(&path), stored);
}

#[test]
fn partial_file_fills_missing_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("speckledash.toml");
    std::fs::write(&path, "log_level = \"debug\"\n").unwrap();

    let config = load_config_from(&path);

    assert_eq!(config.log_level, "debug");
    assert_eq!(config.branch_limit, 15);
}
