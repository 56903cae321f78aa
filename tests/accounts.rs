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
use rusqlite::Connection;
use speckledash::speckle::accounts::{Account, local_accounts};
use tempfile::tempdir;

const ACCOUNT_JSON: &str = r#"{
    "token": "abc123",
    "isDefault": true,
    "serverInfo": { "url": "https://speckle.xyz", "name": "Speckle XYZ" },
    "userInfo": { "name": "Ada" }
}"#;

#[test]
fn accounts_are_read_and_bad_rows_skipped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Accounts.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute("CREATE TABLE objects (hash TEXT PRIMARY KEY, content TEXT)", [])
        .unwrap();
    conn.execute(
        "INSERT INTO objects (hash, content) VALUES (?1, ?2), (?3, ?4)",
        ["h1", ACCOUNT_JSON, "h2", "{ not json"],
    )
    .unwrap();
    drop(conn);

    let accounts = local_accounts(&path).unwrap();

    assert_eq!(
        accounts,
        vec![Account {
            token: "abc123".to_string(),
            server_url: "https://speckle.xyz".to_string(),
            server_name: Some("Speckle XYZ".to_string()),
            user_name: Some("Ada".to_string()),
            is_default: true,
        }]
    );
}

#[test]
fn missing_store_is_an_error() {
    let dir = tempdir().unwrap();

    assert!(local_accounts(&dir.path().join("Accounts.db")).is_err());
}
