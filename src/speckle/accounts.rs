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

//! Local account lookup.
//!
//! Desktop connectors and the service manager keep signed-in accounts in a
//! small SQLite store (`Accounts.db`, table `objects(hash, content)` where
//! `content` is the account as JSON). When the user leaves the token empty the
//! dashboard reads this store, read-only, to find a token for the server.

use std::{
    env,
    path::{Path, PathBuf},
};

use rusqlite::{Connection, OpenFlags};
use serde::Deserialize;

use crate::speckle::ClientError;

const ACCOUNTS_FOLDER: &str = "Speckle";
const ACCOUNTS_FILE: &str = "Accounts.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub token: String,
    pub server_url: String,
    pub server_name: Option<String>,
    pub user_name: Option<String>,
    pub is_default: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredAccount {
    token: String,
    #[serde(default)]
    is_default: bool,
    server_info: StoredServerInfo,
    #[serde(default)]
    user_info: Option<StoredUserInfo>,
}

#[derive(Deserialize)]
struct StoredServerInfo {
    url: String,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
struct StoredUserInfo {
    #[serde(default)]
    name: Option<String>,
}

/// Platform location of the accounts store, if a base directory is known.
pub fn default_local_accounts_path() -> Option<PathBuf> {
    let base = if cfg!(windows) {
        env::var_os("APPDATA").map(PathBuf::from)
    } else if cfg!(target_os = "macos") {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    } else {
        env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share")))
    };

    base.map(|dir| dir.join(ACCOUNTS_FOLDER).join(ACCOUNTS_FILE))
}

/// Reads every account from the store at `path`.
///
/// Rows that do not parse as accounts are skipped with a warning.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or queried.
pub fn local_accounts(path: &Path) -> Result<Vec<Account>, ClientError> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;

    let mut stmt = conn.prepare("SELECT content FROM objects")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut accounts = Vec::new();
    for row in rows {
        let content = row?;
        match serde_json::from_str::<StoredAccount>(&content) {
            Ok(stored) => accounts.push(Account {
                token: stored.token,
                server_url: stored.server_info.url,
                server_name: stored.server_info.name,
                user_name: stored.user_info.and_then(|u| u.name),
                is_default: stored.is_default,
            }),
            Err(err) => log::warn!("event=account_skipped module=speckle reason={}", err),
        }
    }

    Ok(accounts)
}
