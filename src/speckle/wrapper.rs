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

//! Stream URL handling.
//!
//! A [`StreamWrapper`] is parsed from a URL pasted by the user, e.g.
//! `https://speckle.xyz/streams/2c010399e5/commits/81c6d7fdcd`, and knows how
//! to build the preview URLs served by the service's own embed endpoint.

use std::str::FromStr;

use url::Url;

use crate::speckle::{
    ClientError, SpeckleClient,
    accounts::{self, Account},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamWrapper {
    /// `scheme://host[:port]`, without a trailing slash.
    pub server_url: String,
    pub stream_id: String,
    pub branch_name: Option<String>,
    pub commit_id: Option<String>,
    pub object_id: Option<String>,
}

impl StreamWrapper {
    pub fn parse(input: &str) -> Result<Self, ClientError> {
        let invalid = || ClientError::InvalidStreamUrl(input.to_string());

        let url = Url::parse(input.trim())?;
        let host = url.host_str().ok_or_else(invalid)?;
        let server_url = match url.port() {
            Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
            None => format!("{}://{}", url.scheme(), host),
        };

        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        let (stream_id, rest) = match segments.as_slice() {
            ["streams" | "projects", stream_id, rest @ ..] => (stream_id.to_string(), rest),
            _ => return Err(invalid()),
        };

        let mut wrapper = Self {
            server_url,
            stream_id,
            branch_name: None,
            commit_id: None,
            object_id: None,
        };

        match rest {
            [] => {}
            ["branches", name @ ..] if !name.is_empty() => {
                // Branch names may contain slashes.
                wrapper.branch_name = Some(name.join("/"));
            }
            ["commits", commit_id] => wrapper.commit_id = Some(commit_id.to_string()),
            ["objects", object_id] => wrapper.object_id = Some(object_id.to_string()),
            // Newer frontend links name a model by id, which is not a branch
            // name, so only an explicit `model@version` selects anything.
            ["models", model] => {
                if let Some((_, version)) = model.split_once('@').filter(|(_, v)| !v.is_empty()) {
                    wrapper.commit_id = Some(version.to_string());
                }
            }
            _ => return Err(invalid()),
        }

        Ok(wrapper)
    }

    /// Link to the commit in the service's web frontend.
    pub fn commit_url(&self, commit_id: &str) -> String {
        format!(
            "{}/streams/{}/commits/{}",
            self.server_url, self.stream_id, commit_id
        )
    }

    /// Embedded viewer URL for a commit. A missing commit yields an empty
    /// `commit` parameter, which the viewer treats as the latest commit.
    pub fn commit_embed_url(&self, commit_id: Option<&str>) -> String {
        format!(
            "{}/embed?stream={}&commit={}",
            self.server_url,
            self.stream_id,
            commit_id.unwrap_or_default()
        )
    }

    /// Embedded viewer URL for a single object.
    pub fn object_embed_url(&self, object_id: &str) -> String {
        format!(
            "{}/embed?stream={}&object={}",
            self.server_url, self.stream_id, object_id
        )
    }

    /// Creates a client for this stream's server.
    ///
    /// An empty token falls back to the default local account registered for
    /// the same server, if there is one; otherwise the client is anonymous and
    /// only public streams are readable.
    pub fn client(&self, token: &str) -> Result<SpeckleClient, ClientError> {
        let token = token.trim();
        if !token.is_empty() {
            return SpeckleClient::new(&self.server_url, Some(token.to_string()));
        }

        let account = accounts::default_local_accounts_path()
            .filter(|path| path.exists())
            .map(|path| accounts::local_accounts(&path))
            .transpose()?
            .and_then(|accounts| self.pick_account(accounts));

        if let Some(account) = &account {
            log::info!(
                "event=account_selected module=speckle server={} user={}",
                account.server_url,
                account.user_name.as_deref().unwrap_or("unknown")
            );
        }

        SpeckleClient::new(&self.server_url, account.map(|a| a.token))
    }

    fn pick_account(&self, accounts: Vec<Account>) -> Option<Account> {
        let mut matching: Vec<Account> = accounts
            .into_iter()
            .filter(|a| a.server_url.trim_end_matches('/') == self.server_url)
            .collect();

        let default_idx = matching.iter().position(|a| a.is_default).unwrap_or(0);
        (!matching.is_empty()).then(|| matching.swap_remove(default_idx))
    }
}

impl FromStr for StreamWrapper {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
