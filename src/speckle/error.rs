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

use thiserror::Error;

/// Failures raised by the versioning service client.
///
/// The dashboard never retries or rewrites these, they are shown to the user
/// as they are.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid stream url `{0}`")]
    InvalidStreamUrl(String),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("graphql error: {0}")]
    GraphQl(String),

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("referenced object `{0}` was not part of the download")]
    MissingObject(String),

    #[error("stream `{0}` not found or not accessible")]
    StreamNotFound(String),

    #[error("local accounts: {0}")]
    Accounts(#[from] rusqlite::Error),
}
