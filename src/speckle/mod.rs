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

//! Versioning service access.
//!
//! Everything that touches the remote service sits behind [`SpeckleApi`]. The
//! dashboard code depends on the trait only, [`SpeckleClient`] is the one
//! production implementation and tests substitute their own.
//!
//! # Sub-modules
//!
//! * [`base`]: the typed object graph.
//! * [`model`]: streams, branches, commits and collaborators.
//! * [`wrapper`]: stream URL parsing and preview URLs.
//! * [`accounts`]: local credential lookup.

pub mod accounts;
pub mod base;
mod client;
mod error;
pub mod model;
mod serialize;
pub mod wrapper;

pub use base::{Base, Member};
pub use client::SpeckleClient;
pub use error::ClientError;
pub use model::{Branch, Collaborator, Commit, CommitCreate, Paginated, Stream};
pub use wrapper::StreamWrapper;

/// Operations consumed from the versioning service.
pub trait SpeckleApi {
    /// Fetches a stream with up to `branch_limit` branches, each carrying up
    /// to `commit_limit` of its latest commits.
    fn get_stream(
        &self,
        stream_id: &str,
        branch_limit: u32,
        commit_limit: u32,
    ) -> Result<Stream, ClientError>;

    /// Downloads and hydrates the object graph rooted at `object_id`.
    fn receive(&self, stream_id: &str, object_id: &str) -> Result<Base, ClientError>;

    /// Uploads `object` and its detached children, returning the root id.
    fn send(&self, stream_id: &str, object: &Base) -> Result<String, ClientError>;

    /// Creates a branch. Creating an existing branch succeeds.
    fn create_branch(&self, stream_id: &str, name: &str) -> Result<(), ClientError>;

    /// Creates a commit and returns its id.
    fn create_commit(&self, commit: &CommitCreate) -> Result<String, ClientError>;
}
