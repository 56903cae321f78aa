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

//! Blocking HTTP client for the versioning service.
//!
//! Stream metadata and mutations go through the GraphQL endpoint, object
//! graphs through the REST object endpoints. The client adds no retry,
//! timeout policy or caching of its own.

use reqwest::blocking::{Client, RequestBuilder, Response, multipart};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use url::Url;

use crate::speckle::{
    ClientError, SpeckleApi,
    base::Base,
    model::{CommitCreate, Stream},
    serialize,
};

const USER_AGENT: &str = concat!("speckledash/", env!("CARGO_PKG_VERSION"));

const BATCH_PART: &str = "batch-1";

const BRANCH_EXISTS: &str = "already exists";

const STREAM_QUERY: &str = "
    query Stream($id: String!, $branchLimit: Int!, $commitLimit: Int!) {
        stream(id: $id) {
            id
            name
            description
            collaborators { id name role }
            branches(limit: $branchLimit) {
                totalCount
                cursor
                items {
                    id
                    name
                    description
                    commits(limit: $commitLimit) {
                        totalCount
                        cursor
                        items {
                            id
                            message
                            authorName
                            authorId
                            createdAt
                            sourceApplication
                            referencedObject
                            totalChildrenCount
                        }
                    }
                }
            }
        }
    }";

const BRANCH_CREATE_MUTATION: &str = "
    mutation BranchCreate($branch: BranchCreateInput!) {
        branchCreate(branch: $branch)
    }";

const COMMIT_CREATE_MUTATION: &str = "
    mutation CommitCreate($commit: CommitCreateInput!) {
        commitCreate(commit: $commit)
    }";

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct StreamData {
    stream: Option<Stream>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommitCreateData {
    commit_create: String,
}

/// Client bound to one server and, optionally, one token.
#[derive(Debug, Clone)]
pub struct SpeckleClient {
    server_url: String,
    token: Option<String>,
    http: Client,
}

impl SpeckleClient {
    pub fn new(server_url: &str, token: Option<String>) -> Result<Self, ClientError> {
        Url::parse(server_url)?;

        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            token,
            http,
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn graphql<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T, ClientError> {
        let request = self
            .http
            .post(format!("{}/graphql", self.server_url))
            .json(&json!({ "query": query, "variables": variables }));

        let response = check_status(self.authorize(request).send()?)?;
        let body: GraphQlResponse<T> = response.json()?;

        if !body.errors.is_empty() {
            let messages: Vec<String> = body.errors.into_iter().map(|e| e.message).collect();
            return Err(ClientError::GraphQl(messages.join("; ")));
        }

        body.data
            .ok_or_else(|| ClientError::GraphQl("response carried no data".to_string()))
    }
}

impl SpeckleApi for SpeckleClient {
    fn get_stream(
        &self,
        stream_id: &str,
        branch_limit: u32,
        commit_limit: u32,
    ) -> Result<Stream, ClientError> {
        log::debug!(
            "event=stream_get module=speckle stream={} branch_limit={} commit_limit={}",
            stream_id,
            branch_limit,
            commit_limit
        );

        let data: StreamData = self.graphql(
            STREAM_QUERY,
            json!({ "id": stream_id, "branchLimit": branch_limit, "commitLimit": commit_limit }),
        )?;

        data.stream
            .ok_or_else(|| ClientError::StreamNotFound(stream_id.to_string()))
    }

    fn receive(&self, stream_id: &str, object_id: &str) -> Result<Base, ClientError> {
        log::debug!(
            "event=object_receive module=speckle stream={} object={}",
            stream_id,
            object_id
        );

        let request = self
            .http
            .get(format!(
                "{}/objects/{}/{}",
                self.server_url, stream_id, object_id
            ))
            .header(reqwest::header::ACCEPT, "application/json");

        let response = check_status(self.authorize(request).send()?)?;
        let objects: Vec<Value> = response.json()?;

        serialize::hydrate(object_id, objects)
    }

    fn send(&self, stream_id: &str, object: &Base) -> Result<String, ClientError> {
        let serialized = serialize::serialize(object);
        log::debug!(
            "event=object_send module=speckle stream={} object={} objects={}",
            stream_id,
            serialized.root_id,
            serialized.objects.len()
        );

        let batch = Value::Array(serialized.objects).to_string();
        let part = multipart::Part::text(batch)
            .file_name(BATCH_PART)
            .mime_str("application/json")?;
        let form = multipart::Form::new().part(BATCH_PART, part);

        let request = self
            .http
            .post(format!("{}/objects/{}", self.server_url, stream_id))
            .multipart(form);

        check_status(self.authorize(request).send()?)?;

        Ok(serialized.root_id)
    }

    fn create_branch(&self, stream_id: &str, name: &str) -> Result<(), ClientError> {
        let result: Result<Value, ClientError> = self.graphql(
            BRANCH_CREATE_MUTATION,
            json!({ "branch": { "streamId": stream_id, "name": name } }),
        );

        if !branch_created(result.map(|_| ()))? {
            log::debug!(
                "event=branch_exists module=speckle stream={} branch={}",
                stream_id,
                name
            );
        }

        Ok(())
    }

    fn create_commit(&self, commit: &CommitCreate) -> Result<String, ClientError> {
        let data: CommitCreateData =
            self.graphql(COMMIT_CREATE_MUTATION, json!({ "commit": commit }))?;

        Ok(data.commit_create)
    }
}

/// Maps a branch creation result to whether the branch is new. A branch that
/// already exists is not a failure.
fn branch_created(result: Result<(), ClientError>) -> Result<bool, ClientError> {
    match result {
        Ok(()) => Ok(true),
        Err(ClientError::GraphQl(message)) if message.contains(BRANCH_EXISTS) => Ok(false),
        Err(err) => Err(err),
    }
}

fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    Err(ClientError::Status {
        status: status.as_u16(),
        body: response.text().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_url_loses_trailing_slash() {
        let client = SpeckleClient::new("https://speckle.xyz/", None).unwrap();

        assert_eq!(client.server_url(), "https://speckle.xyz");
        assert!(!client.is_authenticated());
    }

    #[test]
    fn existing_branch_is_not_an_error() {
        let exists = Err(ClientError::GraphQl(
            "Branch name already exists: glulam-updates".to_string(),
        ));

        assert!(matches!(branch_created(exists), Ok(false)));
        assert!(matches!(branch_created(Ok(())), Ok(true)));
    }

    #[test]
    fn other_branch_errors_pass_through() {
        let denied = Err(ClientError::GraphQl("You do not have access".to_string()));

        match branch_created(denied) {
            Err(ClientError::GraphQl(message)) => assert_eq!(message, "You do not have access"),
            other => panic!("unexpected result {:?}", other),
        }
        assert!(matches!(
            branch_created(Err(ClientError::StreamNotFound("s1".to_string()))),
            Err(ClientError::StreamNotFound(_))
        ));
    }

    #[test]
    fn invalid_server_url_is_rejected() {
        assert!(matches!(
            SpeckleClient::new("speckle dot xyz", None),
            Err(ClientError::Url(_))
        ));
    }
}
