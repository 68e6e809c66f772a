//! Endpoint operations and their failure policies
//!
//! Listings degrade to an empty result on non-fatal errors, since "nothing
//! listed" means "nothing to do". Workspace detail errors propagate so the
//! caller can skip the workspace. Collection fetches collapse failures into
//! [`CollectionFetch::Unavailable`].

use super::{ApiError, Transport};
use crate::domain::{CollectionDetail, CollectionSummary, EnvironmentSummary, Workspace};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct WorkspaceList {
    #[serde(default)]
    workspaces: Vec<Workspace>,
}

#[derive(Deserialize)]
struct WorkspaceEnvelope {
    workspace: WorkspaceDetail,
}

#[derive(Deserialize)]
struct WorkspaceDetail {
    #[serde(default)]
    collections: Vec<CollectionSummary>,
}

#[derive(Deserialize)]
struct CollectionEnvelope {
    collection: CollectionDetail,
}

#[derive(Deserialize)]
struct EnvironmentList {
    environments: Vec<EnvironmentSummary>,
}

#[derive(Deserialize)]
struct EnvironmentEnvelope {
    environment: Value,
}

/// Outcome of a collection detail fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionFetch {
    Found(CollectionDetail),
    /// Timeout, non-200 or undecodable body; already reported.
    Unavailable,
}

pub struct PostmanClient<'a> {
    transport: &'a dyn Transport,
}

impl<'a> PostmanClient<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    pub fn list_workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
        match self.fetch::<WorkspaceList>("workspaces") {
            Ok(list) => Ok(list.workspaces),
            Err(err) if err.is_fatal() => Err(err),
            Err(ApiError::Timeout) => {
                println!("Timeout while fetching workspaces");
                Ok(Vec::new())
            }
            Err(err) => {
                println!("Error fetching workspaces: {err}");
                Ok(Vec::new())
            }
        }
    }

    /// Collections listed in a workspace. All errors propagate.
    pub fn get_workspace(&self, workspace_id: &str) -> Result<Vec<CollectionSummary>, ApiError> {
        let envelope: WorkspaceEnvelope = self.fetch(&format!("workspaces/{workspace_id}"))?;
        Ok(envelope.workspace.collections)
    }

    pub fn get_collection(&self, reference: &str, name: &str) -> Result<CollectionFetch, ApiError> {
        match self.fetch::<CollectionEnvelope>(&format!("collections/{reference}")) {
            Ok(envelope) => Ok(CollectionFetch::Found(envelope.collection)),
            Err(err) if err.is_fatal() => Err(err),
            Err(ApiError::Timeout) => {
                println!("      Timeout: {name}");
                Ok(CollectionFetch::Unavailable)
            }
            Err(ApiError::Status { status, body }) => {
                println!("      Failed: {name} (status {status})");
                tracing::debug!("collection {reference} response body: {body}");
                Ok(CollectionFetch::Unavailable)
            }
            Err(err) => {
                println!("      Error: {name} - {err}");
                Ok(CollectionFetch::Unavailable)
            }
        }
    }

    pub fn list_environments(&self) -> Result<Vec<EnvironmentSummary>, ApiError> {
        match self.fetch::<EnvironmentList>("environments") {
            Ok(list) => Ok(list.environments),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => {
                println!("Error listing environments: {err}");
                Ok(Vec::new())
            }
        }
    }

    /// Raw environment payload; the caller decides how a failure counts.
    pub fn get_environment(&self, uid: &str) -> Result<Value, ApiError> {
        let envelope: EnvironmentEnvelope = self.fetch(&format!("environments/{uid}"))?;
        Ok(envelope.environment)
    }

    fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.transport.get(path)?;
        Ok(serde_json::from_value(body)?)
    }
}
