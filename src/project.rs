//! Read-only project grouping for tasks

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project a task may belong to. No mutation surface: projects are managed
/// outside this application and only displayed next to their tasks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    id: Uuid,
    name: String,
}

impl Project {
    pub fn new<T: ToString>(id: Uuid, name: T) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The embedded shape the service returns when task rows are selected together
/// with their project name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    name: String,
}

impl ProjectRef {
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
