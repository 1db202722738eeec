use std::collections::HashSet;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{DeskObject, ObjectId};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("desk snapshot is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("desk snapshot lists object {0} more than once")]
    DuplicateId(ObjectId),
    #[error("desk object {0} has a non-finite transform")]
    NonFinite(ObjectId),
    #[error("desk object {id} has non-positive scale {scale}")]
    InvalidScale { id: ObjectId, scale: f32 },
}

/// Copy of the host's desk objects for one frame.
///
/// Accepts either a bare array of objects or `{"objects": [...]}`.
#[derive(Clone, Debug, Default)]
pub struct DeskSnapshot {
    objects: Vec<DeskObject>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotRoot {
    Bare(Vec<DeskObject>),
    Wrapped { objects: Vec<DeskObject> },
}

impl DeskSnapshot {
    pub fn new(objects: Vec<DeskObject>) -> Result<Self, SnapshotError> {
        let mut seen = HashSet::with_capacity(objects.len());
        for o in objects.iter() {
            if !seen.insert(o.id) {
                return Err(SnapshotError::DuplicateId(o.id));
            }
            if !o.position.is_finite() || !o.yaw.is_finite() || !o.scale.is_finite() {
                return Err(SnapshotError::NonFinite(o.id));
            }
            if o.scale <= 0.0 {
                return Err(SnapshotError::InvalidScale { id: o.id, scale: o.scale });
            }
        }
        Ok(Self { objects })
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let objects = match serde_json::from_str(json)? {
            SnapshotRoot::Bare(objects) => objects,
            SnapshotRoot::Wrapped { objects } => objects,
        };
        let snapshot = Self::new(objects)?;
        debug!(objects = snapshot.len(), "desk snapshot synced");
        Ok(snapshot)
    }

    pub fn objects(&self) -> &[DeskObject] {
        &self.objects
    }

    pub fn get(&self, id: ObjectId) -> Option<&DeskObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
