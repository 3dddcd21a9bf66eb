use k8s_openapi::api::batch::v1::Job;
use kube::core::{DynamicObject, ResourceExt};

use crate::error::{LineageError, Result};

/// Decodes a generic object into its typed Job view.
pub trait Converter: Send + Sync {
    fn to_job(&self, obj: &DynamicObject) -> Result<Job>;
}

/// Structural decode through `serde_json::Value`.
///
/// The object's type meta must say `batch/v1` / `Job`; anything else fails
/// to deserialize.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConverter;

impl Converter for JsonConverter {
    fn to_job(&self, obj: &DynamicObject) -> Result<Job> {
        serde_json::to_value(obj)
            .and_then(serde_json::from_value)
            .map_err(|source| LineageError::Conversion {
                name: obj.name_any(),
                source,
            })
    }
}
