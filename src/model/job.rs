use std::sync::Arc;

use kube::core::DynamicObject;
use tokio_util::sync::CancellationToken;

use crate::config::{ModelConfig, ParentRef};
use crate::error::Result;
use crate::lister::Lister;
use crate::model::convert::{Converter, JsonConverter};
use crate::model::hydrate::hydrate;
use crate::model::membership::resolve_with_label;
use crate::render::{Renderer, Row};

/// Lists the Jobs belonging to a CronJob and hydrates them into rows.
#[derive(Clone)]
pub struct JobModel {
    lister: Arc<dyn Lister>,
    converter: Arc<dyn Converter>,
    config: ModelConfig,
}

impl std::fmt::Debug for JobModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobModel")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl JobModel {
    pub fn new(lister: Arc<dyn Lister>, config: ModelConfig) -> Self {
        Self::with_converter(lister, Arc::new(JsonConverter), config)
    }

    pub fn with_converter(
        lister: Arc<dyn Lister>,
        converter: Arc<dyn Converter>,
        config: ModelConfig,
    ) -> Self {
        Self {
            lister,
            converter,
            config,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    /// List candidate Jobs, narrowed to the parent's when it carries a uid.
    pub async fn list(
        &self,
        parent: &ParentRef,
        cancel: &CancellationToken,
    ) -> Result<Vec<DynamicObject>> {
        let candidates = self.lister.list(&self.config.namespace, cancel).await?;
        let Some(uid) = parent.parent_uid() else {
            return Ok(candidates);
        };

        let total = candidates.len();
        let members = resolve_with_label(
            candidates,
            Some(uid),
            parent.parent_name(),
            &self.config.selector_label,
            self.converter.as_ref(),
        )?;
        tracing::debug!(
            path = parent.scope_path(),
            candidates = total,
            members = members.len(),
            "Resolved parent jobs"
        );
        Ok(members)
    }

    /// Render `objects` as rows scoped to this model's namespace.
    pub fn hydrate(
        &self,
        objects: &[DynamicObject],
        renderer: &dyn Renderer,
    ) -> Result<Vec<Row>> {
        hydrate(objects, &self.config.namespace, renderer)
    }
}
