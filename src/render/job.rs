use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use k8s_openapi::api::batch::v1::{Job, JobSpec, JobStatus};
use kube::core::DynamicObject;

use crate::error::{LineageError, Result};
use crate::model::convert::{Converter, JsonConverter};
use crate::render::{fqn, to_age, to_duration, Renderer, Row, NA};

/// Renders `batch/v1` Jobs.
#[derive(Debug, Clone, Default)]
pub struct JobRenderer {
    converter: JsonConverter,
    now: Option<DateTime<Utc>>,
}

impl JobRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render ages and running durations relative to a fixed instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            converter: JsonConverter,
            now: Some(now),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }
}

impl Renderer for JobRenderer {
    fn header(&self) -> Vec<&'static str> {
        vec![
            "NAMESPACE",
            "NAME",
            "COMPLETIONS",
            "DURATION",
            "SELECTOR",
            "AGE",
        ]
    }

    fn render(&self, obj: &DynamicObject, namespace: &str) -> Result<Row> {
        let job: Job = self.converter.to_job(obj).map_err(|e| match e {
            LineageError::Conversion { name, source } => LineageError::Render {
                name,
                message: source.to_string(),
            },
            other => other,
        })?;

        let now = self.now();
        let name = job.metadata.name.clone().unwrap_or_default();
        let ns = job
            .metadata
            .namespace
            .clone()
            .unwrap_or_else(|| namespace.to_string());
        let spec = job.spec.unwrap_or_default();
        let status = job.status.unwrap_or_default();

        let fields = vec![
            ns.clone(),
            name.clone(),
            to_completion(&spec, &status),
            to_job_duration(&status, now),
            to_selector(spec.selector.and_then(|s| s.match_labels).as_ref()),
            to_age(job.metadata.creation_timestamp.map(|t| t.0), now),
        ];

        Ok(Row::new(fqn(&ns, &name), fields))
    }
}

fn to_completion(spec: &JobSpec, status: &JobStatus) -> String {
    let succeeded = status.succeeded.unwrap_or(0);
    if let Some(completions) = spec.completions {
        return format!("{}/{}", succeeded, completions);
    }
    match spec.parallelism {
        Some(p) if p > 1 => format!("{}/1 of {}", succeeded, p),
        _ => format!("{}/1", succeeded),
    }
}

fn to_job_duration(status: &JobStatus, now: DateTime<Utc>) -> String {
    let Some(start) = status.start_time.as_ref() else {
        return NA.to_string();
    };
    let end = status
        .completion_time
        .as_ref()
        .map(|t| t.0)
        .unwrap_or(now);
    to_duration(end - start.0)
}

fn to_selector(labels: Option<&BTreeMap<String, String>>) -> String {
    match labels {
        Some(labels) if !labels.is_empty() => labels
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(","),
        _ => NA.to_string(),
    }
}
