//! Display rows and the renderers that produce them.
//!
//! A [`Renderer`] turns one listed object into one [`Row`]. Renderers are
//! kind specific; [`JobRenderer`] handles `batch/v1` Jobs.

pub mod job;

use chrono::{DateTime, Utc};
use kube::core::DynamicObject;
use serde::Serialize;

use crate::error::Result;

pub use job::JobRenderer;

/// Placeholder for an absent value.
pub const NA: &str = "<none>";

/// Placeholder for an unknown timestamp.
pub const UNKNOWN: &str = "<unknown>";

/// A rendered, display-ready projection of one object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    pub id: String,
    pub fields: Vec<String>,
}

impl Row {
    pub fn new(id: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

/// Produces a display row for one object of a given kind.
pub trait Renderer: Send + Sync {
    /// Column names, in the order [`Renderer::render`] emits fields.
    fn header(&self) -> Vec<&'static str>;

    fn render(&self, obj: &DynamicObject, namespace: &str) -> Result<Row>;
}

/// Build a row id from an object's namespace and name.
pub fn fqn(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", namespace, name)
    }
}

/// Format the time elapsed since `ts` as an age column.
pub fn to_age(ts: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match ts {
        Some(ts) => to_duration(now - ts),
        None => UNKNOWN.to_string(),
    }
}

/// Format a duration in its largest whole unit (`42s`, `5m`, `3h`, `2d`).
///
/// Negative durations (clock skew) render as `0s`.
pub fn to_duration(d: chrono::Duration) -> String {
    let secs = d.num_seconds().max(0);
    match secs {
        s if s < 60 => format!("{}s", s),
        s if s < 3_600 => format!("{}m", s / 60),
        s if s < 86_400 => format!("{}h", s / 3_600),
        s => format!("{}d", s / 86_400),
    }
}
