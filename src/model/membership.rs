//! Membership test for Jobs spawned by a CronJob.
//!
//! Jobs generated by a CronJob controller do not always carry an owner
//! reference we can rely on, so ownership is inferred from two conventions:
//!
//! - the Job is named `<cronjob-name>-<suffix>`
//! - the Job's selector carries a `controller-uid` label that embeds a stable
//!   fragment of the parent's uid
//!
//! # Limitations
//!
//! The uid check is a substring match. An unrelated Job whose controller-uid
//! happens to contain the same fragment passes it too. Replace this module
//! with an owner-reference lookup if that ever becomes available.

use kube::core::DynamicObject;

use crate::config::CONTROLLER_UID_LABEL;
use crate::error::Result;
use crate::model::convert::Converter;

/// Number of leading `-` separated tokens stripped from a parent uid.
const ROOT_SKIP_TOKENS: usize = 2;

/// Return the subset of `candidates` owned by the named parent, in input order.
///
/// When `parent_uid` is absent or empty the candidates come back untouched.
/// A single candidate that fails conversion fails the whole call.
pub fn resolve(
    candidates: Vec<DynamicObject>,
    parent_uid: Option<&str>,
    parent_name: &str,
    converter: &dyn Converter,
) -> Result<Vec<DynamicObject>> {
    resolve_with_label(
        candidates,
        parent_uid,
        parent_name,
        CONTROLLER_UID_LABEL,
        converter,
    )
}

/// Same as [`resolve`] but reads the controller uid from `label`.
pub fn resolve_with_label(
    candidates: Vec<DynamicObject>,
    parent_uid: Option<&str>,
    parent_name: &str,
    label: &str,
    converter: &dyn Converter,
) -> Result<Vec<DynamicObject>> {
    let uid = match parent_uid {
        Some(uid) if !uid.is_empty() => uid,
        _ => return Ok(candidates),
    };

    let mut members = Vec::with_capacity(candidates.len());
    for obj in candidates {
        let job = converter.to_job(&obj)?;
        let name = job.metadata.name.as_deref().unwrap_or_default();
        if !is_named_after(parent_name, name) {
            continue;
        }
        let Some(id) = job
            .spec
            .as_ref()
            .and_then(|spec| spec.selector.as_ref())
            .and_then(|selector| selector.match_labels.as_ref())
            .and_then(|labels| labels.get(label))
        else {
            continue;
        };
        if is_controlled_by(uid, id) {
            tracing::debug!(
                job = name,
                labels = ?job.metadata.labels,
                uid,
                parent = parent_name,
                "Job owned by parent"
            );
            members.push(obj);
        }
    }

    Ok(members)
}

/// Derive the fragment of a parent uid that its children embed.
///
/// Drops the first two `-` separated tokens and rejoins the rest, so
/// `a-b-c-d-e` becomes `c-d-e`. A uid with two tokens or fewer has an empty
/// root. The two-token drop matches the controller's uid scheme; it is a
/// fixed rule, not something to tune.
pub fn controller_root(parent_uid: &str) -> String {
    parent_uid
        .split('-')
        .skip(ROOT_SKIP_TOKENS)
        .collect::<Vec<_>>()
        .join("-")
}

/// Returns true if `controller_uid` contains the root of `parent_uid`.
///
/// An empty root is contained in every string, so short parent uids match
/// every labelled Job.
pub fn is_controlled_by(parent_uid: &str, controller_uid: &str) -> bool {
    controller_uid.contains(controller_root(parent_uid).as_str())
}

/// Returns true if the first `-` separated token of `name` is exactly `parent`.
pub fn is_named_after(parent: &str, name: &str) -> bool {
    name.split('-').next() == Some(parent)
}
