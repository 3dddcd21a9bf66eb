//! Job listing for a CronJob parent.
//!
//! # Components
//!
//! - [`membership`]: decides which Jobs a CronJob owns
//! - [`hydrate`]: turns selected objects into display rows
//! - [`convert`]: decodes generic objects into typed Jobs
//! - [`JobModel`]: wires a lister, the membership test and hydration together
//!
//! # Flow
//!
//! 1. The caller builds a [`ParentRef`](crate::config::ParentRef)
//! 2. [`JobModel::list`] fetches candidates from its [`Lister`](crate::lister::Lister)
//! 3. If the parent carries a uid, candidates go through [`membership::resolve`]
//! 4. [`JobModel::hydrate`] renders the survivors with a caller-supplied renderer

pub mod convert;
pub mod hydrate;
pub mod job;
pub mod membership;

pub use convert::{Converter, JsonConverter};
pub use job::JobModel;
pub use membership::{controller_root, is_controlled_by, is_named_after, resolve};
