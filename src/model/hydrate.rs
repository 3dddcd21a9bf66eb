use kube::core::DynamicObject;

use crate::error::Result;
use crate::render::{Renderer, Row};

/// Render one row per object, in input order.
///
/// The first renderer failure is returned as-is and no rows are produced.
pub fn hydrate(
    objects: &[DynamicObject],
    namespace: &str,
    renderer: &dyn Renderer,
) -> Result<Vec<Row>> {
    objects
        .iter()
        .map(|obj| renderer.render(obj, namespace))
        .collect()
}
