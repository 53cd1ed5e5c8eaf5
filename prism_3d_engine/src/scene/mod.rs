//! Scene module — static objects whose transforms are computed, not
//! simulated.

mod scene;

pub use scene::{Scene, SceneObject, SceneObjectKey};
