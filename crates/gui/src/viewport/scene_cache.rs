//! CPU-side cache of the renderable scene
//!
//! Meshing the tree is cheap but not free, and the GPU upload keys off a
//! rebuild counter, so the flattened scene is only re-derived when the tree
//! version or the selection changes.

use model::ModelComponent;

use crate::scene::{self, RenderObject};

#[derive(Default)]
pub struct SceneCache {
    objects: Vec<RenderObject>,
    tree_version: Option<u64>,
    selected: Option<String>,
    rebuild_count: u64,
}

impl SceneCache {
    pub fn is_valid(&self, tree_version: u64, selected: Option<&str>) -> bool {
        self.tree_version == Some(tree_version) && self.selected.as_deref() == selected
    }

    pub fn rebuild(
        &mut self,
        forest: &[ModelComponent],
        selected: Option<&str>,
        tree_version: u64,
    ) {
        let nodes = scene::build_scene(forest, selected);
        self.objects = scene::flatten_scene(&nodes);
        self.tree_version = Some(tree_version);
        self.selected = selected.map(str::to_string);
        self.rebuild_count += 1;
        tracing::debug!(
            objects = self.objects.len(),
            tree_version,
            "rebuilt render scene"
        );
    }

    pub fn objects(&self) -> &[RenderObject] {
        &self.objects
    }

    /// Monotonic counter the GPU upload keys off
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }
}
