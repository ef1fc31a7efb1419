//! A small registry of named mesh objects.
//!
//! Names are unique: adding a second `"Torus"` yields `"Torus.001"`, then
//! `"Torus.002"`, always taking the lowest free suffix.

use crate::errors::GeometryError;
use crate::mesh::Mesh;
use hashbrown::HashSet;
use std::fmt::Debug;
use tracing::{debug, info};

/// Name of the object a freshly started scene contains.
pub const DEFAULT_OBJECT: &str = "Cube";

/// `"Torus.001"` -> `"Torus"`; names without a numeric suffix are returned as is.
fn base_name(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((base, suffix))
            if !base.is_empty() && suffix.len() == 3 && suffix.bytes().all(|b| b.is_ascii_digit()) =>
        {
            base
        }
        _ => name,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("no object named '{0}' in the scene")]
    NotFound(String),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

#[derive(Clone, Debug)]
pub struct SceneObject<S: Clone + Send + Sync + Debug> {
    pub name: String,
    pub mesh: Mesh<S>,
}

#[derive(Clone, Debug)]
pub struct Scene<S: Clone + Send + Sync + Debug> {
    objects: Vec<SceneObject<S>>,
}

impl<S: Clone + Send + Sync + Debug> Default for Scene<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Send + Sync + Debug> Scene<S> {
    /// An empty scene.
    pub const fn new() -> Self {
        Scene { objects: Vec::new() }
    }

    /// A scene as a fresh session opens it: one 2×2×2 cube named
    /// [`DEFAULT_OBJECT`], centred on the origin.
    pub fn startup() -> Self {
        let mut scene = Self::new();
        let cube = Mesh::cuboid(2.0, 2.0, 2.0, None).translate(-1.0, -1.0, -1.0);
        scene.add(DEFAULT_OBJECT, cube);
        scene
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.objects.iter().any(|o| o.name == name)
    }

    /// Object names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().map(|o| o.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&SceneObject<S>> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SceneObject<S>> {
        self.objects.iter_mut().find(|o| o.name == name)
    }

    /// First free name for `base`: `base` itself, else `base.NNN`.
    fn unique_name(&self, base: &str) -> String {
        let taken: HashSet<&str> = self.names().collect();
        if !taken.contains(base) {
            return base.to_string();
        }
        (1..)
            .map(|n| format!("{base}.{n:03}"))
            .find(|candidate| !taken.contains(candidate.as_str()))
            .unwrap_or_else(|| base.to_string())
    }

    /// Add `mesh` under a unique name derived from `base_name`; returns the
    /// name it was stored under.
    pub fn add(&mut self, base_name: &str, mesh: Mesh<S>) -> String {
        let name = self.unique_name(base_name);
        debug!(%name, vertices = mesh.vertex_count(), faces = mesh.face_count(), "add object");
        self.objects.push(SceneObject {
            name: name.clone(),
            mesh,
        });
        name
    }

    /// Remove and return the object called `name`.
    pub fn remove(&mut self, name: &str) -> Result<SceneObject<S>, SceneError> {
        let idx = self
            .objects
            .iter()
            .position(|o| o.name == name)
            .ok_or_else(|| SceneError::NotFound(name.to_string()))?;
        Ok(self.objects.remove(idx))
    }

    /// Remove `name` if it exists. Returns whether anything was removed; a
    /// missing object is not an error.
    pub fn remove_if_present(&mut self, name: &str) -> bool {
        if !self.contains(name) {
            debug!(%name, "object already absent, nothing to remove");
            return false;
        }
        self.remove(name).is_ok()
    }

    /// Deep-copy `name` into a new object and return the copy's name.
    pub fn duplicate(&mut self, name: &str) -> Result<String, SceneError> {
        let source = self
            .get(name)
            .ok_or_else(|| SceneError::NotFound(name.to_string()))?;
        let mesh = source.mesh.duplicate();
        Ok(self.add(base_name(name), mesh))
    }

    /// Replace the mesh of `name`.
    pub fn set_mesh(&mut self, name: &str, mesh: Mesh<S>) -> Result<(), SceneError> {
        let object = self
            .get_mut(name)
            .ok_or_else(|| SceneError::NotFound(name.to_string()))?;
        object.mesh = mesh;
        Ok(())
    }

    /// Remove every object.
    pub fn clear(&mut self) {
        if !self.objects.is_empty() {
            info!(count = self.objects.len(), "clearing scene");
        }
        self.objects.clear();
    }

    pub fn objects(&self) -> &[SceneObject<S>] {
        &self.objects
    }
}
