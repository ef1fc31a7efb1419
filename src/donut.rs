//! The donut pipeline: a torus base and an icing cut from its copy.

use crate::config::DonutConfig;
use crate::errors::GeometryError;
use crate::mesh::Mesh;
use crate::scene::{DEFAULT_OBJECT, Scene, SceneError};
use std::fmt::Debug;
use tracing::{info, info_span};

/// Name the torus primitive is added under.
pub const TORUS_NAME: &str = "Torus";

#[derive(Debug, thiserror::Error)]
pub enum DonutError {
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Names and cut statistics of a built donut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donut {
    /// Object holding the full torus
    pub base: String,
    /// Object holding the top-half icing
    pub icing: String,
    /// Vertices the icing kept from the torus
    pub kept_vertices: usize,
    /// Vertices the cut removed
    pub removed_vertices: usize,
}

/// Drop the default object if the scene still has it, then empty the scene.
pub fn prepare_scene<S: Clone + Send + Sync + Debug>(scene: &mut Scene<S>) {
    if scene.remove_if_present(DEFAULT_OBJECT) {
        info!("removed default object '{DEFAULT_OBJECT}'");
    }
    scene.clear();
}

/// Add a torus to `scene`, duplicate it and cut the copy down to its top half.
pub fn build_donut<S: Clone + Send + Sync + Debug>(
    scene: &mut Scene<S>,
    config: &DonutConfig,
) -> Result<Donut, DonutError> {
    let _span = info_span!("build_donut").entered();
    let t = &config.torus;

    let torus = Mesh::torus(
        t.major_radius,
        t.minor_radius,
        t.major_segments,
        t.minor_segments,
        None,
    );
    let base = scene.add(TORUS_NAME, torus);
    let icing = scene.duplicate(&base)?;

    let source = scene
        .get(&icing)
        .ok_or_else(|| SceneError::NotFound(icing.clone()))?;
    let before = source.mesh.vertex_count();
    let cut = source.mesh.delete_bottom_half(&config.icing)?;
    let kept_vertices = cut.vertex_count();
    scene.set_mesh(&icing, cut)?;

    info!(
        %base,
        %icing,
        kept_vertices,
        removed_vertices = before - kept_vertices,
        "built donut"
    );

    Ok(Donut {
        base,
        icing,
        kept_vertices,
        removed_vertices: before - kept_vertices,
    })
}
