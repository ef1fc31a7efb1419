//! `Mesh` struct: shared vertices plus polygon faces indexing into them.

use crate::bounding_box::BoundingBox;
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::selection::Selection;
use crate::selector::{HalfSpacePartition, HalfSpaceSelector};
use crate::triangulated::Triangulated3D;
use nalgebra::{Point3, Vector3};
use std::{fmt::Debug, sync::OnceLock};
use tracing::debug;

pub mod shapes;
pub mod vertex;

use vertex::Vertex;

/// A polygon face, defined by indices into the owning mesh's vertex list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub indices: Vec<usize>,
}

impl Face {
    pub const fn new(indices: Vec<usize>) -> Self {
        Face { indices }
    }

    /// Paired indices each forming an edge of the face, wrapping around.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.indices
            .iter()
            .zip(self.indices.iter().cycle().skip(1))
            .map(|(&a, &b)| (a, b))
    }

    /// Unnormalised face normal by Newell's method; robust for non-planar
    /// quads. Edges touching an index outside `vertices` are skipped.
    pub fn newell_normal(&self, vertices: &[Vertex]) -> Vector3<Real> {
        self.edges().fold(Vector3::zeros(), |acc, (a, b)| {
            let (Some(p), Some(q)) = (vertices.get(a), vertices.get(b)) else {
                return acc;
            };
            let (p, q) = (p.pos, q.pos);
            acc + Vector3::new(
                (p.y - q.y) * (p.z + q.z),
                (p.z - q.z) * (p.x + q.x),
                (p.x - q.x) * (p.y + q.y),
            )
        })
    }
}

#[derive(Clone, Debug)]
pub struct Mesh<S: Clone + Send + Sync + Debug> {
    /// Shared vertices in object space
    pub vertices: Vec<Vertex>,

    /// Faces indexing into `vertices`
    pub faces: Vec<Face>,

    /// Lazily calculated 8-corner box spanning `vertices`.
    pub bounding_box: OnceLock<BoundingBox>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Default for Mesh<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// An empty mesh.
    pub const fn new() -> Self {
        Mesh {
            vertices: Vec::new(),
            faces: Vec::new(),
            bounding_box: OnceLock::new(),
            metadata: None,
        }
    }

    /// Build a mesh from vertices and index lists, checking every index and
    /// face arity.
    pub fn from_parts(
        vertices: Vec<Vertex>,
        faces: Vec<Vec<usize>>,
        metadata: Option<S>,
    ) -> Result<Self, GeometryError> {
        let mesh = Mesh {
            vertices,
            faces: faces.into_iter().map(Face::new).collect(),
            bounding_box: OnceLock::new(),
            metadata,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        let vertex_count = self.vertices.len();
        for (i, face) in self.faces.iter().enumerate() {
            if face.indices.len() < 3 {
                return Err(GeometryError::DegenerateFace {
                    face: i,
                    corners: face.indices.len(),
                });
            }
            if let Some(&index) = face.indices.iter().find(|&&idx| idx >= vertex_count) {
                return Err(GeometryError::IndexOutOfRange {
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex positions in index order.
    pub fn positions(&self) -> Vec<Point3<Real>> {
        self.vertices.iter().map(|v| v.pos).collect()
    }

    /// Local-space bounding box (cached after first call).
    pub fn bounding_box(&self) -> BoundingBox {
        *self
            .bounding_box
            .get_or_init(|| BoundingBox::from_points(self.vertices.iter().map(|v| &v.pos)))
    }

    /// Reset cached bounding box.
    pub fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }

    /// Deep copy with its own (empty) bounding-box cache.
    pub fn duplicate(&self) -> Self {
        Mesh {
            vertices: self.vertices.clone(),
            faces: self.faces.clone(),
            bounding_box: OnceLock::new(),
            metadata: self.metadata.clone(),
        }
    }

    /// Returns a new mesh translated by x, y, and z.
    pub fn translate(&self, x: Real, y: Real, z: Real) -> Self {
        let offset = Vector3::new(x, y, z);
        let mut moved = self.duplicate();
        for v in &mut moved.vertices {
            v.pos += offset;
        }
        moved
    }

    /// Remove every selected vertex along with each face that uses one.
    ///
    /// Surviving vertices keep their relative order; faces are reindexed.
    pub fn delete_selected(&self, selection: &Selection) -> Result<Self, GeometryError> {
        if selection.len() != self.vertices.len() {
            return Err(GeometryError::SelectionMismatch {
                expected: self.vertices.len(),
                found: selection.len(),
            });
        }

        let mut remap: Vec<Option<usize>> = Vec::with_capacity(self.vertices.len());
        let mut vertices = Vec::with_capacity(self.vertices.len() - selection.selected_count());
        for (i, v) in self.vertices.iter().enumerate() {
            if selection.is_selected(i) {
                remap.push(None);
            } else {
                remap.push(Some(vertices.len()));
                vertices.push(*v);
            }
        }

        let faces: Vec<Face> = self
            .faces
            .iter()
            .filter_map(|face| {
                face.indices
                    .iter()
                    .map(|&idx| remap.get(idx).copied().flatten())
                    .collect::<Option<Vec<usize>>>()
                    .map(Face::new)
            })
            .collect();

        debug!(
            removed_vertices = self.vertices.len() - vertices.len(),
            removed_faces = self.faces.len() - faces.len(),
            "deleted selected vertices"
        );

        Ok(Mesh {
            vertices,
            faces,
            bounding_box: OnceLock::new(),
            metadata: self.metadata.clone(),
        })
    }

    /// Keep only the listed vertices (and the faces built entirely from them).
    pub fn retain_vertices(&self, keep: &[usize]) -> Result<Self, GeometryError> {
        let mut selection = Selection::all(self.vertices.len());
        for &idx in keep {
            if idx >= self.vertices.len() {
                return Err(GeometryError::IndexOutOfRange {
                    index: idx,
                    vertex_count: self.vertices.len(),
                });
            }
            selection.set(idx, false);
        }
        self.delete_selected(&selection)
    }

    /// Split this mesh's vertex indices with `selector`, using the mesh's own
    /// bounding box.
    pub fn partition(
        &self,
        selector: &HalfSpaceSelector,
    ) -> Result<HalfSpacePartition, GeometryError> {
        selector.partition_mesh(self)
    }

    /// Cut away everything below the keep band: mark the keep side, invert
    /// the marks and delete what is selected.
    ///
    /// ```
    /// use glazed::mesh::Mesh;
    /// use glazed::selector::HalfSpaceSelector;
    ///
    /// let torus: Mesh<()> = Mesh::torus(0.05, 0.026, 28, 12, None);
    /// let icing = torus.delete_bottom_half(&HalfSpaceSelector::default()).unwrap();
    /// assert_eq!(icing.vertex_count(), 140);
    /// ```
    pub fn delete_bottom_half(&self, selector: &HalfSpaceSelector) -> Result<Self, GeometryError> {
        let mut selection = selector.classify_mesh(self)?;
        selection.invert();
        self.delete_selected(&selection)
    }

    /// Unit normal of face `face`, or zero for a collapsed face.
    pub fn face_normal(&self, face: &Face) -> Vector3<Real> {
        let n = face.newell_normal(&self.vertices);
        let len = n.norm();
        if len > Real::EPSILON { n / len } else { Vector3::zeros() }
    }
}

/// Fan-triangulates every face.
impl<S: Clone + Send + Sync + Debug> Triangulated3D for Mesh<S> {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for face in &self.faces {
            let Some((&first, rest)) = face.indices.split_first() else {
                continue;
            };
            for pair in rest.windows(2) {
                // Faces are public; an index past the vertex list drops the triangle.
                if let (Some(&a), Some(&b), Some(&c)) = (
                    self.vertices.get(first),
                    self.vertices.get(pair[0]),
                    self.vertices.get(pair[1]),
                ) {
                    f([a, b, c]);
                }
            }
        }
    }
}
