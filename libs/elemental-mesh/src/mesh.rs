//! # Mesh Data Structure
//!
//! Indexed triangle mesh with shared vertices and per-face texture
//! coordinates.

use crate::error::MeshError;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// A triangle mesh whose faces share vertices.
///
/// UVs are stored per face rather than per vertex: the same vertex can carry
/// a different texture coordinate in each face that references it, which is
/// what lets shapes keep one vertex per corner across texture seams.
///
/// The two `*_need_update` flags are the hand-off to whatever renders the
/// mesh: they are raised whenever positions or UVs change and stay raised
/// until [`Mesh::clear_update_flags`] is called.
///
/// # Example
///
/// ```rust
/// use elemental_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(0, 1, 2);
/// mesh.compute_face_normals();
/// assert_eq!(mesh.face_normals().unwrap()[0], DVec3::Z);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMesh")]
pub struct Mesh {
    /// Vertex positions, indices are stable once assigned
    vertices: Vec<DVec3>,
    /// Counter-clockwise triangles (viewed from the outward side)
    faces: Vec<[u32; 3]>,
    /// One UV triple per face, parallel to `faces`
    face_uvs: Vec<[DVec2; 3]>,
    /// Unit normal per face
    face_normals: Option<Vec<DVec3>>,
    /// Unit normal per vertex
    vertex_normals: Option<Vec<DVec3>>,
    vertices_need_update: bool,
    uvs_need_update: bool,
}

/// Wire form of a [`Mesh`], checked before it becomes one.
#[derive(Deserialize)]
struct RawMesh {
    vertices: Vec<DVec3>,
    faces: Vec<[u32; 3]>,
    face_uvs: Vec<[DVec2; 3]>,
    face_normals: Option<Vec<DVec3>>,
    vertex_normals: Option<Vec<DVec3>>,
    vertices_need_update: bool,
    uvs_need_update: bool,
}

impl TryFrom<RawMesh> for Mesh {
    type Error = MeshError;

    fn try_from(raw: RawMesh) -> Result<Self, Self::Error> {
        if raw.vertices.len() > u32::MAX as usize {
            return Err(MeshError::precondition(format!(
                "Mesh has {} vertices, more than u32 indices can address",
                raw.vertices.len()
            )));
        }

        let mesh = Mesh {
            vertices: raw.vertices,
            faces: raw.faces,
            face_uvs: raw.face_uvs,
            face_normals: raw.face_normals,
            vertex_normals: raw.vertex_normals,
            vertices_need_update: raw.vertices_need_update,
            uvs_need_update: raw.uvs_need_update,
        };

        if !mesh.validate() {
            return Err(MeshError::precondition(
                "Mesh has face indices out of range or UVs not parallel to its faces",
            ));
        }
        if let Some(normals) = &mesh.face_normals {
            if normals.len() != mesh.faces.len() {
                return Err(MeshError::precondition(format!(
                    "{} face normals for {} faces",
                    normals.len(),
                    mesh.faces.len()
                )));
            }
        }
        if let Some(normals) = &mesh.vertex_normals {
            if normals.len() != mesh.vertices.len() {
                return Err(MeshError::precondition(format!(
                    "{} vertex normals for {} vertices",
                    normals.len(),
                    mesh.vertices.len()
                )));
            }
        }

        Ok(mesh)
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            face_uvs: Vec::new(),
            face_normals: None,
            vertex_normals: None,
            vertices_need_update: false,
            uvs_need_update: false,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.vertices_need_update = true;
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_face(&mut self, v0: u32, v1: u32, v2: u32) {
        self.faces.push([v0, v1, v2]);
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Mutable positions for the modifiers. Topology stays untouched.
    #[inline]
    pub(crate) fn vertices_mut(&mut self) -> &mut [DVec3] {
        self.vertices_need_update = true;
        &mut self.vertices
    }

    /// Returns the faces.
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Returns the per-face UV triples.
    #[inline]
    pub fn face_uvs(&self) -> &[[DVec2; 3]] {
        &self.face_uvs
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the face at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> [u32; 3] {
        self.faces[index]
    }

    /// Replaces all face UVs and flags them for re-upload.
    ///
    /// Fails if `uvs` is not parallel to the face list.
    pub fn set_face_uvs(&mut self, uvs: Vec<[DVec2; 3]>) -> Result<(), MeshError> {
        if uvs.len() != self.faces.len() {
            return Err(MeshError::precondition(format!(
                "UV count {} does not match face count {}",
                uvs.len(),
                self.faces.len()
            )));
        }
        self.face_uvs = uvs;
        self.uvs_need_update = true;
        Ok(())
    }

    /// Returns the face normals, if computed.
    pub fn face_normals(&self) -> Option<&[DVec3]> {
        self.face_normals.as_deref()
    }

    /// Returns the vertex normals, if computed.
    pub fn vertex_normals(&self) -> Option<&[DVec3]> {
        self.vertex_normals.as_deref()
    }

    fn face_cross(&self, face: &[u32; 3]) -> DVec3 {
        let v0 = self.vertices[face[0] as usize];
        let v1 = self.vertices[face[1] as usize];
        let v2 = self.vertices[face[2] as usize];
        (v1 - v0).cross(v2 - v0)
    }

    /// Computes a unit normal for every face.
    ///
    /// Degenerate faces get a zero normal.
    pub fn compute_face_normals(&mut self) {
        let normals = self
            .faces
            .iter()
            .map(|face| self.face_cross(face).normalize_or_zero())
            .collect();
        self.face_normals = Some(normals);
    }

    /// Computes smooth vertex normals as the area-weighted average of the
    /// normals of all incident faces.
    pub fn compute_vertex_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for face in &self.faces {
            let normal = self.face_cross(face);
            for &index in face {
                normals[index as usize] += normal;
            }
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.vertex_normals = Some(normals);
    }

    /// Recomputes whichever normals are already present.
    pub fn refresh_normals(&mut self) {
        if self.face_normals.is_some() {
            self.compute_face_normals();
        }
        if self.vertex_normals.is_some() {
            self.compute_vertex_normals();
        }
    }

    /// True when positions changed since the last [`Mesh::clear_update_flags`].
    pub fn vertices_need_update(&self) -> bool {
        self.vertices_need_update
    }

    /// True when UVs changed since the last [`Mesh::clear_update_flags`].
    pub fn uvs_need_update(&self) -> bool {
        self.uvs_need_update
    }

    /// Acknowledges that the renderer has picked up the latest data.
    pub fn clear_update_flags(&mut self) {
        self.vertices_need_update = false;
        self.uvs_need_update = false;
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All face indices are valid
    /// - UVs are either absent or parallel to the faces
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        let indices_valid = self
            .faces
            .iter()
            .all(|face| face.iter().all(|&i| i < vertex_count));

        let uvs_valid = self.face_uvs.is_empty() || self.face_uvs.len() == self.faces.len();

        indices_valid && uvs_valid
    }

    /// Exports vertices as a flat f32 array for GPU upload.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports indices as a flat u32 array.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.faces.iter().flatten().copied().collect()
    }

    /// Exports face UVs as a flat f32 array, six values per face in corner
    /// order.
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.face_uvs
            .iter()
            .flatten()
            .flat_map(|uv| [uv.x as f32, uv.y as f32])
            .collect()
    }

    /// Exports vertex normals as a flat f32 array for GPU upload.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.vertex_normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_face(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
        assert!(!mesh.vertices_need_update());
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
        assert!(mesh.vertices_need_update());
    }

    #[test]
    fn test_mesh_add_face() {
        let mesh = triangle();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.face(0), [0, 1, 2]);
    }

    #[test]
    fn test_face_normal_ccw_points_up() {
        let mut mesh = triangle();
        mesh.compute_face_normals();
        assert_eq!(mesh.face_normals().unwrap(), &[DVec3::Z]);
        assert!(mesh.vertex_normals().is_none());
    }

    #[test]
    fn test_vertex_normals_average_incident_faces() {
        // Two triangles folded along the x axis at a right angle
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_vertex(DVec3::NEG_Z);
        mesh.add_face(0, 1, 2);
        mesh.add_face(0, 1, 3);
        mesh.compute_vertex_normals();

        let normals = mesh.vertex_normals().unwrap();
        let expected = DVec3::new(0.0, 1.0, 1.0).normalize();
        assert!((normals[0] - expected).length() < 1e-12);
        assert_eq!(normals[2], DVec3::Z);
        assert_eq!(normals[3], DVec3::Y);
    }

    #[test]
    fn test_degenerate_face_has_zero_normal() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::X * 2.0);
        mesh.add_face(0, 1, 2);
        mesh.compute_face_normals();
        assert_eq!(mesh.face_normals().unwrap()[0], DVec3::ZERO);
    }

    #[test]
    fn test_refresh_normals_only_recomputes_present() {
        let mut mesh = triangle();
        mesh.compute_face_normals();
        mesh.vertices_mut()[2] = DVec3::NEG_Y;
        mesh.refresh_normals();
        assert_eq!(mesh.face_normals().unwrap()[0], DVec3::NEG_Z);
        assert!(mesh.vertex_normals().is_none());
    }

    #[test]
    fn test_set_face_uvs_requires_parallel_length() {
        let mut mesh = triangle();
        let result = mesh.set_face_uvs(Vec::new());
        assert!(matches!(result, Err(MeshError::Precondition { .. })));
        assert!(!mesh.uvs_need_update());

        mesh.set_face_uvs(vec![[DVec2::ZERO, DVec2::X, DVec2::Y]])
            .unwrap();
        assert!(mesh.uvs_need_update());
        assert_eq!(mesh.uvs_f32(), vec![0.0f32, 0.0, 1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_clear_update_flags() {
        let mut mesh = triangle();
        mesh.set_face_uvs(vec![[DVec2::ZERO; 3]]).unwrap();
        mesh.clear_update_flags();
        assert!(!mesh.vertices_need_update());
        assert!(!mesh.uvs_need_update());
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(triangle().validate());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_face(0, 1, 2); // Invalid indices
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_exports() {
        let mut mesh = triangle();
        mesh.compute_vertex_normals();
        assert_eq!(
            mesh.vertices_f32(),
            vec![0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        );
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
        assert_eq!(
            mesh.normals_f32().unwrap(),
            vec![0.0f32, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_mesh_serde_round_trip() {
        let mut mesh = triangle();
        mesh.compute_face_normals();
        let json = serde_json::to_string(&mesh).unwrap();
        let back: Mesh = serde_json::from_str(&json).unwrap();
        assert_eq!(back.faces(), mesh.faces());
        assert_eq!(back.face_normals().map(<[DVec3]>::len), Some(1));
    }

    #[test]
    fn test_mesh_deserialize_rejects_bad_index() {
        let mut value = serde_json::to_value(triangle()).unwrap();
        value["faces"][0][2] = serde_json::json!(99);
        let result: Result<Mesh, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_mesh_deserialize_rejects_short_normals() {
        let mut mesh = triangle();
        mesh.compute_face_normals();
        mesh.compute_vertex_normals();

        let mut value = serde_json::to_value(&mesh).unwrap();
        value["face_normals"] = serde_json::json!([]);
        assert!(serde_json::from_value::<Mesh>(value).is_err());

        let mut value = serde_json::to_value(&mesh).unwrap();
        value["vertex_normals"] = serde_json::json!([[0.0, 0.0, 1.0]]);
        assert!(serde_json::from_value::<Mesh>(value).is_err());
    }

    #[test]
    fn test_mesh_deserialize_rejects_unparallel_uvs() {
        let mut value = serde_json::to_value(triangle()).unwrap();
        value["face_uvs"] = serde_json::json!([[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]], [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]]);
        assert!(serde_json::from_value::<Mesh>(value).is_err());
    }
}
