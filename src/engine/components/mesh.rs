use crate::engine::error::{ EngineError, EngineResult };
use crate::engine::utils::math::{ Vec2, Vec3 };

/// Plain CPU-side mesh: per-vertex attributes plus a triangle index list.
///
/// Produced once by a generator in `shapes` and handed to
/// [`Model::load_mesh`](super::model::Model::load_mesh).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
    pub uvs: Option<Vec<Vec2>>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Appends one vertex and returns its index.
    pub fn push_vertex(&mut self, position: Vec3, color: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.colors.push(color);
        index
    }

    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Swaps the second and third index of every triangle.
    pub fn flip_winding(&mut self) {
        for tri in self.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.colors.len() != self.positions.len() {
            return Err(EngineError::InvalidMesh(format!(
                "{} colors for {} positions",
                self.colors.len(),
                self.positions.len()
            )));
        }
        if let Some(uvs) = &self.uvs {
            if uvs.len() != self.positions.len() {
                return Err(EngineError::InvalidMesh(format!(
                    "{} uvs for {} positions",
                    uvs.len(),
                    self.positions.len()
                )));
            }
        }
        if self.indices.len() % 3 != 0 {
            return Err(EngineError::InvalidMesh(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }
        if let Some(&bad) = self.indices.iter().find(|&&i| (i as usize) >= self.positions.len()) {
            return Err(EngineError::InvalidMesh(format!(
                "index {} out of range for {} positions",
                bad,
                self.positions.len()
            )));
        }
        Ok(())
    }
}
