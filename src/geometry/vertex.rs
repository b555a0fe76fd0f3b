use glam::{Vec2, Vec3};

/// Vertex layout shared by every demo mesh
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x3,
        3 => Float32x2
    ];

    pub fn new(position: Vec3, normal: Vec3, color: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color: color.to_array(),
            uv: uv.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    pub fn uv(&self) -> Vec2 {
        Vec2::from_array(self.uv)
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Three indices into a mesh's vertex list
pub type Triangle = [u32; 3];

/// Static indexed geometry, built once and uploaded as-is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, triangles: Vec<Triangle>) -> Self {
        Self { vertices, triangles }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Triangle list flattened into an index buffer
    pub fn indices(&self) -> &[u32] {
        bytemuck::cast_slice(&self.triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_size_matches_stride() {
        assert_eq!(std::mem::size_of::<Vertex>(), 44);
        assert_eq!(Vertex::layout().array_stride, 44);
    }

    #[test]
    fn test_vertex_attribute_offsets() {
        let layout = Vertex::layout();
        let offsets: Vec<u64> = layout.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24, 36]);
    }

    #[test]
    fn test_indices_flatten_in_order() {
        let mesh = Mesh::new(Vec::new(), vec![[0, 1, 2], [2, 1, 3]]);
        assert_eq!(mesh.indices(), &[0, 1, 2, 2, 1, 3]);
        assert_eq!(mesh.index_count(), 6);
    }

    #[test]
    fn test_vertex_accessors() {
        let v = Vertex::new(Vec3::X, Vec3::Y, Vec3::ONE, Vec2::new(0.25, 0.75));
        assert_eq!(v.position(), Vec3::X);
        assert_eq!(v.normal(), Vec3::Y);
        assert_eq!(v.uv(), Vec2::new(0.25, 0.75));
    }
}
