use glam::{Vec2, Vec3};

use super::vertex::{Mesh, Vertex};

/// Red, green and blue corners in normalised device coordinates
pub fn colored_triangle() -> Mesh {
    let corners = [
        (Vec3::new(-0.5, -0.5, 0.0), Vec3::X, Vec2::new(0.0, 1.0)),
        (Vec3::new(0.5, -0.5, 0.0), Vec3::Y, Vec2::new(1.0, 1.0)),
        (Vec3::new(0.0, 0.5, 0.0), Vec3::Z, Vec2::new(0.5, 0.0)),
    ];

    let vertices = corners
        .iter()
        .map(|&(position, color, uv)| Vertex::new(position, Vec3::Z, color, uv))
        .collect();

    Mesh::new(vertices, vec![[0, 1, 2]])
}

/// Square centred on the origin, facing +Z, with the image's top-left
/// texel mapped to the top-left corner
pub fn textured_quad(half_extent: f32) -> Mesh {
    let h = half_extent;
    let corners = [
        (Vec3::new(-h, -h, 0.0), Vec2::new(0.0, 1.0)),
        (Vec3::new(h, -h, 0.0), Vec2::new(1.0, 1.0)),
        (Vec3::new(h, h, 0.0), Vec2::new(1.0, 0.0)),
        (Vec3::new(-h, h, 0.0), Vec2::new(0.0, 0.0)),
    ];

    let vertices = corners
        .iter()
        .map(|&(position, uv)| Vertex::new(position, Vec3::Z, Vec3::ONE, uv))
        .collect();

    Mesh::new(vertices, vec![[0, 1, 3], [3, 1, 2]])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn winding_normal(mesh: &Mesh, triangle: usize) -> Vec3 {
        let [a, b, c] = mesh.triangles[triangle].map(|i| mesh.vertices[i as usize].position());
        (b - a).cross(c - a)
    }

    #[test]
    fn test_triangle_is_counter_clockwise() {
        let mesh = colored_triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert!(winding_normal(&mesh, 0).z > 0.0);
    }

    #[test]
    fn test_quad_triangles_face_viewer() {
        let mesh = textured_quad(0.5);
        assert_eq!(mesh.triangle_count(), 2);
        for i in 0..mesh.triangle_count() {
            assert!(winding_normal(&mesh, i).z > 0.0);
        }
    }

    #[test]
    fn test_quad_uv_corners() {
        let mesh = textured_quad(1.0);
        let top_left = mesh.vertices[3];
        assert_eq!(top_left.position(), Vec3::new(-1.0, 1.0, 0.0));
        assert_eq!(top_left.uv(), Vec2::ZERO);
    }
}
