use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use super::vertex::{Mesh, Triangle, Vertex};
use crate::error::{Error, Result};

/// Largest resolution whose vertex indices still fit in `u32`
pub const MAX_SPHERE_RESOLUTION: u32 = 65535;

/// Byte size of the largest GPU buffer a sphere of `resolution` needs.
///
/// The vertex buffer always outgrows the index buffer, so this is
/// `resolution² * size_of::<Vertex>()`.
pub fn sphere_buffer_size(resolution: u32) -> u64 {
    let vertices = resolution as u64 * resolution as u64;
    let indices = 6 * (resolution.saturating_sub(1) as u64).pow(2);
    let vertex_bytes = vertices * std::mem::size_of::<Vertex>() as u64;
    let index_bytes = indices * std::mem::size_of::<u32>() as u64;
    vertex_bytes.max(index_bytes)
}

/// Build a unit UV sphere on a `resolution` x `resolution` grid.
///
/// U runs over longitude and V over colatitude, both in [0, 1]. Vertex
/// `(u, v)` lands at index `u * resolution + v`. The seam meridian is
/// duplicated and the pole rows collapse to a point, so the mesh contains
/// zero-area triangles at both poles.
///
/// Produces `resolution²` vertices and `2 * (resolution - 1)²` triangles.
/// Resolutions outside `2..=MAX_SPHERE_RESOLUTION` are rejected.
pub fn generate_sphere(resolution: u32) -> Result<Mesh> {
    if !(2..=MAX_SPHERE_RESOLUTION).contains(&resolution) {
        return Err(Error::InvalidResolution(resolution));
    }

    let vertices = sphere_vertices(resolution);
    let triangles = sphere_triangles(resolution);

    log::debug!(
        "Sphere mesh: resolution {}, {} vertices, {} triangles",
        resolution,
        vertices.len(),
        triangles.len()
    );

    Ok(Mesh::new(vertices, triangles))
}

fn sphere_vertices(resolution: u32) -> Vec<Vertex> {
    let step = 1.0 / (resolution - 1) as f32;

    (0..resolution)
        .flat_map(|u_index| {
            (0..resolution).map(move |v_index| {
                let u = u_index as f32 * step;
                let v = v_index as f32 * step;

                let theta = u * TAU;
                let phi = v * PI;

                let position = Vec3::new(theta.cos() * phi.sin(), theta.sin() * phi.sin(), phi.cos());

                Vertex::new(
                    position,
                    position.normalize(),
                    Vec3::ONE,
                    Vec2::new(1.0 - u, v),
                )
            })
        })
        .collect()
}

fn sphere_triangles(resolution: u32) -> Vec<Triangle> {
    let r = resolution;
    let quads = (r - 1) as usize;
    let mut triangles = Vec::with_capacity(2 * quads * quads);

    for u in 0..r - 1 {
        for v in 0..r - 1 {
            let p0 = u + v * r;
            let p1 = (u + 1) + v * r;
            let p2 = (u + 1) + (v + 1) * r;
            let p3 = u + (v + 1) * r;

            triangles.push([p0, p1, p3]);
            triangles.push([p3, p1, p2]);
        }
    }

    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_low_resolution() {
        assert!(matches!(generate_sphere(0), Err(Error::InvalidResolution(0))));
        assert!(matches!(generate_sphere(1), Err(Error::InvalidResolution(1))));
    }

    #[test]
    fn test_rejects_resolution_past_index_range() {
        let too_big = MAX_SPHERE_RESOLUTION + 1;
        assert!(matches!(
            generate_sphere(too_big),
            Err(Error::InvalidResolution(r)) if r == too_big
        ));
    }

    #[test]
    fn test_buffer_size_is_vertex_bytes() {
        assert_eq!(sphere_buffer_size(2), 4 * 44);
        assert_eq!(sphere_buffer_size(50), 2500 * 44);
        assert_eq!(sphere_buffer_size(3000), 9_000_000 * 44);
    }

    #[test]
    fn test_buffer_size_does_not_overflow() {
        let size = sphere_buffer_size(MAX_SPHERE_RESOLUTION);
        assert_eq!(size, 65535u64 * 65535 * 44);
    }

    #[test]
    fn test_minimal_sphere() {
        let mesh = generate_sphere(2).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangles, vec![[0, 1, 2], [2, 1, 3]]);
    }

    #[test]
    fn test_vertex_order_is_u_major() {
        let r = 5;
        let mesh = generate_sphere(r).unwrap();

        // u_index = 1, v_index = 0 is the north pole of the second meridian
        let v = mesh.vertices[r as usize];
        assert!((v.position() - Vec3::Z).length() < 1e-6);
        assert!((v.uv() - Vec2::new(0.75, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_texcoords_span_unit_square() {
        let mesh = generate_sphere(9).unwrap();
        let first = mesh.vertices.first().unwrap().uv();
        let last = mesh.vertices.last().unwrap().uv();

        assert_eq!(first, Vec2::new(1.0, 0.0));
        assert!((last - Vec2::new(0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_seam_meridian_is_duplicated() {
        let r = 8usize;
        let mesh = generate_sphere(r as u32).unwrap();

        for v in 0..r {
            let start = mesh.vertices[v].position();
            let end = mesh.vertices[(r - 1) * r + v].position();
            assert!((start - end).length() < 1e-5);
        }
    }
}
