mod primitives;
mod sphere;
mod vertex;

pub use primitives::{colored_triangle, textured_quad};
pub use sphere::{generate_sphere, sphere_buffer_size, MAX_SPHERE_RESOLUTION};
pub use vertex::{Mesh, Triangle, Vertex};
