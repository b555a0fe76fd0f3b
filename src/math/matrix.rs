use std::fmt::Write;

use glam::{Mat4, Vec3, Vec4};

/// Render a matrix row by row, four fixed-width columns per line.
///
/// glam stores matrices column-major, so row `i` is read across columns.
pub fn format_matrix(m: &Mat4) -> String {
    let mut out = String::new();
    for row in 0..4 {
        for col in 0..4 {
            let _ = write!(out, "{:>10.4} ", m.col(col)[row]);
        }
        out.push('\n');
    }
    out
}

/// Identity composed with a translation, `I * T`
pub fn translation(offset: Vec3) -> Mat4 {
    Mat4::IDENTITY * Mat4::from_translation(offset)
}

fn banner(out: &mut String, title: &str) {
    let rule = "=".repeat(title.len());
    let _ = writeln!(out);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{rule}");
}

/// Translate a point and a direction by (10, 10, 10).
///
/// The point (w = 1) moves; the direction (w = 0) does not.
pub fn translation_report() -> String {
    let mut out = String::new();
    banner(&mut out, "Translation Matrix");

    let m = translation(Vec3::splat(10.0));
    out.push_str(&format_matrix(&m));

    let position = Vec4::new(10.0, 10.0, 10.0, 1.0);
    let direction = Vec4::new(10.0, 10.0, 10.0, 0.0);

    let _ = writeln!(out);
    let _ = writeln!(out, "Position:  {} -> {}", position, m * position);
    let _ = writeln!(out, "Direction: {} -> {}", direction, m * direction);
    out
}
