use std::fmt::Write;

use glam::{BVec3, DVec2, IVec2, Vec2, Vec3, Vec4, Vec4Swizzles};

/// Mirror `incident` about the plane with unit normal `normal`
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * normal.dot(incident) * normal
}

/// Bend `incident` through a surface with unit normal `normal` and ratio of
/// indices of refraction `eta`. Returns zero on total internal reflection.
pub fn refract(incident: Vec3, normal: Vec3, eta: f32) -> Vec3 {
    let cos_i = normal.dot(incident);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        Vec3::ZERO
    } else {
        eta * incident - (eta * cos_i + k.sqrt()) * normal
    }
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "-- {title} --");
}

fn constructors(out: &mut String) {
    section(out, "Constructors");

    let point0 = Vec2::new(10.0, 10.0);
    let point1 = Vec3::new(10.0, 0.0, 0.0);
    let point2 = Vec4::new(10.0, 0.0, 0.0, 0.0);
    let point3 = IVec2::new(3, 4);
    let point4 = BVec3::new(false, true, false);
    let point5 = DVec2::new(10.0, 10.0);
    let point6 = point0.extend(1.0);

    let _ = writeln!(out, "Point0: {point0}");
    let _ = writeln!(out, "Point1: {point1}");
    let _ = writeln!(out, "Point2: {point2}");
    let _ = writeln!(out, "Point3: {point3}");
    let _ = writeln!(out, "Point4: {point4}");
    let _ = writeln!(out, "Point5: {point5}");
    let _ = writeln!(out, "Point6: {point6}");
}

fn components(out: &mut String) {
    section(out, "Components");

    let p = Vec3::new(1.0, 2.0, 3.0);
    let _ = writeln!(out, "X: {} Y: {} Z: {}", p.x, p.y, p.z);
    let _ = writeln!(out, "0: {} 1: {} 2: {}", p[0], p[1], p[2]);
}

fn swizzle(out: &mut String) {
    section(out, "Swizzle");

    let p = Vec4::new(1.0, 2.0, 3.0, 4.0);
    let _ = writeln!(out, "xxx:  {}", p.xxx());
    let _ = writeln!(out, "xyx:  {}", p.xyx());
    let _ = writeln!(out, "xyxw: {}", p.xyxw());
    let _ = writeln!(out, "xzzw: {}", p.xzzw());
}

fn operations(out: &mut String) {
    section(out, "Operations");

    let p0 = Vec3::new(10.0, 10.0, 0.0);
    let p1 = Vec3::new(10.0, 10.0, 10.0);
    let norm = p0.normalize();

    let _ = writeln!(out, "add:       {}", p0 + p1);
    let _ = writeln!(out, "sub:       {}", p0 - p1);
    let _ = writeln!(out, "scale:     {}", p0 * 10.0);
    let _ = writeln!(out, "shrink:    {}", p0 / 10.0);
    let _ = writeln!(out, "mul:       {}", p0 * p1);
    let _ = writeln!(out, "div:       {}", p0 / p1);
    let _ = writeln!(out, "length:    {}", p0.length());
    let _ = writeln!(out, "normalize: {norm}");
    let _ = writeln!(out, "dot:       {}", p0.dot(p1));
    let _ = writeln!(out, "cross:     {}", p0.cross(p1));
    let _ = writeln!(out, "distance:  {}", p0.distance(p1));
    let _ = writeln!(out, "refract:   {}", refract(p0, norm, 1.0));
    let _ = writeln!(out, "reflect:   {}", reflect(p0, norm));
}

/// Walk through vector construction, component access, swizzles and
/// arithmetic
pub fn vectors_report() -> String {
    let mut out = String::new();
    constructors(&mut out);
    components(&mut out);
    swizzle(&mut out);
    operations(&mut out);
    out
}
