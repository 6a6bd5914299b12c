//! Geometry catalog: primitive type + sparse dimensions -> render parameters
//!
//! Missing dimension fields fall back to documented per-type defaults here,
//! at render time; the model keeps its sparse record untouched.

pub mod mesh;

pub use mesh::{LineMeshData, MeshData};

use model::{Dimensions, PrimitiveType};

pub const DEFAULT_SEGMENTS: u32 = 32;

/// Default render color `#0077ff`
pub const DEFAULT_COLOR: [f32; 3] = [0.0, 0x77 as f32 / 255.0, 1.0];

/// Concrete render parameters for one primitive, defaults applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box { width: f32, height: f32, depth: f32 },
    Sphere { radius: f32 },
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32 },
    Cone { radius: f32, height: f32 },
    Capsule { radius: f32, length: f32 },
    Circle { radius: f32 },
}

/// Resolve a component's sparse dimensions into concrete shape parameters.
///
/// Returns `None` for `Group`, which is not a renderable primitive.
pub fn resolve_shape(kind: PrimitiveType, dims: &Dimensions) -> Option<Shape> {
    let shape = match kind {
        PrimitiveType::Box => Shape::Box {
            width: dims.width.unwrap_or(1.0) as f32,
            height: dims.height.unwrap_or(1.0) as f32,
            depth: dims.depth.unwrap_or(1.0) as f32,
        },
        PrimitiveType::Sphere => Shape::Sphere {
            radius: dims.radius.unwrap_or(0.5) as f32,
        },
        PrimitiveType::Cylinder => Shape::Cylinder {
            radius_top: dims.radius_top.unwrap_or(0.5) as f32,
            radius_bottom: dims.radius_bottom.unwrap_or(0.5) as f32,
            height: dims.height.unwrap_or(1.0) as f32,
        },
        PrimitiveType::Cone => Shape::Cone {
            radius: dims.radius.unwrap_or(0.5) as f32,
            height: dims.height.unwrap_or(1.0) as f32,
        },
        PrimitiveType::Capsule => Shape::Capsule {
            radius: dims.radius.unwrap_or(0.5) as f32,
            length: dims.length.unwrap_or(1.0) as f32,
        },
        PrimitiveType::Circle => Shape::Circle {
            radius: dims.radius.unwrap_or(1.0) as f32,
        },
        PrimitiveType::Group => return None,
    };
    Some(shape)
}

/// Build the triangle mesh for a resolved shape
pub fn shape_mesh(shape: &Shape, color: [f32; 3]) -> MeshData {
    match *shape {
        Shape::Box {
            width,
            height,
            depth,
        } => mesh::cuboid(width, height, depth, color),
        Shape::Sphere { radius } => mesh::sphere(radius, 16, DEFAULT_SEGMENTS, color),
        Shape::Cylinder {
            radius_top,
            radius_bottom,
            height,
        } => mesh::cylinder(radius_top, radius_bottom, height, DEFAULT_SEGMENTS, color),
        Shape::Cone { radius, height } => mesh::cone(radius, height, DEFAULT_SEGMENTS, color),
        Shape::Capsule { radius, length } => {
            mesh::capsule(radius, length, 8, DEFAULT_SEGMENTS / 2, color)
        }
        Shape::Circle { radius } => mesh::circle(radius, DEFAULT_SEGMENTS, color),
    }
}

/// Parse a `#rrggbb` hex color into linear-ish RGB floats
pub fn parse_hex_color(s: &str) -> Option<[f32; 3]> {
    let [r, g, b] = parse_hex_rgb(s)?;
    Some([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
}

/// Parse a `#rrggbb` hex color into RGB bytes
pub fn parse_hex_rgb(s: &str) -> Option<[u8; 3]> {
    let hex = s.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}

/// Render color for a component: its hex color, or the default.
/// Unparsable or empty strings degrade to the default silently.
pub fn component_color(color: Option<&str>) -> [f32; 3] {
    color.and_then(parse_hex_color).unwrap_or(DEFAULT_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_defaults_fill_missing_fields() {
        let shape = resolve_shape(PrimitiveType::Box, &Dimensions::default()).unwrap();
        assert_eq!(
            shape,
            Shape::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0
            }
        );
    }

    #[test]
    fn test_sphere_default_radius() {
        let shape = resolve_shape(PrimitiveType::Sphere, &Dimensions::default()).unwrap();
        assert_eq!(shape, Shape::Sphere { radius: 0.5 });
    }

    #[test]
    fn test_cylinder_partial_dimensions() {
        let dims = Dimensions {
            radius_top: Some(0.2),
            ..Default::default()
        };
        let shape = resolve_shape(PrimitiveType::Cylinder, &dims).unwrap();
        assert_eq!(
            shape,
            Shape::Cylinder {
                radius_top: 0.2,
                radius_bottom: 0.5,
                height: 1.0
            }
        );
    }

    #[test]
    fn test_circle_default_radius_is_one() {
        let shape = resolve_shape(PrimitiveType::Circle, &Dimensions::default()).unwrap();
        assert_eq!(shape, Shape::Circle { radius: 1.0 });
    }

    #[test]
    fn test_capsule_defaults() {
        let shape = resolve_shape(PrimitiveType::Capsule, &Dimensions::default()).unwrap();
        assert_eq!(
            shape,
            Shape::Capsule {
                radius: 0.5,
                length: 1.0
            }
        );
    }

    #[test]
    fn test_group_is_not_renderable() {
        assert!(resolve_shape(PrimitiveType::Group, &Dimensions::default()).is_none());
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_rgb("#ff69b4"), Some([0xff, 0x69, 0xb4]));
        assert_eq!(parse_hex_rgb("#000000"), Some([0, 0, 0]));
        assert_eq!(parse_hex_rgb("ff69b4"), None);
        assert_eq!(parse_hex_rgb("#fff"), None);
        assert_eq!(parse_hex_rgb("#zzzzzz"), None);
    }

    #[test]
    fn test_component_color_degrades_to_default() {
        assert_eq!(component_color(None), DEFAULT_COLOR);
        assert_eq!(component_color(Some("")), DEFAULT_COLOR);
        assert_eq!(component_color(Some("not-a-color")), DEFAULT_COLOR);
        assert_eq!(component_color(Some("#ffffff")), [1.0, 1.0, 1.0]);
    }
}
