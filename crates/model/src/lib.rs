use std::fmt;

use serde::{Deserialize, Serialize};

pub mod tree;

pub use tree::{add_child, contains, count, delete_subtree, find_by_id, update_node, TreeError};

/// Unique identifier of a component in the model tree
pub type ComponentId = String;

/// Primitive type of a model component
///
/// `Group` carries no geometry of its own; it only establishes a relative
/// coordinate frame for its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveType {
    Box,
    Sphere,
    Cylinder,
    Cone,
    Capsule,
    Circle,
    Group,
}

impl PrimitiveType {
    /// All primitive types, in form-selector order
    pub const ALL: [PrimitiveType; 7] = [
        PrimitiveType::Box,
        PrimitiveType::Sphere,
        PrimitiveType::Cylinder,
        PrimitiveType::Cone,
        PrimitiveType::Capsule,
        PrimitiveType::Circle,
        PrimitiveType::Group,
    ];

    pub fn is_group(self) -> bool {
        self == PrimitiveType::Group
    }

    pub fn label(self) -> &'static str {
        match self {
            PrimitiveType::Box => "Box",
            PrimitiveType::Sphere => "Sphere",
            PrimitiveType::Cylinder => "Cylinder",
            PrimitiveType::Cone => "Cone",
            PrimitiveType::Capsule => "Capsule",
            PrimitiveType::Circle => "Circle",
            PrimitiveType::Group => "Group",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sparse dimensions record
///
/// Only the subset relevant to a component's type is meaningful; absent
/// fields are filled with per-type defaults at render time, never at write
/// time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
}

impl Dimensions {
    pub fn is_empty(&self) -> bool {
        *self == Dimensions::default()
    }
}

/// One node of the component tree
///
/// The tree is a strict forest: a node is owned by exactly one `children`
/// sequence (or the forest root). `parent_id` is advisory bookkeeping set
/// once at creation when the node is inserted as a child; the nesting IS
/// the structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelComponent {
    pub id: ComponentId,
    pub name: String,
    pub kind: PrimitiveType,
    #[serde(default)]
    pub dimensions: Dimensions,
    pub position: [f64; 3],
    /// Rotation in radians (the form edits degrees and converts)
    pub rotation: [f64; 3],
    /// Hex color string; `None` or empty means the default render color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ModelComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ComponentId>,
}

impl ModelComponent {
    /// Create a component with default transform and no dimensions set
    pub fn new(id: impl Into<ComponentId>, kind: PrimitiveType) -> Self {
        let id = id.into();
        let name = fallback_name(kind, &id);
        Self {
            id,
            name,
            kind,
            dimensions: Dimensions::default(),
            position: [0.0; 3],
            rotation: [0.0; 3],
            color: None,
            children: Vec::new(),
            parent_id: None,
        }
    }

    /// Display label, falling back to `"<type>-<id>"` for a blank name
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            fallback_name(self.kind, &self.id)
        } else {
            self.name.clone()
        }
    }
}

/// Default display name for a component left unnamed at creation
pub fn fallback_name(kind: PrimitiveType, id: &str) -> String {
    format!("{kind}-{id}")
}
