//! Component form state (data only)
//!
//! UI rendering lives in ui/form_window.rs in the binary crate. The form
//! edits rotation in degrees and concrete dimension values; conversion to
//! radians and back to the sparse model record happens on submit.

use model::{fallback_name, Dimensions, ModelComponent, PrimitiveType};

use crate::geometry::parse_hex_rgb;

pub const DEFAULT_COLOR_HEX: &str = "#0077ff";

/// Concrete dimension inputs; only the subset for the current type is shown
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionFields {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub radius: f64,
    pub radius_top: f64,
    pub radius_bottom: f64,
    pub length: f64,
}

impl DimensionFields {
    /// Seed with the catalog defaults for a type
    pub fn for_kind(kind: PrimitiveType) -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
            radius: match kind {
                PrimitiveType::Circle => 1.0,
                _ => 0.5,
            },
            radius_top: 0.5,
            radius_bottom: 0.5,
            length: 1.0,
        }
    }

    fn from_dimensions(kind: PrimitiveType, dims: &Dimensions) -> Self {
        let defaults = Self::for_kind(kind);
        Self {
            width: dims.width.unwrap_or(defaults.width),
            height: dims.height.unwrap_or(defaults.height),
            depth: dims.depth.unwrap_or(defaults.depth),
            radius: dims.radius.unwrap_or(defaults.radius),
            radius_top: dims.radius_top.unwrap_or(defaults.radius_top),
            radius_bottom: dims.radius_bottom.unwrap_or(defaults.radius_bottom),
            length: dims.length.unwrap_or(defaults.length),
        }
    }

    /// Sparse record carrying only the fields relevant to `kind`
    fn to_dimensions(&self, kind: PrimitiveType) -> Dimensions {
        match kind {
            PrimitiveType::Box => Dimensions {
                width: Some(self.width),
                height: Some(self.height),
                depth: Some(self.depth),
                ..Default::default()
            },
            PrimitiveType::Sphere | PrimitiveType::Circle => Dimensions {
                radius: Some(self.radius),
                ..Default::default()
            },
            PrimitiveType::Cylinder => Dimensions {
                radius_top: Some(self.radius_top),
                radius_bottom: Some(self.radius_bottom),
                height: Some(self.height),
                ..Default::default()
            },
            PrimitiveType::Cone => Dimensions {
                radius: Some(self.radius),
                height: Some(self.height),
                ..Default::default()
            },
            PrimitiveType::Capsule => Dimensions {
                radius: Some(self.radius),
                length: Some(self.length),
                ..Default::default()
            },
            PrimitiveType::Group => Dimensions::default(),
        }
    }
}

/// Add/Edit form buffer
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentForm {
    pub name: String,
    pub kind: PrimitiveType,
    pub color: [u8; 3],
    pub position: [f64; 3],
    /// Edited in degrees; converted to radians on submit
    pub rotation_deg: [f64; 3],
    pub dims: DimensionFields,
}

impl Default for ComponentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: PrimitiveType::Box,
            color: parse_hex_rgb(DEFAULT_COLOR_HEX).unwrap_or([0, 0x77, 0xff]),
            position: [0.0; 3],
            rotation_deg: [0.0; 3],
            dims: DimensionFields::for_kind(PrimitiveType::Box),
        }
    }
}

impl ComponentForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Change the primitive type, re-seeding dimension defaults
    pub fn set_kind(&mut self, kind: PrimitiveType) {
        if self.kind != kind {
            self.kind = kind;
            self.dims = DimensionFields::for_kind(kind);
        }
    }

    /// Prefill from an existing component for editing
    pub fn load(&mut self, component: &ModelComponent) {
        self.name = component.name.clone();
        self.kind = component.kind;
        self.color = component
            .color
            .as_deref()
            .and_then(parse_hex_rgb)
            .unwrap_or_else(|| parse_hex_rgb(DEFAULT_COLOR_HEX).unwrap_or([0, 0x77, 0xff]));
        self.position = component.position;
        self.rotation_deg = component.rotation.map(f64::to_degrees);
        self.dims = DimensionFields::from_dimensions(component.kind, &component.dimensions);
    }

    /// Build the component described by the form.
    ///
    /// A blank name falls back to `"<type>-<id>"`; rotation is converted
    /// from degrees to radians; `parent_id` and `children` are supplied by
    /// the session controller (fresh add vs. edit carrying children forward).
    pub fn build_component(
        &self,
        id: String,
        parent_id: Option<String>,
        children: Vec<ModelComponent>,
    ) -> ModelComponent {
        let name = if self.name.trim().is_empty() {
            fallback_name(self.kind, &id)
        } else {
            self.name.trim().to_string()
        };
        let [r, g, b] = self.color;

        ModelComponent {
            id,
            name,
            kind: self.kind,
            dimensions: self.dims.to_dimensions(self.kind),
            position: self.position,
            rotation: self.rotation_deg.map(f64::to_radians),
            color: Some(format!("#{r:02x}{g:02x}{b:02x}")),
            children,
            parent_id,
        }
    }
}
