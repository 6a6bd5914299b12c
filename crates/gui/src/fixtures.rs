//! Factory functions for sample content and test data

use model::{Dimensions, ModelComponent, PrimitiveType};

/// The sample "ice cream" composite: a Group carrying a flipped Cone and a
/// Sphere scoop. Demonstrates grouping with fresh unique ids on every call.
pub fn ice_cream_group() -> ModelComponent {
    let cone_id = format!("cone-{}", uuid::Uuid::new_v4());
    let scoop_id = format!("scoop-{}", uuid::Uuid::new_v4());
    let group_id = format!("icecream-{}", uuid::Uuid::new_v4());

    let cone = ModelComponent {
        name: "Cone".to_string(),
        dimensions: Dimensions {
            radius: Some(0.5),
            height: Some(2.0),
            ..Default::default()
        },
        rotation: [std::f64::consts::PI, 0.0, 0.0],
        color: Some("#d2a679".to_string()),
        parent_id: Some(group_id.clone()),
        ..ModelComponent::new(cone_id, PrimitiveType::Cone)
    };

    let scoop = ModelComponent {
        name: "Scoop".to_string(),
        dimensions: Dimensions {
            radius: Some(0.7),
            ..Default::default()
        },
        position: [0.0, 1.4, 0.0],
        color: Some("#ff69b4".to_string()),
        parent_id: Some(group_id.clone()),
        ..ModelComponent::new(scoop_id, PrimitiveType::Sphere)
    };

    ModelComponent {
        name: "Ice Cream".to_string(),
        children: vec![cone, scoop],
        ..ModelComponent::new(group_id, PrimitiveType::Group)
    }
}

/// Component with an explicit name (tests)
pub fn named(id: &str, name: &str, kind: PrimitiveType) -> ModelComponent {
    ModelComponent {
        name: name.to_string(),
        ..ModelComponent::new(id, kind)
    }
}

/// A "Jar" cylinder carrying a "Lid" box child (tests)
pub fn jar_with_lid() -> ModelComponent {
    let mut jar = named("Jar", "Jar", PrimitiveType::Cylinder);
    let mut lid = named("Lid", "Lid", PrimitiveType::Box);
    lid.parent_id = Some(jar.id.clone());
    jar.children.push(lid);
    jar
}
