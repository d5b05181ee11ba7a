//! Kitchen still-life layout
//!
//! Every drawable part of the scene is a [`SceneObject`] descriptor: a mesh
//! draw, the transform it is drawn with and the surface state written before
//! it. Descriptors are grouped per logical object and drawn in
//! [`ObjectGroup::RENDER_ORDER`]. All coordinates are world units with Y up;
//! the countertop plane sits at Y = 0.

use glam::{Vec2, Vec3, Vec4};
use crate::device::{CylinderParts, MeshDraw};
use crate::resource::Material;
use super::transform::Transform;

// ===== DESCRIPTORS =====

/// Surface state written before a draw
///
/// Fields left as `None` are not written, so the draw inherits whatever the
/// previous draw left in the shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub color: Option<Vec4>,
    pub uv_scale: Option<Vec2>,
    pub texture: Option<&'static str>,
    pub material: Option<&'static str>,
}

impl Surface {
    pub const NONE: Surface = Surface {
        color: None,
        uv_scale: None,
        texture: None,
        material: None,
    };

    pub const fn colored(color: Vec4) -> Self {
        Self { color: Some(color), ..Self::NONE }
    }

    pub const fn with_uv_scale(self, u: f32, v: f32) -> Self {
        Self { uv_scale: Some(Vec2::new(u, v)), ..self }
    }

    pub const fn with_texture(self, tag: &'static str) -> Self {
        Self { texture: Some(tag), ..self }
    }

    pub const fn with_material(self, tag: &'static str) -> Self {
        Self { material: Some(tag), ..self }
    }
}

/// One mesh draw of the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    pub name: &'static str,
    pub transform: Transform,
    pub surface: Surface,
    pub mesh: MeshDraw,
}

// ===== COLORS =====

const WHITE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
const BLACK: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);
const GRAY: Vec4 = Vec4::new(0.5, 0.5, 0.5, 1.0);
const BEIGE: Vec4 = Vec4::new(0.96, 0.87, 0.70, 1.0);
const WOOD: Vec4 = Vec4::new(0.76, 0.60, 0.42, 1.0);
const PURPLE: Vec4 = Vec4::new(0.5, 0.0, 0.5, 1.0);
const SAUSAGE_BROWN: Vec4 = Vec4::new(0.65, 0.32, 0.17, 1.0);
const CARDBOARD: Vec4 = Vec4::new(0.8, 0.7, 0.5, 1.0);

// ===== SINGLE OBJECTS =====

pub const COUNTERTOP: SceneObject = SceneObject {
    name: "countertop",
    transform: Transform::scaled_at(Vec3::new(15.0, 1.0, 12.0), Vec3::new(0.0, 0.0, 2.0)),
    surface: Surface::colored(GRAY).with_texture("counter").with_material("counter"),
    mesh: MeshDraw::Plane,
};

/// Body, handle, rims and tea bag, in draw order
pub const MUG: [SceneObject; 6] = [
    SceneObject {
        name: "mug body",
        transform: Transform::scaled_at(Vec3::new(1.0, 2.0, 1.0), Vec3::new(5.5, 0.0, 3.0)),
        surface: Surface::colored(WHITE)
            .with_uv_scale(5.0, 1.0)
            .with_texture("mug")
            .with_material("mugOuter"),
        mesh: MeshDraw::Cylinder(CylinderParts::SIDES),
    },
    SceneObject {
        name: "mug handle",
        transform: Transform::yawed(Vec3::new(0.7, 0.7, 0.2), -15.0, Vec3::new(6.5, 0.8, 3.0)),
        surface: Surface::colored(WHITE).with_uv_scale(2.0, 1.0).with_texture("mug"),
        mesh: MeshDraw::Torus,
    },
    SceneObject {
        name: "mug outer rim",
        transform: Transform::scaled_at(Vec3::new(1.01, 0.05, 1.01), Vec3::new(5.5, 2.0, 3.0)),
        surface: Surface::colored(BLACK),
        mesh: MeshDraw::CYLINDER,
    },
    SceneObject {
        name: "mug inner rim",
        transform: Transform::scaled_at(Vec3::new(0.99, 0.05, 0.99), Vec3::new(5.5, 2.01, 3.0)),
        surface: Surface::colored(WHITE),
        mesh: MeshDraw::CYLINDER,
    },
    SceneObject {
        name: "tea tag",
        transform: Transform::scaled_at(Vec3::new(0.4, 0.6, 0.1), Vec3::new(5.5, 0.33, 4.0)),
        surface: Surface::colored(BLACK),
        mesh: MeshDraw::Box,
    },
    SceneObject {
        name: "tea string",
        transform: Transform::scaled_at(Vec3::new(0.02, 1.75, 0.02), Vec3::new(5.5, 0.33, 4.0)),
        surface: Surface::colored(BEIGE),
        mesh: MeshDraw::CYLINDER,
    },
];

pub const CUTTING_BOARD: SceneObject = SceneObject {
    name: "cutting board",
    transform: Transform::scaled_at(Vec3::new(6.0, 0.2, 3.0), Vec3::new(-1.0, 0.1, 7.5)),
    surface: Surface::colored(WOOD).with_texture("cuttingBoard").with_material("wood"),
    mesh: MeshDraw::Box,
};

pub const TEA_BOX: SceneObject = SceneObject {
    name: "tea box",
    transform: Transform::yawed(Vec3::new(4.0, 2.0, 2.0), -25.0, Vec3::new(2.2, 1.0, 0.6)),
    surface: Surface::colored(CARDBOARD),
    mesh: MeshDraw::Box,
};

// ===== INSTANCED OBJECTS =====

pub const GRAPE_POSITIONS: [Vec3; 6] = [
    Vec3::new(-3.0, 0.4, 7.5),
    Vec3::new(-2.8, 0.38, 6.9),
    Vec3::new(-2.6, 0.40, 7.3),
    Vec3::new(-2.0, 0.4, 6.4),
    Vec3::new(-2.6, 0.40, 7.8),
    Vec3::new(-2.6, 0.38, 6.4),
];

/// Uniform scale of each grape
pub const GRAPE_SIZES: [f32; 6] = [0.2, 0.18, 0.22, 0.19, 0.21, 0.17];

pub const SAUSAGE_POSITIONS: [Vec3; 2] = [
    Vec3::new(0.0, 0.21, 8.0),
    Vec3::new(0.7, 0.21, 7.0),
];

pub const SAUSAGE_SCALE: Vec3 = Vec3::new(0.1, 0.1, 1.8);

/// Y rotation of each sausage, degrees
pub const SAUSAGE_YAWS: [f32; 2] = [35.0, 45.0];

/// One sphere per grape, in table order
pub fn grapes() -> impl Iterator<Item = SceneObject> {
    GRAPE_POSITIONS
        .into_iter()
        .zip(GRAPE_SIZES)
        .map(|(position, size)| SceneObject {
            name: "grape",
            transform: Transform::scaled_at(Vec3::splat(size), position),
            surface: Surface::colored(PURPLE),
            mesh: MeshDraw::Sphere,
        })
}

/// One open-topped cylinder per sausage, in table order
pub fn sausages() -> impl Iterator<Item = SceneObject> {
    SAUSAGE_POSITIONS
        .into_iter()
        .zip(SAUSAGE_YAWS)
        .map(|(position, yaw)| SceneObject {
            name: "sausage",
            transform: Transform::yawed(SAUSAGE_SCALE, yaw, position),
            surface: Surface::colored(SAUSAGE_BROWN),
            mesh: MeshDraw::Cylinder(CylinderParts::BOTTOM.union(CylinderParts::SIDES)),
        })
}

// ===== GROUPS =====

/// Logical objects of the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectGroup {
    Countertop,
    Mug,
    CuttingBoard,
    Grapes,
    Sausages,
    TeaBox,
}

impl ObjectGroup {
    /// Order in which a frame draws the groups
    pub const RENDER_ORDER: [ObjectGroup; 6] = [
        ObjectGroup::Countertop,
        ObjectGroup::Mug,
        ObjectGroup::CuttingBoard,
        ObjectGroup::Grapes,
        ObjectGroup::Sausages,
        ObjectGroup::TeaBox,
    ];

    /// Descriptors of this group, in draw order
    pub fn objects(self) -> Vec<SceneObject> {
        match self {
            ObjectGroup::Countertop => vec![COUNTERTOP],
            ObjectGroup::Mug => MUG.to_vec(),
            ObjectGroup::CuttingBoard => vec![CUTTING_BOARD],
            ObjectGroup::Grapes => grapes().collect(),
            ObjectGroup::Sausages => sausages().collect(),
            ObjectGroup::TeaBox => vec![TEA_BOX],
        }
    }
}

/// Every descriptor of a frame, in draw order
pub fn kitchen_layout() -> Vec<SceneObject> {
    ObjectGroup::RENDER_ORDER
        .into_iter()
        .flat_map(ObjectGroup::objects)
        .collect()
}

// ===== RESOURCES =====

/// Image file and the tag it is registered under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSource {
    pub file_name: &'static str,
    pub tag: &'static str,
}

/// Textures of the scene, in load (and therefore slot) order
pub const SCENE_TEXTURES: [TextureSource; 4] = [
    TextureSource { file_name: "white_mug.jpg", tag: "mug" },
    TextureSource { file_name: "ceramic.jpg", tag: "mug2" },
    TextureSource { file_name: "countertop.jpg", tag: "counter" },
    TextureSource { file_name: "knife_handle.jpg", tag: "cuttingBoard" },
];

/// Materials of the scene, in definition order
pub fn kitchen_materials() -> Vec<Material> {
    let glazed = |tag: &str| {
        Material::new(tag, Vec3::ONE, 0.5, Vec3::splat(0.3), Vec3::splat(0.1), 8.0)
    };

    vec![
        Material::new("counter", Vec3::splat(0.5), 0.3, Vec3::splat(0.2), Vec3::splat(0.2), 32.0),
        glazed("mugOuter"),
        glazed("mugHandle"),
        Material::new(
            "wood",
            Vec3::new(0.76, 0.60, 0.42),
            0.5,
            Vec3::new(0.65, 0.45, 0.30),
            Vec3::splat(0.2),
            16.0,
        ),
    ]
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
