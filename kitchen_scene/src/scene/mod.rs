//! Scene module
//!
//! Transform composition, the shader bridge, scene lights, the compiled-in
//! kitchen layout and the manager that prepares and renders it.

pub mod transform;
pub mod shader_bridge;
pub mod lighting;
pub mod layout;
mod scene_manager;

pub use transform::{Transform, model_matrix};
pub use shader_bridge::{ShaderBridge, uniform};
pub use lighting::{LightSource, MAX_LIGHTS, KITCHEN_LIGHTS};
pub use layout::{
    SceneObject, Surface, ObjectGroup, TextureSource, SCENE_TEXTURES,
    kitchen_layout, kitchen_materials,
};
pub use scene_manager::{SceneManager, SCENE_MESHES};
