//! Kitchen scene manager
//!
//! Owns the texture and material registries and drives the two phases of
//! the scene:
//!
//! - **prepare_scene**: define materials, load and bind textures, set up the
//!   lights and upload the primitive meshes, once
//! - **render_scene**: draw every group of the layout, once per frame
//!
//! Device collaborators are borrowed per call and never stored.

use crate::config::SceneConfig;
use crate::device::{MeshLibrary, MeshShape, ShaderUniforms, TextureDevice};
use crate::resource::{MaterialRegistry, TextureRegistry};
use crate::{scene_debug, scene_info, scene_trace, scene_warn};
use super::layout::{self, ObjectGroup, SceneObject, SCENE_TEXTURES};
use super::lighting::KITCHEN_LIGHTS;
use super::shader_bridge::ShaderBridge;

const SOURCE: &str = "kitchen::SceneManager";

/// Meshes uploaded during preparation, in upload order
pub const SCENE_MESHES: [MeshShape; 5] = [
    MeshShape::Plane,
    MeshShape::Cylinder,
    MeshShape::Torus,
    MeshShape::Box,
    MeshShape::Sphere,
];

pub struct SceneManager {
    config: SceneConfig,
    textures: TextureRegistry,
    materials: MaterialRegistry,
}

impl SceneManager {
    /// Create a scene with empty registries
    pub fn new(config: SceneConfig) -> Self {
        Self {
            textures: TextureRegistry::from_config(&config),
            materials: MaterialRegistry::new(),
            config,
        }
    }

    // ===== PREPARATION =====

    /// Prepare everything a frame needs, in a fixed order
    ///
    /// Texture failures are logged and skipped; the affected objects render
    /// with their flat color and a `-1` sampler.
    pub fn prepare_scene<'a>(
        &'a mut self,
        textures: &mut dyn TextureDevice,
        shader: Option<&'a mut dyn ShaderUniforms>,
        meshes: &mut dyn MeshLibrary,
    ) {
        self.define_materials();
        let loaded = self.load_scene_textures(textures);

        let mut bridge = ShaderBridge::new(shader, &self.textures, &self.materials);
        if !self.setup_lights(&mut bridge) {
            scene_warn!(SOURCE, "No shader attached, lights not uploaded");
        }

        for shape in SCENE_MESHES {
            meshes.load_mesh(shape);
        }

        scene_info!(SOURCE,
            "Scene prepared: {} materials, {}/{} textures, {} meshes",
            self.materials.len(), loaded, SCENE_TEXTURES.len(), SCENE_MESHES.len());
    }

    /// Install the fixed material table
    ///
    /// Replaces any previous definitions, so preparing twice does not
    /// duplicate entries.
    pub fn define_materials(&mut self) {
        self.materials = MaterialRegistry::new();
        for material in layout::kitchen_materials() {
            self.materials.define(material);
        }
        scene_debug!(SOURCE, "Defined {} materials", self.materials.len());
    }

    /// Load every scene texture, then bind them all to their slots
    ///
    /// Returns how many textures loaded.
    pub fn load_scene_textures(&mut self, device: &mut dyn TextureDevice) -> usize {
        let mut loaded = 0;
        for source in SCENE_TEXTURES {
            let path = self.config.texture_path(source.file_name);
            if self.textures.load_texture(device, &path, source.tag) {
                loaded += 1;
            }
        }
        self.textures.bind_all(device);
        loaded
    }

    /// Enable lighting and upload the fixed light sources
    ///
    /// Returns `false` when no shader is attached.
    pub fn setup_lights(&self, bridge: &mut ShaderBridge<'_>) -> bool {
        if !bridge.set_lighting(self.config.enable_lighting) {
            return false;
        }
        for (index, light) in KITCHEN_LIGHTS.iter().enumerate() {
            bridge.set_light(index, light);
        }
        true
    }

    // ===== RENDERING =====

    /// Draw one frame
    pub fn render_scene<'a>(
        &'a self,
        shader: Option<&'a mut dyn ShaderUniforms>,
        meshes: &mut dyn MeshLibrary,
    ) {
        let mut bridge = self.bridge(shader);
        for group in ObjectGroup::RENDER_ORDER {
            self.draw_group(group, &mut bridge, meshes);
        }
    }

    /// Bridge over `shader` and this scene's registries
    pub fn bridge<'a>(&'a self, shader: Option<&'a mut dyn ShaderUniforms>) -> ShaderBridge<'a> {
        ShaderBridge::new(shader, &self.textures, &self.materials)
    }

    /// Draw every object of `group`
    pub fn draw_group(&self, group: ObjectGroup, bridge: &mut ShaderBridge<'_>, meshes: &mut dyn MeshLibrary) {
        for object in group.objects() {
            Self::draw_object(bridge, meshes, &object);
        }
    }

    pub fn draw_countertop(&self, bridge: &mut ShaderBridge<'_>, meshes: &mut dyn MeshLibrary) {
        self.draw_group(ObjectGroup::Countertop, bridge, meshes);
    }

    pub fn draw_mug(&self, bridge: &mut ShaderBridge<'_>, meshes: &mut dyn MeshLibrary) {
        self.draw_group(ObjectGroup::Mug, bridge, meshes);
    }

    pub fn draw_cutting_board(&self, bridge: &mut ShaderBridge<'_>, meshes: &mut dyn MeshLibrary) {
        self.draw_group(ObjectGroup::CuttingBoard, bridge, meshes);
    }

    pub fn draw_grapes(&self, bridge: &mut ShaderBridge<'_>, meshes: &mut dyn MeshLibrary) {
        self.draw_group(ObjectGroup::Grapes, bridge, meshes);
    }

    pub fn draw_sausages(&self, bridge: &mut ShaderBridge<'_>, meshes: &mut dyn MeshLibrary) {
        self.draw_group(ObjectGroup::Sausages, bridge, meshes);
    }

    pub fn draw_tea_box(&self, bridge: &mut ShaderBridge<'_>, meshes: &mut dyn MeshLibrary) {
        self.draw_group(ObjectGroup::TeaBox, bridge, meshes);
    }

    /// Write the object's state, then issue its single mesh draw
    ///
    /// Write order: transform, color, UV scale, texture, material.
    pub fn draw_object(bridge: &mut ShaderBridge<'_>, meshes: &mut dyn MeshLibrary, object: &SceneObject) {
        bridge.set_transform(&object.transform);

        let surface = &object.surface;
        if let Some(color) = surface.color {
            bridge.set_color(color);
        }
        if let Some(uv_scale) = surface.uv_scale {
            bridge.set_uv_scale(uv_scale.x, uv_scale.y);
        }
        if let Some(tag) = surface.texture {
            bridge.set_texture(tag);
        }
        if let Some(tag) = surface.material {
            bridge.set_material(tag);
        }

        object.mesh.issue(meshes);
        scene_trace!(SOURCE, "Drew {} ({:?})", object.name, object.mesh);
    }

    // ===== TEARDOWN =====

    /// Release every texture of the scene
    pub fn destroy(&mut self, textures: &mut dyn TextureDevice) {
        let count = self.textures.len();
        self.textures.release_all(textures);
        scene_info!(SOURCE, "Released {} textures", count);
    }

    // ===== ACCESSORS =====

    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}

#[cfg(test)]
#[path = "scene_manager_tests.rs"]
mod tests;
