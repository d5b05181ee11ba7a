/// Transform and surface state writer.
///
/// The bridge turns per-draw intent (transform, flat color, texture tag,
/// UV scale, material tag, lights) into named uniform writes on the active
/// shader. It owns no state of its own: every call overwrites shader
/// uniforms that stay in effect for every later draw until written again.
///
/// The shader is optional. Without one every call is a no-op that reports
/// `false`, which lets a scene run against a partially initialized backend.

use glam::{Vec2, Vec3, Vec4};
use crate::device::ShaderUniforms;
use crate::resource::{TextureRegistry, MaterialRegistry};
use crate::scene_debug;
use super::lighting::{LightSource, MAX_LIGHTS};
use super::transform::{self, Transform};

const SOURCE: &str = "kitchen::ShaderBridge";

/// Uniform names understood by the scene shader
pub mod uniform {
    pub const MODEL: &str = "model";
    pub const OBJECT_COLOR: &str = "objectColor";
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    pub const USE_TEXTURE: &str = "bUseTexture";
    pub const USE_LIGHTING: &str = "bUseLighting";
    pub const UV_SCALE: &str = "UVscale";

    pub const MATERIAL_AMBIENT_COLOR: &str = "material.ambientColor";
    pub const MATERIAL_AMBIENT_STRENGTH: &str = "material.ambientStrength";
    pub const MATERIAL_DIFFUSE_COLOR: &str = "material.diffuseColor";
    pub const MATERIAL_SPECULAR_COLOR: &str = "material.specularColor";
    pub const MATERIAL_SHININESS: &str = "material.shininess";

    /// `lightSources[index].field`
    pub fn light_field(index: usize, field: &str) -> String {
        format!("lightSources[{}].{}", index, field)
    }
}

/// Per-draw uniform writer over one shader and the scene registries
pub struct ShaderBridge<'a> {
    shader: Option<&'a mut dyn ShaderUniforms>,
    textures: &'a TextureRegistry,
    materials: &'a MaterialRegistry,
}

impl<'a> ShaderBridge<'a> {
    pub fn new(
        shader: Option<&'a mut dyn ShaderUniforms>,
        textures: &'a TextureRegistry,
        materials: &'a MaterialRegistry,
    ) -> Self {
        Self { shader, textures, materials }
    }

    pub fn has_shader(&self) -> bool {
        self.shader.is_some()
    }

    /// Upload the model matrix for `transform`
    pub fn set_transform(&mut self, transform: &Transform) -> bool {
        let Some(shader) = self.shader.as_deref_mut() else {
            return false;
        };
        shader.set_mat4(uniform::MODEL, transform.model_matrix());
        true
    }

    /// Upload the model matrix built from loose parameters
    pub fn set_transformations(
        &mut self,
        scale: Vec3,
        x_degrees: f32,
        y_degrees: f32,
        z_degrees: f32,
        position: Vec3,
    ) -> bool {
        let Some(shader) = self.shader.as_deref_mut() else {
            return false;
        };
        shader.set_mat4(uniform::MODEL, transform::model_matrix(scale, x_degrees, y_degrees, z_degrees, position));
        true
    }

    /// Switch to flat color mode and upload `color`
    pub fn set_color(&mut self, color: Vec4) -> bool {
        let Some(shader) = self.shader.as_deref_mut() else {
            return false;
        };
        shader.set_bool(uniform::USE_TEXTURE, false);
        shader.set_vec4(uniform::OBJECT_COLOR, color);
        true
    }

    /// Switch to texture mode and point the sampler at `tag`'s slot
    ///
    /// An unknown tag uploads the "no texture" sampler value (-1).
    pub fn set_texture(&mut self, tag: &str) -> bool {
        let slot = self.textures.sampler_slot(tag);
        let Some(shader) = self.shader.as_deref_mut() else {
            return false;
        };
        shader.set_bool(uniform::USE_TEXTURE, true);
        shader.set_sampler(uniform::OBJECT_TEXTURE, slot);
        true
    }

    /// Upload the texture coordinate scale (independent of color/texture mode)
    pub fn set_uv_scale(&mut self, u: f32, v: f32) -> bool {
        let Some(shader) = self.shader.as_deref_mut() else {
            return false;
        };
        shader.set_vec2(uniform::UV_SCALE, Vec2::new(u, v));
        true
    }

    /// Upload the five material fields of `tag`
    ///
    /// Writes nothing and returns `false` when the tag is unknown (including
    /// an empty registry) or no shader is attached.
    pub fn set_material(&mut self, tag: &str) -> bool {
        let materials = self.materials;
        let Some(material) = materials.find(tag) else {
            scene_debug!(SOURCE, "No material tagged '{}'", tag);
            return false;
        };
        let Some(shader) = self.shader.as_deref_mut() else {
            return false;
        };
        shader.set_vec3(uniform::MATERIAL_AMBIENT_COLOR, material.ambient_color);
        shader.set_float(uniform::MATERIAL_AMBIENT_STRENGTH, material.ambient_strength);
        shader.set_vec3(uniform::MATERIAL_DIFFUSE_COLOR, material.diffuse_color);
        shader.set_vec3(uniform::MATERIAL_SPECULAR_COLOR, material.specular_color);
        shader.set_float(uniform::MATERIAL_SHININESS, material.shininess);
        true
    }

    /// Toggle the custom lighting path of the shader
    pub fn set_lighting(&mut self, enabled: bool) -> bool {
        let Some(shader) = self.shader.as_deref_mut() else {
            return false;
        };
        shader.set_bool(uniform::USE_LIGHTING, enabled);
        true
    }

    /// Upload one entry of `lightSources[]`
    ///
    /// Indices at or past [`MAX_LIGHTS`] are ignored.
    pub fn set_light(&mut self, index: usize, light: &LightSource) -> bool {
        if index >= MAX_LIGHTS {
            scene_debug!(SOURCE, "Light index {} ignored (max {})", index, MAX_LIGHTS);
            return false;
        }
        let Some(shader) = self.shader.as_deref_mut() else {
            return false;
        };

        if let Some(position) = light.position {
            shader.set_vec3(&uniform::light_field(index, "position"), position);
        }
        shader.set_vec3(&uniform::light_field(index, "direction"), light.direction);
        shader.set_vec3(&uniform::light_field(index, "ambientColor"), light.ambient_color);
        shader.set_vec3(&uniform::light_field(index, "diffuseColor"), light.diffuse_color);
        shader.set_vec3(&uniform::light_field(index, "specularColor"), light.specular_color);
        if let Some(focal_strength) = light.focal_strength {
            shader.set_float(&uniform::light_field(index, "focalStrength"), focal_strength);
        }
        if let Some(specular_intensity) = light.specular_intensity {
            shader.set_float(&uniform::light_field(index, "specularIntensity"), specular_intensity);
        }
        true
    }
}

#[cfg(test)]
#[path = "shader_bridge_tests.rs"]
mod tests;
