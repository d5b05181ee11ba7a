/// Shader uniform seam

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Typed uniform setters on an already-linked, already-active shader program.
///
/// Uniforms are addressed by name. Every call is a last-write-wins overwrite
/// that stays visible to every subsequent draw, so callers must write all the
/// uniforms a draw depends on immediately before issuing it.
pub trait ShaderUniforms {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_int(&mut self, name: &str, value: i32);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_vec2(&mut self, name: &str, value: Vec2);
    fn set_vec3(&mut self, name: &str, value: Vec3);
    fn set_vec4(&mut self, name: &str, value: Vec4);
    fn set_mat4(&mut self, name: &str, value: Mat4);

    /// Point a sampler uniform at a texture unit.
    ///
    /// Negative values mean "no texture"; the shader must not sample then.
    fn set_sampler(&mut self, name: &str, slot: i32);
}
