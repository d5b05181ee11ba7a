/// Tests for ShaderBridge
///
/// Uniform writes go to the recording backend; assertions read back the
/// last-written value of each uniform.

use super::*;
use crate::device::{DeviceCall, RecordingBackend, RecordingShader, UniformValue};
use crate::resource::Material;
use glam::Mat4;
use image::{DynamicImage, ImageFormat, RgbImage};
use std::io::Cursor;

// ============================================================================
// Helper Functions
// ============================================================================

fn registry_with(tags: &[&str], backend: &mut RecordingBackend) -> TextureRegistry {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::new(1, 1))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();

    let mut registry = TextureRegistry::default();
    for tag in tags {
        registry.try_load_texture_from_memory(&mut backend.textures, &bytes, tag).unwrap();
    }
    registry
}

fn wood_registry() -> MaterialRegistry {
    let mut materials = MaterialRegistry::new();
    materials.define(Material::new(
        "wood",
        Vec3::new(0.76, 0.60, 0.42),
        0.5,
        Vec3::new(0.65, 0.45, 0.30),
        Vec3::splat(0.2),
        16.0,
    ));
    materials
}

fn uniform_writes(backend: &RecordingBackend) -> Vec<String> {
    backend
        .calls()
        .iter()
        .filter_map(|call| match call {
            DeviceCall::SetUniform { name, .. } => Some(name.clone()),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Tests: Transform
// ============================================================================

#[test]
fn test_set_transform_uploads_model() {
    let mut backend = RecordingBackend::new();
    let textures = TextureRegistry::default();
    let materials = MaterialRegistry::new();
    let position = Vec3::new(5.5, 0.0, 3.0);

    {
        let mut bridge = ShaderBridge::new(Some(&mut backend.shader), &textures, &materials);
        assert!(bridge.set_transform(&Transform::scaled_at(Vec3::new(1.0, 2.0, 1.0), position)));
    }

    let Some(UniformValue::Mat4(model)) = backend.shader.uniform(uniform::MODEL) else {
        panic!("model matrix not uploaded");
    };
    assert_eq!(model.transform_point3(Vec3::ZERO), position);
}

#[test]
fn test_set_transformations_matches_transform() {
    let mut backend = RecordingBackend::new();
    let textures = TextureRegistry::default();
    let materials = MaterialRegistry::new();
    let t = Transform::new(Vec3::new(0.1, 0.1, 1.8), Vec3::new(0.0, 35.0, 0.0), Vec3::new(0.0, 0.21, 8.0));

    let mut bridge = ShaderBridge::new(Some(&mut backend.shader), &textures, &materials);
    bridge.set_transformations(t.scale, 0.0, 35.0, 0.0, t.position);
    drop(bridge);

    assert_eq!(backend.shader.uniform(uniform::MODEL), Some(UniformValue::Mat4(t.model_matrix())));
}

// ============================================================================
// Tests: Color / Texture
// ============================================================================

#[test]
fn test_set_color_disables_texture() {
    let mut backend = RecordingBackend::new();
    let textures = TextureRegistry::default();
    let materials = MaterialRegistry::new();
    let purple = Vec4::new(0.5, 0.0, 0.5, 1.0);

    let mut bridge = ShaderBridge::new(Some(&mut backend.shader), &textures, &materials);
    bridge.set_color(purple);
    drop(bridge);

    assert_eq!(backend.shader.uniform(uniform::USE_TEXTURE), Some(UniformValue::Bool(false)));
    assert_eq!(backend.shader.uniform(uniform::OBJECT_COLOR), Some(UniformValue::Vec4(purple)));
}

#[test]
fn test_set_texture_resolves_slot() {
    let mut backend = RecordingBackend::new();
    let textures = registry_with(&["mug", "mug2", "counter"], &mut backend);
    let materials = MaterialRegistry::new();

    let mut bridge = ShaderBridge::new(Some(&mut backend.shader), &textures, &materials);
    bridge.set_texture("counter");
    drop(bridge);

    assert_eq!(backend.shader.uniform(uniform::USE_TEXTURE), Some(UniformValue::Bool(true)));
    assert_eq!(backend.shader.uniform(uniform::OBJECT_TEXTURE), Some(UniformValue::Sampler(2)));
}

#[test]
fn test_set_texture_unknown_tag_uploads_sentinel() {
    let mut backend = RecordingBackend::new();
    let textures = TextureRegistry::default();
    let materials = MaterialRegistry::new();

    let mut bridge = ShaderBridge::new(Some(&mut backend.shader), &textures, &materials);
    assert!(bridge.set_texture("cuttingBoard"));
    drop(bridge);

    assert_eq!(backend.shader.uniform(uniform::USE_TEXTURE), Some(UniformValue::Bool(true)));
    assert_eq!(backend.shader.uniform(uniform::OBJECT_TEXTURE), Some(UniformValue::Sampler(-1)));
}

#[test]
fn test_color_after_texture_wins() {
    let mut backend = RecordingBackend::new();
    let textures = registry_with(&["mug"], &mut backend);
    let materials = MaterialRegistry::new();
    let black = Vec4::new(0.0, 0.0, 0.0, 1.0);

    let mut bridge = ShaderBridge::new(Some(&mut backend.shader), &textures, &materials);
    bridge.set_texture("mug");
    bridge.set_color(black);
    drop(bridge);

    assert_eq!(backend.shader.uniform(uniform::USE_TEXTURE), Some(UniformValue::Bool(false)));
    assert_eq!(backend.shader.uniform(uniform::OBJECT_COLOR), Some(UniformValue::Vec4(black)));
    // The sampler keeps its stale value; only the mode flag changed.
    assert_eq!(backend.shader.uniform(uniform::OBJECT_TEXTURE), Some(UniformValue::Sampler(0)));
}

#[test]
fn test_set_uv_scale() {
    let mut backend = RecordingBackend::new();
    let textures = TextureRegistry::default();
    let materials = MaterialRegistry::new();

    let mut bridge = ShaderBridge::new(Some(&mut backend.shader), &textures, &materials);
    bridge.set_uv_scale(5.0, 1.0);
    drop(bridge);

    assert_eq!(backend.shader.uniform(uniform::UV_SCALE), Some(UniformValue::Vec2(Vec2::new(5.0, 1.0))));
    assert_eq!(backend.shader.uniform(uniform::USE_TEXTURE), None);
}

// ============================================================================
// Tests: Material
// ============================================================================

#[test]
fn test_set_material_uploads_five_fields() {
    let mut backend = RecordingBackend::new();
    let textures = TextureRegistry::default();
    let materials = wood_registry();

    let mut bridge = ShaderBridge::new(Some(&mut backend.shader), &textures, &materials);
    assert!(bridge.set_material("wood"));
    drop(bridge);

    assert_eq!(
        uniform_writes(&backend),
        vec![
            uniform::MATERIAL_AMBIENT_COLOR,
            uniform::MATERIAL_AMBIENT_STRENGTH,
            uniform::MATERIAL_DIFFUSE_COLOR,
            uniform::MATERIAL_SPECULAR_COLOR,
            uniform::MATERIAL_SHININESS,
        ]
    );
    let shader = &backend.shader;
    assert_eq!(shader.uniform(uniform::MATERIAL_AMBIENT_COLOR), Some(UniformValue::Vec3(Vec3::new(0.76, 0.60, 0.42))));
    assert_eq!(shader.uniform(uniform::MATERIAL_AMBIENT_STRENGTH), Some(UniformValue::Float(0.5)));
    assert_eq!(shader.uniform(uniform::MATERIAL_SHININESS), Some(UniformValue::Float(16.0)));
}

#[test]
fn test_set_material_miss_writes_nothing() {
    let mut backend = RecordingBackend::new();
    let textures = TextureRegistry::default();
    let materials = wood_registry();

    let mut bridge = ShaderBridge::new(Some(&mut backend.shader), &textures, &materials);
    assert!(!bridge.set_material("glass"));
    drop(bridge);

    assert!(backend.calls().is_empty());
}

#[test]
fn test_set_material_empty_registry_writes_nothing() {
    let mut backend = RecordingBackend::new();
    let textures = TextureRegistry::default();
    let materials = MaterialRegistry::new();

    let mut bridge = ShaderBridge::new(Some(&mut backend.shader), &textures, &materials);
    assert!(!bridge.set_material("wood"));
    drop(bridge);

    assert!(backend.calls().is_empty());
}

// ============================================================================
// Tests: Lights
// ============================================================================

#[test]
fn test_set_light_skips_missing_fields() {
    let mut shader = RecordingShader::new(Default::default());
    let textures = TextureRegistry::default();
    let materials = MaterialRegistry::new();
    let fill = LightSource::directional(Vec3::new(-0.3, -1.0, -0.3), Vec3::splat(0.1), Vec3::splat(0.7), Vec3::splat(0.5));

    let mut bridge = ShaderBridge::new(Some(&mut shader), &textures, &materials);
    assert!(bridge.set_light(1, &fill));
    assert!(!bridge.set_light(MAX_LIGHTS, &fill));
    drop(bridge);

    assert_eq!(shader.uniform_count(), 4);
    assert_eq!(shader.uniform("lightSources[1].direction"), Some(UniformValue::Vec3(Vec3::new(-0.3, -1.0, -0.3))));
    assert_eq!(shader.uniform("lightSources[1].position"), None);
    assert_eq!(shader.uniform("lightSources[1].focalStrength"), None);
}

#[test]
fn test_set_lighting() {
    let mut shader = RecordingShader::new(Default::default());
    let textures = TextureRegistry::default();
    let materials = MaterialRegistry::new();

    let mut bridge = ShaderBridge::new(Some(&mut shader), &textures, &materials);
    bridge.set_lighting(true);
    drop(bridge);

    assert_eq!(shader.uniform(uniform::USE_LIGHTING), Some(UniformValue::Bool(true)));
}

// ============================================================================
// Tests: No shader
// ============================================================================

#[test]
fn test_absent_shader_is_a_no_op() {
    let textures = TextureRegistry::default();
    let materials = wood_registry();
    let mut bridge = ShaderBridge::new(None, &textures, &materials);

    assert!(!bridge.has_shader());
    assert!(!bridge.set_transform(&Transform::IDENTITY));
    assert!(!bridge.set_transformations(Vec3::ONE, 0.0, 0.0, 0.0, Vec3::ZERO));
    assert!(!bridge.set_color(Vec4::ONE));
    assert!(!bridge.set_texture("mug"));
    assert!(!bridge.set_uv_scale(1.0, 1.0));
    assert!(!bridge.set_material("wood"));
    assert!(!bridge.set_lighting(true));
    assert!(!bridge.set_light(0, &crate::scene::lighting::KITCHEN_LIGHTS[0]));
}

#[test]
fn test_identity_transform_model() {
    let mut shader = RecordingShader::new(Default::default());
    let textures = TextureRegistry::default();
    let materials = MaterialRegistry::new();

    let mut bridge = ShaderBridge::new(Some(&mut shader), &textures, &materials);
    bridge.set_transform(&Transform::IDENTITY);
    drop(bridge);

    assert_eq!(shader.uniform(uniform::MODEL), Some(UniformValue::Mat4(Mat4::IDENTITY)));
}
