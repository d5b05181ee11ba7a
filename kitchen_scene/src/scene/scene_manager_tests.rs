/// Tests for SceneManager
///
/// These tests run the scene against the recording backend. Texture files
/// are not present in the test environment, so texture loads fail and every
/// textured object falls back to the `-1` sampler.

use super::*;
use crate::device::{CylinderParts, DeviceCall, MeshDraw, RecordingBackend, UniformValue};
use crate::scene::layout::{GRAPE_POSITIONS, GRAPE_SIZES};
use crate::scene::shader_bridge::uniform;
use glam::Vec3;

// ============================================================================
// Helper Functions
// ============================================================================

fn missing_textures_config() -> SceneConfig {
    SceneConfig::default().with_texture_dir(std::env::temp_dir().join("kitchen_scene_no_such_dir"))
}

fn prepared(backend: &mut RecordingBackend) -> SceneManager {
    let mut scene = SceneManager::new(missing_textures_config());
    scene.prepare_scene(&mut backend.textures, Some(&mut backend.shader), &mut backend.meshes);
    scene
}

/// Model matrices uploaded so far, in order
fn model_uploads(backend: &RecordingBackend) -> Vec<glam::Mat4> {
    backend
        .calls()
        .iter()
        .filter_map(|call| match call {
            DeviceCall::SetUniform { name, value: UniformValue::Mat4(model) } if name == uniform::MODEL => Some(*model),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Tests: Preparation
// ============================================================================

#[test]
fn test_new_scene_is_empty() {
    let scene = SceneManager::new(SceneConfig::default());
    assert!(scene.textures().is_empty());
    assert!(scene.materials().is_empty());
    assert_eq!(scene.config().max_texture_slots, 16);
}

#[test]
fn test_prepare_defines_materials() {
    let mut backend = RecordingBackend::new();
    let scene = prepared(&mut backend);

    assert_eq!(scene.materials().len(), 4);
    let wood = scene.materials().find("wood").unwrap();
    assert_eq!(wood.ambient_color, Vec3::new(0.76, 0.60, 0.42));
    assert_eq!(wood.shininess, 16.0);
}

#[test]
fn test_prepare_twice_does_not_duplicate_materials() {
    let mut backend = RecordingBackend::new();
    let mut scene = prepared(&mut backend);
    scene.define_materials();
    assert_eq!(scene.materials().len(), 4);
}

#[test]
fn test_prepare_uploads_meshes_in_order() {
    let mut backend = RecordingBackend::new();
    prepared(&mut backend);
    assert_eq!(backend.meshes.loaded(), &SCENE_MESHES);
}

#[test]
fn test_prepare_uploads_lights() {
    let mut backend = RecordingBackend::new();
    prepared(&mut backend);

    let shader = &backend.shader;
    assert_eq!(shader.uniform(uniform::USE_LIGHTING), Some(UniformValue::Bool(true)));
    assert_eq!(shader.uniform("lightSources[0].position"), Some(UniformValue::Vec3(Vec3::new(7.5, 20.0, 5.0))));
    assert_eq!(shader.uniform("lightSources[0].focalStrength"), Some(UniformValue::Float(350.0)));
    assert_eq!(shader.uniform("lightSources[1].diffuseColor"), Some(UniformValue::Vec3(Vec3::splat(0.7))));
    assert_eq!(shader.uniform("lightSources[1].position"), None);
}

#[test]
fn test_lighting_can_be_disabled() {
    let mut backend = RecordingBackend::new();
    let mut scene = SceneManager::new(missing_textures_config().with_lighting(false));
    scene.prepare_scene(&mut backend.textures, Some(&mut backend.shader), &mut backend.meshes);

    assert_eq!(backend.shader.uniform(uniform::USE_LIGHTING), Some(UniformValue::Bool(false)));
}

#[test]
fn test_missing_texture_files_are_skipped() {
    let mut backend = RecordingBackend::new();
    let scene = prepared(&mut backend);

    assert!(scene.textures().is_empty());
    assert_eq!(backend.textures.live_count(), 0);
}

#[test]
fn test_prepare_without_shader_still_loads_meshes() {
    let mut backend = RecordingBackend::new();
    let mut scene = SceneManager::new(missing_textures_config());
    scene.prepare_scene(&mut backend.textures, None, &mut backend.meshes);

    assert_eq!(backend.meshes.loaded().len(), 5);
    assert_eq!(backend.shader.uniform_count(), 0);
}

// ============================================================================
// Tests: Rendering
// ============================================================================

#[test]
fn test_render_issues_seventeen_draws() {
    let mut backend = RecordingBackend::new();
    let scene = prepared(&mut backend);
    backend.clear_calls();

    scene.render_scene(Some(&mut backend.shader), &mut backend.meshes);

    let draws = backend.draw_calls();
    assert_eq!(draws.len(), 17);
    assert_eq!(draws[0], MeshDraw::Plane);
    assert_eq!(draws[1], MeshDraw::Cylinder(CylinderParts::SIDES));
    assert_eq!(draws[2], MeshDraw::Torus);
    assert_eq!(draws[7], MeshDraw::Box);
    assert_eq!(draws[16], MeshDraw::Box);
    assert_eq!(model_uploads(&backend).len(), 17);
}

#[test]
fn test_draw_grapes_issues_six_spheres() {
    let mut backend = RecordingBackend::new();
    let scene = prepared(&mut backend);
    backend.clear_calls();

    {
        let mut bridge = scene.bridge(Some(&mut backend.shader));
        scene.draw_grapes(&mut bridge, &mut backend.meshes);
    }

    assert_eq!(backend.draw_calls(), vec![MeshDraw::Sphere; 6]);

    let models = model_uploads(&backend);
    assert_eq!(models.len(), 6);
    for (i, model) in models.iter().enumerate() {
        let (scale, _, translation) = model.to_scale_rotation_translation();
        assert_eq!(translation, GRAPE_POSITIONS[i]);
        assert!((scale - Vec3::splat(GRAPE_SIZES[i])).abs().max_element() < 1e-6);
    }
}

#[test]
fn test_each_draw_is_preceded_by_its_transform() {
    let mut backend = RecordingBackend::new();
    let scene = prepared(&mut backend);
    backend.clear_calls();

    {
        let mut bridge = scene.bridge(Some(&mut backend.shader));
        scene.draw_sausages(&mut bridge, &mut backend.meshes);
    }

    let calls = backend.calls();
    let mut model_seen = false;
    for call in calls.iter() {
        match call {
            DeviceCall::SetUniform { name, .. } if name == uniform::MODEL => model_seen = true,
            DeviceCall::DrawMesh(_) => {
                assert!(model_seen, "draw without a fresh transform");
                model_seen = false;
            }
            _ => {}
        }
    }
}

#[test]
fn test_countertop_write_order() {
    let mut backend = RecordingBackend::new();
    let scene = prepared(&mut backend);
    backend.clear_calls();

    {
        let mut bridge = scene.bridge(Some(&mut backend.shader));
        scene.draw_countertop(&mut bridge, &mut backend.meshes);
    }

    let names: Vec<String> = backend
        .calls()
        .iter()
        .filter_map(|call| match call {
            DeviceCall::SetUniform { name, .. } => Some(name.clone()),
            _ => None,
        })
        .collect();

    assert_eq!(&names[..5], &[
        uniform::MODEL,
        uniform::USE_TEXTURE,
        uniform::OBJECT_COLOR,
        uniform::USE_TEXTURE,
        uniform::OBJECT_TEXTURE,
    ]);
    assert_eq!(names[5], uniform::MATERIAL_AMBIENT_COLOR);
    assert_eq!(names.len(), 10);
    assert_eq!(backend.shader.uniform(uniform::OBJECT_TEXTURE), Some(UniformValue::Sampler(-1)));
}

#[test]
fn test_tea_box_has_no_texture_writes() {
    let mut backend = RecordingBackend::new();
    let scene = prepared(&mut backend);
    backend.clear_calls();

    {
        let mut bridge = scene.bridge(Some(&mut backend.shader));
        scene.draw_tea_box(&mut bridge, &mut backend.meshes);
    }

    assert_eq!(backend.shader.uniform(uniform::USE_TEXTURE), Some(UniformValue::Bool(false)));
    assert!(!backend.calls().iter().any(|call| matches!(
        call,
        DeviceCall::SetUniform { name, .. } if name == uniform::OBJECT_TEXTURE
    )));
}

#[test]
fn test_render_without_shader_still_draws() {
    let mut backend = RecordingBackend::new();
    let scene = prepared(&mut backend);
    backend.clear_calls();

    scene.render_scene(None, &mut backend.meshes);

    assert_eq!(backend.draw_calls().len(), 17);
    assert!(model_uploads(&backend).is_empty());
}

// ============================================================================
// Tests: Teardown
// ============================================================================

#[test]
fn test_destroy_on_empty_registry_releases_nothing() {
    let mut backend = RecordingBackend::new();
    let mut scene = prepared(&mut backend);
    backend.clear_calls();

    scene.destroy(&mut backend.textures);

    assert!(backend.calls().is_empty());
    assert!(scene.textures().is_empty());
}
