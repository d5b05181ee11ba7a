/// Recording backend (no GPU required)
///
/// Implements every device seam by appending the call to a shared, ordered
/// call log. The shader side also keeps the current value of every uniform,
/// and the texture side keeps live textures in a slot map so that release
/// really frees them. Tests assert against the log; hosts can use it for dry
/// runs.

use std::sync::{Arc, Mutex, MutexGuard};
use glam::{Mat4, Vec2, Vec3, Vec4};
use rustc_hash::FxHashMap;
use slotmap::{DefaultKey, Key, KeyData, SlotMap};

use crate::device::{
    ShaderUniforms, TextureDevice, TextureDesc, TextureHandle,
    MeshLibrary, MeshShape, MeshDraw, CylinderParts,
};
use crate::error::{Error, Result};
use crate::scene_warn;

// ============================================================================
// Recorded calls
// ============================================================================

/// A uniform value as written by the core
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
    Sampler(i32),
}

/// One call into a device seam
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    SetUniform { name: String, value: UniformValue },
    CreateTexture { handle: TextureHandle, width: u32, height: u32, channels: u8 },
    BindTexture { slot: u32, handle: TextureHandle },
    ReleaseTexture { handle: TextureHandle },
    LoadMesh(MeshShape),
    DrawMesh(MeshDraw),
}

/// Ordered call log shared by the three recorders
pub type CallLog = Arc<Mutex<Vec<DeviceCall>>>;

fn push(log: &CallLog, call: DeviceCall) {
    // A poisoned log only happens after a panicking test; keep recording.
    let mut guard = log.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.push(call);
}

// ============================================================================
// Recording shader
// ============================================================================

/// Shader recorder with last-write-wins uniform state
#[derive(Debug)]
pub struct RecordingShader {
    log: CallLog,
    uniforms: FxHashMap<String, UniformValue>,
}

impl RecordingShader {
    pub fn new(log: CallLog) -> Self {
        Self { log, uniforms: FxHashMap::default() }
    }

    /// Current value of a uniform, if it was ever written
    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        self.uniforms.get(name).copied()
    }

    /// Number of distinct uniforms written so far
    pub fn uniform_count(&self) -> usize {
        self.uniforms.len()
    }

    fn write(&mut self, name: &str, value: UniformValue) {
        self.uniforms.insert(name.to_string(), value);
        push(&self.log, DeviceCall::SetUniform { name: name.to_string(), value });
    }
}

impl ShaderUniforms for RecordingShader {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.write(name, UniformValue::Bool(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.write(name, UniformValue::Int(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.write(name, UniformValue::Float(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.write(name, UniformValue::Vec2(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.write(name, UniformValue::Vec3(value));
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.write(name, UniformValue::Vec4(value));
    }

    fn set_mat4(&mut self, name: &str, value: Mat4) {
        self.write(name, UniformValue::Mat4(value));
    }

    fn set_sampler(&mut self, name: &str, slot: i32) {
        self.write(name, UniformValue::Sampler(slot));
    }
}

// ============================================================================
// Recording textures
// ============================================================================

/// Texture recorder backed by a slot map of live textures
#[derive(Debug)]
pub struct RecordingTextures {
    log: CallLog,
    live: SlotMap<DefaultKey, TextureDesc>,
    bindings: FxHashMap<u32, TextureHandle>,
    fail_uploads: bool,
}

impl RecordingTextures {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            live: SlotMap::new(),
            bindings: FxHashMap::default(),
            fail_uploads: false,
        }
    }

    /// Make every following `create_texture` fail with a backend error
    pub fn set_fail_uploads(&mut self, fail: bool) {
        self.fail_uploads = fail;
    }

    /// Descriptor (including pixels) of a live texture
    pub fn texture(&self, handle: TextureHandle) -> Option<&TextureDesc> {
        self.live.get(Self::key(handle))
    }

    /// Number of textures created and not yet released
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Texture currently bound to a unit
    pub fn bound(&self, slot: u32) -> Option<TextureHandle> {
        self.bindings.get(&slot).copied()
    }

    fn key(handle: TextureHandle) -> DefaultKey {
        DefaultKey::from(KeyData::from_ffi(handle.raw()))
    }
}

impl TextureDevice for RecordingTextures {
    fn create_texture(&mut self, desc: TextureDesc) -> Result<TextureHandle> {
        if self.fail_uploads {
            return Err(Error::BackendError("texture upload disabled".to_string()));
        }

        let channels = desc.format.channel_count();
        let expected = desc.width as usize * desc.height as usize * channels as usize;
        if desc.data.len() != expected {
            return Err(Error::BackendError(format!(
                "texture data is {} bytes, expected {} for {}x{}x{}",
                desc.data.len(), expected, desc.width, desc.height, channels
            )));
        }

        let (width, height) = (desc.width, desc.height);
        let key = self.live.insert(desc);
        let handle = TextureHandle::from_raw(key.data().as_ffi());
        push(&self.log, DeviceCall::CreateTexture { handle, width, height, channels });
        Ok(handle)
    }

    fn bind_texture(&mut self, slot: u32, handle: TextureHandle) {
        self.bindings.insert(slot, handle);
        push(&self.log, DeviceCall::BindTexture { slot, handle });
    }

    fn release_texture(&mut self, handle: TextureHandle) {
        if self.live.remove(Self::key(handle)).is_none() {
            scene_warn!("kitchen::RecordingTextures", "Release of unknown texture {:?}", handle);
        }
        self.bindings.retain(|_, bound| *bound != handle);
        push(&self.log, DeviceCall::ReleaseTexture { handle });
    }
}

// ============================================================================
// Recording meshes
// ============================================================================

/// Mesh library recorder
#[derive(Debug)]
pub struct RecordingMeshes {
    log: CallLog,
    loaded: Vec<MeshShape>,
}

impl RecordingMeshes {
    pub fn new(log: CallLog) -> Self {
        Self { log, loaded: Vec::new() }
    }

    /// Shapes uploaded so far, in load order
    pub fn loaded(&self) -> &[MeshShape] {
        &self.loaded
    }

    fn load(&mut self, shape: MeshShape) {
        self.loaded.push(shape);
        push(&self.log, DeviceCall::LoadMesh(shape));
    }

    fn draw(&mut self, draw: MeshDraw) {
        if !self.loaded.contains(&draw.shape()) {
            scene_warn!("kitchen::RecordingMeshes", "Draw of {:?} before its mesh was loaded", draw);
        }
        push(&self.log, DeviceCall::DrawMesh(draw));
    }
}

impl MeshLibrary for RecordingMeshes {
    fn load_plane_mesh(&mut self) {
        self.load(MeshShape::Plane);
    }

    fn load_box_mesh(&mut self) {
        self.load(MeshShape::Box);
    }

    fn load_cylinder_mesh(&mut self) {
        self.load(MeshShape::Cylinder);
    }

    fn load_sphere_mesh(&mut self) {
        self.load(MeshShape::Sphere);
    }

    fn load_torus_mesh(&mut self) {
        self.load(MeshShape::Torus);
    }

    fn draw_plane_mesh(&mut self) {
        self.draw(MeshDraw::Plane);
    }

    fn draw_box_mesh(&mut self) {
        self.draw(MeshDraw::Box);
    }

    fn draw_cylinder_mesh(&mut self, parts: CylinderParts) {
        self.draw(MeshDraw::Cylinder(parts));
    }

    fn draw_sphere_mesh(&mut self) {
        self.draw(MeshDraw::Sphere);
    }

    fn draw_torus_mesh(&mut self) {
        self.draw(MeshDraw::Torus);
    }
}

// ============================================================================
// Recording backend
// ============================================================================

/// The three recorders wired to one call log
///
/// Fields are public so each seam can be borrowed independently:
///
/// ```no_run
/// use kitchen_scene::kitchen::{SceneConfig, SceneManager, device::RecordingBackend};
///
/// let mut backend = RecordingBackend::new();
/// let mut scene = SceneManager::new(SceneConfig::default());
/// scene.prepare_scene(&mut backend.textures, Some(&mut backend.shader), &mut backend.meshes);
/// scene.render_scene(Some(&mut backend.shader), &mut backend.meshes);
/// assert_eq!(backend.draw_calls().len(), 17);
/// ```
#[derive(Debug)]
pub struct RecordingBackend {
    pub shader: RecordingShader,
    pub textures: RecordingTextures,
    pub meshes: RecordingMeshes,
    log: CallLog,
}

impl RecordingBackend {
    pub fn new() -> Self {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        Self {
            shader: RecordingShader::new(log.clone()),
            textures: RecordingTextures::new(log.clone()),
            meshes: RecordingMeshes::new(log.clone()),
            log,
        }
    }

    /// Lock and borrow the full call log
    pub fn calls(&self) -> MutexGuard<'_, Vec<DeviceCall>> {
        self.log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Forget every recorded call (uniform and texture state are kept)
    pub fn clear_calls(&self) {
        self.calls().clear();
    }

    /// Only the mesh draws, in issue order
    pub fn draw_calls(&self) -> Vec<MeshDraw> {
        self.calls()
            .iter()
            .filter_map(|call| match call {
                DeviceCall::DrawMesh(draw) => Some(*draw),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "recording_tests.rs"]
mod tests;
