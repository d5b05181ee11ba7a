//! Device collaborators
//!
//! The scene core never compiles shaders, uploads vertex data or owns GPU
//! memory. It writes into three seams that a backend implements:
//!
//! - **ShaderUniforms**: typed uniform setters on the active program
//! - **TextureDevice**: 2D texture creation, slot binding and release
//! - **MeshLibrary**: one-time primitive upload and per-part draws
//!
//! `recording` provides a headless backend that logs every call in order.

pub mod shader;
pub mod texture;
pub mod mesh;
pub mod recording;

pub use shader::ShaderUniforms;
pub use texture::{
    TextureDevice, TextureDesc, TextureHandle, TextureFormat, WrapMode, FilterMode,
};
pub use mesh::{MeshLibrary, MeshShape, MeshDraw, CylinderParts};
pub use recording::{
    RecordingBackend, RecordingShader, RecordingTextures, RecordingMeshes,
    DeviceCall, UniformValue, CallLog,
};
