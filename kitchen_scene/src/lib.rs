/*!
# Kitchen Scene

Fixed 3D kitchen still life (countertop, mug, cutting board, grapes,
sausages, tea box) drawn through backend-agnostic device traits.

The crate never compiles shaders or generates geometry. It writes
uniforms, creates textures and issues primitive draws through three
collaborator traits that a backend implements.

## Architecture

- **ShaderUniforms**: typed uniform setters on the active shader program
- **TextureDevice**: texture creation, slot binding and release
- **MeshLibrary**: primitive mesh upload and per-part draws
- **TextureRegistry** / **MaterialRegistry**: tag-addressed scene resources
- **ShaderBridge**: per-draw transform, color, texture and material writes
- **SceneManager**: prepares the scene once, then renders it per frame

`device::RecordingBackend` implements all three traits without a GPU.
*/

// Internal modules
mod error;
mod config;
pub mod log;
pub mod device;
pub mod resource;
pub mod scene;

// Main kitchen namespace module
pub mod kitchen {
    // Error types
    pub use crate::error::{Error, Result};

    // Configuration
    pub use crate::config::{SceneConfig, DEFAULT_TEXTURE_SLOTS};

    // Scene entry point
    pub use crate::scene::SceneManager;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger};
    }

    // Device collaborator traits and the recording backend
    pub mod device {
        pub use crate::device::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
