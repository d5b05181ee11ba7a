/// Scene configuration

use std::path::{Path, PathBuf};

/// Number of texture units a typical GL 3.3 context exposes to fragment shaders
pub const DEFAULT_TEXTURE_SLOTS: usize = 16;

/// Scene configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Directory the scene textures are read from
    pub texture_dir: PathBuf,
    /// Maximum number of textures the registry accepts
    pub max_texture_slots: usize,
    /// Flip images vertically on load (image rows top-down, GL rows bottom-up)
    pub flip_vertically: bool,
    /// Value written to `bUseLighting` during light setup
    pub enable_lighting: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            texture_dir: PathBuf::from("../../Utilities/textures"),
            max_texture_slots: DEFAULT_TEXTURE_SLOTS,
            flip_vertically: true,
            enable_lighting: true,
        }
    }
}

impl SceneConfig {
    pub fn with_texture_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.texture_dir = dir.into();
        self
    }

    pub fn with_max_texture_slots(mut self, slots: usize) -> Self {
        self.max_texture_slots = slots;
        self
    }

    pub fn with_flip_vertically(mut self, flip: bool) -> Self {
        self.flip_vertically = flip;
        self
    }

    pub fn with_lighting(mut self, enabled: bool) -> Self {
        self.enable_lighting = enabled;
        self
    }

    /// Resolve a texture file name against `texture_dir`
    pub fn texture_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.texture_dir.join(file_name)
    }
}
