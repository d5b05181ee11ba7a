/// Texture device seam, texture descriptor and texture handle

use crate::error::Result;

/// Opaque GPU texture id minted by a [`TextureDevice`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(u64);

impl TextureHandle {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Pixel layout of the uploaded data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    /// 3 channels, 8 bits each
    Rgb8,
    /// 4 channels, 8 bits each (supports transparency)
    Rgba8,
}

impl TextureFormat {
    pub fn channel_count(self) -> u8 {
        match self {
            TextureFormat::Rgb8 => 3,
            TextureFormat::Rgba8 => 4,
        }
    }

    /// Map a decoded channel count to a format, if supported
    pub fn from_channel_count(channels: u8) -> Option<Self> {
        match channels {
            3 => Some(TextureFormat::Rgb8),
            4 => Some(TextureFormat::Rgba8),
            _ => None,
        }
    }
}

/// Texture coordinate wrapping, applied to both S and T
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    Repeat,
    ClampToEdge,
}

/// Min/mag filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Linear,
}

/// Descriptor for creating a 2D texture
///
/// The pixel buffer is moved into the device; once `create_texture`
/// returns, the host copy is gone.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDesc {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format of `data`
    pub format: TextureFormat,
    /// Wrapping on S and T
    pub wrap: WrapMode,
    /// Min and mag filter
    pub filter: FilterMode,
    /// Generate the full mip chain after upload
    pub generate_mipmaps: bool,
    /// Tightly packed rows, first row first
    pub data: Vec<u8>,
}

/// GPU texture lifecycle
pub trait TextureDevice {
    /// Create and fill a 2D texture
    fn create_texture(&mut self, desc: TextureDesc) -> Result<TextureHandle>;

    /// Bind a texture to a texture unit
    fn bind_texture(&mut self, slot: u32, handle: TextureHandle);

    /// Free the GPU memory behind a handle
    fn release_texture(&mut self, handle: TextureHandle);
}
