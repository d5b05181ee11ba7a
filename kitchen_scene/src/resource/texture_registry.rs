/// Tag-addressed texture registry.
///
/// Textures are loaded once from image files, uploaded through a
/// [`TextureDevice`], and remembered as `(tag, handle, slot)` entries. The slot
/// is the load order and doubles as the texture unit the texture is bound to,
/// so the sampler uniform of a draw is simply the slot of its tag.
///
/// Lookups are first-match linear scans in load order: a tag that was loaded
/// twice always resolves to its first (lowest) slot.

use std::path::Path;
use image::GenericImageView;
use crate::config::SceneConfig;
use crate::device::{
    TextureDevice, TextureDesc, TextureHandle, TextureFormat, WrapMode, FilterMode,
};
use crate::error::{Error, Result};
use crate::{scene_error, scene_info, scene_debug};

const SOURCE: &str = "kitchen::TextureRegistry";

/// Sampler value written when a tag has no texture
pub const NO_TEXTURE_SLOT: i32 = -1;

// ===== ENTRY =====

/// One loaded texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureEntry {
    tag: String,
    handle: TextureHandle,
    slot: u32,
}

impl TextureEntry {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn handle(&self) -> TextureHandle {
        self.handle
    }

    pub fn slot(&self) -> u32 {
        self.slot
    }
}

// ===== DECODING =====

/// Decode an encoded image into an upload-ready descriptor.
///
/// Only 3- and 4-channel images are accepted; 16-bit sources are narrowed to
/// 8 bits per channel. The descriptor requests repeat wrapping, linear
/// filtering and mipmaps.
pub fn decode_texture(bytes: &[u8], flip_vertically: bool) -> Result<TextureDesc> {
    let decoded = image::load_from_memory(bytes)?;
    let decoded = if flip_vertically { decoded.flipv() } else { decoded };

    let channels = decoded.color().channel_count();
    let format = TextureFormat::from_channel_count(channels)
        .ok_or(Error::UnsupportedChannelCount(channels))?;

    let (width, height) = decoded.dimensions();
    let data = match format {
        TextureFormat::Rgb8 => decoded.into_rgb8().into_raw(),
        TextureFormat::Rgba8 => decoded.into_rgba8().into_raw(),
    };

    Ok(TextureDesc {
        width,
        height,
        format,
        wrap: WrapMode::Repeat,
        filter: FilterMode::Linear,
        generate_mipmaps: true,
        data,
    })
}

// ===== REGISTRY =====

/// Texture registry owned by the scene
#[derive(Debug)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
    max_slots: usize,
    flip_vertically: bool,
}

impl TextureRegistry {
    pub fn new(max_slots: usize, flip_vertically: bool) -> Self {
        Self {
            entries: Vec::new(),
            max_slots,
            flip_vertically,
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.max_texture_slots, config.flip_vertically)
    }

    /// Load an image file and register it under `tag`.
    ///
    /// Returns `false` (after logging) when the file cannot be read or
    /// decoded, has an unsupported channel count, no slot is free, or the
    /// device rejects the upload. Nothing is registered on failure.
    pub fn load_texture(&mut self, device: &mut dyn TextureDevice, path: impl AsRef<Path>, tag: &str) -> bool {
        let path = path.as_ref();
        match self.try_load_texture(device, path, tag) {
            Ok(_) => true,
            Err(err) => {
                scene_error!(SOURCE, "Could not load image '{}' as '{}': {}", path.display(), tag, err);
                false
            }
        }
    }

    /// Load an image file and register it under `tag`, returning its slot
    pub fn try_load_texture(&mut self, device: &mut dyn TextureDevice, path: impl AsRef<Path>, tag: &str) -> Result<u32> {
        let path = path.as_ref();
        self.ensure_free_slot()?;

        let bytes = std::fs::read(path)
            .map_err(|err| Error::InvalidResource(format!("{}: {}", path.display(), err)))?;

        self.register(device, &bytes, tag, &path.display().to_string())
    }

    /// Register an already-read encoded image under `tag`, returning its slot
    pub fn try_load_texture_from_memory(&mut self, device: &mut dyn TextureDevice, bytes: &[u8], tag: &str) -> Result<u32> {
        self.ensure_free_slot()?;
        self.register(device, bytes, tag, "<memory>")
    }

    fn ensure_free_slot(&self) -> Result<()> {
        if self.entries.len() >= self.max_slots {
            return Err(Error::TextureSlotsExhausted(self.max_slots));
        }
        Ok(())
    }

    fn register(&mut self, device: &mut dyn TextureDevice, bytes: &[u8], tag: &str, origin: &str) -> Result<u32> {
        let desc = decode_texture(bytes, self.flip_vertically)?;
        let (width, height, channels) = (desc.width, desc.height, desc.format.channel_count());

        // The pixel buffer moves into the device and is dropped with the call.
        let handle = device.create_texture(desc)?;

        let slot = self.entries.len() as u32;
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            handle,
            slot,
        });

        scene_info!(SOURCE,
            "Successfully loaded image: {}, width: {}, height: {}, channels: {} -> '{}' slot {}",
            origin, width, height, channels, tag, slot);
        Ok(slot)
    }

    /// Bind every texture to its slot, in ascending slot order
    pub fn bind_all(&self, device: &mut dyn TextureDevice) {
        for entry in &self.entries {
            device.bind_texture(entry.slot, entry.handle);
        }
        scene_debug!(SOURCE, "Bound {} textures", self.entries.len());
    }

    /// Handle of the first texture registered under `tag`
    pub fn find_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.find(tag).map(|entry| entry.handle)
    }

    /// Slot of the first texture registered under `tag`
    pub fn find_slot(&self, tag: &str) -> Option<u32> {
        self.find(tag).map(|entry| entry.slot)
    }

    /// Slot as a sampler value, [`NO_TEXTURE_SLOT`] when unknown
    pub fn sampler_slot(&self, tag: &str) -> i32 {
        self.find_slot(tag).map_or(NO_TEXTURE_SLOT, |slot| slot as i32)
    }

    fn find(&self, tag: &str) -> Option<&TextureEntry> {
        self.entries.iter().find(|entry| entry.tag == tag)
    }

    /// Free every texture on the device and empty the registry
    pub fn release_all(&mut self, device: &mut dyn TextureDevice) {
        for entry in self.entries.drain(..) {
            device.release_texture(entry.handle);
        }
    }

    pub fn entries(&self) -> &[TextureEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_slots
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

#[cfg(test)]
#[path = "texture_registry_tests.rs"]
mod tests;
