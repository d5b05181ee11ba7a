//! Resource module
//!
//! Scene-owned registries: textures (tag → handle/slot) and materials
//! (tag → lighting parameters).

pub mod texture_registry;
pub mod material;

pub use texture_registry::{TextureRegistry, TextureEntry, NO_TEXTURE_SLOT, decode_texture};
pub use material::{Material, MaterialRegistry};
