/// Resource-level material type.
///
/// A Material is a pure data description of how a surface reacts to the
/// scene lights: ambient color and strength, diffuse color, specular color
/// and shininess. The scene defines its materials once during preparation
/// and addresses them by tag afterwards; nothing is added or removed later.

use glam::Vec3;

// ===== MATERIAL =====

/// Named surface lighting parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub tag: String,
    pub ambient_color: Vec3,
    pub ambient_strength: f32,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    pub shininess: f32,
}

impl Material {
    pub fn new(
        tag: impl Into<String>,
        ambient_color: Vec3,
        ambient_strength: f32,
        diffuse_color: Vec3,
        specular_color: Vec3,
        shininess: f32,
    ) -> Self {
        Self {
            tag: tag.into(),
            ambient_color,
            ambient_strength,
            diffuse_color,
            specular_color,
            shininess,
        }
    }
}

// ===== REGISTRY =====

/// Ordered, tag-addressed material list
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a material
    ///
    /// Duplicate tags are kept; lookups return the first definition.
    pub fn define(&mut self, material: Material) {
        self.materials.push(material);
    }

    /// First material with `tag`
    ///
    /// `None` both when the registry is empty and when no entry matches.
    pub fn find(&self, tag: &str) -> Option<&Material> {
        self.materials.iter().find(|material| material.tag == tag)
    }

    /// Get material by definition index
    pub fn material_at(&self, index: usize) -> Option<&Material> {
        self.materials.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
