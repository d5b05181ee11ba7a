/// Scene light sources.
///
/// The fragment shader supports up to four entries in `lightSources[]`.
/// Fields left as `None` are never written, so the shader keeps its defaults
/// for them (a directional light has no position or focal strength).

use glam::Vec3;

/// Maximum number of lights the shader reads
pub const MAX_LIGHTS: usize = 4;

/// One entry of the shader's `lightSources[]` array
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSource {
    pub position: Option<Vec3>,
    pub direction: Vec3,
    pub ambient_color: Vec3,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    pub focal_strength: Option<f32>,
    pub specular_intensity: Option<f32>,
}

impl LightSource {
    /// Light with no position, shining along `direction`
    pub const fn directional(direction: Vec3, ambient_color: Vec3, diffuse_color: Vec3, specular_color: Vec3) -> Self {
        Self {
            position: None,
            direction,
            ambient_color,
            diffuse_color,
            specular_color,
            focal_strength: None,
            specular_intensity: None,
        }
    }

    /// Positioned light with a focused highlight
    pub const fn spot(
        position: Vec3,
        direction: Vec3,
        ambient_color: Vec3,
        diffuse_color: Vec3,
        specular_color: Vec3,
        focal_strength: f32,
        specular_intensity: f32,
    ) -> Self {
        Self {
            position: Some(position),
            direction,
            ambient_color,
            diffuse_color,
            specular_color,
            focal_strength: Some(focal_strength),
            specular_intensity: Some(specular_intensity),
        }
    }
}

/// Blue spotlight above the counter, then a soft white fill
pub const KITCHEN_LIGHTS: [LightSource; 2] = [
    LightSource::spot(
        Vec3::new(7.5, 20.0, 5.0),
        Vec3::new(0.0, -1.0, -0.5),
        Vec3::new(0.05, 0.05, 0.3),
        Vec3::new(0.1, 0.1, 1.0),
        Vec3::new(0.2, 0.2, 1.0),
        350.0,
        0.9,
    ),
    LightSource::directional(
        Vec3::new(-0.3, -1.0, -0.3),
        Vec3::splat(0.1),
        Vec3::splat(0.7),
        Vec3::splat(0.5),
    ),
];
