/// Primitive mesh seam

use bitflags::bitflags;

bitflags! {
    /// Which parts of a cylinder get drawn
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CylinderParts: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const SIDES = 1 << 2;
    }
}

/// Primitive kinds provided by the mesh library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshShape {
    Plane,
    Box,
    Cylinder,
    Sphere,
    Torus,
}

/// A single draw call against the mesh library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshDraw {
    Plane,
    Box,
    Cylinder(CylinderParts),
    Sphere,
    Torus,
}

impl MeshDraw {
    /// Closed cylinder with both caps
    pub const CYLINDER: MeshDraw = MeshDraw::Cylinder(CylinderParts::all());

    pub fn shape(self) -> MeshShape {
        match self {
            MeshDraw::Plane => MeshShape::Plane,
            MeshDraw::Box => MeshShape::Box,
            MeshDraw::Cylinder(_) => MeshShape::Cylinder,
            MeshDraw::Sphere => MeshShape::Sphere,
            MeshDraw::Torus => MeshShape::Torus,
        }
    }

    /// Dispatch this draw to the matching `draw_*_mesh` call
    pub fn issue(self, meshes: &mut dyn MeshLibrary) {
        match self {
            MeshDraw::Plane => meshes.draw_plane_mesh(),
            MeshDraw::Box => meshes.draw_box_mesh(),
            MeshDraw::Cylinder(parts) => meshes.draw_cylinder_mesh(parts),
            MeshDraw::Sphere => meshes.draw_sphere_mesh(),
            MeshDraw::Torus => meshes.draw_torus_mesh(),
        }
    }
}

/// Shape-mesh library: geometry is uploaded once, then drawn any number of
/// times with whatever model matrix and surface uniforms are current.
pub trait MeshLibrary {
    fn load_plane_mesh(&mut self);
    fn load_box_mesh(&mut self);
    fn load_cylinder_mesh(&mut self);
    fn load_sphere_mesh(&mut self);
    fn load_torus_mesh(&mut self);

    fn draw_plane_mesh(&mut self);
    fn draw_box_mesh(&mut self);
    fn draw_cylinder_mesh(&mut self, parts: CylinderParts);
    fn draw_sphere_mesh(&mut self);
    fn draw_torus_mesh(&mut self);

    /// Upload one primitive by kind
    fn load_mesh(&mut self, shape: MeshShape) {
        match shape {
            MeshShape::Plane => self.load_plane_mesh(),
            MeshShape::Box => self.load_box_mesh(),
            MeshShape::Cylinder => self.load_cylinder_mesh(),
            MeshShape::Sphere => self.load_sphere_mesh(),
            MeshShape::Torus => self.load_torus_mesh(),
        }
    }
}
