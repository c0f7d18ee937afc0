//! Scene aggregate: primitives, lights, materials, and the camera.
//!
//! The scene exclusively owns all geometry and materials. Geometry
//! refers to materials only by index, so shading stays decoupled from
//! material storage; index 0 is always a solid-color fallback
//! installed at construction.

use crate::camera::Camera;
use crate::hit::{CullMode, HitRecord, MaterialIndex};
use crate::light::Light;
use crate::material::{Color, Material};
use crate::mesh::TriangleMesh;
use crate::plane::Plane;
use crate::sphere::Sphere;
use crate::triangle::Triangle;
use glint_math::{Ray, Vec3};
use log::debug;

/// Handle to a triangle mesh owned by a scene.
pub type MeshHandle = usize;

/// A renderable scene.
pub struct Scene {
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    triangles: Vec<Triangle>,
    meshes: Vec<TriangleMesh>,
    lights: Vec<Light>,
    materials: Vec<Material>,
    pub camera: Camera,
}

impl Scene {
    /// Create an empty scene with the default fallback material
    /// (solid red) at index 0.
    pub fn new() -> Self {
        Self {
            spheres: Vec::with_capacity(32),
            planes: Vec::with_capacity(32),
            triangles: Vec::with_capacity(32),
            meshes: Vec::with_capacity(32),
            lights: Vec::with_capacity(32),
            materials: vec![Material::SolidColor {
                color: Color::new(1.0, 0.0, 0.0),
            }],
            camera: Camera::default(),
        }
    }

    // ------------------------------------------------------------------
    // Construction surface

    /// Add a sphere; returns its index.
    pub fn add_sphere(&mut self, origin: Vec3, radius: f32, material_index: MaterialIndex) -> usize {
        self.spheres.push(Sphere::new(origin, radius, material_index));
        self.spheres.len() - 1
    }

    /// Add an infinite plane; returns its index.
    pub fn add_plane(&mut self, origin: Vec3, normal: Vec3, material_index: MaterialIndex) -> usize {
        self.planes.push(Plane::new(origin, normal, material_index));
        self.planes.len() - 1
    }

    /// Add a standalone triangle; returns its index.
    pub fn add_triangle(&mut self, triangle: Triangle) -> usize {
        self.triangles.push(triangle);
        self.triangles.len() - 1
    }

    /// Add an empty triangle mesh; returns a handle for later mutation
    /// via [`Self::mesh_mut`].
    pub fn add_triangle_mesh(&mut self, cull_mode: CullMode, material_index: MaterialIndex) -> MeshHandle {
        self.meshes.push(TriangleMesh::new(cull_mode, material_index));
        self.meshes.len() - 1
    }

    /// Add a pre-built triangle mesh; returns its handle.
    pub fn add_mesh(&mut self, mesh: TriangleMesh) -> MeshHandle {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    /// Mutable access to a mesh, for transform animation.
    pub fn mesh_mut(&mut self, handle: MeshHandle) -> &mut TriangleMesh {
        &mut self.meshes[handle]
    }

    /// Add a point light.
    pub fn add_point_light(&mut self, origin: Vec3, intensity: f32, color: Color) -> usize {
        self.lights.push(Light::Point {
            origin,
            intensity,
            color,
        });
        self.lights.len() - 1
    }

    /// Add a directional light.
    pub fn add_directional_light(&mut self, direction: Vec3, intensity: f32, color: Color) -> usize {
        self.lights.push(Light::Directional {
            direction,
            intensity,
            color,
        });
        self.lights.len() - 1
    }

    /// Add a material; returns its index.
    pub fn add_material(&mut self, material: Material) -> MaterialIndex {
        self.materials.push(material);
        debug!("scene: material {} added", self.materials.len() - 1);
        self.materials.len() - 1
    }

    // ------------------------------------------------------------------
    // Query surface

    /// Lights in the scene.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Look up a material; out-of-range indices resolve to the
    /// fallback at index 0.
    pub fn material(&self, index: MaterialIndex) -> &Material {
        self.materials.get(index).unwrap_or(&self.materials[0])
    }

    /// Find the closest intersection along the ray.
    ///
    /// Tests every sphere, then plane, then mesh, then standalone
    /// triangle against one shared record; the record's minimum-t rule
    /// makes the result independent of that order, but the order is
    /// fixed for reproducibility.
    pub fn get_closest_hit(&self, ray: &Ray) -> HitRecord {
        let mut closest = HitRecord::default();

        for sphere in &self.spheres {
            sphere.hit(ray, &mut closest);
        }
        for plane in &self.planes {
            plane.hit(ray, &mut closest);
        }
        for mesh in &self.meshes {
            mesh.hit(ray, &mut closest);
        }
        for triangle in &self.triangles {
            triangle.hit(ray, &mut closest);
        }

        closest
    }

    /// Whether anything occludes the ray. Short-circuits on the first
    /// hit and never touches a hit record.
    pub fn does_hit(&self, ray: &Ray) -> bool {
        self.spheres.iter().any(|s| s.hit_any(ray))
            || self.planes.iter().any(|p| p.hit_any(ray))
            || self.meshes.iter().any(|m| m.hit_any(ray))
            || self.triangles.iter().any(|t| t.hit_any(ray))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material_is_fallback() {
        let scene = Scene::new();
        // Index 0 exists and out-of-range lookups resolve to it
        let fallback = scene.material(0);
        let resolved = scene.material(999);
        assert!(matches!(fallback, Material::SolidColor { .. }));
        assert!(matches!(resolved, Material::SolidColor { .. }));
    }

    #[test]
    fn test_material_indices_are_stable() {
        let mut scene = Scene::new();
        let a = scene.add_material(Material::Lambert {
            diffuse_color: Color::ONE,
            diffuse_reflectance: 1.0,
        });
        let b = scene.add_material(Material::SolidColor { color: Color::ZERO });

        assert_eq!(a, 1);
        assert_eq!(b, 2);
        assert!(matches!(scene.material(a), Material::Lambert { .. }));
    }

    #[test]
    fn test_closest_hit_picks_nearer_primitive() {
        let mut scene = Scene::new();
        let mat_far = scene.add_material(Material::SolidColor { color: Color::ZERO });
        let mat_near = scene.add_material(Material::SolidColor { color: Color::ONE });

        // Insert the farther sphere first: order must not matter
        scene.add_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0, mat_far);
        scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, mat_near);

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = scene.get_closest_hit(&ray);

        assert!(hit.did_hit);
        assert!((hit.t - 4.0).abs() < 1e-5);
        assert_eq!(hit.material_index, mat_near);
    }

    #[test]
    fn test_closest_hit_across_primitive_kinds() {
        // A plane in front of a sphere: the plane must win even though
        // spheres are tested first.
        let mut scene = Scene::new();
        scene.add_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0, 0);
        scene.add_plane(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0), 0);

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = scene.get_closest_hit(&ray);

        assert!(hit.did_hit);
        assert!((hit.t - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_does_hit_agrees_with_closest_hit() {
        let mut scene = Scene::new();
        scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, 0);

        let hitting = Ray::new(Vec3::ZERO, Vec3::Z);
        let missing = Ray::new(Vec3::ZERO, Vec3::Y);

        assert_eq!(scene.does_hit(&hitting), scene.get_closest_hit(&hitting).did_hit);
        assert_eq!(scene.does_hit(&missing), scene.get_closest_hit(&missing).did_hit);
        assert!(scene.does_hit(&hitting));
        assert!(!scene.does_hit(&missing));
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(!scene.does_hit(&ray));
        assert!(!scene.get_closest_hit(&ray).did_hit);
    }
}
