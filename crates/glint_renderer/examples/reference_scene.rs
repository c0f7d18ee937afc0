//! Reference scene: six Cook-Torrance spheres in a Lambert room, three
//! rotating triangles showcasing each cull mode.
//!
//! Run with: cargo run --release --example reference_scene

use anyhow::Result;
use glint_renderer::{
    render, Camera, Color, CullMode, LightingMode, Material, RenderConfig, Scene, Triangle, Vec3,
};
use log::info;

fn build_scene() -> Scene {
    let mut scene = Scene::new();
    scene.camera = Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0);

    let silver = Color::new(0.972, 0.960, 0.915);
    let gray = Color::new(0.75, 0.75, 0.75);

    let rough_metal = scene.add_material(Material::CookTorrance {
        albedo: silver,
        metalness: 1.0,
        roughness: 1.0,
    });
    let medium_metal = scene.add_material(Material::CookTorrance {
        albedo: silver,
        metalness: 1.0,
        roughness: 0.6,
    });
    let smooth_metal = scene.add_material(Material::CookTorrance {
        albedo: silver,
        metalness: 1.0,
        roughness: 0.1,
    });
    let rough_plastic = scene.add_material(Material::CookTorrance {
        albedo: gray,
        metalness: 0.0,
        roughness: 1.0,
    });
    let medium_plastic = scene.add_material(Material::CookTorrance {
        albedo: gray,
        metalness: 0.0,
        roughness: 0.6,
    });
    let smooth_plastic = scene.add_material(Material::CookTorrance {
        albedo: gray,
        metalness: 0.0,
        roughness: 0.1,
    });

    let gray_blue = scene.add_material(Material::Lambert {
        diffuse_color: Color::new(0.49, 0.57, 0.57),
        diffuse_reflectance: 1.0,
    });
    let white = scene.add_material(Material::Lambert {
        diffuse_color: Color::ONE,
        diffuse_reflectance: 1.0,
    });

    // Room
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0), gray_blue);
    scene.add_plane(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), gray_blue);
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0), gray_blue);
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), gray_blue);
    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), gray_blue);

    // Metal row (bottom) and plastic row (top), rough to smooth
    scene.add_sphere(Vec3::new(-1.75, 1.0, 0.0), 0.75, rough_metal);
    scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 0.75, medium_metal);
    scene.add_sphere(Vec3::new(1.75, 1.0, 0.0), 0.75, smooth_metal);
    scene.add_sphere(Vec3::new(-1.75, 3.0, 0.0), 0.75, rough_plastic);
    scene.add_sphere(Vec3::new(0.0, 3.0, 0.0), 0.75, medium_plastic);
    scene.add_sphere(Vec3::new(1.75, 3.0, 0.0), 0.75, smooth_plastic);

    // Three copies of the same triangle, one per cull mode (clockwise
    // winding)
    let base_triangle = Triangle::new(
        Vec3::new(-0.75, 1.5, 0.0),
        Vec3::new(0.75, 0.0, 0.0),
        Vec3::new(-0.75, 0.0, 0.0),
        CullMode::None,
        0,
    );

    let offsets = [
        (CullMode::BackFace, -1.75),
        (CullMode::FrontFace, 0.0),
        (CullMode::None, 1.75),
    ];
    for (cull_mode, x) in offsets {
        let handle = scene.add_triangle_mesh(cull_mode, white);
        let mesh = scene.mesh_mut(handle);
        mesh.append_triangle(&base_triangle);
        mesh.translate(Vec3::new(x, 4.5, 0.0));
        // Frozen mid-spin so the culled faces differ between the three
        mesh.rotate_y(1.2);
    }

    scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 50.0, Color::new(1.0, 0.61, 0.45));
    scene.add_point_light(Vec3::new(-2.5, 5.0, -5.0), 70.0, Color::new(1.0, 0.8, 0.45));
    scene.add_point_light(Vec3::new(2.5, 2.5, -5.0), 50.0, Color::new(0.34, 0.47, 0.68));

    scene
}

fn main() -> Result<()> {
    env_logger::init();

    let width = 640;
    let height = 480;

    let scene = build_scene();
    let config = RenderConfig {
        lighting_mode: LightingMode::Combined,
        ..Default::default()
    };

    info!("rendering reference scene at {}x{}", width, height);
    let start = std::time::Instant::now();
    let image = render(&scene, &config, width, height);
    info!("render took {:.2?}", start.elapsed());

    image.save_png("reference_scene.png")?;
    info!("wrote reference_scene.png");

    Ok(())
}
