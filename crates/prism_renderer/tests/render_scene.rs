//! End-to-end renders of small scenes.

use std::f32::consts::PI;

use prism_core::SceneDescription;
use prism_renderer::{
    render, CameraSettings, Color, FloatImage, Light, Material, RenderError, Scene, Solid, Vec3,
};

const SIZE: u32 = 64;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Camera on +Z looking at the origin.
fn front_camera() -> CameraSettings {
    CameraSettings::new()
        .with_resolution(SIZE, SIZE)
        .with_position(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_lens(PI / 3.0, 1.0)
}

fn luminance(image: &FloatImage, x: u32, y: u32) -> f32 {
    image.get_pixel(x, y).iter().sum()
}

#[test]
fn ambient_only_scene_is_flat() {
    init_logger();

    let mut scene = Scene::new();
    let red = scene.add_material(Material::new("red", Color::new(0.8, 0.2, 0.1)).with_ambient(0.5));
    let floor = scene.add_material(Material::new("floor", Color::splat(0.4)).with_ambient(0.25));
    scene.add_solid(Solid::sphere(Vec3::ZERO, 1.0, red.clone()).unwrap());
    scene.add_solid(Solid::plane(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, floor.clone()).unwrap());
    scene.add_light(Light::ambient(Color::ONE, 1.5));
    scene.add_light(Light::ambient(Color::ONE, 0.5));
    scene.set_camera(front_camera().build().unwrap());

    let image = render(&scene).unwrap();

    let expected_red = (red.base_color * red.ambient_coefficient * 2.0).to_array();
    let expected_floor = (floor.base_color * floor.ambient_coefficient * 2.0).to_array();
    let (mut red_pixels, mut floor_pixels) = (0, 0);

    for y in 0..SIZE {
        for x in 0..SIZE {
            let pixel = image.get_pixel(x, y);
            if pixel == [0.0; 3] {
                continue;
            }
            let close = |expected: [f32; 3]| {
                pixel.iter().zip(expected).all(|(a, b)| (a - b).abs() < 1e-5)
            };
            if close(expected_red) {
                red_pixels += 1;
            } else if close(expected_floor) {
                floor_pixels += 1;
            } else {
                panic!("pixel ({x}, {y}) = {pixel:?} is neither material");
            }
        }
    }

    assert!(red_pixels > 0);
    assert!(floor_pixels > 0);
    // The sphere covers the image center
    let center = image.get_pixel(SIZE / 2, SIZE / 2);
    assert!(center.iter().zip(expected_red).all(|(a, b)| (a - b).abs() < 1e-5));
}

#[test]
fn point_light_falls_off_towards_silhouette() {
    init_logger();

    let mut scene = Scene::new();
    let white = scene.add_material(Material::new("white", Color::ONE).with_ambient(0.0));
    scene.add_solid(Solid::sphere(Vec3::ZERO, 1.0, white).unwrap());
    scene.add_light(Light::point(Vec3::new(0.0, 0.0, 5.0), Color::ONE, 5.0));
    scene.set_camera(front_camera().build().unwrap());

    let image = render(&scene).unwrap();
    let row = SIZE / 2;
    let center = luminance(&image, SIZE / 2, row);
    assert!(center > 0.0);

    // Walk from the leftmost lit pixel of the middle row to the center
    let edge = (0..SIZE)
        .find(|&x| luminance(&image, x, row) > 0.0)
        .expect("sphere should be visible in the middle row");
    assert!(edge < SIZE / 2);
    assert!(luminance(&image, edge, row) < center);

    let profile: Vec<f32> = (edge..=SIZE / 2).map(|x| luminance(&image, x, row)).collect();
    assert!(profile.windows(2).all(|w| w[0] <= w[1] + 1e-6));
}

#[test]
fn nearer_sphere_owns_the_pixel() {
    let mut scene = Scene::new();
    let back = Material::new("back", Color::new(0.0, 0.0, 1.0)).with_ambient(1.0);
    let front = Material::new("front", Color::new(1.0, 0.0, 0.0)).with_ambient(1.0);
    let (back, front) = (scene.add_material(back), scene.add_material(front));
    // Listed back to front so scan order alone would pick the wrong one
    scene.add_solid(Solid::sphere(Vec3::new(0.0, 0.0, -1.0), 1.0, back).unwrap());
    scene.add_solid(Solid::sphere(Vec3::new(0.0, 0.0, 0.5), 1.0, front).unwrap());
    scene.add_light(Light::ambient(Color::ONE, 1.0));
    scene.set_camera(front_camera().build().unwrap());

    let image = render(&scene).unwrap();
    assert_eq!(image.get_pixel(SIZE / 2, SIZE / 2), [1.0, 0.0, 0.0]);
}

#[test]
fn invalid_fov_never_renders() {
    for fov in [0.0, 3.2] {
        assert_eq!(
            front_camera().with_lens(fov, 1.0).build().unwrap_err(),
            RenderError::InvalidFov(fov)
        );
    }
}

#[test]
fn demo_scene_renders() {
    init_logger();

    let scene = Scene::from_description(&SceneDescription::demo(), 48, 27).unwrap();
    let image = render(&scene).unwrap();

    assert_eq!((image.width, image.height), (48, 27));
    assert!(image.as_slice().iter().all(|v| v.is_finite()));
    assert!(image.as_slice().iter().any(|&v| v > 0.0));
}
