// Copyright 2020 TwoCookingMice

use genoise::core::scene::{Scene, SceneObject};
use genoise::core::sensor::Sensor;
use genoise::emitters::point::PointLight;
use genoise::materials::phong::PhongMaterial;
use genoise::math::bitmap::Bitmap;
use genoise::math::constants::{Float, Vector3f};
use genoise::math::spectrum::RGBSpectrum;
use genoise::renderers::simple::{Renderer, SimpleRenderer};
use genoise::sensors::perspective::PerspectiveCamera;
use genoise::shapes::sphere::Sphere;
use genoise::shapes::triangle::Triangle;

use std::env;
use std::sync::Arc;

fn demo_scene() -> Scene {
    let mut scene = Scene::new();

    let blue = RGBSpectrum::new(0.0, 0.4, 0.8);
    scene.add_object(SceneObject::new(
        Arc::new(Sphere::new(Vector3f::new(-1.2, 0.0, -5.0), 1.0)),
        Arc::new(PhongMaterial::new(blue, 1.0, 10.0, blue, blue, blue)),
    ));

    let red = RGBSpectrum::new(0.8, 0.1, 0.1);
    scene.add_object(SceneObject::new(
        Arc::new(Sphere::new(Vector3f::new(1.2, 0.0, -6.0), 1.0)),
        Arc::new(PhongMaterial::new(red, 1.0, 40.0, red, red, red)),
    ));

    // Ground quad, split into two triangles with texture coordinates at
    // the corners.
    let gray = RGBSpectrum::new(0.4, 0.4, 0.4);
    let ground = Arc::new(PhongMaterial::new(gray, 1.0, 5.0, gray, gray, gray));
    let (a, b, c, d) = (Vector3f::new(-6.0, -1.0, -1.0),
                        Vector3f::new(6.0, -1.0, -1.0),
                        Vector3f::new(6.0, -1.0, -12.0),
                        Vector3f::new(-6.0, -1.0, -12.0));
    let (ta, tb, tc, td) = (Vector3f::new(0.0, 0.0, 0.0),
                            Vector3f::new(1.0, 0.0, 0.0),
                            Vector3f::new(1.0, 1.0, 0.0),
                            Vector3f::new(0.0, 1.0, 0.0));
    scene.add_object(SceneObject::new(Arc::new(Triangle::with_uvw(a, b, c, ta, tb, tc)),
                                      ground.clone()));
    scene.add_object(SceneObject::new(Arc::new(Triangle::with_uvw(a, c, d, ta, tc, td)),
                                      ground));

    let white = RGBSpectrum::new(1.0, 1.0, 1.0);
    let warm = RGBSpectrum::new(1.0, 0.9, 0.7);
    scene.add_light(PointLight::new(Vector3f::new(-3.0, 4.0, -2.0), white, warm, warm));
    scene.add_light(PointLight::new(Vector3f::new(4.0, 3.0, -4.0), white, white, white));

    scene
}

fn write_png(bitmap: &Bitmap, path: &str) {
    let width = bitmap.width() as u32;
    let height = bitmap.height() as u32;
    let mut image = image::RgbImage::new(width, height);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let rgb = bitmap[(x as usize, y as usize)];
        *pixel = image::Rgb([
            (rgb[0].max(0.0).min(1.0) * 255.0) as u8,
            (rgb[1].max(0.0).min(1.0) * 255.0) as u8,
            (rgb[2].max(0.0).min(1.0) * 255.0) as u8,
        ]);
    }
    image.save(path).expect("failed to write output image");
}

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <output.png> [--width N] [--height N] [--fov DEG] [--threads N]",
                  args[0]);
        std::process::exit(1);
    }

    let output_path = &args[1];
    let mut width: usize = 800;
    let mut height: usize = 600;
    let mut fov_deg: Float = 60.0;
    let mut threads: Option<usize> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                width = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(width);
            }
            "--height" => {
                i += 1;
                height = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(height);
            }
            "--fov" => {
                i += 1;
                fov_deg = args.get(i).and_then(|v| v.parse::<Float>().ok()).unwrap_or(fov_deg);
            }
            "--threads" => {
                i += 1;
                threads = args.get(i).and_then(|v| v.parse::<usize>().ok());
            }
            _ => {}
        }
        i += 1;
    }

    let scene = demo_scene();
    let mut camera = PerspectiveCamera::new(Vector3f::new(0.0, 1.0, 2.0),
                                            Vector3f::new(0.0, 0.0, -5.0),
                                            Vector3f::new(0.0, 1.0, 0.0),
                                            fov_deg.to_radians(),
                                            1.0e4,
                                            width,
                                            height);
    log::info!("{}", camera.describe());

    let renderer = SimpleRenderer::new(Vector3f::new(0.05, 0.05, 0.08), threads);
    let image = renderer.render(&scene, &mut camera);
    write_png(&image, output_path);
    log::info!("Wrote {}.", output_path);
}
