//! Built-in demo scenes.

use crate::cli::DemoScene;
use anyhow::Result;
use lumen_core::{
    AmbientLight, Cylinder, DirectionalLight, Geometries, Geometry, Material, Plane, PointLight,
    Polygon, Scene, Sphere, SpotLight, Triangle, Tube,
};
use lumen_math::{Color, Point, Ray, Vector};
use lumen_renderer::CameraBuilder;

/// A scene plus a camera aimed at it. Resolution is left to the caller.
pub struct Demo {
    pub scene: Scene,
    pub camera: CameraBuilder,
}

pub fn build(which: DemoScene) -> Result<Demo> {
    match which {
        DemoScene::Spheres => spheres(),
        DemoScene::Pyramids => pyramids(),
        DemoScene::Cylinders => cylinders(),
    }
}

fn floor(y: f64, emission: Color) -> Geometry {
    Geometry::new(Plane::new(Point::new(0.0, y, 0.0), Vector::AXIS_Y))
        .with_emission(emission)
        .with_material(
            Material::new()
                .with_kd_scalar(0.5)
                .with_ks_scalar(0.2)
                .with_shininess(20)
                .with_kr_scalar(0.2),
        )
}

fn spheres() -> Result<Demo> {
    let mut scene = Scene::new("spheres")
        .with_background(Color::new(15.0, 20.0, 35.0))
        .with_ambient_light(AmbientLight::new(Color::splat(15.0)));

    scene.add_geometry(floor(-50.0, Color::splat(20.0)));
    scene.add_geometry(
        Geometry::new(Sphere::new(Point::new(-60.0, 0.0, 0.0), 50.0)?)
            .with_emission(Color::new(120.0, 20.0, 20.0))
            .with_material(
                Material::new()
                    .with_kd_scalar(0.5)
                    .with_ks_scalar(0.5)
                    .with_shininess(100),
            ),
    );
    scene.add_geometry(
        Geometry::new(Sphere::new(Point::new(60.0, -10.0, -30.0), 40.0)?)
            .with_emission(Color::new(10.0, 40.0, 80.0))
            .with_material(
                Material::new()
                    .with_kd_scalar(0.2)
                    .with_ks_scalar(0.6)
                    .with_shininess(200)
                    .with_kt_scalar(0.6),
            ),
    );
    scene.add_geometry(
        Geometry::new(Sphere::new(Point::new(0.0, -30.0, 80.0), 20.0)?)
            .with_emission(Color::splat(10.0))
            .with_material(
                Material::new()
                    .with_kd_scalar(0.2)
                    .with_ks_scalar(0.5)
                    .with_shininess(300)
                    .with_kr_scalar(0.8),
            ),
    );

    scene.add_light(
        PointLight::new(Color::new(400.0, 350.0, 300.0), Point::new(100.0, 150.0, 150.0))
            .with_kl(0.0005)
            .with_kq(0.00005)
            .with_radius(15.0),
    );
    scene.add_light(
        SpotLight::new(
            Color::splat(300.0),
            Point::new(-150.0, 120.0, 100.0),
            Vector::new(1.0, -1.2, -1.0)?,
        )
        .with_kl(0.0004)
        .with_kq(0.00002)
        .with_radius(10.0),
    );

    let camera = CameraBuilder::default()
        .location(Point::new(0.0, 20.0, 400.0))
        .look_at(Point::ZERO, Vector::AXIS_Y)
        .vp_distance(400.0)
        .vp_size(200.0, 200.0);
    Ok(Demo { scene, camera })
}

/// Square pyramid from four base corners and an apex, one emission per face.
fn pyramid(base: [Point; 4], apex: Point, faces: [Color; 5], material: Material) -> Result<Geometries> {
    let [p1, p2, p3, p4] = base;
    let mut pyramid = Geometries::new();
    pyramid.add(
        Geometry::new(Polygon::new(vec![p1, p2, p3, p4])?)
            .with_emission(faces[0])
            .with_material(material),
    );
    for (k, (a, b)) in [(p1, p2), (p2, p3), (p3, p4), (p4, p1)].into_iter().enumerate() {
        pyramid.add(
            Geometry::new(Triangle::new(a, b, apex)?)
                .with_emission(faces[k + 1])
                .with_material(material),
        );
    }
    Ok(pyramid)
}

/// Axis-aligned cube built from twelve triangles.
fn cube(center: Point, size: f64, emission: Color, material: Material) -> Result<Geometries> {
    let h = size / 2.0;
    let corner = |sx: f64, sy: f64, sz: f64| {
        Point::new(center.x() + sx * h, center.y() + sy * h, center.z() + sz * h)
    };
    let p1 = corner(-1.0, -1.0, -1.0);
    let p2 = corner(1.0, -1.0, -1.0);
    let p3 = corner(1.0, 1.0, -1.0);
    let p4 = corner(-1.0, 1.0, -1.0);
    let p5 = corner(-1.0, -1.0, 1.0);
    let p6 = corner(1.0, -1.0, 1.0);
    let p7 = corner(1.0, 1.0, 1.0);
    let p8 = corner(-1.0, 1.0, 1.0);

    let faces = [
        (p1, p2, p3),
        (p1, p3, p4),
        (p2, p6, p7),
        (p2, p7, p3),
        (p4, p3, p7),
        (p4, p7, p8),
        (p1, p4, p8),
        (p1, p8, p5),
        (p1, p5, p6),
        (p1, p6, p2),
        (p5, p8, p7),
        (p5, p7, p6),
    ];
    let mut cube = Geometries::new();
    for (a, b, c) in faces {
        cube.add(
            Geometry::new(Triangle::new(a, b, c)?)
                .with_emission(emission)
                .with_material(material),
        );
    }
    Ok(cube)
}

fn pyramids() -> Result<Demo> {
    let mut scene = Scene::new("pyramids")
        .with_background(Color::new(120.0, 80.0, 50.0))
        .with_ambient_light(AmbientLight::new(Color::splat(40.0)));

    // Floor stops short of the mirror
    let floor_material = Material::new()
        .with_kd_scalar(0.8)
        .with_ks_scalar(0.2)
        .with_shininess(10);
    scene.add_geometry(
        Geometry::new(Polygon::new(vec![
            Point::new(-400.0, -60.0, -120.0),
            Point::new(-400.0, -60.0, 400.0),
            Point::new(400.0, -60.0, 400.0),
            Point::new(400.0, -60.0, -120.0),
        ])?)
        .with_emission(Color::new(80.0, 60.0, 40.0))
        .with_material(floor_material),
    );

    scene.add_geometry(
        Geometry::new(Polygon::new(vec![
            Point::new(-70.0, -30.0, -150.0),
            Point::new(50.0, -30.0, -150.0),
            Point::new(50.0, 70.0, -150.0),
            Point::new(-70.0, 70.0, -150.0),
        ])?)
        .with_emission(Color::new(20.0, 20.0, 30.0))
        .with_material(
            Material::new()
                .with_kd_scalar(0.1)
                .with_ks_scalar(0.9)
                .with_shininess(200)
                .with_kr_scalar(0.7),
        ),
    );

    scene.add_geometry(pyramid(
        [
            Point::new(-90.0, -50.0, 0.0),
            Point::new(-50.0, -50.0, 0.0),
            Point::new(-50.0, -50.0, 40.0),
            Point::new(-90.0, -50.0, 40.0),
        ],
        Point::new(-70.0, 15.0, 20.0),
        [
            Color::new(40.0, 120.0, 60.0),
            Color::new(50.0, 140.0, 70.0),
            Color::new(35.0, 110.0, 55.0),
            Color::new(30.0, 100.0, 50.0),
            Color::new(45.0, 130.0, 65.0),
        ],
        Material::new()
            .with_kd_scalar(0.7)
            .with_ks_scalar(0.3)
            .with_shininess(30),
    )?);

    scene.add_geometry(pyramid(
        [
            Point::new(-5.0, -50.0, 35.0),
            Point::new(25.0, -50.0, 35.0),
            Point::new(25.0, -50.0, 65.0),
            Point::new(-5.0, -50.0, 65.0),
        ],
        Point::new(10.0, -10.0, 50.0),
        [
            Color::new(0.0, 140.0, 160.0),
            Color::new(0.0, 160.0, 180.0),
            Color::new(0.0, 120.0, 140.0),
            Color::new(0.0, 130.0, 150.0),
            Color::new(0.0, 150.0, 170.0),
        ],
        Material::new()
            .with_kd_scalar(0.6)
            .with_ks_scalar(0.4)
            .with_shininess(60)
            .with_kt_scalar(0.3),
    )?);

    scene.add_geometry(cube(
        Point::new(110.0, -15.0, -80.0),
        50.0,
        Color::new(200.0, 160.0, 0.0),
        Material::new()
            .with_kd_scalar(0.6)
            .with_ks_scalar(0.4)
            .with_shininess(40),
    )?);

    scene.add_geometry(
        Geometry::new(Sphere::new(Point::new(-30.0, -20.0, 80.0), 22.0)?)
            .with_emission(Color::new(120.0, 25.0, 25.0))
            .with_material(
                Material::new()
                    .with_kd_scalar(0.2)
                    .with_ks_scalar(0.3)
                    .with_shininess(60)
                    .with_kt_scalar(0.85),
            ),
    );
    scene.add_geometry(
        Geometry::new(Sphere::new(Point::new(50.0, 0.0, 100.0), 25.0)?)
            .with_emission(Color::new(200.0, 60.0, 30.0))
            .with_material(
                Material::new()
                    .with_kd_scalar(0.6)
                    .with_ks_scalar(0.4)
                    .with_shininess(60),
            ),
    );

    scene.add_light(DirectionalLight::new(
        Color::new(100.0, 80.0, 60.0),
        Vector::new(1.0, -1.0, -1.0)?,
    ));
    scene.add_light(
        SpotLight::new(
            Color::new(60.0, 45.0, 30.0),
            Point::new(60.0, 80.0, 80.0),
            Vector::new(-1.0, -1.5, -1.0)?,
        )
        .with_kl(0.0002)
        .with_kq(0.000002),
    );
    scene.add_light(
        PointLight::new(Color::new(50.0, 40.0, 30.0), Point::new(0.0, 120.0, 50.0))
            .with_kl(0.0008)
            .with_kq(0.00001)
            .with_radius(12.0),
    );
    scene.add_light(
        PointLight::new(Color::new(30.0, 25.0, 20.0), Point::new(-100.0, 50.0, 120.0))
            .with_kl(0.001)
            .with_kq(0.00002),
    );

    let camera = CameraBuilder::default()
        .location(Point::new(-90.0, 50.0, 180.0))
        .look_at(Point::new(-1.0, 0.0, 1.0), Vector::AXIS_Y)
        .vp_distance(180.0)
        .vp_size(160.0, 160.0);
    Ok(Demo { scene, camera })
}

fn cylinders() -> Result<Demo> {
    let mut scene = Scene::new("cylinders")
        .with_background(Color::new(30.0, 30.0, 40.0))
        .with_ambient_light(AmbientLight::new(Color::splat(20.0)));

    scene.add_geometry(floor(-50.0, Color::new(40.0, 35.0, 30.0)));

    let metal = Material::new()
        .with_kd_scalar(0.4)
        .with_ks_scalar(0.6)
        .with_shininess(80);
    scene.add_geometry(
        Geometry::new(Cylinder::new(
            25.0,
            Ray::new(Point::new(-60.0, -50.0, 0.0), Vector::AXIS_Y),
            90.0,
        )?)
        .with_emission(Color::new(30.0, 90.0, 140.0))
        .with_material(metal),
    );
    scene.add_geometry(
        Geometry::new(Cylinder::new(
            15.0,
            Ray::new(Point::new(20.0, -35.0, 30.0), Vector::new(1.0, 0.2, -0.6)?),
            70.0,
        )?)
        .with_emission(Color::new(140.0, 60.0, 20.0))
        .with_material(metal.with_kr_scalar(0.3)),
    );
    scene.add_geometry(
        Geometry::new(Tube::new(
            8.0,
            Ray::new(Point::new(0.0, 70.0, -120.0), Vector::AXIS_X),
        )?)
        .with_emission(Color::splat(60.0))
        .with_material(metal.with_kt_scalar(0.4)),
    );

    scene.add_light(DirectionalLight::new(
        Color::splat(60.0),
        Vector::new(-0.5, -1.0, -0.5)?,
    ));
    scene.add_light(
        SpotLight::new(
            Color::new(500.0, 450.0, 400.0),
            Point::new(120.0, 150.0, 150.0),
            Vector::new(-1.0, -1.2, -1.2)?,
        )
        .with_kl(0.0005)
        .with_kq(0.00002)
        .with_radius(20.0),
    );

    let camera = CameraBuilder::default()
        .location(Point::new(0.0, 40.0, 350.0))
        .look_at(Point::new(0.0, 0.0, 0.0), Vector::AXIS_Y)
        .vp_distance(300.0)
        .vp_size(240.0, 240.0);
    Ok(Demo { scene, camera })
}
