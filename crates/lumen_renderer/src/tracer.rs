//! Recursive Phong shading.
//!
//! A traced ray is shaded at its closest hit as
//! `ambient * kA + emission + sum(local light terms) + reflection + refraction`,
//! where the reflected and refracted rays are shaded recursively. Recursion
//! stops at level 1 or once the accumulated attenuation `k` drops below
//! [`TracerSettings::min_k`] on every channel.

use crate::{TargetArea, TracerSettings};
use lumen_core::{closest_intersection, Intersectable, Intersection, LightSource, Material, Scene};
use lumen_math::{util::align_zero, Coeffs, Color, Point, Ray, TripleExt, Vector};

/// Trait for anything that maps a ray to a color.
pub trait RayTracer: Send + Sync {
    fn trace_ray(&self, ray: &Ray) -> Color;
}

/// Whitted-style ray tracer with Phong local lighting.
pub struct SimpleRayTracer<'s> {
    scene: &'s Scene,
    settings: TracerSettings,
}

/// Per-hit shading state, valid for one recursion step.
struct ShadingContext<'a> {
    intersection: Intersection<'a>,
    /// Unit direction of the incoming ray
    direction: Vector,
    /// Outward surface normal at the hit
    normal: Vector,
    /// `direction . normal`, never zero
    nv: f64,
}

/// Per-light shading state for one hit.
struct LightContext<'l> {
    light: &'l LightSource,
    /// Unit direction the light travels toward the hit
    l: Vector,
    /// `normal . l`, same sign as the context's `nv`
    nl: f64,
}

impl<'s> SimpleRayTracer<'s> {
    pub fn new(scene: &'s Scene, settings: TracerSettings) -> Self {
        Self { scene, settings }
    }

    pub fn settings(&self) -> &TracerSettings {
        &self.settings
    }

    fn find_closest(&self, ray: &Ray) -> Option<Intersection<'s>> {
        let scene: &'s Scene = self.scene;
        let hits = scene.geometries.intersect(ray);
        closest_intersection(&ray.origin(), &hits)
    }

    /// Shading state for a hit, or `None` if the ray grazes the surface or
    /// the surface has no normal there.
    fn shading_context<'a>(
        &self,
        intersection: Intersection<'a>,
        direction: Vector,
    ) -> Option<ShadingContext<'a>> {
        let normal = match intersection.geometry.normal_at(&intersection.point) {
            Ok(normal) => normal,
            Err(err) => {
                log::trace!("No normal at {}: {}", intersection.point, err);
                return None;
            }
        };
        let direction = direction.normalize();
        let nv = align_zero(direction.dot(&normal));
        if nv == 0.0 {
            return None;
        }
        Some(ShadingContext {
            intersection,
            direction,
            normal,
            nv,
        })
    }

    fn color_at(&self, ctx: &ShadingContext) -> Color {
        self.scene.ambient_light.intensity() * ctx.intersection.material().ka
            + self.calc_color(ctx, self.settings.max_level, Coeffs::ONE)
    }

    fn calc_color(&self, ctx: &ShadingContext, level: u32, k: Coeffs) -> Color {
        let color = self.local_effects(ctx, k);
        if level <= 1 {
            color
        } else {
            color + self.global_effects(ctx, level, k)
        }
    }

    /// Light context for `light`, if the light and the viewer are on the
    /// same side of the surface.
    fn light_context<'l>(
        &self,
        ctx: &ShadingContext,
        light: &'l LightSource,
    ) -> Option<LightContext<'l>> {
        let l = light.direction_at(&ctx.intersection.point).ok()?;
        let nl = align_zero(ctx.normal.dot(&l));
        (ctx.nv * nl > 0.0).then_some(LightContext { light, l, nl })
    }

    fn local_effects(&self, ctx: &ShadingContext, k: Coeffs) -> Color {
        let point = ctx.intersection.point;
        let material = ctx.intersection.material();
        let mut color = ctx.intersection.geometry.emission();

        for light in &self.scene.lights {
            let Some(lc) = self.light_context(ctx, light) else {
                continue;
            };

            let ktr = match light.area() {
                Some((position, radius)) => self.soft_shadow(ctx, &lc, position, radius),
                None => self.transparency(ctx, &lc),
            };

            if (ktr * k).greater_than(self.settings.min_k) {
                let intensity = light.intensity_at(&point) * ktr;
                color += intensity * (diffuse(material, &lc) + specular(material, ctx, &lc));
            }
        }
        color
    }

    /// Product of `kT` over every occluder between the hit and the light.
    fn transparency(&self, ctx: &ShadingContext, lc: &LightContext) -> Coeffs {
        let point = ctx.intersection.point;
        let delta = self.settings.delta;
        let shift = if lc.nl < 0.0 { delta } else { -delta };
        let origin = Point::from(point.xyz() + ctx.normal.xyz() * shift);
        let shadow_ray = Ray::with_offset_by(origin, -lc.l, &ctx.normal, delta);

        let light_distance = lc.light.distance_to(&point);
        let mut ktr = Coeffs::ONE;
        for hit in self.scene.geometries.intersect(&shadow_ray) {
            if origin.distance(&hit.point) < light_distance {
                ktr *= hit.material().kt;
                if ktr.lower_than(self.settings.min_k) {
                    return Coeffs::ZERO;
                }
            }
        }
        ktr
    }

    /// Fraction of a disk light visible from the hit.
    ///
    /// Falls back to [`Self::transparency`] when no grid cell yields a ray.
    fn soft_shadow(
        &self,
        ctx: &ShadingContext,
        lc: &LightContext,
        position: Point,
        radius: f64,
    ) -> Coeffs {
        let point = ctx.intersection.point;
        let l = lc.l;
        let up = if l.y().abs() < 0.9 {
            l.cross(&Vector::AXIS_Y)
        } else {
            l.cross(&Vector::AXIS_X)
        }
        .map(|v| v.normalize())
        .unwrap_or(Vector::AXIS_Y);

        let resolution = self.settings.soft_shadow_samples;
        let area = match TargetArea::new(resolution, radius * 2.0, -l, up, position) {
            Ok(area) => area.with_delta(self.settings.delta),
            Err(_) => return self.transparency(ctx, lc),
        };

        let light_distance = lc.light.distance_to(&point);
        let mut valid = 0u32;
        let mut blocked = 0u32;
        for i in 0..resolution {
            for j in 0..resolution {
                if let Some(ray) = area.construct_ray(j, i, &point) {
                    valid += 1;
                    if self.is_blocked(&ray, light_distance) {
                        blocked += 1;
                    }
                }
            }
        }

        if valid == 0 {
            return self.transparency(ctx, lc);
        }
        Coeffs::splat(1.0 - blocked as f64 / valid as f64)
    }

    /// True if an almost opaque surface sits on `ray` before the light.
    fn is_blocked(&self, ray: &Ray, light_distance: f64) -> bool {
        let origin = ray.origin();
        self.scene.geometries.intersect(ray).iter().any(|hit| {
            origin.distance(&hit.point) < light_distance - self.settings.delta
                && hit.material().kt.lower_than(self.settings.min_k)
        })
    }

    fn global_effects(&self, ctx: &ShadingContext, level: u32, k: Coeffs) -> Color {
        let material = ctx.intersection.material();
        let point = ctx.intersection.point;
        let delta = self.settings.delta;

        let mut color = Color::ZERO;
        if let Some(reflected) = reflected_direction(ctx) {
            let ray = Ray::with_offset_by(point, reflected, &ctx.normal, delta);
            color += self.global_effect(&ray, material.kr, level, k);
        }
        let refracted = Ray::with_offset_by(point, ctx.direction, &ctx.normal, delta);
        color + self.global_effect(&refracted, material.kt, level, k)
    }

    fn global_effect(&self, ray: &Ray, kx: Coeffs, level: u32, k: Coeffs) -> Color {
        let kkx = k * kx;
        if kkx.lower_than(self.settings.min_k) {
            return Color::ZERO;
        }

        match self.find_closest(ray) {
            None => self.scene.background * kx,
            Some(hit) => match self.shading_context(hit, ray.direction()) {
                Some(ctx) => self.calc_color(&ctx, level - 1, kkx) * kx,
                None => Color::ZERO,
            },
        }
    }
}

impl RayTracer for SimpleRayTracer<'_> {
    fn trace_ray(&self, ray: &Ray) -> Color {
        if self.scene.geometries.is_empty() {
            return self.scene.background;
        }

        match self.find_closest(ray) {
            None => self.scene.background,
            Some(hit) => match self.shading_context(hit, ray.direction()) {
                Some(ctx) => self.color_at(&ctx),
                None => Color::ZERO,
            },
        }
    }
}

fn diffuse(material: &Material, lc: &LightContext) -> Coeffs {
    material.kd * lc.nl.abs()
}

fn specular(material: &Material, ctx: &ShadingContext, lc: &LightContext) -> Coeffs {
    let ln = lc.nl;
    let r = (lc.l.xyz() - ctx.normal.xyz() * (2.0 * ln)).normalize();
    let minus_vr = -align_zero(ctx.direction.xyz().dot(r));
    if minus_vr <= 0.0 {
        return Coeffs::ZERO;
    }
    material.ks * minus_vr.powi(material.shininess)
}

/// Mirror direction of the incoming ray about the normal.
fn reflected_direction(ctx: &ShadingContext) -> Option<Vector> {
    let v = ctx.direction.xyz();
    let n = ctx.normal.xyz();
    Vector::try_from(v - n * (2.0 * ctx.nv))
        .ok()
        .map(|r| r.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{AmbientLight, Geometry, Plane, PointLight, Polygon, Sphere};

    fn settings(max_level: u32) -> TracerSettings {
        TracerSettings {
            max_level,
            ..TracerSettings::default()
        }
    }

    /// Opaque sphere seen head-on from the origin, lit from above.
    fn lit_sphere_scene() -> Scene {
        let mut scene = Scene::new("lit sphere")
            .with_background(Color::splat(7.0))
            .with_ambient_light(AmbientLight::new(Color::splat(20.0)));
        scene.add_geometry(
            Geometry::new(Sphere::new(Point::new(0.0, 0.0, -10.0), 2.0).unwrap())
                .with_emission(Color::new(10.0, 20.0, 30.0))
                .with_material(
                    Material::new()
                        .with_kd_scalar(0.5)
                        .with_ks_scalar(0.25)
                        .with_shininess(20),
                ),
        );
        scene.add_light(PointLight::new(Color::splat(100.0), Point::new(0.0, 10.0, 0.0)));
        scene
    }

    /// Square occluder in the plane y = 5, straddling the path from the
    /// sphere's front point to the light.
    fn occluder(kt: f64) -> Geometry {
        Geometry::new(
            Polygon::new(vec![
                Point::new(-1.0, 5.0, -5.0),
                Point::new(1.0, 5.0, -5.0),
                Point::new(1.0, 5.0, -3.0),
                Point::new(-1.0, 5.0, -3.0),
            ])
            .unwrap(),
        )
        .with_material(Material::new().with_kt_scalar(kt))
    }

    fn view_ray() -> Ray {
        Ray::new(Point::ZERO, -Vector::AXIS_Z)
    }

    /// Emission plus ambient: the color with every light blocked.
    fn unlit() -> Color {
        Color::new(10.0, 20.0, 30.0) + Color::splat(20.0)
    }

    #[test]
    fn test_empty_scene_returns_background() {
        let scene = Scene::new("empty").with_background(Color::new(1.0, 2.0, 3.0));
        let tracer = SimpleRayTracer::new(&scene, TracerSettings::default());
        assert_eq!(tracer.trace_ray(&view_ray()), Color::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = lit_sphere_scene();
        let tracer = SimpleRayTracer::new(&scene, TracerSettings::default());
        let ray = Ray::new(Point::ZERO, Vector::AXIS_X);
        assert_eq!(tracer.trace_ray(&ray), Color::splat(7.0));
    }

    #[test]
    fn test_head_on_light_exact_color() {
        // Light at the eye: l = v = -z, n = +z
        let mut scene = Scene::new("head on")
            .with_ambient_light(AmbientLight::new(Color::splat(20.0)));
        scene.add_geometry(
            Geometry::new(Sphere::new(Point::new(0.0, 0.0, -10.0), 2.0).unwrap())
                .with_emission(Color::new(10.0, 20.0, 30.0))
                .with_material(Material::new().with_kd_scalar(0.5).with_ks_scalar(0.25)),
        );
        scene.add_light(PointLight::new(Color::splat(100.0), Point::ZERO));

        let tracer = SimpleRayTracer::new(&scene, TracerSettings::default());
        let color = tracer.trace_ray(&view_ray());
        assert!(color.approx_eq(&Color::new(105.0, 115.0, 125.0)), "{color}");
    }

    #[test]
    fn test_opaque_color_independent_of_depth() {
        let scene = lit_sphere_scene();
        let shallow = SimpleRayTracer::new(&scene, settings(1)).trace_ray(&view_ray());
        let deep = SimpleRayTracer::new(&scene, settings(10)).trace_ray(&view_ray());
        assert!(shallow.approx_eq(&deep));
        assert!(shallow.greater_than(unlit().max_element()));
    }

    #[test]
    fn test_opaque_occluder_blocks_light() {
        let mut scene = lit_sphere_scene();
        scene.add_geometry(occluder(0.0));
        let color = SimpleRayTracer::new(&scene, TracerSettings::default()).trace_ray(&view_ray());
        assert!(color.approx_eq(&unlit()), "{color}");
    }

    #[test]
    fn test_transparent_occluder_scales_light() {
        let free = SimpleRayTracer::new(&lit_sphere_scene(), TracerSettings::default())
            .trace_ray(&view_ray());

        let mut scene = lit_sphere_scene();
        scene.add_geometry(occluder(0.5));
        let shaded =
            SimpleRayTracer::new(&scene, TracerSettings::default()).trace_ray(&view_ray());

        let expected = unlit() + (free - unlit()) * 0.5;
        assert!(shaded.approx_eq(&expected), "{shaded} vs {expected}");
    }

    #[test]
    fn test_tiny_soft_light_matches_hard_shadow() {
        let soften = |scene: &mut Scene| {
            scene.lights = vec![PointLight::new(Color::splat(100.0), Point::new(0.0, 10.0, 0.0))
                .with_radius(1e-6)
                .into()];
        };

        let hard = SimpleRayTracer::new(&lit_sphere_scene(), TracerSettings::default())
            .trace_ray(&view_ray());
        let mut scene = lit_sphere_scene();
        soften(&mut scene);
        let soft = SimpleRayTracer::new(&scene, TracerSettings::default()).trace_ray(&view_ray());
        assert!(soft.approx_eq(&hard));

        let mut blocked = lit_sphere_scene();
        blocked.add_geometry(occluder(0.0));
        soften(&mut blocked);
        let soft_blocked =
            SimpleRayTracer::new(&blocked, TracerSettings::default()).trace_ray(&view_ray());
        assert!(soft_blocked.approx_eq(&unlit()));
    }

    /// Diffuse floor at y = 0 under a soft light of radius 2 at y = 10.
    fn soft_lit_floor() -> Scene {
        let mut scene = Scene::new("soft lit floor");
        scene.add_geometry(
            Geometry::new(Plane::new(Point::ZERO, Vector::AXIS_Y))
                .with_material(Material::new().with_kd_scalar(1.0)),
        );
        scene.add_light(
            PointLight::new(Color::splat(100.0), Point::new(0.0, 10.0, 0.0)).with_radius(2.0),
        );
        scene
    }

    /// Horizontal quad at y = 5 spanning `x_min..x_max` and a wide z range.
    fn slab(x_min: f64, x_max: f64, kt: f64) -> Geometry {
        Geometry::new(
            Polygon::new(vec![
                Point::new(x_min, 5.0, -100.0),
                Point::new(x_max, 5.0, -100.0),
                Point::new(x_max, 5.0, 100.0),
                Point::new(x_min, 5.0, 100.0),
            ])
            .unwrap(),
        )
        .with_material(Material::new().with_kt_scalar(kt))
    }

    fn floor_ray() -> Ray {
        Ray::new(Point::new(0.0, 1.0, 0.0), -Vector::AXIS_Y)
    }

    #[test]
    fn test_soft_shadow_penumbra_fraction() {
        let free = SimpleRayTracer::new(&soft_lit_floor(), TracerSettings::default())
            .trace_ray(&floor_ray());
        assert!(free.approx_eq(&Color::splat(100.0)), "{free}");

        // 5x5 grid keeps 21 cells inside the disk; the two x < 0 columns hold 8
        let mut scene = soft_lit_floor();
        scene.add_geometry(slab(-100.0, -0.05, 0.0));
        let half = SimpleRayTracer::new(&scene, TracerSettings::default()).trace_ray(&floor_ray());
        let expected = free * 13.0 / 21.0;
        assert!(half.approx_eq(&expected), "{half} vs {expected}");
    }

    #[test]
    fn test_soft_shadow_without_samples_uses_transparency() {
        let mut scene = soft_lit_floor();
        scene.add_geometry(slab(-50.0, 50.0, 0.5));

        let no_samples = TracerSettings {
            soft_shadow_samples: 0,
            ..TracerSettings::default()
        };
        let fallback = SimpleRayTracer::new(&scene, no_samples).trace_ray(&floor_ray());
        assert!(fallback.approx_eq(&Color::splat(50.0)), "{fallback}");

        // Sampled cells only count near-opaque blockers
        let sampled =
            SimpleRayTracer::new(&scene, TracerSettings::default()).trace_ray(&floor_ray());
        assert!(sampled.approx_eq(&Color::splat(100.0)), "{sampled}");
    }

    #[test]
    fn test_mirror_reflects_background() {
        let mut scene = Scene::new("mirror").with_background(Color::splat(100.0));
        scene.add_geometry(
            Geometry::new(Plane::new(Point::new(0.0, 0.0, -10.0), Vector::AXIS_Z))
                .with_material(Material::new().with_ka_scalar(0.0).with_kr_scalar(0.5)),
        );

        let reflected = SimpleRayTracer::new(&scene, settings(2)).trace_ray(&view_ray());
        assert!(reflected.approx_eq(&Color::splat(50.0)));

        // Level 1 shades locally only
        let local = SimpleRayTracer::new(&scene, settings(1)).trace_ray(&view_ray());
        assert_eq!(local, Color::ZERO);
    }

    #[test]
    fn test_refraction_sees_through() {
        let mut scene = Scene::new("window");
        scene.add_geometry(
            Geometry::new(
                Polygon::new(vec![
                    Point::new(-1.0, -1.0, -5.0),
                    Point::new(1.0, -1.0, -5.0),
                    Point::new(1.0, 1.0, -5.0),
                    Point::new(-1.0, 1.0, -5.0),
                ])
                .unwrap(),
            )
            .with_material(Material::new().with_kt_scalar(0.5)),
        );
        scene.add_geometry(
            Geometry::new(Plane::new(Point::new(0.0, 0.0, -20.0), Vector::AXIS_Z))
                .with_emission(Color::new(100.0, 0.0, 0.0)),
        );

        let color = SimpleRayTracer::new(&scene, TracerSettings::default()).trace_ray(&view_ray());
        assert!(color.approx_eq(&Color::new(50.0, 0.0, 0.0)), "{color}");
    }

    #[test]
    fn test_light_behind_surface_is_ignored() {
        let mut scene = Scene::new("backlit");
        scene.add_geometry(
            Geometry::new(Sphere::new(Point::new(0.0, 0.0, -10.0), 2.0).unwrap())
                .with_material(Material::new().with_kd_scalar(1.0)),
        );
        scene.add_light(PointLight::new(Color::splat(100.0), Point::new(0.0, 0.0, -30.0)));
        let color = SimpleRayTracer::new(&scene, TracerSettings::default()).trace_ray(&view_ray());
        assert_eq!(color, Color::ZERO);
    }
}
