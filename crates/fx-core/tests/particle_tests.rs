// Host-side tests for the particle field simulation and projection.

use fx_core::{perspective_scale, Particle, ParticleField, Viewport, PARTICLE_COUNT};
use glam::Vec2;

#[test]
fn seeded_field_spawns_within_bounds() {
    let vp = Viewport::new(640.0, 480.0);
    let field = ParticleField::with_seed(vp, 99);

    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    for p in field.particles() {
        assert!(p.z > 0.0 && p.z <= vp.far(), "depth {} outside (0, far]", p.z);
        assert!(p.x.abs() <= vp.width);
        assert!(p.y.abs() <= vp.height);
        assert!(p.size >= 0.0 && p.size < 2.0);
        assert!(p.opacity >= 0.1 && p.opacity < 0.6);
        assert!(p.vz >= 0.5 && p.vz < 2.5);
    }
}

#[test]
fn recycled_particles_return_to_the_far_plane() {
    let vp = Viewport::new(800.0, 600.0);
    let mut field = ParticleField::with_seed(vp, 7);

    // Minimum speed is 0.5/frame, so 5000 frames force every particle
    // through at least one recycle.
    for _ in 0..5000 {
        field.tick();
    }
    for p in field.particles() {
        assert!(p.z > 0.0 && p.z <= vp.far(), "depth {} outside (0, far]", p.z);
    }
}

#[test]
fn pool_size_is_constant_across_ticks_and_resizes() {
    let mut field = ParticleField::with_seed(Viewport::new(1280.0, 720.0), 3);
    for i in 0..1000 {
        field.tick();
        if i == 500 {
            field.resize(400.0, 300.0);
        }
    }
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    assert_eq!(field.viewport(), Viewport::new(400.0, 300.0));
}

#[test]
fn perspective_scale_is_positive_and_approaches_one_up_close() {
    let fov = 960.0;
    for z in [0.0, 1.0, 100.0, 960.0, 1920.0] {
        assert!(perspective_scale(fov, z) > 0.0);
    }
    assert!((perspective_scale(fov, 0.0) - 1.0).abs() < 1e-6);
    assert!(perspective_scale(fov, 0.5) > 0.999);
}

#[test]
fn far_plane_particle_is_not_drawn() {
    // 1920x1080 scenario: at depth == width the fade reaches zero exactly.
    let vp = Viewport::new(1920.0, 1080.0);
    let at_far = Particle {
        x: 10.0,
        y: 10.0,
        z: vp.far(),
        size: 1.5,
        opacity: 0.6,
        vz: 1.0,
    };
    assert!(at_far.project(vp, Vec2::ZERO).is_none());

    // Just inside the far plane it reappears with scale ~ fov/(fov+width) = 1/3.
    let near_far = Particle {
        z: vp.far() - 1.0,
        ..at_far
    };
    let proj = near_far.project(vp, Vec2::ZERO).expect("should be visible");
    assert!(proj.alpha > 0.0);
    let scale = perspective_scale(vp.fov(), near_far.z);
    assert!((scale - 1.0 / 3.0).abs() < 1e-3);
    assert!((proj.radius - near_far.size * scale * 2.0).abs() < 1e-4);
}

#[test]
fn visible_never_yields_non_positive_alpha() {
    let mut field = ParticleField::with_seed(Viewport::new(1280.0, 720.0), 42);
    for _ in 0..300 {
        field.tick();
        for proj in field.visible() {
            assert!(proj.alpha > 0.0);
            assert!(proj.radius >= 0.0);
        }
    }
}

#[test]
fn parallax_shift_scales_with_depth() {
    let vp = Viewport::new(1000.0, 1000.0);
    let near = Particle {
        x: 0.0,
        y: 0.0,
        z: 10.0,
        size: 1.0,
        opacity: 0.5,
        vz: 1.0,
    };
    let far = Particle { z: 900.0, ..near };

    // Full rightward pointer deflection; both particles sit on the axis so
    // the entire horizontal displacement is parallax.
    let deflection = Vec2::new(1.0, 0.0);
    let near_px = near.project(vp, deflection).expect("near visible");
    let far_px = far.project(vp, deflection).expect("far visible");
    let center = vp.width * 0.5;
    assert!(near_px.x - center > far_px.x - center, "near particles shift more");
    assert!(far_px.x > center, "shift is toward the pointer");
}

#[test]
fn pointer_smoothing_converges_on_the_target() {
    let mut field = ParticleField::with_seed(Viewport::new(1000.0, 500.0), 1);
    // Right edge, top edge: normalizes to (1, -1).
    field.set_pointer(1000.0, 0.0);
    let target = Vec2::new(1.0, -1.0);

    let mut prev = field.pointer().distance(target);
    for _ in 0..50 {
        field.tick();
        let d = field.pointer().distance(target);
        assert!(d < prev, "distance must strictly decrease ({} !< {})", d, prev);
        prev = d;
    }
}
