use glam::Vec2;
use particle_field::{
    Animator, AnimatorState, Color, FieldConfig, ManualClock, ParticleField, ParticleKind,
    ParticleSpawn, Viewport,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(16);

fn field(seed: u64, width: f32, height: f32) -> (ParticleField<StdRng, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let field = ParticleField::new(
        FieldConfig::default(),
        Viewport::new(width, height),
        StdRng::seed_from_u64(seed),
        clock.clone(),
    );
    (field, clock)
}

fn step(field: &mut ParticleField<StdRng, ManualClock>, clock: &ManualClock) {
    clock.advance(TICK);
    field.tick();
}

#[test]
fn click_burst_moves_then_fades_out() {
    let (mut field, clock) = field(2024, 1000.0, 1000.0);

    assert_eq!(field.on_pointer_click(100.0, 100.0), 10);
    assert_eq!(field.len(), 10);

    let initial: HashMap<_, _> = field
        .particles()
        .iter()
        .map(|p| (p.id, (p.position, p.velocity)))
        .collect();

    step(&mut field, &clock);
    for p in field.particles() {
        let (start, velocity) = initial[&p.id];
        assert_eq!(p.position, start + velocity);
        if velocity != Vec2::ZERO {
            assert_ne!(p.position, start);
        }
    }

    for _ in 1..125 {
        step(&mut field, &clock);
    }
    assert_eq!(clock_ms(&clock), 2000);
    assert!(field.is_empty());
}

#[test]
fn position_is_linear_in_ticks_and_opacity_follows_age() {
    let (mut field, clock) = field(5, 1000.0, 1000.0);
    let velocity = Vec2::new(0.75, -0.5);
    let start = Vec2::new(400.0, 600.0);
    field.emit(ParticleSpawn {
        kind: ParticleKind::Burst,
        position: start,
        velocity,
        size: 10.0,
        color: Color::from_hsla(200.0, 1.0, 0.7, 0.3),
    });

    for n in 1..=124u32 {
        step(&mut field, &clock);
        let p = &field.particles()[0];

        let expected = start + velocity * n as f32;
        assert!((p.position - expected).length() < 1e-3, "tick {n}");

        let elapsed_ms = (n * 16) as f32;
        let expected_opacity = (1.0 - elapsed_ms / 2000.0).max(0.0);
        assert!((p.opacity - expected_opacity).abs() < 1e-5, "tick {n}");
    }

    step(&mut field, &clock);
    assert!(field.is_empty(), "fully faded at 2000ms");
}

#[test]
fn opacity_never_increases() {
    let (mut field, clock) = field(9, 1000.0, 1000.0);
    field.on_pointer_click(500.0, 500.0);

    let mut last: HashMap<_, f32> = field.particles().iter().map(|p| (p.id, p.opacity)).collect();
    while !field.is_empty() {
        step(&mut field, &clock);
        for p in field.particles() {
            assert!(p.opacity <= last[&p.id]);
            assert!(p.opacity > 0.0 && p.opacity <= 1.0);
            last.insert(p.id, p.opacity);
        }
    }
}

#[test]
fn crossing_the_edge_removes_within_five_ticks() {
    let (mut field, clock) = field(1, 1000.0, 1000.0);
    let id = field.emit(ParticleSpawn {
        kind: ParticleKind::Ambient,
        position: Vec2::new(5.0, 5.0),
        velocity: Vec2::new(-1.0, -1.0),
        size: 4.0,
        color: Color::from_srgba(56, 189, 248, 51),
    });

    for _ in 0..4 {
        step(&mut field, &clock);
        assert!(field.particles().iter().any(|p| p.id == id));
    }
    step(&mut field, &clock);
    assert!(field.is_empty());
    assert_eq!(field.stats().offscreen, 1);
}

#[test]
fn removal_is_permanent() {
    let (mut field, clock) = field(77, 300.0, 300.0);
    let mut removed = Vec::new();

    for round in 0..200 {
        field.on_pointer_move(150.0, 150.0);
        if round % 20 == 0 {
            field.on_pointer_click(10.0, 290.0);
        }

        let before: Vec<_> = field.particles().iter().map(|p| p.id).collect();
        step(&mut field, &clock);
        let after: Vec<_> = field.particles().iter().map(|p| p.id).collect();

        removed.extend(before.into_iter().filter(|id| !after.contains(id)));
        assert!(after.iter().all(|id| !removed.contains(id)));
    }
}

#[test]
fn pointer_move_rate_is_about_one_in_five() {
    let (mut field, _) = field(0xC0FFEE, 1000.0, 1000.0);

    let created = (0..1000)
        .filter(|_| field.on_pointer_move(500.0, 500.0).is_some())
        .count();

    assert!((150..=250).contains(&created), "created {created}");
    assert_eq!(field.len(), created);
}

#[test]
fn negative_coordinates_are_accepted_then_culled() {
    let (mut field, clock) = field(3, 1000.0, 1000.0);
    field.on_pointer_click(-50.0, -50.0);
    assert_eq!(field.len(), 10);

    step(&mut field, &clock);
    assert!(field.is_empty());
}

#[test]
fn disposed_animator_stops_ticking_and_listening() {
    let clock = ManualClock::new();
    let mut animator = Animator::new(ParticleField::new(
        FieldConfig::default(),
        Viewport::new(1000.0, 1000.0),
        StdRng::seed_from_u64(8),
        clock.clone(),
    ));

    animator.start();
    for _ in 0..10 {
        animator.pointer_moved(300.0, 300.0);
        animator.pointer_clicked(300.0, 300.0);
        clock.advance(TICK);
        animator.update();
    }
    let ticks = animator.field().stats().ticks;
    let spawned = animator.field().stats().spawned;
    assert_eq!(ticks, 10);
    assert!(spawned >= 100);

    animator.stop();
    assert_eq!(animator.state(), AnimatorState::Stopped);

    for _ in 0..50 {
        assert!(!animator.pointer_moved(300.0, 300.0));
        assert!(!animator.pointer_clicked(300.0, 300.0));
        clock.advance(TICK);
        assert_eq!(animator.update(), 0);
    }
    assert_eq!(animator.field().stats().ticks, ticks);
    assert_eq!(animator.field().stats().spawned, spawned);
}

#[test]
fn session_releases_on_panic() {
    let clock = ManualClock::new();
    let mut animator = Animator::new(ParticleField::new(
        FieldConfig::default(),
        Viewport::new(1000.0, 1000.0),
        StdRng::seed_from_u64(8),
        clock,
    ));

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let mut session = animator.session();
        session.pointer_clicked(10.0, 10.0);
        panic!("view failed to render");
    }));

    assert!(result.is_err());
    assert_eq!(animator.state(), AnimatorState::Stopped);
    assert!(animator.field().is_empty());
}

fn clock_ms(clock: &ManualClock) -> u128 {
    use particle_field::Clock;
    clock.now().as_millis()
}
