use lifesand_engine::{state_alive, state_builder, state_voyager, World};

#[test]
fn life_run_smoke() {
    let mut world = World::new(75, 100).expect("default size");
    world.randomize(100);
    let token = world.start_life();

    let mut now = 0.0;
    for _ in 0..20 {
        assert!(world.frame(now));
        now += 16.0;
    }
    assert!(world.is_run_active(token));
    assert_eq!(world.generation(), 20);
    assert_eq!(world.states_len(), 7500);
    assert_eq!(world.colors_len(), 7500);

    assert!(world.stop_life());
    assert!(!world.frame(now));
    assert!(world.get_stats().last_tick_ms() >= 0.0);
}

#[test]
fn gravity_then_life_smoke() {
    let mut world = World::new(20, 20).expect("valid size");
    assert!(world.toggle_cell(0, 5, state_alive()));
    assert!(world.toggle_cell(19, 0, state_voyager()));
    assert!(!world.toggle_cell(20, 0, state_alive()));
    assert!(!world.toggle_cell(0, 0, 9));

    let gravity = world.start_gravity();
    for t in 0..30 {
        world.frame(t as f64);
    }
    assert_eq!(world.get_cell(19, 5), Some(state_alive()));
    assert_eq!(world.get_cell(19, 0), Some(state_voyager()));
    assert_eq!(world.generation(), 0);

    let life = world.start_life();
    assert!(!world.is_run_active(gravity));
    assert!(world.is_run_active(life));
    world.frame(100.0);
    assert_eq!(world.generation(), 1);
    assert_eq!(world.mode(), 1);
}

#[test]
fn builder_launches_a_mini_rocket() {
    let mut world = World::new(12, 30).expect("valid size");
    assert!(world.toggle_cell(5, 2, state_builder()));
    assert_eq!(world.get_cooldown(5, 2), Some(1));

    world.step_once();
    assert_eq!(world.get_cooldown(5, 2), Some(0));
    world.step_once();
    assert_eq!(world.get_cell(4, 7), Some(state_voyager()));
    assert_eq!(world.get_cell(5, 8), Some(state_voyager()));
    assert_eq!(world.get_cooldown(5, 2), None);

    let stats: serde_json::Value = serde_json::from_str(&world.stats_json()).expect("valid json");
    assert_eq!(stats["lastReport"]["stamps"], 1);
    assert_eq!(stats["generation"], 2);
}

#[test]
fn speed_controls_smoke() {
    let mut world = World::new(5, 5).expect("valid size");
    assert_eq!(world.speed(), 10);
    assert!(!world.increase_speed());
    assert!(world.decrease_speed());
    assert_eq!(world.delay_ms(), 100);
    assert_eq!(world.flow_direction(), "left");
}
