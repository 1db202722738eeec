use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use super::*;
use crate::domain::profile::{TYPE_BOOK, TYPE_LAPTOP, TYPE_NOTEBOOK, TYPE_PEN};

fn desk() -> Vec<DeskObject> {
    vec![
        DeskObject::new(1, TYPE_BOOK, Vec3::new(0.0, 0.1, 0.0)),
        DeskObject::new(2, TYPE_NOTEBOOK, Vec3::new(0.0, 0.25, 0.0)),
        DeskObject::new(3, TYPE_PEN, Vec3::new(0.05, 0.35, 0.05)),
        // same height as the first book, far enough away to share nothing
        DeskObject::new(4, TYPE_BOOK, Vec3::new(2.0, 0.1, 0.0)),
    ]
}

fn ids(objects: &[&DeskObject]) -> Vec<ObjectId> {
    let mut out: Vec<ObjectId> = objects.iter().map(|o| o.id).collect();
    out.sort_unstable();
    out
}

#[test]
fn book_notebook_pen_stack() {
    let mut engine = DeskEngine::new();
    let objects = desk();
    let book = &objects[0];

    assert!(ids(&engine.find_direct_supports(book, &objects)).contains(&2));
    assert_eq!(ids(&engine.find_all_stacked_above(book, &objects)), vec![2, 3]);

    let expected = engine.profiles().get(TYPE_NOTEBOOK).weight + engine.profiles().get(TYPE_PEN).weight;
    let stacked = engine.compute_stacked_weight(book, &objects);
    assert!(stacked >= expected - 1e-6);
    // pen is reachable from the book and from the notebook but counted once
    assert!((stacked - expected).abs() < 1e-6);

    assert!(engine.compute_resistance(book, &objects) > 0.0);
}

#[test]
fn identical_empty_book_has_no_resistance() {
    let mut engine = DeskEngine::new();
    let objects = desk();
    assert_eq!(engine.compute_stacked_weight(&objects[3], &objects), 0.0);
    assert_eq!(engine.compute_resistance(&objects[3], &objects), 0.0);
    assert!(engine.compute_resistance(&objects[0], &objects) > 0.0);
}

#[test]
fn resistance_follows_configured_gain_and_ceiling() {
    let mut engine = DeskEngine::new();
    let objects = desk();
    // (0.8 + 0.1) / (1.5 + 0.1) * 0.4
    let r = engine.compute_resistance(&objects[0], &objects);
    assert!((r - 0.225).abs() < 1e-5);

    engine
        .set_config(InteractionConfig {
            resistance_ceiling: 0.1,
            ..InteractionConfig::default()
        })
        .unwrap();
    assert_eq!(engine.compute_resistance(&objects[0], &objects), 0.1);
}

#[test]
fn negative_gain_is_rejected_and_resistance_stays_non_negative() {
    let mut engine = DeskEngine::new();
    let objects = desk();

    let result = engine.set_config(InteractionConfig {
        resistance_gain: -1.0,
        ..InteractionConfig::default()
    });
    assert!(matches!(
        result,
        Err(crate::domain::ConfigError::InvalidValue { field: "resistanceGain", .. })
    ));
    assert_eq!(engine.config().resistance_gain, InteractionConfig::default().resistance_gain);

    let r = engine.compute_resistance(&objects[0], &objects);
    assert!(r >= 0.0);
    assert!((r - 0.225).abs() < 1e-5);
}

#[test]
fn lifting_a_member_removes_it_from_the_stack() {
    let engine = DeskEngine::new();
    let mut objects = desk();
    objects[1].is_lifted = true;
    // the pen still sits within tolerance of the book's top
    assert_eq!(ids(&engine.find_all_stacked_above(&objects[0], &objects)), vec![3]);

    objects[2].is_examining = true;
    assert!(engine.find_all_stacked_above(&objects[0], &objects).is_empty());
    assert_eq!(engine.compute_stacked_weight(&objects[0], &objects), 0.0);
}

#[test]
fn carry_plan_covers_whole_closure() {
    let mut engine = DeskEngine::new();
    let objects = desk();
    let plan = engine.plan_carry(&objects[0], &objects);
    let mut carried: Vec<ObjectId> = plan.iter().map(|c| c.id).collect();
    carried.sort_unstable();
    assert_eq!(carried, vec![2, 3]);
    for c in plan.iter() {
        assert!(c.follow > 0.0 && c.follow <= 1.0);
        assert_eq!(c.carried_by, 1);
    }
}

#[test]
fn laptop_probe_through_engine() {
    let mut engine = DeskEngine::new();
    let laptop = DeskObject::new(9, TYPE_LAPTOP, Vec3::new(0.5, 0.0, 0.5)).with_yaw(FRAC_PI_2);
    let centers = engine.collider_world_positions(&laptop);
    assert_eq!(centers.len(), 5);

    let c = centers[4];
    let hit = engine
        .test_point(c.x, c.z + 0.02, 0.05, 0.2, 0.05, &laptop)
        .expect("probe next to the screen edge should hit");
    assert_eq!(hit.collider_index, 4);

    assert!(engine.test_point(c.x, c.z + 0.02, 0.05, 3.0, 0.05, &laptop).is_none());

    let book = DeskObject::new(1, TYPE_BOOK, Vec3::new(0.5, 0.0, 0.5));
    assert!(engine.get_colliders(&book).is_empty());
    assert!(engine.test_point(0.5, 0.52, 0.5, 0.0, 1.0, &book).is_none());

    let scene = vec![book, laptop];
    let probe = PointProbe::new(c.x, c.z + 0.02, 0.05, 0.2, 0.05);
    assert_eq!(engine.test_point_all(&probe, &scene).map(|(id, _)| id), Some(9));
}

#[test]
fn perf_metrics_count_queries_when_enabled() {
    let mut engine = DeskEngine::new();
    let objects = desk();

    engine.compute_resistance(&objects[0], &objects);
    assert_eq!(engine.get_perf_stats().stack_queries(), 0);

    engine.enable_perf_metrics(true);
    engine.compute_resistance(&objects[0], &objects);
    engine.plan_carry(&objects[0], &objects);
    let stats = engine.get_perf_stats();
    assert_eq!(stats.stack_queries(), 2);
    assert_eq!(stats.objects_scanned(), 8);
    assert!(stats.stack_ms_mean() >= 0.0);

    engine.enable_perf_metrics(false);
    assert_eq!(engine.get_perf_stats().stack_queries(), 0);
}

#[test]
fn bundle_swap_changes_weights() {
    let mut engine = DeskEngine::new();
    let objects = desk();
    engine
        .load_profile_bundle_json(
            r#"{"formatVersion":1,"profiles":[
                {"type":"book","weight":1.0,"height":0.15},
                {"type":"notebook","weight":2.0,"height":0.1},
                {"type":"pen","weight":0.5,"height":0.02}]}"#,
        )
        .unwrap();
    assert!((engine.compute_stacked_weight(&objects[0], &objects) - 2.5).abs() < 1e-6);

    assert!(engine.load_profile_bundle_json("{").is_err());
    // a rejected bundle leaves the previous table in place
    assert_eq!(engine.profiles().get(TYPE_NOTEBOOK).weight, 2.0);
}

#[test]
fn facade_queries_by_id() {
    let mut physics = DeskPhysics::new();
    physics
        .sync_objects(
            r#"[
            {"id":1,"type":"book","position":[0,0.1,0]},
            {"id":2,"type":"notebook","position":[0,0.25,0]},
            {"id":3,"type":"pen","position":[0.05,0.35,0.05]},
            {"id":9,"type":"laptop","position":[1,0,1],"yaw":1.2}
        ]"#
            .to_string(),
        )
        .unwrap();

    assert_eq!(physics.object_count(), 4);
    assert_eq!(physics.find_direct_supports(1), vec![2, 3]);
    assert!(physics.compute_resistance(1) > 0.0);
    assert_eq!(physics.compute_resistance(404), 0.0);
    assert_eq!(physics.compute_interface_friction(1, 2), physics.compute_interface_friction(2, 1));
    assert_eq!(physics.collider_positions(9).len(), 15);
    assert!(physics.collider_positions(1).is_empty());
    assert_eq!(physics.test_point_json(0.0, 0.0, 0.1, 0.0, 1.0, 9), "null");

    let plan: serde_json::Value = serde_json::from_str(&physics.plan_carry_json(1)).unwrap();
    assert_eq!(plan.as_array().map(|a| a.len()), Some(2));
    assert_eq!(plan[0]["carriedBy"], 1);
}

#[test]
fn facade_unknown_id_rests_on_desk_surface() {
    let mut physics = DeskPhysics::new();
    physics
        .sync_objects(r#"[{"id":1,"type":"book","position":[0,0,0]}]"#.to_string())
        .unwrap();
    assert_eq!(physics.resting_height(404), 0.0);

    physics.load_config(r#"{"deskSurfaceY":0.75}"#.to_string()).unwrap();
    assert_eq!(physics.resting_height(404), 0.75);
    assert!(physics.resting_height(1).is_finite());
}
