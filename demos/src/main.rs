//! Runs a few polygon boolean scenes and prints the results as JSON.
//!
//! Set `RUST_LOG=debug` to see the phase logging of the boolean operations.
use greiner_hormann::{
    polygon,
    polygon::{BooleanOp, BooleanOptions, BooleanResult, Polygon},
};

struct Scene {
    name: &'static str,
    subject: Polygon,
    clip: Polygon,
}

fn scenes() -> Vec<Scene> {
    vec![
        Scene {
            name: "overlapping squares",
            subject: polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
            clip: polygon![(2.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0)],
        },
        Scene {
            name: "touching band",
            subject: polygon![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
            clip: polygon![(0.0, 1.0), (4.0, 1.0), (4.0, 3.0), (0.0, 3.0)],
        },
        Scene {
            name: "contained clip",
            subject: polygon![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
            clip: polygon![(3.0, 3.0), (6.0, 3.0), (6.0, 6.0), (3.0, 6.0)],
        },
        Scene {
            name: "disjoint",
            subject: polygon![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
            clip: polygon![(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 6.0)],
        },
    ]
}

fn print_result(op: BooleanOp, result: &BooleanResult) {
    let area: f64 = result.iter_non_empty().map(|p| p.area().abs()).sum();
    log::info!(
        "  {op:?}: {} component(s), total area {area}",
        result.polygons.len()
    );
    match serde_json::to_string(result) {
        Ok(json) => println!("    {json}"),
        Err(e) => log::error!("failed to serialize result: {e}"),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    for scene in scenes() {
        log::info!("{}", scene.name);
        // index reused by all three operations on the scene
        let clip_index = scene.clip.create_aabb_index();
        let mut options = BooleanOptions::new();
        options.clip_aabb_index = Some(&clip_index);

        for op in [BooleanOp::Intersect, BooleanOp::Union, BooleanOp::Difference] {
            match scene.subject.boolean_opt(&scene.clip, op, &options) {
                Ok(result) => print_result(op, &result),
                Err(e) => log::error!("  {op:?} failed: {e}"),
            }
        }
    }
}
