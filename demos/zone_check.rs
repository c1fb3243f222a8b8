//! Zone check demo: runs the worldmath helpers against a few player
//! positions, the way a client checks spawn areas and pickups.
//!
//! Usage:
//! ```text
//! cargo run --example zone_check
//! RUST_LOG=worldmath=debug cargo run --example zone_check   # show degenerate-input events
//! ```

use tracing::info;
use worldmath::math::{
    angle_between_points, distance_between, is_point_in_ball, is_point_in_cuboid,
    is_point_in_polygon, is_point_in_tube, offset_degrees, radians_to_degrees, unlerp_clamped,
    Vector2, Vector3,
};
use worldmath::{Matrix, WorldMathError};

fn main() -> Result<(), WorldMathError> {
    // Default: WARN for everything, INFO for the demo and the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=worldmath=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("zone_check=info".parse().unwrap_or_default())
        .add_directive("worldmath=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let spawn_lot = [
        Vector2::new(-50.0, -20.0),
        Vector2::new(40.0, -20.0),
        Vector2::new(40.0, 35.0),
        Vector2::new(-10.0, 60.0),
        Vector2::new(-50.0, 35.0),
    ];
    let pickup = Vector3::new(12.0, 8.0, 30.5);

    let players = [
        ("alpha", Vector3::new(0.0, 0.0, 30.0), 1.2_f32),
        ("bravo", Vector3::new(12.5, 8.0, 31.0), 4.0),
        ("charlie", Vector3::new(-80.0, 5.0, 2.0), -2.5),
    ];

    for (player, pos, heading_rad) in players {
        let in_lot = is_point_in_polygon(&spawn_lot, &Vector2::new(pos.x, pos.y));
        let in_garage = is_point_in_cuboid(-5.0, -5.0, 25.0, 5.0, 5.0, 35.0, pos.x, pos.y, pos.z);
        let in_elevator = is_point_in_tube(-80.0, 5.0, 0.0, 40.0, 3.0, pos.x, pos.y, pos.z);
        let near_pickup = is_point_in_ball(pickup.x, pickup.y, pickup.z, 2.0, pos.x, pos.y, pos.z);

        let heading = radians_to_degrees(heading_rad);
        let turn_to_north = offset_degrees(heading, 0.0);
        let approach = unlerp_clamped(40.0, f64::from(distance_between(&pos, &pickup)), 0.0);

        info!(
            player,
            in_lot, in_garage, in_elevator, near_pickup, heading, turn_to_north, approach,
            "zone check"
        );
    }

    let bearing = angle_between_points(10, 0, 7, 7)?;
    info!(bearing, "angle between spawn markers");

    let yaw = Matrix::new(
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(-1.0, 0.0, 0.0),
        Vector3::z(),
        Vector3::zeros(),
    );
    let half_turn = yaw * yaw;
    info!(
        orthonormal = half_turn.is_orthonormal(1e-6),
        forward = ?half_turn.forward,
        "composed camera orientation"
    );

    Ok(())
}
