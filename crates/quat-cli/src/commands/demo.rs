//! Demo command - rotate a square 90 degrees clockwise
//!
//! ```text
//!    ^ y                     ^
//!    | .B    .C              |
//!    |                       |
//!    | .A    .D   x          |
//! ---+------------>  ->   ---+------------>
//!    |         rot 90 deg    | .A    .B
//!    |                       |
//!                              .D    .C
//! ```

use anyhow::Result;
use quat_math::{rotate, Rotation, Vec3};
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

use crate::commands::format_point;

pub fn run() -> Result<()> {
    let points = [
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(1.0, 3.0, 0.0),
        Vec3::new(3.0, 3.0, 0.0),
        Vec3::new(3.0, 1.0, 0.0),
    ];
    let rotation = Rotation::new(Vec3::Z, -FRAC_PI_2);
    debug!("rotating {} points about {} by {} rad", points.len(), rotation.axis, rotation.angle);

    let rotated = points
        .iter()
        .map(|&p| rotate(p, &rotation))
        .collect::<quat_core::Result<Vec<_>>>()?;

    println!("Before rotation");
    println!(
        "{}",
        points.map(format_point).join(",\n")
    );
    println!("After  rotation");
    println!(
        "{}",
        rotated
            .iter()
            .map(|&p| format_point(p))
            .collect::<Vec<_>>()
            .join(",\n")
    );

    Ok(())
}
