//! Rotate command - rotate arbitrary points about an axis

use anyhow::{Context, Result};
use quat_math::{Quaternion, Rotation};
use tracing::debug;

use crate::commands::{format_point, parse_vec3};
use crate::RotateArgs;

pub fn run(args: RotateArgs) -> Result<()> {
    let axis = parse_vec3(&args.axis).context("Failed to parse --axis")?;
    let angle = if args.degrees {
        args.angle.to_radians()
    } else {
        args.angle
    };
    let rotation = Rotation::new(axis, angle);

    let q = Quaternion::from_rotation(&rotation)
        .context("Failed to build rotation quaternion")?;
    debug!("rotation quaternion: {}", q);

    for point in &args.points {
        let p = parse_vec3(point).with_context(|| format!("Failed to parse point: {}", point))?;
        let rotated = quat_math::rotate_by_quaternion(p, q)
            .with_context(|| format!("Failed to rotate point: {}", point))?;
        println!("{} -> {}", format_point(p), format_point(rotated));
    }

    Ok(())
}
