//! CLI command implementations

pub mod demo;
pub mod rotate;

use anyhow::{bail, Result};
use quat_math::Vec3;

/// Parse a vector string like "0,0,1" or "1.5, -2, 0.25".
pub fn parse_vec3(s: &str) -> Result<Vec3> {
    let parts: Result<Vec<f64>, _> = s.split(',').map(|p| p.trim().parse::<f64>()).collect();

    let parts = parts.map_err(|_| anyhow::anyhow!("Invalid vector format: {}", s))?;
    if parts.len() != 3 {
        bail!("Expected 3 components (X,Y,Z), got {}: {}", parts.len(), s);
    }
    Ok(Vec3::new(parts[0], parts[1], parts[2]))
}

/// Format a point in fixed-width decimal for display.
pub fn format_point(v: Vec3) -> String {
    format!("({:4.1}, {:4.1}, {:4.1})", v.x, v.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3("0,0,1").unwrap(), Vec3::Z);
        assert_eq!(
            parse_vec3("1.5, -2, 0.25").unwrap(),
            Vec3::new(1.5, -2.0, 0.25)
        );
    }

    #[test]
    fn test_parse_vec3_rejects_garbage() {
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,2,3,4").is_err());
        assert!(parse_vec3("a,b,c").is_err());
        assert!(parse_vec3("").is_err());
    }

    #[test]
    fn test_format_point() {
        assert_eq!(
            format_point(Vec3::new(1.0, -1.0, 0.0)),
            "( 1.0, -1.0,  0.0)"
        );
    }
}
