//! Algebra-law validation for the quaternion type and rotation functions.
//!
//! Exercises the ring axioms over a representative set of quaternions (the
//! four basis units, mixed-sign combinations, and the zero quaternion), and
//! cross-checks vector rotation against an independently specified rotation
//! matrix.

use approx::{assert_relative_eq, relative_eq};
use quat_math::{qmath, rotate, Quaternion, Rotation, Vec3};
use std::f64::consts::FRAC_PI_2;

/// The four basis units 1, i, j, k.
const BASIS: [Quaternion; 4] = [
    Quaternion::ONE,
    Quaternion::I,
    Quaternion::J,
    Quaternion::K,
];

/// Mixed-sign combinations exercising every component position.
const MIXED: [Quaternion; 8] = [
    Quaternion::new(1.0, 1.0, 1.0, 1.0),
    Quaternion::new(-1.0, -1.0, 1.0, 1.0),
    Quaternion::new(1.0, -1.0, -1.0, 1.0),
    Quaternion::new(-1.0, 1.0, -1.0, 1.0),
    Quaternion::new(1.0, 1.0, 0.0, 0.0),
    Quaternion::new(-1.0, 1.0, 0.0, 0.0),
    Quaternion::new(0.0, 0.0, -1.0, 1.0),
    Quaternion::new(0.0, 0.0, 1.0, -1.0),
];

fn nonzero() -> Vec<Quaternion> {
    BASIS.iter().chain(MIXED.iter()).copied().collect()
}

fn all() -> Vec<Quaternion> {
    let mut qs = nonzero();
    qs.push(Quaternion::ZERO);
    qs
}

// ============================================================================
// Addition
// ============================================================================

#[test]
fn addition_commutative_and_associative() {
    let qs = all();
    for &a in &qs {
        for &b in &qs {
            assert_relative_eq!(a + b, b + a);
            for &c in &qs {
                assert_relative_eq!((a + b) + c, a + (b + c));
            }
        }
    }
}

#[test]
fn additive_identity_and_inverse() {
    for q in all() {
        assert_relative_eq!(Quaternion::ZERO + q, q);
        assert_relative_eq!(q + Quaternion::ZERO, q);
        assert!((q + (-q)).is_zero());
    }
}

// ============================================================================
// Multiplication
// ============================================================================

#[test]
fn multiplication_associative() {
    let qs = all();
    for &a in &qs {
        for &b in &qs {
            for &c in &qs {
                assert_relative_eq!((a * b) * c, a * (b * c), epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn multiplication_distributes_over_addition() {
    let qs = all();
    for &a in &qs {
        for &b in &qs {
            for &c in &qs {
                assert_relative_eq!(a * (b + c), a * b + a * c, epsilon = 1e-12);
                assert_relative_eq!((a + b) * c, a * c + b * c, epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn multiplication_not_commutative() {
    // One witness suffices: i·j = k but j·i = -k.
    let witness = nonzero().iter().any(|&a| {
        nonzero()
            .iter()
            .any(|&b| !relative_eq!(a * b, b * a, epsilon = 1e-12))
    });
    assert!(witness);
}

#[test]
fn multiplicative_identity() {
    for q in all() {
        assert_relative_eq!(Quaternion::ONE * q, q);
        assert_relative_eq!(q * Quaternion::ONE, q);
    }
}

#[test]
fn multiplicative_inverse_of_nonzero() {
    for q in nonzero() {
        let inv = qmath::invert(q).unwrap();
        assert_relative_eq!(q * inv, Quaternion::ONE, epsilon = 1e-12);
        assert_relative_eq!(inv * q, Quaternion::ONE, epsilon = 1e-12);
    }
}

#[test]
fn inverting_zero_is_an_error() {
    assert!(qmath::invert(Quaternion::ZERO)
        .unwrap_err()
        .is_division_by_zero());
}

// ============================================================================
// Norms and equality
// ============================================================================

#[test]
fn norm_reference_values() {
    for q in BASIS {
        assert_relative_eq!(q.norm(), 1.0);
    }
    assert_relative_eq!(Quaternion::new(1.0, 1.0, 0.0, 0.0).norm(), 2.0_f64.sqrt());
    assert_relative_eq!(Quaternion::new(1.0, 1.0, 1.0, 1.0).norm(), 2.0);
    assert_relative_eq!(Quaternion::ZERO.norm(), 0.0);
}

#[test]
fn tolerance_equality_separates_values() {
    let qs = all();
    for (i, &a) in qs.iter().enumerate() {
        for (j, &b) in qs.iter().enumerate() {
            if i == j {
                assert!(relative_eq!(a, b));
            } else {
                assert!(!relative_eq!(a, b, epsilon = 1e-9));
            }
        }
    }
}

// ============================================================================
// Rotation: the worked square scenario
// ============================================================================

/// Rotation matrix for -90° about +z, specified independently of the
/// quaternion code path.
const CLOCKWISE_Z: [[f64; 3]; 3] = [[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];

fn apply_matrix(m: &[[f64; 3]; 3], v: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
        m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
        m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
    )
}

#[test]
fn square_rotates_clockwise() {
    let corners = [
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(1.0, 3.0, 0.0),
        Vec3::new(3.0, 3.0, 0.0),
        Vec3::new(3.0, 1.0, 0.0),
    ];
    let r = Rotation::new(Vec3::Z, -FRAC_PI_2);

    for corner in corners {
        let rotated = rotate(corner, &r).unwrap();
        assert_relative_eq!(rotated, apply_matrix(&CLOCKWISE_Z, corner), epsilon = 1e-12);
    }

    // Spot check the first corner explicitly.
    assert_relative_eq!(
        rotate(corners[0], &r).unwrap(),
        Vec3::new(1.0, -1.0, 0.0),
        epsilon = 1e-12
    );
}

#[test]
fn rotation_preserves_length() {
    let rotations = [
        Rotation::new(Vec3::Z, -FRAC_PI_2),
        Rotation::new(Vec3::new(1.0, 1.0, 1.0), 2.0),
        Rotation::new(Vec3::new(-1.0, 0.5, 2.0), -5.0),
    ];
    let vectors = [
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(1.0, 3.0, 0.0),
        Vec3::new(-2.0, 0.25, 7.0),
    ];
    for r in &rotations {
        for &v in &vectors {
            assert_relative_eq!(rotate(v, r).unwrap().length(), v.length(), epsilon = 1e-12);
        }
    }
}

#[test]
fn rotation_roundtrip_through_quaternion() {
    let r = Rotation::new(Vec3::new(2.0, -1.0, 0.5), 1.234);
    let q = Quaternion::from_rotation(&r).unwrap();
    assert_relative_eq!(q.norm(), 1.0, epsilon = 1e-12);

    let back = q.to_rotation().unwrap();
    assert_relative_eq!(back.axis, r.axis.normalize().unwrap(), epsilon = 1e-12);
    assert_relative_eq!(back.angle, r.angle, epsilon = 1e-12);
}
