use approx::assert_relative_eq;
use marble_phys::math::{Basis, Matrix3, Vector3};
use std::f32::consts::PI;

#[test]
fn test_vector3_operations() {
    let v1 = Vector3::new(1.0, 2.0, 3.0);
    let v2 = Vector3::new(4.0, 5.0, 6.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum.x, 5.0);
    assert_eq!(sum.y, 7.0);
    assert_eq!(sum.z, 9.0);

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff.x, 3.0);
    assert_eq!(diff.y, 3.0);
    assert_eq!(diff.z, 3.0);

    // Scalar multiplication
    let scaled = v1 * 2.0;
    assert_eq!(scaled.x, 2.0);
    assert_eq!(scaled.y, 4.0);
    assert_eq!(scaled.z, 6.0);

    // Dot product
    let dot = v1.dot(&v2);
    assert_eq!(dot, 1.0 * 4.0 + 2.0 * 5.0 + 3.0 * 6.0);

    // Cross product
    let cross = v1.cross(&v2);
    assert_eq!(cross.x, v1.y * v2.z - v1.z * v2.y);
    assert_eq!(cross.y, v1.z * v2.x - v1.x * v2.z);
    assert_eq!(cross.z, v1.x * v2.y - v1.y * v2.x);

    // Length
    let length = v1.length();
    assert_relative_eq!(length, (1.0f32.powi(2) + 2.0f32.powi(2) + 3.0f32.powi(2)).sqrt());

    // Normalize
    let normalized = v1.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized.x, v1.x / length);
    assert_relative_eq!(normalized.y, v1.y / length);
    assert_relative_eq!(normalized.z, v1.z / length);
}

#[test]
fn test_vector3_mad() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(10.0, -20.0, 0.5);

    let r = a.mad(&b, 2.0);
    assert_eq!(r.x, 21.0);
    assert_eq!(r.y, -38.0);
    assert_eq!(r.z, 4.0);

    // A zero scale leaves the vector bit-identical
    let r = a.mad(&b, 0.0);
    assert_eq!(r, a);
}

#[test]
fn test_matrix3_axis_angle() {
    // Rotate a vector 90 degrees around the Y-axis
    let m = Matrix3::from_axis_angle(Vector3::unit_y(), PI / 2.0);
    let rotated = m.multiply_vector(Vector3::unit_x());

    assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(rotated.y, 0.0, epsilon = 1e-5);
    assert_relative_eq!(rotated.z, -1.0, epsilon = 1e-5);

    // A rotation preserves length
    let v = Vector3::new(1.0, 2.0, 3.0);
    let m = Matrix3::from_axis_angle(Vector3::new(1.0, 1.0, 0.0), 0.7);
    assert_relative_eq!(m.multiply_vector(v).length(), v.length(), epsilon = 1e-5);

    // A zero axis yields the identity
    let m = Matrix3::from_axis_angle(Vector3::zero(), 1.0);
    assert_eq!(m, Matrix3::identity());
}

#[test]
fn test_matrix3_operations() {
    let identity = Matrix3::identity();

    let m = Matrix3::new([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0],
    ]);

    // Multiplication by identity
    let result = m.multiply_matrix(&identity);
    assert_eq!(result.data, m.data);

    // Vector multiplication
    let v = Vector3::new(1.0, 2.0, 3.0);
    let mv = m.multiply_vector(v);

    assert_eq!(mv.x, 1.0 * v.x + 2.0 * v.y + 3.0 * v.z);
    assert_eq!(mv.y, 4.0 * v.x + 5.0 * v.y + 6.0 * v.z);
    assert_eq!(mv.z, 7.0 * v.x + 8.0 * v.y + 9.0 * v.z);

    // Transpose
    let t = m.transpose();
    assert_eq!(t.data[0][1], m.data[1][0]);
    assert_eq!(t.data[2][0], m.data[0][2]);
}

#[test]
fn test_basis_rotation() {
    // A quarter turn about Z carries X onto Y
    let mut basis = Basis::identity();
    basis.rotate(Vector3::new(0.0, 0.0, PI / 2.0), 1.0);

    assert_relative_eq!(basis.axes[0].x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(basis.axes[0].y, 1.0, epsilon = 1e-5);
    assert_relative_eq!(basis.axes[0].z, 0.0, epsilon = 1e-5);

    // Zero angular velocity is a strict no-op
    let before = basis;
    basis.rotate(Vector3::zero(), 1.0);
    assert_eq!(basis, before);
}

#[test]
fn test_basis_stays_orthonormal() {
    // Thousands of small rotations about a skew axis must not accumulate
    // drift beyond single-precision noise.
    let mut basis = Basis::identity();
    let w = Vector3::new(3.0, 1.0, 2.0);

    for _ in 0..5000 {
        basis.rotate(w, 0.01);
    }

    assert!(basis.is_orthonormal(1.0e-4));
}
