//! Testes integrados para hyper-core

use crate::*;

fn c(re: f64, im: f64) -> HyperComplex {
    HyperComplex::complex(re, im)
}

fn q(re: f64, i: f64, j: f64, k: f64) -> HyperComplex {
    HyperComplex::quaternion(re, i, j, k)
}

fn assert_close(value: HyperComplex, expected: [f64; 4]) {
    let got = value.components();
    for (g, e) in got.iter().zip(expected.iter()) {
        assert!((g - e).abs() < 1e-3, "{value} != {expected:?}");
    }
}

// =============================================================================
// Construção e componentes
// =============================================================================

#[test]
fn test_default_is_complex_zero() {
    let a = HyperComplex::default();
    assert_eq!(a.kind(), Kind::Complex);
    assert_eq!(a.real(), 0.0);
    assert_eq!(a.i(), 0.0);
    assert_eq!(a.j(), 0.0);
    assert_eq!(a.k(), 0.0);
}

#[test]
fn test_complex_accessors() {
    let b = c(1.0, 2.0);
    assert_eq!(b.real(), 1.0);
    assert_eq!(b.i(), 2.0);

    let mut copy = b;
    copy.set_i(5.0);
    copy.set_real(4.0);
    assert_eq!(copy.real(), 4.0);
    assert_eq!(copy.i(), 5.0);
    // Cópia independente
    assert_eq!(b.real(), 1.0);
}

#[test]
fn test_quaternion_accessors() {
    let mut qu = HyperComplex::zero(Kind::Quaternion);
    qu.set_real(1.0);
    qu.set_i(10.0);
    qu.set_j(11.0).unwrap();
    qu.set_k(12.0).unwrap();
    assert_eq!(qu.components(), [1.0, 10.0, 11.0, 12.0]);

    let qu2 = q(1.0, -2.0, 3.0, -4.0);
    assert_eq!(qu2.j(), 3.0);
    assert_eq!(qu2.k(), -4.0);
}

#[test]
fn test_complex_rejects_j_and_k() {
    let mut z = c(1.0, 2.0);
    let err = z.set_j(3.0).unwrap_err();
    assert_eq!(err, HyperError::MissingComponent { kind: Kind::Complex, component: 'j' });
    assert!(z.set_k(3.0).is_err());
    assert_eq!(z, c(1.0, 2.0));
    assert_eq!(z.kind(), Kind::Complex);
}

#[test]
fn test_set_imaginary_complex() {
    let mut z = c(4.0, 5.0);
    z.set_imaginary(&[6.0]).unwrap();
    assert_eq!(z.i(), 6.0);

    let err = z.set_imaginary(&[1.0, 2.0]).unwrap_err();
    assert_eq!(err.to_string(), "Expected one imaginary coefficient, but got 2");
    assert_eq!(z.i(), 6.0);

    assert!(z.set_imaginary(&[]).is_err());
    assert_eq!(z.i(), 6.0);
}

#[test]
fn test_set_imaginary_quaternion() {
    let mut qu = q(1.0, 10.0, 11.0, 12.0);
    qu.set_imaginary(&[1.0, 5.0, 9.0]).unwrap();
    assert_eq!(qu.components(), [1.0, 1.0, 5.0, 9.0]);

    let err = qu.set_imaginary(&[7.0]).unwrap_err();
    assert_eq!(
        err,
        HyperError::ImaginaryArity { kind: Kind::Quaternion, expected: 3, found: 1 }
    );
    assert_eq!(err.to_string(), "Expected three imaginary coefficients, but got 1");
    assert_eq!(qu.components(), [1.0, 1.0, 5.0, 9.0]);
}

#[test]
fn test_kind_is_fixed() {
    let mut z = c(1.0, 2.0);
    z.set_real(3.0);
    z.set_i(4.0);
    z.set_imaginary(&[5.0]).unwrap();
    assert!(z.set_imaginary(&[1.0, 2.0, 3.0]).is_err());
    assert!(z.set_j(1.0).is_err());
    assert!(z.set_k(1.0).is_err());
    z += 1.0;
    z -= 2.0;
    z *= 2.0;
    z /= 4.0;
    assert_eq!(z.kind(), Kind::Complex);
    assert_eq!(z, c(1.0, 2.5));

    // Misturar tipos sempre cria um valor novo; a variável original fica intacta
    let unit_j = q(0.0, 0.0, 1.0, 0.0);
    let product = z * unit_j;
    assert_eq!(product.kind(), Kind::Quaternion);
    assert_eq!(z.kind(), Kind::Complex);

    let widened = c(1.0, 2.0).widen();
    assert_eq!(widened.kind(), Kind::Quaternion);
    assert_eq!(widened, c(1.0, 2.0));
    assert_eq!(c(1.0, 2.0).widen_to(Kind::Complex).kind(), Kind::Complex);
    assert_eq!(q(1.0, 0.0, 0.0, 0.0).widen_to(Kind::Complex).kind(), Kind::Quaternion);
}

#[test]
fn test_as_complex() {
    assert_eq!(c(1.0, 2.0).as_complex(), Some(Complex64::new(1.0, 2.0)));
    assert_eq!(q(1.0, 2.0, 0.0, 0.0).as_complex(), None);
}

#[test]
fn test_from_components() {
    assert_eq!(HyperComplex::from_components(&[1.0, 2.0]).map(|v| v.kind()), Some(Kind::Complex));
    assert_eq!(
        HyperComplex::from_components(&[1.0, 2.0, 3.0, 4.0]).map(|v| v.kind()),
        Some(Kind::Quaternion)
    );
    assert!(HyperComplex::from_components(&[1.0, 2.0, 3.0]).is_none());
}

#[test]
fn test_show() {
    assert_eq!(c(1.0, 2.0).show(), "1 + 2i");
    assert_eq!(q(1.0, -2.0, 3.0, -4.0).show(), "1 + -2i + 3j + -4k");
}

// =============================================================================
// Igualdade
// =============================================================================

#[test]
fn test_equality_complex() {
    assert_eq!(c(2.0, 3.0), c(2.0, 3.0));
    assert_ne!(c(2.0, 3.0), c(4.0, 5.0));
    assert!(c(0.0, 0.0) == 0.0);
    assert!(c(2.0, 3.0) != 0.0);
    assert!(c(2.0, 0.0) == 2.0);
}

#[test]
fn test_equality_quaternion() {
    let q1 = q(1.0, 2.0, 3.0, 4.0);
    assert_eq!(q1, q(1.0, 2.0, 3.0, 4.0));
    assert_ne!(q1, q(1.0, 2.0, 3.0, 0.0));
    assert!(q(5.0, 0.0, 0.0, 0.0) == 5.0);
    assert!(q(5.0, 0.0, 0.0, 1.0) != 5.0);
}

#[test]
fn test_equality_widening() {
    assert_eq!(q(1.0, 2.0, 0.0, 0.0), c(1.0, 2.0));
    assert_eq!(c(1.0, 2.0), q(1.0, 2.0, 0.0, 0.0));
    assert_ne!(q(1.0, 2.0, 3.0, 0.0), c(1.0, 2.0));
    assert_ne!(c(1.0, 2.0), q(1.0, 2.0, 0.0, 4.0));
}

#[test]
fn test_equality_is_exact() {
    let third = c(1.0, 0.0) / c(3.0, 0.0);
    assert_ne!(third * 3.0, c(1.0 + f64::EPSILON * 4.0, 0.0));
    assert!((third * 3.0).approx_eq(&c(1.0, 0.0), 1e-12));
}

#[test]
fn test_equality_with_foreign_types() {
    assert_eq!(c(1.0, 2.0), Complex64::new(1.0, 2.0));
    assert_eq!(c(1.0, 2.0), Quaternion::new(1.0, 2.0, 0.0, 0.0));
    assert!(3.0 == c(3.0, 0.0));
}

// =============================================================================
// Aritmética complexa
// =============================================================================

#[test]
fn test_complex_arithmetic() {
    let c1 = c(2.0, 3.0);
    let c2 = c(4.0, 5.0);

    assert_eq!(c1 + c2, c(6.0, 8.0));
    assert_eq!(c1 - c2, c(-2.0, -2.0));
    assert_eq!(c1 * c2, c(-7.0, 22.0));
    assert_close(c1 / c2, [23.0 / 41.0, 2.0 / 41.0, 0.0, 0.0]);
    assert_eq!((c1 / c2).kind(), Kind::Complex);
}

#[test]
fn test_complex_scalar_arithmetic() {
    let c1 = c(2.0, 3.0);

    assert_eq!(c1 + 2.0, c(4.0, 3.0));
    assert_eq!(c1 - 2.0, c(0.0, 3.0));
    assert_eq!(c1 * 2.0, c(4.0, 6.0));
    assert_eq!(c1 / 2.0, c(1.0, 1.5));
}

#[test]
fn test_complex_division_formula() {
    let (ar, ai, br, bi) = (2.0, 3.0, 4.0, 5.0);
    let d = br * br + bi * bi;
    let expected = c((ar * br + ai * bi) / d, (br * ai - bi * ar) / d);
    assert_eq!(c(ar, ai) / c(br, bi), expected);
}

// =============================================================================
// Aritmética quaterniônica
// =============================================================================

#[test]
fn test_quaternion_arithmetic() {
    let q1 = q(1.0, 2.0, 3.0, 4.0);
    let q2 = q(1.0, 2.0, 3.0, 4.0);

    assert_eq!(q1 + q2, q(2.0, 4.0, 6.0, 8.0));
    assert_eq!(q1 - q2, q(0.0, 0.0, 0.0, 0.0));
    assert_eq!(q1 * q2, q(-28.0, 4.0, 6.0, 8.0));
    assert_close(q1 / q2, [1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_quaternion_scalar_arithmetic() {
    let q1 = q(1.0, 2.0, 3.0, 4.0);

    assert_eq!(q1 + 2.0, q(3.0, 2.0, 3.0, 4.0));
    assert_eq!(q1 - 2.0, q(-1.0, 2.0, 3.0, 4.0));
    assert_eq!(q1 * 2.0, q(2.0, 4.0, 6.0, 8.0));
    assert_eq!(q1 / 2.0, q(0.5, 1.0, 1.5, 2.0));
}

#[test]
fn test_quaternion_with_complex() {
    let q1 = q(1.0, 2.0, 3.0, 4.0);
    let c1 = c(2.0, 3.0);

    assert_eq!(q1 + c1, q(3.0, 5.0, 3.0, 4.0));
    assert_eq!(q1 - c1, q(-1.0, -1.0, 3.0, 4.0));
    assert_eq!(q1 * c1, q(-4.0, 7.0, 18.0, -1.0));
    assert_close(q1 / c1, [8.0 / 13.0, 1.0 / 13.0, -6.0 / 13.0, 17.0 / 13.0]);
    assert_close(q1 / c1, [0.615, 0.077, -0.462, 1.308]);
}

#[test]
fn test_quaternion_times_complex_shortcut() {
    let (ar, ai, aj, ak) = (1.5, -2.0, 0.25, 3.0);
    let (br, bi) = (-0.5, 4.0);
    let shortcut = q(
        ar * br - ai * bi,
        ar * bi + ai * br,
        aj * br + ak * bi,
        -aj * bi + ak * br,
    );
    assert_eq!(q(ar, ai, aj, ak) * c(br, bi), shortcut);
}

#[test]
fn test_mixed_multiplication_not_commutative() {
    let q1 = q(1.0, 2.0, 3.0, 4.0);
    let c1 = c(2.0, 3.0);

    assert_eq!(c1 * q1, q(-4.0, 7.0, -6.0, 17.0));
    assert_ne!(c1 * q1, q1 * c1);
}

#[test]
fn test_mixed_equals_widened() {
    let q1 = q(1.0, 2.0, 3.0, 4.0);
    let c1 = c(2.0, 3.0);

    for op in Op::ALL {
        assert_eq!(combine(&c1, op, &q1), combine(&c1.widen(), op, &q1), "{op}");
        assert_eq!(combine(&q1, op, &c1), combine(&q1, op, &c1.widen()), "{op}");
    }
}

#[test]
fn test_result_kind() {
    let z = c(1.0, 1.0);
    let h = q(1.0, 1.0, 1.0, 1.0);
    assert_eq!(result_kind(&z, &z), Kind::Complex);
    assert_eq!(result_kind(&z, &h), Kind::Quaternion);
    assert_eq!(result_kind(&h, &z), Kind::Quaternion);
    assert_eq!(result_kind(&h, &h), Kind::Quaternion);

    for op in Op::ALL {
        assert_eq!(combine(&z, op, &z).kind(), Kind::Complex);
        assert_eq!(combine(&z, op, &h).kind(), Kind::Quaternion);
        assert_eq!(combine(&h, op, &z).kind(), Kind::Quaternion);
    }
}

#[test]
fn test_identities() {
    for x in [c(2.0, -3.0), q(1.0, -2.0, 0.5, 4.0)] {
        let kind = x.kind();
        assert_eq!(x + HyperComplex::zero(kind), x);
        assert_eq!(x + 0.0, x);
        assert_eq!(x - x, HyperComplex::zero(kind));
        assert_eq!(x * HyperComplex::one(kind), x);
        assert_eq!(x * 1.0, x);
    }
}

#[test]
fn test_reference_operators() {
    let a = c(1.0, 1.0);
    let b = q(0.0, 0.0, 1.0, 0.0);
    assert_eq!(&a + &b, a + b);
    assert_eq!(&a / &b, a / b);

    let mut acc = a;
    acc *= 2.0;
    acc -= 1.0;
    assert_eq!(acc, c(1.0, 2.0));
    assert_eq!(-acc, c(-1.0, -2.0));
}

#[test]
fn test_division_by_zero_value_is_ieee() {
    let r = c(1.0, 0.0) / c(0.0, 0.0);
    assert!(r.real().is_nan() || r.real().is_infinite());
    assert!(c(0.0, 0.0).is_zero());
    assert!(q(0.0, -0.0, 0.0, 0.0).is_zero());
}

#[test]
fn test_serde_shape() {
    let value = q(1.0, 2.0, 3.0, 4.0);
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"Quaternion":{"re":1.0,"i":2.0,"j":3.0,"k":4.0}}"#);

    let z = c(1.5, -2.0);
    let back: HyperComplex = serde_json::from_str(&serde_json::to_string(&z).unwrap()).unwrap();
    assert_eq!(back.kind(), Kind::Complex);
    assert_eq!(back, z);
}
