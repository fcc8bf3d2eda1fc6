//! # Quaternion — Extensão de Hamilton
//!
//! Quatro componentes `re + i·I + j·J + k·K` com as regras
//! `I² = J² = K² = IJK = -1`. O produto não é comutativo.
//!
//! ## Produto de Hamilton
//!
//! ```text
//! re' = ar·br − ai·bi − aj·bj − ak·bk
//! i'  = ar·bi + ai·br + aj·bk − ak·bj
//! j'  = ar·bj − ai·bk + aj·br + ak·bi
//! k'  = ar·bk + ai·bj − aj·bi + ak·br
//! ```

use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Quatérnio com componentes `f64`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub re: f64,
    pub i: f64,
    pub j: f64,
    pub k: f64,
}

impl Quaternion {
    /// Zero quaterniônico
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Um quaterniônico
    pub const ONE: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Unidade I
    pub const I: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Unidade J
    pub const J: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Unidade K
    pub const K: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Cria quatérnio a partir dos quatro componentes
    pub const fn new(re: f64, i: f64, j: f64, k: f64) -> Self {
        Self { re, i, j, k }
    }

    /// Componentes na ordem `[re, i, j, k]`
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.re, self.i, self.j, self.k]
    }

    /// Conjugado: nega a parte imaginária
    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.i, -self.j, -self.k)
    }

    /// Módulo ao quadrado
    #[inline]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.i * self.i + self.j * self.j + self.k * self.k
    }

    /// Inverso multiplicativo: conjugado dividido, componente a componente,
    /// pelo módulo ao quadrado
    #[inline]
    pub fn inv(self) -> Self {
        self.conj().unscale(self.norm_sqr())
    }

    /// Multiplica todos os componentes por um escalar
    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.re * s, self.i * s, self.j * s, self.k * s)
    }

    /// Divide todos os componentes por um escalar
    #[inline]
    pub fn unscale(self, s: f64) -> Self {
        Self::new(self.re / s, self.i / s, self.j / s, self.k / s)
    }

    /// Produto de Hamilton `self × other`
    #[inline]
    pub fn hamilton(self, other: Self) -> Self {
        let (ar, ai, aj, ak) = (self.re, self.i, self.j, self.k);
        let (br, bi, bj, bk) = (other.re, other.i, other.j, other.k);
        Self {
            re: ar * br - ai * bi - aj * bj - ak * bk,
            i: ar * bi + ai * br + aj * bk - ak * bj,
            j: ar * bj - ai * bk + aj * br + ak * bi,
            k: ar * bk + ai * bj - aj * bi + ak * br,
        }
    }

    /// Parte complexa `(re, i)`, descartando `j` e `k`
    pub fn complex_part(self) -> Complex64 {
        Complex64::new(self.re, self.i)
    }
}

// =============================================================================
// Conversões
// =============================================================================

impl From<Complex64> for Quaternion {
    /// Alargamento: `j = k = 0`
    fn from(z: Complex64) -> Self {
        Self::new(z.re, z.im, 0.0, 0.0)
    }
}

impl From<f64> for Quaternion {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0, 0.0, 0.0)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from([re, i, j, k]: [f64; 4]) -> Self {
        Self::new(re, i, j, k)
    }
}

impl PartialEq<Complex64> for Quaternion {
    fn eq(&self, other: &Complex64) -> bool {
        *self == Quaternion::from(*other)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i + {}j + {}k", self.re, self.i, self.j, self.k)
    }
}

// =============================================================================
// Operadores
// =============================================================================

impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.i + rhs.i, self.j + rhs.j, self.k + rhs.k)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.i - rhs.i, self.j - rhs.j, self.k - rhs.k)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.hamilton(rhs)
    }
}

impl Div for Quaternion {
    type Output = Self;

    /// `self × rhs⁻¹` (divisão à direita)
    fn div(self, rhs: Self) -> Self::Output {
        self.hamilton(rhs.inv())
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Div<f64> for Quaternion {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        self.unscale(rhs)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.i, -self.j, -self.k)
    }
}

impl Zero for Quaternion {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.i == 0.0 && self.j == 0.0 && self.k == 0.0
    }
}

impl One for Quaternion {
    fn one() -> Self {
        Self::ONE
    }
}
