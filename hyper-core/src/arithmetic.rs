//! # Regras Aritméticas
//!
//! Todas as combinações de tipos passam por [`combine`]: os operandos são
//! alargados para o tipo mais largo e a fórmula desse tipo é aplicada.
//!
//! | esquerda   | direita    | resultado  |
//! |------------|------------|------------|
//! | Complex    | Complex    | Complex    |
//! | Complex    | Quaternion | Quaternion |
//! | Quaternion | Complex    | Quaternion |
//! | Quaternion | Quaternion | Quaternion |
//!
//! A divisão é sempre `a × b⁻¹` (à direita). Não é comutativa nem
//! associativa entre tipos. Dividir por zero segue IEEE-754 (inf/NaN);
//! quem precisa de proteção é a calculadora.

use crate::quaternion::Quaternion;
use crate::value::{HyperComplex, Kind};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Operação binária
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Op {
    pub const ALL: [Op; 4] = [Op::Add, Op::Subtract, Op::Multiply, Op::Divide];

    /// Símbolo infixo
    pub fn symbol(&self) -> char {
        match self {
            Op::Add => '+',
            Op::Subtract => '-',
            Op::Multiply => '*',
            Op::Divide => '/',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Subtract => "subtract",
            Op::Multiply => "multiply",
            Op::Divide => "divide",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Tipo do resultado de `lhs op rhs`
#[inline]
pub fn result_kind(lhs: &HyperComplex, rhs: &HyperComplex) -> Kind {
    lhs.kind().widest(rhs.kind())
}

/// Aplica `lhs op rhs` no tipo mais largo dos dois operandos
pub fn combine(lhs: &HyperComplex, op: Op, rhs: &HyperComplex) -> HyperComplex {
    match (lhs.as_complex(), rhs.as_complex()) {
        (Some(a), Some(b)) => HyperComplex::Complex(complex_op(a, op, b)),
        _ => HyperComplex::Quaternion(quaternion_op(lhs.to_quaternion(), op, rhs.to_quaternion())),
    }
}

/// Aplica `value op scalar`
///
/// Soma e subtração alteram apenas a parte real; produto e divisão
/// escalam todos os componentes. O tipo é preservado.
pub fn combine_scalar(value: &HyperComplex, op: Op, scalar: f64) -> HyperComplex {
    match *value {
        HyperComplex::Complex(z) => HyperComplex::Complex(match op {
            Op::Add => z + scalar,
            Op::Subtract => z - scalar,
            Op::Multiply => z * scalar,
            Op::Divide => z / scalar,
        }),
        HyperComplex::Quaternion(q) => HyperComplex::Quaternion(match op {
            Op::Add => Quaternion { re: q.re + scalar, ..q },
            Op::Subtract => Quaternion { re: q.re - scalar, ..q },
            Op::Multiply => q.scale(scalar),
            Op::Divide => q.unscale(scalar),
        }),
    }
}

#[inline]
fn complex_op(a: Complex64, op: Op, b: Complex64) -> Complex64 {
    match op {
        Op::Add => a + b,
        Op::Subtract => a - b,
        Op::Multiply => a * b,
        Op::Divide => a / b,
    }
}

#[inline]
fn quaternion_op(a: Quaternion, op: Op, b: Quaternion) -> Quaternion {
    match op {
        Op::Add => a + b,
        Op::Subtract => a - b,
        Op::Multiply => a * b,
        Op::Divide => a / b,
    }
}

// =============================================================================
// Operadores
// =============================================================================

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:expr) => {
        impl $trait for HyperComplex {
            type Output = HyperComplex;

            fn $method(self, rhs: HyperComplex) -> HyperComplex {
                combine(&self, $op, &rhs)
            }
        }

        impl<'a> $trait<&'a HyperComplex> for &'a HyperComplex {
            type Output = HyperComplex;

            fn $method(self, rhs: &'a HyperComplex) -> HyperComplex {
                combine(self, $op, rhs)
            }
        }

        impl $trait<f64> for HyperComplex {
            type Output = HyperComplex;

            fn $method(self, rhs: f64) -> HyperComplex {
                combine_scalar(&self, $op, rhs)
            }
        }

        // Só com escalar: o tipo de `self` nunca muda no lugar
        impl $assign_trait<f64> for HyperComplex {
            fn $assign_method(&mut self, rhs: f64) {
                *self = combine_scalar(self, $op, rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, Op::Add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, Op::Subtract);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, Op::Multiply);
impl_binary_op!(Div, div, DivAssign, div_assign, Op::Divide);

impl Neg for HyperComplex {
    type Output = HyperComplex;

    fn neg(self) -> HyperComplex {
        match self {
            HyperComplex::Complex(z) => HyperComplex::Complex(-z),
            HyperComplex::Quaternion(q) => HyperComplex::Quaternion(-q),
        }
    }
}
