//! Igualdade ciente do tipo
//!
//! Um complexo é igual a um quatérnio quando `re` e `i` coincidem e o
//! quatérnio tem `j = k = 0`. A comparação de componentes é `==` exato em
//! `f64`, sem tolerância; veja [`HyperComplex::approx_eq`].

use crate::quaternion::Quaternion;
use crate::value::HyperComplex;
use num_complex::Complex64;

impl PartialEq for HyperComplex {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (HyperComplex::Complex(a), HyperComplex::Complex(b)) => a == b,
            (HyperComplex::Quaternion(a), HyperComplex::Quaternion(b)) => a == b,
            // Tipos mistos: alarga o complexo
            _ => self.to_quaternion() == other.to_quaternion(),
        }
    }
}

impl PartialEq<f64> for HyperComplex {
    /// `re == scalar` e todos os imaginários nulos
    fn eq(&self, scalar: &f64) -> bool {
        let [re, i, j, k] = self.components();
        re == *scalar && i == 0.0 && j == 0.0 && k == 0.0
    }
}

impl PartialEq<HyperComplex> for f64 {
    fn eq(&self, value: &HyperComplex) -> bool {
        value == self
    }
}

impl PartialEq<Complex64> for HyperComplex {
    fn eq(&self, other: &Complex64) -> bool {
        *self == HyperComplex::Complex(*other)
    }
}

impl PartialEq<Quaternion> for HyperComplex {
    fn eq(&self, other: &Quaternion) -> bool {
        *self == HyperComplex::Quaternion(*other)
    }
}
