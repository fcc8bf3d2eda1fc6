//! # HyperComplex — Valor Polimórfico
//!
//! União fechada sobre os dois tipos numéricos suportados. O tipo (`Kind`)
//! é fixado na construção; alargar um complexo para quatérnio produz um
//! novo valor.
//!
//! ```text
//! Complex     re + i·I                  (j = k = 0 implícitos)
//! Quaternion  re + i·I + j·J + k·K
//! ```

use crate::error::{HyperError, HyperResult};
use crate::quaternion::Quaternion;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Discriminador em tempo de execução
///
/// A ordem das variantes é a ordem de alargamento: `Complex < Quaternion`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Kind {
    #[default]
    Complex,
    Quaternion,
}

impl Kind {
    /// Tipo mais largo entre dois operandos
    #[inline]
    pub fn widest(self, other: Kind) -> Kind {
        self.max(other)
    }

    /// Número de componentes imaginários
    pub const fn imaginary_arity(self) -> usize {
        match self {
            Kind::Complex => 1,
            Kind::Quaternion => 3,
        }
    }

    /// Nome descritivo
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Complex => "Complex",
            Kind::Quaternion => "Quaternion",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Número complexo ou quatérnio
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum HyperComplex {
    Complex(Complex64),
    Quaternion(Quaternion),
}

impl Default for HyperComplex {
    fn default() -> Self {
        Self::Complex(Complex64::new(0.0, 0.0))
    }
}

impl HyperComplex {
    // =========================================================================
    // Construtores
    // =========================================================================

    /// Cria número complexo `re + im·I`
    pub const fn complex(re: f64, im: f64) -> Self {
        Self::Complex(Complex64::new(re, im))
    }

    /// Cria quatérnio `re + i·I + j·J + k·K`
    pub const fn quaternion(re: f64, i: f64, j: f64, k: f64) -> Self {
        Self::Quaternion(Quaternion::new(re, i, j, k))
    }

    /// Zero do tipo pedido
    pub const fn zero(kind: Kind) -> Self {
        match kind {
            Kind::Complex => Self::complex(0.0, 0.0),
            Kind::Quaternion => Self::quaternion(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Um do tipo pedido
    pub const fn one(kind: Kind) -> Self {
        match kind {
            Kind::Complex => Self::complex(1.0, 0.0),
            Kind::Quaternion => Self::quaternion(1.0, 0.0, 0.0, 0.0),
        }
    }

    /// Cria valor a partir de `[re, i]` ou `[re, i, j, k]`
    ///
    /// Retorna `None` para qualquer outro comprimento.
    pub fn from_components(components: &[f64]) -> Option<Self> {
        match *components {
            [re, i] => Some(Self::complex(re, i)),
            [re, i, j, k] => Some(Self::quaternion(re, i, j, k)),
            _ => None,
        }
    }

    // =========================================================================
    // Tipo e alargamento
    // =========================================================================

    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Complex(_) => Kind::Complex,
            Self::Quaternion(_) => Kind::Quaternion,
        }
    }

    /// Visão quaterniônica do valor (complexos recebem `j = k = 0`)
    #[inline]
    pub fn to_quaternion(&self) -> Quaternion {
        match *self {
            Self::Complex(z) => Quaternion::from(z),
            Self::Quaternion(q) => q,
        }
    }

    /// Novo valor do tipo `Quaternion` com o mesmo significado numérico
    pub fn widen(&self) -> Self {
        Self::Quaternion(self.to_quaternion())
    }

    /// Alarga para `kind` se necessário; nunca estreita
    #[inline]
    pub fn widen_to(&self, kind: Kind) -> Self {
        match (self, kind) {
            (Self::Complex(_), Kind::Quaternion) => self.widen(),
            _ => *self,
        }
    }

    /// O número complexo, se o valor não for quatérnio
    pub fn as_complex(&self) -> Option<Complex64> {
        match *self {
            Self::Complex(z) => Some(z),
            Self::Quaternion(_) => None,
        }
    }

    // =========================================================================
    // Leitura de componentes
    // =========================================================================

    #[inline]
    pub fn real(&self) -> f64 {
        match self {
            Self::Complex(z) => z.re,
            Self::Quaternion(q) => q.re,
        }
    }

    #[inline]
    pub fn i(&self) -> f64 {
        match self {
            Self::Complex(z) => z.im,
            Self::Quaternion(q) => q.i,
        }
    }

    /// Componente J (0 para complexos)
    #[inline]
    pub fn j(&self) -> f64 {
        match self {
            Self::Complex(_) => 0.0,
            Self::Quaternion(q) => q.j,
        }
    }

    /// Componente K (0 para complexos)
    #[inline]
    pub fn k(&self) -> f64 {
        match self {
            Self::Complex(_) => 0.0,
            Self::Quaternion(q) => q.k,
        }
    }

    /// Componentes na ordem `[re, i, j, k]`
    pub fn components(&self) -> [f64; 4] {
        self.to_quaternion().to_array()
    }

    // =========================================================================
    // Escrita de componentes
    // =========================================================================

    pub fn set_real(&mut self, re: f64) {
        match self {
            Self::Complex(z) => z.re = re,
            Self::Quaternion(q) => q.re = re,
        }
    }

    pub fn set_i(&mut self, i: f64) {
        match self {
            Self::Complex(z) => z.im = i,
            Self::Quaternion(q) => q.i = i,
        }
    }

    /// Escreve J; apenas quatérnios possuem esse componente
    pub fn set_j(&mut self, j: f64) -> HyperResult<()> {
        match self {
            Self::Quaternion(q) => {
                q.j = j;
                Ok(())
            }
            Self::Complex(_) => Err(self.missing('j')),
        }
    }

    /// Escreve K; apenas quatérnios possuem esse componente
    pub fn set_k(&mut self, k: f64) -> HyperResult<()> {
        match self {
            Self::Quaternion(q) => {
                q.k = k;
                Ok(())
            }
            Self::Complex(_) => Err(self.missing('k')),
        }
    }

    /// Escreve todos os componentes imaginários de uma vez
    ///
    /// Complexos exigem exatamente 1 coeficiente, quatérnios exatamente 3.
    /// Em caso de aridade errada nada é escrito.
    pub fn set_imaginary(&mut self, imaginary: &[f64]) -> HyperResult<()> {
        match (self, imaginary) {
            (Self::Complex(z), &[i]) => {
                z.im = i;
                Ok(())
            }
            (Self::Quaternion(q), &[i, j, k]) => {
                q.i = i;
                q.j = j;
                q.k = k;
                Ok(())
            }
            (value, _) => {
                let kind = value.kind();
                let err = HyperError::ImaginaryArity {
                    kind,
                    expected: kind.imaginary_arity(),
                    found: imaginary.len(),
                };
                warn!(%kind, found = imaginary.len(), "{err}");
                Err(err)
            }
        }
    }

    fn missing(&self, component: char) -> HyperError {
        let err = HyperError::MissingComponent { kind: self.kind(), component };
        warn!("{err}");
        err
    }

    // =========================================================================
    // Utilitários
    // =========================================================================

    /// Conjugado, preservando o tipo
    pub fn conj(&self) -> Self {
        match *self {
            Self::Complex(z) => Self::Complex(z.conj()),
            Self::Quaternion(q) => Self::Quaternion(q.conj()),
        }
    }

    /// Módulo ao quadrado
    pub fn norm_sqr(&self) -> f64 {
        match *self {
            Self::Complex(z) => z.norm_sqr(),
            Self::Quaternion(q) => q.norm_sqr(),
        }
    }

    /// Igual ao escalar 0 (comparação exata)
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == 0.0
    }

    /// Comparação com tolerância absoluta por componente
    ///
    /// A igualdade `==` é exata; use este método quando erros de
    /// arredondamento forem esperados.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.components()
            .iter()
            .zip(other.components().iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Representação textual de diagnóstico
    pub fn show(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Conversões
// =============================================================================

impl From<Complex64> for HyperComplex {
    fn from(z: Complex64) -> Self {
        Self::Complex(z)
    }
}

impl From<Quaternion> for HyperComplex {
    fn from(q: Quaternion) -> Self {
        Self::Quaternion(q)
    }
}

impl From<f64> for HyperComplex {
    fn from(re: f64) -> Self {
        Self::complex(re, 0.0)
    }
}

impl fmt::Display for HyperComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complex(z) => write!(f, "{} + {}i", z.re, z.im),
            Self::Quaternion(q) => write!(f, "{q}"),
        }
    }
}
