//! Configuração via `.env` ou variáveis de ambiente
//!
//! - `HYPERCALC_STACK_CAPACITY`: capacidade inicial da pilha (padrão 16)
//! - `HYPERCALC_LOG`: filtro de logs usado pelo CLI quando `RUST_LOG`
//!   não está definido

use once_cell::sync::Lazy;
use std::env;

/// Capacidade inicial padrão da pilha
pub const DEFAULT_STACK_CAPACITY: usize = 16;

/// Filtro de logs padrão
pub const DEFAULT_LOG_FILTER: &str = "hyper_calc=info,hyper_core=info";

// Carrega .env na primeira leitura de configuração
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Capacidade inicial da pilha de operandos
pub fn stack_capacity() -> usize {
    ensure_loaded();
    parse_capacity(env::var("HYPERCALC_STACK_CAPACITY").ok().as_deref())
}

/// Interpreta o valor bruto; ausente ou inválido vira o padrão
pub fn parse_capacity(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_STACK_CAPACITY)
}

/// Diretiva de filtro para `tracing-subscriber`
pub fn log_filter() -> String {
    ensure_loaded();
    env::var("HYPERCALC_LOG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Configuração da calculadora
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Capacidade reservada para a pilha na criação
    pub initial_capacity: usize,
}

impl CalculatorConfig {
    /// Lê a configuração do ambiente
    pub fn from_env() -> Self {
        Self {
            initial_capacity: stack_capacity(),
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
