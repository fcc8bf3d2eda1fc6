//! Bateria de verificações da API pública
//!
//! Cada verificação vira uma linha ✓/✗ no relatório. Nenhuma entra em
//! pânico: uma falha é apenas registrada.

use hyper_calc::{CalcError, Calculator, CalculatorConfig, Operand};
use hyper_core::prelude::*;
use std::rc::Rc;
use tracing::{info, warn};

/// Resultado de uma verificação
#[derive(Debug, Clone)]
pub struct Check {
    pub group: &'static str,
    pub name: &'static str,
    pub passed: bool,
}

/// Relatório acumulado
#[derive(Debug, Default)]
pub struct Report {
    checks: Vec<Check>,
}

impl Report {
    fn check(&mut self, group: &'static str, name: &'static str, passed: bool) {
        if !passed {
            warn!(group, name, "check failed");
        }
        self.checks.push(Check { group, name, passed });
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    pub fn failed(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Executa todas as verificações
pub fn run() -> Report {
    let mut report = Report::default();
    construction(&mut report);
    equality(&mut report);
    arithmetic(&mut report);
    calculator(&mut report);
    info!(total = report.checks.len(), failed = report.failed(), "selftest finished");
    report
}

fn c(re: f64, im: f64) -> HyperComplex {
    HyperComplex::complex(re, im)
}

fn q(re: f64, i: f64, j: f64, k: f64) -> HyperComplex {
    HyperComplex::quaternion(re, i, j, k)
}

fn rounded(value: &HyperComplex) -> [f64; 4] {
    value.components().map(|x| (x * 1000.0).round() / 1000.0)
}

fn construction(r: &mut Report) {
    const G: &str = "construction";

    let a = HyperComplex::default();
    r.check(G, "default complex is zero", a.kind() == Kind::Complex && a.real() == 0.0 && a.i() == 0.0);

    let mut z = c(1.0, 2.0);
    r.check(G, "complex components", z.real() == 1.0 && z.i() == 2.0);
    z.set_real(4.0);
    z.set_i(5.0);
    r.check(G, "complex setters", z.real() == 4.0 && z.i() == 5.0);
    r.check(G, "complex set_imaginary([6])", z.set_imaginary(&[6.0]).is_ok() && z.i() == 6.0);
    r.check(
        G,
        "complex set_imaginary arity mismatch leaves value",
        z.set_imaginary(&[1.0, 2.0]).is_err() && z.i() == 6.0,
    );
    r.check(G, "complex has no j component", z.set_j(1.0).is_err() && z.kind() == Kind::Complex);

    let mut h = HyperComplex::zero(Kind::Quaternion);
    r.check(G, "default quaternion is zero", h.components() == [0.0; 4]);
    h.set_real(1.0);
    h.set_i(10.0);
    let jk_ok = h.set_j(11.0).is_ok() && h.set_k(12.0).is_ok();
    r.check(G, "quaternion setters", jk_ok && h.components() == [1.0, 10.0, 11.0, 12.0]);
    r.check(
        G,
        "quaternion set_imaginary([1, 5, 9])",
        h.set_imaginary(&[1.0, 5.0, 9.0]).is_ok() && h.components() == [1.0, 1.0, 5.0, 9.0],
    );
    r.check(
        G,
        "quaternion set_imaginary arity mismatch leaves value",
        h.set_imaginary(&[2.0]).is_err() && h.components() == [1.0, 1.0, 5.0, 9.0],
    );
    r.check(G, "kind tags", h.kind() == Kind::Quaternion && c(0.0, 0.0).kind() == Kind::Complex);
}

fn equality(r: &mut Report) {
    const G: &str = "equality";

    r.check(G, "complex == complex", c(2.0, 3.0) == c(2.0, 3.0) && c(2.0, 3.0) != c(4.0, 5.0));
    r.check(G, "complex == scalar", c(0.0, 0.0) == 0.0 && c(2.0, 3.0) != 0.0);
    r.check(G, "quaternion == quaternion", q(1.0, 2.0, 3.0, 4.0) == q(1.0, 2.0, 3.0, 4.0));
    r.check(G, "quaternion(1,2,0,0) == complex(1,2)", q(1.0, 2.0, 0.0, 0.0) == c(1.0, 2.0));
    r.check(G, "quaternion(1,2,3,0) != complex(1,2)", q(1.0, 2.0, 3.0, 0.0) != c(1.0, 2.0));
}

fn arithmetic(r: &mut Report) {
    const G: &str = "arithmetic";
    let c1 = c(2.0, 3.0);
    let c2 = c(4.0, 5.0);
    let q1 = q(1.0, 2.0, 3.0, 4.0);

    r.check(G, "c1 + c2", c1 + c2 == c(6.0, 8.0));
    r.check(G, "c1 - c2", c1 - c2 == c(-2.0, -2.0));
    r.check(G, "c1 * c2", c1 * c2 == c(-7.0, 22.0));
    r.check(G, "c1 / c2", rounded(&(c1 / c2)) == [0.561, 0.049, 0.0, 0.0]);
    r.check(G, "c1 + 2, c1 - 2", c1 + 2.0 == c(4.0, 3.0) && c1 - 2.0 == c(0.0, 3.0));
    r.check(G, "c1 * 2, c1 / 2", c1 * 2.0 == c(4.0, 6.0) && c1 / 2.0 == c(1.0, 1.5));

    r.check(G, "q1 + q1", q1 + q1 == q(2.0, 4.0, 6.0, 8.0));
    r.check(G, "q1 - q1", q1 - q1 == q(0.0, 0.0, 0.0, 0.0));
    r.check(G, "q1 * q1", q1 * q1 == q(-28.0, 4.0, 6.0, 8.0));
    r.check(G, "q1 / q1", rounded(&(q1 / q1)) == [1.0, 0.0, 0.0, 0.0]);
    r.check(G, "q1 + c1", q1 + c1 == q(3.0, 5.0, 3.0, 4.0));
    r.check(G, "q1 - c1", q1 - c1 == q(-1.0, -1.0, 3.0, 4.0));
    r.check(G, "q1 * c1", q1 * c1 == q(-4.0, 7.0, 18.0, -1.0));
    r.check(G, "q1 / c1", rounded(&(q1 / c1)) == [0.615, 0.077, -0.462, 1.308]);
    r.check(G, "q1 + 2, q1 - 2", q1 + 2.0 == q(3.0, 2.0, 3.0, 4.0) && q1 - 2.0 == q(-1.0, 2.0, 3.0, 4.0));
    r.check(G, "q1 * 2, q1 / 2", q1 * 2.0 == q(2.0, 4.0, 6.0, 8.0) && q1 / 2.0 == q(0.5, 1.0, 1.5, 2.0));
    r.check(G, "c1 + q1 == q1 + c1", c1 + q1 == q1 + c1);
    r.check(G, "c1 * q1 == widened c1 * q1", c1 * q1 == c1.widen() * q1);
    r.check(G, "c1 * q1 != q1 * c1", c1 * q1 != q1 * c1);
}

fn calculator(r: &mut Report) {
    const G: &str = "calculator";
    let config = CalculatorConfig::from_env();
    let c1: Operand = Rc::new(c(2.0, 3.0));
    let c2: Operand = Rc::new(c(4.0, 5.0));
    let q1: Operand = Rc::new(q(1.0, 2.0, 3.0, 4.0));
    let q2: Operand = Rc::new(q(1.0, 2.0, 3.0, 4.0));

    let mut calc = Calculator::with_config(config.clone());
    r.check(G, "empty stack reports EmptyStack", calc.calculate(Op::Add) == Err(CalcError::EmptyStack));
    calc.push(&c1);
    r.check(G, "top is the pushed operand", calc.top().is_some_and(|t| Rc::ptr_eq(t, &c1)));
    r.check(
        G,
        "single operand reports SingleOperand",
        calc.calculate(Op::Add) == Err(CalcError::SingleOperand) && calc.size() == 1,
    );
    calc.push(&c2);
    r.check(G, "size after two pushes", calc.size() == 2);

    let copy_source = Calculator::from_stack(vec![Rc::clone(&c2), Rc::clone(&c1)]);
    let mut copy = copy_source.clone();
    let mut source = copy_source;
    let same = match (copy.calculate(Op::Add), source.calculate(Op::Add)) {
        (Ok(a), Ok(b)) => *a == *b && copy.size() == source.size(),
        _ => false,
    };
    r.check(G, "copied calculator computes independently", same && copy.owned_results() == 1);

    for op in Op::ALL {
        let ok = chain(&mut calc, op, &c1, &c2, &[&q1, &c2, &q2]);
        r.check(G, chain_name(op), ok);
    }

    let one: Operand = Rc::new(c(1.0, 0.0));
    let zero: Operand = Rc::new(c(0.0, 0.0));
    let mut guard = Calculator::with_config(config);
    guard.push(&one);
    guard.push(&zero);
    let restored = guard.calculate(Op::Divide) == Err(CalcError::DivisionByZero)
        && guard.size() == 2
        && guard.top().is_some_and(|t| Rc::ptr_eq(t, &zero))
        && Rc::ptr_eq(&guard.operands()[0], &one);
    r.check(G, "division by zero restores operand order", restored);

    let zero_q: Operand = Rc::new(q(0.0, 0.0, 0.0, 0.0));
    let mut all_guarded = true;
    for (dividend, divisor) in [(&c2, &zero), (&c2, &zero_q), (&q2, &zero), (&q2, &zero_q)] {
        let before = guard.size();
        guard.push(dividend);
        guard.push(divisor);
        all_guarded &= guard.calculate(Op::Divide).is_err() && guard.size() == before + 2;
    }
    r.check(G, "division by zero guarded for every kind pair", all_guarded);
}

/// `first op second`, depois `resultado op x` para cada x de `rest`
///
/// O primeiro passo deve ser complexo; os demais, quatérnios.
fn chain(calc: &mut Calculator, op: Op, first: &Operand, second: &Operand, rest: &[&Operand]) -> bool {
    calc.push(first);
    calc.push(second);
    let Ok(mut previous) = calc.calculate(op) else {
        return false;
    };
    let mut ok = previous.kind() == Kind::Complex && *previous == combine(first, op, second);

    for operand in rest {
        calc.push(operand);
        let Ok(result) = calc.calculate(op) else {
            return false;
        };
        ok &= result.kind() == Kind::Quaternion && *result == combine(&previous, op, operand);
        previous = result;
    }
    ok
}

fn chain_name(op: Op) -> &'static str {
    match op {
        Op::Add => "add chain over mixed kinds",
        Op::Subtract => "subtract chain over mixed kinds",
        Op::Multiply => "multiply chain over mixed kinds",
        Op::Divide => "divide chain over mixed kinds",
    }
}
