use std::collections::HashSet;

use approx::assert_relative_eq;
use quadsys::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SUM_TOL: f64 = 1e-9;

fn render(n: usize, eps: f64, seed: u64) -> String {
    let mut out = Vec::new();
    generate(n, eps, &mut StdRng::seed_from_u64(seed), &mut out).expect("generation");
    String::from_utf8(out).expect("utf8 output")
}

fn expected_budget(n: usize, eps: f64) -> usize {
    ((eps * (n * (n - 1) / 2) as f64).floor() as usize).max(2)
}

/// Parses every line and checks the structural properties of each rule
fn assert_well_formed(text: &str, n: usize, eps: f64) -> Vec<Equation> {
    let k = expected_budget(n, eps);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), n, "one line per variable");

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            assert_eq!(line.split(" | ").count(), k, "addends in line {}: {}", i, line);
            let eq: Equation = line.parse().expect("rule parses back");
            assert_eq!(eq.lhs().index(), i, "lines are in index order");
            assert_eq!(eq.terms().len(), k - 1);

            assert_relative_eq!(eq.coefficient_sum(), 1.0, epsilon = SUM_TOL);
            assert!(eq.coefficients().all(|c| c >= 0.0));

            let distinct: HashSet<Monomial> = eq.monomials().collect();
            assert_eq!(distinct.len(), k - 1, "no monomial twice in line {}", i);
            for m in eq.monomials() {
                assert!(m.first() < m.second());
                assert!(m.second().index() < n, "unknown variable in {}", line);
            }
            eq
        })
        .collect()
}

#[test]
fn two_variables_full_density() {
    let text = render(2, 1.0, 1);
    let equations = assert_well_formed(&text, 2, 1.0);
    for (line, eq) in text.lines().zip(&equations) {
        assert_eq!(eq.terms().len(), 1);
        assert_eq!(eq.terms()[0].monomial.to_string(), "<x0><x1>");
        assert!(line.contains(" <x0><x1> | "));
    }
    assert!(text.lines().next().unwrap().starts_with("<x0> ::= "));
    assert!(text.lines().nth(1).unwrap().starts_with("<x1> ::= "));
}

#[test]
fn sparse_small_system_is_clamped_to_two_addends() {
    let text = render(3, 0.1, 2);
    let equations = assert_well_formed(&text, 3, 0.1);
    assert!(equations.iter().all(|eq| eq.addends() == 2));
}

#[test]
fn three_variables_full_density() {
    let text = render(3, 1.0, 3);
    let universe: HashSet<String> = ["<x0><x1>", "<x0><x2>", "<x1><x2>"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for eq in assert_well_formed(&text, 3, 1.0) {
        assert_eq!(eq.terms().len(), 2);
        let a = eq.terms()[0].monomial;
        let b = eq.terms()[1].monomial;
        assert_ne!(a, b);
        assert!(universe.contains(&a.to_string()));
        assert!(universe.contains(&b.to_string()));
    }
}

#[test]
fn larger_systems_hold_every_property() {
    for (n, eps, seed) in [(14, 0.7, 10), (25, 0.05, 11), (40, 0.01, 12), (9, 1.0, 13)] {
        assert_well_formed(&render(n, eps, seed), n, eps);
    }
}

#[test]
fn single_variable_fails_without_output() {
    let mut out = Vec::new();
    let result = generate(1, 1.0, &mut StdRng::seed_from_u64(0), &mut out);
    assert!(matches!(result, Err(QuadsysError::TooFewVariables(1))));
    assert!(out.is_empty());
}

#[test]
fn invalid_parameters_fail_without_output() {
    for (n, eps) in [(0, 0.5), (5, 0.0), (5, 1.01), (5, -1.0), (5, f64::NAN)] {
        let mut out = Vec::new();
        assert!(generate(n, eps, &mut StdRng::seed_from_u64(0), &mut out).is_err());
        assert!(out.is_empty(), "n={} eps={} wrote output", n, eps);
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    assert_eq!(render(10, 0.4, 99), render(10, 0.4, 99));
    assert_ne!(render(10, 0.4, 99), render(10, 0.4, 100));
}

#[test]
fn equations_draw_their_own_monomials() {
    // With many variables and a tiny budget, identical right-hand sides
    // across all equations would mean the draws are shared.
    let text = render(30, 0.01, 5);
    let equations = assert_well_formed(&text, 30, 0.01);
    let first: Vec<Monomial> = equations[0].monomials().collect();
    assert!(equations
        .iter()
        .skip(1)
        .any(|eq| eq.monomials().collect::<Vec<_>>() != first));
}

#[test]
fn parallel_generation_holds_every_property() {
    let generator = Generator::new(SystemConfig::new(16, 0.25).unwrap()).unwrap();
    let system = generator.generate_par(&mut StdRng::seed_from_u64(8));
    let mut out = Vec::new();
    system.emit(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let parsed = assert_well_formed(&text, 16, 0.25);
    assert_eq!(parsed, system.equations());

    let again = generator.generate_par(&mut StdRng::seed_from_u64(8));
    assert_eq!(again, system);
}
