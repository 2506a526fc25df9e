//! Tests de lois : propriétés de la réduction gauche-à-droite et du registre.
//!
//! Grilles fixes de valeurs (pas de RNG ici) :
//! - division fidèle au flottant, division par zéro toujours signalée
//! - pas de priorité
//! - alias équivalents au symbole
//! - pureté (mêmes entrées => mêmes sorties)

use super::{apply_operation, evaluate, ErreurCalcul, Operateur};

const VALEURS: [f64; 10] = [-1e6, -7.5, -2.0, -0.25, 0.0, 0.125, 1.0, 3.0, 42.0, 1e9];

#[test]
fn loi_division() {
    for a in VALEURS {
        for b in VALEURS {
            let expr = format!("{a} / {b}");
            let r = evaluate(&expr);
            if b == 0.0 {
                assert_eq!(r, Err(ErreurCalcul::DivisionByZero), "expr={expr:?}");
            } else {
                // 0 + a puis / b : identique à a / b en flottant
                assert_eq!(r, Ok(a / b), "expr={expr:?}");
            }
        }
    }
}

#[test]
fn loi_sans_priorite() {
    for a in VALEURS {
        for b in VALEURS {
            for c in VALEURS {
                let expr = format!("{a} + {b} * {c}");
                assert_eq!(evaluate(&expr), Ok((a + b) * c), "expr={expr:?}");
            }
        }
    }
    assert_eq!(evaluate("2 + 3 * 4"), Ok(20.0));
}

#[test]
fn loi_alias() {
    for op in Operateur::TOUS {
        let Some(alias) = op.alias() else { continue };
        for a in VALEURS {
            for b in [1.0, 2.0, -3.0] {
                assert_eq!(
                    apply_operation(alias, &[a, b]),
                    apply_operation(op.symbole(), &[a, b]),
                    "op={op} a={a} b={b}"
                );
                let e1 = format!("{a} {alias} {b}");
                let e2 = format!("{a} {} {b}", op.symbole());
                assert_eq!(evaluate(&e1), evaluate(&e2), "e1={e1:?}");
            }
        }
    }
}

#[test]
fn loi_evaluate_vs_apply_operation() {
    // pour les opérateurs binaires, "a op b" (après 0 + a) = apply_operation(op, [a, b])
    for op in ["+", "-", "*", "/", "%"] {
        for a in VALEURS {
            for b in [1.0, -2.0, 0.5, 7.0] {
                let expr = format!("{a} {op} {b}");
                assert_eq!(evaluate(&expr), apply_operation(op, &[a, b]), "expr={expr:?}");
            }
        }
    }
}

#[test]
fn loi_purete() {
    let exprs = ["", "1 + 2", "2 + 3 * 4", "9 / 0", "x", "5 neg 1", "(1) (2)"];
    for e in exprs {
        let premier = evaluate(e);
        for _ in 0..5 {
            assert_eq!(evaluate(e), premier, "e={e:?}");
        }
    }
}

#[test]
fn loi_identites() {
    assert_eq!(apply_operation("sum", &[]), Ok(0.0));
    assert_eq!(apply_operation("product", &[]), Ok(1.0));
    for a in VALEURS {
        assert_eq!(apply_operation("sum", &[a]), Ok(a));
        assert_eq!(apply_operation("product", &[a]), Ok(a));
    }
}

#[test]
fn loi_erreurs_registre() {
    assert_eq!(
        apply_operation("xyz", &[1.0, 2.0]),
        Err(ErreurCalcul::UnknownOperator("xyz".into()))
    );
    assert!(matches!(
        apply_operation("neg", &[1.0, 2.0]),
        Err(ErreurCalcul::InvalidArity { .. })
    ));
}
