//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - erreurs attendues seulement : jeton invalide, division par zéro
//! - invariant clé : la démarche rejoue exactement la valeur finale

use std::time::{Duration, Instant};

use super::eval::{evaluate, evaluate_detaille};
use super::operateur::{apply_operation, Operateur};
use super::ErreurCalcul;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits nombres, 0 inclus (utile pour / 0 et % 0)
    match rng.pick(8) {
        0 => "0".into(),
        1 => "1".into(),
        2 => "-2".into(),
        3 => "3.5".into(),
        4 => "0.25".into(),
        5 => "10".into(),
        6 => "-0.5".into(),
        _ => "7".into(),
    }
}

fn gen_operateur(rng: &mut Rng) -> String {
    let op = Operateur::TOUS[rng.pick(Operateur::TOUS.len() as u32) as usize];
    match op.alias() {
        Some(a) if rng.pick(2) == 0 => a.to_string(),
        _ => op.symbole().to_string(),
    }
}

fn gen_expression(rng: &mut Rng, max_jetons: u32) -> String {
    let n = rng.pick(max_jetons + 1);
    let mut mots = Vec::with_capacity(n as usize);
    for _ in 0..n {
        let mot = match rng.pick(10) {
            0..=4 => gen_nombre(rng),
            5..=8 => gen_operateur(rng),
            _ => match rng.pick(3) {
                0 => "(".to_string(),
                1 => ")".to_string(),
                _ => "zz".to_string(), // jeton invalide
            },
        };
        mots.push(mot);
    }
    mots.join(" ")
}

fn is_erreur_attendue(e: &ErreurCalcul) -> bool {
    matches!(
        e,
        ErreurCalcul::InvalidToken(_) | ErreurCalcul::DivisionByZero
    )
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_evaluate_robuste() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..3000 {
        budget(start, max);

        let expr = gen_expression(&mut rng, 12);
        match evaluate_detaille(&expr) {
            Ok(ev) => {
                // la démarche rejoue l’accumulateur, départ à 0
                let mut courant = 0.0_f64;
                for e in &ev.etapes {
                    assert!(
                        e.avant.to_bits() == courant.to_bits(),
                        "démarche discontinue pour {expr:?}"
                    );
                    courant = e.apres;
                }
                assert_eq!(courant.to_bits(), ev.valeur.to_bits(), "expr={expr:?}");

                // aucune division par zéro ne passe en silence
                assert!(ev
                    .etapes
                    .iter()
                    .all(|e| !(matches!(e.operateur, Operateur::Divide | Operateur::Modulo)
                        && e.operande == 0.0)));
            }
            Err(e) => assert!(is_erreur_attendue(&e), "expr={expr:?} err={e}"),
        }
    }
}

#[test]
fn fuzz_deterministe() {
    let mut rng = Rng::new(42);
    for _ in 0..500 {
        let expr = gen_expression(&mut rng, 10);
        let a = evaluate(&expr).map(f64::to_bits);
        let b = evaluate(&expr).map(f64::to_bits);
        assert_eq!(a, b, "expr={expr:?}");
    }
}

#[test]
fn fuzz_apply_operation() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(7);

    for _ in 0..2000 {
        budget(start, max);

        let op = Operateur::TOUS[rng.pick(Operateur::TOUS.len() as u32) as usize];
        let n = rng.pick(5) as usize;
        let operandes: Vec<f64> = (0..n)
            .map(|_| gen_nombre(&mut rng).parse::<f64>().unwrap())
            .collect();

        let r = apply_operation(op.symbole(), &operandes);
        match op {
            Operateur::Negate if n != 1 => {
                assert!(matches!(r, Err(ErreurCalcul::InvalidArity { .. })))
            }
            Operateur::Sum | Operateur::Product | Operateur::Negate => assert!(r.is_ok()),
            _ if n < 2 => assert!(matches!(
                r,
                Err(ErreurCalcul::InsufficientOperands { .. })
            )),
            Operateur::Divide | Operateur::Modulo if operandes[1..].contains(&0.0) => {
                assert_eq!(r, Err(ErreurCalcul::DivisionByZero), "op={op} {operandes:?}")
            }
            _ => assert!(r.is_ok(), "op={op} {operandes:?}"),
        }
    }
}
