// src/noyau/scientifique.rs
//
// Fonctions scalaires (radians) : sqrt, sin, cos, tan.
// Hors de `evaluate` : un nom de fonction y reste un jeton invalide.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::erreur::{ErreurCalcul, Resultat};

/// En dessous de ce |cos x|, tan x est considéré sur un pôle.
const SEUIL_POLE_TAN: f64 = 1e-10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sqrt,
    Sin,
    Cos,
    Tan,
}

impl Fonction {
    pub const TOUTES: [Fonction; 4] = [Fonction::Sqrt, Fonction::Sin, Fonction::Cos, Fonction::Tan];

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sqrt => "sqrt",
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
        }
    }

    pub fn appliquer(self, x: f64) -> Resultat<f64> {
        match self {
            Fonction::Sqrt => racine(x),
            Fonction::Sin => Ok(Float::sin(x)),
            Fonction::Cos => Ok(Float::cos(x)),
            Fonction::Tan => tangente(x),
        }
    }
}

impl fmt::Display for Fonction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

impl FromStr for Fonction {
    type Err = ErreurCalcul;

    /// Insensible à la casse ; "√" vaut "sqrt".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let w = s.trim().to_lowercase();
        match w.as_str() {
            "sqrt" | "√" => Ok(Fonction::Sqrt),
            "sin" => Ok(Fonction::Sin),
            "cos" => Ok(Fonction::Cos),
            "tan" => Ok(Fonction::Tan),
            _ => Err(ErreurCalcul::UnknownOperator(s.to_string())),
        }
    }
}

fn racine(x: f64) -> Resultat<f64> {
    if x < 0.0 {
        return Err(ErreurCalcul::DomainError {
            fonction: Fonction::Sqrt.nom().to_string(),
            valeur: x,
        });
    }
    Ok(Float::sqrt(x))
}

fn tangente(x: f64) -> Resultat<f64> {
    let c = Float::cos(x);
    if Float::abs(c) < SEUIL_POLE_TAN {
        return Err(ErreurCalcul::DivisionByZero);
    }
    Ok(Float::sin(x) / c)
}

/// Puissance (même calcul que l’opérateur `^`).
pub fn puissance(base: f64, exposant: f64) -> f64 {
    Float::powf(base, exposant)
}

/// API publique : applique une fonction nommée.
pub fn apply_function(nom: &str, x: f64) -> Resultat<f64> {
    nom.parse::<Fonction>()?.appliquer(x)
}
