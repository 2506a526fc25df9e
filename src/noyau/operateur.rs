// src/noyau/operateur.rs

//! Registre des opérateurs : union fermée + correspondance totale symbole/alias -> opérateur.
//!
//! Deux sémantiques d’application :
//! - `etape`     : un pas de la réduction gauche-à-droite (accumulateur, nombre)
//! - `appliquer` : pli sur une liste d’opérandes (`apply_operation`)

use std::fmt;
use std::str::FromStr;

use num_traits::{One, Zero};

use super::erreur::{ErreurCalcul, Resultat};
use super::scientifique::puissance;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
    Negate,
    Sum,
    Product,
}

/// Arité attendue par `apply_operation`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arite {
    /// Pli gauche, au moins deux opérandes.
    Binaire,
    /// Exactement un opérande.
    Unaire,
    /// N’importe quel nombre d’opérandes (identité si vide).
    Variadique,
}

impl Operateur {
    pub const TOUS: [Operateur; 9] = [
        Operateur::Add,
        Operateur::Subtract,
        Operateur::Multiply,
        Operateur::Divide,
        Operateur::Power,
        Operateur::Modulo,
        Operateur::Negate,
        Operateur::Sum,
        Operateur::Product,
    ];

    /// Symbole ou alias -> opérateur. Sensible à la casse.
    pub fn from_symbole(s: &str) -> Option<Self> {
        use Operateur::*;

        let op = match s {
            "+" | "add" => Add,
            "-" | "subtract" => Subtract,
            "*" | "multiply" => Multiply,
            "/" | "divide" => Divide,
            "^" | "power" => Power,
            "%" | "modulo" => Modulo,
            "neg" => Negate,
            "sum" => Sum,
            "product" => Product,
            _ => return None,
        };
        Some(op)
    }

    /// Symbole canonique (celui qu’on affiche dans la démarche).
    pub fn symbole(self) -> &'static str {
        use Operateur::*;

        match self {
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Divide => "/",
            Power => "^",
            Modulo => "%",
            Negate => "neg",
            Sum => "sum",
            Product => "product",
        }
    }

    /// Alias textuel, s’il existe.
    pub fn alias(self) -> Option<&'static str> {
        use Operateur::*;

        match self {
            Add => Some("add"),
            Subtract => Some("subtract"),
            Multiply => Some("multiply"),
            Divide => Some("divide"),
            Power => Some("power"),
            Modulo => Some("modulo"),
            Negate | Sum | Product => None,
        }
    }

    pub fn arite(self) -> Arite {
        use Operateur::*;

        match self {
            Add | Subtract | Multiply | Divide | Power | Modulo => Arite::Binaire,
            Negate => Arite::Unaire,
            Sum | Product => Arite::Variadique,
        }
    }

    /// Un pas de réduction gauche-à-droite : `acc (op) x`.
    ///
    /// `neg` ignore l’opérande et inverse l’accumulateur ; `sum`/`product` accumulent.
    /// Diviseur nul => erreur AVANT tout calcul.
    pub fn etape(self, acc: f64, x: f64) -> Resultat<f64> {
        use Operateur::*;

        match self {
            Add | Sum => Ok(acc + x),
            Subtract => Ok(acc - x),
            Multiply | Product => Ok(acc * x),
            Divide | Modulo if x.is_zero() => Err(ErreurCalcul::DivisionByZero),
            Divide => Ok(acc / x),
            Modulo => Ok(modulo_plancher(acc, x)),
            Power => Ok(puissance(acc, x)),
            Negate => Ok(-acc),
        }
    }

    /// Application sur une liste d’opérandes (pli gauche ou monoïde selon l’arité).
    pub fn appliquer(self, operandes: &[f64]) -> Resultat<f64> {
        match self.arite() {
            Arite::Unaire => match operandes {
                [x] => Ok(-*x),
                _ => Err(ErreurCalcul::InvalidArity {
                    operateur: self.symbole().to_string(),
                    attendus: 1,
                    recus: operandes.len(),
                }),
            },

            Arite::Variadique => Ok(match self {
                Operateur::Product => operandes.iter().fold(f64::one(), |acc, x| acc * x),
                _ => operandes.iter().fold(f64::zero(), |acc, x| acc + x),
            }),

            Arite::Binaire => {
                let (premier, reste) = match operandes {
                    [premier, reste @ ..] if !reste.is_empty() => (*premier, reste),
                    _ => {
                        return Err(ErreurCalcul::InsufficientOperands {
                            operateur: self.symbole().to_string(),
                            minimum: 2,
                            recus: operandes.len(),
                        })
                    }
                };

                // Pas de résultat partiel : tous les diviseurs sont vérifiés avant le pli.
                if matches!(self, Operateur::Divide | Operateur::Modulo)
                    && reste.iter().any(|x| x.is_zero())
                {
                    return Err(ErreurCalcul::DivisionByZero);
                }

                reste
                    .iter()
                    .try_fold(premier, |acc, &x| self.etape(acc, x))
            }
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

impl FromStr for Operateur {
    type Err = ErreurCalcul;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbole(s).ok_or_else(|| ErreurCalcul::UnknownOperator(s.to_string()))
    }
}

/// Modulo "plancher" : le résultat prend le signe du diviseur (-7 % 3 = 2, 7 % -3 = -2).
pub fn modulo_plancher(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

/// API publique : applique `operateur` (symbole ou alias) à `operandes`.
pub fn apply_operation(operateur: &str, operandes: &[f64]) -> Resultat<f64> {
    operateur.parse::<Operateur>()?.appliquer(operandes)
}
