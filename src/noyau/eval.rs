//! Noyau — évaluation gauche-à-droite
//!
//! jetons (paresseux) -> accumulateur (valeur, opérateur courant) -> valeur finale
//!
//! Aucune priorité, aucun groupement : "2 + 3 * 4" = (0 + 2 + 3) * 4 = 20.
//! Opérateurs consécutifs : le dernier gagne. Opérateur initial : `+`.

use super::erreur::Resultat;
use super::jetons::{jetons, Jeton};
use super::operateur::Operateur;

/// Un pas appliqué à l’accumulateur.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Etape {
    pub avant: f64,
    pub operateur: Operateur,
    pub operande: f64,
    pub apres: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub etapes: Vec<Etape>,
}

impl Evaluation {
    /// Démarche lisible, une ligne par étape.
    pub fn demarche(&self) -> String {
        self.etapes
            .iter()
            .map(|e| match e.operateur {
                Operateur::Negate => format!("neg {} = {}", e.avant, e.apres),
                op => format!("{} {} {} = {}", e.avant, op, e.operande, e.apres),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

struct Accumulateur {
    valeur: f64,
    operateur: Operateur,
}

impl Default for Accumulateur {
    fn default() -> Self {
        Self {
            valeur: 0.0,
            operateur: Operateur::Add,
        }
    }
}

impl Accumulateur {
    /// Applique l’opérateur courant ; en cas d’erreur, l’accumulateur n’est pas modifié.
    fn pousser(&mut self, x: f64) -> Resultat<Etape> {
        let avant = self.valeur;
        let apres = self.operateur.etape(avant, x)?;
        self.valeur = apres;
        Ok(Etape {
            avant,
            operateur: self.operateur,
            operande: x,
            apres,
        })
    }
}

fn reduire(expr: &str, mut sur_etape: impl FnMut(Etape)) -> Resultat<f64> {
    let mut acc = Accumulateur::default();

    for jeton in jetons(expr) {
        match jeton? {
            Jeton::Op(op) => acc.operateur = op,
            Jeton::Nombre(x) => sur_etape(acc.pousser(x)?),
        }
    }

    Ok(acc.valeur)
}

/// API publique : évalue une expression strictement de gauche à droite.
pub fn evaluate(expr: &str) -> Resultat<f64> {
    reduire(expr, |_| {})
}

/// Même réduction que `evaluate`, avec la liste des étapes.
pub fn evaluate_detaille(expr: &str) -> Resultat<Evaluation> {
    let mut etapes = Vec::new();
    let valeur = reduire(expr, |e| etapes.push(e))?;
    Ok(Evaluation { valeur, etapes })
}
