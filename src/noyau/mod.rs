//! Noyau gauche-à-droite
//!
//! Organisation interne :
//! - erreur.rs       : familles d’erreurs (une seule enum)
//! - operateur.rs    : union fermée des opérateurs + apply_operation
//! - jetons.rs       : tokenisation (parenthèses retirées, découpage sur blancs)
//! - eval.rs         : réduction gauche-à-droite (sans priorité) + démarche
//! - scientifique.rs : sqrt / sin / cos / tan
//! - format.rs       : affichage des nombres pour l’hôte
//!
//! Aucun état entre deux appels : toutes les entrées sont des fonctions pures.

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateur;
pub mod scientifique;

#[cfg(test)]
mod tests_gauche_droite;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurCalcul, Resultat};
pub use eval::{evaluate, evaluate_detaille, Evaluation};
pub use operateur::{apply_operation, Operateur};
pub use scientifique::{apply_function, Fonction};
