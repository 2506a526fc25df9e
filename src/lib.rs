//! Calculatrice G2D : évaluation arithmétique strictement de gauche à droite.
//!
//! - `noyau` : fonctions pures (`evaluate`, `apply_operation`, `apply_function`)
//! - `app`   : session côté hôte (entrée, historique, vue terminal)

pub mod app;
pub mod noyau;

pub use noyau::{apply_function, apply_operation, evaluate, ErreurCalcul};
