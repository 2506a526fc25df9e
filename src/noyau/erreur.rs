// src/noyau/erreur.rs

//! Erreurs du noyau.
//!
//! Une seule famille, retournée par toutes les entrées publiques.
//! Aucune erreur n’est rattrapée localement : l’évaluation s’arrête au premier échec,
//! sans résultat partiel.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalcul {
    /// Jeton qui n’est ni un opérateur (ou alias) ni un nombre.
    #[error("jeton invalide: '{0}'")]
    InvalidToken(String),

    /// Opérateur (ou fonction) absent du registre fixe.
    #[error("opérateur inconnu: '{0}'")]
    UnknownOperator(String),

    /// Division ou modulo par zéro (ou pôle de tan).
    #[error("division par zéro")]
    DivisionByZero,

    /// Moins d’opérandes que l’opérateur n’en exige.
    #[error("'{operateur}' demande au moins {minimum} opérandes, reçu {recus}")]
    InsufficientOperands {
        operateur: String,
        minimum: usize,
        recus: usize,
    },

    /// Nombre d’opérandes incorrect pour un opérateur d’arité fixe (neg).
    #[error("'{operateur}' demande exactement {attendus} opérande(s), reçu {recus}")]
    InvalidArity {
        operateur: String,
        attendus: usize,
        recus: usize,
    },

    /// Argument hors domaine (ex: racine d’un négatif).
    #[error("{fonction}({valeur}) hors domaine")]
    DomainError { fonction: String, valeur: f64 },
}

pub type Resultat<T> = Result<T, ErreurCalcul>;

#[cfg(test)]
mod tests {
    use super::ErreurCalcul;

    #[test]
    fn messages_nomment_le_fautif() {
        let e = ErreurCalcul::InvalidToken("abc".into());
        assert!(e.to_string().contains("abc"));

        let e = ErreurCalcul::UnknownOperator("xyz".into());
        assert!(e.to_string().contains("xyz"));

        let e = ErreurCalcul::InvalidArity {
            operateur: "neg".into(),
            attendus: 1,
            recus: 2,
        };
        let msg = e.to_string();
        assert!(msg.contains("neg") && msg.contains('2'));
    }

    #[test]
    fn division_par_zero_message_stable() {
        assert_eq!(ErreurCalcul::DivisionByZero.to_string(), "division par zéro");
    }
}
