// src/noyau/jetons.rs

use super::erreur::{ErreurCalcul, Resultat};
use super::operateur::Operateur;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Op(Operateur),
}

/// Flux paresseux de jetons.
///
/// - les parenthèses sont retirées (aucun groupement)
/// - découpage sur les blancs
/// - opérateur/alias reconnu -> Jeton::Op, sinon nombre flottant, sinon erreur
///
/// Paresseux : l’évaluateur s’arrête sur la première erreur rencontrée DANS L’ORDRE
/// ("1 / 0 abc" => division par zéro, pas jeton invalide).
pub fn jetons(s: &str) -> impl Iterator<Item = Resultat<Jeton>> + '_ {
    s.split_whitespace().filter_map(|brut| {
        let mot: String = brut.chars().filter(|c| *c != '(' && *c != ')').collect();
        if mot.is_empty() {
            // "( )" ou "((" seuls : rien à lire
            return None;
        }
        Some(lire_jeton(&mot))
    })
}

fn lire_jeton(mot: &str) -> Resultat<Jeton> {
    if let Some(op) = Operateur::from_symbole(mot) {
        return Ok(Jeton::Op(op));
    }
    sans_separateurs(mot)
        .and_then(|m| m.parse::<f64>().ok())
        .map(Jeton::Nombre)
        .ok_or_else(|| ErreurCalcul::InvalidToken(mot.to_string()))
}

/// Séparateurs de chiffres : "1_000" -> "1000". Un `_` doit être entouré de chiffres.
fn sans_separateurs(mot: &str) -> Option<String> {
    let chars: Vec<char> = mot.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if *c != '_' {
            continue;
        }
        let avant = i.checked_sub(1).and_then(|j| chars.get(j));
        let apres = chars.get(i + 1);
        match (avant, apres) {
            (Some(a), Some(b)) if a.is_ascii_digit() && b.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(chars.into_iter().filter(|c| *c != '_').collect())
}

/// Tokenize une chaîne complète (échoue sur le premier jeton invalide).
pub fn tokenize(s: &str) -> Resultat<Vec<Jeton>> {
    jetons(s).collect()
}

/// Format utilitaire (démarche) : liste de jetons en texte canonique.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Jeton::Nombre(x) => format!("{x}"),
            Jeton::Op(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
