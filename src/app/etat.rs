//! src/app/etat.rs
//!
//! État de session (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice côté hôte (entrée, résultat, erreur, historique,
//! précision, chaîne en cours) et offrir les actions C / CLR / AC / DEL / = sans logique
//! d’affichage. Le noyau ne garde rien : tout l’état vit ici.
//!
//! Contrats :
//! - Historique en ajout seul, sans dédoublonnage.
//! - Sur erreur : on CONSERVE le dernier résultat, on n’ajoute rien à l’historique.

use crate::noyau::format::{format_nombre, DIGITS_MAX};
use crate::noyau::jetons::{format_tokens, tokenize};
use crate::noyau::{evaluate_detaille, ErreurCalcul, Operateur, Resultat};

/// Précision d’affichage par défaut.
const DIGITS_DEFAUT: usize = 10;

/// Mots reconnus d’un bloc par DEL (alias + opérateurs textuels).
const MOTS_ENTIERS: [&str; 9] = [
    "multiply", "subtract", "product", "modulo", "divide", "power", "add", "neg", "sum",
];

/// Touche insérée dans l’entrée (pavé / clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche<'a> {
    /// Chiffre ou point : collé au précédent (espace après un mot ou ")").
    Chiffre(char),
    /// Opérateur : entouré d’espaces.
    Op(Operateur),
    /// Mot libre (alias tapé à la main) : séparé par un espace.
    Mot(&'a str),
    OuvrePar,
    FermePar,
}

impl<'a> Touche<'a> {
    /// Libellé de touche -> touche ("7", ".", "(", "*", "multiply"…).
    pub fn depuis_libelle(libelle: &'a str) -> Option<Self> {
        let mut chars = libelle.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() || c == '.' => return Some(Touche::Chiffre(c)),
            (Some('('), None) => return Some(Touche::OuvrePar),
            (Some(')'), None) => return Some(Touche::FermePar),
            _ => {}
        }
        if let Some(op) = Operateur::from_symbole(libelle) {
            if op.symbole() == libelle {
                return Some(Touche::Op(op));
            }
        }
        if !libelle.is_empty() && libelle.chars().all(|c| c.is_ascii_alphabetic()) {
            return Some(Touche::Mot(libelle));
        }
        None
    }
}

#[derive(Clone, Debug)]
pub struct SessionCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: Option<f64>,
    pub erreur: String,
    pub demarche: String,
    pub jetons: String,

    // --- historique "<expression> = <résultat>" ---
    pub historique: Vec<String>,

    // --- paramètres ---
    pub digits: usize,

    // --- mode enchaîné (touche par touche) ---
    chaine_valeur: Option<f64>,
    chaine_op: Option<Operateur>,
}

impl Default for SessionCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: None,
            erreur: String::new(),
            demarche: String::new(),
            jetons: String::new(),
            historique: Vec::new(),
            digits: DIGITS_DEFAUT,
            chaine_valeur: None,
            chaine_op: None,
        }
    }
}

impl SessionCalc {
    /// Session neuve avec une entrée déjà saisie.
    pub fn avec_entree(entree: impl Into<String>) -> Self {
        Self {
            entree: entree.into(),
            ..Self::default()
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + chaîne + digits). L’historique reste.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.chaine_valeur = None;
        self.chaine_op = None;
        self.digits = DIGITS_DEFAUT;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat = None;
        self.erreur.clear();
        self.demarche.clear();
        self.jetons.clear();
    }

    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche.clear();
        self.jetons.clear();
    }

    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
    }

    /// Résultat courant formaté (vide si aucun).
    pub fn resultat_txt(&self) -> String {
        self.resultat
            .map(|x| format_nombre(x, self.digits))
            .unwrap_or_default()
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn inserer(&mut self, touche: Touche<'_>) {
        match touche {
            Touche::Chiffre(c) => {
                if self.entree.ends_with(|p: char| p.is_ascii_alphabetic() || p == ')') {
                    self.entree.push(' ');
                }
                self.entree.push(c);
            }
            Touche::Op(op) => {
                self.retirer_blancs_finaux();
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(op.symbole());
                self.entree.push(' ');
            }
            Touche::Mot(mot) => {
                if !self.entree.is_empty() && !self.entree.ends_with(char::is_whitespace) {
                    self.entree.push(' ');
                }
                self.entree.push_str(mot);
            }
            Touche::OuvrePar => {
                if !self.entree.is_empty() && !self.entree.ends_with(char::is_whitespace) {
                    self.entree.push(' ');
                }
                self.entree.push('(');
            }
            Touche::FermePar => {
                self.retirer_blancs_finaux();
                self.entree.push(')');
            }
        }
    }

    /// DEL : retire d’un coup un mot opérateur ("multiply", "neg"…), sinon un caractère.
    pub fn backspace_entree(&mut self) {
        self.retirer_blancs_finaux();
        if self.entree.is_empty() {
            return;
        }

        for mot in MOTS_ENTIERS {
            if self.entree.ends_with(mot) {
                let reste = self.entree.len() - mot.len();
                let debut_de_mot = self.entree[..reste]
                    .chars()
                    .next_back()
                    .map_or(true, char::is_whitespace);
                if debut_de_mot {
                    self.entree.truncate(reste);
                    self.retirer_blancs_finaux();
                    return;
                }
            }
        }

        self.entree.pop();
        self.retirer_blancs_finaux();
    }

    fn retirer_blancs_finaux(&mut self) {
        while self.entree.ends_with(char::is_whitespace) {
            self.entree.pop();
        }
    }

    /* ------------------------ Évaluation ------------------------ */

    /// "=" : évalue l’entrée via le noyau, dépose résultat + démarche, alimente l’historique.
    pub fn evaluer(&mut self) -> Resultat<f64> {
        let expr = self.entree.trim().to_string();

        match evaluate_detaille(&expr) {
            Ok(ev) => {
                self.erreur.clear();
                self.resultat = Some(ev.valeur);
                self.demarche = ev.demarche();
                // l’évaluation a réussi : la tokenisation aussi
                self.jetons = tokenize(&expr)
                    .map(|t| format_tokens(&t))
                    .unwrap_or_default();
                self.ajouter_historique(&expr, ev.valeur);
                Ok(ev.valeur)
            }
            Err(e) => {
                self.set_erreur(e.to_string());
                Err(e)
            }
        }
    }

    pub fn ajouter_historique(&mut self, expr: &str, valeur: f64) {
        self.historique
            .push(format!("{expr} = {}", format_nombre(valeur, self.digits)));
    }

    /* ------------------------ Mode enchaîné ------------------------ */

    /// Touche par touche : `3 +`, `5 *`, `2 =` (op = None pour "=").
    ///
    /// Chaque nouvel opérateur applique d’abord celui en attente (gauche à droite).
    /// En cas d’erreur la chaîne reste telle quelle.
    pub fn enchainer(&mut self, nombre: f64, op: Option<Operateur>) -> Resultat<f64> {
        let (valeur, ligne) = match (self.chaine_valeur, self.chaine_op) {
            (Some(v), Some(attente)) => {
                let r = attente.etape(v, nombre).map_err(|e| {
                    self.set_erreur(e.to_string());
                    e
                })?;
                let ligne = format!(
                    "{} {attente} {}",
                    format_nombre(v, self.digits),
                    format_nombre(nombre, self.digits)
                );
                (r, ligne)
            }
            _ => (nombre, format_nombre(nombre, self.digits)),
        };

        self.chaine_valeur = Some(valeur);
        self.chaine_op = op;
        self.resultat = Some(valeur);
        self.erreur.clear();

        if op.is_none() {
            self.ajouter_historique(&ligne, valeur);
        }
        Ok(valeur)
    }

    /// Opérateur en attente dans la chaîne, s’il y en a un.
    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        self.chaine_op
    }

    /// Erreur typée -> message affichable (pour les hôtes sans session).
    pub fn message(e: &ErreurCalcul) -> String {
        format!("Erreur : {e}")
    }
}
