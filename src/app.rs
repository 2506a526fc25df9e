// src/app.rs
//
// Calculatrice G2D — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter SessionCalc
// - Traduire une ligne tapée dans le terminal en action de session

pub mod etat;
pub mod vue;

pub use etat::{SessionCalc, Touche};

use crate::noyau::scientifique::puissance;
use crate::noyau::{apply_function, apply_operation, Operateur, Resultat};

/// Ce que la boucle interactive doit faire après une ligne.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reponse {
    Afficher(String),
    Rien,
    Quitter,
}

impl SessionCalc {
    /// Une ligne du terminal : commande ":xxx" ou expression à évaluer.
    ///
    /// - `:k 1 2 + 3` : touches ajoutées à l’entrée, `:del` : DEL, `:=` : évalue l’entrée
    /// - `:ch 3 +`, `:ch 5 *`, `:ch 2 =` : mode enchaîné
    pub fn traiter_ligne(&mut self, ligne: &str, avec_demarche: bool) -> Reponse {
        let ligne = ligne.trim();
        let (commande, reste) = ligne
            .split_once(char::is_whitespace)
            .map_or((ligne, ""), |(c, r)| (c, r.trim()));

        match commande {
            "" => Reponse::Rien,
            ":q" | ":quit" | ":quitter" => Reponse::Quitter,
            ":h" | ":historique" => Reponse::Afficher(self.rendu_historique()),
            ":c" => {
                self.clear_entree();
                Reponse::Rien
            }
            ":clr" => {
                self.clear_resultats();
                Reponse::Rien
            }
            ":ac" => {
                self.reset_total();
                Reponse::Afficher("0".to_string())
            }
            ":del" => {
                self.backspace_entree();
                Reponse::Afficher(self.rendu_entree())
            }
            ":k" => {
                for libelle in reste.split_whitespace() {
                    match Touche::depuis_libelle(libelle) {
                        Some(t) => self.inserer(t),
                        None => return Reponse::Afficher(format!("touche inconnue: '{libelle}'")),
                    }
                }
                Reponse::Afficher(self.rendu_entree())
            }
            ":=" => {
                // le résultat (ou l’erreur) est déposé dans l’état, la vue le lit
                self.evaluer().ok();
                Reponse::Afficher(self.rendu(avec_demarche))
            }
            ":ch" => Reponse::Afficher(self.commande_chaine(reste)),
            _ => {
                self.entree = ligne.to_string();
                self.evaluer().ok();
                Reponse::Afficher(self.rendu(avec_demarche))
            }
        }
    }

    /// `<nombre> [op | =]` -> `enchainer`.
    fn commande_chaine(&mut self, reste: &str) -> String {
        let mut mots = reste.split_whitespace();

        let Some(nombre) = mots.next().and_then(|m| m.parse::<f64>().ok()) else {
            return "usage : :ch <nombre> [opérateur | =]".to_string();
        };
        let op = match mots.next() {
            None | Some("=") => None,
            Some(m) => match m.parse::<Operateur>() {
                Ok(op) => Some(op),
                Err(e) => return SessionCalc::message(&e),
            },
        };

        match self.enchainer(nombre, op) {
            Ok(_) => match self.operateur_en_attente() {
                Some(attente) => format!("{} {attente}", self.resultat_txt()),
                None => self.resultat_txt(),
            },
            Err(e) => SessionCalc::message(&e),
        }
    }

    fn rendu_entree(&self) -> String {
        if self.entree.is_empty() {
            "(entrée vide)".to_string()
        } else {
            self.entree.clone()
        }
    }

    /// Calculs de démonstration (addition, soustraction, …, racine), déposés dans l’historique.
    ///
    /// Retourne une ligne par calcul ; les erreurs sont affichées sans arrêter la série.
    pub fn demo(&mut self) -> Vec<String> {
        let cas: [(&str, fn() -> Resultat<f64>); 6] = [
            ("10 + 5", || apply_operation("+", &[10.0, 5.0])),
            ("10 - 5", || apply_operation("-", &[10.0, 5.0])),
            ("10 * 5", || apply_operation("*", &[10.0, 5.0])),
            ("10 / 5", || apply_operation("/", &[10.0, 5.0])),
            ("2 ^ 8", || Ok(puissance(2.0, 8.0))),
            ("√144", || apply_function("sqrt", 144.0)),
        ];

        cas.iter()
            .map(|(desc, calcul)| match calcul() {
                Ok(v) => {
                    self.ajouter_historique(desc, v);
                    self.resultat = Some(v);
                    format!("{desc} = {}", self.resultat_txt())
                }
                Err(e) => format!("{desc} = {}", SessionCalc::message(&e)),
            })
            .collect()
    }
}
