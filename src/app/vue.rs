// src/app/vue.rs
//
// Vue (terminal)
// --------------
// Rendu texte de la session : résultat, erreur, démarche, historique.
// Aucune évaluation ici, lecture seule de l’état.

use super::etat::SessionCalc;

impl SessionCalc {
    /// Rendu après "=" : résultat (ou erreur) puis démarche si demandée.
    pub fn rendu(&self, avec_demarche: bool) -> String {
        let mut out = String::new();

        if !self.erreur.is_empty() {
            out.push_str("Erreur : ");
            out.push_str(&self.erreur);
            return out;
        }

        out.push_str(&self.resultat_txt());

        if avec_demarche && !self.demarche.is_empty() {
            out.push('\n');
            out.push_str(&Self::encadrer("Démarche", &self.demarche));
        }
        if avec_demarche && !self.jetons.is_empty() {
            out.push('\n');
            out.push_str(&Self::encadrer("Jetons", &self.jetons));
        }
        out
    }

    pub fn rendu_historique(&self) -> String {
        if self.historique.is_empty() {
            return "(historique vide)".to_string();
        }
        let lignes = self
            .historique
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:>3}. {h}", i + 1))
            .collect::<Vec<_>>()
            .join("\n");
        Self::encadrer(&format!("Historique ({})", self.historique.len()), &lignes)
    }

    fn encadrer(titre: &str, contenu: &str) -> String {
        let mut out = format!("--- {titre} ---");
        for ligne in contenu.lines() {
            out.push_str("\n  ");
            out.push_str(ligne);
        }
        out
    }
}
