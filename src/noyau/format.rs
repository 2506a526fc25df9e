// src/noyau/format.rs

/// Précision d’affichage maximale utile pour un f64.
pub const DIGITS_MAX: usize = 17;

/// Affichage d’un résultat pour l’hôte :
/// - entiers sans partie décimale ("20", pas "20.0")
/// - sinon au plus `digits` décimales, zéros finaux retirés
/// - inf / NaN en clair
pub fn format_nombre(x: f64, digits: usize) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let digits = digits.min(DIGITS_MAX);
    let s = format!("{x:.digits$}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };

    // "-0" -> "0"
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}
