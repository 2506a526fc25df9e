// src/main.rs
//
// Calculatrice G2D — point d’entrée terminal
// ------------------------------------------
// - une évaluation (-e), une opération (-o), une fonction (-f)
// - --demo : calculs de démonstration + historique
// - sinon : boucle interactive sur stdin

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{ArgGroup, Parser};

use calculatrice_g2d::app::{Reponse, SessionCalc};
use calculatrice_g2d::noyau::format::format_nombre;
use calculatrice_g2d::noyau::{apply_function, apply_operation, evaluate_detaille, Resultat};

/// Titre unique.
const TITRE_APP: &str = "Calculatrice G2D (gauche à droite)";

#[derive(Parser, Debug)]
#[command(version, about = TITRE_APP, long_about = None)]
#[command(group(ArgGroup::new("avec_operandes").args(["op", "fonction"])))]
struct Args {
    /// Expression à évaluer une fois (ex: "2 + 3 * 4")
    #[arg(short, long, allow_hyphen_values = true, conflicts_with_all = ["op", "fonction", "demo"])]
    expr: Option<String>,

    /// Opérateur à appliquer aux opérandes (ex: -o sum 1 2 3)
    #[arg(short, long, conflicts_with_all = ["fonction", "demo"])]
    op: Option<String>,

    /// Fonction scalaire (sqrt, sin, cos, tan) appliquée à l’unique opérande
    #[arg(short, long, conflicts_with = "demo")]
    fonction: Option<String>,

    /// Opérandes pour --op / --fonction (refusés ailleurs)
    #[arg(allow_negative_numbers = true, requires = "avec_operandes")]
    operandes: Vec<f64>,

    /// Précision d’affichage
    #[arg(short, long, default_value_t = 10)]
    digits: usize,

    /// Affiche la démarche (étapes de l’accumulateur)
    #[arg(short, long)]
    trace: bool,

    /// Calculs de démonstration
    #[arg(long)]
    demo: bool,
}

fn main() -> io::Result<ExitCode> {
    let args = Args::parse();

    let mut session = SessionCalc::default();
    session.set_digits(args.digits);

    if let Some(expr) = &args.expr {
        return une_fois(
            evaluate_detaille(expr).map(|ev| {
                let mut out = format_nombre(ev.valeur, session.digits);
                if args.trace && !ev.etapes.is_empty() {
                    out.push('\n');
                    out.push_str(&ev.demarche());
                }
                out
            }),
        );
    }

    if let Some(op) = &args.op {
        return une_fois(
            apply_operation(op, &args.operandes).map(|v| format_nombre(v, session.digits)),
        );
    }

    if let Some(nom) = &args.fonction {
        let [x] = args.operandes.as_slice() else {
            eprintln!("--fonction demande exactement un opérande");
            return Ok(ExitCode::FAILURE);
        };
        return une_fois(apply_function(nom, *x).map(|v| format_nombre(v, session.digits)));
    }

    if args.demo {
        println!("{TITRE_APP} — démonstration");
        for ligne in session.demo() {
            println!("  {ligne}");
        }
        println!("{}", session.rendu_historique());
        return Ok(ExitCode::SUCCESS);
    }

    boucle(&mut session, args.trace)?;
    Ok(ExitCode::SUCCESS)
}

fn une_fois(r: Resultat<String>) -> io::Result<ExitCode> {
    match r {
        Ok(s) => {
            println!("{s}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", SessionCalc::message(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Boucle interactive : une ligne = une commande ou une expression.
fn boucle(session: &mut SessionCalc, trace: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{TITRE_APP}")?;
    writeln!(stdout, "Commandes : :historique  :c  :clr  :ac  :del  :k <touches>  :=  :ch <n> [op]  :quit")?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut ligne = String::new();
        if stdin.lock().read_line(&mut ligne)? == 0 {
            // EOF
            break;
        }

        match session.traiter_ligne(&ligne, trace) {
            Reponse::Afficher(s) => writeln!(stdout, "{s}")?,
            Reponse::Rien => {}
            Reponse::Quitter => break,
        }
    }

    Ok(())
}
