use attendance_common::{
    best_match, reconcile, AttendanceReport, ReconcileOptions, RosterSnapshot,
};
use attendance_report::{cli, config, export, review, roster, upload};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use indicatif::ProgressBar;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env があればトークンなどを読み込む
    let dotenv = config::load_dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dotenv {
        Ok(Some(path)) => tracing::debug!(path = %path.display(), ".env loaded"),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, ".env ignored"),
    }

    let config = Config::load()?;

    match cli.command {
        Commands::Report { course, input, output, floor, name_column, snapshot, no_review } => {
            println!("📋 attendance-report - Reporte de asistencia\n");

            // 1. 出席ファイル読み込み
            println!("[1/4] Leyendo archivo de asistencia...");
            let names = upload::read_attendance_names(&input, &name_column)?;
            println!("✔ {} nombres únicos\n", names.len());

            // 2. 名簿取得
            let snapshot = match snapshot {
                Some(path) => {
                    println!("[2/4] Cargando estudiantes desde {}...", path.display());
                    RosterSnapshot::load(&path)?
                }
                None => {
                    println!("[2/4] Obteniendo estudiantes desde Canvas...");
                    let client = roster::RosterClient::new(&config)?;
                    with_spinner(
                        "Consultando la API de Canvas...",
                        roster::fetch_snapshot(&client, course),
                    )
                    .await?
                }
            };
            snapshot.ensure_course(course)?;
            println!(
                "✔ {} estudiantes en \"{}\"\n",
                snapshot.students.len(),
                snapshot.course.name
            );

            // 3. 突合
            println!("[3/4] Comparando nombres...");
            let options = ReconcileOptions::with_floor(floor.unwrap_or(config.match_floor))?;
            let reconciliation = reconcile(&snapshot.students, &names, &options);
            let mut report = AttendanceReport {
                course: snapshot.course,
                rows: reconciliation.rows,
                unused_names: reconciliation.unused_names,
            };
            println!(
                "✔ {}/{} estudiantes con match\n",
                report.participated_count(),
                report.rows.len()
            );

            review::print_results(&report.rows);
            println!();
            review::print_unused_names(&report.unused_names);
            println!();

            if !no_review {
                review::run_review(&mut report.rows)?;
            }

            // 4. Excel出力
            println!("[4/4] Exportando Excel...");
            let output = output.unwrap_or_else(|| PathBuf::from("."));
            let path = export::export_report(&report, &output)?;
            println!("✔ Reporte guardado: {}", path.display());

            println!("\n✅ Listo");
        }

        Commands::Roster { course, output } => {
            println!("📥 attendance-report - Descargar nómina\n");

            let client = roster::RosterClient::new(&config)?;
            let snapshot = with_spinner(
                "Consultando la API de Canvas...",
                roster::fetch_snapshot(&client, course),
            )
            .await?;

            let output = output.unwrap_or_else(|| PathBuf::from(format!("roster-{}.json", course)));
            snapshot.save(&output)?;
            println!(
                "✔ {} estudiantes de \"{}\" guardados en {}",
                snapshot.students.len(),
                snapshot.course.name,
                output.display()
            );
        }

        Commands::Match { name, targets } => match best_match(&name, targets.as_slice()) {
            Some(m) => println!("{} → {} ({:.1})", name, m.target, m.score),
            None => println!("{} → sin match", name),
        },

        Commands::Config { set_token, set_base_url, show } => {
            let mut config = config;

            if let Some(token) = set_token {
                config.set_api_token(token)?;
                println!("✔ Token de API guardado");
            }

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ URL base guardada");
            }

            if show {
                println!("Configuración ({}):", Config::config_path()?.display());
                println!("  URL base: {}", config.base_url);
                println!("  Tamaño de página: {}", config.page_size);
                println!("  Umbral de match: {}", config.match_floor);
                println!("  Timeout: {}s", config.timeout_seconds);
                println!(
                    "  Token: {}",
                    if config.get_api_token().is_ok() { "configurado" } else { "no configurado" }
                );
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// API待ちの間スピナーを表示
async fn with_spinner<F: Future>(message: &str, future: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let output = future.await;

    spinner.finish_and_clear();
    output
}
