use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use darulifta_core::models::CategorySelector;
use darulifta_core::{DarulIfta, Fatwa};

use crate::cli::Commands;

#[cfg(test)]
mod tests;

pub(crate) fn run(command: Commands) -> Result<()> {
    let app = DarulIfta::new().context("failed to create app")?;

    if let Commands::Serve(args) = &command {
        return darulifta_web::serve_web(app, &args.host, args.port);
    }

    run_with_app(&app, command)
}

fn run_with_app(app: &DarulIfta, command: Commands) -> Result<()> {
    match command {
        Commands::Serve(_) => unreachable!("serve is handed off before this point"),
        Commands::List => {
            let fatwas = app.all_fatwas()?;
            for fatwa in &fatwas {
                print_listing_line(fatwa);
            }
            println!("{} fatwas", fatwas.len());
        }
        Commands::Search(args) => {
            let selector = CategorySelector::parse(args.category.as_deref())?;
            let outcome = app.search(selector, &args.query)?;
            for fatwa in &outcome.fatwas {
                print_listing_line(fatwa);
            }
            println!(
                "{} matches{}",
                outcome.fatwas.len(),
                if outcome.ai_ranked { " (AI ranked)" } else { "" }
            );
        }
        Commands::Export(args) => {
            let (filename, body) = app.record_transcript(&args.id)?;
            let path = args.out.unwrap_or_else(|| PathBuf::from(&filename));
            fs::write(&path, body)
                .with_context(|| format!("failed to write transcript to {}", path.display()))?;
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}

fn print_listing_line(fatwa: &Fatwa) {
    println!(
        "{}  {}  [{}]  {}",
        fatwa.id,
        fatwa.fatwa_number,
        fatwa.category.as_str(),
        fatwa.question_title
    );
}
