use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(allow_hyphen_values = true)]
    pub query: String,
    /// Restrict to one category label (e.g. "Zakat & Charity").
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    pub id: String,
    /// Output path. Defaults to the transcript's own filename in the
    /// current directory.
    #[arg(long)]
    pub out: Option<PathBuf>,
}
