use clap::{Parser, Subcommand};

mod args;


pub use args::{ExportArgs, SearchArgs, ServeArgs};

#[derive(Debug, Parser)]
#[command(name = "darulifta")]
#[command(about = "Darulifta fatwa archive", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the JSON web surface.
    Serve(ServeArgs),
    /// List every published fatwa, most recent first.
    List,
    /// Keyword search over the archive.
    Search(SearchArgs),
    /// Write a fatwa transcript to a text file.
    Export(ExportArgs),
}
