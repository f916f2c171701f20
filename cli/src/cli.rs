use std::path::PathBuf;

use clap::{Parser, Subcommand};
use portfolio_shared::{Collection, Lang};

#[derive(Parser)]
#[command(name = "portfolio-cli", version, about = "Portfolio content store CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a collection file and write it into the content store.
    Put {
        /// Content store directory.
        #[arg(long, default_value = "./data/kv")]
        kv_dir: PathBuf,
        /// Collection name: projects, photography, calligraphy or blog.
        #[arg(long)]
        collection: Collection,
        /// JSON file holding an array of records.
        #[arg(long)]
        file: PathBuf,
    },
    /// Write every `<collection>.json` found in a directory.
    Seed {
        /// Content store directory.
        #[arg(long, default_value = "./data/kv")]
        kv_dir: PathBuf,
        /// Directory with collection files.
        #[arg(long = "from", default_value = "./content")]
        from: PathBuf,
    },
    /// Print a stored collection.
    Get {
        /// Content store directory.
        #[arg(long, default_value = "./data/kv")]
        kv_dir: PathBuf,
        #[arg(long)]
        collection: Collection,
    },
    /// Load a collection from a running content API and print it localized.
    Fetch {
        /// Base URL of the content API.
        #[arg(long, default_value = "http://localhost:3000")]
        api_base: String,
        #[arg(long)]
        collection: Collection,
        /// Display language (en/zh).
        #[arg(long, default_value = "en")]
        lang: Lang,
    },
}
