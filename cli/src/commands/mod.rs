pub mod fetch;
pub mod get;
pub mod put;
pub mod seed;

use anyhow::Result;

use crate::cli::{Cli, Commands};

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Put {
            kv_dir,
            collection,
            file,
        } => put::run(&kv_dir, collection, &file).await,
        Commands::Seed {
            kv_dir,
            from,
        } => seed::run(&kv_dir, &from).await.map(|_| ()),
        Commands::Get {
            kv_dir,
            collection,
        } => get::run(&kv_dir, collection).await,
        Commands::Fetch {
            api_base,
            collection,
            lang,
        } => fetch::run(&api_base, collection, lang).await,
    }
}
