mod list;

use clap::{Parser, Subcommand};
use dotenv::dotenv;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show one page of job postings, newest first, as json
    List(list::ListArgs),
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    let result = match args.command {
        Commands::List(list_args) => list::list(list_args).await,
    };
    if let Err(e) = result {
        if e.already_logged() {
            log::warn!("{}", e);
        } else {
            log::error!("{}", e);
        }
        std::process::exit(1);
    }
}
