use clap::Parser;
use dexfeed::adapter::inbound::cli::{command::Cli, entry, operator};
use dexfeed::infrastructure::operator::entry::Operator;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    if operator::install(Box::new(Operator)).is_err() {
        eprintln!("error: CLI operator already installed");
        std::process::exit(1);
    }

    let args = Cli::parse();
    if let Err(e) = entry::execute(args).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
