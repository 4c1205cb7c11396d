use std::path::PathBuf;

use clap::Parser;
use persondir::loader::loader::{load_directory, summary};

/// 📇 Persondir, loads people from a JSON file into a directory and reports on them
#[derive(Parser, Debug)]
struct Cli {
    /// JSON array of people, e.g. `[{"name": "Bob", "email": "bob@example.com", "age": 30}]`
    #[clap(short, long)]
    people: PathBuf,

    /// Email to look up once the directory is loaded
    #[clap(short, long)]
    email: Option<String>,

    /// Reject duplicate emails and invalid records instead of storing them
    #[clap(short, long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let loaded = load_directory(&args.people, args.strict)?;

    for line in summary(&loaded, args.email.as_deref()) {
        println!("{}", line);
    }

    Ok(())
}
