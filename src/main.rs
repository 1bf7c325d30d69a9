use clap::Parser;
use env_logger::Env;
use storefront::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level, overridden by RUST_LOG
    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    cli::run(cli)
}
