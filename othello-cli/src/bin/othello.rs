use anyhow::Result;
use clap::Parser;
use othello_cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    othello_cli::run(cli, &mut stdout.lock())
}
