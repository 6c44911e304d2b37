use std::io;

use chess_rules::Shell;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Two-player chess in the terminal: reads moves from stdin and prints the
/// outcome to stdout. Logs go to stderr, their level is set through
/// `RUST_LOG` (default: "warn").
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Draw pieces as Unicode chess symbols.
    #[arg(long)]
    unicode: bool,
    /// Do not print version information on startup.
    #[arg(long)]
    no_banner: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    if !args.no_banner {
        chess_rules::write_banner(&mut output)?;
    }
    Shell::new(&mut input, &mut output, args.unicode).run()
}
