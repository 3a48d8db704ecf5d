use power_calc::{calc, cli, format, session};
use std::io::Write;
use termcolor::StandardStream;
use tracing_subscriber::EnvFilter;

fn init_logging(verbosity: u64) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &cli::AppArgs) -> anyhow::Result<()> {
    let mut stdout = StandardStream::stdout(args.color);

    match args.number {
        Some(n) => format::write_powers(&mut stdout, &calc::calculate(n))?,
        None => {
            let config = session::SessionConfig {
                start: args.start,
                step: args.step,
                prompt: atty::is(atty::Stream::Stdin),
            };
            let stdin = std::io::stdin();
            session::run_session(&mut stdin.lock(), &mut stdout, &config)?;
        }
    }

    stdout.flush()?;
    Ok(())
}

fn main() {
    let result = cli::parse_cli_args()
        .map_err(anyhow::Error::from)
        .and_then(|args| {
            init_logging(args.verbosity);
            tracing::debug!(?args, "starting");
            run(&args)
        });

    if let Err(err) = result {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
