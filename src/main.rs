use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{error, info};

use tabletick::cli::CliArgs;
use tabletick::command::{self, Command};
use tabletick::console::ConsoleSink;
use tabletick::display::Report;
use tabletick::ports::{MessageSink, StateStore};
use tabletick::session::SessionClock;
use tabletick::store::FileStateStore;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the sink
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();

    let store = match &args.state_file {
        Some(path) => FileStateStore::with_path(path),
        None => FileStateStore::new()?,
    };

    let mut clock = SessionClock::restore(store.load()?);
    info!(
        "Session loaded from {} ({} expiries, clock at {} minutes)",
        store.path().display(),
        clock.expiries().len(),
        clock.current_time()
    );

    let mut sink = ConsoleSink::stdout();

    // Opening banner: the current time plus a pointer at help
    let mut banner = Report::clock_only(&clock);
    banner
        .notes
        .push("Type help for commands, quit to exit.".to_string());
    sink.deliver(&banner)?;

    run_loop(&args, &store, &mut clock, &mut sink)?;

    info!("tabletick shut down cleanly");
    Ok(())
}

fn run_loop(
    args: &CliArgs,
    store: &FileStateStore,
    clock: &mut SessionClock,
    sink: &mut impl MessageSink,
) -> Result<()> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        match Command::parse(input).and_then(|cmd| command::execute(clock, cmd)) {
            Ok(outcome) => {
                sink.deliver(&outcome.report)?;

                if outcome.mutated && !args.no_save {
                    if let Err(e) = store.save(&clock.snapshot()) {
                        error!("Failed to persist session state: {:#}", e);
                    }
                }
            }
            Err(e) => {
                error!("Command rejected: {}", e);
                println!("error: {}", e);
            }
        }
    }

    Ok(())
}
