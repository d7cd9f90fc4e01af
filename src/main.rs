use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tarmac::report::{FlightFilter, aircraft_rows, airport_rows, flight_rows, render};
use tarmac::simulation::Simulation;
use tarmac::time::Time;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Airport ground-resource simulator")]
struct Args {
    /// Path to the JSON scenario file
    #[arg(short, long, value_name = "FILE", default_value = "data/default.json")]
    scenario: PathBuf,

    /// Start of the departure timeline, in minutes
    #[arg(long, value_name = "MINUTES", default_value = "0", value_parser = parse_minutes)]
    start: Time,
}

fn parse_minutes(arg: &str) -> Result<Time, String> {
    let minutes = arg
        .parse::<u64>()
        .map_err(|e| format!("invalid minutes {}: {}", arg, e))?;
    Time::checked_from_minutes(minutes)
        .ok_or_else(|| format!("{} minutes is past the end of the timeline", minutes))
}

fn parse_passengers(arg: &str) -> Result<u64, String> {
    arg.parse::<u64>()
        .map_err(|e| format!("invalid passenger count {}: {}", arg, e))
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

fn paginate(content: String) {
    let pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn());

    let Ok(mut pager) = pager else {
        println!("{}", content);
        return;
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {}", e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn show(table: String, rows: usize) {
    if rows > 20 {
        paginate(table);
    } else {
        println!("{}", table);
    }
}

fn report<E: std::fmt::Display>(label: &str, result: Option<Result<(), E>>) {
    match result {
        Some(Ok(())) => println!("{} {}", label, "ok".green()),
        Some(Err(e)) => println!("{} {}", label, e.to_string().red()),
        None => println!("Unknown flight: {}", label),
    }
}

fn print_help() {
    println!("\nAvailable Commands:");
    println!("  ls [status]          - List flights, optionally filtered by status:");
    println!("                         u - unscheduled, s - scheduled, d - arrived, f - failed");
    println!("  aircraft             - List aircraft with fuel and location");
    println!("  airports             - List airports with hangar and runway usage");
    println!("  schedule [m]         - Assign departures, starting at minute <m>");
    println!("  fly <id>             - Perform flight <id>");
    println!("  fly-all              - Perform every scheduled flight in order");
    println!("  refuel <ac> <n>      - Add <n> fuel (negative drains) to <ac>");
    println!("  board <id> <n>       - Board <n> passengers on flight <id>");
    println!("  deboard <id> <n>     - Remove <n> passengers from flight <id>");
    println!("  help / ?             - Show this help menu");
    println!("  exit / quit          - Exit the simulator\n");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    println!("Tower online. Loaded scenario from {}", args.scenario.display());

    let mut simulation = Simulation::load_from_file(&args.scenario)?;
    let start = args.start;

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: [
            "ls", "aircraft", "airports", "schedule", "fly", "fly-all", "refuel", "board",
            "deboard", "help", "exit",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => {
                        let filter = FlightFilter::parse(parts.get(1).copied());
                        let rows = flight_rows(&simulation, filter);
                        if rows.is_empty() {
                            println!("No matching flights found.")
                        } else {
                            show(render(&rows), rows.len());
                        }
                    },
                    "aircraft" => {
                        let rows = aircraft_rows(&simulation.registry);
                        show(render(&rows), rows.len());
                    },
                    "airports" => {
                        let rows = airport_rows(&simulation.registry);
                        show(render(&rows), rows.len());
                    },
                    "schedule" => {
                        match parts.get(1).map(|m| parse_minutes(m)).unwrap_or(Ok(start)) {
                            Ok(from) => {
                                simulation.schedule(from);
                                println!("Departures assigned from {}.", from);
                            }
                            Err(e) => println!("Usage: schedule [minutes] ({})", e),
                        }
                    },
                    "fly" => {
                        if let Some(id) = parts.get(1) {
                            if let Some(flight) = simulation.flight(id) {
                                println!("{}", flight.describe(&simulation.registry));
                            }
                            report(id, simulation.perform(id));
                        } else {
                            println!("Usage: fly <flight_id>");
                        }
                    },
                    "fly-all" => {
                        let results = simulation.perform_all();
                        let failed = results.iter().filter(|(_, r)| r.is_err()).count();
                        for (id, result) in results.iter() {
                            report(id, Some(result.as_ref().map(|_| ())));
                        }
                        println!("{} flights attempted, {} failed.", results.len(), failed);
                    },
                    "refuel" => {
                        if let (Some(name), Some(amount)) = (parts.get(1), parts.get(2)) {
                            match amount.parse::<i64>() {
                                Ok(amount) => match simulation.refuel(name, amount) {
                                    Some(level) => println!("{} fuel level: {}", name, level),
                                    None => println!("Unknown aircraft: {}", name),
                                },
                                Err(e) => println!("Invalid amount {}: {}", amount, e),
                            }
                        } else {
                            println!("Usage: refuel <aircraft> <amount>");
                        }
                    },
                    cmd @ ("board" | "deboard") => {
                        if let (Some(id), Some(count)) = (parts.get(1), parts.get(2)) {
                            match parse_passengers(count) {
                                Ok(count) => {
                                    let result = if cmd == "board" {
                                        simulation.board(id, count)
                                    } else {
                                        simulation.deboard(id, count)
                                    };
                                    report(id, result);
                                }
                                Err(e) => println!("{}", e),
                            }
                        } else {
                            println!("Usage: {} <flight_id> <passengers>", cmd);
                        }
                    },
                    "help" | "?" => print_help(),
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes() {
        assert_eq!(Ok(Time::from_minutes(90)), parse_minutes("90"));
        assert!(parse_minutes("abc").is_err());
        assert!(parse_minutes("-5").is_err());
        assert!(parse_minutes("400000000000000000").is_err());
    }

    #[test]
    fn test_parse_passengers() {
        assert_eq!(Ok(12), parse_passengers("12"));
        assert!(parse_passengers("abc").is_err());
        assert!(parse_passengers("-1").is_err());
    }
}
