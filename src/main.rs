//! symlogic command-line driver.
//!
//! Runs the built-in demonstrations and prints their reports as text or JSON.
#![forbid(unsafe_code)]
use std::env;
use std::process;

use symlogic::config::{ParameterValue, PARAMETERS, TRACE};
use symlogic::{
    catalog, reports_to_json, ConfigBuilder, DemoKind, DemoRunner, DemoSummary, FlagSet,
    OutputFormatter, ParameterSet,
};
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options] [demo...]", program);
    eprintln!();
    eprintln!("Demos: unify | resolution | chain | entails | all (default)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help            Show this help message");
    eprintln!("  -v, --version         Show version information");
    eprintln!("  --json                Print reports as JSON");
    eprintln!("  --check               Run every demo and compare with the expected answers");
    eprintln!("  --trace               Log each forward-chaining rule application");
    eprintln!("  --assign NAME=VALUE   Set a parameter ({})", PARAMETERS.join(", "));
}

/// Parsed command line.
#[derive(Debug, Default)]
struct Options {
    json: bool,
    check: bool,
    flags: FlagSet,
    params: ParameterSet,
    kinds: Vec<DemoKind>,
}

fn parse_assign(assignment: &str, params: &mut ParameterSet) -> Result<(), String> {
    let (name, value) = assignment
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{}`", assignment))?;
    let name = name.trim();
    if !PARAMETERS.contains(&name) {
        return Err(format!("unknown parameter `{}`", name));
    }
    params.set(name, ParameterValue::parse(value));
    Ok(())
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--check" => options.check = true,
            "--trace" => {
                options.flags.enable(TRACE);
            }
            "--assign" => {
                let assignment = iter.next().ok_or("--assign needs NAME=VALUE")?;
                parse_assign(assignment, &mut options.params)?;
            }
            "all" => options.kinds.extend(DemoKind::ALL),
            other if other.starts_with('-') => {
                return Err(format!("unknown option `{}`", other));
            }
            other => options.kinds.push(other.parse()?),
        }
    }
    if options.kinds.is_empty() {
        options.kinds.extend(DemoKind::ALL);
    }
    options.kinds.sort();
    options.kinds.dedup();
    Ok(options)
}

fn init_logging(trace: bool) {
    let default = if trace { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn print_text(summary: &DemoSummary, check: bool) -> std::fmt::Result {
    let mut formatter = OutputFormatter::new();
    formatter.write_banner()?;
    for result in &summary.results {
        formatter.write_heading(&result.name)?;
        formatter.write_report(&result.report)?;
    }
    print!("{}", formatter.into_output());

    if check {
        println!();
        println!("{}", summary.render_table());
        println!();
        println!("Total: {} demos", summary.total());
        println!("Success: {}", summary.successes);
        println!("Failures: {}", summary.failures);
        for result in summary.iter_failures() {
            println!("  - {}: expected {}, got {}", result.name, result.expected, result.answer());
        }
    }
    Ok(())
}

fn run(options: &Options) -> Result<bool, String> {
    let builder = ConfigBuilder::from_settings(&options.flags, &options.params);
    let demos: Vec<_> = catalog()
        .into_iter()
        .filter(|demo| options.kinds.contains(&demo.kind()))
        .collect();
    let summary = DemoRunner::new(builder).run_all(&demos).map_err(|e| e.to_string())?;

    if options.json {
        let reports: Vec<_> = summary.results.iter().map(|r| r.report.clone()).collect();
        let json = reports_to_json(&reports).map_err(|e| e.to_string())?;
        println!("{}", json);
    } else {
        print_text(&summary, options.check).map_err(|e| e.to_string())?;
    }
    Ok(summary.failures == 0)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("symlogic");

    if let Some(first) = args.get(1) {
        match first.as_str() {
            "-h" | "--help" => {
                print_usage(program);
                return;
            }
            "-v" | "--version" => {
                println!("symlogic {}", VERSION);
                return;
            }
            _ => {}
        }
    }

    let options = match parse_args(args.get(1..).unwrap_or(&[])) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {}", err);
            print_usage(program);
            process::exit(2);
        }
    };
    init_logging(options.flags.is_enabled(TRACE));

    match run(&options) {
        Ok(true) => {}
        Ok(false) if options.check => process::exit(1),
        Ok(false) => {}
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_to_every_demo() {
        let options = parse_args(&[]).unwrap();
        assert_eq!(options.kinds, DemoKind::ALL.to_vec());
        assert!(!options.json && !options.check);
    }

    #[test]
    fn parses_flags_and_assignments() {
        let options =
            parse_args(&args(&["--trace", "--assign", "max_rounds=5", "chain", "--json"])).unwrap();
        assert!(options.json);
        assert!(options.flags.is_enabled(TRACE));
        assert_eq!(options.params.get_int("max_rounds"), Some(5));
        assert_eq!(options.kinds, vec![DemoKind::Chain]);
    }

    #[test]
    fn rejects_unknown_input() {
        assert!(parse_args(&args(&["--assign", "max_seconds=5"])).is_err());
        assert!(parse_args(&args(&["--assign"])).is_err());
        assert!(parse_args(&args(&["--fast"])).is_err());
        assert!(parse_args(&args(&["minimax"])).is_err());
    }
}
