//! CLI for sweeping the dot-product strategies.
//!
//! Usage:
//!   simd-dot                 # Sweep all strategies
//!   simd-dot --list          # List available strategies
//!   simd-dot x86_64-avx      # Sweep one strategy
//!   simd-dot --seed 7        # Reproducible inputs
//!   simd-dot --verify        # Check all strategies against scalar
//!   simd-dot --help          # Show help

use simd_dot_bench::registry::{build_registry, StrategyRunner};
use simd_dot_bench::utils::{input_rng, sweep_sizes};
use simd_dot_bench::{tui, Error};
use std::env;
use std::io::{self, Write};

fn main() -> Result<(), Error> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let registry = build_registry();

    // Parse arguments
    let mut show_list = false;
    let mut show_help = false;
    let mut verify = false;
    let mut seed: Option<u64> = None;
    let mut strategy_filter: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--verify" => verify = true,
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|s| s.parse().ok());
                if seed.is_none() {
                    eprintln!("--seed expects an unsigned integer");
                    std::process::exit(1);
                }
            }
            arg if !arg.starts_with('-') => {
                strategy_filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        tui::print_help();
        return Ok(());
    }

    if show_list {
        tui::print_available_strategies(&registry);
        return Ok(());
    }

    let selected: Vec<&dyn StrategyRunner> = match strategy_filter {
        Some(name) => match registry.find(&name) {
            Some(runner) => vec![runner],
            None => {
                eprintln!("Available: {:?}", registry.list_names());
                return Err(Error::UnknownStrategy(name));
            }
        },
        None => registry.all().iter().map(|r| r.as_ref()).collect(),
    };

    if verify {
        for runner in &selected {
            runner.verify()?;
            println!("  ✅ Strategy '{}' passed verification", runner.name());
        }
        return Ok(());
    }

    tui::print_header();

    let sizes = sweep_sizes();
    let mut rng = input_rng(seed);
    let mut out = io::stdout();

    for runner in selected {
        tui::print_strategy_info_box(runner);
        runner.run_sweep(&sizes, &mut rng, &mut out)?;
        writeln!(out)?;
    }

    Ok(())
}
