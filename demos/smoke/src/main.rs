mod logger;

use std::{fmt::Debug, process::ExitCode};

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use stack::{BoundedStack, Error};

#[derive(Parser, Debug)]
#[clap(
    name = "bstack-smoke",
    version,
    about = "Smoke test for the bounded stack"
)]
struct Args {
    /// Trace every push and pop.
    #[clap(long, short)]
    verbose: bool,
}

#[derive(Default)]
struct Report {
    passed: usize,
    failed: usize,
}

impl Report {
    fn check<T: PartialEq + Debug>(&mut self, what: &str, expected: T, got: T) {
        let status = if expected == got {
            self.passed += 1;
            "ok".green()
        } else {
            self.failed += 1;
            "FAIL".red().bold()
        };
        println!("  [{status}] {what} - Expected: {expected:?} | Got: {got:?}");
    }
}

/// Numeric LIFO behaviour and the overflow/underflow boundaries.
fn integers(report: &mut Report) -> stack::Result<()> {
    println!("--- Integer stack ---");
    let mut stack = BoundedStack::new(3)?;

    println!("\nis_empty on a new stack:");
    report.check("is_empty", true, stack.is_empty());

    println!("\npush 10, 20, 30:");
    for value in [10, 20, 30] {
        stack.push(value)?;
    }
    report.check("list", "10;20;30".to_string(), stack.list());

    println!("\nis_full after three pushes:");
    report.check("is_full", true, stack.is_full());
    report.check("size", 3, stack.size());

    println!("\npush 99 onto the full stack:");
    report.check("push", Err(Error::StackFull { capacity: 3 }), stack.push(99));
    report.check("list", "10;20;30".to_string(), stack.list());

    println!("\npeek leaves the stack alone:");
    report.check("peek", Ok(&30), stack.peek());
    report.check("size", 3, stack.size());

    println!("\npop everything:");
    for expected in [30, 20, 10] {
        report.check("pop", Ok(expected), stack.pop());
    }
    report.check("is_empty", true, stack.is_empty());
    report.check("list", String::new(), stack.list());

    println!("\npop and peek on the empty stack:");
    report.check("pop", Err(Error::StackEmpty), stack.pop());
    report.check("peek", Err(Error::StackEmpty), stack.peek());
    Ok(())
}

/// Text elements, `list` and reuse of a partially emptied stack.
fn strings(report: &mut Report) -> stack::Result<()> {
    println!("\n--- String stack ---");
    let mut stack = BoundedStack::default();

    println!("\npush alpha, beta, gamma, delta:");
    for word in ["alpha", "beta", "gamma", "delta"] {
        stack.push(word.to_string())?;
    }
    report.check("list", "alpha;beta;gamma;delta", stack.list().as_str());

    println!("\npeek:");
    report.check("peek", "delta", stack.peek()?.as_str());
    report.check("size", 4, stack.size());

    println!("\npop two, then list:");
    report.check("pop", "delta".to_string(), stack.pop()?);
    report.check("pop", "gamma".to_string(), stack.pop()?);
    report.check("list", "alpha;beta", stack.list().as_str());

    println!("\npush epsilon after the pops:");
    stack.push("epsilon".to_string())?;
    report.check("list", "alpha;beta;epsilon", stack.list().as_str());
    report.check("peek", "epsilon", stack.peek()?.as_str());

    println!("\ndefault capacity:");
    report.check("capacity", 10, stack.capacity());

    println!("\nfill the remaining slots:");
    for n in 1..=7 {
        stack.push(format!("word{n}"))?;
    }
    report.check("is_full", true, stack.is_full());
    report.check("size", 10, stack.size());

    println!("\npush onto the full stack:");
    report.check(
        "push",
        Err(Error::StackFull { capacity: 10 }),
        stack.push("overflow".to_string()),
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(if args.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    });

    let mut report = Report::default();
    let sections: [(&str, fn(&mut Report) -> stack::Result<()>); 2] =
        [("integers", integers), ("strings", strings)];
    for (name, section) in sections {
        if let Err(error) = section(&mut report) {
            log::error!("{name}: unexpected error: {error}");
            report.failed += 1;
        }
    }

    println!(
        "\n{} passed, {} failed",
        report.passed.to_string().green(),
        report.failed.to_string().red()
    );
    if report.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
