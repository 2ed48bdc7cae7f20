use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use paperfold::{fold_set, parse_file, render};

/// Fold a sheet of dotted transparent paper and show the result.
#[derive(Parser, Debug)]
#[command(name = "paperfold", version)]
struct Cli {
    /// Input file: dot coordinates, a blank line, then fold instructions
    #[arg(value_name = "FILE", default_value = "input.txt")]
    file: PathBuf,
}

fn run(program: &str, cli: Cli) -> i32 {
    let data = match parse_file(&cli.file) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("{program}: {}: {e}", cli.file.display());
            let _ = io::stderr().flush();
            return 1;
        }
    };

    let Some(&first) = data.folds.first() else {
        eprintln!("{program}: no folds specified");
        let _ = io::stderr().flush();
        return 1;
    };

    let mut points = fold_set(&data.points, first);
    println!("After first fold, there are {} points", points.len());

    for &fold in &data.folds[1..] {
        points = fold_set(&points, fold);
    }

    println!("After all folds, the paper looks like:");
    let mut stdout = io::stdout().lock();
    if let Err(e) = render(&points, &mut stdout) {
        eprintln!("{program}: could not write output: {e}");
        let _ = io::stderr().flush();
        return 1;
    }
    let _ = stdout.flush();
    0
}

fn main() {
    // Pull the program name for error-message consistency
    let program = env::args().next().unwrap_or_else(|| String::from("paperfold"));
    let cli = Cli::parse();
    std::process::exit(run(&program, cli));
}
