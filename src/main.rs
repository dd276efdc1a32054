use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

use readmate::{emit, render, wizard, AnswerSet};

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Generate a README.md by answering a few questions", long_about = None)]
struct Cli {
    /// Output path for the generated README
    #[arg(short, long, default_value = "README.md")]
    output: PathBuf,

    /// Output the result and collected answers as JSON
    #[arg(short, long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let answers = wizard::collect()?;
    let document = render::generate_readme(&answers);
    emit::write_readme(&cli.output, &document)?;

    if cli.json {
        output_json_result(&cli.output, &answers)?;
    } else {
        println!("\n{} Wrote {}", "✓".green(), cli.output.display());
    }

    Ok(())
}

fn output_json_result(path: &Path, answers: &AnswerSet) -> Result<()> {
    let result = serde_json::json!({
        "status": "success",
        "path": path.display().to_string(),
        "answers": answers,
    });

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
