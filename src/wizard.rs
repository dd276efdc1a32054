//! Interactive collection of the answers - one question at a time on stdin.

use anyhow::{bail, Context, Result};
use std::io::{self, Write};

use crate::answers::AnswerSet;
use crate::license::License;

/// Run the full question sequence and hand back the collected answers.
///
/// Questions are asked strictly in series; nothing is written to disk here,
/// so an interrupted run leaves no partial README behind.
pub fn collect() -> Result<AnswerSet> {
    if !atty::is(atty::Stream::Stdin) {
        bail!("readmate is interactive; run it from a terminal");
    }

    println!("📝 Let's put together your README. Answers are used as-is.\n");

    let title = prompt("Project title")?;
    let license = prompt_license()?;
    let description = prompt("Description")?;
    let installation = prompt("Installation instructions")?;
    let usage = prompt("Usage instructions")?;
    let contributing = prompt("Contribution guidelines / credits")?;
    let tests = prompt("Test instructions")?;
    let username = prompt("GitHub username")?;
    let email = prompt("Email address")?;

    Ok(AnswerSet {
        title,
        description,
        installation,
        usage,
        contributing,
        tests,
        license,
        username,
        email,
    })
}

fn prompt(question: &str) -> Result<String> {
    print!("{question}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    if input.is_empty() {
        bail!("stdin closed before all questions were answered");
    }

    Ok(input.trim().to_string())
}

fn prompt_license() -> Result<Option<License>> {
    println!("\nWhich license applies?");
    for (i, license) in License::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, license.name());
    }
    println!("  {}. No license", License::ALL.len() + 1);

    loop {
        let input = prompt(&format!("Select (1-{})", License::ALL.len() + 1))?;
        match parse_license_choice(&input) {
            Some(choice) => return Ok(choice),
            None => println!("Please pick a number from the list."),
        }
    }
}

/// Outer `None` means the input matched nothing and the menu should re-ask.
/// Inner `None` is an explicit "no license" choice.
fn parse_license_choice(input: &str) -> Option<Option<License>> {
    let trimmed = input.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed == (License::ALL.len() + 1).to_string()
    {
        return Some(None);
    }
    License::from_choice(trimmed).map(Some)
}
