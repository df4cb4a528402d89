//! Play one quiz in the terminal.
//!
//! Run with: `cargo run --example terminal_quiz [seed]`
//!
//! This is a minimal presentation layer over `QuizRunner`:
//!
//! 1. The bank is loaded once from `data/questions.csv`. A bad file lands on
//!    the error screen and the program exits.
//! 2. Each screen is rendered from the JSON snapshot returned by
//!    `to_view_state`, the same data a canvas renderer would draw.
//! 3. Typing a letter (A-D) selects an option, Enter advances, and the
//!    result screen offers another round.
//!
//! Set `RUST_LOG=quiz_drill_session=debug` to watch every state transition.

use std::io::{self, BufRead, Write};
use std::path::Path;

use quiz_drill_session::{to_view_state, OptionLetter, QuizConfig, QuizRunner, Screen};
use serde_json::Value;

fn rule() {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

fn prompt_line(stdin: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if stdin.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_uppercase()))
}

/// Print the current quiz screen from its snapshot.
fn print_question(view: &Value) {
    let q = &view["question"];
    rule();
    println!(
        "  Question {} / {}    correct so far: {}",
        q["number"], q["total"], view["correct_count"]
    );
    rule();
    println!("  {}", q["prompt"].as_str().unwrap_or_default());
    println!();
    for opt in q["options"].as_array().into_iter().flatten() {
        let marker = match opt["role"].as_str() {
            Some("correct") => "✓",
            Some("wrong")   => "✗",
            _               => " ",
        };
        println!(
            "  [{marker}] {}. {}",
            opt["letter"].as_str().unwrap_or("?"),
            opt["text"].as_str().unwrap_or_default()
        );
    }
}

fn print_result(view: &Value) {
    rule();
    println!("  Correct answers: {} / {}", view["correct_count"], view["total"]);
    println!("  Score: {} %", view["percentage"]);
    println!("  {}", view["headline"].as_str().unwrap_or_default());
    rule();
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quiz_drill_session=info")),
        )
        .init();

    let bank_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/questions.csv");
    let mut config = QuizConfig::new(bank_path);
    if let Some(seed) = std::env::args().nth(1).and_then(|s| s.parse().ok()) {
        config = config.with_seed(seed);
    }

    let mut runner = QuizRunner::initialize(&config);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let view = to_view_state(&runner);
        match runner.screen() {
            Screen::Error => {
                println!("Error: {}", view["message"].as_str().unwrap_or("unknown error"));
                return Ok(());
            }
            Screen::Start => {
                println!(
                    "This quiz draws {} questions from a bank of {}.",
                    view["num_questions"], view["bank_size"]
                );
                let line = prompt_line(&mut input, "Press Enter to begin (q to quit): ")?;
                if line.as_deref().map_or(true, |l| l == "Q") {
                    return Ok(());
                }
                if let Err(e) = runner.begin() {
                    println!("Cannot start: {e}");
                }
            }
            Screen::Quiz => {
                print_question(&view);
                if view["answered"] == true {
                    let label = view["next_button"]["label"].as_str().unwrap_or("Next");
                    if prompt_line(&mut input, &format!("Press Enter for \"{label}\": "))?.is_none() {
                        return Ok(());
                    }
                    if let Err(e) = runner.next() {
                        println!("{e}");
                    }
                    continue;
                }
                let Some(line) = prompt_line(&mut input, "Your answer (A-D): ")? else {
                    return Ok(());
                };
                match OptionLetter::parse(&line) {
                    Some(letter) => match runner.select(letter.index()) {
                        Ok(true)  => println!("Correct!"),
                        Ok(false) => println!("Not quite."),
                        Err(e)    => println!("{e}"),
                    },
                    None => println!("Please type A, B, C, or D."),
                }
            }
            Screen::Result => {
                print_result(&view);
                if prompt_line(&mut input, "Play again? (y/n): ")?.as_deref() != Some("Y") {
                    return Ok(());
                }
                runner.restart();
            }
        }
    }
}
