//  ____                  _____
// |  _ \ __ _ ___ ___   |  ___|__  _ __ __ _  ___
// | |_) / _` / __/ __|  | |_ / _ \| '__/ _` |/ _ \
// |  __/ (_| \__ \__ \  |  _| (_) | | | (_| |  __/
// |_|   \__,_|___/___/  |_|  \___/|_|   \__, |\___|
//                                       |___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// A random password generator driven by a small form.

use anyhow::Result;
use clap::Parser;
use log::debug;
use std::io::{self, Write};

use passforge::charset::CharacterClasses;
use passforge::form::{Action, CharacterClass, FormState};
use passforge::generate::generate;
use passforge::validate::validate_length;

#[derive(Debug, Parser)]
#[command(name = "passforge")]
#[command(about = "Generate random passwords from selected character classes", long_about = None)]
enum Cli {
    /// Generate a password straight from command-line options
    Gen(GenArgs),

    /// Drive the password form interactively
    Form,
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Desired password length (4 to 16)
    #[arg(short, long)]
    length: Option<String>,

    /// Include uppercase letters
    #[arg(long, default_value_t = false)]
    uppercase: bool,

    /// Include lowercase letters
    #[arg(long, default_value_t = false)]
    lowercase: bool,

    /// Include digits
    #[arg(long, default_value_t = false)]
    digits: bool,

    /// Include symbols
    #[arg(long, default_value_t = false)]
    symbols: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli {
        Cli::Gen(args) => run_gen(args),
        Cli::Form => run_form(),
    }
}

fn run_gen(args: GenArgs) -> Result<()> {
    let length = validate_length(args.length.as_deref().unwrap_or(""))?;
    let classes = CharacterClasses {
        uppercase: args.uppercase,
        lowercase: args.lowercase,
        digits: args.digits,
        symbols: args.symbols,
    };
    debug!("generating with length {} and classes {:?}", length, classes);
    let password = generate(length, &classes)?;
    println!("Generated password: {}", password);
    Ok(())
}

fn run_form() -> Result<()> {
    println!("Password Generator");
    println!("Commands: length <n>, upper, lower, digits, symbols, generate, reset, quit");

    let mut state = FormState::new();
    loop {
        render(&state);
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        let action = match line {
            "" => continue,
            "quit" | "q" => break,
            "upper" => Action::Toggle(CharacterClass::Uppercase),
            "lower" => Action::Toggle(CharacterClass::Lowercase),
            "digits" => Action::Toggle(CharacterClass::Digits),
            "symbols" => Action::Toggle(CharacterClass::Symbols),
            "generate" | "gen" => Action::Submit,
            "reset" => Action::Reset,
            other => match other.strip_prefix("length") {
                Some(rest) => Action::EditLength(rest.trim().to_string()),
                None => {
                    println!("Unknown command: {}", other);
                    continue;
                }
            },
        };

        if action == Action::Submit && !state.can_submit() {
            // Mirrors a disabled generate button: report why instead.
            if let Some(err) = state.length_error {
                println!("Cannot generate: {}", err);
            }
            continue;
        }

        state = state.apply(action);
    }
    Ok(())
}

fn check(on: bool) -> char {
    if on { 'x' } else { ' ' }
}

fn render(state: &FormState) {
    println!(
        "length: {:<4} [{}] upper  [{}] lower  [{}] digits  [{}] symbols",
        if state.length_input.is_empty() {
            "-"
        } else {
            &state.length_input
        },
        check(state.classes.uppercase),
        check(state.classes.lowercase),
        check(state.classes.digits),
        check(state.classes.symbols),
    );
    if let Some(err) = state.length_error {
        if !state.length_input.is_empty() {
            println!("  ! {}", err);
        }
    }
    if let Some(err) = state.generate_error {
        println!("  ! {}", err);
    }
    if let Some(password) = &state.password {
        println!("Result: {}", password);
    }
}
