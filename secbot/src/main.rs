//! Cybersecurity awareness chatbot CLI.
//!
//! A line-based interactive loop over the `secbot-core` engine: banner,
//! name prompt, dispatch-and-respond cycle, `exit` keyword. Rendering is
//! typewriter-animated and colored by default; `--plain` disables both,
//! which is what piped and scripted use should pass.

use crossterm::execute;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use secbot_core::ChatSession;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

const TYPE_DELAY: Duration = Duration::from_millis(15);

struct CliConfig {
    user_name: Option<String>,
    transcript_path: Option<String>,
    plain: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let config = parse_config_from_args(&args);
    let mut session = ChatSession::new()?;

    print_banner(config.plain)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let user_name = match config.user_name.clone() {
        Some(name) => name,
        None => match prompt_for_name(&mut lines, config.plain)? {
            Some(name) => name,
            None => return Ok(()), // stdin closed
        },
    };

    type_line(
        &format!("\nNice to meet you, {user_name}! I'm here to help you stay safe online."),
        Color::Green,
        config.plain,
    )?;

    loop {
        print_colored(
            &format!(
                "\n{user_name}, what would you like to know about cybersecurity? (or type 'exit' to quit): "
            ),
            Color::Yellow,
            config.plain,
        )?;

        let input = match lines.next() {
            Some(line) => line?,
            None => break, // stdin closed
        };
        let input = input.trim();

        if input.is_empty() {
            type_line(
                "\nPlease enter a question or type 'exit' to quit.",
                Color::Red,
                config.plain,
            )?;
            continue;
        }

        if input.eq_ignore_ascii_case("exit") {
            break;
        }

        let response = session.respond(input, &user_name);
        type_line(&format!("\n{response}"), Color::Cyan, config.plain)?;
    }

    if let Some(path) = &config.transcript_path {
        let json = serde_json::to_string_pretty(session.transcript())?;
        std::fs::write(path, json)?;
        println!("\nTranscript written to {path}.");
    }

    type_line(
        &format!("\nThank you for chatting, {user_name}! Stay vigilant online."),
        Color::Red,
        config.plain,
    )?;

    Ok(())
}

fn parse_config_from_args(args: &[String]) -> CliConfig {
    let mut config = CliConfig {
        user_name: None,
        transcript_path: None,
        plain: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--name" if i + 1 < args.len() => {
                config.user_name = Some(args[i + 1].clone());
                i += 1;
            }
            "--transcript" if i + 1 < args.len() => {
                config.transcript_path = Some(args[i + 1].clone());
                i += 1;
            }
            "--plain" => config.plain = true,
            _ => {}
        }
        i += 1;
    }

    config
}

fn prompt_for_name(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    plain: bool,
) -> io::Result<Option<String>> {
    print_colored(
        "\nTo personalize your experience, please tell me your name: ",
        Color::Yellow,
        plain,
    )?;

    loop {
        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(None),
        };
        let name = line.trim();
        if !name.is_empty() {
            return Ok(Some(name.to_string()));
        }
        type_line(
            "\nThe name cannot be empty. Let's try that again.",
            Color::Red,
            plain,
        )?;
        print_colored("Please enter your name: ", Color::Yellow, plain)?;
    }
}

fn print_banner(plain: bool) -> io::Result<()> {
    let banner = "\n\
        ╔════════════════════════════════════════╗\n\
        ║                                        ║\n\
        ║   Cybersecurity Awareness Assistant    ║\n\
        ║                                        ║\n\
        ╚════════════════════════════════════════╝";
    print_colored(banner, Color::Magenta, plain)?;
    println!();
    Ok(())
}

/// Print styled text without a trailing newline.
fn print_colored(text: &str, color: Color, plain: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    if plain {
        write!(stdout, "{text}")?;
        return stdout.flush();
    }
    execute!(stdout, SetForegroundColor(color))?;
    write!(stdout, "{text}")?;
    execute!(stdout, ResetColor)?;
    stdout.flush()
}

/// Typewriter-print a line: per-character delay, then a newline.
fn type_line(text: &str, color: Color, plain: bool) -> io::Result<()> {
    if plain {
        println!("{text}");
        return Ok(());
    }
    let mut stdout = io::stdout();
    execute!(stdout, SetForegroundColor(color))?;
    for ch in text.chars() {
        write!(stdout, "{ch}")?;
        stdout.flush()?;
        thread::sleep(TYPE_DELAY);
    }
    execute!(stdout, ResetColor)?;
    writeln!(stdout)?;
    Ok(())
}

fn print_help() {
    println!("secbot - cybersecurity awareness chatbot");
    println!();
    println!("USAGE:");
    println!("  secbot [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help            Show this help message");
    println!("  --name <NAME>         Skip the name prompt");
    println!("  --transcript <PATH>   Write the session transcript as JSON on exit");
    println!("  --plain               Disable colors and typewriter animation");
    println!();
    println!("Ask about: passwords, phishing, safe browsing, social engineering, or 2FA.");
    println!("Say \"remember <topic>\" and the bot keeps track of your interests;");
    println!("say \"tell me more\" to continue the last topic. Type 'exit' to quit.");
}
