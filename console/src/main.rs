//! Console binary entry point
//!
//! Interactive loop: prompt for a title, preview the generated article,
//! then publish, regenerate, or discard. Each action blocks until its one
//! backend call completes.

use std::io::Write;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use console::{ConsoleError, ConsoleResult, HttpBackend, Session};
use shared::{PublishOutcome, logging};

const DEFAULT_BACKEND_URL: &str = "http://localhost:8008";

/// Command line arguments for the presentation client
#[derive(Parser, Debug)]
#[command(name = "console")]
#[command(about = "Interactive article generation and publishing client")]
struct Args {
    /// Backend URL (overrides the BACKEND_URL environment variable)
    #[arg(long)]
    backend_url: Option<String>,

    /// Publish immediately instead of saving an unpublished draft
    #[arg(long)]
    publish_now: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ConsoleResult<()> {
    let args = Args::parse();

    let _ = dotenvy::dotenv();
    logging::init_tracing(Some(&args.log_level));

    let backend_url = args
        .backend_url
        .or_else(|| std::env::var("BACKEND_URL").ok())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

    let backend = HttpBackend::new(&backend_url)?;
    let mut session = Session::new(backend);

    println!("Article Generator (backend: {backend_url})");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        if session.can_publish() {
            if !preview_step(&mut session, &mut lines, args.publish_now).await? {
                break;
            }
        } else if !title_step(&mut session, &mut lines).await? {
            break;
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Prompt for a title and generate a draft; returns false on quit/EOF
async fn title_step<B: console::Backend>(
    session: &mut Session<B>,
    lines: &mut Lines<BufReader<Stdin>>,
) -> ConsoleResult<bool> {
    let Some(input) = prompt(lines, "Enter article title (or 'quit'): ").await? else {
        return Ok(false);
    };

    if input.is_empty() {
        return Ok(true);
    }
    if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
        return Ok(false);
    }

    println!("Generating article for '{input}'...");
    match session.generate(&input).await {
        Ok(()) => {
            if let Some(draft) = session.draft() {
                println!("\n--- Article Preview: {} ---\n", draft.title);
                println!("{}\n", draft.body);
            }
        }
        Err(e) => {
            eprintln!("Generation failed: {e}");
        }
    }

    Ok(true)
}

/// Offer actions on the held draft; returns false on quit/EOF
async fn preview_step<B: console::Backend>(
    session: &mut Session<B>,
    lines: &mut Lines<BufReader<Stdin>>,
    publish_now: bool,
) -> ConsoleResult<bool> {
    let Some(input) = prompt(lines, "[p]ublish, [r]egenerate, [d]iscard, [q]uit: ").await? else {
        return Ok(false);
    };

    match input.to_ascii_lowercase().as_str() {
        "p" | "publish" => match session.publish(publish_now).await {
            Ok(PublishOutcome::Success { url }) => {
                println!("Article published successfully! View it at: {url}");
            }
            Ok(PublishOutcome::Error { message }) => {
                eprintln!("Failed to publish article: {message}");
            }
            Err(ConsoleError::NoDraft) => {
                eprintln!("Nothing to publish yet");
            }
            Err(e) => {
                eprintln!("Publish failed: {e}");
            }
        },
        "r" | "regenerate" => {
            let title = session
                .draft()
                .map(|draft| draft.title.clone())
                .ok_or(ConsoleError::NoDraft)?;
            println!("Regenerating article for '{title}'...");
            match session.generate(&title).await {
                Ok(()) => {
                    if let Some(draft) = session.draft() {
                        println!("\n--- Article Preview: {} ---\n", draft.title);
                        println!("{}\n", draft.body);
                    }
                }
                Err(e) => {
                    eprintln!("Generation failed: {e}");
                }
            }
        }
        "d" | "discard" => {
            session.discard();
            println!("Draft discarded");
        }
        "q" | "quit" => return Ok(false),
        other => {
            println!("Unknown action: '{other}'");
        }
    }

    Ok(true)
}

/// Print a prompt and read one trimmed line; None on EOF
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, text: &str) -> ConsoleResult<Option<String>> {
    print!("{text}");
    std::io::stdout().flush()?;

    Ok(lines.next_line().await?.map(|line| line.trim().to_string()))
}
