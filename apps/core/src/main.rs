// SupportBot terminal harness
// Smoke test over sample questions, or an interactive chat session.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use supportbot_core::telemetry::init_tracing;
use supportbot_core::{Chatbot, ChatbotConfig, MatchResult};
use tracing::info;

/// Questions the smoke test runs through the engine
const SAMPLE_QUESTIONS: &[&str] = &[
    "Hello",
    "Where is my order?",
    "What is your return policy?",
    "How can I track my order?",
    "Do you offer international shipping?",
    "What payment methods do you accept?",
    "How do I cancel my order?",
    "This is a random question that doesn't match anything",
    "Thank you, goodbye!",
];

#[derive(Parser, Debug)]
#[command(name = "supportbot")]
#[command(version)]
#[command(about = "Rule-based customer support chatbot")]
struct Cli {
    /// Knowledge base JSON file [env: SUPPORTBOT_KB_PATH]
    #[arg(long)]
    knowledge_base: Option<PathBuf>,

    /// Seed for greeting/fallback phrasing [env: SUPPORTBOT_SEED]
    #[arg(long)]
    seed: Option<u64>,

    /// User id to send messages as [env: SUPPORTBOT_USER_ID]
    #[arg(long)]
    user_id: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the sample questions and print each answer
    Smoke,
    /// Chat interactively (type /help for commands)
    Chat,
}

fn print_reply(result: &MatchResult) {
    println!("Bot: {}", result.response);
    println!(
        "Intent: {} | Confidence: {:.2}",
        result.label().unwrap_or("none"),
        result.confidence
    );
}

fn run_smoke(bot: &Chatbot, user_id: &str) {
    println!("Testing Customer Support Chatbot\n");
    println!("{}", "=".repeat(50));

    for (i, question) in SAMPLE_QUESTIONS.iter().enumerate() {
        println!("\n[{}] User: {}", i + 1, question);
        let result = bot.process(question, user_id);
        print_reply(&result);
        println!("{}", "-".repeat(50));
    }

    println!("\nChatbot test completed!");
}

fn print_help() {
    println!("Available commands:");
    println!("  /help              Show this help message");
    println!("  /clear             Clear conversation history");
    println!("  /history           Show your messages so far");
    println!("  /set <key> <value> Store a value (e.g. /set order_id X123)");
    println!("  /unset <key>       Forget a stored value");
    println!("  /context           Show your stored values");
    println!("  /quit              Leave the chat");
    println!();
    println!("Sample questions:");
    for question in SAMPLE_QUESTIONS.iter().take(5).skip(1) {
        println!("  \"{}\"", question);
    }
}

fn run_chat(bot: &Chatbot, user_id: &str) -> Result<()> {
    println!("Welcome to Customer Support Chatbot! Type /help for commands.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().context("failed to flush stdout")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("failed to read input")? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);

        match line.split_whitespace().next() {
            Some("/quit") => break,
            Some("/help") => print_help(),
            Some("/clear") => {
                bot.clear(user_id);
                println!("Conversation history cleared!");
            }
            Some("/history") => {
                for record in bot.history(user_id) {
                    println!("[{}] {}", record.timestamp.format("%H:%M:%S"), record.user_message);
                }
            }
            Some("/set") => {
                let mut parts = line.splitn(3, char::is_whitespace).skip(1);
                match (parts.next(), parts.next()) {
                    (Some(key), Some(value)) if !key.is_empty() && !value.trim().is_empty() => {
                        bot.set_context(user_id, key, value.trim());
                        println!("Saved {}.", key);
                    }
                    _ => println!("Usage: /set <key> <value>"),
                }
            }
            Some("/unset") => match line.split_whitespace().nth(1) {
                Some(key) => match bot.unset_context(user_id, key) {
                    Some(_) => println!("Removed {}.", key),
                    None => println!("Nothing stored for {}.", key),
                },
                None => println!("Usage: /unset <key>"),
            },
            Some("/context") => {
                let mut entries: Vec<_> = bot.context(user_id).into_iter().collect();
                entries.sort();
                if entries.is_empty() {
                    println!("No stored values.");
                }
                for (key, value) in entries {
                    println!("  {} = {}", key, value);
                }
            }
            _ => print_reply(&bot.process(line, user_id)),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ChatbotConfig::from_env()
        .and_then(|config| {
            config.with_overrides(
                cli.knowledge_base
                    .map(|path| path.to_string_lossy().into_owned()),
                cli.seed,
                cli.user_id,
            )
        })
        .context("invalid configuration")?;
    init_tracing();

    let user_id = config.session_user_id();

    info!("Starting SupportBot with knowledge base {:?}", config.knowledge_base_path);
    let bot = Chatbot::from_config(&config);

    match cli.command.unwrap_or(Command::Chat) {
        Command::Smoke => run_smoke(&bot, &user_id),
        Command::Chat => run_chat(&bot, &user_id)?,
    }

    Ok(())
}
