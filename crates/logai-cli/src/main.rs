// LogAI CLI - terminal client for the log analytics mock API

use clap::{Parser, Subcommand};
use colored::Colorize;
use comfy_table::{Table, presets::UTF8_FULL};
use logai_core::{LogLevel, LogRecord};
use logai_intent::{ChatResult, Intent};
use serde::Deserialize;
use std::io::{self, Write};

const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Parser)]
#[command(name = "logai")]
#[command(author = "LogAI Team")]
#[command(version = "0.1.0")]
#[command(about = "Terminal client for the Log Analytics Agent API", long_about = None)]
struct Cli {
    /// API server URL
    #[arg(short, long, default_value = DEFAULT_API_URL, env = "LOGAI_API_URL")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List logs, optionally filtered by message or source
    Logs {
        /// Search term (matches message or source)
        #[arg(short, long)]
        query: Option<String>,

        /// Maximum logs to return
        #[arg(short, long, default_value = "50")]
        limit: i64,
    },

    /// Ask the chat endpoint about your logs
    Chat {
        /// Your question in natural language
        message: String,

        /// Do not fetch the logs matching the interpreted query
        #[arg(long)]
        no_follow: bool,

        /// Maximum logs to show when following up
        #[arg(short, long, default_value = "20")]
        limit: i64,
    },

    /// Check that the API is up
    Status,
}

// API Response types
#[derive(Deserialize)]
struct RootResponse {
    message: String,
}

#[derive(Deserialize)]
struct ChatApiResponse {
    response: String,
    action: ChatResult,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::builder().build()?;
    let api_url = cli.api_url.trim_end_matches('/');

    match cli.command {
        Commands::Logs { query, limit } => {
            show_logs(&client, api_url, query.as_deref(), limit).await?;
        }
        Commands::Chat { message, no_follow, limit } => {
            chat(&client, api_url, &message, !no_follow, limit).await?;
        }
        Commands::Status => {
            check_status(&client, api_url).await?;
        }
    }

    Ok(())
}

fn logs_url(api_url: &str, query: Option<&str>, limit: i64) -> String {
    match query {
        Some(q) => format!("{}/api/logs/?q={}&limit={}", api_url, urlencoding::encode(q), limit),
        None => format!("{}/api/logs/?limit={}", api_url, limit),
    }
}

async fn fetch_logs(
    client: &reqwest::Client,
    api_url: &str,
    query: Option<&str>,
    limit: i64,
) -> Result<Option<Vec<LogRecord>>, Box<dyn std::error::Error>> {
    let response = client.get(logs_url(api_url, query, limit)).send().await?;

    if !response.status().is_success() {
        let error = response.text().await?;
        println!("{} {}", "Error:".red().bold(), error);
        return Ok(None);
    }

    Ok(Some(response.json().await?))
}

async fn show_logs(
    client: &reqwest::Client,
    api_url: &str,
    query: Option<&str>,
    limit: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    match query {
        Some(q) => println!("\n{} \"{}\"", "Searching logs:".cyan().bold(), q),
        None => println!("\n{}", "Live Logs".cyan().bold()),
    }
    println!("{}", "─".repeat(80).dimmed());

    let Some(logs) = fetch_logs(client, api_url, query, limit).await? else {
        return Ok(());
    };

    print_logs(&logs);
    Ok(())
}

fn print_logs(logs: &[LogRecord]) {
    if logs.is_empty() {
        println!("{}", "No logs found.".yellow());
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Time", "Level", "Source", "Message", "Request"]);

    for log in logs {
        table.add_row(vec![
            log.timestamp.format("%H:%M:%S").to_string(),
            colored_level(log.level),
            log.source.to_string(),
            log.message.clone(),
            log.metadata.request_id.clone(),
        ]);
    }

    println!("{table}");
    println!("\n{} {}", "Events:".dimmed(), logs.len().to_string().green());
}

fn colored_level(level: LogLevel) -> String {
    match level {
        LogLevel::Error => level.as_str().red().to_string(),
        LogLevel::Warning => level.as_str().yellow().to_string(),
        LogLevel::Info => level.as_str().blue().to_string(),
        LogLevel::Debug => level.as_str().dimmed().to_string(),
    }
}

fn intent_label(intent: Intent) -> String {
    match intent {
        Intent::FilterLogs => "filter_logs".magenta().to_string(),
        Intent::SearchLogs => "search_logs".cyan().to_string(),
        Intent::GeneralSearch => "general_search".green().to_string(),
        Intent::Unknown => "unknown".dimmed().to_string(),
    }
}

async fn chat(
    client: &reqwest::Client,
    api_url: &str,
    message: &str,
    follow: bool,
    limit: i64,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n{} {}", "You:".bold(), message);

    let url = format!("{}/api/chat/", api_url);
    let response = client
        .post(&url)
        .json(&serde_json::json!({ "message": message }))
        .send()
        .await?;

    if !response.status().is_success() {
        let error = response.text().await?;
        println!("{} {}", "Error:".red().bold(), error);
        return Ok(());
    }

    let result: ChatApiResponse = response.json().await?;

    println!("{} {}", "Agent:".green().bold(), result.response);
    println!(
        "{} {} | {} {}",
        "Intent:".dimmed(),
        intent_label(result.action.interpreted_intent),
        "Query:".dimmed(),
        serde_json::to_string(&result.action.generated_query)?
    );

    // same follow-up the web UI does: re-query logs with the keyword or level
    if !follow {
        return Ok(());
    }
    let Some(term) = result.action.generated_query.search_term() else {
        return Ok(());
    };

    println!("\n{} \"{}\"", "Refreshing logs:".cyan().bold(), term);
    println!("{}", "─".repeat(80).dimmed());

    if let Some(logs) = fetch_logs(client, api_url, Some(term), limit).await? {
        print_logs(&logs);
    }

    Ok(())
}

async fn check_status(
    client: &reqwest::Client,
    api_url: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n{}", "System Status".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    print!("  API Server ({})... ", api_url);
    io::stdout().flush()?;

    match client.get(format!("{}/", api_url)).send().await {
        Ok(resp) if resp.status().is_success() => {
            let root: RootResponse = resp.json().await?;
            println!("{} {}", "✓".green(), root.message);
        }
        Ok(resp) => {
            println!("{} ({})", "✗ Error".red(), resp.status());
        }
        Err(e) => {
            println!("{} ({})", "✗ Down".red(), e);
        }
    }

    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_url_encodes_query() {
        assert_eq!(
            logs_url("http://localhost:8000", Some("login failed"), 20),
            "http://localhost:8000/api/logs/?q=login%20failed&limit=20"
        );
        assert_eq!(
            logs_url("http://localhost:8000", None, 50),
            "http://localhost:8000/api/logs/?limit=50"
        );
    }

    #[test]
    fn test_chat_response_parses() {
        let body = r#"{
            "response": "Searching for logs containing 'login'.",
            "action": {
                "original_query": "login history",
                "interpreted_intent": "search_logs",
                "generated_query": {"keyword": "login"},
                "explanation": "Searching for logs containing 'login'."
            }
        }"#;
        let parsed: ChatApiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.action.interpreted_intent, Intent::SearchLogs);
        assert_eq!(parsed.action.generated_query.search_term(), Some("login"));
        assert_eq!(parsed.response, parsed.action.explanation);
    }

    #[test]
    fn test_cli_parses_chat_flags() {
        let cli = Cli::try_parse_from(["logai", "chat", "show errors", "--no-follow"]).unwrap();
        match cli.command {
            Commands::Chat { message, no_follow, limit } => {
                assert_eq!(message, "show errors");
                assert!(no_follow);
                assert_eq!(limit, 20);
            }
            _ => panic!("expected chat command"),
        }
    }
}
