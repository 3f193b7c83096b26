use anyhow::Result;
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::io::{BufRead, Write};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use voxcal::config::Config;
use voxcal::context::StandardContext;
use voxcal::model::Locale;
use voxcal::scheduler::SimulatedCalendar;
use voxcal::session::{Response, Session};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h" || a == "help") {
        print_help();
        return Ok(());
    }

    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let json = args.iter().any(|a| a == "--json");
    let locale_flag = args
        .iter()
        .position(|a| a == "--locale")
        .and_then(|i| args.get(i + 1))
        .map(|v| Locale::from_str(v))
        .transpose()
        .map_err(|_| anyhow::anyhow!("--locale expects 'en' or 'zh'"))?;

    TermLogger::init(
        if verbose { LevelFilter::Debug } else { LevelFilter::Warn },
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let ctx = StandardContext::new(None);
    let config = Config::load_or_default(&ctx)?;
    let locale = locale_flag.or(config.locale);

    let calendar = Arc::new(SimulatedCalendar::with_busy_chance(config.simulate_busy_chance));
    let session = Session::new(calendar)
        .with_submit_timeout(Duration::from_secs(config.submit_timeout_secs))
        .with_max_reschedule_attempts(config.max_reschedule_attempts)
        .with_locale(locale);

    println!("Tell me what to schedule ('quit' to exit).");

    let stdin = std::io::stdin();
    let mut awaiting_conflict = false;
    let mut out = std::io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if matches!(input, "quit" | "exit") {
            break;
        }

        let response = if awaiting_conflict {
            session.reschedule(input).await?
        } else {
            session.schedule(input).await?
        };

        awaiting_conflict = matches!(response, Response::Conflict { .. });

        if json && let Some(event) = response.event() {
            println!("{}", serde_json::to_string_pretty(event)?);
        }
        println!("{}", response.message());
        out.flush()?;
    }

    Ok(())
}

fn print_help() {
    println!(
        "voxcal v{} - natural-language calendar assistant (CLI)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    assistant                    Start the interactive prompt");
    println!("    assistant --locale <en|zh>   Force the keyword tables");
    println!("    assistant --json             Also print the parsed event as JSON");
    println!("    assistant --verbose          Debug logging on stderr");
    println!("    assistant --help             Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    schedule a meeting with the ceo tomorrow from 2pm to 4pm");
    println!("    lunch with sarah friday at noon");
    println!("    team standup next monday 9:30 am");
    println!("    明天下午三点开会");
    println!();
    println!("When a slot conflicts, the next line you type is read as the");
    println!("replacement time (e.g. '3 pm instead').");
}
