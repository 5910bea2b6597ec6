//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::cli::{AnalyzeArgs, Args, Command, ConvertArgs};
use chatlens::core::session::{AnalysisSession, Report, View};
use chatlens::core::apply_filters;
use chatlens::format::{OutputFormat, write_to_format};
use chatlens::{ChatLogParser, ChatlensError, ParseResult};

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("❌ Error: {e}");
        if let Some(hint) = e.hint() {
            eprintln!("💡 {hint}");
        }
        process::exit(1);
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), ChatlensError> {
    let args = <Args as ClapParser>::parse();

    println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    match args.command {
        Command::Convert(convert) => run_convert(&convert),
        Command::Analyze(analyze) => run_analyze(&analyze),
    }
}

fn parse_input(input: &str) -> Result<ParseResult, ChatlensError> {
    println!("⏳ Parsing {input}...");
    let start = Instant::now();
    let result = ChatLogParser::new().parse_file(input)?;

    println!(
        "   Found {} messages ({:.2}s)",
        result.len(),
        start.elapsed().as_secs_f64()
    );
    if !result.is_complete() {
        println!(
            "   ⚠️  Skipped {} of {} headers with unreadable timestamps",
            result.failed, result.headers_found
        );
    }
    Ok(result)
}

fn run_convert(args: &ConvertArgs) -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let format = OutputFormat::from(args.format);

    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {output_path}");
    println!("📄 Format:  {format}");
    if let Some(ref after) = args.after {
        println!("📅 After:   {after}");
    }
    if let Some(ref before) = args.before {
        println!("📅 Before:  {before}");
    }
    if let Some(ref from) = args.from {
        println!("👤 From:    {from}");
    }
    println!();

    // validate dates before touching the input
    let filter_config = args.filter_config()?;

    let result = parse_input(&args.input)?;
    let original_count = result.len();

    let messages = if filter_config.is_active() {
        println!("🔍 Filtering messages...");
        let filtered = apply_filters(result.into_messages(), &filter_config);
        println!("   {} messages after filtering", filtered.len());
        filtered
    } else {
        result.into_messages()
    };

    println!("💾 Writing {format}...");
    let write_start = Instant::now();
    write_to_format(&messages, &output_path, format, &args.output_config())?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("✅ Done! Output saved to {output_path}");
    println!();
    println!("📊 Summary:");
    println!("   Parsed:    {original_count} messages");
    if filter_config.is_active() {
        println!("   Filtered:  {} messages", messages.len());
    }
    println!(
        "   Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn run_analyze(args: &AnalyzeArgs) -> Result<(), ChatlensError> {
    println!("📂 Input:   {}", args.input);
    println!();

    let result = parse_input(&args.input)?;
    let session = AnalysisSession::new(result, args.session_config())?;

    println!(
        "👥 Participants: {} and {}",
        session.first(),
        session.second()
    );
    println!();

    let view = View::from(args.view);
    print_report(&session.report(view));

    if let Some(ref phrase) = args.phrase {
        let cmp = session.phrase_comparison(phrase);
        println!();
        println!("💬 Messages containing \"{}\":", cmp.phrase);
        println!("   {:<20} {}", session.first(), cmp.first);
        println!("   {:<20} {}", session.second(), cmp.second);
    }

    Ok(())
}

fn print_report(report: &Report) {
    println!("💖 {}", report.title);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", report.message_count);
    println!();

    println!("🔤 Keyword frequency (messages containing the word):");
    if report.has_no_keywords() {
        match report.participant {
            Some(ref name) => println!("   {name} didn't use any of the tracked words."),
            None => println!("   None of the tracked words were found in the chat."),
        }
    } else {
        for entry in &report.keywords {
            println!("   {:<20} {}", entry.keyword, entry.count);
        }
    }

    println!();
    println!("☁️  Most common words:");
    if report.top_tokens.is_empty() {
        println!("   (no words)");
    }
    for entry in &report.top_tokens {
        println!("   {:<20} {}", entry.token, entry.count);
    }
}
