//! tagmatch - demo CLI
//!
//! Console showcase of every operation. The library contract is the
//! in-process call; this binary only prints the conventional output.

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use clap::Parser;
use tagmatch::util::logger;
use tagmatch::{
    attach_id, describe_state, describe_unknown, format_date, greet, greet_all, greet_input,
    outcome_message, project, DataState, DateInput, Field, Input, Outcome, User, UserId, VERSION,
};

/// Exhaustive dispatch over closed tag sets, demonstrated on the console
#[derive(Parser, Debug)]
#[command(name = "tagmatch")]
#[command(version = VERSION)]
struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_with_level(logger::resolve_level(args.verbose));

    // Tagged-result dispatch
    println!("{}", describe_state(&DataState::Loading));
    let failed = DataState::from_json(r#"{"state":"failed","error":"timeout"}"#)
        .context("Failed to ingest data state")?;
    println!("{}", describe_state(&failed));
    let success = DataState::from_json(r#"{"state":"success","data":{"title":"TypeScript"}}"#)
        .context("Failed to ingest data state")?;
    println!("{}", describe_state(&success));
    for outcome in Outcome::ALL {
        println!("{}", outcome_message(outcome));
    }

    // Greetings, scalar and sequence
    println!("{}", greet("Mario"));
    for line in greet_all(["Mario", "Luigi"]) {
        println!("{}", line);
    }
    let greeted = greet_input(&Input::from_json(r#"["Mario","Luigi"]"#)?)
        .context("Failed to greet input")?;
    println!("{}", greeted);

    // Unknown narrowing
    println!("{}", describe_unknown(&Input::from("string")));
    println!("{}", describe_unknown(&Input::Number(10.0)));

    // Users
    let mario = User {
        first_name: "Mario".to_string(),
        last_name: "Lazzari".to_string(),
        age: Some(50),
        is_admin: true,
    };
    let maria = User::new("Maria", "Lazzari");
    println!("{}", mario.summary());
    println!("{}", maria.summary());
    println!("{}", UserId::Name("Mario".to_string()).lookup_key());
    println!("{}", UserId::Number(42).lookup_key());
    for row in project(&[mario.clone(), maria], &Field::ALL) {
        println!("{}", row.join(" | "));
    }
    let tagged = attach_id(mario);
    println!("{} -> id {}", tagged.value.full_name(), tagged.id);

    // Dates
    let instant = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .context("Invalid demo timestamp")?;
    println!("{}", format_date(&DateInput::Timestamp(instant))?);
    println!("{}", format_date(&DateInput::from("2024-01-01"))?);

    Ok(())
}
