//! Implementation of the `diffcue log` command.
//!
//! Prints events from `.diffcue/events.ndjson` of the current repository,
//! oldest first.

use crate::cli::LogArgs;
use crate::error::Result;
use crate::events::{Event, read_events};
use crate::git::get_repo_root;

/// Execute the `diffcue log` command.
pub fn cmd_log(args: LogArgs) -> Result<()> {
    let repo_root = get_repo_root(".")?;
    let events = read_events(&repo_root)?;

    if events.is_empty() {
        println!("No events recorded.");
        return Ok(());
    }

    let skip = args
        .limit
        .map(|limit| events.len().saturating_sub(limit))
        .unwrap_or(0);

    for event in events.iter().skip(skip) {
        if args.json {
            println!("{}", event.to_ndjson_line()?);
        } else {
            println!("{}", format_event(event));
        }
    }

    Ok(())
}

fn format_event(event: &Event) -> String {
    let mut line = format!(
        "{}  {:<18}  {}",
        event.ts.format("%Y-%m-%d %H:%M:%S"),
        event.action.to_string(),
        event.file.as_deref().unwrap_or("-")
    );

    let start = event.details.get("start_line").and_then(|v| v.as_u64());
    let end = event.details.get("end_line").and_then(|v| v.as_u64());
    match (start, end) {
        (Some(start), Some(end)) if start != end => line.push_str(&format!(":{}-{}", start, end)),
        (Some(start), _) => line.push_str(&format!(":{}", start)),
        _ => {}
    }

    if let Some(target) = event.details.get("target").and_then(|v| v.as_str()) {
        line.push_str(&format!("  -> {}", target));
    }

    line
}
