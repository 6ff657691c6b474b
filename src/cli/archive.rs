// Archival CLI command

use std::io::{self, Write};

use chrono::NaiveDate;

use crate::stores::AuditStore;

/// Move events older than `before` into the archival table
///
/// # Arguments
/// * `before` - Cutoff date (YYYY-MM-DD); midnight canonical time
/// * `skip_confirmation` - Do not prompt before moving rows
pub async fn archive_events(
    audit_store: &AuditStore,
    before: &str,
    skip_confirmation: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let cutoff = NaiveDate::parse_from_str(before.trim(), "%Y-%m-%d")
        .map_err(|e| format!("Invalid --before date '{}': {}", before, e))?
        .and_hms_opt(0, 0, 0)
        .ok_or("Invalid cutoff time")?;

    if !skip_confirmation {
        println!("⚠️  WARNING: Events before {} will be moved to audit_events_archival.", cutoff);
        print!("   Continue? (yes/no): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if input.trim().to_lowercase() != "yes" {
            println!("❌ Archival cancelled.");
            return Ok(());
        }
    }

    let moved = audit_store.archive_before(cutoff).await?;
    println!("✅ Archived {} audit event(s) older than {}", moved, cutoff);

    Ok(())
}
