// ABOUTME: Clean command implementation.
// ABOUTME: Builds the retention policy and runs the cleaner against every hosted repository.

use crate::cli::CleanArgs;
use chrono::Utc;
use nexus_cleaner::cleanup::{Cleaner, Mode, OutcomeStatus};
use nexus_cleaner::config::{Config, PolicyOverrides};
use nexus_cleaner::error::Result;
use nexus_cleaner::nexus::NexusClient;
use nexus_cleaner::output::Output;

/// Apply the retention policy to every selected repository.
pub async fn clean(config: Config, args: CleanArgs, mut output: Output) -> Result<()> {
    let overrides = PolicyOverrides {
        count: args.count,
        days: args.days,
        names: args.names,
    };
    // Policy errors are configuration errors: fail before touching the server.
    let policy = config.retention.policy(&overrides)?;
    let client = NexusClient::new(&config)?;

    output.start_timer();
    let mode = if args.dry_run { Mode::DryRun } else { Mode::Live };

    let mut summary = format!("Keeping the newest {} versions", policy.keep());
    if let Some(days) = policy.max_age().map(|age| age.num_days()) {
        summary.push_str(&format!(", deleting only versions older than {days} day(s)"));
    }
    if let Some(names) = policy.names() {
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        summary.push_str(&format!(" of {}", names.join(", ")));
    }
    if mode == Mode::DryRun {
        summary.push_str(" (dry run)");
    }
    output.progress(&format!("{summary} on {}", client.base_url()));

    let cleaner = Cleaner::new(&client, policy)
        .format(config.format.as_str())
        .mode(mode)
        .full_info(args.full_info)
        .only(args.repositories);

    let report = cleaner.run(Utc::now(), &mut output).await?;

    let failed = report.count(OutcomeStatus::Failed);
    if failed > 0 {
        output.warning(&format!("{failed} deletion(s) failed"));
    }

    output.json("summary", &report_summary(&report));
    output.success(&format!(
        "Cleaned {} repositories: {} deleted, {} failed, {} dry run",
        report.repositories.len(),
        report.count(OutcomeStatus::Deleted),
        failed,
        report.count(OutcomeStatus::DryRun),
    ));
    Ok(())
}

#[derive(serde::Serialize)]
struct Summary {
    repositories: usize,
    deleted: usize,
    failed: usize,
    dry_run: usize,
}

fn report_summary(report: &nexus_cleaner::cleanup::CleanupReport) -> Summary {
    Summary {
        repositories: report.repositories.len(),
        deleted: report.count(OutcomeStatus::Deleted),
        failed: report.count(OutcomeStatus::Failed),
        dry_run: report.count(OutcomeStatus::DryRun),
    }
}
