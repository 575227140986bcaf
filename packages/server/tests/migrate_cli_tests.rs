//! Integration tests for the `migrate_cli` binary.

mod common;

use crate::common::TestHarness;
use serde_json::Value;
use test_context::test_context;
use tokio::process::Command;

/// Run `migrate_cli <command>` against `database_url` and decode its stdout.
async fn migrate_cli(command: &str, database_url: &str) -> Value {
    let output = Command::new(env!("CARGO_BIN_EXE_migrate_cli"))
        .arg(command)
        .env("DATABASE_URL", database_url)
        .output()
        .await
        .expect("spawn migrate_cli");

    assert!(
        output.status.success(),
        "migrate_cli {} failed: {}",
        command,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is a single JSON document")
}

fn applied_flags(listing: &Value) -> Vec<bool> {
    listing["migrations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["applied"].as_bool().unwrap())
        .collect()
}

/// `list` reports pending migrations, `run` applies them, `list` then shows
/// them applied.
#[test_context(TestHarness)]
#[tokio::test]
async fn run_applies_every_pending_migration(ctx: &TestHarness) {
    let url = ctx.empty_database_url().await.unwrap();

    let before = migrate_cli("list", &url).await;
    assert_eq!(before["success"], true);
    let pending = applied_flags(&before);
    assert!(!pending.is_empty());
    assert!(pending.iter().all(|applied| !applied));

    let run = migrate_cli("run", &url).await;
    assert_eq!(run["success"], true);

    let after = migrate_cli("list", &url).await;
    assert_eq!(applied_flags(&after), vec![true; pending.len()]);
    assert_eq!(after["migrations"][0]["description"], "create providers");
}

/// A second `run` finds nothing pending and still succeeds.
#[test_context(TestHarness)]
#[tokio::test]
async fn run_on_migrated_database_is_idempotent(ctx: &TestHarness) {
    let url = ctx.empty_database_url().await.unwrap();

    assert_eq!(migrate_cli("run", &url).await["success"], true);
    assert_eq!(migrate_cli("run", &url).await["success"], true);

    let listing = migrate_cli("list", &url).await;
    assert!(applied_flags(&listing).into_iter().all(|applied| applied));
}
