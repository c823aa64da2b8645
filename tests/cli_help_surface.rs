mod common;

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

use common::{PASSWORD, USER, spawn_fake_crm};

fn run_console(config_dir: Option<&Path>, args: &[&str]) -> Result<std::process::Output> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_crm-console"));
    if let Some(dir) = config_dir {
        cmd.arg("--config-dir").arg(dir);
    }
    cmd.args(args)
        .env_remove("CRM_CONSOLE_LOG")
        .output()
        .with_context(|| format!("run crm-console {:?}", args))
}

fn run_ok(config_dir: Option<&Path>, args: &[&str]) -> Result<String> {
    let out = run_console(config_dir, args)?;
    if !out.status.success() {
        anyhow::bail!(
            "crm-console {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
            args,
            out.status,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}

#[test]
fn cli_help_surface_is_stable() -> Result<()> {
    let help = run_ok(None, &["--help"])?;
    assert!(help.contains("Usage: crm-console"));
    assert!(help.contains("[COMMAND]"));
    for cmd in ["login", "cars", "customers", "leases", "transactions", "company", "tui"] {
        assert!(help.contains(cmd), "missing {} in\n{}", cmd, help);
    }

    let cars_help = run_ok(None, &["cars", "--help"])?;
    assert!(cars_help.contains("Usage: crm-console cars [OPTIONS] <COMMAND>"));
    assert!(cars_help.contains("bulk-delete"));

    let leases_help = run_ok(None, &["leases", "--help"])?;
    assert!(leases_help.contains("return"));
    assert!(leases_help.contains("list"));

    Ok(())
}

#[test]
fn record_commands_need_a_login() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = run_console(Some(dir.path()), &["cars", "list"])?;
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not logged in"), "{}", stderr);
    Ok(())
}

#[test]
fn login_list_and_delete_end_to_end() -> Result<()> {
    let crm = spawn_fake_crm();
    crm.seed_cars(7);
    let dir = tempfile::tempdir()?;
    let cfg = Some(dir.path());
    let url = crm.base_url.as_str();

    let out = run_ok(
        cfg,
        &["--base-url", url, "login", "--username", USER, "--password", PASSWORD],
    )?;
    assert!(out.contains("Logged in as dana"));

    let out = run_ok(
        cfg,
        &["--base-url", url, "cars", "list", "--page-size", "5", "--page", "2", "--json"],
    )?;
    let v: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(v["total_count"], 7);
    assert_eq!(v["total_pages"], 2);
    assert_eq!(v["cars"].as_array().map(Vec::len), Some(2));

    let out = run_ok(cfg, &["--base-url", url, "cars", "list", "--search", "toyota"])?;
    assert!(out.contains("page 1/1 · total 7 · size 10"), "{}", out);

    run_ok(cfg, &["--base-url", url, "cars", "delete", "3", "--yes"])?;
    let out = run_console(cfg, &["--base-url", url, "cars", "bulk-delete", "1", "3", "--yes"])?;
    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("deleted 1"), "{}", stdout);
    assert!(stdout.contains("failed  3"), "{}", stdout);

    run_ok(cfg, &["logout"])?;
    let out = run_console(cfg, &["--base-url", url, "whoami"])?;
    assert!(!out.status.success());
    Ok(())
}
