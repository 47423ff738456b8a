//! Custom cargo commands for the swapwise crate.
//!
//! Usage:
//!   cargo xtask verify        - Run full verification suite
//!   cargo xtask test          - Run all tests
//!   cargo xtask check         - Quick check (test + clippy)
//!   cargo xtask bench         - Run benchmarks
//!   cargo xtask kani          - Run Kani model checking proofs
//!   cargo xtask fuzz <target> - Run one fuzz target for 60 seconds

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets defined in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["reverse_involution", "zero_push", "witness_rejection"];

/// Minimum number of `INVARIANT:` markers expected under src/.
const MIN_INVARIANT_MARKERS: usize = 6;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("kani") => kani()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify          Run full verification suite (markers + tests + clippy + kani)
  test            Run all Rust tests
  check           Quick check (cargo test + clippy)
  bench           Run benchmarks
  kani            Run Kani proofs in kani-proofs/
  fuzz <target>   Run a fuzz target for 60 seconds ({})
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("swapwise Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--workspace", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--workspace", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Running Kani proofs...");
    kani()?;

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests, including the standalone proofs crate's unit tests
fn test() -> Result<()> {
    run_cargo(&["test", "--workspace"])?;
    run_cargo_in(&project_root()?.join("kani-proofs"), &["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run Kani proofs, skipping when cargo-kani is not installed
fn kani() -> Result<()> {
    let available = Command::new("cargo")
        .args(["kani", "--version"])
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false);
    if !available {
        println!("  (cargo-kani not installed, skipping)\n");
        return Ok(());
    }

    run_cargo_in(&project_root()?.join("kani-proofs"), &["kani"])?;
    println!("✓ Kani proofs verified\n");
    Ok(())
}

/// Run a single fuzz target (requires nightly + cargo-fuzz)
fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("missing fuzz target; one of: {}", FUZZ_TARGETS.join(", "));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!(
            "unknown fuzz target '{}'; one of: {}",
            target,
            FUZZ_TARGETS.join(", ")
        );
    }

    run_cargo(&[
        "+nightly",
        "fuzz",
        "run",
        target,
        "--",
        "-max_total_time=60",
    ])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    run_cargo_in(&project_root()?, args)
}

fn run_cargo_in(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output
        .stdout
        .split(|&b| b == b'\n')
        .filter(|l| !l.is_empty())
        .count();

    if count < MIN_INVARIANT_MARKERS {
        bail!(
            "Expected at least {} INVARIANT markers, found {}. Someone may have removed safety comments!",
            MIN_INVARIANT_MARKERS,
            count
        );
    }

    Ok(())
}
