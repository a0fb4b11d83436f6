use anyhow::Context;
use serde::Deserialize;

/// Crate that must stay free of UI and I/O dependencies
const DOMAIN_CRATE: &str = "rickview-domain";

/// Dependencies the domain crate may never pull in
const FORBIDDEN_IN_DOMAIN: &[&str] = &[
    "dioxus",
    "dioxus-desktop",
    "reqwest",
    "tokio",
    "tracing-subscriber",
    "rickview-player",
];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;

    let violations = domain_violations(&metadata)?;
    if !violations.is_empty() {
        anyhow::bail!(
            "{DOMAIN_CRATE} depends on forbidden crates: {}",
            violations.join(", ")
        );
    }

    println!("arch-check: {DOMAIN_CRATE} dependencies OK");
    Ok(())
}

fn domain_violations(metadata: &Metadata) -> anyhow::Result<Vec<String>> {
    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_CRATE)
        .with_context(|| format!("{DOMAIN_CRATE} not found in workspace"))?;

    Ok(domain
        .dependencies
        .iter()
        .filter(|d| FORBIDDEN_IN_DOMAIN.contains(&d.name.as_str()))
        .map(|d| d.name.clone())
        .collect())
}
