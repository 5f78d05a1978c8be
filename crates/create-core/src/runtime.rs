//! Advisory runtime detection for the next-steps hint
//!
//! The generated projects are installed and run with a JavaScript toolchain,
//! so the flow reports what is available before printing next steps. Purely
//! advisory: a missing runtime never fails the scaffold.

use std::process::Command;

/// Result of probing one tool
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, bin: &str) -> RuntimeInfo {
    let output = Command::new(bin).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if Bun is available
pub fn check_bun() -> RuntimeInfo {
    probe("Bun", "bun")
}

/// Check if pnpm is available
pub fn check_pnpm() -> RuntimeInfo {
    probe("pnpm", "pnpm")
}

/// Probe the JavaScript toolchain the next steps assume
pub fn check_js_toolchain() -> Vec<RuntimeInfo> {
    vec![check_node(), check_bun(), check_pnpm()]
}
