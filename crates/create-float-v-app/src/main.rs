//! create-app - project scaffolding for the Float-V UI framework

use clap::Parser;
use colored::Colorize;
use create_core::tui::CreateArgs;
use create_core::{ProductConfig, ScaffoldError};
use std::path::Path;
use std::process::ExitCode;

/// Float-V product configuration
#[derive(Clone)]
pub struct FloatVConfig;

impl ProductConfig for FloatVConfig {
    fn name(&self) -> &'static str {
        "create-float-v-app"
    }

    fn display_name(&self) -> &'static str {
        "Create Float-V App"
    }

    fn tagline(&self) -> &'static str {
        "Ultra Modern Web Framework"
    }

    fn default_project_name(&self) -> &'static str {
        "my-float-app"
    }

    fn pinned_dependencies(&self) -> &'static [(&'static str, &'static str)] {
        &[("@float-v/core", "^1.0.0"), ("@float-v/lite", "^1.0.0")]
    }

    fn cli_description(&self) -> &'static str {
        "Scaffold a new Float-V application from a packaged template"
    }

    fn outro(&self) -> &'static str {
        "Happy coding with Float-V! ⚡"
    }

    fn next_steps(&self, dir: &Path) -> Vec<String> {
        let mut steps = Vec::new();

        if let Some(name) = dir.file_name() {
            steps.push(format!("cd {}", name.to_string_lossy()));
        }
        steps.push("pnpm install".to_string());
        steps.push("pnpm dev".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-app")]
#[command(about = "Scaffold a new Float-V application from a packaged template")]
#[command(version)]
pub struct Args {
    /// Project name (prompted for when omitted)
    pub project_name: Option<String>,

    /// Template to use (web, mobile, server), bypassing the selection prompt
    #[arg(short, long)]
    pub template: Option<String>,

    /// Auto-confirm the overwrite prompt (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = FloatVConfig;

    let result = create_core::run(
        &config,
        CreateArgs {
            project_name: args.project_name,
            template: args.template,
            yes: args.yes,
        },
    )
    .await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ScaffoldError>() {
                // A declined prompt is not a failure worth a stack trace
                Some(ScaffoldError::Cancelled) => {
                    eprintln!();
                    eprintln!("{}", "❌ Project creation cancelled".red());
                    eprintln!();
                }
                _ => {
                    eprintln!("{} {err:#}", "Error:".red().bold());
                }
            }
            ExitCode::FAILURE
        }
    }
}
