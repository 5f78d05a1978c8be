//! Charm-style CLI prompts using cliclack

use crate::error::ScaffoldError;
use crate::manifest;
use crate::product::ProductConfig;
use crate::runtime;
use crate::scaffold::{self, ScaffoldRequest};
use crate::templates::{self, copier, TemplateDescriptor, CATALOG};
use anyhow::Result;
use colored::Colorize;
use std::io;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name from the positional argument (prompted for when absent)
    pub project_name: Option<String>,

    /// Template id to use, bypassing the selection prompt
    pub template: Option<String>,

    /// Auto-confirm the overwrite prompt (non-interactive mode)
    pub yes: bool,
}

/// Run the interactive create flow
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(format!("⚡ {}", config.display_name())).map_err(cancel_or_io)?;
    cliclack::log::remark(config.tagline()).map_err(cancel_or_io)?;

    // Step 1: Project name (positional arg and prompt validate identically)
    let project_name = resolve_project_name(config, args.project_name.as_deref())?;

    // Step 2: Template selection from the fixed catalog
    let template = resolve_template(args.template.as_deref())?;

    // Step 3: Destination under the working directory
    let cwd = std::env::current_dir()?;
    let destination = scaffold::resolve_destination(&project_name, &cwd);

    // Step 4: Destructive removal only after explicit confirmation
    scaffold::prepare_destination(&destination, || {
        confirm_overwrite(&project_name, args.yes)
    })?;

    let request = ScaffoldRequest {
        project_name,
        template: template.id,
        destination,
    };

    // Step 5: Copy the tree, then patch the manifest
    create_project(config, &request).await?;

    // Step 6: Advisory toolchain report
    report_toolchain()?;

    // Step 7: Show next steps
    print_next_steps(config, &request)?;

    Ok(())
}

/// Map a cliclack prompt abort to `Cancelled`; other I/O errors pass through
fn cancel_or_io(e: io::Error) -> ScaffoldError {
    if e.kind() == io::ErrorKind::Interrupted {
        ScaffoldError::Cancelled
    } else {
        ScaffoldError::Io(e)
    }
}

fn resolve_project_name<C: ProductConfig>(
    config: &C,
    positional: Option<&str>,
) -> Result<String, ScaffoldError> {
    if let Some(name) = positional {
        scaffold::validate_project_name(name)?;
        cliclack::log::info(format!("Project name: {name}")).map_err(cancel_or_io)?;
        return Ok(name.to_string());
    }

    let name: String = cliclack::input("Project name")
        .placeholder(config.default_project_name())
        .default_input(config.default_project_name())
        .validate(|value: &String| match scaffold::validate_project_name(value) {
            Ok(()) => Ok(()),
            Err(e) => Err(e.to_string()),
        })
        .interact()
        .map_err(cancel_or_io)?;

    Ok(name)
}

fn resolve_template(
    specified: Option<&str>,
) -> Result<&'static TemplateDescriptor, ScaffoldError> {
    if let Some(raw) = specified {
        let id = templates::TemplateId::parse(raw).ok_or_else(|| {
            ScaffoldError::Validation(format!(
                "unknown template '{raw}' (expected web, mobile or server)"
            ))
        })?;
        let descriptor = templates::descriptor(id);
        cliclack::log::info(format!("Template: {}", descriptor.title)).map_err(cancel_or_io)?;
        return Ok(descriptor);
    }

    let mut select = cliclack::select("Select a template");
    for (idx, descriptor) in CATALOG.iter().enumerate() {
        select = select.item(idx, descriptor.title, descriptor.description);
    }
    let selected: usize = select.interact().map_err(cancel_or_io)?;

    Ok(&CATALOG[selected])
}

fn confirm_overwrite(project_name: &str, yes: bool) -> Result<bool, ScaffoldError> {
    cliclack::log::warning(format!("Directory {project_name} already exists"))
        .map_err(cancel_or_io)?;

    if yes {
        return Ok(true);
    }

    cliclack::confirm("Overwrite it?")
        .initial_value(false)
        .interact()
        .map_err(cancel_or_io)
}

async fn create_project<C: ProductConfig>(config: &C, request: &ScaffoldRequest) -> Result<()> {
    let source = templates::resolve_template_dir(request.template)?;

    let spinner = cliclack::spinner();
    spinner.start(format!(
        "Generating {} project in {}...",
        request.template,
        request.destination.display()
    ));

    let copied = copier::copy_template_tree(&source, &request.destination).await?;
    manifest::patch_manifest(&request.destination, config.pinned_dependencies()).await?;

    spinner.stop(format!(
        "Created {} files in {}",
        copied,
        request.destination.display()
    ));

    Ok(())
}

fn report_toolchain() -> Result<(), ScaffoldError> {
    let runtimes = runtime::check_js_toolchain();
    let summary: Vec<String> = runtimes
        .iter()
        .map(|r| {
            if r.available {
                format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown"))
            } else {
                format!("{} (not installed)", r.name)
            }
        })
        .collect();

    cliclack::log::info(format!("Detected toolchain: {}", summary.join(", ")))
        .map_err(cancel_or_io)
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    request: &ScaffoldRequest,
) -> Result<(), ScaffoldError> {
    cliclack::log::success(format!(
        "Project created successfully! Template: {}",
        request.template
    ))
    .map_err(cancel_or_io)?;

    let steps = config.next_steps(&request.destination);

    println!();
    println!("  {}", "Next steps".bold());
    println!();
    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }
    println!();

    cliclack::outro(config.outro()).map_err(cancel_or_io)?;

    Ok(())
}
