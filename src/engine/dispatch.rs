//! engine::dispatch
//!
//! The dispatcher - the single entry point for running a script.
//!
//! # Lifecycle
//!
//! ```text
//! locate project -> build script table -> help? -> resolve script
//!     -> pre hook -> execute -> post hook -> finalize
//! ```
//!
//! The post hook runs whatever the script's exit code was, as long as the
//! script itself could be launched. A non-zero exit code becomes
//! [`Outcome::ProcessFailure`] carrying that exact code; every other
//! failure maps to exit 1 through [`Outcome`].

use super::exec::{self, ExecRequest};
use super::hooks::{self, ConfigHookRunner, HookEvent};
use super::shell;
use super::{Context, Outcome};
use crate::cli::Invocation;
use crate::core::manifest::Manifest;
use crate::core::paths::{find_project_root, MANIFEST_FILE};
use crate::ui::{help, output};

/// Run one parsed invocation to completion.
pub async fn dispatch(inv: &Invocation, ctx: &Context) -> Outcome {
    let Some(project) = find_project_root(&ctx.cwd) else {
        return Outcome::UsageError(format!(
            "not inside a project: no {} found in {} or any parent directory",
            MANIFEST_FILE,
            ctx.cwd.display()
        ));
    };

    let manifest = match Manifest::load(&project.manifest_path()) {
        Ok(manifest) => manifest,
        Err(err) => return Outcome::UnexpectedError(err.to_string()),
    };
    let table = manifest.script_table();

    if inv.help {
        // Unknown flags are advisory: reported, then help, then success.
        for flag in &inv.unknown_flags {
            output::warn(format!("unknown flag: {}", flag), ctx.verbosity());
        }
        print!("{}", help::render(&table, help::terminal_width()));
        return Outcome::Success;
    }

    let Some(body) = table.body(&inv.command) else {
        let names: Vec<&str> = table.names().collect();
        let listing = if names.is_empty() {
            "the project defines no scripts".to_string()
        } else {
            format!("available scripts: {}", names.join(", "))
        };
        return Outcome::UsageError(format!(
            "no script named \"{}\"; {}",
            inv.command, listing
        ));
    };

    let (command_line, display_line) = compose_command_line(body, &inv.args);
    output::print(format!("> {}", display_line), ctx.verbosity());
    output::debug(
        format!("running `{}` in {}", command_line, project.root().display()),
        ctx.verbosity(),
    );

    let runner = ConfigHookRunner::new(project.clone());
    hooks::run_hook_best_effort(&runner, HookEvent::Pre, ctx).await;

    let local_bin = project.local_bin_dir();
    let code = match exec::execute(&ExecRequest {
        command_line: &command_line,
        work_dir: project.root(),
        init_dir: &ctx.cwd,
        local_bin: &local_bin,
    })
    .await
    {
        Ok(code) => code,
        // Launch failure: the script never ran, so the post hook is skipped.
        Err(err) => return Outcome::UnexpectedError(err.to_string()),
    };

    hooks::run_hook_best_effort(&runner, HookEvent::Post, ctx).await;

    if code > 0 {
        Outcome::ProcessFailure(code)
    } else {
        Outcome::Success
    }
}

/// Compose the executed command line and its display form.
///
/// The executed line appends shell-escaped pass-through arguments; the
/// display line appends them unescaped and is only ever printed.
fn compose_command_line(body: &str, args: &[String]) -> (String, String) {
    if args.is_empty() {
        (body.to_string(), body.to_string())
    } else {
        (
            format!("{} {}", body, shell::escape_args(args)),
            format!("{} {}", body, shell::display_join(args)),
        )
    }
}
