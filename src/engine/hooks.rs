//! engine::hooks
//!
//! Lifecycle hooks around script execution.
//!
//! # Design
//!
//! Hooks are best-effort by contract: a failing hook is logged as a warning
//! and **never** prevents or fails the main script execution. That rule is
//! enforced at the type level - [`run_hook_best_effort`] has no error
//! channel.
//!
//! Hooks are skipped entirely (no invocation, no log) when:
//! - `--ignore-hooks` was given, or
//! - the [`NESTED_ENV`](super::exec::NESTED_ENV) marker is present, meaning
//!   this Runlet was itself started by a Runlet-run script
//!
//! The default runner reads one optional command line per event from
//! configuration and executes it through the process executor.

use async_trait::async_trait;
use thiserror::Error;

use super::exec::{self, ExecError, ExecRequest};
use super::Context;
use crate::core::config::{Config, ConfigError};
use crate::core::paths::ProjectPaths;
use crate::ui::output;

/// A point around script execution where hooks fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    /// Before the script runs.
    Pre,
    /// After the script has terminated, regardless of its exit code.
    Post,
}

impl std::fmt::Display for HookEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HookEvent::Pre => write!(f, "pre"),
            HookEvent::Post => write!(f, "post"),
        }
    }
}

/// Errors from a hook runner. These never escape the adapter.
#[derive(Debug, Error)]
pub enum HookError {
    /// Hook configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The hook command could not be launched.
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// The hook command ran and exited non-zero.
    #[error("hook exited with code {code}")]
    Failed {
        /// The hook's exit code.
        code: i32,
    },
}

/// Executes the configured command for a lifecycle event.
///
/// Object-safe so tests can substitute a failing or counting runner.
#[async_trait]
pub trait HookRunner: Send + Sync {
    /// Run the hook for `event`. May fail; callers go through
    /// [`run_hook_best_effort`], which swallows the failure.
    async fn run(&self, event: HookEvent, ctx: &Context) -> Result<(), HookError>;
}

/// The default hook runner: config-defined hook commands, executed in the
/// project root through the process executor.
pub struct ConfigHookRunner {
    project: ProjectPaths,
}

impl ConfigHookRunner {
    /// Create a runner for a located project.
    pub fn new(project: ProjectPaths) -> Self {
        Self { project }
    }
}

#[async_trait]
impl HookRunner for ConfigHookRunner {
    async fn run(&self, event: HookEvent, ctx: &Context) -> Result<(), HookError> {
        // Config is loaded lazily here so a broken config file cannot break
        // dispatches that never reach a hook.
        let config = Config::load(Some(&self.project))?;

        let command = match event {
            HookEvent::Pre => config.hooks.pre,
            HookEvent::Post => config.hooks.post,
        };
        let Some(command) = command else {
            return Ok(());
        };

        output::debug(
            format!("{} hook: {}", event, command),
            ctx.verbosity(),
        );

        let local_bin = self.project.local_bin_dir();
        let code = exec::execute(&ExecRequest {
            command_line: &command,
            work_dir: self.project.root(),
            init_dir: &ctx.cwd,
            local_bin: &local_bin,
        })
        .await?;

        if code != 0 {
            return Err(HookError::Failed { code });
        }
        Ok(())
    }
}

/// True when hooks must not fire for this invocation.
pub fn hooks_suppressed(ctx: &Context) -> bool {
    ctx.ignore_hooks || std::env::var_os(exec::NESTED_ENV).is_some()
}

/// Invoke a hook, converting any failure into a logged warning.
///
/// Skips the runner entirely when hooks are suppressed.
pub async fn run_hook_best_effort(runner: &dyn HookRunner, event: HookEvent, ctx: &Context) {
    if hooks_suppressed(ctx) {
        return;
    }

    if let Err(err) = runner.run(event, ctx).await {
        output::warn(format!("{} hook error: {}", event, err), ctx.verbosity());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingRunner;

    #[async_trait]
    impl HookRunner for FailingRunner {
        async fn run(&self, _event: HookEvent, _ctx: &Context) -> Result<(), HookError> {
            Err(HookError::Failed { code: 7 })
        }
    }

    struct CountingRunner {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl HookRunner for CountingRunner {
        async fn run(&self, _event: HookEvent, _ctx: &Context) -> Result<(), HookError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn ctx(ignore_hooks: bool) -> Context {
        Context {
            cwd: PathBuf::from("."),
            quiet: true,
            debug: false,
            ignore_hooks,
        }
    }

    #[test]
    fn event_display() {
        assert_eq!(HookEvent::Pre.to_string(), "pre");
        assert_eq!(HookEvent::Post.to_string(), "post");
    }

    #[tokio::test]
    async fn failure_is_swallowed() {
        // Must not panic or propagate.
        run_hook_best_effort(&FailingRunner, HookEvent::Pre, &ctx(false)).await;
        run_hook_best_effort(&FailingRunner, HookEvent::Post, &ctx(false)).await;
    }

    #[tokio::test]
    async fn ignore_hooks_skips_runner() {
        let runner = CountingRunner {
            calls: AtomicUsize::new(0),
        };
        run_hook_best_effort(&runner, HookEvent::Pre, &ctx(true)).await;
        assert_eq!(runner.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn hooks_run_when_not_suppressed() {
        let runner = CountingRunner {
            calls: AtomicUsize::new(0),
        };
        run_hook_best_effort(&runner, HookEvent::Pre, &ctx(false)).await;
        run_hook_best_effort(&runner, HookEvent::Post, &ctx(false)).await;
        assert_eq!(runner.calls.load(Ordering::SeqCst), 2);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn config_runner_missing_hook_is_noop() {
        let dir = tempfile::TempDir::new().unwrap();
        let runner = ConfigHookRunner::new(ProjectPaths::new(dir.path().to_path_buf()));
        runner.run(HookEvent::Pre, &ctx(false)).await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn config_runner_reports_failing_hook() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".runlet")).unwrap();
        std::fs::write(
            dir.path().join(".runlet").join("config.toml"),
            "[hooks]\npre = \"exit 5\"\n",
        )
        .unwrap();

        let runner = ConfigHookRunner::new(ProjectPaths::new(dir.path().to_path_buf()));
        let err = runner.run(HookEvent::Pre, &ctx(false)).await.unwrap_err();
        assert!(matches!(err, HookError::Failed { code: 5 }));
    }
}
