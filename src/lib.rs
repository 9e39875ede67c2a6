// src/lib.rs

pub mod cli;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod manifest;
pub mod resolve;
pub mod script;
pub mod types;

use std::io::Write;

use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::manifest::{load_and_validate, Manifest};
use crate::resolve::{DependencyGraph, Resolver};
use crate::script::{CommandSink, ScriptWriter};

/// High-level entry point used by `main.rs`.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    run_with(&args, &RealFileSystem, &mut stdout.lock())
}

/// Wire together manifest loading, resolution and script output.
///
/// `out` receives `--dry-run` and `--graph` output; the script itself goes
/// through `fs`.
pub fn run_with(args: &CliArgs, fs: &dyn FileSystem, out: &mut dyn Write) -> Result<()> {
    let manifest = load_and_validate(fs, &args.manifest, args.format)?;
    info!(
        manifest = %args.manifest.display(),
        tasks = manifest.len(),
        "loaded manifest"
    );

    if args.graph {
        return print_graph(&manifest, out);
    }

    if args.dry_run {
        let commands = resolve_into(&manifest, Vec::<String>::new(), args.task.as_deref())?;
        return print_dry_run(&commands, out);
    }

    let file = fs.create(&args.output)?;
    let writer = ScriptWriter::new(file, &args.interpreter)?;
    let writer = resolve_into(&manifest, writer, args.task.as_deref())?;
    fs.set_executable(&args.output)?;

    info!(
        output = %args.output.display(),
        commands = writer.commands_written(),
        "wrote script"
    );
    Ok(())
}

/// Resolve either the whole manifest or a single task into `sink`.
fn resolve_into<S: CommandSink>(manifest: &Manifest, sink: S, task: Option<&str>) -> Result<S> {
    let mut resolver = Resolver::new(manifest, sink);
    match task {
        Some(name) => {
            debug!(task = name, "resolving single task");
            resolver.resolve_named(name)?;
        }
        None => resolver.resolve_all()?,
    }
    Ok(resolver.into_sink())
}

fn print_graph(manifest: &Manifest, out: &mut dyn Write) -> Result<()> {
    let graph = DependencyGraph::from_manifest(manifest);
    if graph.has_cycle() {
        warn!("dependency graph contains a cycle; resolution will fail");
    }
    write!(out, "{}", graph.to_dot())?;
    Ok(())
}

fn print_dry_run(commands: &[String], out: &mut dyn Write) -> Result<()> {
    writeln!(out, "tasksort dry-run")?;
    writeln!(out, "commands ({}):", commands.len())?;
    for (idx, cmd) in commands.iter().enumerate() {
        writeln!(out, "  {:>3}. {}", idx + 1, cmd)?;
    }
    debug!("dry-run complete (no script written)");
    Ok(())
}
