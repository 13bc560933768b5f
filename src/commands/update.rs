use std::path::PathBuf;

use clap::{Args, ValueEnum};

use manifest_uuid::log_status;
use manifest_uuid::utils::io;
use manifest_uuid::{transform, Scope, TransformOptions};

use crate::output;

#[derive(Args)]
pub struct UpdateArgs {
    /// Manifest file to rewrite
    #[arg(default_value = "./manifest.json")]
    pub file: PathBuf,

    /// Restrict regeneration to one side of the manifest
    #[arg(long, value_enum, value_name = "TARGET")]
    pub only: Option<OnlyTarget>,

    /// Derive identifiers deterministically from this seed
    #[arg(long, value_name = "STRING")]
    pub seed: Option<String>,

    /// Indent width for the rewritten JSON (0 = compact)
    #[arg(long, default_value_t = 2, value_name = "N")]
    pub pretty: usize,

    /// Print the change summary without touching the file
    #[arg(long)]
    pub dry: bool,

    /// Skip the .bak copy of the original file
    #[arg(long)]
    pub no_backup: bool,

    /// Suppress all console output (exit codes are unaffected)
    #[arg(long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OnlyTarget {
    Header,
    Modules,
}

impl UpdateArgs {
    fn scope(&self) -> Scope {
        match self.only {
            None => Scope::All,
            Some(OnlyTarget::Header) => Scope::HeaderOnly,
            Some(OnlyTarget::Modules) => Scope::ModulesOnly,
        }
    }
}

pub fn run(args: &UpdateArgs) -> manifest_uuid::Result<i32> {
    let raw = io::read_manifest(&args.file)?;

    let options = TransformOptions {
        scope: args.scope(),
        seed: args.seed.clone(),
        indent: args.pretty,
    };
    let result = transform(&raw, &options)?;

    if args.dry {
        log_status!(args.quiet, "[dry-run]");
        for change in &result.changes {
            log_status!(args.quiet, "{}", output::format_change(change));
        }
        return Ok(0);
    }

    for change in &result.changes {
        log_status!(args.quiet, "{}", output::format_change(change));
    }

    // Backup before overwrite, so a failed write never loses the original.
    if !args.no_backup {
        let backup = io::backup_file(&args.file)?;
        log_status!(args.quiet, "Saved backup: {}", backup.display());
    }

    io::write_manifest(&args.file, &result.text)?;

    log_status!(
        args.quiet,
        "Wrote: {} (pretty={}, eol={:?})",
        args.file.display(),
        args.pretty,
        result.line_ending
    );

    Ok(0)
}
