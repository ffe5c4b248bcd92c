use super::resolve_output;
use crate::*;

pub fn handle_scan_command(cli: &Cli, config: &ConfigFile) -> anyhow::Result<bool> {
    let Commands::Scan {
        root,
        depth,
        mode,
        output,
        dump,
    } = &cli.command
    else {
        return Ok(false);
    };

    let mode = mode.or(config.defaults.mode).unwrap_or_default();
    let max_depth = depth.or(config.defaults.max_depth).unwrap_or(u32::MAX);
    let output = resolve_output(output.as_deref(), config);

    ensure_absent(&output)?;
    if let Some(dump) = dump {
        ensure_absent(dump)?;
    }

    let outcome = scan(&LocalFs, &LocalAcl, root, max_depth)?;
    let exported = outcome.records.len();
    let doc = build_document(root, max_depth, outcome.records);

    let html = render(&doc, mode)?;
    write_new(&output, &html)?;
    if let Some(dump) = dump {
        // A run that cannot finish its dump leaves no report behind either.
        if let Err(err) = save_document(dump, &doc) {
            let _ = std::fs::remove_file(&output);
            return Err(err);
        }
    }

    let summary = ScanSummary {
        root: doc.root.clone(),
        output: output.display().to_string(),
        dump: dump.as_ref().map(|d| d.display().to_string()),
        mode,
        exported,
        skipped: outcome.skipped,
    };
    print_one(cli.json, summary, |s| {
        format!(
            "wrote {} ({} folders, {} skipped)",
            s.output,
            s.exported,
            s.skipped.len()
        )
    })?;
    Ok(true)
}
