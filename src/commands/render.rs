use super::resolve_output;
use crate::*;

pub fn handle_render_command(cli: &Cli, config: &ConfigFile) -> anyhow::Result<bool> {
    let Commands::Render {
        document,
        mode,
        output,
    } = &cli.command
    else {
        return Ok(false);
    };

    let mode = mode.or(config.defaults.mode).unwrap_or_default();
    let output = resolve_output(output.as_deref(), config);
    ensure_absent(&output)?;

    let doc = load_document(document)?;
    let html = render(&doc, mode)?;
    write_new(&output, &html)?;

    let summary = RenderSummary {
        document: document.display().to_string(),
        output: output.display().to_string(),
        mode,
        folders: doc.folders.len(),
    };
    print_one(cli.json, summary, |s| {
        format!("wrote {} ({} folders)", s.output, s.folders)
    })?;
    Ok(true)
}
