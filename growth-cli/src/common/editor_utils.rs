use anyhow::{Context, Result, bail};
use std::{fs, process::Command};

/// Configured editor first, then `$VISUAL`, `$EDITOR`, and finally `vim`.
pub fn resolve_editor(configured: Option<&str>) -> String {
    configured
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into())
}

/// Opens `editor_cmd` on a temp Markdown file seeded with `template`.
///
/// Returns `None` when the file comes back unchanged, so callers can skip the save.
pub fn edit_template(editor_cmd: &str, template: &str) -> Result<Option<String>> {
    let file = tempfile::Builder::new()
        .prefix("growth-reflection-")
        .suffix(".md")
        .tempfile()
        .context("creating reflection buffer")?;
    let path = file.path();
    fs::write(path, template).with_context(|| format!("writing {}", path.display()))?;

    let status = Command::new(editor_cmd)
        .arg(path)
        .status()
        .with_context(|| format!("launching editor '{editor_cmd}'"))?;
    if !status.success() {
        bail!("Editor exited with status {}", status);
    }

    let edited = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok((edited != template).then_some(edited))
}
