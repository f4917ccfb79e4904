use anyhow::{ anyhow, Result };
use log::debug;
use std::fs;
use std::path::Path;

use crate::cli::ui;
use hplrv::{ highlight_property, RenderFormat };

/// Property highlighting command
pub fn execute(property: Option<&str>, file: Option<&Path>, format_str: &str) -> Result<()> {
    let format: RenderFormat = format_str.parse()?;
    let renderer = format.renderer();

    let properties = match (property, file) {
        (Some(property), _) => vec![property.to_string()],
        (None, Some(path)) => load_properties(path)?,
        (None, None) => {
            return Err(anyhow!("Provide a property or a file with --file"));
        }
    };

    if properties.is_empty() {
        ui::print_warning("No properties to highlight");
        return Ok(());
    }

    debug!("Highlighting {} properties as {}", properties.len(), format);
    for property in &properties {
        println!("{}", renderer.render(&highlight_property(property)));
    }

    Ok(())
}

/// One property per line; blank lines and lines starting with '#' are skipped
fn load_properties(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e|
        anyhow!("Failed to read properties file {}: {}", path.display(), e)
    )?;
    Ok(parse_property_lines(&content))
}

fn parse_property_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
