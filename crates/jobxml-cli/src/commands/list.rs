use std::io::Write;

use anyhow::Result;
use clap::Args;
use jobxml_plugin_api::{
    ComponentMetadata,
    ComponentRegistry,
};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print component metadata as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs, registry: &ComponentRegistry) -> Result<()> {
    let metadata = registry.all_metadata();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.json {
        serde_json::to_writer_pretty(&mut out, &metadata)?;
        writeln!(out)?;
    } else {
        print_table(&mut out, &metadata)?;
    }

    Ok(())
}

fn print_table<W: Write>(out: &mut W, metadata: &[ComponentMetadata]) -> std::io::Result<()> {
    writeln!(out, "{:<15} {:<22} DESCRIPTION", "TYPE", "NAME")?;
    for component in metadata {
        writeln!(
            out,
            "{:<15} {:<22} {}",
            component.component_type, component.name, component.description
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use jobxml_core::create_component_registry;

    use super::*;

    #[test]
    fn test_table_lists_components() {
        let metadata = create_component_registry().all_metadata();
        let mut out = Vec::new();
        print_table(&mut out, &metadata).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("TYPE"));
        assert!(text.contains("multibranch-pipeline"));
        assert!(text.contains("branch-sources"));
        assert!(text.contains("github"));
    }

    #[test]
    fn test_metadata_serializes() {
        let metadata = create_component_registry().all_metadata();
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 3);
    }
}
