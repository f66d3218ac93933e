use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use sanctum_graph::NodeKind;

pub fn run(dir: &Path, kind: Option<&str>) -> Result<(), String> {
    let (store, _) = super::load_dir(dir)?;

    let kind_filter = match kind {
        Some("room") => Some(NodeKind::Room),
        Some("faction") => Some(NodeKind::Faction),
        Some(other) => return Err(format!("unknown kind '{other}', use: room, faction")),
        None => None,
    };

    let nodes: Vec<_> = store
        .nodes()
        .filter(|n| kind_filter.is_none_or(|k| n.kind == k))
        .collect();

    if nodes.is_empty() {
        println!("  No nodes found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Kind", "Tag", "Artifact"]);

    for node in &nodes {
        table.add_row(vec![
            node.id.clone(),
            node.name.clone(),
            node.kind.to_string(),
            node.tag.clone().unwrap_or_else(|| "—".to_string()),
            node.artifact_type.clone().unwrap_or_else(|| "—".to_string()),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} nodes", nodes.len());

    Ok(())
}
