use std::path::Path;

use sanctum_graph::GraphStore;

pub fn run(dir: &Path, focus: Option<&str>) -> Result<(), String> {
    let (store, _) = super::load_dir(dir)?;

    if let Some(focus_id) = focus {
        let node = store
            .node(focus_id)
            .ok_or_else(|| format!("node not found: \"{focus_id}\""))?;

        println!("  Map for: {}", node.name);
        println!();
        render_focused(&store, focus_id);
    } else {
        println!("  Exploration graph");
        println!();
        render_full(&store);
    }

    Ok(())
}

fn render_focused(store: &GraphStore, center: &str) {
    let out = store.outgoing(center);

    if out.is_empty() {
        println!("  [{center}]");
        println!("    (no outgoing edges)");
        return;
    }

    println!("  [{center}]");
    for edge in out {
        let target_name = store
            .node(&edge.to)
            .map(|n| n.name.as_str())
            .unwrap_or(edge.to.as_str());
        let note = edge
            .note
            .as_deref()
            .map(|n| format!(" ({n})"))
            .unwrap_or_default();
        println!("    --> {}{note} --> [{target_name}]", edge.edge_type);
    }
}

fn render_full(store: &GraphStore) {
    for edge in store.edges() {
        let note = edge
            .note
            .as_deref()
            .map(|n| format!(" ({n})"))
            .unwrap_or_default();
        println!(
            "  [{}] --> {}{note} --> [{}]",
            edge.from, edge.edge_type, edge.to
        );
    }

    println!();
    println!(
        "  {} nodes, {} edges",
        store.node_count(),
        store.edge_count()
    );
}
