use std::path::Path;

pub fn run(dir: &Path) -> Result<(), String> {
    let (store, safety) = super::load_dir(dir)?;

    println!("  All checks passed.");
    println!(
        "  {} nodes, {} edges",
        store.node_count(),
        store.edge_count()
    );
    println!(
        "  max intensity {}, respawn {} (node \"{}\")",
        safety.max_intensity,
        if safety.respawn_enabled {
            "enabled"
        } else {
            "disabled"
        },
        safety.respawn_node
    );

    Ok(())
}
