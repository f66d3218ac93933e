use std::fs;
use std::path::Path;

/// Starter node/edge document: six nodes wired with the standard edge
/// vocabulary, including one faction hot enough to trip the artifact
/// gate and a respawn room.
const GRAPH_TEMPLATE: &str = r#"{
  "nodes": [
    {"id": "vestibule", "kind": "room", "name": "the Vestibule"},
    {"id": "lantern-court", "kind": "room", "name": "the Lantern Court", "tag": "ember", "artifactType": "fresco"},
    {"id": "choir-of-sparks", "kind": "faction", "name": "the Choir of Sparks", "tag": "storm", "artifactType": "hymn"},
    {"id": "veiled-archive", "kind": "room", "name": "the Veiled Archive", "artifactType": "folio"},
    {"id": "wardens", "kind": "faction", "name": "the Wardens of the Vale"},
    {"id": "still-gate", "kind": "room", "name": "the Still Gate"}
  ],
  "edges": [
    {"from": "vestibule", "to": "lantern-court", "type": "inspires", "note": "lamplight pulls you onward", "weight": 0.4},
    {"from": "vestibule", "to": "wardens", "type": "seeksProtection", "note": "a warded side door", "weight": 0.3},
    {"from": "lantern-court", "to": "choir-of-sparks", "type": "amplifies", "note": "the hum grows to a roar", "weight": 0.8},
    {"from": "lantern-court", "to": "veiled-archive", "type": "fortifies", "note": "a bolted reading stair", "weight": 0.5},
    {"from": "choir-of-sparks", "to": "wardens", "type": "summons", "note": "sparks call the watch", "weight": 0.6},
    {"from": "choir-of-sparks", "to": "still-gate", "type": "requiresReset", "note": "the only way down is out", "weight": 0.2},
    {"from": "wardens", "to": "veiled-archive", "type": "influences", "note": "old records, older debts", "weight": 0.5},
    {"from": "wardens", "to": "vestibule", "type": "tests", "note": "a quiet escort back", "weight": 0.4},
    {"from": "veiled-archive", "to": "lantern-court", "type": "feeds", "note": "what is read returns as light", "weight": 0.5},
    {"from": "still-gate", "to": "vestibule", "type": "grounds", "note": "stone steps, steady breath", "weight": 0.2}
  ]
}
"#;

const RULES_TEMPLATE: &str = r#"{
  "edgeBehaviors": {
    "amplifies": {
      "onEnter": ["lightning surge", "rising intensity"],
      "onExit": ["echo fades"]
    },
    "summons": {
      "onEnter": ["chaos stirring"],
      "onExit": []
    },
    "requiresReset": {
      "onEnter": ["calm descends"],
      "onExit": ["burden released"]
    },
    "grounds": {
      "onEnter": ["weight returns"],
      "onExit": []
    }
  },
  "safety": {
    "maxIntensity": 1.0,
    "respawnEnabled": true,
    "respawnNode": "still-gate",
    "highIntensityTags": ["storm"]
  }
}
"#;

const HINTS_TEMPLATE: &str = r#"{
  "renderHints": {
    "vestibule": {"palette": "dusk grey", "light": "low"},
    "lantern-court": {"palette": "ember gold", "light": "flicker"},
    "choir-of-sparks": {"palette": "arc white", "light": "strobe"},
    "still-gate": {"palette": "river slate", "light": "even"}
  }
}
"#;

pub fn run(name: &str) -> Result<(), String> {
    let dir = Path::new(name);

    if dir.exists() {
        return Err(format!("directory '{name}' already exists"));
    }

    fs::create_dir_all(dir).map_err(|e| format!("cannot create directory: {e}"))?;
    fs::write(dir.join("graph.json"), GRAPH_TEMPLATE)
        .map_err(|e| format!("cannot write graph.json: {e}"))?;
    fs::write(dir.join("rules.json"), RULES_TEMPLATE)
        .map_err(|e| format!("cannot write rules.json: {e}"))?;
    fs::write(dir.join("hints.json"), HINTS_TEMPLATE)
        .map_err(|e| format!("cannot write hints.json: {e}"))?;

    println!("Created graph '{name}' in {name}/");
    println!("  graph.json  — nodes and edges");
    println!("  rules.json  — edge behaviors and safety limits");
    println!("  hints.json  — render hints (optional)");
    println!();
    println!("Get started:");
    println!("  cd {name}");
    println!("  sanctum check                 # Validate the graph");
    println!("  sanctum map                   # See the edges");
    println!("  sanctum explore --start vestibule");

    Ok(())
}
