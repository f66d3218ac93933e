use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use sanctum_session::{EntryResult, NavError, Navigator};

pub fn run(
    dir: &Path,
    session_id: &str,
    start: Option<&str>,
    max_intensity: Option<f64>,
    no_respawn: bool,
) -> Result<(), String> {
    let (store, mut safety) = super::load_dir(dir)?;

    if let Some(max) = max_intensity {
        safety = safety.with_max_intensity(max);
    }
    if no_respawn {
        safety = safety.with_respawn_enabled(false);
    }

    let mut nav = Navigator::new(store, safety);
    nav.start(session_id)
        .map_err(|e| format!("failed to start session: {e}"))?;

    println!("  {} exploration session '{session_id}'", "Starting".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    if let Some(node_id) = start {
        match nav.enter(session_id, node_id, None) {
            Ok(result) => print_entry(&result),
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            println!("Farewell.");
            break;
        }

        match dispatch(&mut nav, session_id, input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
            }
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    Ok(())
}

fn dispatch(nav: &mut Navigator, session_id: &str, input: &str) -> Result<String, NavError> {
    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

    match cmd.as_str() {
        "enter" if !rest.is_empty() => {
            let result = nav.enter(session_id, rest, None)?;
            print_entry(&result);
            Ok(String::new())
        }
        "go" if !rest.is_empty() => {
            let result = nav.traverse(session_id, rest)?;
            print_entry(&result);
            Ok(String::new())
        }
        "moves" => {
            let status = nav.status(session_id)?;
            match status.current_node.as_deref() {
                Some(current) => {
                    let moves: Vec<String> = nav
                        .store()
                        .outgoing(current)
                        .into_iter()
                        .map(|e| format!("  {} --> {} ({})", e.edge_type, e.to, hint_of(e.weight)))
                        .collect();
                    if moves.is_empty() {
                        Ok("No way out of here.".to_string())
                    } else {
                        Ok(moves.join("\n"))
                    }
                }
                None => Ok("Nowhere yet. Use 'enter <node>' first.".to_string()),
            }
        }
        "respawn" => {
            let report = nav.respawn(session_id)?;
            Ok(format!(
                "{} (respawn #{}) — now at [{}]",
                report.message, report.respawn_count, report.current_node
            ))
        }
        "status" => {
            let s = nav.status(session_id)?;
            let mut out = format!("Session: {}\n", s.session_id);
            out.push_str(&format!(
                "Location: {}\n",
                s.current_node.as_deref().unwrap_or("(nowhere)")
            ));
            out.push_str(&format!("State: {}\n", s.state));
            out.push_str(&format!(
                "Intensity: {:.2} ({})\n",
                s.accumulated_intensity,
                if s.safety.within_intensity_limit {
                    "within limit"
                } else {
                    "over limit"
                }
            ));
            out.push_str(&format!("Visited: {} nodes\n", s.nodes_visited));
            out.push_str(&format!(
                "Respawns: {} ({})",
                s.respawn_count,
                if s.safety.respawn_available {
                    "available"
                } else {
                    "disabled"
                }
            ));
            Ok(out)
        }
        "help" => Ok("\
Exploration Commands:
  enter <node>   Enter a node directly (any node, no edge needed)
  go <node>      Traverse an edge from the current node
  moves          List edges out of the current node
  respawn        Reset through the respawn gate
  status         Show session status
  help           Show this help
  quit           Exit"
            .to_string()),
        _ => Ok(format!(
            "Unknown command '{cmd}'. Type 'help' for commands."
        )),
    }
}

fn hint_of(weight: Option<f64>) -> String {
    format!("hint {:.1}", weight.unwrap_or(0.5))
}

fn print_entry(result: &EntryResult) {
    println!("--- {} ---", result.node.name.bold());
    println!("{}", result.narration.italic());
    println!(
        "State: {} | Intensity: {:.2}",
        result.state, result.intensity
    );

    if !result.triggered_effects.is_empty() {
        println!("Effects: {}", result.triggered_effects.join(", "));
    }
    if !result.departing_effects.is_empty() {
        println!("Left behind: {}", result.departing_effects.join(", "));
    }
    if let Some(hint) = &result.render_hint {
        println!("Scene: {hint}");
    }
    if let Some(artifact) = &result.artifact {
        println!(
            "{} {} ({:?} tier)",
            "Artifact opportunity:".green(),
            artifact.artifact_type,
            artifact.quality
        );
    }

    if result.moves.is_empty() {
        println!("No way onward from here.");
    } else {
        println!("Moves:");
        for m in &result.moves {
            let note = m.note.as_deref().unwrap_or("");
            println!(
                "  {} --> {} [{}] (hint {:.1}) {}",
                m.edge_type, m.target_name, m.target, m.intensity_hint, note
            );
        }
    }
    println!();
}
