use std::path::Path;

use colored::Colorize;

use npcgen_core::RulesConfig;
use npcgen_session::NpcSession;

pub fn run(
    data: &Path,
    rules: RulesConfig,
    name: &str,
    race: &str,
    careers: &[String],
    json: bool,
) -> Result<(), String> {
    let table = super::load_table(data)?;
    let mut session = NpcSession::new(table, rules);
    session
        .start_new_npc(name, race)
        .map_err(|e| e.to_string())?;

    let added = session.add_careers_str(&careers.join(","));
    if added.is_empty() {
        return Err("no careers given".into());
    }

    for issue in session.issues() {
        eprintln!("{}", issue.to_string().yellow());
    }

    if json {
        let npc = session.current_npc();
        let out = serde_json::to_string_pretty(&npc)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
    } else {
        print!("{}", session.summary().to_text());
    }

    Ok(())
}
