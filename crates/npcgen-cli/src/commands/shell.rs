use std::io;
use std::path::Path;

use colored::Colorize;

use npcgen_core::RulesConfig;

use crate::shell::Shell;

pub fn run(data: &Path, rules: RulesConfig) -> Result<(), String> {
    let table = super::load_table(data)?;
    let careers = table.len();
    let mut shell = Shell::new(table, rules);

    println!("  {} NPC builder ({careers} career rows)", "Starting".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    shell
        .run(io::stdin().lock(), io::stdout().lock())
        .map_err(|e| e.to_string())
}
