//! Line-oriented command processing for the interactive builder.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use npcgen_core::{CareerLevel, CareerTable, LevelId, RulesConfig};
use npcgen_session::NpcSession;

const HELP: &str = "\
Commands:
  new <name>[, <race>]     start a new NPC (discards the current one)
  add <career[:level]>...  add careers as one batch, e.g. add Engineer:2, Smith
  talents <id> <a, b>      replace the talents of a career level
  undo                     undo the last batch
  undo <n>                 undo batch n from 'history'
  history                  list batches
  show                     show the current NPC
  careers                  list known careers
  quit                     exit";

/// Interactive NPC builder state.
pub struct Shell {
    session: NpcSession,
    career_names: Vec<String>,
    started: bool,
}

impl Shell {
    /// Create a shell over a career table.
    pub fn new(table: CareerTable, rules: RulesConfig) -> Self {
        let career_names = table.career_names();
        Self {
            session: NpcSession::new(table, rules),
            career_names,
            started: false,
        }
    }

    /// Whether `input` ends the shell.
    pub fn is_quit(input: &str) -> bool {
        input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q")
    }

    /// Read commands from `input` until EOF or `quit`, writing responses
    /// and prompts to `output`. Command errors are reported and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        write!(output, "> ")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            let command = line.trim();

            match self.process(command) {
                Ok(response) if !response.is_empty() => writeln!(output, "{response}
")?,
                Ok(_) => {}
                Err(e) => writeln!(output, "{}
", e.yellow())?,
            }
            if Self::is_quit(command) {
                return Ok(());
            }

            write!(output, "> ")?;
            output.flush()?;
        }

        writeln!(output)
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> Result<String, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let (cmd, rest) = match trimmed.split_once(' ') {
            Some((cmd, rest)) => (cmd.to_lowercase(), rest.trim()),
            None => (trimmed.to_lowercase(), ""),
        };

        match cmd.as_str() {
            "new" => self.do_new(rest),
            "add" => self.do_add(rest),
            "talents" => self.do_talents(rest),
            "undo" => self.do_undo(rest),
            "history" => Ok(self.do_history()),
            "show" => self.do_show(),
            "careers" => Ok(self.do_careers()),
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(format!("unknown command: {cmd} (type 'help')")),
        }
    }

    fn do_new(&mut self, rest: &str) -> Result<String, String> {
        let (name, race) = rest.split_once(',').unwrap_or((rest, ""));
        self.session
            .start_new_npc(name, race)
            .map_err(|e| e.to_string())?;
        self.started = true;

        let race = self.session.race();
        if race.is_empty() {
            Ok(format!("New NPC: {}", self.session.name()))
        } else {
            Ok(format!("New NPC: {} ({race})", self.session.name()))
        }
    }

    fn do_add(&mut self, rest: &str) -> Result<String, String> {
        self.require_started()?;
        if rest.is_empty() {
            return Err("usage: add <career[:level]>[, ...]".to_string());
        }

        let added = self.session.add_careers_str(rest);
        if added.is_empty() {
            return Err("usage: add <career[:level]>[, ...]".to_string());
        }

        let mut out = format!("Added {} level(s):", added.len());
        for level in &added {
            out.push_str(&format!("\n  {}", describe(level)));
        }
        Ok(out)
    }

    fn do_talents(&mut self, rest: &str) -> Result<String, String> {
        self.require_started()?;
        let usage = || "usage: talents <id> <talent>[, ...]".to_string();

        let (id, list) = rest.split_once(' ').unwrap_or((rest, ""));
        let id = id
            .trim_start_matches('#')
            .parse::<u64>()
            .map(LevelId)
            .map_err(|_| usage())?;
        let talents: Vec<&str> = list
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        match self.session.finalize_talents(id, talents) {
            Some(level) => Ok(format!("Updated {}", describe(level))),
            None => Ok(format!("No career level {id}.")),
        }
    }

    fn do_undo(&mut self, rest: &str) -> Result<String, String> {
        self.require_started()?;

        let removed = if rest.is_empty() {
            self.session.undo_last_batch()
        } else {
            let n: usize = rest
                .parse()
                .map_err(|_| "usage: undo [batch number]".to_string())?;
            match n.checked_sub(1) {
                Some(index) => self.session.undo_batch_at(index),
                None => Vec::new(),
            }
        };

        if removed.is_empty() {
            return Ok("Nothing to undo.".to_string());
        }
        Ok(format!("Removed: {}", join_levels(removed.iter())))
    }

    fn do_history(&self) -> String {
        let history = self.session.history();
        if history.is_empty() {
            return "No history.".to_string();
        }

        let mut out = format!("History ({} batches):", history.len());
        for (i, batch) in history.batches().iter().enumerate() {
            let levels = self.session.batch_levels(i);
            out.push_str(&format!(
                "\n  {}. {} [{}]",
                i + 1,
                join_levels(levels.into_iter()),
                batch.added_at().format("%H:%M:%S")
            ));
        }
        out
    }

    fn do_show(&self) -> Result<String, String> {
        self.require_started()?;

        let mut out = self.session.summary().to_text();
        for issue in self.session.issues() {
            out.push_str(&format!("{issue}\n"));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_careers(&self) -> String {
        if self.career_names.is_empty() {
            return "No careers loaded.".to_string();
        }
        format!("Careers: {}", self.career_names.join(", "))
    }

    fn require_started(&self) -> Result<(), String> {
        if self.started {
            Ok(())
        } else {
            Err("start an NPC first: new <name>[, <race>]".to_string())
        }
    }
}

fn describe(level: &CareerLevel) -> String {
    let mut out = format!("{} {level}", level.id());
    if !level.status().is_empty() {
        out.push_str(&format!(" ({})", level.status()));
    }
    if !level.talents().is_empty() {
        out.push_str(&format!(" - Talents: {}", level.talents().join(", ")));
    }
    out
}

fn join_levels<'a>(levels: impl Iterator<Item = &'a CareerLevel>) -> String {
    levels
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"{
        "careers": [
            { "career": "Engineer", "level": 1, "status": "Brass 4",
              "characteristics": ["Ws"], "skills": ["Climb"], "talents": ["A"] },
            { "career": "Engineer", "level": 2, "status": "Silver 2",
              "characteristics": ["Ws"], "skills": ["Climb"], "talents": ["A", "B"] }
        ]
    }"#;

    fn shell() -> Shell {
        let table = CareerTable::from_json_str(TABLE).unwrap();
        Shell::new(table, RulesConfig::default())
    }

    fn started() -> Shell {
        let mut shell = shell();
        shell.process("new Greta, Dwarf").unwrap();
        shell
    }

    #[test]
    fn new_requires_name() {
        let mut shell = shell();
        let err = shell.process("new").unwrap_err();
        assert!(err.contains("name is required"));
    }

    #[test]
    fn new_with_race() {
        let mut shell = shell();
        assert_eq!(shell.process("new Greta, Dwarf").unwrap(), "New NPC: Greta (Dwarf)");
        assert_eq!(shell.process("new Otto").unwrap(), "New NPC: Otto");
    }

    #[test]
    fn add_before_new_is_blocked() {
        let mut shell = shell();
        let err = shell.process("add Engineer").unwrap_err();
        assert!(err.contains("start an NPC first"));
    }

    #[test]
    fn add_lists_levels() {
        let mut shell = started();
        let out = shell.process("add Engineer:2").unwrap();
        assert!(out.starts_with("Added 2 level(s):"));
        assert!(out.contains("#1 Engineer 1 (Brass 4) - Talents: A"));
        assert!(out.contains("#2 Engineer 2 (Silver 2) - Talents: A, B"));
    }

    #[test]
    fn add_without_careers() {
        let mut shell = started();
        assert!(shell.process("add").is_err());
        assert!(shell.process("add ,").is_err());
    }

    #[test]
    fn show_reflects_totals() {
        let mut shell = started();
        shell.process("add Engineer:2").unwrap();
        let out = shell.process("show").unwrap();
        assert!(out.contains("Ws: 45"));
        assert!(out.contains("Skills: Climb 15"));
        assert!(out.contains("Talents: A 2, B"));
    }

    #[test]
    fn talents_replaces_picks() {
        let mut shell = started();
        shell.process("add Engineer").unwrap();
        let out = shell.process("talents #1 Sharp, Tinker").unwrap();
        assert_eq!(out, "Updated #1 Engineer 1 (Brass 4) - Talents: Sharp, Tinker");

        let out = shell.process("show").unwrap();
        assert!(out.contains("Talents: Sharp, Tinker"));
    }

    #[test]
    fn talents_unknown_id() {
        let mut shell = started();
        assert_eq!(shell.process("talents 9 Sharp").unwrap(), "No career level #9.");
        assert!(shell.process("talents x Sharp").is_err());
    }

    #[test]
    fn undo_last_and_by_number() {
        let mut shell = started();
        shell.process("add Engineer").unwrap();
        shell.process("add Smith").unwrap();
        shell.process("add Watchman").unwrap();

        assert_eq!(shell.process("undo 2").unwrap(), "Removed: Smith 1");
        assert_eq!(shell.process("undo").unwrap(), "Removed: Watchman 1");
        assert_eq!(shell.process("undo").unwrap(), "Removed: Engineer 1");
        assert_eq!(shell.process("undo").unwrap(), "Nothing to undo.");
        assert_eq!(shell.process("undo 0").unwrap(), "Nothing to undo.");
    }

    #[test]
    fn history_lists_batches() {
        let mut shell = started();
        assert_eq!(shell.process("history").unwrap(), "No history.");

        shell.process("add Engineer:2").unwrap();
        shell.process("add Smith").unwrap();
        let out = shell.process("history").unwrap();
        assert!(out.starts_with("History (2 batches):"));
        assert!(out.contains("1. Engineer 1, Engineer 2 ["));
        assert!(out.contains("2. Smith 1 ["));
    }

    #[test]
    fn show_reports_missing_talents() {
        let mut shell = started();
        shell.process("add Smith").unwrap();
        let out = shell.process("show").unwrap();
        assert!(out.contains("warning: Smith 1: no talents"));
    }

    fn run_script(script: &str) -> String {
        let mut out = Vec::new();
        shell().run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn run_stops_at_quit() {
        let out = run_script("new Greta\nquit\nadd Engineer\n");
        assert!(out.contains("New NPC: Greta"));
        assert!(out.contains("Goodbye!"));
        assert!(!out.contains("Added"));
    }

    #[test]
    fn run_continues_after_errors_until_eof() {
        let out = run_script("add Engineer\n\nnew Greta\nadd Wizard:999999999\nshow\n");
        assert!(out.contains("start an NPC first"));
        assert!(out.contains("Added 1 level(s):"));
        assert!(out.contains("Careers: Wizard 999999999"));
        assert!(out.contains("Ws: 30"));
    }

    #[test]
    fn careers_and_unknown_command() {
        let mut shell = shell();
        assert_eq!(shell.process("careers").unwrap(), "Careers: Engineer");
        assert!(shell.process("dance").unwrap_err().contains("unknown command"));
        assert!(Shell::is_quit("Q"));
    }
}
