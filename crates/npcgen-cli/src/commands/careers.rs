use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(data: &Path) -> Result<(), String> {
    let table = super::load_table(data)?;
    let names = table.career_names();

    if names.is_empty() {
        println!("  No careers found.");
        return Ok(());
    }

    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["Career", "Levels", "Status"]);

    for name in &names {
        let levels = table.levels_of(name);
        let numbers = levels
            .iter()
            .map(|r| r.level.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let statuses = levels
            .iter()
            .map(|r| if r.status.is_empty() { "—" } else { r.status.as_str() })
            .collect::<Vec<_>>()
            .join(", ");
        out.add_row(vec![name.clone(), numbers, statuses]);
    }

    println!("{out}");
    println!();
    println!("  {} careers", names.len());

    Ok(())
}
