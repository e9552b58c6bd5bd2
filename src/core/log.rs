use crate::db::EntryStore;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::truncate;
use crate::utils::table::visible_width;
use ansi_term::Colour;

const OP_WIDTH_LIMIT: usize = 60;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "import" => Colour::Green,
        "del" | "reset" => Colour::Red,
        "edit" => Colour::Yellow,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

/// Normalise stored timestamps to `YYYY-MM-DDTHH:MM:SS+ZZ:ZZ`; migration rows
/// use SQLite's `datetime('now')` and are shown as-is.
fn display_date(raw: String) -> String {
    chrono::DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or(raw)
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &EntryStore) -> AppResult<()> {
        let conn = store.open()?;
        let rows = load_log(&conn)?;

        if rows.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let entries: Vec<(i64, String, String, String, String)> = rows
            .into_iter()
            .map(|(id, date, op, target, msg)| {
                let op_target = if target.is_empty() {
                    op.clone()
                } else {
                    format!("{op} ({target})")
                };
                (id, display_date(date), op, truncate(&op_target, OP_WIDTH_LIMIT), msg)
            })
            .collect();

        let id_w = entries.iter().map(|e| e.0.to_string().len()).max().unwrap_or(1);
        let date_w = entries.iter().map(|e| e.1.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| e.3.chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_LIMIT);

        println!("📜 Internal log:\n");

        for (id, date, op, op_target, message) in entries {
            let color = color_for_operation(&op);

            // Only the operation word is coloured; the target stays plain.
            let colored = match op_target.split_once(' ') {
                Some((word, rest)) => format!("{} {}", color.paint(word), rest),
                None => color.paint(op_target.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(visible_width(&colored)));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
