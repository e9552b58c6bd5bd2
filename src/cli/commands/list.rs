use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::EntryFilter;
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::models::Entry;
use crate::utils::colors::{RESET, color_for_hours, color_for_recorded, colorize_optional};
use crate::utils::fmt_hours;
use crate::utils::formatting::{bold, truncate, yes_no};
use crate::utils::table::{Column, Table};

const NOTES_WIDTH: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        entry_type,
        recorded,
        unrecorded,
    } = cmd
    {
        let filter = EntryFilter {
            range: period.as_deref().map(parse_range).transpose()?,
            entry_type: entry_type.clone(),
            recorded: match (*recorded, *unrecorded) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
        };

        let store = EntryStore::new(cfg.database_path());
        let entries = filter.apply(store.list_all()?);

        if entries.is_empty() {
            println!("No entries found.");
            return Ok(());
        }

        print!("{}", render_entries(&entries, cfg.separator()));

        let hours: f64 = entries.iter().map(|e| e.hours).sum();
        let travel: f64 = entries.iter().map(|e| e.travel_time).sum();
        println!(
            "\n{} entries | hours {} | travel {} | {}",
            entries.len(),
            fmt_hours(hours),
            fmt_hours(travel),
            bold(&format!("total {}", fmt_hours(hours + travel)))
        );
    }
    Ok(())
}

fn render_entries(entries: &[Entry], separator: char) -> String {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Date"),
        Column::left("Type"),
        Column::left("Name"),
        Column::right("Hours"),
        Column::right("Travel"),
        Column::right("Total"),
        Column::left("Rec"),
        Column::left("Notes"),
    ]);

    for e in entries {
        table.add_row(vec![
            e.id.to_string(),
            e.date.clone(),
            e.entry_type.clone(),
            colorize_optional(&e.name),
            format!("{}{}{}", color_for_hours(e.hours), fmt_hours(e.hours), RESET),
            fmt_hours(e.travel_time),
            fmt_hours(e.total()),
            format!("{}{}{}", color_for_recorded(e.recorded), yes_no(e.recorded), RESET),
            colorize_optional(&truncate(&e.notes, NOTES_WIDTH)),
        ]);
    }

    table.render(separator)
}
