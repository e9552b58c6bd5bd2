use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::EntryFilter;
use crate::core::summary::summarize;
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::models::{Summary, Totals};
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};
use crate::utils::{fmt_hours, hours2readable};

fn totals_row(label: &str, t: &Totals) -> Vec<String> {
    vec![
        label.to_string(),
        fmt_hours(t.hours),
        fmt_hours(t.travel),
        fmt_hours(t.total()),
        hours2readable(t.total()),
    ]
}

fn totals_table() -> Table {
    Table::new(vec![
        Column::left(""),
        Column::right("Hours"),
        Column::right("Travel"),
        Column::right("Total"),
        Column::right(""),
    ])
}

pub fn render_summary(s: &Summary, separator: char) -> String {
    let mut by_type = totals_table();
    for (name, t) in &s.by_type {
        by_type.add_row(totals_row(name, t));
    }
    by_type.add_row(totals_row("All types", &s.grand));

    let mut split = totals_table();
    split.add_row(totals_row("Recorded", &s.recorded));
    split.add_row(totals_row("Not recorded", &s.unrecorded));

    format!(
        "{}\n{}",
        by_type.render(separator),
        split.render(separator)
    )
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { period } = cmd {
        let filter = EntryFilter {
            range: period.as_deref().map(parse_range).transpose()?,
            ..Default::default()
        };

        let store = EntryStore::new(cfg.database_path());
        let entries = filter.apply(store.list_all()?);
        let summary = summarize(&entries);

        let title = match &filter.range {
            Some(r) => format!("Summary {} ({} entries)", r.describe(), summary.entry_count),
            None => format!("Summary ({} entries)", summary.entry_count),
        };
        header(title);
        print!("{}", render_summary(&summary, cfg.separator()));
    }
    Ok(())
}
