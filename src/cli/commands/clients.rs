use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{parse, select};
use crate::errors::AppResult;
use crate::sheet::{CsvWorkbook, Spreadsheet};
use crate::ui::messages::warning;
use crate::utils::money::fmt_amount;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clients { due } = cmd {
        let sheet = CsvWorkbook::open(&cfg.workbook)?;
        let clients = parse::parse_clients(&sheet.read_range(&cfg.ranges.clients)?)?;

        let active = if *due {
            let sessions = parse::parse_sessions(&sheet.read_range(&cfg.ranges.sessions)?)?;
            let window = parse::parse_cutoffs(&sheet.read_range(&cfg.ranges.cutoffs)?)?;
            Some(select::clients_active_in_window(&sessions, &window))
        } else {
            None
        };

        let mut table = Table::new(&["#", "Name", "Subjects", "Rate", "Tab", "Payer"]);
        let mut shown = 0;
        for client in &clients {
            if let Some(active) = &active {
                if !active.contains(&client.name) {
                    continue;
                }
            }
            shown += 1;
            table.add_row(vec![
                client.sequence_number.to_string(),
                client.name.clone(),
                client.subjects.clone(),
                fmt_amount(client.hourly_rate),
                fmt_amount(client.running_tab),
                client.payer_display_name().to_string(),
            ]);
        }

        if shown == 0 {
            warning("No matching clients.");
        } else {
            print!("{}", table.render());
        }
    }
    Ok(())
}
