use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::sheet::CsvWorkbook;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.sheet.clone(), cli.test)?;

    let ranges = [
        cfg.ranges.sessions.as_str(),
        cfg.ranges.clients.as_str(),
        cfg.ranges.cutoffs.as_str(),
        cfg.ranges.payments.as_str(),
    ];
    CsvWorkbook::create_skeleton(Path::new(&cfg.workbook), &ranges, &cfg.ranges.counter)?;
    success(format!("Workbook:    {}", cfg.workbook));

    Ok(())
}
