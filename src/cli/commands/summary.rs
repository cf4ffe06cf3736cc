use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::Pipeline;
use crate::errors::AppResult;
use crate::mail::{NoopMailer, SmtpMailer};
use crate::sheet::CsvWorkbook;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { names, dry_run } = cmd {
        let mut sheet = CsvWorkbook::open(&cfg.workbook)?;
        if *dry_run {
            let mailer = NoopMailer;
            Pipeline::new(&mut sheet, &mailer, cfg, true).run_summaries(names)?;
        } else {
            let mailer = SmtpMailer::from_config(cfg)?;
            Pipeline::new(&mut sheet, &mailer, cfg, false).run_summaries(names)?;
        }
    }
    Ok(())
}
