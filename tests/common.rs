#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn tb() -> Command {
    cargo_bin_cmd!("tutorbill")
}

/// Create a unique workbook dir named "Fall 2025" inside the system temp
/// dir, removing any leftover from a previous run.
pub fn setup_workbook(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tutorbill", name));
    fs::remove_dir_all(&path).ok();
    let wb = path.join("Fall 2025");
    fs::create_dir_all(&wb).expect("create workbook dir");
    wb
}

/// Unique output dir for rendered documents.
pub fn temp_out(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tutorbill_out", name));
    fs::remove_dir_all(&path).ok();
    path
}

pub fn write_range(dir: &Path, range: &str, content: &str) {
    fs::write(dir.join(format!("{range}.csv")), content).expect("write range file");
}

pub fn read_range_file(dir: &Path, range: &str) -> String {
    fs::read_to_string(dir.join(format!("{range}.csv"))).expect("read range file")
}

/// Standard fixture: cutoff window [45000, 45014), two clients, counter
/// at 0007. Alice's payer still carries the first-invoice marker; one of
/// her sessions predates the window. Ben carries a credit tab.
pub fn write_default_workbook(dir: &Path) {
    write_range(
        dir,
        "sessions",
        "Alice Parker,45001,1.0,50.00\n\
         Alice Parker,45013,1.5,75.00\n\
         Alice Parker,44990,1.0,50.00\n\
         Ben Ootje,45002,2.0,90.00\n",
    );
    write_range(
        dir,
        "clients",
        "Alice Parker,1,,0,Math,50.00,0.00,Dana Parker!,dana@example.com\n\
         Ben Ootje,2,,0,\"Physics, Chemistry\",45.00,-20.00,Rob Ootje,rob@example.com\n",
    );
    write_range(dir, "cutoffs", "45000\n45014\n");
    write_range(
        dir,
        "payments",
        "Alice Parker,45005,100.00\n\
         Ben Ootje,45006,90.00\n",
    );
    write_range(dir, "counter", "0007\n");
}
