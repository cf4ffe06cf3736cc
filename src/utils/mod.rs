pub mod date;
pub mod money;
pub mod table;

pub use date::serial_to_datetime;
pub use money::fmt_amount;
