pub mod client;
pub mod payment;
pub mod session;
pub mod window;

pub use client::Client;
pub use payment::Payment;
pub use session::Session;
pub use window::CutoffWindow;
