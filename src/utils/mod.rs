pub mod errors;
pub mod format;
pub mod guard;
pub mod table;

pub use errors::PopupError;
pub use format::{format_amount, format_balance, format_block_time, shorten_address};
pub use guard::{InFlight, InFlightTicket};
pub use table::Table;
