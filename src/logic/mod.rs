//! Championship business logic: pairing generation and standings.

mod round_robin;
mod standings;

pub use round_robin::generate_round_robin;
pub use standings::compute_standings;
