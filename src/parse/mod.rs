mod header;

pub mod markers;
pub mod numeric;
pub mod signals;
pub mod sums;
pub mod weights;

pub use signals::parse_input_signals;
pub use sums::parse_weighted_sums;
pub use weights::parse_weights;
