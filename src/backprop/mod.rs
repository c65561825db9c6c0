pub mod activation;
pub mod correction;
pub mod errors;

pub use activation::{activation, derivative};
pub use correction::{new_bias, new_weight, update_all};
pub use errors::{compute_errors, hidden_error, output_error};
