mod bag;
mod errors;

pub use bag::{Bag, Drain, IntoIter, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use errors::MaxCapacityError;
