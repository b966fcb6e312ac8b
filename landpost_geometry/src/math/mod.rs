mod mercator;
mod round;

pub use mercator::*;
pub use round::*;
