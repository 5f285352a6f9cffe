mod short;

pub use short::*;
