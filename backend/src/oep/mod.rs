mod boolean;
mod integer;

pub use boolean::*;
pub use integer::*;
