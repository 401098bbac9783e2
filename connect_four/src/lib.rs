pub use board::*;
pub use dimensions::*;
pub use errors::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod dimensions;
mod errors;
mod visualization;
