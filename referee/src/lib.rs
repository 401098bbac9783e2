mod error;
mod game;
mod player;
#[cfg(test)]
mod scripted;
mod series;
mod setup;
pub use error::*;
pub use game::*;
pub use player::*;
pub use series::*;
