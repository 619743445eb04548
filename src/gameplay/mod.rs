pub mod collision;
pub mod particle;
pub mod player;
pub mod prompt;
pub mod session;
