pub mod demo;
pub mod hide;
pub mod unveil;
