pub mod repository;
pub mod shared;
pub mod song;
