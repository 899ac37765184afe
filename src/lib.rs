#![deny(unused_must_use)]
#![deny(clippy::clone_on_copy)]
#![warn(clippy::nursery, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    // Sometimes useful
    clippy::wildcard_imports,
)]

pub mod application;
pub mod domain;
pub mod infra;
pub mod presentation;
pub mod utils;
