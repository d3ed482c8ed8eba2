pub mod domain;
pub mod opts;
pub mod services;
pub mod steps;
