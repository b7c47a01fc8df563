pub mod books;
pub mod catalog;
pub mod core;
pub mod lending;
pub mod loans;
pub mod members;
pub mod snapshot;
pub mod utils;
