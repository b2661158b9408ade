pub mod consolidate;
pub mod extract;
pub mod files;
pub mod renumber;
