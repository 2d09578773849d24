mod catalog;
mod compose;
mod load;
mod verify;

pub use catalog::show_catalog;
pub use compose::compose_search;
pub use load::load_filters;
pub use verify::verify_file;
