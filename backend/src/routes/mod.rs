mod imports;

mod articles;
mod health_check;
mod serve_files;
pub use articles::*;
pub use health_check::*;
pub use serve_files::*;
