pub mod imports;

mod articles;
pub mod bookmarks;
mod header;

pub use articles::{ArticleCard, ArticleDetail, Home};
pub use bookmarks::BookmarkList;
pub use header::Header;
