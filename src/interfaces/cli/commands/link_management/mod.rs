//! Link management commands

mod create;
mod delete;
mod list;
mod stats;
mod url;

pub use create::create_link;
pub use delete::delete_link;
pub use list::list_links;
pub use stats::link_stats;
pub use url::print_short_url;
