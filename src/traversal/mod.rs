pub mod filter;
pub mod page;
pub mod path;
pub mod site;
pub mod urls;


pub use filter::is_qualifying_link;
pub use page::{fetch_and_parse, first_link_on_page};
pub use path::{create_path_to_philosophy, ProgressSink, StdoutSink};
pub use site::SiteConfig;
pub use urls::{is_same_article, is_terminal_article, is_valid_article_url, to_absolute_url};
