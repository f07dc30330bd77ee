mod facets;
mod page;
mod results;

pub use page::Search;
