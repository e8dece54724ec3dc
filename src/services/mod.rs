pub mod company_scraper;
pub mod fetcher;

pub use company_scraper::*;
pub use fetcher::*;
