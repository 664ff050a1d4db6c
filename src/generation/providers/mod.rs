pub mod http;

pub use http::HttpArticleProvider;
