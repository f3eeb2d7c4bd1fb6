mod file;
mod http;

pub use file::FileProvider;
pub use http::HttpProvider;
