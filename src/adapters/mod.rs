//! Production adapters for the trait abstractions.

pub mod reqwest_http;

pub use reqwest_http::ReqwestHttpClient;
