pub mod http;

pub use mock_impl::{mock, Mock};
