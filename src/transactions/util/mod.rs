pub mod filter;
pub mod mapper;
