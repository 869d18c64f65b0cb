pub mod client;
pub mod request_builder;
pub mod response_converter;

pub use client::HikerClient;
pub use request_builder::ProfileRequestBuilder;
pub use response_converter::ProfileResponseConverter;
