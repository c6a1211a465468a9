pub mod cors;
pub mod json_config;
pub mod response;

pub use cors::api_resource;
pub use json_config::{custom_json_config, custom_path_config, custom_query_config};
pub use response::ApiResponse;
