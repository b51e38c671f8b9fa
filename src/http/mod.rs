// HTTP module entry point
// MIME detection, response decoration, and canned response builders

pub mod headers;
pub mod mime;
pub mod response;

pub use headers::{decorate_response, set_server_name};
pub use response::{
    build_404_response, build_405_response, build_file_response, build_options_response,
};
