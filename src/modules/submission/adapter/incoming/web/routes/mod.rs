pub mod submit_application;

pub use submit_application::{resource, submit_application_handler, ApplicationForm};
