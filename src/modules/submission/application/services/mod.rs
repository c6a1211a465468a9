pub mod submit_application_service;

pub use submit_application_service::SubmitApplicationService;
