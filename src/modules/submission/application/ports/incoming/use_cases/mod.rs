pub mod submit_application;

pub use submit_application::{SubmitApplicationError, SubmitApplicationUseCase};
