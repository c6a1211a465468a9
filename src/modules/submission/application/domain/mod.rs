pub mod contact_email;
pub mod entities;
