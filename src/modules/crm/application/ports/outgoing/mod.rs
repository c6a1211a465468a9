pub mod crm_contacts;

pub use crm_contacts::{CrmContact, CrmContacts, CrmError};
