// Services module - clients for the external collaborators

pub mod mail;
pub mod store;

pub use mail::{MailError, Mailer, OutgoingEmail, ResendMailer};
pub use store::{RestSubmissionStore, StoreError, SubmissionStore};
