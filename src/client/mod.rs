//! Form-side counterpart of the service: typed form state plus the HTTP
//! client driving the generation handshake.

pub mod form;
pub mod http;

pub use form::{CredentialForm, ProfileForm};
pub use http::GeneratorClient;
