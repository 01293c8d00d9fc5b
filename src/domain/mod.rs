//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{AccountLifecycleEvent, ContentType, Method, PhoneIdAddon, PhoneIdOptions};
pub use response::TelesignResponse;
pub use validation::ValidationError;
pub use value::{ApiKey, Credentials, CustomerId, ExternalId, KeyError, PhoneNumber};
