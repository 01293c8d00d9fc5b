//! Transport layer: wire-format details (body encoding, response decoding).

mod body;
mod phone_id;
mod response;

pub use body::RequestBody;
pub use phone_id::encode_phone_id_body;
pub use response::decode_response;
