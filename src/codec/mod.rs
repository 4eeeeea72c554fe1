//! Identifier codec.
//!
//! Two halves:
//! - [`base62`]: wire Gids to public IDs
//! - [`reference`]: links and URIs to typed [`Reference`]s

pub mod base62;
pub mod reference;

pub use base62::{encode_base62, gid_to_public_id, PUBLIC_ID_LEN};
pub use reference::{classify, parse_reference, Reference};
