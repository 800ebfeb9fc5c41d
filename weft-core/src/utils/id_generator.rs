use base58::ToBase58;
use uuid::Uuid;
use weft_common::prelude::*;

/// Generates run ids, task row ids and lock tokens. UUID v4 bytes, base58 encoded to keep the
/// ids short and URL safe.
pub struct IdGenerator;

impl IdGenerator {
    pub fn generate() -> InlineStr {
        Uuid::new_v4().as_bytes().to_base58().into()
    }
}
