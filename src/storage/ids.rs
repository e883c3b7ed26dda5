use std::str::FromStr;

use super::StorageError;

/// Width of the hex token that addresses a todo record.
pub const TODO_ID_LEN: usize = 32;

/// Time-ordered identifier, rendered as 32 lowercase hex digits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct TodoId(uuid::Uuid);

impl TodoId {
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// True if `value` fits the key space, regardless of whether a record exists.
    pub fn is_well_formed(value: &str) -> bool {
        value.len() == TODO_ID_LEN && value.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for TodoId {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_well_formed(s) {
            return Err(StorageError::MalformedId(s.to_owned()));
        }
        uuid::Uuid::try_parse(s)
            .map(Self)
            .map_err(|_| StorageError::MalformedId(s.to_owned()))
    }
}

impl serde::Serialize for TodoId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for TodoId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl From<uuid::Uuid> for TodoId {
    fn from(value: uuid::Uuid) -> Self {
        Self(value)
    }
}

impl bincode::Encode for TodoId {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        self.0.as_bytes().encode(encoder)
    }
}

impl<Context> bincode::Decode<Context> for TodoId {
    fn decode<D: bincode::de::Decoder<Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let bytes: [u8; 16] = bincode::Decode::decode(decoder)?;
        Ok(Self(uuid::Uuid::from_bytes(bytes)))
    }
}

impl<'de, Context> bincode::BorrowDecode<'de, Context> for TodoId {
    fn borrow_decode<D: bincode::de::BorrowDecoder<'de, Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let bytes: [u8; 16] = bincode::Decode::decode(decoder)?;
        Ok(Self(uuid::Uuid::from_bytes(bytes)))
    }
}
