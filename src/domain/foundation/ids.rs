//! Identifier newtypes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Declares a random-UUID identifier that serializes as a plain string.
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

uuid_id!(
    /// A signed-in session. The id doubles as the bearer token.
    SessionId
);
uuid_id!(
    /// A chat message.
    MessageId
);
uuid_id!(
    /// An issued one-time passcode record.
    OtpId
);

const USER_ID_PREFIX: &str = "user_";
const USER_ID_SUFFIX_LEN: usize = 7;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Application user id, e.g. `user_k3x9a0q`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Generates `user_` plus seven random base-36 characters.
    pub fn generate() -> Self {
        let mut entropy = Uuid::new_v4().as_u128();
        let suffix: String = (0..USER_ID_SUFFIX_LEN)
            .map(|_| {
                let c = BASE36[(entropy % 36) as usize] as char;
                entropy /= 36;
                c
            })
            .collect();
        Self(format!("{USER_ID_PREFIX}{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "7d2c9a4e-1b3f-4c5d-8e6f-0a1b2c3d4e5f";

    #[test]
    fn session_id_round_trips_through_its_string_form() {
        let id: SessionId = TOKEN.parse().unwrap();
        assert_eq!(id.to_string(), TOKEN);
        assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{TOKEN}\""));
    }

    #[test]
    fn malformed_token_does_not_parse() {
        assert!("session-123".parse::<SessionId>().is_err());
        assert!("".parse::<OtpId>().is_err());
    }

    #[test]
    fn fresh_ids_are_distinct() {
        assert_ne!(SessionId::new(), SessionId::new());
        assert_ne!(MessageId::new(), MessageId::new());
    }

    #[test]
    fn generated_user_id_is_prefixed_base36() {
        let id = UserId::generate();
        let suffix = id.as_str().strip_prefix(USER_ID_PREFIX).unwrap();
        assert_eq!(suffix.len(), USER_ID_SUFFIX_LEN);
        assert!(suffix.bytes().all(|b| BASE36.contains(&b)));
        assert_ne!(UserId::generate(), id);
    }
}
