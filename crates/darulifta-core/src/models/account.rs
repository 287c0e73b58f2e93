use serde::{Deserialize, Serialize};

/// Regular site account. The email is the primary key; the password is
/// kept as the plaintext the caller supplied and login compares it by
/// exact string equality. There is no hashing layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub email: String,
    pub password: String,
    pub phone: String,
}

/// Privileged account authorized to publish rulings. Keyed by username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuftiAccount {
    pub username: String,
    pub email: String,
    pub name: String,
    pub password: String,
}
