use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::db::user::NewUser;

/// Raw registration/login credentials, received from a user. These are never
/// stored directly, since the password is in plaintext.
#[derive(Clone, Deserialize, Serialize)]
pub struct UserCredentials {
    pub email: String,
    pub password: String,
}

impl From<UserCredentials> for NewUser {
    /// Convert [`UserCredentials`] to a new [`NewUser`] by hashing the password.
    fn from(cred: UserCredentials) -> Self {
        // 16 bytes is recommended for password hashing:
        //  https://en.wikipedia.org/wiki/Argon2
        let mut salt = [0_u8; 16];
        rand::thread_rng().fill(&mut salt);
        let password_hash =
            argon2::hash_encoded(cred.password.as_bytes(), &salt, &argon2::Config::default())
                .unwrap(); // Safe because the default `Config` is valid.
        Self {
            email: cred.email,
            password_hash,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashing_verifies_the_original_password() {
        let cred = UserCredentials::example();
        let user: NewUser = cred.clone().into();

        assert!(user.verify_password(&cred.password));
        assert!(!user.verify_password("not the password"));
    }

    #[test]
    fn hashes_are_salted() {
        let cred = UserCredentials::example();
        let first: NewUser = cred.clone().into();
        let second: NewUser = cred.into();

        assert_ne!(first.password_hash, second.password_hash);
    }
}
