use chrono::{serde::ts_seconds, DateTime, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation};
use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request, State,
};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Error;
use crate::model::{
    db::user::User,
    mongodb::{Coll, Id},
};

/// An authentication token identifying a logged-in user.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthToken {
    /// The authenticated user's ID.
    pub id: Id,
}

impl AuthToken {
    /// Create a new [`AuthToken`] for the given user.
    pub fn for_user(user: &User) -> Self {
        Self { id: user.id }
    }

    #[allow(clippy::missing_panics_doc)]
    /// Sign this token, producing the serialised JWT issued to the client.
    pub fn into_token(self, config: &Config) -> String {
        let claims = Claims {
            token: self,
            expire_at: Utc::now() + config.auth_ttl(),
        };

        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret()),
        )
        .expect("JWT encoding is infallible with default settings")
    }

    /// Decode and validate a serialised JWT.
    pub fn from_token(token: &str, config: &Config) -> Result<Self, Error> {
        let data: TokenData<Claims> = jsonwebtoken::decode(
            token,
            &DecodingKey::from_secret(config.jwt_secret()),
            &Validation::default(),
        )?;
        Ok(data.claims.token)
    }
}

/// Token claims: the token itself plus an expiry datetime.
#[derive(Serialize, Deserialize)]
struct Claims {
    #[serde(flatten)]
    token: AuthToken,
    #[serde(rename = "exp", with = "ts_seconds")]
    expire_at: DateTime<Utc>,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthToken {
    type Error = Error;

    /// Extract and verify a bearer token from the `Authorization` header,
    /// and check that the user it names still exists.
    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        // Unwrap is safe as `Config` is always managed.
        let config = req.guard::<&State<Config>>().await.unwrap();

        let header = match req.headers().get_one("Authorization") {
            Some(header) => header,
            None => {
                return Outcome::Failure((
                    Status::Unauthorized,
                    Error::unauthorized("No authentication token provided"),
                ))
            }
        };
        let token = match header.strip_prefix("Bearer ") {
            Some(token) => token,
            None => {
                return Outcome::Failure((
                    Status::Unauthorized,
                    Error::unauthorized("Malformed Authorization header"),
                ))
            }
        };

        // Decode the token.
        let token = match Self::from_token(token, config) {
            Ok(token) => token,
            Err(_) => {
                return Outcome::Failure((
                    Status::Unauthorized,
                    Error::unauthorized("Invalid authentication token"),
                ))
            }
        };

        // Check the user actually exists.
        let db = req.guard::<&State<mongodb::Database>>().await.unwrap();
        let user = Coll::<User>::from_db(db)
            .find_one(token.id.as_doc(), None)
            .await;
        match user {
            Ok(Some(_)) => Outcome::Success(token),
            Ok(None) => Outcome::Failure((
                Status::Unauthorized,
                Error::unauthorized("Authenticated user no longer exists"),
            )),
            Err(e) => Outcome::Failure((Status::InternalServerError, e.into())),
        }
    }
}

/// Login response carrying the issued bearer token.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        let config = Config::example();
        let id = Id::new();

        let token = AuthToken { id }.into_token(&config);
        let decoded = AuthToken::from_token(&token, &config).unwrap();

        assert_eq!(decoded.id, id);
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let token = AuthToken { id: Id::new() }.into_token(&Config::example());
        assert!(AuthToken::from_token(&token, &Config::example2()).is_err());
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        let config = Config::example();
        assert!(AuthToken::from_token("definitely-not-a-jwt", &config).is_err());
    }
}
