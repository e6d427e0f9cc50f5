use mongodb::bson::doc;
use rocket::{http::Status, serde::json::Json, Route, State};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{
    api::{
        auth::{AuthToken, TokenResponse},
        credentials::UserCredentials,
    },
    db::user::{NewUser, User},
    mongodb::{is_duplicate_key_error, Coll},
};

pub fn routes() -> Vec<Route> {
    routes![register, login]
}

#[post("/auth/register", data = "<credentials>", format = "json")]
async fn register(credentials: Json<UserCredentials>, new_users: Coll<NewUser>) -> Result<Status> {
    if credentials.email.is_empty() || credentials.password.is_empty() {
        return Err(Error::bad_request("Email and password must not be empty"));
    }

    // Check email uniqueness.
    let with_email = doc! {
        "email": &credentials.email,
    };
    if new_users.find_one(with_email, None).await?.is_some() {
        return Err(Error::bad_request(format!(
            "Email already registered: {}",
            credentials.email
        )));
    }

    // Create and insert the user. The unique index closes the window
    // between the check above and the insert.
    let user: NewUser = credentials.0.into();
    new_users.insert_one(&user, None).await.map_err(|e| {
        if is_duplicate_key_error(&e) {
            Error::bad_request(format!("Email already registered: {}", user.email))
        } else {
            e.into()
        }
    })?;

    Ok(Status::Created)
}

#[post("/auth/login", data = "<credentials>", format = "json")]
async fn login(
    credentials: Json<UserCredentials>,
    users: Coll<User>,
    config: &State<Config>,
) -> Result<Json<TokenResponse>> {
    let with_email = doc! {
        "email": &credentials.email,
    };

    let user = users
        .find_one(with_email, None)
        .await?
        .filter(|user| user.verify_password(&credentials.password))
        .ok_or_else(|| {
            Error::unauthorized("No user found with the provided email and password combination")
        })?;

    let token = AuthToken::for_user(&user).into_token(config);
    Ok(Json(TokenResponse { token }))
}
