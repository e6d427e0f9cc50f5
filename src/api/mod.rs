use rocket::Route;

mod auth;
mod common;
mod surveys;
mod uploads;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(auth::routes());
    routes.extend(surveys::routes());
    routes.extend(uploads::routes());
    routes
}
