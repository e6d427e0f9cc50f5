use std::path::{Path, PathBuf};

use rand::Rng;
use rocket::{form::Form, fs::NamedFile, fs::TempFile, serde::json::Json, Route, State};
use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::api::auth::AuthToken;

pub fn routes() -> Vec<Route> {
    routes![upload_image, get_upload]
}

/// Upload response carrying the public URL of the stored image.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

#[derive(FromForm)]
struct Upload<'r> {
    image: TempFile<'r>,
}

#[post("/uploads", data = "<upload>")]
async fn upload_image(
    _token: AuthToken,
    mut upload: Form<Upload<'_>>,
    config: &State<Config>,
) -> Result<Json<UploadResponse>> {
    let content_type = upload
        .image
        .content_type()
        .cloned()
        .ok_or_else(|| Error::bad_request("Missing image content type"))?;
    if content_type.top() != "image" {
        return Err(Error::bad_request("Only image uploads are accepted"));
    }
    let extension = content_type
        .extension()
        .map(|ext| ext.as_str().to_string())
        .unwrap_or_else(|| "bin".to_string());

    // Stored filenames are random hex; the client's filename is never used.
    let name: u64 = rand::thread_rng().gen();
    let filename = format!("{name:016x}.{extension}");

    let dir = Path::new(config.upload_dir());
    rocket::tokio::fs::create_dir_all(dir).await?;
    upload.image.copy_to(dir.join(&filename)).await?;

    Ok(Json(UploadResponse {
        url: format!("/uploads/{filename}"),
    }))
}

#[get("/uploads/<file..>")]
async fn get_upload(file: PathBuf, config: &State<Config>) -> Option<NamedFile> {
    NamedFile::open(Path::new(config.upload_dir()).join(file))
        .await
        .ok()
}
