use crate::error::{Error, Result};
use crate::model::{
    api::auth::AuthToken,
    db::survey::Survey,
    mongodb::{Coll, Id},
};

/// Look up a survey and check it belongs to the authenticated caller.
///
/// An absent survey is `NotFound`; an existing survey owned by someone else
/// is `Forbidden`.
pub async fn owned_survey(
    survey_id: Id,
    token: &AuthToken,
    surveys: &Coll<Survey>,
) -> Result<Survey> {
    let survey = surveys
        .find_one(survey_id.as_doc(), None)
        .await?
        .ok_or_else(|| Error::not_found(format!("Survey {survey_id}")))?;

    check_owner(&survey, token.id)?;
    Ok(survey)
}

/// The ownership gate itself, separated from the lookup.
pub fn check_owner(survey: &Survey, user: Id) -> Result<()> {
    if survey.owner != user {
        return Err(Error::forbidden(format!(
            "Survey {} does not belong to the authenticated user",
            survey.id
        )));
    }
    Ok(())
}
