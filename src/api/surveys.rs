use mongodb::{bson::doc, Client};
use rocket::{futures::TryStreamExt, http::Status, serde::json::Json, Route, State};

use crate::error::{Error, Result};
use crate::model::{
    api::{
        answer::{AnswerDescription, AnswerSpec},
        auth::AuthToken,
        survey::{SurveyDescription, SurveySpec, SurveySummary},
    },
    db::{
        answer::{Answer, NewAnswer},
        survey::{NewSurvey, Survey},
    },
    mongodb::{Coll, Id},
};
use crate::stats::{aggregate, QuestionStats};

use super::common::owned_survey;

pub fn routes() -> Vec<Route> {
    routes![
        create_survey,
        list_surveys,
        get_survey,
        update_survey,
        delete_survey,
        submit_answers,
        survey_answers,
        survey_stats,
    ]
}

#[post("/surveys", data = "<spec>", format = "json")]
async fn create_survey(
    token: AuthToken,
    spec: Json<SurveySpec>,
    new_surveys: Coll<NewSurvey>,
    surveys: Coll<Survey>,
) -> Result<Json<SurveyDescription>> {
    spec.validate().map_err(Error::bad_request)?;

    // Create and insert the survey.
    let survey = spec.0.into_survey(token.id);
    let new_id: Id = new_surveys
        .insert_one(&survey, None)
        .await?
        .inserted_id
        .as_object_id()
        .unwrap() // Valid because the ID comes directly from the DB.
        .into();

    // Retrieve the full survey including ID.
    let survey = surveys.find_one(new_id.as_doc(), None).await?.unwrap();
    Ok(Json(survey.into()))
}

#[get("/surveys")]
async fn list_surveys(token: AuthToken, surveys: Coll<Survey>) -> Result<Json<Vec<SurveySummary>>> {
    let with_owner = doc! {
        "owner": *token.id,
    };

    let surveys = surveys
        .find(with_owner, None)
        .await?
        .try_collect::<Vec<_>>()
        .await?;

    Ok(Json(surveys.into_iter().map(SurveySummary::from).collect()))
}

#[get("/surveys/<survey_id>")]
async fn get_survey(survey_id: Id, surveys: Coll<Survey>) -> Result<Json<SurveyDescription>> {
    let survey = surveys
        .find_one(survey_id.as_doc(), None)
        .await?
        .ok_or_else(|| Error::not_found(format!("Survey {survey_id}")))?;

    Ok(Json(survey.into()))
}

#[put("/surveys/<survey_id>", data = "<spec>", format = "json")]
async fn update_survey(
    token: AuthToken,
    survey_id: Id,
    spec: Json<SurveySpec>,
    surveys: Coll<Survey>,
    new_surveys: Coll<NewSurvey>,
) -> Result<Json<SurveyDescription>> {
    spec.validate().map_err(Error::bad_request)?;
    let existing = owned_survey(survey_id, &token, &surveys).await?;

    // Replace with the new spec, keeping the original creation time.
    let mut replacement = spec.0.into_survey(token.id);
    replacement.created_at = existing.created_at;
    let result = new_surveys
        .replace_one(survey_id.as_doc(), &replacement, None)
        .await?;
    assert_eq!(result.modified_count, 1);

    let survey = surveys.find_one(survey_id.as_doc(), None).await?.unwrap();
    Ok(Json(survey.into()))
}

#[delete("/surveys/<survey_id>")]
async fn delete_survey(
    token: AuthToken,
    survey_id: Id,
    surveys: Coll<Survey>,
    answers: Coll<Answer>,
    db_client: &State<Client>,
) -> Result<()> {
    owned_survey(survey_id, &token, &surveys).await?;

    // Delete the survey and its submissions together.
    let mut session = db_client.start_session(None).await?;
    session.start_transaction(None).await?;
    surveys
        .delete_one_with_session(survey_id.as_doc(), None, &mut session)
        .await?;
    let with_survey = doc! {
        "survey_id": *survey_id,
    };
    answers
        .delete_many_with_session(with_survey, None, &mut session)
        .await?;
    session.commit_transaction().await?;

    Ok(())
}

#[post("/surveys/<survey_id>/answers", data = "<spec>", format = "json")]
async fn submit_answers(
    survey_id: Id,
    spec: Json<AnswerSpec>,
    surveys: Coll<Survey>,
    new_answers: Coll<NewAnswer>,
) -> Result<Status> {
    let survey = surveys
        .find_one(survey_id.as_doc(), None)
        .await?
        .ok_or_else(|| Error::not_found(format!("Survey {survey_id}")))?;

    // A submission shorter than the question list leaves trailing questions
    // unanswered; a longer one cannot be aligned to the questions at all.
    if spec.answers.len() > survey.questions.len() {
        return Err(Error::bad_request(format!(
            "Expected at most {} answers, got {}",
            survey.questions.len(),
            spec.answers.len()
        )));
    }

    let answer = spec.0.into_answer(survey_id);
    new_answers.insert_one(answer, None).await?;
    Ok(Status::Created)
}

#[get("/surveys/<survey_id>/answers")]
async fn survey_answers(
    token: AuthToken,
    survey_id: Id,
    surveys: Coll<Survey>,
    answers: Coll<Answer>,
) -> Result<Json<Vec<AnswerDescription>>> {
    owned_survey(survey_id, &token, &surveys).await?;

    let with_survey = doc! {
        "survey_id": *survey_id,
    };
    let records = answers
        .find(with_survey, None)
        .await?
        .try_collect::<Vec<_>>()
        .await?;

    Ok(Json(
        records.into_iter().map(AnswerDescription::from).collect(),
    ))
}

#[get("/surveys/<survey_id>/stats")]
async fn survey_stats(
    token: AuthToken,
    survey_id: Id,
    surveys: Coll<Survey>,
    answers: Coll<Answer>,
) -> Result<Json<Vec<QuestionStats>>> {
    let survey = owned_survey(survey_id, &token, &surveys).await?;

    let with_survey = doc! {
        "survey_id": *survey_id,
    };
    let records = answers
        .find(with_survey, None)
        .await?
        .try_collect::<Vec<_>>()
        .await?;

    Ok(Json(aggregate(&survey.questions, &records)))
}
