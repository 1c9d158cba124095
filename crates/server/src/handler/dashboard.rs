use crate::{
    middleware::{CurrentSession, session::require_session},
    view::dashboard::{self, DashboardPage, EditCoursePrefill},
};
use axum::{
    Extension, Router,
    extract::{Form, Query, State},
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use shared::{
    domain::request::course::{CourseAction, CourseActionForm, CourseSort, ListCoursesQuery},
    model::course::Course,
    session::FlashMessage,
    state::AppState,
    utils::split_date_time,
};
use std::sync::Arc;
use tracing::error;

fn edit_prefill(course: Course) -> EditCoursePrefill {
    let (start_date, start_time) = split_date_time(&course.start_datetime);
    let (end_date, end_time) = split_date_time(&course.end_datetime);

    EditCoursePrefill {
        id: course.id,
        name: course.name,
        start_date,
        start_time,
        end_date,
        end_time,
        status: course.status,
    }
}

pub async fn dashboard_handler(
    State(data): State<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
    Query(query): Query<ListCoursesQuery>,
) -> Response {
    let sort = query
        .sort
        .as_deref()
        .map(CourseSort::parse)
        .unwrap_or(CourseSort::CreatedDesc);

    let mut flash = data.session_store.take_flash(&session.token).await;

    let courses = match data
        .di_container
        .course_service
        .get_courses(sort, &query.status)
        .await
    {
        Ok(courses) => courses,
        Err(err) => {
            error!("Failed to list courses: {err}");
            flash = Some(FlashMessage::error(
                "Failed to load courses. Please try again.",
            ));
            Vec::new()
        }
    };

    // An unknown or malformed edit id degrades to an empty edit state.
    let edit = match query.edit_id() {
        Some(id) => match data.di_container.course_service.get_course(id).await {
            Ok(course) => course.map(edit_prefill),
            Err(err) => {
                error!("Failed to load course {id} for editing: {err}");
                None
            }
        },
        None => None,
    };

    dashboard::render(&DashboardPage {
        user_email: session.user_email,
        flash,
        courses,
        edit,
        sort,
        status_filter: query.status,
    })
    .into_response()
}

pub async fn mutate_course_handler(
    State(data): State<Arc<AppState>>,
    Extension(session): Extension<CurrentSession>,
    Form(form): Form<CourseActionForm>,
) -> Redirect {
    let service = &data.di_container.course_service;

    let flash = match form.into_action() {
        Ok(CourseAction::Create(request)) => match service.create_course(&request).await {
            Ok(_) => FlashMessage::success("Course created successfully."),
            Err(_) => FlashMessage::error("Failed to create course. Please try again."),
        },
        Ok(CourseAction::Update(request)) => match service.update_course(&request).await {
            Ok(_) => FlashMessage::success("Course updated successfully."),
            Err(_) => FlashMessage::error("Failed to update course. Please try again."),
        },
        Ok(CourseAction::Delete { id }) => match service.delete_course(id).await {
            Ok(()) => FlashMessage::success("Course deleted successfully."),
            Err(_) => FlashMessage::error("Failed to delete course. Please try again."),
        },
        Err(err) => FlashMessage::error(err.to_string()),
    };

    data.session_store.set_flash(&session.token, flash).await;

    // Post/Redirect/Get on every branch so a refresh never resubmits.
    Redirect::to("/dashboard")
}

pub fn dashboard_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/dashboard",
            get(dashboard_handler).post(mutate_course_handler),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_session,
        ))
        .with_state(app_state)
}
