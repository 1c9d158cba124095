use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use tokio::sync::Mutex;
use tower::ServiceExt;

use course_portal_server::handler::AppRouter;
use shared::abstract_trait::{
    CourseRepositoryTrait, DynCourseRepository, DynHashing, DynUserRepository, UserRepositoryTrait,
};
use shared::config::Hashing;
use shared::domain::request::course::{CourseSort, CreateCourseRequest, UpdateCourseRequest};
use shared::domain::request::user::CreateUserRequest;
use shared::model::course::Course;
use shared::model::user::User;
use shared::state::AppState;
use shared::utils::{AppError, DependenciesInject};

fn timestamp(seq: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .expect("valid base date")
        .and_hms_opt(0, 0, 0)
        .expect("valid base time")
        + Duration::seconds(seq)
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI32,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepositoryTrait for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_by_email_exists(&self, email: &str) -> Result<bool, AppError> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .any(|user| user.email == email))
    }

    async fn create_user(&self, input: &CreateUserRequest) -> Result<User, AppError> {
        let mut users = self.users.lock().await;

        if users.iter().any(|user| user.email == input.email) {
            return Err(AppError::EmailAlreadyExists);
        }

        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            firstname: input.firstname.clone(),
            lastname: input.lastname.clone(),
            school: input.school.clone(),
            email: input.email.clone(),
            password: input.password.clone(),
        };

        users.push(user.clone());

        Ok(user)
    }
}

#[derive(Default)]
pub struct InMemoryCourseRepository {
    courses: Mutex<Vec<Course>>,
    next_id: AtomicI32,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.courses.lock().await.len()
    }
}

#[async_trait]
impl CourseRepositoryTrait for InMemoryCourseRepository {
    async fn find_all(
        &self,
        sort: CourseSort,
        status_filter: &str,
    ) -> Result<Vec<Course>, AppError> {
        let mut courses: Vec<Course> = self
            .courses
            .lock()
            .await
            .iter()
            .filter(|course| status_filter.is_empty() || course.status == status_filter)
            .cloned()
            .collect();

        match sort {
            CourseSort::NameAsc => courses.sort_by(|a, b| a.name.cmp(&b.name)),
            CourseSort::NameDesc => courses.sort_by(|a, b| b.name.cmp(&a.name)),
            CourseSort::CreatedDesc => courses.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            CourseSort::CreatedAsc => courses.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }

        Ok(courses)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, AppError> {
        Ok(self
            .courses
            .lock()
            .await
            .iter()
            .find(|course| course.id == id)
            .cloned())
    }

    async fn create(&self, input: &CreateCourseRequest) -> Result<Course, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;

        let course = Course {
            id,
            name: input.name.clone(),
            start_datetime: input.start_datetime,
            end_datetime: input.end_datetime,
            status: input.status.as_str().to_string(),
            created_at: timestamp(i64::from(id)),
        };

        self.courses.lock().await.push(course.clone());

        Ok(course)
    }

    async fn update(&self, input: &UpdateCourseRequest) -> Result<Course, AppError> {
        let mut courses = self.courses.lock().await;

        let course = courses
            .iter_mut()
            .find(|course| course.id == input.id)
            .ok_or_else(|| AppError::NotFound(format!("Course ID {} not found", input.id)))?;

        course.name = input.name.clone();
        course.start_datetime = input.start_datetime;
        course.end_datetime = input.end_datetime;
        course.status = input.status.as_str().to_string();

        Ok(course.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut courses = self.courses.lock().await;

        let before = courses.len();
        courses.retain(|course| course.id != id);

        if courses.len() == before {
            return Err(AppError::NotFound(format!("Course ID {id} not found")));
        }

        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepository>,
    pub courses: Arc<InMemoryCourseRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let courses = Arc::new(InMemoryCourseRepository::new());
        let hashing = Arc::new(Hashing::new()) as DynHashing;

        let di_container = DependenciesInject::with_repositories(
            users.clone() as DynUserRepository,
            courses.clone() as DynCourseRepository,
            hashing,
        );

        let state = Arc::new(AppState::from_container(di_container));

        Self {
            router: AppRouter::build(state),
            users,
            courses,
        }
    }

    /// Insert a user directly with a fast low-cost hash; request-level tests
    /// log in through the real endpoint afterwards.
    pub async fn seed_user(&self, email: &str, password: &str) {
        let hash = bcrypt::hash(password, 4).expect("test hash");
        self.users
            .create_user(&CreateUserRequest {
                firstname: "Ada".into(),
                lastname: "Lovelace".into(),
                school: None,
                email: email.into(),
                password: hash,
            })
            .await
            .expect("seed user");
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }

        self.router
            .clone()
            .oneshot(request.body(Body::empty()).expect("request"))
            .await
            .expect("response")
    }

    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }

        self.router
            .clone()
            .oneshot(request.body(Body::from(body.to_string())).expect("request"))
            .await
            .expect("response")
    }

    /// Log in through the endpoint and return the session cookie pair.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = format!("email={email}&password={password}");
        let response = self.post_form("/login", &body, None).await;

        session_cookie(&response).expect("login should set the session cookie")
    }
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

/// The `name=value` pair of the session cookie set by a response.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
