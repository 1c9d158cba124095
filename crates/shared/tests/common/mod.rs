use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use tokio::sync::Mutex;

use shared::abstract_trait::{CourseRepositoryTrait, UserRepositoryTrait};
use shared::domain::request::course::{CourseSort, CreateCourseRequest, UpdateCourseRequest};
use shared::domain::request::user::CreateUserRequest;
use shared::model::course::Course;
use shared::model::user::User;
use shared::utils::AppError;

fn timestamp(seq: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .expect("valid base date")
        .and_hms_opt(0, 0, 0)
        .expect("valid base time")
        + Duration::seconds(seq)
}

/// In-memory stand-in for the Postgres user repository, matching its
/// contract including the unique-email rejection.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI32,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.users.lock().await.len()
    }

    pub async fn stored_password(&self, email: &str) -> Option<String> {
        self.users
            .lock()
            .await
            .iter()
            .find(|user| user.email == email)
            .map(|user| user.password.clone())
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

/// In-memory stand-in for the Postgres course repository. Sorting and
/// filtering reimplement the repository contract so service-level tests can
/// observe ordering.
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
