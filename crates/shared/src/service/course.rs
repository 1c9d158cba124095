use async_trait::async_trait;
use tracing::{debug, error};

use crate::{
    abstract_trait::{CourseServiceTrait, DynCourseRepository},
    domain::request::course::{CourseSort, CreateCourseRequest, UpdateCourseRequest},
    model::course::Course,
    utils::AppError,
};

#[derive(Clone)]
pub struct CourseService {
    repository: DynCourseRepository,
}

impl std::fmt::Debug for CourseService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CourseService")
            .field("repository", &"DynCourseRepository")
            .finish()
    }
}

impl CourseService {
    pub fn new(repository: DynCourseRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CourseServiceTrait for CourseService {
    async fn get_courses(
        &self,
        sort: CourseSort,
        status_filter: &str,
    ) -> Result<Vec<Course>, AppError> {
        self.repository.find_all(sort, status_filter).await
    }

    async fn get_course(&self, id: i32) -> Result<Option<Course>, AppError> {
        let course = self.repository.find_by_id(id).await?;

        if course.is_none() {
            // An unknown edit id renders an empty edit state, not an error.
            debug!("Course {id} not found");
        }

        Ok(course)
    }

    async fn create_course(&self, input: &CreateCourseRequest) -> Result<Course, AppError> {
        self.repository.create(input).await.map_err(|err| {
            error!("Failed to create course: {err}");
            err
        })
    }

    async fn update_course(&self, input: &UpdateCourseRequest) -> Result<Course, AppError> {
        self.repository.update(input).await.map_err(|err| {
            error!("Failed to update course {}: {err}", input.id);
            err
        })
    }

    async fn delete_course(&self, id: i32) -> Result<(), AppError> {
        self.repository.delete(id).await.map_err(|err| {
            error!("Failed to delete course {id}: {err}");
            err
        })
    }
}
