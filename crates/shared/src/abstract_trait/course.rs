use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::request::course::{CourseSort, CreateCourseRequest, UpdateCourseRequest},
    model::course::Course,
    utils::AppError,
};

pub type DynCourseRepository = Arc<dyn CourseRepositoryTrait + Send + Sync>;
pub type DynCourseService = Arc<dyn CourseServiceTrait + Send + Sync>;

#[async_trait]
pub trait CourseRepositoryTrait {
    async fn find_all(
        &self,
        sort: CourseSort,
        status_filter: &str,
    ) -> Result<Vec<Course>, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, AppError>;
    async fn create(&self, input: &CreateCourseRequest) -> Result<Course, AppError>;
    async fn update(&self, input: &UpdateCourseRequest) -> Result<Course, AppError>;
    async fn delete(&self, id: i32) -> Result<(), AppError>;
}

#[async_trait]
pub trait CourseServiceTrait {
    async fn get_courses(
        &self,
        sort: CourseSort,
        status_filter: &str,
    ) -> Result<Vec<Course>, AppError>;
    async fn get_course(&self, id: i32) -> Result<Option<Course>, AppError>;
    async fn create_course(&self, input: &CreateCourseRequest) -> Result<Course, AppError>;
    async fn update_course(&self, input: &UpdateCourseRequest) -> Result<Course, AppError>;
    async fn delete_course(&self, id: i32) -> Result<(), AppError>;
}
