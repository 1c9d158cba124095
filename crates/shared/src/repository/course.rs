use async_trait::async_trait;
use sea_query::{Expr, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use tracing::{error, info};

use crate::abstract_trait::CourseRepositoryTrait;
use crate::config::ConnectionPool;
use crate::domain::request::course::{CourseSort, CreateCourseRequest, UpdateCourseRequest};
use crate::model::course::Course;
use crate::schema::course::Courses;
use crate::utils::AppError;

pub struct CourseRepository {
    db_pool: ConnectionPool,
}

impl CourseRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }
}

/// ORDER BY column and direction for each listing option.
fn order_clause(sort: CourseSort) -> (Courses, Order) {
    match sort {
        CourseSort::NameAsc => (Courses::Name, Order::Asc),
        CourseSort::NameDesc => (Courses::Name, Order::Desc),
        CourseSort::CreatedDesc => (Courses::CreatedAt, Order::Desc),
        CourseSort::CreatedAsc => (Courses::CreatedAt, Order::Asc),
    }
}

#[async_trait]
impl CourseRepositoryTrait for CourseRepository {
    async fn find_all(
        &self,
        sort: CourseSort,
        status_filter: &str,
    ) -> Result<Vec<Course>, AppError> {
        info!(
            "Listing courses - sort: {}, status: {:?}",
            sort.as_param(),
            status_filter
        );

        let mut select_query = Query::select();

        select_query
            .columns([
                Courses::Id,
                Courses::Name,
                Courses::StartDatetime,
                Courses::EndDatetime,
                Courses::Status,
                Courses::CreatedAt,
            ])
            .from(Courses::Table);

        if !status_filter.is_empty() {
            select_query.and_where(Expr::col(Courses::Status).eq(status_filter));
        }

        let (column, order) = order_clause(sort);
        select_query.order_by(column, order);

        let (sql, values) = select_query.build_sqlx(PostgresQueryBuilder);

        let courses = sqlx::query_as_with::<_, Course, _>(&sql, values)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| {
                error!("Error fetching courses: {e}");
                AppError::SqlxError(e)
            })?;

        info!("Found {} courses", courses.len());

        Ok(courses)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, AppError> {
        let (sql, values) = Query::select()
            .columns([
                Courses::Id,
                Courses::Name,
                Courses::StartDatetime,
                Courses::EndDatetime,
                Courses::Status,
                Courses::CreatedAt,
            ])
            .from(Courses::Table)
            .and_where(Expr::col(Courses::Id).eq(id))
            .to_owned()
            .build_sqlx(PostgresQueryBuilder);

        let course = sqlx::query_as_with::<_, Course, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(course)
    }

    async fn create(&self, input: &CreateCourseRequest) -> Result<Course, AppError> {
        let (sql, values) = Query::insert()
            .into_table(Courses::Table)
            .columns([
                Courses::Name,
                Courses::StartDatetime,
                Courses::EndDatetime,
                Courses::Status,
            ])
            .values([
                input.name.clone().into(),
                input.start_datetime.into(),
                input.end_datetime.into(),
                input.status.as_str().into(),
            ])
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .returning_all()
            .build_sqlx(PostgresQueryBuilder);

        let course: Course = sqlx::query_as_with(&sql, values)
            .fetch_one(&self.db_pool)
            .await?;

        info!("Created course {} ({})", course.id, course.name);

        Ok(course)
    }

    async fn update(&self, input: &UpdateCourseRequest) -> Result<Course, AppError> {
        info!("Updating course ID {}", input.id);

        let (sql, values) = Query::update()
            .table(Courses::Table)
            .value(Courses::Name, input.name.clone())
            .value(Courses::StartDatetime, input.start_datetime)
            .value(Courses::EndDatetime, input.end_datetime)
            .value(Courses::Status, input.status.as_str())
            .and_where(Expr::col(Courses::Id).eq(input.id))
            .returning_all()
            .build_sqlx(PostgresQueryBuilder);

        let course = sqlx::query_as_with::<_, Course, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await?;

        match course {
            Some(course) => Ok(course),
            None => {
                error!("Course with id {} not found for update", input.id);
                Err(AppError::NotFound(format!(
                    "Course ID {} not found",
                    input.id
                )))
            }
        }
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let (sql, values) = Query::delete()
            .from_table(Courses::Table)
            .and_where(Expr::col(Courses::Id).eq(id))
            .build_sqlx(PostgresQueryBuilder);

        let result = sqlx::query_with(&sql, values)
            .execute(&self.db_pool)
            .await
            .map_err(AppError::SqlxError)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Course ID {id} not found")));
        }

        info!("Deleted course {id}");

        Ok(())
    }
}
