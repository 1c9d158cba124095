use async_trait::async_trait;
use sea_query::{Expr, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use tracing::{error, info};

use crate::abstract_trait::UserRepositoryTrait;
use crate::config::ConnectionPool;
use crate::domain::request::user::CreateUserRequest;
use crate::model::user::User;
use crate::schema::user::Users;
use crate::utils::AppError;

pub struct UserRepository {
    db_pool: ConnectionPool,
}

impl UserRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let (sql, values) = Query::select()
            .columns([
                Users::Id,
                Users::Firstname,
                Users::Lastname,
                Users::School,
                Users::Email,
                Users::Password,
            ])
            .from(Users::Table)
            .and_where(Expr::col(Users::Email).eq(email))
            .to_owned()
            .build_sqlx(PostgresQueryBuilder);

        let user = sqlx::query_as_with::<_, User, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(user)
    }

    async fn find_by_email_exists(&self, email: &str) -> Result<bool, AppError> {
        let (sql, values) = Query::select()
            .expr(Expr::col(Users::Id).count())
            .from(Users::Table)
            .and_where(Expr::col(Users::Email).eq(email))
            .build_sqlx(PostgresQueryBuilder);

        let count: i64 = sqlx::query_scalar_with(&sql, values)
            .fetch_one(&self.db_pool)
            .await?;

        Ok(count > 0)
    }

    async fn create_user(&self, input: &CreateUserRequest) -> Result<User, AppError> {
        let (sql, values) = Query::insert()
            .into_table(Users::Table)
            .columns([
                Users::Firstname,
                Users::Lastname,
                Users::School,
                Users::Email,
                Users::Password,
            ])
            .values([
                input.firstname.clone().into(),
                input.lastname.clone().into(),
                input.school.clone().into(),
                input.email.clone().into(),
                input.password.clone().into(),
            ])
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .returning_all()
            .build_sqlx(PostgresQueryBuilder);

        let user_result = sqlx::query_as_with::<_, User, _>(&sql, values)
            .fetch_one(&self.db_pool)
            .await;

        match user_result {
            Ok(user) => {
                info!("Created user {} ({})", user.id, user.email);
                Ok(user)
            }
            // The UNIQUE constraint on email is the final authority; the
            // application-level pre-check only narrows the race window.
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                info!("Duplicate email rejected by constraint");
                Err(AppError::EmailAlreadyExists)
            }
            Err(e) => {
                error!("Error creating user: {e}");
                Err(AppError::SqlxError(e))
            }
        }
    }
}
