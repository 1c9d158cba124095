use std::sync::Arc;

use crate::{
    abstract_trait::{
        DynAuthService, DynCourseRepository, DynCourseService, DynHashing, DynUserRepository,
    },
    config::ConnectionPool,
    repository::{course::CourseRepository, user::UserRepository},
    service::{auth::AuthService, course::CourseService},
};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub course_service: DynCourseService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"DynAuthService")
            .field("course_service", &"DynCourseService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hashing: DynHashing) -> Self {
        let user_repository = Arc::new(UserRepository::new(pool.clone())) as DynUserRepository;
        let course_repository =
            Arc::new(CourseRepository::new(pool.clone())) as DynCourseRepository;

        Self::with_repositories(user_repository, course_repository, hashing)
    }

    /// Wire services over already-built repositories. This is the seam the
    /// integration tests use to swap in in-memory stores.
    pub fn with_repositories(
        user_repository: DynUserRepository,
        course_repository: DynCourseRepository,
        hashing: DynHashing,
    ) -> Self {
        let auth_service =
            Arc::new(AuthService::new(user_repository.clone(), hashing)) as DynAuthService;

        let course_service =
            Arc::new(CourseService::new(course_repository.clone())) as DynCourseService;

        Self {
            auth_service,
            course_service,
        }
    }
}
