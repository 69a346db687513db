//! Campus Web Server
//!
//! Axum-based REST API over the campus domain services.

pub mod error;
pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use campus_db::DbPool;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Students
        .route(
            "/students",
            get(routes::students::list_students).post(routes::students::create_student),
        )
        .route(
            "/students/{id}",
            get(routes::students::get_student)
                .put(routes::students::update_student)
                .delete(routes::students::delete_student),
        )
        .route(
            "/students/{id}/teachers",
            get(routes::students::list_teachers_of_student)
                .put(routes::students::add_teacher_to_student)
                .delete(routes::students::remove_teacher_from_student),
        )
        .route(
            "/students/{id}/subjects",
            get(routes::students::list_subjects_of_student)
                .put(routes::students::add_subject_to_student)
                .delete(routes::students::remove_subject_from_student),
        )
        // Teachers; the GET on `{id}` accepts an id or a name
        .route(
            "/teachers",
            get(routes::teachers::list_teachers).post(routes::teachers::create_teacher),
        )
        .route(
            "/teachers/{id}",
            get(routes::teachers::find_teacher)
                .put(routes::teachers::update_teacher)
                .delete(routes::teachers::delete_teacher),
        )
        .route(
            "/teachers/{id}/subjects",
            get(routes::teachers::list_subjects_of_teacher)
                .put(routes::teachers::add_subject_to_teacher)
                .delete(routes::teachers::remove_subject_from_teacher),
        )
        .route(
            "/teachers/{id}/students",
            get(routes::teachers::list_students_of_teacher)
                .put(routes::teachers::add_student_to_teacher)
                .delete(routes::teachers::remove_student_from_teacher),
        )
        // Subjects
        .route(
            "/subjects",
            get(routes::subjects::list_subjects).post(routes::subjects::create_subject),
        )
        .route(
            "/subjects/{id}",
            get(routes::subjects::get_subject)
                .put(routes::subjects::update_subject)
                .delete(routes::subjects::delete_subject),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(db: Arc<DbPool>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(db);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    tracing::info!("Web server listening on http://{host}:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}
