//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use smthub_auth::jwt::decoder::TokenDecoder;
use smthub_auth::jwt::encoder::TokenEncoder;
use smthub_auth::password::hasher::PasswordHasher;
use smthub_auth::principal::PrincipalLoader;
use smthub_core::config::AppConfig;
use smthub_database::repositories::{
    FloorRepository, LineRepository, MachineRepository, UserRepository,
};
use smthub_service::{AuthService, DashboardService, FloorService, LineService, MachineService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    /// JWT token encoder
    pub token_encoder: Arc<TokenEncoder>,
    /// JWT token decoder and validator
    pub token_decoder: Arc<TokenDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Username to authenticated principal resolver
    pub principal_loader: Arc<PrincipalLoader>,

    /// User repository
    pub user_repo: Arc<UserRepository>,

    /// Login service
    pub auth_service: Arc<AuthService>,
    /// Floor service
    pub floor_service: Arc<FloorService>,
    /// Line service
    pub line_service: Arc<LineService>,
    /// Machine service
    pub machine_service: Arc<MachineService>,
    /// Dashboard summary service
    pub dashboard_service: Arc<DashboardService>,
}

impl AppState {
    /// Wires repositories, auth components, and services over a pool.
    pub fn build(config: AppConfig, db_pool: PgPool) -> Self {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let floor_repo = Arc::new(FloorRepository::new(db_pool.clone()));
        let line_repo = Arc::new(LineRepository::new(db_pool.clone()));
        let machine_repo = Arc::new(MachineRepository::new(db_pool.clone()));

        let password_hasher = Arc::new(PasswordHasher::new());
        let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
        let token_decoder = Arc::new(TokenDecoder::new(&config.auth));
        let principal_loader = Arc::new(PrincipalLoader::new(Arc::clone(&user_repo)));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&principal_loader),
            Arc::clone(&password_hasher),
            Arc::clone(&token_encoder),
        ));
        let floor_service = Arc::new(FloorService::new(
            Arc::clone(&floor_repo),
            Arc::clone(&line_repo),
        ));
        let line_service = Arc::new(LineService::new(
            Arc::clone(&line_repo),
            Arc::clone(&floor_repo),
            Arc::clone(&machine_repo),
        ));
        let machine_service = Arc::new(MachineService::new(
            Arc::clone(&machine_repo),
            Arc::clone(&line_service),
        ));
        let dashboard_service = Arc::new(DashboardService::new(
            Arc::clone(&floor_repo),
            Arc::clone(&line_repo),
            Arc::clone(&machine_repo),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            token_encoder,
            token_decoder,
            password_hasher,
            principal_loader,
            user_repo,
            auth_service,
            floor_service,
            line_service,
            machine_service,
            dashboard_service,
        }
    }
}
