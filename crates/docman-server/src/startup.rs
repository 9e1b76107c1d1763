//! Server startup utilities.

use docman_config::{AppConfig, SeedConfig};
use docman_core::{DocmanError, DocmanResult};
use docman_service::{AuthService, RegisterRequest};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. JSON output is selected by
/// `observability.log_format = "json"`.
pub fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{level},docman=debug,tower_http=debug,sqlx=warn",
            level = config.observability.log_level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.observability.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
       __
  ____/ /___  _________ ___  ____ _____
 / __  / __ \/ ___/ __ `__ \/ __ `/ __ \
/ /_/ / /_/ / /__/ / / / / / /_/ / / / /
\__,_/\____/\___/_/ /_/ /_/\__,_/_/ /_/
    "#);
}

/// Prints where the server can be reached.
pub fn print_startup_info(addr: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}/api", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/swagger-ui", addr);
    info!("{}", separator);
}

/// Registers the configured demo user through the regular sign-up path.
///
/// Returns `false` when seeding is disabled or the email is already taken,
/// so restarts against the same database are harmless.
pub async fn seed_demo_user(auth_service: &dyn AuthService, seed: &SeedConfig) -> DocmanResult<bool> {
    if !seed.enabled {
        return Ok(false);
    }

    let request = RegisterRequest {
        name: Some(seed.name.clone()),
        email: Some(seed.email.clone()),
        password: Some(seed.password.clone()),
    };

    match auth_service.register(request).await {
        Ok(user) => {
            info!(user_id = user.id, email = %user.email, "Seeded demo user");
            Ok(true)
        }
        Err(DocmanError::Conflict(_)) => {
            info!(email = %seed.email, "Demo user already present");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
