use crate::api::{self, ApiState};
use crate::application::latest::LatestResult;
use crate::config::Settings;
use crate::Result;
use axum::Router;
use tracing::{info, instrument};

/// Main application struct that coordinates all components
pub struct Application {
    settings: Settings,
    latest: LatestResult,
}

impl Application {
    #[instrument]
    pub fn new() -> Result<Self> {
        let settings = Settings::new()?;
        Ok(Self {
            settings,
            latest: LatestResult::default(),
        })
    }

    pub fn router(&self) -> Router {
        api::router(ApiState {
            latest: self.latest.clone(),
        })
    }

    #[instrument(skip(self))]
    pub async fn run(self) -> Result<()> {
        let addr = self.settings.bind_address();
        info!("Starting overpeak server on {addr}");

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        let router = self.router();
        axum::serve(listener, router).await?;

        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_can_be_created() {
        let app = Application::new().expect("Failed to create application");
        assert!(app.settings().application.port > 0);
        assert!(app.latest.load().is_none());
    }
}
