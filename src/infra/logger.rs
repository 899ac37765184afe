use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::time::ChronoLocal;

pub struct Logger {}

impl Logger {
    pub fn init() -> Result<(), ParseError> {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::DEBUG.into())
            .from_env_lossy()
            .add_directive("sqlx=warn".parse()?)
            .add_directive("sea_orm=warn".parse()?)
            .add_directive("rustls=off".parse()?);

        tracing_subscriber::fmt()
            .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
            .with_env_filter(filter)
            .init();

        Ok(())
    }
}
