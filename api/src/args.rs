use clap::{Args as ClapArgs, Parser};
use mealwise_core::domain::common::{DatabaseConfig, MealwiseConfig, PlanningConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "mealwise-api", version, about = "Family meal planning API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub planning: PlanningArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(id = "server-host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server-port", long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix of every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(id = "database-host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database-port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "mealwise")]
    pub user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "mealwise")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "mealwise")]
    pub name: String,

    #[arg(long = "database-max-connections", env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info,mealwise_core=debug")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct PlanningArgs {
    /// Reconcile stock when a meal is assigned and the request does not say otherwise.
    #[arg(
        long = "auto-update-stock",
        env = "AUTO_UPDATE_STOCK",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub auto_update_stock: bool,

    #[arg(
        long = "max-reconcile-attempts",
        env = "MAX_RECONCILE_ATTEMPTS",
        default_value_t = 3
    )]
    pub max_reconcile_attempts: u32,
}

impl From<Args> for MealwiseConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
                max_connections: args.db.max_connections,
            },
            planning: PlanningConfig {
                auto_update_default: args.planning.auto_update_stock,
                max_reconcile_attempts: args.planning.max_reconcile_attempts,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_a_config() {
        let args = Args::parse_from(["mealwise-api"]);
        assert_eq!(args.server.root_path, "");

        let config = MealwiseConfig::from(args);
        assert!(config.planning.auto_update_default);
        assert_eq!(config.planning.max_reconcile_attempts, 3);
        assert_eq!(config.database.port, 5432);
    }

    #[test]
    fn auto_update_can_be_turned_off() {
        let args = Args::parse_from([
            "mealwise-api",
            "--auto-update-stock",
            "false",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);

        assert!(!args.planning.auto_update_stock);
        assert_eq!(args.server.allowed_origins.len(), 2);
    }
}
