// src/config.rs

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, sync::Arc, time::Duration};

use crate::{
    common::i18n::I18nStore,
    db::{HostelRepository, RbacRepository, StaffRepository, TenantRepository, UserRepository},
    services::{
        architecture_service::ArchitectureService, auth::AuthService,
        dashboard_service::DashboardService, permission_catalog::PermissionCatalog,
        rbac_service::RbacService,
    },
};

/// Nome do cargo criado pela migração de seed com todas as permissões.
pub const ADMIN_ROLE_NAME: &str = "Administrador";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: String,
    pub db_max_connections: u32,
    pub jwt_ttl_days: i64,
    // Administrador inicial (opcional)
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let jwt_secret = lookup("JWT_SECRET").context("JWT_SECRET deve ser definido")?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string());

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v.parse().context("DB_MAX_CONNECTIONS deve ser um número")?,
            None => 5,
        };
        let jwt_ttl_days = match lookup("JWT_TTL_DAYS") {
            Some(v) => v.parse().context("JWT_TTL_DAYS deve ser um número")?,
            None => 7,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            bind_addr,
            db_max_connections,
            jwt_ttl_days,
            admin_email: lookup("ADMIN_EMAIL"),
            admin_password: lookup("ADMIN_PASSWORD"),
        })
    }

    pub async fn connect_pool(&self) -> anyhow::Result<PgPool> {
        let pool = PgPoolOptions::new()
            .max_connections(self.db_max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&self.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
        Ok(pool)
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub i18n_store: Arc<I18nStore>,
    pub catalog: Arc<PermissionCatalog>,

    pub auth_service: AuthService,
    pub rbac_service: RbacService,
    pub architecture_service: ArchitectureService,
    pub dashboard_service: DashboardService,

    pub rbac_repo: RbacRepository,
    pub hostel_repo: HostelRepository,
    pub tenant_repo: TenantRepository,
    pub staff_repo: StaffRepository,
}

impl AppState {
    /// Carrega o catálogo de permissões do banco (já migrado) e monta o estado.
    pub async fn load(db_pool: PgPool, config: &Config) -> anyhow::Result<Self> {
        let rbac_repo = RbacRepository::new(db_pool.clone());
        let entries = rbac_repo
            .list_all_permissions()
            .await
            .context("Falha ao ler o catálogo de permissões")?;
        let catalog = PermissionCatalog::from_entries(entries)
            .context("Catálogo de permissões inconsistente")?;

        tracing::info!("🔐 Catálogo com {} permissões carregado", catalog.entries().len());

        Self::with_catalog(db_pool, config, catalog)
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_catalog(
        db_pool: PgPool,
        config: &Config,
        catalog: PermissionCatalog,
    ) -> anyhow::Result<Self> {
        let i18n_store = Arc::new(I18nStore::load()?);
        let catalog = Arc::new(catalog);

        let user_repo = UserRepository::new(db_pool.clone());
        let rbac_repo = RbacRepository::new(db_pool.clone());
        let hostel_repo = HostelRepository::new(db_pool.clone());
        let tenant_repo = TenantRepository::new(db_pool.clone());
        let staff_repo = StaffRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo, config.jwt_secret.clone(), config.jwt_ttl_days);
        let rbac_service = RbacService::new(rbac_repo.clone(), db_pool, catalog.clone());
        let architecture_service = ArchitectureService::new(hostel_repo.clone(), tenant_repo.clone());
        let dashboard_service = DashboardService::new(hostel_repo.clone(), tenant_repo.clone());

        Ok(Self {
            i18n_store,
            catalog,
            auth_service,
            rbac_service,
            architecture_service,
            dashboard_service,
            rbac_repo,
            hostel_repo,
            tenant_repo,
            staff_repo,
        })
    }

    /// Cria o administrador inicial se ADMIN_EMAIL/ADMIN_PASSWORD estiverem definidos.
    pub async fn bootstrap_admin(&self, config: &Config) -> anyhow::Result<()> {
        let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
            return Ok(());
        };

        let role = self
            .rbac_repo
            .find_role_by_name(ADMIN_ROLE_NAME)
            .await?
            .with_context(|| format!("Cargo '{}' não encontrado", ADMIN_ROLE_NAME))?;

        self.auth_service.ensure_admin(email, password, role.id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn applies_defaults_for_optional_settings() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/hostel"),
            ("JWT_SECRET", "segredo"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.jwt_ttl_days, 7);
        assert!(config.admin_email.is_none());
    }

    #[test]
    fn requires_database_url_and_secret() {
        let err = Config::from_lookup(lookup(&[("JWT_SECRET", "segredo")]))
            .err()
            .expect("deveria falhar");
        assert!(err.to_string().contains("DATABASE_URL"));
        assert!(Config::from_lookup(lookup(&[("DATABASE_URL", "x")])).is_err());
    }

    #[test]
    fn rejects_non_numeric_limits() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "x"),
            ("JWT_SECRET", "y"),
            ("DB_MAX_CONNECTIONS", "muitas"),
        ]));
        assert!(result.is_err());
    }
}
