// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::{
    common::i18n::I18nStore,
    middleware::i18n::Locale,
    services::architecture_service::LayoutError,
};

// Erro interno da aplicação. Nunca vai direto para o cliente:
// os handlers convertem para `ApiError` com a mensagem no idioma certo.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Usuário não encontrado")]
    UserNotFound,

    // O &'static str é a chave do recurso ("hostel", "tenant", "role"...)
    #[error("Recurso não encontrado: {0}")]
    NotFound(&'static str),

    #[error("Violação de unicidade: {0}")]
    UniqueConstraintViolation(String),

    #[error("Permissão ausente: {0}")]
    PermissionDenied(String),

    #[error("Layout de hostel inválido: {0}")]
    InvalidLayout(#[from] LayoutError),

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

// O erro que de fato sai na resposta HTTP.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.error, "details": details }),
            None => json!({ "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}

impl AppError {
    /// Traduz o erro para o idioma do cliente.
    pub fn to_api_error(self, locale: &Locale, store: &I18nStore) -> ApiError {
        let lang = locale.0.as_str();

        let (status, message) = match &self {
            AppError::ValidationError(errors) => {
                let mut details: BTreeMap<String, Vec<String>> = BTreeMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages = field_errors
                        .iter()
                        .map(|e| {
                            let key = e.message.as_deref().unwrap_or(&*e.code);
                            store.translate(lang, &format!("validation.{key}"))
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                return ApiError {
                    status: StatusCode::BAD_REQUEST,
                    error: store.translate(lang, "error.validation"),
                    details: Some(json!(details)),
                };
            }
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                store.translate(lang, "error.invalid_credentials"),
            ),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                store.translate(lang, "error.invalid_token"),
            ),
            AppError::UserNotFound => (
                StatusCode::NOT_FOUND,
                store.translate(lang, "error.user_not_found"),
            ),
            AppError::NotFound(resource) => {
                let name = store.translate(lang, &format!("resource.{resource}"));
                (
                    StatusCode::NOT_FOUND,
                    store.translate_with(lang, "error.not_found", &[("resource", name.as_str())]),
                )
            }
            AppError::UniqueConstraintViolation(what) => (
                StatusCode::CONFLICT,
                store.translate_with(lang, "error.unique_violation", &[("value", what.as_str())]),
            ),
            AppError::PermissionDenied(slug) => (
                StatusCode::FORBIDDEN,
                store.translate_with(lang, "error.permission_denied", &[("permission", slug.as_str())]),
            ),
            AppError::InvalidLayout(layout) => (
                StatusCode::BAD_REQUEST,
                store.translate_with(
                    lang,
                    "error.invalid_layout",
                    &[("reason", layout.to_string().as_str())],
                ),
            ),
            // Todos os outros erros viram 500. O detalhe fica só no log.
            e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    store.translate(lang, "error.internal"),
                )
            }
        };

        ApiError {
            status,
            error: message,
            details: None,
        }
    }
}

/// Converte violação de unicidade do Postgres em `UniqueConstraintViolation`.
pub(crate) fn map_unique_violation(e: sqlx::Error, what: impl Into<String>) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::UniqueConstraintViolation(what.into());
        }
    }
    e.into()
}

/// Chave estrangeira apontando para um registro inexistente vira `NotFound`
/// do recurso referenciado (ex: `hostelId` de um hostel que não existe).
pub(crate) fn map_missing_reference(e: sqlx::Error, resource: &'static str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_foreign_key_violation() {
            return AppError::NotFound(resource);
        }
    }
    e.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::{error::Error as StdError, fmt};
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "required"))]
        name: String,
    }

    // Erro do Postgres simulado: só o tipo de violação importa aqui.
    #[derive(Debug)]
    struct ConstraintError {
        foreign_key: bool,
    }

    impl fmt::Display for ConstraintError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("constraint violation")
        }
    }

    impl StdError for ConstraintError {}

    impl DatabaseError for ConstraintError {
        fn message(&self) -> &str {
            "constraint violation"
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            if self.foreign_key {
                ErrorKind::ForeignKeyViolation
            } else {
                ErrorKind::UniqueViolation
            }
        }
    }

    fn db_error(foreign_key: bool) -> sqlx::Error {
        sqlx::Error::Database(Box::new(ConstraintError { foreign_key }))
    }

    fn store() -> I18nStore {
        I18nStore::load().expect("mensagens embutidas devem ser válidas")
    }

    #[test]
    fn validation_errors_carry_translated_field_details() {
        let errors = Payload { name: String::new() }.validate().unwrap_err();
        let api = AppError::from(errors).to_api_error(&Locale("pt".into()), &store());

        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        let details = api.details.expect("details");
        assert_eq!(details["name"][0], "Campo obrigatório.");
    }

    #[test]
    fn not_found_names_the_resource() {
        let api = AppError::NotFound("hostel").to_api_error(&Locale("en".into()), &store());
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert_eq!(api.error, "Hostel not found.");
    }

    #[test]
    fn permission_denied_is_forbidden() {
        let api = AppError::PermissionDenied("tenants_delete".into())
            .to_api_error(&Locale("en".into()), &store());
        assert_eq!(api.status, StatusCode::FORBIDDEN);
        assert!(api.error.contains("tenants_delete"));
    }

    #[test]
    fn unexpected_errors_hide_details() {
        let api = AppError::InternalServerError(anyhow::anyhow!("segredo"))
            .to_api_error(&Locale("en".into()), &store());
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!api.error.contains("segredo"));
    }

    #[test]
    fn unknown_hostel_reference_is_not_found() {
        let err = map_missing_reference(db_error(true), "hostel");
        assert!(matches!(err, AppError::NotFound("hostel")));

        let api = err.to_api_error(&Locale("en".into()), &store());
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert_eq!(api.error, "Hostel not found.");
    }

    #[test]
    fn constraint_mappers_only_catch_their_own_violation() {
        assert!(matches!(
            map_missing_reference(db_error(false), "hostel"),
            AppError::DatabaseError(_)
        ));
        assert!(matches!(
            map_unique_violation(db_error(true), "Hostel Central"),
            AppError::DatabaseError(_)
        ));
        assert!(matches!(
            map_unique_violation(db_error(false), "Hostel Central"),
            AppError::UniqueConstraintViolation(v) if v == "Hostel Central"
        ));
        assert!(matches!(
            map_missing_reference(sqlx::Error::RowNotFound, "hostel"),
            AppError::DatabaseError(_)
        ));
    }
}
