// src/models/rbac.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::FromRow;
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// ---
// Recursos e ações da matriz de permissões
// ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PermissionResource {
    Hostels,
    Tenants,
    Staff,
    Managers,
    Roles,
    Rooms,
}

impl PermissionResource {
    pub const ALL: [PermissionResource; 6] = [
        PermissionResource::Hostels,
        PermissionResource::Tenants,
        PermissionResource::Staff,
        PermissionResource::Managers,
        PermissionResource::Roles,
        PermissionResource::Rooms,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PermissionResource::Hostels => "hostels",
            PermissionResource::Tenants => "tenants",
            PermissionResource::Staff => "staff",
            PermissionResource::Managers => "managers",
            PermissionResource::Roles => "roles",
            PermissionResource::Rooms => "rooms",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PermissionAction {
    ViewList,
    ViewOne,
    Create,
    Edit,
    Delete,
}

impl PermissionAction {
    pub const ALL: [PermissionAction; 5] = [
        PermissionAction::ViewList,
        PermissionAction::ViewOne,
        PermissionAction::Create,
        PermissionAction::Edit,
        PermissionAction::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PermissionAction::ViewList => "view_list",
            PermissionAction::ViewOne => "view_one",
            PermissionAction::Create => "create",
            PermissionAction::Edit => "edit",
            PermissionAction::Delete => "delete",
        }
    }
}

/// Slug no formato `{recurso}_{ação}`, ex: `tenants_view_list`.
pub fn permission_slug(resource: PermissionResource, action: PermissionAction) -> String {
    format!("{}_{}", resource.as_str(), action.as_str())
}

// O que sai do banco (Tabela Roles)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    #[schema(example = "Recepcionista")]
    pub name: String,

    #[schema(example = "Cadastra inquilinos e consulta quartos")]
    pub description: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

// O que sai do banco (Tabela Permissions)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    #[schema(example = 6)]
    pub id: i32,

    #[schema(example = "tenants_view_list")]
    pub slug: String,

    #[schema(example = "Listar inquilinos")]
    pub description: String,
}

// ---
// Formulário de permissões (formato da tela)
// ---

/// Estado agregado das ações de um recurso (o "marcar todos" da tela).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    All,
    Partial,
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePermissions {
    #[serde(default)]
    pub view_list: bool,
    #[serde(default)]
    pub view_one: bool,
    #[serde(default)]
    pub create: bool,
    #[serde(default)]
    pub edit: bool,
    #[serde(default)]
    pub delete: bool,

    // Na entrada, `all`/`none` sobrescrevem os campos individuais.
    // Na saída, é sempre preenchido com o estado calculado.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<AccessLevel>,
}

impl ResourcePermissions {
    /// Considera o atalho `access` antes do campo individual.
    pub fn allows(&self, action: PermissionAction) -> bool {
        match self.access {
            Some(AccessLevel::All) => true,
            Some(AccessLevel::None) => false,
            _ => self.flag(action),
        }
    }

    pub fn flag(&self, action: PermissionAction) -> bool {
        match action {
            PermissionAction::ViewList => self.view_list,
            PermissionAction::ViewOne => self.view_one,
            PermissionAction::Create => self.create,
            PermissionAction::Edit => self.edit,
            PermissionAction::Delete => self.delete,
        }
    }

    pub fn set(&mut self, action: PermissionAction, granted: bool) {
        let slot = match action {
            PermissionAction::ViewList => &mut self.view_list,
            PermissionAction::ViewOne => &mut self.view_one,
            PermissionAction::Create => &mut self.create,
            PermissionAction::Edit => &mut self.edit,
            PermissionAction::Delete => &mut self.delete,
        };
        *slot = granted;
    }

    pub fn access_level(&self) -> AccessLevel {
        let granted = PermissionAction::ALL
            .iter()
            .filter(|a| self.flag(**a))
            .count();
        match granted {
            0 => AccessLevel::None,
            n if n == PermissionAction::ALL.len() => AccessLevel::All,
            _ => AccessLevel::Partial,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(example = json!({
    "tenants": { "viewList": true, "viewOne": true, "create": true, "edit": false, "delete": false, "access": "partial" }
}))]
pub struct PermissionForm(pub BTreeMap<PermissionResource, ResourcePermissions>);

impl PermissionForm {
    /// Formulário com tudo liberado.
    #[cfg(test)]
    pub fn full() -> Self {
        PermissionForm(
            PermissionResource::ALL
                .iter()
                .map(|r| {
                    (
                        *r,
                        ResourcePermissions {
                            access: Some(AccessLevel::All),
                            ..Default::default()
                        },
                    )
                })
                .collect(),
        )
    }

    pub fn get(&self, resource: PermissionResource) -> Option<&ResourcePermissions> {
        self.0.get(&resource)
    }
}

// O Payload para criar um cargo
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRolePayload {
    #[validate(length(min = 1, max = 100, message = "role_name_length"))]
    #[schema(example = "Recepcionista")]
    pub name: String,

    #[schema(example = "Cadastra inquilinos e consulta quartos")]
    pub description: Option<String>,

    #[serde(default)]
    pub permissions: PermissionForm,
}

// Resposta completa (Cargo + Formulário de Permissões)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    #[serde(flatten)]
    pub role: Role,

    pub permissions: PermissionForm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_joins_resource_and_action() {
        assert_eq!(
            permission_slug(PermissionResource::Tenants, PermissionAction::ViewList),
            "tenants_view_list"
        );
    }

    #[test]
    fn access_level_is_tri_state() {
        let mut perms = ResourcePermissions::default();
        assert_eq!(perms.access_level(), AccessLevel::None);

        perms.set(PermissionAction::Create, true);
        assert_eq!(perms.access_level(), AccessLevel::Partial);

        for action in PermissionAction::ALL {
            perms.set(action, true);
        }
        assert_eq!(perms.access_level(), AccessLevel::All);
    }

    #[test]
    fn access_shortcut_overrides_individual_flags() {
        let perms: ResourcePermissions =
            serde_json::from_value(json!({ "viewList": true, "access": "none" })).unwrap();
        assert!(!perms.allows(PermissionAction::ViewList));

        let perms: ResourcePermissions = serde_json::from_value(json!({ "access": "all" })).unwrap();
        assert!(perms.allows(PermissionAction::Delete));
    }

    #[test]
    fn role_name_must_fit_the_column() {
        let payload = |name: String| CreateRolePayload {
            name,
            description: None,
            permissions: PermissionForm::default(),
        };
        assert!(payload("Recepcionista".into()).validate().is_ok());
        assert!(payload(String::new()).validate().is_err());
        assert!(payload("x".repeat(101)).validate().is_err());
    }

    #[test]
    fn form_is_keyed_by_resource_name() {
        let form: PermissionForm =
            serde_json::from_value(json!({ "managers": { "viewOne": true } })).unwrap();
        let managers = form.get(PermissionResource::Managers).unwrap();
        assert!(managers.view_one);
        assert!(!managers.view_list);
    }
}
