// src/services/permission_catalog.rs
//
// A tabela `permissions` é a fonte da verdade dos IDs numéricos. O catálogo
// é carregado dela na inicialização e validado: cada recurso x ação precisa
// ter exatamente um ID. Assim a tela e o backend nunca divergem.

use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use crate::models::rbac::{
    permission_slug, Permission, PermissionAction, PermissionForm, PermissionResource,
    ResourcePermissions,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("permissão '{0}' não existe no catálogo")]
    Missing(String),
    #[error("slug '{0}' aparece mais de uma vez")]
    DuplicateSlug(String),
    #[error("id {0} aparece mais de uma vez")]
    DuplicateId(i32),
}

#[derive(Debug, Clone)]
pub struct PermissionCatalog {
    // Ordenado por (recurso, ação): define a ordem dos IDs emitidos
    ids: BTreeMap<(PermissionResource, PermissionAction), i32>,
    by_id: HashMap<i32, (PermissionResource, PermissionAction)>,
    entries: Vec<Permission>,
}

impl PermissionCatalog {
    pub fn from_entries(entries: Vec<Permission>) -> Result<Self, CatalogError> {
        let known: HashMap<String, (PermissionResource, PermissionAction)> = PermissionResource::ALL
            .iter()
            .flat_map(|r| PermissionAction::ALL.iter().map(move |a| (*r, *a)))
            .map(|(r, a)| (permission_slug(r, a), (r, a)))
            .collect();

        let mut ids = BTreeMap::new();
        let mut by_id = HashMap::new();
        let mut kept = Vec::with_capacity(entries.len());

        for entry in entries {
            let Some(&key) = known.get(&entry.slug) else {
                tracing::warn!("Permissão desconhecida ignorada: '{}' (id {})", entry.slug, entry.id);
                continue;
            };
            if ids.insert(key, entry.id).is_some() {
                return Err(CatalogError::DuplicateSlug(entry.slug));
            }
            if by_id.insert(entry.id, key).is_some() {
                return Err(CatalogError::DuplicateId(entry.id));
            }
            kept.push(entry);
        }

        for (slug, key) in &known {
            if !ids.contains_key(key) {
                return Err(CatalogError::Missing(slug.clone()));
            }
        }

        kept.sort_by_key(|p| by_id.get(&p.id).copied());

        Ok(Self { ids, by_id, entries: kept })
    }

    pub fn entries(&self) -> &[Permission] {
        &self.entries
    }

    pub fn lookup(&self, id: i32) -> Option<(PermissionResource, PermissionAction)> {
        self.by_id.get(&id).copied()
    }

    /// Formulário da tela -> lista de IDs para persistir.
    /// Sem repetição, na ordem do catálogo.
    pub fn extract_permission_ids(&self, form: &PermissionForm) -> Vec<i32> {
        self.ids
            .iter()
            .filter(|((resource, action), _)| {
                form.get(*resource).is_some_and(|perms| perms.allows(*action))
            })
            .map(|(_, id)| *id)
            .collect()
    }

    /// Lista de IDs -> formulário da tela. Todo recurso aparece, mesmo sem
    /// nenhuma ação liberada. IDs fora do catálogo são descartados.
    pub fn map_permissions_to_form(&self, ids: &[i32]) -> PermissionForm {
        let mut form: BTreeMap<PermissionResource, ResourcePermissions> = PermissionResource::ALL
            .iter()
            .map(|r| (*r, ResourcePermissions::default()))
            .collect();

        for id in ids {
            match self.lookup(*id) {
                Some((resource, action)) => {
                    if let Some(perms) = form.get_mut(&resource) {
                        perms.set(action, true);
                    }
                }
                None => tracing::warn!("ID de permissão fora do catálogo ignorado: {}", id),
            }
        }

        for perms in form.values_mut() {
            perms.access = Some(perms.access_level());
        }

        PermissionForm(form)
    }

    /// Slugs de tudo o que o formulário libera (útil para logs e auditoria).
    pub fn granted_slugs(&self, form: &PermissionForm) -> Vec<String> {
        self.extract_permission_ids(form)
            .into_iter()
            .filter_map(|id| self.lookup(id))
            .map(|(r, a)| permission_slug(r, a))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::rbac::AccessLevel;
    use serde_json::json;

    /// Catálogo com os mesmos IDs da migração de seed.
    pub(crate) fn seeded_catalog() -> PermissionCatalog {
        let mut next_id = 0;
        let entries = PermissionResource::ALL
            .iter()
            .flat_map(|r| PermissionAction::ALL.iter().map(move |a| (*r, *a)))
            .map(|(r, a)| {
                next_id += 1;
                Permission {
                    id: next_id,
                    slug: permission_slug(r, a),
                    description: String::new(),
                }
            })
            .collect();
        PermissionCatalog::from_entries(entries).expect("catálogo completo")
    }

    fn form(value: serde_json::Value) -> PermissionForm {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn extracts_ids_in_catalog_order() {
        let catalog = seeded_catalog();
        let ids = catalog.extract_permission_ids(&form(json!({
            "tenants": { "delete": true, "viewList": true },
            "hostels": { "viewOne": true }
        })));
        // hostels = 1..5, tenants = 6..10
        assert_eq!(ids, vec![2, 6, 10]);
    }

    #[test]
    fn access_all_expands_to_every_action() {
        let catalog = seeded_catalog();
        let ids = catalog.extract_permission_ids(&form(json!({ "roles": { "access": "all" } })));
        // roles = 21..25
        assert_eq!(ids, vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn maps_ids_to_a_form_with_every_resource() {
        let catalog = seeded_catalog();
        let form = catalog.map_permissions_to_form(&[6, 7]);

        assert_eq!(form.0.len(), PermissionResource::ALL.len());
        let tenants = form.get(PermissionResource::Tenants).unwrap();
        assert!(tenants.view_list && tenants.view_one);
        assert!(!tenants.create);
        assert_eq!(tenants.access, Some(AccessLevel::Partial));
        assert_eq!(
            form.get(PermissionResource::Staff).unwrap().access,
            Some(AccessLevel::None)
        );
    }

    #[test]
    fn round_trip_drops_unknown_ids_only() {
        let catalog = seeded_catalog();
        let form = catalog.map_permissions_to_form(&[3, 999, 12, 3]);
        assert_eq!(catalog.extract_permission_ids(&form), vec![3, 12]);
    }

    #[test]
    fn full_form_grants_everything() {
        let catalog = seeded_catalog();
        let ids = catalog.extract_permission_ids(&PermissionForm::full());
        assert_eq!(ids, (1..=30).collect::<Vec<i32>>());
    }

    #[test]
    fn granted_slugs_follow_the_resource_action_shape() {
        let catalog = seeded_catalog();
        let slugs = catalog.granted_slugs(&form(json!({ "managers": { "edit": true } })));
        assert_eq!(slugs, vec!["managers_edit".to_string()]);
    }

    #[test]
    fn missing_entry_is_rejected() {
        let mut entries = seeded_catalog().entries().to_vec();
        entries.retain(|p| p.slug != "rooms_delete");
        assert_eq!(
            PermissionCatalog::from_entries(entries).unwrap_err(),
            CatalogError::Missing("rooms_delete".into())
        );
    }

    #[test]
    fn duplicate_slug_or_id_is_rejected() {
        let mut entries = seeded_catalog().entries().to_vec();
        let mut copy = entries[0].clone();
        copy.id = 500;
        entries.push(copy);
        assert!(matches!(
            PermissionCatalog::from_entries(entries),
            Err(CatalogError::DuplicateSlug(_))
        ));

        let mut entries = seeded_catalog().entries().to_vec();
        entries.push(Permission { id: 1, slug: "unknown_thing".into(), description: String::new() });
        // slug desconhecido é só ignorado
        assert!(PermissionCatalog::from_entries(entries).is_ok());

        let mut entries = seeded_catalog().entries().to_vec();
        entries[1].id = entries[0].id;
        assert_eq!(
            PermissionCatalog::from_entries(entries).unwrap_err(),
            CatalogError::DuplicateId(1)
        );
    }
}
