// src/common/i18n.rs

use std::collections::HashMap;

const DEFAULT_LANG: &str = "en";

// Os arquivos de mensagens vão embutidos no binário.
const BUNDLES: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("pt", include_str!("../../locales/pt.json")),
];

/// Mensagens traduzidas, indexadas por idioma e depois por chave.
#[derive(Debug, Clone)]
pub struct I18nStore {
    messages: HashMap<String, HashMap<String, String>>,
}

impl I18nStore {
    pub fn load() -> anyhow::Result<Self> {
        let mut messages = HashMap::new();
        for (lang, raw) in BUNDLES {
            let bundle: HashMap<String, String> = serde_json::from_str(raw)
                .map_err(|e| anyhow::anyhow!("Arquivo de idioma '{}' inválido: {}", lang, e))?;
            messages.insert(lang.to_string(), bundle);
        }
        Ok(Self { messages })
    }

    /// Busca a chave no idioma pedido, depois no padrão. Se nada for
    /// encontrado, devolve a própria chave.
    pub fn translate(&self, lang: &str, key: &str) -> String {
        [lang, DEFAULT_LANG]
            .iter()
            .find_map(|l| self.messages.get(*l).and_then(|m| m.get(key)))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Igual a `translate`, substituindo `{nome}` pelos argumentos.
    pub fn translate_with(&self, lang: &str, key: &str, args: &[(&str, &str)]) -> String {
        args.iter().fold(self.translate(lang, key), |msg, (name, value)| {
            msg.replace(&format!("{{{name}}}"), value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_english_then_to_key() {
        let store = I18nStore::load().unwrap();
        assert_eq!(store.translate("de", "error.internal"), store.translate("en", "error.internal"));
        assert_eq!(store.translate("pt", "chave.inexistente"), "chave.inexistente");
    }

    #[test]
    fn every_english_key_has_a_portuguese_translation() {
        let store = I18nStore::load().unwrap();
        let en = &store.messages["en"];
        let pt = &store.messages["pt"];
        let missing: Vec<_> = en.keys().filter(|k| !pt.contains_key(*k)).collect();
        assert!(missing.is_empty(), "faltando em pt: {:?}", missing);
    }

    #[test]
    fn substitutes_named_arguments() {
        let store = I18nStore::load().unwrap();
        let msg = store.translate_with("en", "error.permission_denied", &[("permission", "roles_edit")]);
        assert!(msg.contains("'roles_edit'"));
    }
}
