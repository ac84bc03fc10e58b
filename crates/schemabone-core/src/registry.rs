//! Model discovery.
//!
//! The [`AppRegistry`] holds every known model grouped by app label, in
//! registration order. It is the exporter's only view of the host data
//! model: groups to export are looked up here, and reverse relations are
//! found by scanning all registered models.

use crate::error::{Error, Result};
use crate::model::{Model, ModelInfo};
use crate::relationship::ModelKey;

#[derive(Debug, Clone)]
struct AppGroup {
    label: String,
    models: Vec<ModelInfo>,
}

/// Registry of host models grouped by app label.
#[derive(Debug, Clone, Default)]
pub struct AppRegistry {
    groups: Vec<AppGroup>,
}

impl AppRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model under its app label.
    ///
    /// Fails if a model with the same identity is already registered.
    pub fn register(&mut self, model: ModelInfo) -> Result<()> {
        if self.get_model(model.key()).is_some() {
            return Err(Error::DuplicateModel {
                identity: model.identity(),
            });
        }

        tracing::debug!(model = %model.key(), fields = model.fields().len(), "Registering model");

        let label = model.app_label().to_string();
        match self.groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.models.push(model),
            None => self.groups.push(AppGroup {
                label,
                models: vec![model],
            }),
        }
        Ok(())
    }

    /// Register a statically declared model.
    pub fn register_model<M: Model>(&mut self) -> Result<()> {
        self.register(M::model_info())
    }

    /// Builder-style registration.
    pub fn with(mut self, model: ModelInfo) -> Result<Self> {
        self.register(model)?;
        Ok(self)
    }

    /// Look up a model by key.
    pub fn get_model(&self, key: &ModelKey) -> Option<&ModelInfo> {
        self.groups
            .iter()
            .find(|g| g.label == key.app_label)?
            .models
            .iter()
            .find(|m| m.key() == key)
    }

    /// Models registered under `label`, or `None` if the group is unknown.
    pub fn group_models(&self, label: &str) -> Option<&[ModelInfo]> {
        let label = label.to_lowercase();
        self.groups
            .iter()
            .find(|g| g.label == label)
            .map(|g| g.models.as_slice())
    }

    /// Registered group labels in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.label.as_str())
    }

    /// Every registered model, group by group.
    pub fn all_models(&self) -> impl Iterator<Item = &ModelInfo> {
        self.groups.iter().flat_map(|g| g.models.iter())
    }

    /// Total number of registered models.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.models.len()).sum()
    }

    /// True if no model is registered.
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.models.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldInfo;

    struct Tag;

    impl Model for Tag {
        fn model_info() -> ModelInfo {
            ModelInfo::new("shop", "tag").field(FieldInfo::new("label", "CharField"))
        }
    }

    #[test]
    fn test_register_groups_by_label() {
        let mut apps = AppRegistry::new();
        apps.register(ModelInfo::new("shop", "order")).unwrap();
        apps.register(ModelInfo::new("crm", "customer")).unwrap();
        apps.register_model::<Tag>().unwrap();

        assert_eq!(apps.len(), 3);
        assert_eq!(apps.labels().collect::<Vec<_>>(), vec!["shop", "crm"]);

        let shop: Vec<_> = apps
            .group_models("shop")
            .unwrap()
            .iter()
            .map(|m| m.model_name())
            .collect();
        assert_eq!(shop, vec!["order", "tag"]);
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut apps = AppRegistry::new();
        apps.register(ModelInfo::new("shop", "order")).unwrap();
        let err = apps.register(ModelInfo::new("shop", "Order")).unwrap_err();
        assert!(matches!(err, Error::DuplicateModel { identity } if identity == "shop__order"));
    }

    #[test]
    fn test_unknown_group_and_model() {
        let apps = AppRegistry::new()
            .with(ModelInfo::new("shop", "order"))
            .unwrap();
        assert!(apps.group_models("billing").is_none());
        assert!(apps.get_model(&ModelKey::new("shop", "invoice")).is_none());
        assert!(apps.get_model(&ModelKey::new("shop", "order")).is_some());
        assert!(!apps.is_empty());
    }
}
