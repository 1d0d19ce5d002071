//! # Config Prefabs for Well-Known Configurations
//!
//! A prefab is a named, described builder for a [`Config`]; the static form
//! lives in `static` tables, and converts to the owned, editable form.

use burn::config::Config;
use std::fmt::Debug;
use std::sync::Arc;

/// Static builder for a [`PreFabConfig`].
pub struct StaticPreFabConfig<C>
where
    C: 'static + Config + Debug + Clone,
{
    /// Name of the config pre-fab.
    pub name: &'static str,

    /// Description of the config pre-fab.
    pub description: &'static str,

    /// Builder function for the config.
    pub builder: fn() -> C,
}

impl<C> StaticPreFabConfig<C>
where
    C: 'static + Config + Debug + Clone,
{
    /// Build a new config.
    pub fn new_config(&self) -> C {
        (self.builder)()
    }

    /// Convert to a [`PreFabConfig<C>`].
    pub fn to_prefab(&self) -> PreFabConfig<C> {
        let builder = self.builder;
        PreFabConfig {
            name: self.name.to_string(),
            description: self.description.to_string(),
            builder: Arc::new(builder),
        }
    }
}

impl<C> From<&StaticPreFabConfig<C>> for PreFabConfig<C>
where
    C: 'static + Config + Debug + Clone,
{
    fn from(config: &StaticPreFabConfig<C>) -> Self {
        config.to_prefab()
    }
}

impl<C> Debug for StaticPreFabConfig<C>
where
    C: 'static + Config + Debug + Clone,
{
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        self.to_prefab().fmt(f)
    }
}

/// A [`Config`] Well-Known Pre-Fab.
#[derive(Clone)]
pub struct PreFabConfig<C>
where
    C: 'static + Config + Debug + Clone,
{
    /// Name of the config pre-fab.
    pub name: String,

    /// Description of the config pre-fab.
    pub description: String,

    /// Builder function for the config.
    pub builder: Arc<dyn Fn() -> C + Send + Sync>,
}

impl<C> Debug for PreFabConfig<C>
where
    C: 'static + Config + Debug + Clone,
{
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let pretty = f.alternate();

        let type_name = std::any::type_name::<C>();
        let mut handle = f.debug_struct(&format!("PreFabConfig<{type_name}>"));

        handle
            .field("name", &self.name)
            .field("description", &self.description);

        if pretty {
            handle.field("config", &self.new_config());
        }

        handle.finish()
    }
}

impl<C> PreFabConfig<C>
where
    C: 'static + Config + Debug + Clone,
{
    /// Build a new config.
    pub fn new_config(&self) -> C {
        (self.builder)()
    }

    /// Derive a prefab whose configs are passed through `edit`.
    ///
    /// The derived prefab keeps the name and description.
    pub fn map<F>(
        &self,
        edit: F,
    ) -> Self
    where
        F: Fn(C) -> C + Send + Sync + 'static,
    {
        let builder = self.builder.clone();
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            builder: Arc::new(move || edit(builder())),
        }
    }
}

/// Find a prefab by name in a static table.
pub fn find_prefab<'a, C>(
    prefabs: &[&'a StaticPreFabConfig<C>],
    name: &str,
) -> Option<&'a StaticPreFabConfig<C>>
where
    C: 'static + Config + Debug + Clone,
{
    prefabs.iter().copied().find(|prefab| prefab.name == name)
}
