//! Name-keyed cache of lazily built scenes.

use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Builds the scene for a name that has not been registered yet.
///
/// Implementations must always produce something: names they do not
/// recognise get a placeholder scene rather than an error.
pub trait SceneFactory {
    /// The scene type produced.
    type Scene;

    /// Builds the scene registered under the case-folded `name`.
    fn make_scene(&self, name: &str) -> Self::Scene;
}

impl<S, G> SceneFactory for G
where
    G: Fn(&str) -> S,
{
    type Scene = S;

    fn make_scene(&self, name: &str) -> S {
        self(name)
    }
}

/// Registry mapping case-insensitive names to scenes, with one current scene.
///
/// Scenes are built on first use by the [`SceneFactory`] and cached, so
/// switching back to a scene finds it in the state it was left in.
pub struct SceneRegistry<F: SceneFactory> {
    factory: F,
    scenes: HashMap<String, F::Scene>,
    current: Option<String>,
}

impl<F: SceneFactory> std::fmt::Debug for SceneRegistry<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.scenes.keys().collect();
        names.sort();
        f.debug_struct("SceneRegistry")
            .field("scenes", &names)
            .field("current", &self.current)
            .finish()
    }
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}

impl<F: SceneFactory> SceneRegistry<F> {
    /// Creates an empty registry backed by `factory`.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            scenes: HashMap::new(),
            current: None,
        }
    }

    /// Stores `scene` under the case-folded `name`, replacing any previous one.
    #[instrument(skip(self, scene))]
    pub fn register(&mut self, name: &str, scene: F::Scene) {
        let key = fold(name);
        if self.scenes.insert(key.clone(), scene).is_some() {
            debug!(scene = %key, "Replaced registered scene");
        } else {
            debug!(scene = %key, "Registered scene");
        }
    }

    /// Makes the scene called `name` current and returns it.
    ///
    /// Unregistered names are built by the factory and cached first, so
    /// this never fails.
    #[instrument(skip(self))]
    pub fn show(&mut self, name: &str) -> &F::Scene {
        let key = fold(name);
        let factory = &self.factory;
        let scene = self.scenes.entry(key.clone()).or_insert_with(|| {
            info!(scene = %key, "Building scene");
            factory.make_scene(&key)
        });
        debug!(scene = %key, "Showing scene");
        self.current = Some(key);
        scene
    }

    /// Returns true if a scene is cached under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.scenes.contains_key(&fold(name))
    }

    /// Returns the scene cached under `name` without making it current.
    pub fn get(&self, name: &str) -> Option<&F::Scene> {
        self.scenes.get(&fold(name))
    }

    /// Case-folded name of the current scene.
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The current scene, if one has been shown.
    pub fn current(&self) -> Option<&F::Scene> {
        self.current.as_ref().and_then(|key| self.scenes.get(key))
    }

    /// Mutable access to the current scene.
    pub fn current_mut(&mut self) -> Option<&mut F::Scene> {
        match &self.current {
            Some(key) => self.scenes.get_mut(key),
            None => None,
        }
    }

    /// Number of cached scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Returns true if no scene has been registered or built.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}
