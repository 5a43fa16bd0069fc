//! Renderer contract and ordered composition.

use std::fmt;

use manifold_common::error::Result;
use manifold_common::types::DeployableObject;

use crate::context::RenderContext;

/// Produces zero or more deployable objects from a render context.
///
/// Implementors must be pure functions of the context: rendering twice
/// with the same context yields the same objects in the same order, or the
/// same error. Returning an empty list is the normal "feature off" path.
///
/// Any `Fn(&RenderContext) -> Result<Vec<DeployableObject>>` is a renderer.
pub trait Renderer: Send + Sync {
    /// Renders objects for the given context.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be turned into valid
    /// objects. No partial output is returned alongside an error.
    fn render(&self, ctx: &RenderContext) -> Result<Vec<DeployableObject>>;
}

impl<F> Renderer for F
where
    F: Fn(&RenderContext) -> Result<Vec<DeployableObject>> + Send + Sync,
{
    fn render(&self, ctx: &RenderContext) -> Result<Vec<DeployableObject>> {
        self(ctx)
    }
}

/// A renderer made of other renderers, invoked in the order they were added.
///
/// The first failing renderer stops the pass: the renderers after it are
/// not invoked and the objects rendered before it are discarded.
#[derive(Default)]
pub struct Composite {
    renderers: Vec<Box<dyn Renderer>>,
}

impl Composite {
    /// Creates an empty composite, which renders nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a renderer.
    #[must_use]
    pub fn then(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderers.push(Box::new(renderer));
        self
    }

    /// Returns the number of constituent renderers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// Returns `true` if the composite has no constituents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl Renderer for Composite {
    fn render(&self, ctx: &RenderContext) -> Result<Vec<DeployableObject>> {
        let mut objects = Vec::new();
        for renderer in &self.renderers {
            objects.extend(renderer.render(ctx)?);
        }
        Ok(objects)
    }
}

impl fmt::Debug for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composite")
            .field("renderers", &self.renderers.len())
            .finish()
    }
}

impl FromIterator<Box<dyn Renderer>> for Composite {
    fn from_iter<I: IntoIterator<Item = Box<dyn Renderer>>>(iter: I) -> Self {
        Self {
            renderers: iter.into_iter().collect(),
        }
    }
}

/// Composes renderers into one, preserving the given order.
pub fn compose(renderers: impl IntoIterator<Item = Box<dyn Renderer>>) -> Composite {
    renderers.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use manifold_common::config::InstallerConfig;
    use manifold_common::error::ManifoldError;
    use manifold_common::types::ObjectMeta;

    use super::*;

    fn object(name: &str) -> DeployableObject {
        DeployableObject::new("v1", "ConfigMap", ObjectMeta::new(name))
    }

    fn emits(names: &'static [&'static str]) -> impl Renderer {
        move |_: &RenderContext| -> Result<Vec<DeployableObject>> {
            Ok(names.iter().map(|n| object(n)).collect())
        }
    }

    fn names(objects: &[DeployableObject]) -> Vec<&str> {
        objects.iter().map(DeployableObject::name).collect()
    }

    fn ctx() -> RenderContext {
        RenderContext::new(InstallerConfig::default())
    }

    #[test]
    fn empty_composite_renders_nothing() {
        let composite = Composite::new();
        assert!(composite.is_empty());
        let objects = composite.render(&ctx()).expect("render");
        assert!(objects.is_empty());
    }

    #[test]
    fn composite_concatenates_in_order() {
        let composite = Composite::new()
            .then(emits(&["a1", "a2"]))
            .then(emits(&[]))
            .then(emits(&["b1"]));
        assert_eq!(composite.len(), 3);
        let objects = composite.render(&ctx()).expect("render");
        assert_eq!(names(&objects), vec!["a1", "a2", "b1"]);
    }

    #[test]
    fn composite_stops_at_first_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let composite = Composite::new()
            .then(emits(&["ok"]))
            .then(|_: &RenderContext| -> Result<Vec<DeployableObject>> {
                Err(ManifoldError::render("broken", "bad reference"))
            })
            .then(move |_: &RenderContext| -> Result<Vec<DeployableObject>> {
                let _ = counter.fetch_add(1, Ordering::SeqCst);
                Ok(vec![object("late")])
            });

        let err = composite.render(&ctx()).expect_err("should fail");
        assert!(matches!(
            err,
            ManifoldError::Render {
                component: "broken",
                ..
            }
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn compose_accepts_boxed_renderers() {
        let composite = compose([
            Box::new(emits(&["x"])) as Box<dyn Renderer>,
            Box::new(emits(&["y"])),
        ]);
        let objects = composite.render(&ctx()).expect("render");
        assert_eq!(names(&objects), vec!["x", "y"]);
    }

    #[test]
    fn nested_composites_flatten() {
        let inner = Composite::new().then(emits(&["a"])).then(emits(&["b"]));
        let outer = Composite::new().then(inner).then(emits(&["c"]));
        let objects = outer.render(&ctx()).expect("render");
        assert_eq!(names(&objects), vec!["a", "b", "c"]);
    }

    #[test]
    fn debug_reports_constituent_count() {
        let composite = Composite::new().then(emits(&[]));
        assert_eq!(format!("{composite:?}"), "Composite { renderers: 1 }");
    }
}
