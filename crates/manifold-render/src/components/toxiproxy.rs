//! Toxiproxy: a fault-injection TCP proxy placed in front of web
//! application backends.
//!
//! Gated by `experimental.webApp.toxiproxy.enabled`.

use std::collections::{BTreeMap, HashSet};

use manifold_common::config::ToxiproxyProxy;
use manifold_common::error::{ManifoldError, Result};
use manifold_common::types::DeployableObject;

use crate::common::{config_map, default_service_account};
use crate::context::RenderContext;
use crate::renderer::{Composite, Renderer};
use crate::resolver::experimental_toxiproxy;

/// Component name.
pub const COMPONENT: &str = "toxiproxy";

/// Key of the proxy list inside the config map.
pub const CONFIG_KEY: &str = "toxiproxy.json";

/// Renders the component's objects: its configuration, then its service
/// account. Renders nothing unless the feature is enabled.
///
/// # Errors
///
/// Returns an error if the configured proxies are invalid.
pub fn objects(ctx: &RenderContext) -> Result<Vec<DeployableObject>> {
    let enabled = experimental_toxiproxy(ctx).is_some_and(|cfg| cfg.enabled);
    if !enabled {
        tracing::debug!(component = COMPONENT, "component disabled, skipping");
        return Ok(Vec::new());
    }

    let objects = Composite::new()
        .then(config_map(COMPONENT, proxy_config))
        .then(default_service_account(COMPONENT))
        .render(ctx)?;
    tracing::debug!(component = COMPONENT, count = objects.len(), "component rendered");
    Ok(objects)
}

/// Proxies used when none are configured: the web application's database.
fn default_proxies() -> Vec<ToxiproxyProxy> {
    vec![ToxiproxyProxy {
        name: "mysql".into(),
        listen: "[::]:3306".into(),
        upstream: "mysql:3306".into(),
        enabled: true,
    }]
}

fn proxy_config(ctx: &RenderContext) -> Result<BTreeMap<String, String>> {
    let configured = experimental_toxiproxy(ctx).map_or(&[][..], |cfg| cfg.proxies.as_slice());
    let proxies = if configured.is_empty() {
        default_proxies()
    } else {
        validate_proxies(configured)?;
        configured.to_vec()
    };

    let json = serde_json::to_string_pretty(&proxies)?;
    Ok(BTreeMap::from([(CONFIG_KEY.to_string(), json)]))
}

fn validate_proxies(proxies: &[ToxiproxyProxy]) -> Result<()> {
    let mut seen = HashSet::new();
    for proxy in proxies {
        for (field, value) in [
            ("name", &proxy.name),
            ("listen", &proxy.listen),
            ("upstream", &proxy.upstream),
        ] {
            if value.trim().is_empty() {
                return Err(ManifoldError::render(
                    COMPONENT,
                    format!("proxy \"{}\" has an empty {field}", proxy.name),
                ));
            }
        }
        if !seen.insert(proxy.name.as_str()) {
            return Err(ManifoldError::render(
                COMPONENT,
                format!("duplicate proxy name \"{}\"", proxy.name),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use manifold_common::config::{
        ExperimentalConfig, InstallerConfig, ToxiproxyConfig, WebAppConfig,
    };

    use super::*;

    fn ctx(toxiproxy: Option<ToxiproxyConfig>) -> RenderContext {
        RenderContext::new(InstallerConfig {
            domain: "example.com".into(),
            experimental: Some(ExperimentalConfig {
                web_app: Some(WebAppConfig { toxiproxy }),
            }),
            ..InstallerConfig::default()
        })
    }

    fn proxy(name: &str, listen: &str, upstream: &str) -> ToxiproxyProxy {
        ToxiproxyProxy {
            name: name.into(),
            listen: listen.into(),
            upstream: upstream.into(),
            enabled: true,
        }
    }

    fn rendered_proxies(objects: &[DeployableObject]) -> Vec<ToxiproxyProxy> {
        let json = objects[0].body()["data"][CONFIG_KEY]
            .as_str()
            .expect("proxy list is a string");
        serde_json::from_str(json).expect("proxy list is JSON")
    }

    #[test]
    fn absent_section_renders_nothing() {
        let objects = objects(&ctx(None)).expect("render");
        assert!(objects.is_empty());
    }

    #[test]
    fn disabled_section_renders_nothing() {
        let objects = objects(&ctx(Some(ToxiproxyConfig::default()))).expect("render");
        assert!(objects.is_empty());
    }

    #[test]
    fn disabled_section_skips_validation() {
        let cfg = ToxiproxyConfig {
            enabled: false,
            proxies: vec![proxy("", "", "")],
        };
        let objects = objects(&ctx(Some(cfg))).expect("render");
        assert!(objects.is_empty());
    }

    #[test]
    fn enabled_renders_config_map_then_service_account() {
        let cfg = ToxiproxyConfig {
            enabled: true,
            proxies: Vec::new(),
        };
        let objects = objects(&ctx(Some(cfg))).expect("render");
        let kinds: Vec<&str> = objects.iter().map(|o| o.kind.as_str()).collect();
        assert_eq!(kinds, vec!["ConfigMap", "ServiceAccount"]);
        assert!(objects.iter().all(|o| o.name() == COMPONENT));
    }

    #[test]
    fn empty_proxy_list_uses_default_database_proxy() {
        let cfg = ToxiproxyConfig {
            enabled: true,
            proxies: Vec::new(),
        };
        let objects = objects(&ctx(Some(cfg))).expect("render");
        assert_eq!(rendered_proxies(&objects), default_proxies());
    }

    #[test]
    fn configured_proxies_are_rendered_in_order() {
        let cfg = ToxiproxyConfig {
            enabled: true,
            proxies: vec![
                proxy("redis", "[::]:6379", "redis:6379"),
                proxy("mysql", "[::]:3306", "db.internal:3306"),
            ],
        };
        let objects = objects(&ctx(Some(cfg.clone()))).expect("render");
        assert_eq!(rendered_proxies(&objects), cfg.proxies);
    }

    #[test]
    fn empty_upstream_is_a_render_error() {
        let cfg = ToxiproxyConfig {
            enabled: true,
            proxies: vec![proxy("redis", "[::]:6379", " ")],
        };
        let err = objects(&ctx(Some(cfg))).expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "failed to render toxiproxy: proxy \"redis\" has an empty upstream"
        );
    }

    #[test]
    fn duplicate_proxy_names_are_a_render_error() {
        let cfg = ToxiproxyConfig {
            enabled: true,
            proxies: vec![
                proxy("mysql", "[::]:3306", "mysql:3306"),
                proxy("mysql", "[::]:3307", "mysql-replica:3306"),
            ],
        };
        let err = objects(&ctx(Some(cfg))).expect_err("should fail");
        assert!(matches!(
            err,
            ManifoldError::Render {
                component: COMPONENT,
                ..
            }
        ));
    }
}
