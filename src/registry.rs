//! Built-in template registry.
//!
//! The table is frozen on first access and never mutated afterwards. Iteration
//! order is the declaration order below, so `--list` output and the prompt's
//! choice list are stable across runs.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::fmt::Display;
use std::sync::LazyLock;

/// A remote repository scaffold selectable by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub key: &'static str,
    /// Human-facing location of the template repository.
    pub url: &'static str,
    /// Transport locator, see [`crate::loader::DownloadRef`].
    pub download_ref: &'static str,
    pub description: &'static str,
}

impl Display for TemplateDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.key, self.description)
    }
}

const BUILTIN_TEMPLATES: &[TemplateDescriptor] = &[
    TemplateDescriptor {
        key: "webpack-loader",
        url: "https://gitee.com/sohucw/webpack-loader",
        download_ref: "https://gitee.com:sohucw/webpack-loader#master",
        description: "自定义webpack loader",
    },
    TemplateDescriptor {
        key: "webpack-plugins",
        url: "https://gitee.com/sohucw/webpack-plugins",
        download_ref: "https://gitee.com:sohucw/webpack-plugins#master",
        description: "自定义webpack plugins",
    },
    TemplateDescriptor {
        key: "template-vue2-manage",
        url: "https://github.com/springsheep/template-vue2-manage",
        download_ref: "https://github.com:springsheep/template-vue2-manage#main",
        description: "基于 Vue.js 2.x 和 ant-design-vue 组件库且风格统一的用于快速构建中后台系统的脚手架。",
    },
];

static REGISTRY: LazyLock<IndexMap<&'static str, TemplateDescriptor>> =
    LazyLock::new(|| {
        BUILTIN_TEMPLATES.iter().map(|template| (template.key, template.clone())).collect()
    });

/// Returns every registered template in declaration order.
pub fn list_all() -> impl Iterator<Item = &'static TemplateDescriptor> {
    REGISTRY.values()
}

/// Looks up a template by key.
pub fn resolve(key: &str) -> Result<&'static TemplateDescriptor> {
    REGISTRY
        .get(key)
        .ok_or_else(|| Error::UnknownTemplateError { key: key.to_string() })
}

/// Lines printed by `--list`, one per template.
pub fn list_lines() -> Vec<String> {
    list_all().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_returns_descriptor_with_same_key() {
        for template in list_all() {
            let resolved = resolve(template.key).unwrap();
            assert_eq!(resolved.key, template.key);
        }
    }

    #[test]
    fn list_all_is_stable_across_calls() {
        let first: Vec<_> = list_all().map(|t| t.key).collect();
        let second: Vec<_> = list_all().map(|t| t.key).collect();
        assert_eq!(first, second);
        assert_eq!(first, ["webpack-loader", "webpack-plugins", "template-vue2-manage"]);
    }

    #[test]
    fn resolve_unknown_key_fails() {
        match resolve("react-app") {
            Err(Error::UnknownTemplateError { key }) => assert_eq!(key, "react-app"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn list_lines_match_key_colon_description() {
        let lines = list_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "webpack-loader : 自定义webpack loader");
        for (line, template) in lines.iter().zip(list_all()) {
            assert_eq!(line, &format!("{} : {}", template.key, template.description));
        }
    }

    #[test]
    fn every_download_ref_parses() {
        for template in list_all() {
            assert!(crate::loader::DownloadRef::parse(template.download_ref).is_ok());
        }
    }
}
