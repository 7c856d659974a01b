// Perform Compose
//
// Runs a manifest through the page assembler against the configured view
// root.

use hmvc_composer::{
    CachedViewResolver, FileViewResolver, Outcome, PageAssembler, RenderedView, ViewResolver,
};
use serde::Serialize;

use crate::config::ComposerConfig;
use crate::manifest::ManifestElement;

/// What a page turned into
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PageResult {
    Rendered(RenderedView),
    Redirect { target: String },
}

/// Summary of a check run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CheckResult {
    #[serde(rename_all = "camelCase")]
    Valid { view: String, element_count: usize },
    Redirect { target: String },
}

pub fn perform_compose(
    config: &ComposerConfig,
    page: ManifestElement,
) -> anyhow::Result<PageResult> {
    let resolver = FileViewResolver::new(&config.view_root);
    if config.cache_views {
        render_with(&CachedViewResolver::new(resolver), config, page)
    } else {
        render_with(&resolver, config, page)
    }
}

/// Naming gate and view resolution for the whole tree, without rendering.
pub fn perform_check(
    config: &ComposerConfig,
    page: ManifestElement,
) -> anyhow::Result<CheckResult> {
    let resolver = CachedViewResolver::new(FileViewResolver::new(&config.view_root));
    let element_count = page.element_count();
    let assembler = PageAssembler::with_options(&resolver, config.compose_options());

    match assembler.compose::<String, _>(page)? {
        Outcome::Continue(context) => Ok(CheckResult::Valid {
            view: context
                .view_path()
                .map(ToString::to_string)
                .unwrap_or_default(),
            element_count,
        }),
        Outcome::ShortCircuit(target) => Ok(CheckResult::Redirect { target }),
    }
}

fn render_with<V>(
    resolver: &V,
    config: &ComposerConfig,
    page: ManifestElement,
) -> anyhow::Result<PageResult>
where
    V: ViewResolver<Output = RenderedView>,
{
    let assembler = PageAssembler::with_options(resolver, config.compose_options());
    let result = match assembler.render::<String, _>(page)? {
        Outcome::Continue(rendered) => PageResult::Rendered(rendered),
        Outcome::ShortCircuit(target) => PageResult::Redirect { target },
    };
    Ok(result)
}
