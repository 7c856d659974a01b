//! Composition Engine Tests
//!
//! Compile passes driven directly through `CompositionEngine`.

mod support;

use hmvc_composer::{
    ComposeError, ComposeOptions, CompositionEngine, Context, ContextNode, ElementNode,
    InMemoryViewResolver, NamingValidator, Outcome, TypeRole,
};
use serde_json::{json, Value};
use support::{collect_assets, new_log, resolver_for, Widget};

type Compiled = (hmvc_composer::Result<Outcome<(), String>>, Box<dyn Context>);

fn compile(root: Widget, resolver: &InMemoryViewResolver) -> Compiled {
    compile_with(root, resolver, &ComposeOptions::default())
}

/// Registers and seeds the root through its own hooks, then runs the engine.
fn compile_with(
    root: Widget,
    resolver: &InMemoryViewResolver,
    options: &ComposeOptions,
) -> Compiled {
    let mut node = ElementNode::new(root);
    node.register_elements().ok().expect("registration");
    let mut context = node.build_context().ok().expect("root context");
    let engine = CompositionEngine::new(resolver, options);
    let result = engine.compile(node, context.as_mut());
    (result, context)
}

/// Nothing written by the engine
fn untouched(context: &dyn Context) -> bool {
    context.assets().is_empty() && context.view_path().is_none() && context.elements().is_empty()
}

fn strings(values: &indexmap::IndexSet<String>) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

#[test]
fn should_merge_nav_and_body_assets_into_root() {
    let root = Widget::page("Home")
        .child("nav", Widget::element("Nav").stylesheet("nav.css"))
        .child(
            "body",
            Widget::element("Body").stylesheet("nav.css").script("body.js"),
        );
    let resolver = resolver_for(&root);

    let (result, context) = compile(root, &resolver);

    assert_eq!(result.unwrap(), Outcome::Continue(()));
    assert_eq!(strings(&context.assets().stylesheets), vec!["nav.css"]);
    assert_eq!(strings(&context.assets().scripts), vec!["body.js"]);

    let elements = context.elements();
    assert_eq!(elements.keys().collect::<Vec<_>>(), vec!["nav", "body"]);
    for child in elements.values() {
        assert_eq!(child.get("javascripts"), Some(&json!([])));
        assert_eq!(child.get("stylesheets"), Some(&json!([])));
        assert_eq!(child.get("javascriptParameters"), Some(&json!({})));
    }
    assert_eq!(
        elements["nav"].get("viewPath"),
        Some(&json!("AppBundle:Element:nav.html.twig"))
    );
}

#[test]
fn should_surface_each_asset_once_across_levels() {
    let root = Widget::page("Home").script("app.js").child(
        "main",
        Widget::element("Main")
            .script("app.js")
            .stylesheet("main.css")
            .child(
                "sidebar",
                Widget::element("Sidebar")
                    .script("sidebar.js")
                    .stylesheet("main.css"),
            )
            .child("footer", Widget::element("Footer").script("sidebar.js")),
    );
    let resolver = resolver_for(&root);

    let (result, context) = compile(root, &resolver);
    assert!(result.is_ok());

    let mut found = Vec::new();
    collect_assets(&Value::Object(context.to_map()), &mut found);
    found.sort();
    assert_eq!(found, vec!["app.js", "main.css", "sidebar.js"]);
}

#[test]
fn should_reject_invalid_model_name_without_touching_context() {
    let root = Widget::new(
        "AppBundle::Model::Page::HomeWidget",
        "AppBundle::Context::Page::HomeContext",
    )
    .script("home.js")
    .parameter("locale", "en");
    let resolver = InMemoryViewResolver::new().with("AppBundle:Page:home_widget.html.twig", "");

    let (result, context) = compile(root, &resolver);

    assert_eq!(
        result.unwrap_err(),
        ComposeError::naming(TypeRole::Model, "AppBundle::Model::Page::HomeWidget", "Model")
    );
    assert!(untouched(context.as_ref()));
}

#[test]
fn should_reject_invalid_context_name() {
    let root = Widget::new("AppBundle::Model::Page::HomeModel", "HomeState");
    let resolver = resolver_for(&root);

    let (result, context) = compile(root, &resolver);

    match result {
        Err(ComposeError::StructuralNaming { role, identity, .. }) => {
            assert_eq!(role, TypeRole::Context);
            assert_eq!(identity, "HomeState");
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(untouched(context.as_ref()));
}

#[test]
fn should_abort_whole_pass_on_invalid_descendant() {
    let broken = Widget::new("AppBundle::Model::Element::Broken", "AppBundle::Context::BrokenContext");
    let root = Widget::page("Home").child(
        "main",
        Widget::element("Main").child("broken", broken),
    );
    let resolver = resolver_for(&root);

    let (result, _) = compile(root, &resolver);

    assert!(matches!(
        result,
        Err(ComposeError::StructuralNaming {
            role: TypeRole::Model,
            ..
        })
    ));
}

#[test]
fn should_start_clean_after_correcting_tree() {
    let resolver = resolver_for(&Widget::page("Home").child("nav", Widget::element("Nav")));

    let broken = Widget::page("Home").child("nav", Widget::new("NavWidget", "NavContext"));
    let (first, _) = compile(broken, &resolver);
    assert!(first.is_err());

    let fixed = Widget::page("Home").child("nav", Widget::element("Nav").script("nav.js"));
    let (second, context) = compile(fixed, &resolver);
    assert!(second.is_ok());
    assert_eq!(strings(&context.assets().scripts), vec!["nav.js"]);
}

#[test]
fn should_keep_first_registration_of_a_name() {
    let first = Widget::element("Nav").stylesheet("first.css");
    let second = Widget::element("Menu").stylesheet("second.css");

    let duplicated = Widget::page("Home")
        .child("nav", first.clone())
        .child("nav", second.clone());
    let single = Widget::page("Home").child("nav", first);

    let mut resolver = resolver_for(&duplicated);
    resolver.add(&second.view(), "");

    let (dup_result, dup_context) = compile(duplicated, &resolver);
    let (single_result, single_context) = compile(single, &resolver);

    assert!(dup_result.is_ok() && single_result.is_ok());
    assert_eq!(dup_context.to_map(), single_context.to_map());
    assert_eq!(strings(&dup_context.assets().stylesheets), vec!["first.css"]);
}

#[test]
fn should_fail_when_view_does_not_exist() {
    let root = Widget::page("Home").child("nav", Widget::element("Nav"));
    let resolver = InMemoryViewResolver::new().with("AppBundle:Page:home.html.twig", "");

    let (result, _) = compile(root, &resolver);

    assert_eq!(
        result.unwrap_err(),
        ComposeError::ViewResolution {
            model: "AppBundle::Model::Element::NavModel".to_string(),
            view: "AppBundle:Element:nav.html.twig".to_string(),
        }
    );
}

#[test]
fn should_compile_leaf_to_itself() {
    let root = Widget::page("About")
        .script("about.js")
        .stylesheet("about.css")
        .parameter("section", "about")
        .data("title", "About us");
    let resolver = resolver_for(&root);

    let (result, context) = compile(root, &resolver);
    assert!(result.is_ok());

    let map = context.to_map();
    assert_eq!(map.get("title"), Some(&json!("About us")));
    assert_eq!(map.get("javascripts"), Some(&json!(["about.js"])));
    assert_eq!(map.get("stylesheets"), Some(&json!(["about.css"])));
    assert_eq!(map.get("javascriptParameters"), Some(&json!({"section": "about"})));
    assert_eq!(map.get("viewPath"), Some(&json!("AppBundle:Page:about.html.twig")));
    assert_eq!(map.get("elements"), Some(&json!({})));
}

#[test]
fn should_let_own_parameters_override_caller_seed() {
    let root = Widget::page("Home").parameter("locale", "fr");
    let resolver = resolver_for(&root);
    let options = ComposeOptions::default();

    let mut context = ContextNode::new(root.context.clone())
        .with_parameter("locale", "en")
        .with_parameter("debug", true);
    let mut node = ElementNode::new(root);
    assert!(node.register_elements().is_ok());
    let result = CompositionEngine::new(&resolver, &options).compile(node, &mut context);

    assert!(result.is_ok());
    assert_eq!(context.assets().parameters.get("locale"), Some(&json!("fr")));
    assert_eq!(context.assets().parameters.get("debug"), Some(&json!(true)));
}

#[test]
fn should_register_children_right_before_compiling_them() {
    let log = new_log();
    let root = Widget::page("Home")
        .logged(&log)
        .child(
            "main",
            Widget::element("Main")
                .logged(&log)
                .child("list", Widget::element("List").logged(&log)),
        )
        .child("footer", Widget::element("Footer").logged(&log));
    let resolver = resolver_for(&root);

    let (result, context) = compile(root, &resolver);
    assert!(result.is_ok());

    assert_eq!(
        *log.borrow(),
        vec![
            "register:AppBundle::Model::Page::HomeModel",
            "build:AppBundle::Model::Page::HomeModel",
            "register:AppBundle::Model::Element::MainModel",
            "build:AppBundle::Model::Element::MainModel",
            "register:AppBundle::Model::Element::ListModel",
            "build:AppBundle::Model::Element::ListModel",
            "register:AppBundle::Model::Element::FooterModel",
            "build:AppBundle::Model::Element::FooterModel",
        ]
    );
    assert!(context.elements()["main"]["elements"]["list"].is_object());
}

#[test]
fn should_flatten_element_data_under_child_name() {
    let root = Widget::page("Home").child(
        "menu",
        Widget::element("Menu").data("items", json!(["home", "shop"])),
    );
    let resolver = resolver_for(&root);

    let (result, context) = compile(root, &resolver);
    assert!(result.is_ok());
    assert_eq!(context.elements()["menu"]["items"], json!(["home", "shop"]));
}

#[test]
fn should_use_configured_naming_and_format() {
    let options = ComposeOptions::default()
        .with_template_format("php")
        .with_naming(NamingValidator::new("Element", "View"));
    let root = Widget::new("AppBundle::Page::HomeElement", "AppBundle::Page::HomeView");
    let resolver = InMemoryViewResolver::new().with("AppBundle:Page:home.html.php", "");

    let (result, context) = compile_with(root, &resolver, &options);

    assert!(result.is_ok());
    assert_eq!(
        context.view_path().map(ToString::to_string),
        Some("AppBundle:Page:home.html.php".to_string())
    );
}
