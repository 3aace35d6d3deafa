use dxa_model::entity::{Article, Place, Teaser};
use dxa_model::{ModelType, PageModel, RegionModel, SCHEMA_ORG_VOCABULARY};
use dxa_registry::{RegistryConfig, RegistryError, ViewKey, ViewModelRegistry, bootstrap, make_key};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn registry() -> ViewModelRegistry {
	ViewModelRegistry::from_config(&RegistryConfig::default())
}

#[fixture]
fn bootstrapped() -> ViewModelRegistry {
	let registry = registry();
	bootstrap(&registry).expect("core bootstrap should succeed");
	registry
}

#[rstest]
fn teaser_scenario(registry: ViewModelRegistry) {
	let teaser = ModelType::of::<Teaser>();
	registry
		.register_view_model(Some(ViewKey::new("Teaser", "Core").unwrap()), teaser)
		.unwrap();

	let query = make_key("Teaser", None, None, None, "Core").unwrap();
	assert_eq!(registry.get_view_model_type(&query), Ok(teaser));
}

#[rstest]
fn general_page_scenario(registry: ViewModelRegistry) {
	let page = ModelType::of::<PageModel>();
	registry.register_page_view_model("GeneralPage", page).unwrap();

	let defaults = registry.key_defaults().clone();
	let query = ViewKey::page("GeneralPage", &defaults).unwrap();
	assert_eq!(registry.get_view_model_type(&query), Ok(page));

	let wrong_controller = query.clone().with_controller("Region");
	assert!(matches!(
		registry.get_view_model_type(&wrong_controller),
		Err(RegistryError::NotFound { .. })
	));
}

#[rstest]
#[case::page("Page")]
#[case::region("Region")]
fn area_qualified_page_and_region_names(registry: ViewModelRegistry, #[case] controller: &str) {
	let model = if controller == "Page" {
		let page = ModelType::of::<PageModel>();
		registry.register_page_view_model("Custom:Home", page).unwrap();
		page
	} else {
		let region = ModelType::of::<RegionModel>();
		registry.register_region_view_model("Custom:Home", region).unwrap();
		region
	};

	assert_eq!(registry.get_view_entity_class("Custom:Home"), Ok(model));

	let query = ViewKey::new("Home", "Custom")
		.unwrap()
		.with_controller_area("Core")
		.with_controller(controller);
	assert_eq!(registry.get_view_model_type(&query), Ok(model));
}

#[rstest]
fn controller_area_must_agree(registry: ViewModelRegistry) {
	let teaser = ModelType::of::<Teaser>();
	registry.register_view_entity_class("Teaser", teaser).unwrap();

	let with_area = ViewKey::new("Teaser", "Core").unwrap().with_controller_area("X");
	assert!(registry.get_view_model_type(&with_area).is_err());

	let without_area = ViewKey::new("Teaser", "Core").unwrap();
	assert_eq!(registry.get_view_model_type(&without_area), Ok(teaser));
}

#[rstest]
fn no_area_fallback(registry: ViewModelRegistry) {
	let teaser = ModelType::of::<Teaser>();
	registry.register_view_entity_class("Custom:Promo", teaser).unwrap();

	let query = ViewKey::new("Promo", "Core").unwrap();
	assert_eq!(registry.get_view_model_type(&query), Ok(teaser));
}

#[rstest]
fn exact_area_beats_fallback(registry: ViewModelRegistry) {
	let teaser = ModelType::of::<Teaser>();
	let article = ModelType::of::<Article>();
	registry.register_view_entity_class("Custom:Promo", teaser).unwrap();
	registry.register_view_entity_class("Promo", article).unwrap();

	assert_eq!(registry.get_view_model_type(&ViewKey::new("Promo", "Core").unwrap()), Ok(article));
	assert_eq!(registry.get_view_model_type(&ViewKey::new("Promo", "Custom").unwrap()), Ok(teaser));
}

#[rstest]
fn missing_view_is_not_found(bootstrapped: ViewModelRegistry) {
	let err = bootstrapped
		.get_view_model_type(&ViewKey::new("Nope", "Core").unwrap())
		.unwrap_err();
	assert_eq!(
		err,
		RegistryError::NotFound {
			query: "Core:-/-/-/Nope".into()
		}
	);
}

#[rstest]
fn every_core_view_resolves(bootstrapped: ViewModelRegistry) {
	for (key, model_type) in bootstrapped.views() {
		assert_eq!(bootstrapped.get_view_model_type(&key), Ok(model_type), "{key}");
	}
}

#[rstest]
#[case("Article", ModelType::of::<Article>())]
#[case("Core:Place", ModelType::of::<Place>())]
#[case("HeaderLogo", ModelType::of::<Teaser>())]
fn entity_class_by_name(bootstrapped: ViewModelRegistry, #[case] name: &str, #[case] expected: ModelType) {
	assert_eq!(bootstrapped.get_view_entity_class(name), Ok(expected));
}

#[rstest]
fn entity_class_ignores_controllers(bootstrapped: ViewModelRegistry) {
	assert_eq!(bootstrapped.get_view_entity_class("Main"), Ok(ModelType::of::<RegionModel>()));
	assert!(matches!(
		bootstrapped.get_view_entity_class("Other:Main"),
		Err(RegistryError::NotFound { .. })
	));
}

#[rstest]
fn mapped_model_types_use_semantic_index(bootstrapped: ViewModelRegistry) {
	let teaser = ModelType::of::<Teaser>();
	let thing = format!("{SCHEMA_ORG_VOCABULARY}:Thing");
	assert_eq!(bootstrapped.get_mapped_model_types(&thing), vec![teaser]);
	assert!(bootstrapped.get_mapped_model_types("urn:unknown:Thing").is_empty());
}

#[rstest]
fn view_name_lookup_disagrees_with_semantic_index(bootstrapped: ViewModelRegistry) {
	// The legacy path reads the name as a view name.
	assert_eq!(
		bootstrapped.get_mapped_model_types_by_view_name("Teaser"),
		Ok(ModelType::of::<Teaser>())
	);
	let qualified = format!("{SCHEMA_ORG_VOCABULARY}:Article");
	assert!(bootstrapped.get_mapped_model_types_by_view_name(&qualified).is_err());
	assert_eq!(bootstrapped.get_mapped_model_types(&qualified), vec![ModelType::of::<Article>()]);
}

#[rstest]
fn semantic_property_names(bootstrapped: ViewModelRegistry) {
	let article = ModelType::of::<Article>();
	assert_eq!(
		bootstrapped.get_semantic_property_names(article, "headline"),
		Ok(Some(vec!["s:headline".to_string()]))
	);
	assert_eq!(bootstrapped.get_semantic_property_names(article, "missing"), Ok(None));
}

#[rstest]
fn semantic_types_and_prefixes(registry: ViewModelRegistry) {
	let (types, prefixes) = registry.get_semantic_types(ModelType::of::<Place>()).unwrap();
	assert_eq!(types, vec!["s:Place".to_string()]);
	assert_eq!(prefixes.get("s").map(String::as_str), Some(SCHEMA_ORG_VOCABULARY));
	assert!(registry.is_empty());
}

#[rstest]
fn configured_defaults_drive_presets() {
	let config = RegistryConfig::from_toml_str(
		r#"
		default_area = "Site"
		page_controller = "Pages"
		"#,
	)
	.unwrap();
	let registry = ViewModelRegistry::from_config(&config);
	registry.register_page_view_model("Home", ModelType::of::<PageModel>()).unwrap();

	let (key, _) = registry.views().remove(0);
	assert_eq!(key.area_name(), "Site");
	assert_eq!(key.controller_name(), Some("Pages"));
	assert_eq!(
		registry.get_view_entity_class("Home"),
		Ok(ModelType::of::<PageModel>())
	);
}
