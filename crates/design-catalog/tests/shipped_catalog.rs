use design_catalog::catalog::browse::{BrowseView, CmsFilter, FilterCriteria, SortKey};
use design_catalog::catalog::recommend::{
    ExperienceLevel, FrameworkChoice, Priority, TypeScriptPreference, Wizard, WizardError,
    WizardStep,
};
use design_catalog::catalog::stats::CatalogStats;
use design_catalog::catalog::{Catalog, CatalogService, DirectoryComponentSource};
use design_catalog::config::CatalogConfig;
use std::path::PathBuf;
use std::sync::Arc;

fn data_config() -> CatalogConfig {
    CatalogConfig {
        data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data"),
    }
}

fn shipped_service() -> CatalogService<DirectoryComponentSource> {
    let config = data_config();
    let catalog = Catalog::from_path(config.systems_path()).expect("shipped dataset loads");
    CatalogService::new(
        Arc::new(catalog),
        Arc::new(DirectoryComponentSource::new(config.components_dir())),
    )
}

fn ids(service: &CatalogService<DirectoryComponentSource>, view: &BrowseView) -> Vec<String> {
    service
        .browse(view)
        .rows
        .into_iter()
        .map(|row| row.id.to_string())
        .collect()
}

#[test]
fn shipped_dataset_satisfies_load_invariants() {
    let service = shipped_service();
    let catalog = service.catalog();

    assert_eq!(catalog.len(), 11);
    assert!(catalog
        .systems()
        .iter()
        .all(|system| !system.frameworks.is_empty()));
    assert_eq!(
        catalog.filter_options().licenses,
        vec!["Apache 2.0", "MIT", "MPL 2.0"]
    );
}

#[test]
fn browse_filters_then_sorts_descending() {
    let service = shipped_service();
    let view = BrowseView::default()
        .with_criteria(FilterCriteria {
            framework: Some("React".to_string()),
            cms: CmsFilter::NonCms,
            ..FilterCriteria::default()
        })
        .sorted_by(SortKey::GithubStars)
        .sorted_by(SortKey::GithubStars);

    assert_eq!(
        ids(&service, &view),
        vec!["material-ui", "ant-design", "chakra-ui", "fluent-ui", "carbon"]
    );
}

#[test]
fn compare_uses_component_audits_when_both_exist() {
    let service = shipped_service();

    let diff = service.compare("material-ui", "carbon").expect("diff");
    let components = diff.components.expect("both audits shipped");
    assert_eq!(components.common, vec!["Button", "Date Picker"]);
    assert!(components.right_only.contains(&"Data Table".to_string()));

    let without_audit = service.compare("material-ui", "ant-design").expect("diff");
    assert!(without_audit.components.is_none());
}

#[test]
fn wizard_answers_drive_recommendations() {
    let service = shipped_service();
    let mut wizard = Wizard::new();
    wizard
        .choose_framework(FrameworkChoice::from("React"))
        .expect("framework");
    wizard
        .choose_typescript(TypeScriptPreference::Required)
        .expect("typescript");
    wizard
        .choose_experience(ExperienceLevel::Beginner)
        .expect("experience");
    assert_eq!(
        wizard.next(),
        Err(WizardError::IncompleteStep(WizardStep::Priorities))
    );
    wizard.toggle_priority(Priority::Speed).expect("speed");
    wizard.next().expect("advance to components");
    let answers = wizard.find().expect("complete answers");
    assert_eq!(wizard.step(), WizardStep::Results);

    let (_, results) = service.recommend(answers).expect("ranked");
    let summary: Vec<(&str, i32)> = results
        .iter()
        .map(|rec| (rec.system.id.as_str(), rec.score))
        .collect();

    // material-ui and ant-design tie at 93; dataset order breaks the tie.
    assert_eq!(
        summary,
        vec![("material-ui", 93), ("ant-design", 93), ("chakra-ui", 75)]
    );
}

#[test]
fn requested_components_reorder_the_ranking() {
    let service = shipped_service();
    let mut wizard = Wizard::new();
    wizard
        .choose_framework(FrameworkChoice::from("React"))
        .expect("framework");
    wizard
        .choose_typescript(TypeScriptPreference::Nice)
        .expect("typescript");
    wizard
        .choose_experience(ExperienceLevel::Advanced)
        .expect("experience");
    wizard
        .toggle_priority(Priority::Components)
        .expect("components priority");
    wizard.next().expect("advance");
    wizard.toggle_component("Button").expect("button");
    wizard.toggle_component("date picker").expect("date picker");

    let (_, results) = service
        .recommend(wizard.find().expect("answers"))
        .expect("ranked");
    let summary: Vec<(&str, i32, u8)> = results
        .iter()
        .map(|rec| (rec.system.id.as_str(), rec.score, rec.match_percent))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("carbon", 103, 100),
            ("material-ui", 90, 90),
            ("ant-design", 78, 78),
        ]
    );
    assert!(results[0]
        .reasons
        .contains(&"Has all 2 requested components".to_string()));
}

#[test]
fn stats_over_the_shipped_dataset() {
    let stats = shipped_service().stats();

    assert_eq!(stats.overview.total_systems, 11);
    assert_eq!(stats.ai_supported.count, 9);
    assert_eq!(stats.typescript.count, 9);
    assert_eq!(
        stats
            .frameworks
            .iter()
            .map(|entry| (entry.label.as_str(), entry.share.count))
            .collect::<Vec<_>>(),
        vec![
            ("React", 6),
            ("Vue", 3),
            ("Web Components", 3),
            ("Angular", 2),
            ("CSS", 2),
        ]
    );
    assert_eq!(CatalogStats::distribution_count(&stats.licenses, "MIT"), 9);
    assert_eq!(stats.top_by_stars.len(), 10);
    assert_eq!(stats.top_by_stars[1].id.as_str(), "ant-design");
    assert!(stats
        .top_by_stars
        .iter()
        .all(|entry| entry.id.as_str() != "penpot-kit"));
}

#[test]
fn profile_reads_the_component_audit() {
    let today = chrono::NaiveDate::from_ymd_opt(2024, 11, 4).expect("date");
    let profile = shipped_service()
        .profile("chakra-ui", today)
        .expect("profile");

    assert_eq!(profile.popularity_rank.to_string(), "#4 of 11");
    assert_eq!(profile.days_since_update, Some(20));
    let audit = profile.audit.expect("chakra audit shipped");
    assert_eq!(audit.total_components, 6);
    assert_eq!(audit.categories.len(), 2);

    let penpot = shipped_service()
        .profile("penpot-kit", today)
        .expect("profile");
    assert!(penpot.resources.penpot);
    assert_eq!(penpot.license_anchor, "mpl-2.0");
    assert!(penpot.audit.is_none());
}
