use super::common::*;
use crate::catalog::dataset::Catalog;
use crate::catalog::domain::AiQuality;
use crate::catalog::stats::{catalog_stats, CatalogStats, Rank, SystemProfile};
use chrono::NaiveDate;

fn labels(entries: &[crate::catalog::stats::views::DistributionEntry]) -> Vec<(&str, usize)> {
    entries
        .iter()
        .map(|entry| (entry.label.as_str(), entry.share.count))
        .collect()
}

#[test]
fn overview_and_shares() {
    let stats = catalog_stats(&catalog());

    assert_eq!(stats.overview.total_systems, 6);
    assert_eq!(stats.overview.total_components, 375);
    assert_eq!(stats.overview.total_stars, 183_300);
    assert_eq!(stats.overview.unique_maintainers, 6);

    assert_eq!(stats.ai_supported.count, 5);
    assert_eq!(stats.ai_supported.percent, 83.3);
    assert_eq!(stats.typescript.count, 5);

    assert_eq!(stats.quality_count(AiQuality::Good), 4);
    assert_eq!(stats.quality_count(AiQuality::Excellent), 1);
    assert_eq!(stats.ai_quality[0].quality, AiQuality::Good);
    assert_eq!(
        stats.ai_quality[0].description,
        "Mostly correct code, may need occasional corrections"
    );
}

#[test]
fn distributions_sort_by_count_with_first_seen_ties() {
    let stats = catalog_stats(&catalog());

    assert_eq!(
        labels(&stats.frameworks),
        vec![("React", 4), ("Vue", 2), ("Angular", 1), ("CSS", 1)]
    );
    assert_eq!(labels(&stats.licenses), vec![("MIT", 5), ("Apache 2.0", 1)]);
    assert_eq!(labels(&stats.theming), vec![("Advanced", 4), ("Basic", 2)]);
    assert_eq!(CatalogStats::distribution_count(&stats.licenses, "GPL"), 0);
}

#[test]
fn accessibility_tools_and_system_types() {
    let stats = catalog_stats(&catalog());

    assert_eq!(stats.accessibility.wcag21_aa.count, 3);
    assert_eq!(stats.accessibility.wcag22_aa.count, 2);
    assert_eq!(stats.accessibility.wcag21_aaa.count, 1);

    assert_eq!(stats.design_tools.figma.count, 4);
    assert_eq!(stats.design_tools.storybook.count, 3);
    assert_eq!(stats.design_tools.demo.count, 0);

    assert_eq!(stats.system_types.generic.count, 5);
    assert_eq!(stats.system_types.product_specific.count, 1);
    assert_eq!(labels(&stats.system_types.products), vec![("Shopify", 1)]);
}

#[test]
fn component_summary_and_top_list() {
    let stats = catalog_stats(&catalog());

    assert_eq!(stats.components.average, 62.5);
    assert_eq!(stats.components.median, 65.0);
    let min = stats.components.min.as_ref().expect("min");
    assert_eq!((min.count, min.system.as_str()), (35, "GOV.UK Frontend"));
    let max = stats.components.max.as_ref().expect("max");
    assert_eq!((max.count, max.system.as_str()), (80, "Vuetify"));

    let top: Vec<&str> = stats
        .top_by_stars
        .iter()
        .map(|entry| entry.id.as_str())
        .collect();
    assert_eq!(
        top,
        vec!["material", "vuetify", "chakra", "carbon", "polaris", "govuk"]
    );
    assert_eq!(stats.top_by_stars[0].rank, 1);
}

#[test]
fn insights_describe_the_catalog() {
    let stats = catalog_stats(&catalog());

    assert_eq!(stats.insights.len(), 10);
    assert_eq!(
        stats.insights[0],
        "React dominates with 4 systems (66.7% support)"
    );
    assert!(stats
        .insights
        .contains(&"Material UI leads with 93,000+ stars".to_string()));
    assert!(stats
        .insights
        .contains(&"1 system achieves WCAG AAA compliance".to_string()));
    assert!(stats
        .insights
        .contains(&"Figma is more popular (4 vs 3)".to_string()));
}

#[test]
fn empty_catalog_yields_zeros() {
    let stats = catalog_stats(&Catalog::default());

    assert_eq!(stats.overview.total_systems, 0);
    assert_eq!(stats.ai_supported.percent, 0.0);
    assert_eq!(stats.components.average, 0.0);
    assert!(stats.components.min.is_none());
    assert!(stats.frameworks.is_empty());
    assert!(stats.top_by_stars.is_empty());
    assert!(stats.insights.is_empty());
}

#[test]
fn profile_ranks_against_the_catalog() {
    let catalog = catalog();
    let today = NaiveDate::from_ymd_opt(2024, 10, 25).expect("valid date");

    let profile =
        SystemProfile::build(&catalog, "chakra", Some(audit(&["Button"])), today).expect("profile");

    assert_eq!(profile.popularity_rank, Rank { position: 3, of: 6 });
    assert_eq!(profile.popularity_rank.to_string(), "#3 of 6");
    assert_eq!(profile.size_rank, Rank { position: 5, of: 6 });
    // Averages round to 30,550 stars and 63 components.
    assert_eq!(profile.stars_vs_average, Some(21));
    assert_eq!(profile.components_vs_average, Some(-13));
    assert_eq!(profile.ai_quality, "Good");
    assert_eq!(profile.days_since_update, Some(10));
    assert!(profile.resources.docs);
    assert!(!profile.resources.storybook);

    let audit = profile.audit.expect("audit attached");
    assert_eq!(audit.total_components, 1);
    assert_eq!(audit.categories[0].components[0].accessibility, "Full");
    assert_eq!(audit.notes.as_deref(), Some("Audited against the public docs"));
}

#[test]
fn profile_for_unknown_id_is_not_found() {
    let today = NaiveDate::from_ymd_opt(2024, 10, 25).expect("valid date");
    assert!(SystemProfile::build(&catalog(), "bootstrap", None, today).is_err());

    let error = service().profile("", today).expect_err("blank id");
    assert!(error.is_not_found());
}

#[test]
fn profile_license_anchor_and_missing_ai() {
    let today = NaiveDate::from_ymd_opt(2024, 10, 25).expect("valid date");
    let carbon = SystemProfile::build(&catalog(), "carbon", None, today).expect("carbon");
    assert_eq!(carbon.license_anchor, "apache-2.0");
    assert!(carbon.audit.is_none());

    let govuk = service().profile("govuk", today).expect("govuk");
    assert_eq!(govuk.ai_quality, "Not specified");
    // "2024-06" reads as the first of the month.
    assert_eq!(govuk.days_since_update, Some(146));
}
