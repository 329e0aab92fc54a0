use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::catalog::components::InMemoryComponentSource;
use crate::catalog::dataset::Catalog;
use crate::catalog::domain::{
    AccessibilityLevel, AiCodeGen, AiQuality, ComponentAudit, ComponentCategory, ComponentEntry,
    SystemId, SystemRecord, Theming,
};
use crate::catalog::recommend::{
    ExperienceLevel, FrameworkChoice, Priority, TypeScriptPreference, WizardAnswers,
};
use crate::catalog::service::CatalogService;

/// Bare record with neutral values; tests override what they exercise.
pub(super) fn record(id: &str) -> SystemRecord {
    SystemRecord {
        id: SystemId::from(id),
        name: id.to_string(),
        maintainer: "Acme".to_string(),
        license: "MIT".to_string(),
        frameworks: vec!["React".to_string()],
        component_count: 10,
        github_stars: 100,
        accessibility: AccessibilityLevel::Wcag21Aa,
        theming: Theming::Basic,
        typescript: false,
        cms: None,
        ai_code_gen: None,
        figma_url: None,
        penpot_url: None,
        storybook_url: None,
        docs_url: None,
        github_url: None,
        demo_url: None,
        last_updated: "2024-01-01".to_string(),
        maturity: None,
    }
}

fn ai(quality: AiQuality) -> Option<AiCodeGen> {
    Some(AiCodeGen {
        supported: true,
        quality: Some(quality),
        notes: String::new(),
    })
}

fn url(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn frameworks(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn material() -> SystemRecord {
    SystemRecord {
        name: "Material UI".to_string(),
        maintainer: "MUI".to_string(),
        component_count: 60,
        github_stars: 93_000,
        theming: Theming::Advanced,
        typescript: true,
        ai_code_gen: ai(AiQuality::Excellent),
        figma_url: url("https://figma.example/material"),
        storybook_url: url("https://storybook.example/material"),
        docs_url: url("https://mui.example"),
        github_url: url("https://github.example/mui"),
        last_updated: "2024-11-01".to_string(),
        maturity: Some("Mature".to_string()),
        ..record("material")
    }
}

pub(super) fn chakra() -> SystemRecord {
    SystemRecord {
        name: "Chakra UI".to_string(),
        maintainer: "Segun Adebayo".to_string(),
        component_count: 55,
        github_stars: 37_000,
        theming: Theming::Advanced,
        typescript: true,
        ai_code_gen: ai(AiQuality::Good),
        figma_url: url("https://figma.example/chakra"),
        docs_url: url("https://chakra.example"),
        last_updated: "2024-10-15".to_string(),
        maturity: Some("Stable".to_string()),
        ..record("chakra")
    }
}

pub(super) fn vuetify() -> SystemRecord {
    SystemRecord {
        name: "Vuetify".to_string(),
        maintainer: "Vuetify".to_string(),
        frameworks: frameworks(&["Vue"]),
        component_count: 80,
        github_stars: 39_000,
        theming: Theming::Advanced,
        typescript: true,
        ai_code_gen: ai(AiQuality::Good),
        figma_url: url("https://figma.example/vuetify"),
        last_updated: "2024-09-01".to_string(),
        ..record("vuetify")
    }
}

pub(super) fn carbon() -> SystemRecord {
    SystemRecord {
        name: "Carbon".to_string(),
        maintainer: "IBM".to_string(),
        license: "Apache 2.0".to_string(),
        frameworks: frameworks(&["React", "Vue", "Angular"]),
        component_count: 75,
        github_stars: 7_500,
        accessibility: AccessibilityLevel::Wcag21Aaa,
        theming: Theming::Advanced,
        typescript: true,
        ai_code_gen: ai(AiQuality::Good),
        figma_url: url("https://figma.example/carbon"),
        storybook_url: url("https://storybook.example/carbon"),
        ..record("carbon")
    }
}

pub(super) fn polaris() -> SystemRecord {
    SystemRecord {
        name: "Polaris".to_string(),
        maintainer: "Shopify".to_string(),
        component_count: 70,
        github_stars: 5_600,
        accessibility: AccessibilityLevel::Wcag22Aa,
        typescript: true,
        cms: Some("Shopify".to_string()),
        ai_code_gen: ai(AiQuality::Good),
        storybook_url: url("https://storybook.example/polaris"),
        ..record("polaris")
    }
}

pub(super) fn govuk() -> SystemRecord {
    SystemRecord {
        name: "GOV.UK Frontend".to_string(),
        maintainer: "Government Digital Service".to_string(),
        frameworks: frameworks(&["CSS"]),
        component_count: 35,
        github_stars: 1_200,
        accessibility: AccessibilityLevel::Wcag22Aa,
        last_updated: "2024-06".to_string(),
        ..record("govuk")
    }
}

/// Six systems in a fixed dataset order: material, chakra, vuetify, carbon, polaris, govuk.
pub(super) fn catalog() -> Catalog {
    Catalog::new(vec![
        material(),
        chakra(),
        vuetify(),
        carbon(),
        polaris(),
        govuk(),
    ])
    .expect("fixture catalog is valid")
}

pub(super) fn audit(names: &[&str]) -> ComponentAudit {
    ComponentAudit {
        last_updated: Some("2024-11-01".to_string()),
        total_components: None,
        notes: Some("Audited against the public docs".to_string()),
        components: vec![ComponentCategory {
            category: "Core".to_string(),
            items: names
                .iter()
                .map(|name| ComponentEntry {
                    name: name.to_string(),
                    description: format!("{name} component"),
                    documented: true,
                    accessibility: None,
                    docs_url: None,
                    storybook_url: None,
                })
                .collect(),
        }],
    }
}

/// Audits exist for material and chakra only.
pub(super) fn components() -> InMemoryComponentSource {
    InMemoryComponentSource::default()
        .with_audit("material", audit(&["Button", "Modal", "Date Picker"]))
        .with_audit("chakra", audit(&["Button", "Drawer"]))
}

pub(super) fn service() -> CatalogService<InMemoryComponentSource> {
    CatalogService::new(Arc::new(catalog()), Arc::new(components()))
}

pub(super) fn answers(
    framework: &str,
    typescript: TypeScriptPreference,
    experience: ExperienceLevel,
    priorities: &[Priority],
    components: &[&str],
) -> WizardAnswers {
    WizardAnswers {
        framework: FrameworkChoice::from(framework),
        typescript,
        experience,
        priorities: priorities.to_vec(),
        components: components.iter().map(|name| name.to_string()).collect(),
    }
}

pub(super) fn ids(records: &[&SystemRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.id.as_str().to_string())
        .collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
