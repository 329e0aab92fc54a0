use super::common::*;
use crate::catalog::browse::CompareSelection;
use crate::catalog::compare::{
    diff_selected, diff_systems, CompareError, DiffField, FrameworkPresence,
};
use crate::catalog::domain::SystemId;
use crate::catalog::service::CatalogServiceError;

#[test]
fn diff_flags_changed_scalar_fields() {
    let diff = diff_systems(&material(), &chakra());

    let changed: Vec<DiffField> = diff.changed_fields().map(|field| field.field).collect();
    assert_eq!(
        changed,
        vec![
            DiffField::Maintainer,
            DiffField::ComponentCount,
            DiffField::GithubStars,
            DiffField::AiQuality,
            DiffField::Storybook,
            DiffField::Maturity,
        ]
    );

    let stars = diff.field(DiffField::GithubStars).expect("stars row");
    assert_eq!(stars.left, "93.0k");
    assert_eq!(stars.right, "37.0k");
    let storybook = diff.field(DiffField::Storybook).expect("storybook row");
    assert_eq!((storybook.left.as_str(), storybook.right.as_str()), ("Yes", "No"));
}

#[test]
fn diff_is_symmetric() {
    let forward = diff_systems(&material(), &carbon());
    let backward = diff_systems(&carbon(), &material());

    for (a, b) in forward.fields.iter().zip(backward.fields.iter()) {
        assert_eq!(a.field, b.field);
        assert_eq!(a.changed, b.changed, "{} flag differs", a.label);
        assert_eq!(a.left, b.right);
        assert_eq!(a.right, b.left);
    }

    for entry in forward
        .left_frameworks
        .iter()
        .chain(backward.left_frameworks.iter())
    {
        if entry.name == "React" {
            assert_eq!(entry.presence, FrameworkPresence::Common);
        }
    }
}

#[test]
fn frameworks_are_classified_per_side() {
    let diff = diff_systems(&material(), &carbon());

    let left: Vec<(&str, FrameworkPresence)> = diff
        .left_frameworks
        .iter()
        .map(|entry| (entry.name.as_str(), entry.presence))
        .collect();
    assert_eq!(
        left,
        vec![
            ("Angular", FrameworkPresence::Removed),
            ("React", FrameworkPresence::Common),
            ("Vue", FrameworkPresence::Removed),
        ]
    );
    assert!(diff
        .right_frameworks
        .iter()
        .filter(|entry| entry.name != "React")
        .all(|entry| entry.presence == FrameworkPresence::Added));
}

#[test]
fn selection_must_hold_exactly_two() {
    let one = material();
    match diff_selected(&[&one]) {
        Err(CompareError::SelectionSize { selected }) => assert_eq!(selected, 1),
        other => panic!("expected selection size error, got {other:?}"),
    }

    let (a, b, c) = (material(), chakra(), carbon());
    assert!(matches!(
        diff_selected(&[&a, &b, &c]),
        Err(CompareError::SelectionSize { selected: 3 })
    ));
    assert!(diff_selected(&[&a, &b]).is_ok());
}

#[test]
fn service_attaches_component_comparison_when_both_audits_exist() {
    let service = service();
    let diff = service.compare("material", "chakra").expect("compare");

    let components = diff.components.expect("both audits present");
    assert_eq!(components.common, vec!["Button".to_string()]);
    assert_eq!(
        components.left_only,
        vec!["Date Picker".to_string(), "Modal".to_string()]
    );
    assert_eq!(components.right_only, vec!["Drawer".to_string()]);
}

#[test]
fn service_omits_components_when_an_audit_is_missing() {
    let diff = service().compare("material", "carbon").expect("compare");
    assert!(diff.components.is_none());
}

#[test]
fn service_reports_unknown_ids_as_not_found() {
    let error = service()
        .compare("material", "bootstrap")
        .expect_err("unknown id");
    assert!(error.is_not_found());
    assert!(matches!(
        error,
        CatalogServiceError::Compare(CompareError::UnknownSystem(ref id)) if id.as_str() == "bootstrap"
    ));
}

#[test]
fn service_compares_a_ready_selection() {
    let service = service();
    let mut selection = CompareSelection::default();
    selection
        .check(SystemId::from("chakra"))
        .expect("first selection");
    assert!(matches!(
        service.compare_selection(&selection),
        Err(CatalogServiceError::Compare(CompareError::SelectionSize { selected: 1 }))
    ));

    selection
        .check(SystemId::from("polaris"))
        .expect("second selection");
    let diff = service.compare_selection(&selection).expect("compare");
    assert_eq!(diff.left_id.as_str(), "chakra");
    assert_eq!(diff.right_id.as_str(), "polaris");
}
