use crate::infra::bootstrap;
use chrono::Utc;
use clap::{Args, ValueEnum};
use design_catalog::catalog::browse::{
    BrowsePage, BrowseView, CmsFilter, FilterCriteria, SelectionError, SortDirection, SortKey,
    SortState,
};
use design_catalog::catalog::compare::SystemDiff;
use design_catalog::catalog::format::{format_stars, format_thousands};
use design_catalog::catalog::recommend::{
    ExperienceLevel, FrameworkChoice, Priority, Recommendation, TypeScriptPreference, Wizard,
    WizardAnswers,
};
use design_catalog::catalog::stats::{CatalogStats, SystemProfile};
use design_catalog::catalog::SystemId;
use design_catalog::error::AppError;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Args, Debug, Default)]
pub(crate) struct BrowseArgs {
    /// Case-insensitive substring over name and maintainer
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Exact framework name, e.g. React
    #[arg(long)]
    pub(crate) framework: Option<String>,
    /// Exact license, e.g. MIT
    #[arg(long)]
    pub(crate) license: Option<String>,
    /// Exact maintainer
    #[arg(long)]
    pub(crate) maintainer: Option<String>,
    /// Product filter: any, cms or non-cms
    #[arg(long, default_value = "any")]
    pub(crate) cms: CmsFilter,
    /// Only systems that work with AI coding tools
    #[arg(long)]
    pub(crate) ai_required: bool,
    /// Column to sort by, e.g. githubStars or component-count
    #[arg(long)]
    pub(crate) sort: Option<SortKey>,
    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub(crate) desc: bool,
    /// Mark systems for comparison (at most two)
    #[arg(long = "select")]
    pub(crate) select: Vec<String>,
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// System id shown on the left
    pub(crate) left: String,
    /// System id shown on the right
    pub(crate) right: String,
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Framework name, or "any"
    #[arg(long, default_value = "any")]
    pub(crate) framework: String,
    /// required, nice or no
    #[arg(long, default_value = "nice")]
    pub(crate) typescript: TypeScriptPreference,
    /// beginner, intermediate or advanced
    #[arg(long, default_value = "beginner")]
    pub(crate) experience: ExperienceLevel,
    /// One or two of speed, customization, components, community, accessibility, ai
    #[arg(long, required = true)]
    pub(crate) priority: Vec<Priority>,
    /// Components the project needs, e.g. "Date Picker"
    #[arg(long)]
    pub(crate) component: Vec<String>,
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct SystemArgs {
    /// System id from systems.json
    pub(crate) id: String,
    /// Print the profile as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct StatsArgs {
    /// Print the statistics as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_browse(args: BrowseArgs, data_dir: Option<PathBuf>) -> Result<(), AppError> {
    let service = bootstrap(data_dir)?;
    let format = args.format;
    let view = browse_view(args);
    let page = service.browse(&view);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => render_browse(&page, &mut out)?,
        OutputFormat::Json => write_json(&page, &mut out)?,
        OutputFormat::Csv => write_browse_csv(&page, &mut out)?,
    }
    Ok(())
}

pub(crate) fn run_compare(args: CompareArgs, data_dir: Option<PathBuf>) -> Result<(), AppError> {
    let service = bootstrap(data_dir)?;
    let diff = service.compare(&args.left, &args.right)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => render_diff(&diff, &mut out)?,
        OutputFormat::Json => write_json(&diff, &mut out)?,
        OutputFormat::Csv => write_diff_csv(&diff, &mut out)?,
    }
    Ok(())
}

pub(crate) fn run_recommend(
    args: RecommendArgs,
    data_dir: Option<PathBuf>,
) -> Result<(), AppError> {
    let service = bootstrap(data_dir)?;
    let format = args.format;
    let answers = walk_wizard(args)?;
    let (answers, results) = service.recommend(answers)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => render_recommendations(&answers, &results, &mut out)?,
        OutputFormat::Json => write_json(
            &serde_json::json!({ "answers": answers, "results": results }),
            &mut out,
        )?,
        OutputFormat::Csv => write_recommendations_csv(&results, &mut out)?,
    }
    Ok(())
}

pub(crate) fn run_system(args: SystemArgs, data_dir: Option<PathBuf>) -> Result<(), AppError> {
    let service = bootstrap(data_dir)?;
    let today = Utc::now().date_naive();
    let profile = service.profile(&args.id, today)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        write_json(&profile, &mut out)?;
    } else {
        render_profile(&profile, &mut out)?;
    }
    Ok(())
}

pub(crate) fn run_stats(args: StatsArgs, data_dir: Option<PathBuf>) -> Result<(), AppError> {
    let service = bootstrap(data_dir)?;
    let stats = service.stats();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        write_json(&stats, &mut out)?;
    } else {
        render_stats(&stats, &mut out)?;
    }
    Ok(())
}

/// Builds the browse view. A third `--select` is dropped with a warning and the
/// first pair stays selected.
pub(crate) fn browse_view(args: BrowseArgs) -> BrowseView {
    let criteria = FilterCriteria {
        search: args.search.unwrap_or_default(),
        framework: args.framework,
        license: args.license,
        maintainer: args.maintainer,
        cms: args.cms,
        ai_required: args.ai_required,
    };
    let direction = if args.desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    let sort = args
        .sort
        .map(|key| SortState::by(key, direction))
        .unwrap_or_default();

    let mut view = BrowseView::default().with_criteria(criteria).with_sort(sort);
    for id in args.select {
        match view.with_checked(SystemId::from(id.as_str())) {
            Ok(next) => view = next,
            Err(SelectionError::Full { rejected }) => {
                warn!(system_id = %rejected, "compare selection is full; ignoring")
            }
        }
    }
    view
}

/// Replays the CLI flags through the wizard so the same step rules apply.
pub(crate) fn walk_wizard(args: RecommendArgs) -> Result<WizardAnswers, AppError> {
    let mut wizard = Wizard::new();
    wizard.choose_framework(FrameworkChoice::from(args.framework.as_str()))?;
    wizard.choose_typescript(args.typescript)?;
    wizard.choose_experience(args.experience)?;
    for priority in args.priority {
        if !wizard.priorities().contains(&priority) {
            wizard.toggle_priority(priority)?;
        }
    }
    wizard.next()?;
    for component in &args.component {
        if !wizard.components().iter().any(|c| c == component.trim()) {
            wizard.toggle_component(component)?;
        }
    }
    Ok(wizard.find()?)
}

fn write_json<T: Serialize, W: Write>(value: &T, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

pub(crate) fn render_browse<W: Write>(page: &BrowsePage, out: &mut W) -> io::Result<()> {
    writeln!(out, "Showing {} of {} systems", page.matched, page.total)?;
    if let Some(key) = page.sort.key {
        writeln!(out, "Sorted by {} ({})", key.field(), page.sort.direction.label())?;
    }
    writeln!(out)?;

    for row in &page.rows {
        let marker = if row.selected { "[x]" } else { "[ ]" };
        writeln!(
            out,
            "{marker} {:<24} {:<20} {:>4} components {:>8} stars  {}",
            row.name,
            row.maintainer,
            row.component_count,
            format_stars(row.github_stars),
            row.frameworks.join(", ")
        )?;
        writeln!(
            out,
            "    {} | {} | {} theming | TypeScript: {} | AI: {}",
            row.license,
            row.accessibility,
            row.theming,
            yes_no(row.typescript),
            row.ai_quality.map(|q| q.title()).unwrap_or("n/a")
        )?;
    }

    if page.can_compare {
        let ids: Vec<&str> = page.selected.iter().map(SystemId::as_str).collect();
        writeln!(out, "\nReady to compare: {}", ids.join(" vs "))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct BrowseCsvRow<'a> {
    id: &'a str,
    name: &'a str,
    maintainer: &'a str,
    license: &'a str,
    frameworks: String,
    component_count: u32,
    github_stars: u32,
    accessibility: &'a str,
    theming: &'a str,
    typescript: bool,
    ai_quality: &'a str,
    cms: &'a str,
    last_updated: &'a str,
}

pub(crate) fn write_browse_csv<W: Write>(page: &BrowsePage, out: W) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in &page.rows {
        writer
            .serialize(BrowseCsvRow {
                id: row.id.as_str(),
                name: &row.name,
                maintainer: &row.maintainer,
                license: &row.license,
                frameworks: row.frameworks.join("; "),
                component_count: row.component_count,
                github_stars: row.github_stars,
                accessibility: &row.accessibility,
                theming: &row.theming,
                typescript: row.typescript,
                ai_quality: row.ai_quality.map(|q| q.label()).unwrap_or(""),
                cms: row.cms.as_deref().unwrap_or(""),
                last_updated: &row.last_updated,
            })
            .map_err(io::Error::from)?;
    }
    writer.flush()
}

pub(crate) fn render_diff<W: Write>(diff: &SystemDiff, out: &mut W) -> io::Result<()> {
    writeln!(out, "{} vs {}", diff.left_name, diff.right_name)?;
    writeln!(out)?;
    for field in &diff.fields {
        let flag = if field.changed { "*" } else { " " };
        writeln!(
            out,
            "{flag} {:<16} {:<28} {}",
            field.label, field.left, field.right
        )?;
    }

    writeln!(out, "\nFrameworks")?;
    for (name, entries) in [
        (&diff.left_name, &diff.left_frameworks),
        (&diff.right_name, &diff.right_frameworks),
    ] {
        let rendered: Vec<String> = entries
            .iter()
            .map(|entry| format!("{}{}", entry.presence.marker().trim(), entry.name))
            .collect();
        writeln!(out, "  {name}: {}", rendered.join(" "))?;
    }

    match &diff.components {
        Some(components) => {
            writeln!(out, "\nComponents")?;
            writeln!(out, "  Common: {}", components.common.join(", "))?;
            writeln!(
                out,
                "  Only in {}: {}",
                diff.left_name,
                components.left_only.join(", ")
            )?;
            writeln!(
                out,
                "  Only in {}: {}",
                diff.right_name,
                components.right_only.join(", ")
            )?;
        }
        None => writeln!(out, "\nComponent data unavailable for one or both systems")?,
    }
    Ok(())
}

pub(crate) fn write_diff_csv<W: Write>(diff: &SystemDiff, out: W) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record([
            "field",
            diff.left_id.as_str(),
            diff.right_id.as_str(),
            "changed",
        ])
        .map_err(io::Error::from)?;
    for field in &diff.fields {
        writer
            .write_record([
                field.label,
                field.left.as_str(),
                field.right.as_str(),
                yes_no(field.changed),
            ])
            .map_err(io::Error::from)?;
    }
    writer.flush()
}

pub(crate) fn render_recommendations<W: Write>(
    answers: &WizardAnswers,
    results: &[Recommendation<'_>],
    out: &mut W,
) -> io::Result<()> {
    let priorities: Vec<&str> = answers.priorities.iter().map(|p| p.label()).collect();
    writeln!(
        out,
        "Framework: {} | TypeScript: {} | Experience: {} | Priorities: {}",
        answers.framework,
        answers.typescript.label(),
        answers.experience.label(),
        priorities.join(", ")
    )?;
    if !answers.components.is_empty() {
        writeln!(out, "Components: {}", answers.components.join(", "))?;
    }
    writeln!(out)?;

    if results.is_empty() {
        writeln!(out, "No systems match these answers.")?;
        return Ok(());
    }

    for (position, result) in results.iter().enumerate() {
        writeln!(
            out,
            "{}. {} ({}% match, score {})",
            position + 1,
            result.system.name,
            result.match_percent,
            result.score
        )?;
        for reason in &result.reasons {
            writeln!(out, "   - {reason}")?;
        }
    }
    Ok(())
}

pub(crate) fn write_recommendations_csv<W: Write>(
    results: &[Recommendation<'_>],
    out: W,
) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(["rank", "id", "name", "score", "match_percent", "reasons"])
        .map_err(io::Error::from)?;
    for (position, result) in results.iter().enumerate() {
        writer
            .write_record([
                (position + 1).to_string(),
                result.system.id.to_string(),
                result.system.name.clone(),
                result.score.to_string(),
                result.match_percent.to_string(),
                result.reasons.join("; "),
            ])
            .map_err(io::Error::from)?;
    }
    writer.flush()
}

fn signed_percent(value: Option<i64>) -> String {
    match value {
        Some(value) if value >= 0 => format!("+{value}%"),
        Some(value) => format!("{value}%"),
        None => "n/a".to_string(),
    }
}

pub(crate) fn render_profile<W: Write>(profile: &SystemProfile, out: &mut W) -> io::Result<()> {
    let system = &profile.system;
    writeln!(out, "{} by {}", system.name, system.maintainer)?;
    writeln!(
        out,
        "License: {} (#{})",
        system.license, profile.license_anchor
    )?;
    writeln!(out, "Frameworks: {}", system.frameworks.join(", "))?;
    writeln!(
        out,
        "Popularity: {} ({} stars, {} vs average)",
        profile.popularity_rank,
        format_thousands(u64::from(system.github_stars)),
        signed_percent(profile.stars_vs_average)
    )?;
    writeln!(
        out,
        "Size: {} ({} components, {} vs average)",
        profile.size_rank,
        system.component_count,
        signed_percent(profile.components_vs_average)
    )?;
    writeln!(out, "AI code generation: {}", profile.ai_quality)?;
    if let Some(days) = profile.days_since_update {
        writeln!(out, "Last updated: {} ({days} days ago)", system.last_updated)?;
    }

    let resources = &profile.resources;
    let available: Vec<&str> = [
        ("Docs", resources.docs),
        ("Storybook", resources.storybook),
        ("Figma", resources.figma),
        ("Penpot", resources.penpot),
        ("Demo", resources.demo),
        ("GitHub", resources.github),
    ]
    .into_iter()
    .filter_map(|(label, present)| present.then_some(label))
    .collect();
    writeln!(out, "Resources: {}", available.join(", "))?;

    match &profile.audit {
        Some(audit) => {
            writeln!(out, "\nComponents ({} total)", audit.total_components)?;
            for category in &audit.categories {
                writeln!(out, "  {} ({})", category.category, category.count)?;
                for line in &category.components {
                    let docs = if line.documented { "documented" } else { "undocumented" };
                    writeln!(
                        out,
                        "    {} [{}, {}]",
                        line.name, line.accessibility, docs
                    )?;
                }
            }
        }
        None => writeln!(out, "\nComponent data unavailable")?,
    }
    Ok(())
}

pub(crate) fn render_stats<W: Write>(stats: &CatalogStats, out: &mut W) -> io::Result<()> {
    let overview = &stats.overview;
    writeln!(out, "Catalog overview")?;
    writeln!(out, "  Systems: {}", overview.total_systems)?;
    writeln!(
        out,
        "  Components: {}",
        format_thousands(overview.total_components)
    )?;
    writeln!(out, "  GitHub stars: {}", format_thousands(overview.total_stars))?;
    writeln!(out, "  Maintainers: {}", overview.unique_maintainers)?;
    writeln!(
        out,
        "  AI supported: {} ({}%)",
        stats.ai_supported.count, stats.ai_supported.percent
    )?;
    writeln!(
        out,
        "  TypeScript: {} ({}%)",
        stats.typescript.count, stats.typescript.percent
    )?;

    writeln!(out, "\nFrameworks")?;
    for entry in &stats.frameworks {
        writeln!(
            out,
            "  {:<16} {:>3} ({}%)",
            entry.label, entry.share.count, entry.share.percent
        )?;
    }

    writeln!(out, "\nTop by stars")?;
    for entry in &stats.top_by_stars {
        writeln!(
            out,
            "  {:>2}. {:<24} {}",
            entry.rank,
            entry.name,
            format_thousands(u64::from(entry.stars))
        )?;
    }

    if !stats.insights.is_empty() {
        writeln!(out, "\nInsights")?;
        for insight in &stats.insights {
            writeln!(out, "  - {insight}")?;
        }
    }
    Ok(())
}
