//! Non-interactive page listing.

use anyhow::{Context, Result};
use comfy_table::{ContentArrangement, Table};
use folio_core::config::Config;
use folio_core::content::{FocusArea, Video};
use folio_core::format::{format_duration, format_published_date, format_view_count, truncate_text};
use folio_core::logging::{self, LogTarget};
use folio_core::pagination;
use folio_core::sections::{Linkable, Section};
use folio_core::services::{ContentServices, ContentSource, LoadedContent};

const TABLE_WIDTH: u16 = 100;
const DETAIL_CHARS: usize = 80;

/// One table row: title, detail, link.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    title: String,
    detail: String,
    link: String,
}

pub async fn run(
    config: &Config,
    section: Section,
    per_page: Option<usize>,
    page: usize,
) -> Result<()> {
    let _guard = logging::init(&LogTarget::Stderr)?;

    let services = ContentServices::from_config(config).context("build loaders")?;
    let content = services.load(ContentSource::for_section(section)).await;
    let rows = rows(&content);

    let per_page = per_page.unwrap_or_else(|| section.default_config().items_per_page);
    print!("{}", render_page(section, &rows, per_page, page)?);
    Ok(())
}

/// Table and page-marks line for 1-based `page`.
fn render_page(section: Section, rows: &[Row], per_page: usize, page: usize) -> Result<String> {
    if per_page == 0 {
        anyhow::bail!("--per-page must be at least 1");
    }
    if rows.is_empty() {
        return Ok(format!("No {} to show.\n", section.title().to_lowercase()));
    }

    let ranges = pagination::page_ranges(rows.len(), per_page);
    let Some(range) = page.checked_sub(1).and_then(|index| ranges.get(index)) else {
        anyhow::bail!("Page {page} is out of range (1..={})", ranges.len());
    };

    let mut table = Table::new();
    table.set_width(TABLE_WIDTH);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Title", "Details", "Link"]);
    for (index, row) in rows[range.clone()].iter().enumerate() {
        table.add_row(vec![
            (range.start + index + 1).to_string(),
            row.title.clone(),
            row.detail.clone(),
            row.link.clone(),
        ]);
    }

    let marks: Vec<&str> = pagination::page_marks(rows.len(), per_page)
        .into_iter()
        .map(|mark| if mark + 1 == page { "●" } else { "○" })
        .collect();

    Ok(format!(
        "{}\n{table}\nPage {page}/{}  {}\n",
        section.title(),
        ranges.len(),
        marks.join(" ")
    ))
}

fn rows(content: &LoadedContent) -> Vec<Row> {
    match content {
        LoadedContent::Expertise(areas) | LoadedContent::Research(areas) => {
            areas.iter().map(area_row).collect()
        }
        LoadedContent::Recommendations(recommendations) => recommendations
            .iter()
            .map(|rec| Row {
                title: rec.name.clone(),
                detail: [rec.role.as_str(), rec.company.as_str()]
                    .into_iter()
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join(" · "),
                link: link_of(rec),
            })
            .collect(),
        LoadedContent::Projects(projects) => projects
            .iter()
            .map(|project| {
                let mut detail = project.description.clone().unwrap_or_default();
                if let Some(language) = &project.language {
                    detail = format!("{detail} [{language} ★{}]", project.stargazers_count);
                }
                Row {
                    title: project.name.clone(),
                    detail: truncate_text(detail.trim(), DETAIL_CHARS),
                    link: link_of(project),
                }
            })
            .collect(),
        LoadedContent::Publications(publications) => publications
            .iter()
            .map(|publication| Row {
                title: publication.title.clone(),
                detail: format_published_date(&publication.published_at),
                link: link_of(publication),
            })
            .collect(),
        LoadedContent::Videos(videos) | LoadedContent::Shorts(videos) => {
            videos.iter().map(video_row).collect()
        }
        LoadedContent::PersonalInfo(_) | LoadedContent::Social(_) => Vec::new(),
    }
}

fn area_row(area: &FocusArea) -> Row {
    Row {
        title: area.title.clone(),
        detail: truncate_text(&area.description, DETAIL_CHARS),
        link: String::new(),
    }
}

fn video_row(video: &Video) -> Row {
    Row {
        title: video.title.clone(),
        detail: format!(
            "{} · {} views",
            format_duration(video.duration_secs),
            format_view_count(&video.view_count)
        ),
        link: link_of(video),
    }
}

fn link_of(item: &impl Linkable) -> String {
    item.link().unwrap_or_default().to_string()
}
