//! Navigation and search command implementations

use colored::Colorize;
use serde::Serialize;

use crate::cli::{CommandContext, GlobalOptions, NavCommands, OutputFormat};
use crate::error::Result;
use crate::models::{ContentRow, SectionRow};
use crate::navigation::{NavigationLinks, NavigationService, Section};
use crate::output::{self, json, table};

/// Run a `nav` subcommand
pub fn run(opts: &GlobalOptions, command: NavCommands) -> Result<()> {
    let ctx = CommandContext::new(opts, None)?;
    let nav = ctx.app.navigation();

    match command {
        NavCommands::Section { path } => section(nav, &path, ctx.format),
        NavCommands::Breadcrumbs { path } => breadcrumbs(nav, &path, ctx.format),
        NavCommands::Links { id } => links(nav, &id, ctx.format),
        NavCommands::Related { content_id, limit } => related(nav, &content_id, limit, ctx.format),
        NavCommands::Recommend { viewed, limit } => recommend(nav, &viewed, limit, ctx.format),
    }
}

/// Run the `search` command
pub fn search(opts: &GlobalOptions, query: &str) -> Result<()> {
    let ctx = CommandContext::new(opts, None)?;
    let results = ctx.app.navigation().search(query);

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&results)?),
        OutputFormat::Table => {
            let sections: Vec<SectionRow> = results
                .sections
                .iter()
                .map(|s| SectionRow::new("section", s))
                .collect();
            let content: Vec<ContentRow> =
                results.content.iter().map(|c| ContentRow::plain(c)).collect();
            println!("{}", table::format_table(&sections));
            println!("{}", table::format_table(&content));
        }
        OutputFormat::Pretty => {
            if results.is_empty() {
                println!("No matches for \"{}\"", query.trim());
                return Ok(());
            }
            if !results.sections.is_empty() {
                println!("{}", "Sections".bold());
                for s in &results.sections {
                    println!("  {:<40} {}", s.title, s.path.cyan());
                }
            }
            if !results.content.is_empty() {
                println!("{}", "Content".bold());
                for c in &results.content {
                    println!("  {:<40} {} · {}", c.id, c.content_type, c.category.dimmed());
                }
            }
        }
    }
    Ok(())
}

/// The section at `path`, followed by its links.
///
/// Visiting a section is a navigation, so the path is recorded in the
/// session history even when nothing lives there.
fn section(nav: &NavigationService, path: &str, format: OutputFormat) -> Result<()> {
    let Some(found) = nav.navigate_to(path) else {
        return not_found("section at", path, format);
    };
    let links = nav.navigation_links(&found.id);

    match format {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct SectionView<'a> {
                section: &'a Section,
                links: NavigationLinks<'a>,
            }
            println!(
                "{}",
                json::format_json(&SectionView {
                    section: found,
                    links,
                })?
            );
        }
        OutputFormat::Table => {
            println!(
                "{}",
                table::format_record(&[
                    ("id", found.id.clone()),
                    ("title", found.title.clone()),
                    ("path", found.path.clone()),
                ])
            );
            println!("{}", table::format_table(&link_rows(&links)));
        }
        OutputFormat::Pretty => {
            println!("{} {}", found.title.bold(), found.path.dimmed());
            print_pretty_links(&links);
        }
    }
    Ok(())
}

fn breadcrumbs(nav: &NavigationService, path: &str, format: OutputFormat) -> Result<()> {
    let trail = nav.breadcrumbs(path);
    match format {
        OutputFormat::Pretty => {
            let titles: Vec<String> = trail.iter().map(|c| c.title.clone()).collect();
            println!("{}", titles.join(" › "));
            Ok(())
        }
        _ => output::print_rows(&trail, &SectionRow::trail(&trail), format),
    }
}

fn links(nav: &NavigationService, id: &str, format: OutputFormat) -> Result<()> {
    let Some(section) = nav.section_by_id(id) else {
        return not_found("section", id, format);
    };
    let links = nav.navigation_links(id);
    match format {
        OutputFormat::Pretty => {
            println!("{}", section.title.bold());
            print_pretty_links(&links);
            Ok(())
        }
        _ => output::print_rows(&links, &link_rows(&links), format),
    }
}

fn related(
    nav: &NavigationService,
    content_id: &str,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    if nav.catalog().get(content_id).is_none() {
        return not_found("content item", content_id, format);
    }
    let related = nav.related_content(content_id, limit);
    match format {
        OutputFormat::Pretty => {
            println!("{} {}", "Related to".bold(), content_id.cyan());
            for entry in &related {
                println!(
                    "  {:.2}  {} {}",
                    entry.relevance_score,
                    entry.item.id,
                    format!("({})", entry.item.content_type).dimmed()
                );
            }
            Ok(())
        }
        _ => {
            let rows: Vec<ContentRow> = related.iter().map(ContentRow::related).collect();
            output::print_rows(&related, &rows, format)
        }
    }
}

/// Each `viewed` id is recorded before recommending; unknown ids are skipped
/// with a warning.
fn recommend(
    nav: &NavigationService,
    viewed: &[String],
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    for id in viewed {
        match nav.catalog().get(id) {
            Some(item) => nav.record_view(&item.id, item.content_type, &item.category),
            None => log::warn!("Ignoring unknown content id: {}", id),
        }
    }

    let picks = nav.recommendations(limit);
    match format {
        OutputFormat::Pretty => {
            let heading = if nav.view_history().is_empty() {
                "Popular content"
            } else {
                "Recommended for you"
            };
            println!("{}", heading.bold());
            for pick in &picks {
                match pick.popularity {
                    Some(popularity) => println!(
                        "  {:<36} {} {}",
                        pick.item.id,
                        pick.item.content_type,
                        format!("★{}", popularity).yellow()
                    ),
                    None => println!(
                        "  {:<36} {} {}",
                        pick.item.id,
                        pick.item.content_type,
                        pick.item.category.dimmed()
                    ),
                }
            }
            Ok(())
        }
        _ => {
            let rows: Vec<ContentRow> = picks.iter().map(ContentRow::recommended).collect();
            output::print_rows(&picks, &rows, format)
        }
    }
}

fn link_rows(links: &NavigationLinks<'_>) -> Vec<SectionRow> {
    let mut rows = Vec::new();
    if let Some(parent) = links.parent {
        rows.push(SectionRow::new("parent", parent));
    }
    rows.extend(links.siblings.iter().map(|s| SectionRow::new("sibling", s)));
    rows.extend(links.children.iter().map(|s| SectionRow::new("child", s)));
    rows.extend(links.related.iter().map(|s| SectionRow::new("related", s)));
    rows
}

fn print_pretty_links(links: &NavigationLinks<'_>) {
    if let Some(parent) = links.parent {
        println!("  {:<9} {}", "parent".dimmed(), parent.title);
    }
    for (label, group) in [
        ("siblings", &links.siblings),
        ("children", &links.children),
        ("related", &links.related),
    ] {
        if group.is_empty() {
            continue;
        }
        let titles: Vec<&str> = group.iter().map(|s| s.title.as_str()).collect();
        println!("  {:<9} {}", label.dimmed(), titles.join(", "));
    }
}

/// Unknown lookups are reported, not treated as failures
fn not_found(what: &str, name: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", json::format_json(&serde_json::Value::Null)?),
        _ => println!("No {} \"{}\"", what, name),
    }
    Ok(())
}
