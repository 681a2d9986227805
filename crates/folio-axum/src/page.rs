//! Server-rendered home page.
//!
//! Every interactive control is a plain link or GET form whose target is the
//! [`FilterState`] the browser transition would produce, so the page works
//! without client-side script.

use std::fmt::Write;

use folio_core::{Browser, BrowserAction, FilterState, RepoCard, TabView};

use crate::dto::BrowseQuery;

/// Static page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Title shown in the nav bar and `<title>`.
    pub title: String,
    /// "About Me" paragraph.
    pub bio: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Portfolio".to_string(),
            bio: "Software engineer building tools for the web, mobile and the cloud.".to_string(),
        }
    }
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Link to the home page in the given state.
pub fn state_href(state: &FilterState) -> String {
    format!("/{}", BrowseQuery::from_state(state).to_query_string())
}

/// Render the full home page.
pub fn render_home(site: &SiteConfig, browser: &Browser, current_year: i32) -> String {
    let title = escape(&site.title);
    let mut html = String::with_capacity(8 * 1024);

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n</head>\n\
         <body class=\"min-h-screen bg-white text-gray-900\">\n\
         <nav class=\"p-4 border-b\">{title}</nav>\n\
         <div class=\"max-w-4xl mx-auto p-4\">\n<main class=\"p-2 sm:p-4\">\n\
         <h1 class=\"text-3xl font-bold\">About Me</h1>\n\
         <p class=\"mt-2 text-gray-700 whitespace-pre-line\">{bio}</p>\n\
         <h2 class=\"text-2xl font-semibold mt-8\">GitHub Projects</h2>\n",
        bio = escape(&site.bio),
    );

    render_browser(&mut html, browser);

    let _ = write!(
        html,
        "</main>\n</div>\n\
         <footer class=\"p-4 border-t text-center\">&copy; {current_year}</footer>\n\
         </body>\n</html>\n"
    );
    html
}

/// Render the browser section: tabs, filters, cards and pagination.
pub fn render_browser(html: &mut String, browser: &Browser) {
    let view = browser.view();

    html.push_str("<section id=\"projects\">\n");

    if !view.tabs.is_empty() {
        html.push_str(
            "<div class=\"mt-2 mb-4 flex items-center gap-2 flex-wrap border-b border-gray-200\">\n",
        );
        for tab in &view.tabs {
            render_tab(html, browser, tab);
        }
        html.push_str("</div>\n");
    }

    render_filters(html, browser, view.languages, view.selected_language);

    html.push_str("<div class=\"mt-4 grid grid-cols-1 sm:grid-cols-2 gap-4\">\n");
    if view.is_empty() {
        html.push_str("<p class=\"text-gray-500 col-span-2\">No projects found.</p>\n");
    } else {
        for record in &view.items {
            render_card(html, &RepoCard::from(*record));
        }
    }
    html.push_str("</div>\n");

    let pagination = view.pagination;
    if pagination.is_visible() {
        html.push_str("<div class=\"mt-6 mb-4 flex items-center justify-center gap-4 flex-wrap\">\n");
        render_page_link(
            html,
            "Previous",
            pagination
                .has_previous()
                .then(|| browser.preview(BrowserAction::PreviousPage)),
        );
        let _ = writeln!(
            html,
            "<span class=\"text-sm text-gray-600\">Page {} of {}</span>",
            pagination.page, pagination.total_pages
        );
        render_page_link(
            html,
            "Next",
            pagination
                .has_next()
                .then(|| browser.preview(BrowserAction::NextPage)),
        );
        html.push_str("</div>\n");
    }

    html.push_str("</section>\n");
}

fn render_tab(html: &mut String, browser: &Browser, tab: &TabView) {
    let label = format!("{} ({})", escape(&tab.label), tab.count);
    if !tab.enabled {
        let _ = writeln!(
            html,
            "<span class=\"px-4 py-2 border-b-2 border-transparent text-gray-400 cursor-not-allowed\" aria-disabled=\"true\">{label}</span>"
        );
        return;
    }

    let class = if tab.selected {
        "border-blue-500 text-blue-600"
    } else {
        "border-transparent text-gray-600 hover:text-gray-900 hover:border-gray-300"
    };
    let href = state_href(&browser.preview(BrowserAction::SelectTab(tab.key)));
    let current = if tab.selected { " aria-current=\"page\"" } else { "" };
    let _ = writeln!(
        html,
        "<a href=\"{href}\" class=\"px-4 py-2 font-medium border-b-2 {class}\"{current}>{label}</a>",
        href = escape(&href),
    );
}

fn render_filters(
    html: &mut String,
    browser: &Browser,
    languages: &[String],
    selected_language: Option<&str>,
) {
    let state = browser.state();

    html.push_str("<form method=\"get\" action=\"/\" class=\"flex gap-2 flex-wrap\">\n");
    if let Some(tab) = state.tab {
        let _ = writeln!(
            html,
            "<input type=\"hidden\" name=\"tab\" value=\"{}\">",
            escape(&tab.to_string())
        );
    }
    if let Some(language) = selected_language {
        let _ = writeln!(
            html,
            "<input type=\"hidden\" name=\"language\" value=\"{}\">",
            escape(language)
        );
    }
    let _ = writeln!(
        html,
        "<input type=\"search\" name=\"q\" value=\"{}\" placeholder=\"Search projects\" class=\"border rounded px-2 py-1\">",
        escape(&state.query)
    );
    html.push_str("<button type=\"submit\" class=\"px-3 py-1 rounded bg-blue-500 text-white\">Search</button>\n");
    html.push_str("</form>\n");

    if !languages.is_empty() {
        html.push_str("<div class=\"mt-2 flex gap-2 flex-wrap\">\n");
        for language in languages {
            let selected = selected_language == Some(language.as_str());
            let href = state_href(&browser.preview(BrowserAction::ToggleLanguage(language.clone())));
            let class = if selected {
                "bg-blue-500 text-white"
            } else {
                "bg-gray-100 text-gray-700"
            };
            let _ = writeln!(
                html,
                "<a href=\"{}\" class=\"px-2 py-1 rounded-full text-xs {class}\" aria-pressed=\"{selected}\">{}</a>",
                escape(&href),
                escape(language),
            );
        }
        html.push_str("</div>\n");
    }

    if state.has_filters() {
        let href = state_href(&browser.preview(BrowserAction::ClearFilters));
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"mt-2 inline-block text-sm text-blue-600\">Clear filters</a>",
            escape(&href)
        );
    }
}

fn render_card(html: &mut String, card: &RepoCard) {
    let _ = write!(
        html,
        "<div class=\"border rounded-lg p-4 shadow hover:shadow-md hover:bg-gray-50 bg-white\">\n\
         <a href=\"{url}\" target=\"_blank\" rel=\"noreferrer\" class=\"text-blue-600 font-medium hover:underline\">{name}</a>\n\
         <p class=\"text-sm text-gray-600 mt-2\">{description}</p>\n\
         <div class=\"flex items-center gap-2 mt-3 flex-wrap\">\
         <span class=\"text-xs font-medium text-gray-500\">Language:</span>\
         <span class=\"inline-flex items-center px-2 py-1 rounded-full text-xs font-medium text-white {badge}\">{language}</span>\
         </div>\n",
        url = escape(&card.url),
        name = escape(&card.name),
        description = escape(&card.description),
        badge = card.badge_class,
        language = escape(&card.language),
    );
    if let Some(created) = &card.created_label {
        let _ = writeln!(
            html,
            "<p class=\"text-xs text-gray-500 mt-2 italic\">Created: {}</p>",
            escape(created)
        );
    }
    html.push_str("</div>\n");
}

fn render_page_link(html: &mut String, label: &str, target: Option<FilterState>) {
    match target {
        Some(state) => {
            let _ = writeln!(
                html,
                "<a href=\"{}\" class=\"px-4 py-2 rounded bg-blue-500 text-white hover:bg-blue-600\">{label}</a>",
                escape(&state_href(&state))
            );
        }
        None => {
            let _ = writeln!(
                html,
                "<span class=\"px-4 py-2 rounded bg-gray-200 text-gray-400 cursor-not-allowed\" aria-disabled=\"true\">{label}</span>"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{RepositoryRecord, TabKey};

    fn dated(id: u64, name: &str, year: i32) -> RepositoryRecord {
        RepositoryRecord::new(id, name, format!("https://github.com/octocat/{name}"))
            .with_language(if id % 2 == 0 { "Rust" } else { "Go" })
            .with_created_at(format!("{year}-06-15T12:00:00Z"))
    }

    fn browser(count: u64) -> Browser {
        Browser::from_records((0..count).map(|i| dated(i, &format!("repo-{i}"), 2024)).collect::<Vec<_>>())
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_home_page_chrome() {
        let site = SiteConfig {
            title: "Octo <Folio>".to_string(),
            bio: "Builds things.".to_string(),
        };
        let html = render_home(&site, &browser(2), 2026);

        assert!(html.contains("<title>Octo &lt;Folio&gt;</title>"));
        assert!(html.contains("About Me"));
        assert!(html.contains("Builds things."));
        assert!(html.contains("GitHub Projects"));
        assert!(html.contains("&copy; 2026"));
    }

    #[test]
    fn test_tab_strip_labels() {
        let records = vec![dated(1, "a", 2024), dated(2, "b", 2023), dated(3, "c", 2020)];
        let mut html = String::new();
        render_browser(&mut html, &Browser::from_records(records));

        assert!(html.contains("2024 (1)"));
        assert!(html.contains("2023 (1)"));
        assert!(html.contains("Older (1)"));
        assert!(html.contains("href=\"/?tab=older\""));
    }

    #[test]
    fn test_empty_state() {
        let mut html = String::new();
        render_browser(&mut html, &Browser::default());
        assert!(html.contains("No projects found."));
        assert!(!html.contains("Page 1 of"));
    }

    #[test]
    fn test_pagination_hidden_at_eight() {
        let mut html = String::new();
        render_browser(&mut html, &browser(8));
        assert!(!html.contains("Page 1 of 1"));
        assert_eq!(html.matches("Created: ").count(), 8);
    }

    #[test]
    fn test_pagination_links() {
        let mut html = String::new();
        render_browser(&mut html, &browser(9));
        assert!(html.contains("Page 1 of 2"));
        assert!(html.contains("href=\"/?tab=2024&amp;page=2\""));
        assert!(html.contains("aria-disabled=\"true\">Previous</span>"));
    }

    #[test]
    fn test_language_links_toggle() {
        let catalog = Browser::from_records(vec![dated(1, "a", 2024), dated(2, "b", 2024)]);
        let state = FilterState {
            tab: Some(TabKey::Year(2024)),
            language: Some("Go".to_string()),
            ..FilterState::default()
        };
        let browser = Browser::restore(catalog.catalog().clone(), state);

        let mut html = String::new();
        render_browser(&mut html, &browser);

        // The selected language links back to the unfiltered state.
        assert!(html.contains("<a href=\"/?tab=2024\" class=\"px-2 py-1 rounded-full text-xs bg-blue-500 text-white\" aria-pressed=\"true\">Go</a>"));
        assert!(html.contains("href=\"/?tab=2024&amp;language=Rust\""));
        assert!(html.contains("Clear filters"));
    }

    #[test]
    fn test_card_fallbacks() {
        let record = RepositoryRecord::new(1, "bare", "https://github.com/octocat/bare");
        let mut html = String::new();
        render_card(&mut html, &RepoCard::from(&record));

        assert!(html.contains(
            "<a href=\"https://github.com/octocat/bare\" target=\"_blank\" rel=\"noreferrer\""
        ));
        assert!(html.contains("No description available"));
        assert!(html.contains(">Unknown</span>"));
        assert!(html.contains("bg-gray-400"));
        assert!(!html.contains("Created:"));
    }
}
