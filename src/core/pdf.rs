//! Printable HTML documents for downloadable resources.
//!
//! Input is a JSON list of resources with per-locale text:
//!
//! ```json
//! [{
//!   "id": "pain-relief-card",
//!   "title": { "zh": "疼痛缓解卡片", "en": "Pain Relief Card" },
//!   "description": { "zh": "…", "en": "…" },
//!   "category": "immediate",
//!   "sections": [{ "heading": { "en": "Steps" }, "items": { "en": ["Breathe"] } }]
//! }]
//! ```

use std::{collections::BTreeMap, fmt::Write, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::utils::escape_html;

/// Text keyed by locale code.
pub type Localized = BTreeMap<String, String>;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfResource {
    pub id: String,
    pub title: Localized,
    #[serde(default)]
    pub description: Localized,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sections: Vec<PdfSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PdfSection {
    #[serde(default)]
    pub heading: Localized,
    #[serde(default)]
    pub items: BTreeMap<String, Vec<String>>,
}

impl PdfResource {
    /// Locales the resource has a title for.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.title.keys().map(String::as_str)
    }
}

/// Site identity printed in the header and footer.
pub struct SiteInfo<'a> {
    pub name: &'a str,
    pub url: &'a str,
}

/// Read and validate a resources file.
pub fn load_resources(path: &Path) -> Result<Vec<PdfResource>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read resources file: {}", path.display()))?;
    let resources: Vec<PdfResource> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse resources file: {}", path.display()))?;

    for resource in &resources {
        let id = resource.id.as_str();
        if id.is_empty()
            || id.contains(['/', '\\'])
            || id.starts_with('.')
        {
            bail!("Invalid resource id \"{}\" in {}", id, path.display());
        }
        if resource.title.is_empty() {
            bail!("Resource \"{}\" has no title", id);
        }
    }
    Ok(resources)
}

/// `<id>.html` for the base locale, `<id>-<locale>.html` otherwise.
pub fn output_file_name(id: &str, locale: &str, base_locale: &str) -> String {
    if locale == base_locale {
        format!("{}.html", id)
    } else {
        format!("{}-{}.html", id, locale)
    }
}

struct Labels {
    source: &'static str,
    more_info: &'static str,
    disclaimer: &'static str,
}

fn labels(locale: &str) -> Labels {
    if locale.starts_with("zh") {
        Labels {
            source: "来源：",
            more_info: "如需更多信息，请访问：",
            disclaimer: "本资源仅供教育参考，不能替代专业医疗建议",
        }
    } else {
        Labels {
            source: "Source: ",
            more_info: "For more information, visit:",
            disclaimer: "This resource is for educational purposes only and cannot replace professional medical advice",
        }
    }
}

const STYLE: &str = r#"        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            line-height: 1.8;
            color: #333;
            background-color: #ffffff;
            padding: 40px;
            max-width: 1200px;
            margin: 0 auto;
        }
        .header { border-bottom: 3px solid #9333ea; padding-bottom: 30px; margin-bottom: 40px; text-align: center; }
        .title { color: #9333ea; font-size: 32px; font-weight: 700; margin-bottom: 16px; line-height: 1.2; }
        .subtitle { color: #666; font-size: 18px; margin-bottom: 20px; }
        .source { color: #888; font-size: 14px; margin-top: 10px; }
        .content { max-width: 800px; margin: 0 auto; }
        .content-section { margin-bottom: 30px; }
        .section-heading { font-size: 20px; font-weight: 600; color: #9333ea; margin-bottom: 16px; }
        .content-item { margin-bottom: 12px; font-size: 16px; line-height: 1.6; }
        .footer { margin-top: 60px; padding-top: 30px; border-top: 2px solid #f0f0f0; text-align: center; color: #666; font-size: 14px; }
        .footer a { color: #9333ea; text-decoration: none; }
        @media (max-width: 768px) {
            body { padding: 20px; font-size: 14px; }
            .title { font-size: 24px; }
            .subtitle { font-size: 16px; }
        }
        @page { size: A4; margin: 20mm; }
        @media print {
            body { margin: 0; padding: 0; color: #000; max-width: none; }
            .header { border-bottom: 2px solid #000; }
            .title, .section-heading, .footer a { color: #000; }
            .content-section { page-break-inside: avoid; }
        }
"#;

/// Render one resource as a standalone HTML document in `locale`.
///
/// Every piece of resource text is HTML-escaped.
pub fn render_html(resource: &PdfResource, locale: &str, site: &SiteInfo<'_>) -> String {
    let text = |map: &Localized| map.get(locale).map(|s| escape_html(s)).unwrap_or_default();
    let labels = labels(locale);
    let title = text(&resource.title);
    let description = text(&resource.description);
    let site_name = escape_html(site.name);
    let site_url = escape_html(site.url);
    let site_host = escape_html(
        site.url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/'),
    );

    let mut html = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html lang=\"{}\">", escape_html(locale));
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "    <meta charset=\"UTF-8\">");
    let _ = writeln!(
        html,
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    );
    let _ = writeln!(html, "    <title>{} - {}</title>", title, site_name);
    let _ = writeln!(html, "    <style>\n{}    </style>", STYLE);
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(html, "    <div class=\"header\">");
    let _ = writeln!(html, "        <h1 class=\"title\">{}</h1>", title);
    if !description.is_empty() {
        let _ = writeln!(html, "        <p class=\"subtitle\">{}</p>", description);
    }
    let _ = writeln!(
        html,
        "        <p class=\"source\">{}{}</p>",
        labels.source, site_name
    );
    let _ = writeln!(html, "    </div>");
    let _ = writeln!(html, "    <div class=\"content\">");

    for section in &resource.sections {
        let items = section.items.get(locale).map(Vec::as_slice).unwrap_or_default();
        let heading = text(&section.heading);
        if items.is_empty() && heading.is_empty() {
            continue;
        }
        let _ = writeln!(html, "        <div class=\"content-section\">");
        if !heading.is_empty() {
            let _ = writeln!(html, "            <h2 class=\"section-heading\">{}</h2>", heading);
        }
        for item in items {
            let _ = writeln!(
                html,
                "            <div class=\"content-item\">{}</div>",
                escape_html(item)
            );
        }
        let _ = writeln!(html, "        </div>");
    }

    let _ = writeln!(html, "    </div>");
    let _ = writeln!(html, "    <div class=\"footer\">");
    let _ = writeln!(
        html,
        "        <p>{} <a href=\"{}\" target=\"_blank\">{}</a></p>",
        labels.more_info, site_url, site_host
    );
    let _ = writeln!(html, "        <p>{}</p>", labels.disclaimer);
    let _ = writeln!(html, "    </div>");
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");
    html
}
