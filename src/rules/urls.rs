//! Hardcoded site URL rule.

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::{
    core::{CheckContext, extract::urls::UrlMatcher},
    issues::HardcodedUrlIssue,
};

pub fn check_hardcoded_url_issues(ctx: &CheckContext) -> Result<Vec<HardcodedUrlIssue>> {
    if ctx.config.site_hosts.is_empty() {
        anyhow::bail!("No hosts configured in 'siteHosts'");
    }
    let matcher = UrlMatcher::new(&ctx.config.site_hosts)
        .context("Failed to build URL pattern from 'siteHosts'")?;

    Ok(ctx
        .sources()
        .par_iter()
        .flat_map_iter(|file| matcher.scan(file))
        .collect())
}
