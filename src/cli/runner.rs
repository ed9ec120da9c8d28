//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::PaginatorConfig;
use crate::error::{Error, Result, ResultExt};
use crate::pagination::{NavLink, Pageable, Paginator};
use crate::template::UrlTemplate;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use std::fs;
use std::io::Read;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Page { input } => {
                let listing = read_listing(input)?;
                self.render(&listing, false)
            }
            Commands::Links { input } => {
                let listing = read_listing(input)?;
                self.render(&listing, true)
            }
            Commands::Count { total } => {
                let numbers = 1..total.saturating_add(1);
                self.render(&numbers, false)
            }
            Commands::Validate => self.validate(),
        }
    }

    /// Load the config file, or defaults when none was given
    fn load_config(&self) -> Result<PaginatorConfig> {
        let mut config = match &self.cli.config {
            Some(path) => PaginatorConfig::load(path)?,
            None => PaginatorConfig::default(),
        };
        if let Some(url) = &self.cli.url {
            config.url = UrlTemplate::new(url.as_str());
        }
        Ok(config)
    }

    /// Build a paginator and apply the command-line overrides
    fn paginator<'a, P: Pageable + ?Sized>(&self, pageable: &'a P) -> Result<Paginator<'a, P>> {
        let config = self.load_config()?;
        let mut pager = Paginator::from_config(pageable, &config)?;

        // Overrides go through the lenient setters; bad values are ignored
        if let Some(page_size) = &self.cli.page_size {
            pager.set_page_size(page_size.as_str())?;
        }
        if let Some(window) = &self.cli.window {
            pager.set_window(window.as_str())?;
        }
        if let Some(page) = &self.cli.page {
            pager.set_page(page.as_str())?;
        }
        Ok(pager)
    }

    fn render<P>(&self, pageable: &P, links_only: bool) -> Result<String>
    where
        P: Pageable + ?Sized,
        P::Item: Serialize + Display,
    {
        let pager = self.paginator(pageable)?;
        match (self.cli.format, links_only) {
            (OutputFormat::Json, false) => Ok(serde_json::to_string_pretty(&pager.view())?),
            (OutputFormat::Json, true) => Ok(serde_json::to_string_pretty(&pager.links())?),
            (OutputFormat::Pretty, links_only) => Ok(pretty(&pager, links_only)),
        }
    }

    /// Validate the config file
    fn validate(&self) -> Result<String> {
        let path = self
            .cli
            .config
            .as_ref()
            .ok_or_else(|| Error::config("Config file not specified (use -c flag)"))?;
        let config = PaginatorConfig::load(path)?;
        Ok(format!(
            "Config '{}' is valid: url={}, page={}, page_size={}, window={}",
            path.display(),
            config.url,
            config.page,
            config.page_size,
            config.window
        ))
    }
}

/// Read a JSON (or, by extension, YAML) document from a file or stdin
fn read_listing(input: &Path) -> Result<Value> {
    let from_stdin = input.as_os_str() == "-";
    let content = if from_stdin {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("Failed to read input '{}'", input.display()))?
    };

    let is_yaml = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    let listing = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(listing)
}

/// Human-readable rendering
fn pretty<P>(pager: &Paginator<'_, P>, links_only: bool) -> String
where
    P: Pageable + ?Sized,
    P::Item: Display,
{
    let mut lines = vec![format!(
        "Page {} of {} ({} items, {} per page)",
        pager.page(),
        pager.total_pages(),
        pager.total_items(),
        pager.page_size()
    )];

    if !links_only {
        lines.extend(pager.items().iter().map(|item| format!("  {item}")));
    }

    let numbers: Vec<String> = pager
        .pages()
        .iter()
        .map(|link| {
            if link.current {
                format!("[{}]", link.number)
            } else {
                link.number.to_string()
            }
        })
        .collect();
    lines.push(format!("Pages: {}", numbers.join(" ")).trim_end().to_string());

    for (label, link) in [
        ("First", pager.first()),
        ("Previous", pager.previous()),
        ("Next", pager.next()),
        ("Last", pager.last()),
    ] {
        if let Some(NavLink { url }) = link {
            lines.push(format!("{label}: {url}"));
        }
    }

    lines.join("\n")
}
