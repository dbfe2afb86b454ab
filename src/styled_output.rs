//! Styled output formatting for contactfinder using anstyle.
//!
//! This module provides colored terminal output for contact discovery
//! results. It uses the anstyle crate for cross-platform color support and
//! degrades to plain text when stdout is not a terminal or NO_COLOR is set.

use anstyle::{AnsiColor, Color, Style};
use std::fmt::Write;
use std::io::{self, Write as IoWrite};

use crate::output::{ContactOrigin, ScanResults};

/// Style definitions for different UI elements
pub struct Styles {
    pub header: Style,
    pub subheader: Style,
    pub success: Style,
    pub warning: Style,
    #[allow(dead_code)]
    pub error: Style,
    pub info: Style,
    pub muted: Style,
    pub bold: Style,
    pub email: Style,
    pub url: Style,
    pub company: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Blue))),
            subheader: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
            success: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
            warning: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
            error: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
            info: Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))),
            muted: Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))),
            bold: Style::new().bold(),
            email: Style::new()
                .fg_color(Some(Color::Ansi(AnsiColor::Green)))
                .underline(),
            url: Style::new()
                .fg_color(Some(Color::Ansi(AnsiColor::Blue)))
                .underline(),
            company: Style::new()
                .italic()
                .fg_color(Some(Color::Ansi(AnsiColor::BrightBlue))),
        }
    }
}

/// Styled output formatter for contact discovery results
pub struct StyledFormatter {
    styles: Styles,
    use_colors: bool,
}

impl StyledFormatter {
    /// Create a new styled formatter
    pub fn new() -> Self {
        Self {
            styles: Styles::default(),
            use_colors: Self::should_use_colors(),
        }
    }

    /// Create a formatter with custom styles
    #[allow(dead_code)]
    pub fn with_styles(styles: Styles) -> Self {
        Self {
            styles,
            use_colors: Self::should_use_colors(),
        }
    }

    /// Create a formatter without colors (for non-interactive use)
    pub fn without_colors() -> Self {
        Self {
            styles: Styles::default(),
            use_colors: false,
        }
    }

    /// Determine if colors should be used based on environment
    fn should_use_colors() -> bool {
        // Check if we're in a terminal and colors are supported
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }

    /// Apply style to text if colors are enabled
    fn styled(&self, text: &str, style: &Style) -> String {
        if self.use_colors {
            format!("{}{}{}", style.render(), text, style.render_reset())
        } else {
            text.to_string()
        }
    }

    /// Format contact discovery results for the terminal
    pub fn format_results(
        &self,
        results: &ScanResults,
    ) -> Result<String, Box<dyn std::error::Error>> {
        let mut output = String::new();

        self.write_header(&mut output, results)?;
        self.write_contacts(&mut output, results)?;
        self.write_footer(&mut output, results)?;

        Ok(output)
    }

    /// Write the main header with the scanned site information
    fn write_header(
        &self,
        output: &mut String,
        results: &ScanResults,
    ) -> Result<(), std::fmt::Error> {
        writeln!(output)?;
        writeln!(
            output,
            "{}",
            self.styled(
                "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━",
                &self.styles.muted
            )
        )?;

        let title = match &results.company_name {
            Some(name) => format!("📇 Contact Addresses for {}", name),
            None => format!("📇 Contact Addresses for {}", results.company_url),
        };

        writeln!(output, "  {}", self.styled(&title, &self.styles.header))?;

        if results.company_name.is_some() {
            writeln!(
                output,
                "  {} Website: {}",
                self.styled("🌐", &self.styles.info),
                self.styled(&results.company_url, &self.styles.url)
            )?;
        }

        writeln!(
            output,
            "{}",
            self.styled(
                "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━",
                &self.styles.muted
            )
        )?;

        Ok(())
    }

    /// Write the discovered addresses section
    fn write_contacts(
        &self,
        output: &mut String,
        results: &ScanResults,
    ) -> Result<(), std::fmt::Error> {
        if results.contacts.is_empty() {
            writeln!(output)?;
            writeln!(
                output,
                "  {} {}",
                self.styled("⚠️", &self.styles.warning),
                self.styled("No contact addresses found", &self.styles.warning)
            )?;
            return Ok(());
        }

        writeln!(output)?;
        writeln!(
            output,
            "  {}",
            self.styled("📮 Discovered Addresses", &self.styles.subheader)
        )?;
        writeln!(output)?;

        for (i, contact) in results.contacts.iter().enumerate() {
            writeln!(
                output,
                "    {} {}",
                self.styled(&format!("{}.", i + 1), &self.styles.muted),
                self.styled(&contact.email, &self.styles.email)
            )?;

            writeln!(
                output,
                "       {} Domain: {}",
                self.styled("├─", &self.styles.muted),
                self.styled(&contact.domain, &self.styles.muted)
            )?;

            if contact.occurrences > 1 {
                writeln!(
                    output,
                    "       {} {}",
                    self.styled("├─", &self.styles.muted),
                    self.styled(
                        &format!("✓ Seen {} times during the crawl", contact.occurrences),
                        &self.styles.success
                    )
                )?;
            }

            let source_text = self.format_contact_origin(&contact.source);
            writeln!(
                output,
                "       {} Source: {}",
                self.styled("└─", &self.styles.muted),
                self.styled(&source_text, &self.styles.info)
            )?;

            if i < results.contacts.len() - 1 {
                writeln!(output)?;
            }
        }

        Ok(())
    }

    /// Write footer with crawl statistics and warnings
    fn write_footer(
        &self,
        output: &mut String,
        results: &ScanResults,
    ) -> Result<(), std::fmt::Error> {
        writeln!(output)?;
        writeln!(
            output,
            "{}",
            self.styled(
                "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━",
                &self.styles.muted
            )
        )?;

        let meta = &results.metadata;
        if meta.pages_fetched > 0 || meta.pages_failed > 0 || meta.pages_skipped > 0 {
            writeln!(
                output,
                "  {} Crawl Statistics:",
                self.styled("📊", &self.styles.info)
            )?;

            writeln!(
                output,
                "    {} Pages scraped: {}",
                self.styled("├─", &self.styles.muted),
                self.styled(&meta.pages_fetched.to_string(), &self.styles.bold)
            )?;

            if meta.pages_failed > 0 {
                writeln!(
                    output,
                    "    {} Fetch failures: {}",
                    self.styled("├─", &self.styles.muted),
                    self.styled(&meta.pages_failed.to_string(), &self.styles.bold)
                )?;
            }

            if meta.pages_skipped > 0 {
                writeln!(
                    output,
                    "    {} Non-HTML skipped: {}",
                    self.styled("├─", &self.styles.muted),
                    self.styled(&meta.pages_skipped.to_string(), &self.styles.bold)
                )?;
            }

            if let Some(duration) = meta.duration_ms {
                writeln!(
                    output,
                    "    {} Total time: {}ms",
                    self.styled("└─", &self.styles.muted),
                    self.styled(&duration.to_string(), &self.styles.bold)
                )?;
            }

            writeln!(output)?;
        }

        // Warnings (if any)
        if !meta.warnings.is_empty() {
            writeln!(
                output,
                "  {} Warnings:",
                self.styled("⚠️", &self.styles.warning)
            )?;
            for warning in &meta.warnings {
                writeln!(
                    output,
                    "    {} {}",
                    self.styled("•", &self.styles.warning),
                    self.styled(warning, &self.styles.warning)
                )?;
            }
            writeln!(output)?;
        }

        writeln!(
            output,
            "{}",
            self.styled(
                "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━",
                &self.styles.muted
            )
        )?;

        Ok(())
    }

    /// Format a contact origin with appropriate wording
    fn format_contact_origin(&self, origin: &ContactOrigin) -> String {
        match origin {
            ContactOrigin::CompanyWebsite => "Company website".to_string(),
        }
    }

    /// Print results to stdout with proper error handling
    pub fn print_results(&self, results: &ScanResults) -> io::Result<()> {
        let formatted = self
            .format_results(results)
            .map_err(|e| io::Error::other(format!("{}", e)))?;
        print!("{}", formatted);
        io::stdout().flush()?;
        Ok(())
    }
}

impl Default for StyledFormatter {
    fn default() -> Self {
        Self::new()
    }
}
