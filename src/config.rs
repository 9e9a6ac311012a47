use std::fmt;

use chrono::NaiveDate;

use crate::error::ReportError;
use crate::types::{DateRange, Orientation};

/// A validated report configuration — too many optional fields for a
/// simple constructor. Builder pattern: chain method calls, validate at
/// build time.
///
/// Instances exist only via `ReportConfigBuilder::build`, so every
/// config has passed the three validations. Fields are public but the
/// type is its own snapshot: the builder clones its state on build, so
/// nothing here aliases builder storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub title: String,
    pub format: String,
    pub period: DateRange,
    pub columns: Vec<String>,
    pub filters: Vec<String>,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub chart: Option<String>,
    pub group_by: Option<String>,
    pub sort_by: Option<String>,
    pub summary: bool,
    pub totals: bool,
    pub orientation: Orientation,
    pub page_size: String,
    pub page_numbers: bool,
    pub logo: Option<String>,
    pub watermark: Option<String>,
}

/// The builder accumulates optional values and produces a validated
/// config. Setters consume and return `self` so calls chain
/// left-to-right; `build` only borrows, so one builder can produce any
/// number of independent configs.
pub struct ReportConfigBuilder {
    title: String,
    format: String,
    period: DateRange,
    columns: Vec<String>,
    filters: Vec<String>,
    header: Option<String>,
    footer: Option<String>,
    chart: Option<String>,
    group_by: Option<String>,
    sort_by: Option<String>,
    summary: bool,
    totals: bool,
    orientation: Orientation,
    page_size: String,
    page_numbers: bool,
    logo: Option<String>,
    watermark: Option<String>,
}

impl ReportConfig {
    /// Start a builder with the four required fields. They are stored
    /// verbatim — validation waits until `build`, so an empty title or
    /// an inverted range is accepted here.
    pub fn builder(
        title: impl Into<String>,
        format: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ReportConfigBuilder {
        ReportConfigBuilder {
            title: title.into(),
            format: format.into(),
            period: DateRange::new(start, end),
            columns: Vec::new(),
            filters: Vec::new(),
            header: None,
            footer: None,
            chart: None,
            group_by: None,
            sort_by: None,
            summary: false,
            totals: false,
            orientation: Orientation::default(),
            page_size: "A4".to_string(),
            page_numbers: false,
            logo: None,
            watermark: None,
        }
    }

    /// Print the rendered summary to stdout. The rendering itself lives
    /// in the Display impl so it can also be captured as a String.
    pub fn generate(&self) {
        println!("{self}");
    }
}

impl ReportConfigBuilder {
    /// Append a column. Order is preserved — it is the order the report
    /// would lay the columns out in.
    pub fn add_column(mut self, name: impl Into<String>) -> Self {
        self.columns.push(name.into());
        self
    }

    /// Append a filter expression, e.g. "Status=Ativo". Expressions are
    /// opaque text as far as the builder is concerned.
    pub fn add_filter(mut self, expression: impl Into<String>) -> Self {
        self.filters.push(expression.into());
        self
    }

    pub fn with_header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(text.into());
        self
    }

    pub fn with_footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }

    /// Enable a chart of the given kind. The kind is free-form text
    /// ("Bar", "Pie", ...) — no fixed enumeration.
    pub fn with_chart(mut self, kind: impl Into<String>) -> Self {
        self.chart = Some(kind.into());
        self
    }

    /// Group rows by a field. Not cross-checked against the configured
    /// columns — the field may name something the report computes.
    pub fn group_by(mut self, field: impl Into<String>) -> Self {
        self.group_by = Some(field.into());
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }

    pub fn with_summary(mut self) -> Self {
        self.summary = true;
        self
    }

    pub fn with_totals(mut self) -> Self {
        self.totals = true;
        self
    }

    pub fn landscape(mut self) -> Self {
        self.orientation = Orientation::Landscape;
        self
    }

    pub fn with_page_numbers(mut self) -> Self {
        self.page_numbers = true;
        self
    }

    pub fn page_size(mut self, size: impl Into<String>) -> Self {
        self.page_size = size.into();
        self
    }

    pub fn with_logo(mut self, path: impl Into<String>) -> Self {
        self.logo = Some(path.into());
        self
    }

    pub fn with_watermark(mut self, text: impl Into<String>) -> Self {
        self.watermark = Some(text.into());
        self
    }

    /// Validate and produce a config.
    ///
    /// Checks run in a fixed order and the first violation wins:
    /// title, then date range, then columns. A failed build leaves the
    /// builder untouched — fix the state and call `build` again.
    pub fn build(&self) -> Result<ReportConfig, ReportError> {
        if self.title.trim().is_empty() {
            return Err(ReportError::MissingTitle);
        }
        if self.period.is_inverted() {
            return Err(ReportError::InvalidDateRange {
                start: self.period.start,
                end: self.period.end,
            });
        }
        if self.columns.is_empty() {
            return Err(ReportError::MissingColumns);
        }

        // Clone everything: the config must not share storage with the
        // builder, or a later build/mutation could reach back into it.
        Ok(ReportConfig {
            title: self.title.clone(),
            format: self.format.clone(),
            period: self.period,
            columns: self.columns.clone(),
            filters: self.filters.clone(),
            header: self.header.clone(),
            footer: self.footer.clone(),
            chart: self.chart.clone(),
            group_by: self.group_by.clone(),
            sort_by: self.sort_by.clone(),
            summary: self.summary,
            totals: self.totals,
            orientation: self.orientation,
            page_size: self.page_size.clone(),
            page_numbers: self.page_numbers,
            logo: self.logo.clone(),
            watermark: self.watermark.clone(),
        })
    }
}

/// One line per configured feature, in a fixed order. Lines for
/// optional features only appear when the feature is set; the title,
/// format, period, columns and page lines always appear, and the
/// closing confirmation is always last.
impl fmt::Display for ReportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Report: {}", self.title)?;
        writeln!(f, "Format: {}", self.format)?;
        writeln!(f, "Period: {}", self.period)?;
        if let Some(header) = &self.header {
            writeln!(f, "Header: {header}")?;
        }
        writeln!(f, "Columns: {}", self.columns.join(", "))?;
        if !self.filters.is_empty() {
            writeln!(f, "Filters: {}", self.filters.join("; "))?;
        }
        if let Some(field) = &self.group_by {
            writeln!(f, "Grouped by: {field}")?;
        }
        if let Some(field) = &self.sort_by {
            writeln!(f, "Sorted by: {field}")?;
        }
        if let Some(kind) = &self.chart {
            writeln!(f, "Chart: {kind}")?;
        }
        if self.summary {
            writeln!(f, "Summary section included")?;
        }
        if self.totals {
            writeln!(f, "Totals row included")?;
        }
        if self.page_numbers {
            writeln!(f, "Page: {}, {}, numbered", self.page_size, self.orientation)?;
        } else {
            writeln!(f, "Page: {}, {}", self.page_size, self.orientation)?;
        }
        if let Some(logo) = &self.logo {
            writeln!(f, "Logo: {logo}")?;
        }
        if let Some(text) = &self.watermark {
            writeln!(f, "Watermark: {text}")?;
        }
        if let Some(footer) = &self.footer {
            writeln!(f, "Footer: {footer}")?;
        }
        write!(f, "Report configuration ready.")
    }
}
