use chrono::NaiveDate;

use crate::config::{ReportConfig, ReportConfigBuilder};

/// The standard monthly sales report: PDF, the three sales columns, the
/// usual header and footer, totals on. Returns the builder rather than
/// a built config so the caller can keep chaining before `build()`.
///
/// Pure sugar over the builder API — no validation of its own.
pub fn monthly_sales(
    title: impl Into<String>,
    start: NaiveDate,
    end: NaiveDate,
) -> ReportConfigBuilder {
    ReportConfig::builder(title, "PDF", start, end)
        .add_column("Produto")
        .add_column("Quantidade")
        .add_column("Valor")
        .with_header("Relatório de Vendas")
        .with_footer("Confidencial")
        .with_totals()
}
