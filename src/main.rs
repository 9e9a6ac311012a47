mod config;
mod error;
mod preset;
mod types;

use chrono::NaiveDate;

use config::ReportConfig;
use error::ReportError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

fn main() -> Result<(), ReportError> {
    // The full chain: every optional setter in play.
    let report =
        ReportConfig::builder("Vendas Mensais", "PDF", date(2024, 1, 1), date(2024, 1, 31))
            .add_column("Produto")
            .add_column("Quantidade")
            .add_column("Valor")
            .add_filter("Status=Ativo")
            .with_header("Relatório de Vendas")
            .with_footer("Confidencial")
            .with_chart("Bar")
            .group_by("Categoria")
            .sort_by("Valor")
            .with_summary()
            .with_totals()
            .landscape()
            .with_page_numbers()
            .with_logo("logos/acme.png")
            .with_watermark("CONFIDENCIAL")
            .build()?;
    report.generate();

    println!();

    // Same shape via the preset, with extra chaining on top.
    let report = preset::monthly_sales("Vendas de Fevereiro", date(2024, 2, 1), date(2024, 2, 29))
        .add_filter("Regiao=Sul")
        .page_size("Letter")
        .build()?;
    report.generate();

    println!();

    // A rejected build: the builder accepts anything, build() does not.
    let broken =
        ReportConfig::builder("", "PDF", date(2024, 1, 1), date(2024, 1, 31)).add_column("X");
    if let Err(e) = broken.build() {
        println!("Rejected configuration: {e}");
    }

    Ok(())
}
