use crate::core::types::{Flattened, Row};
use crate::errors::Result;
use comfy_table::{presets, ContentArrangement, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rows and diagnostics as one pretty-printed JSON document
    Json,
    /// One JSON object per row
    Jsonl,
    /// Human-readable table of the main columns
    Table,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &Flattened) -> Result<()>;
}

pub fn create_writer<'w, W: Write + 'w>(
    writer: W,
    format: OutputFormat,
) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Jsonl => Box::new(JsonLinesWriter::new(writer)),
        OutputFormat::Table => Box::new(TableWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &Flattened) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, results)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct JsonLinesWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonLinesWriter<W> {
    fn write_results(&mut self, results: &Flattened) -> Result<()> {
        for row in &results.rows {
            serde_json::to_writer(&mut self.writer, row)?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TableWriter<W: Write> {
    writer: W,
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

const TABLE_HEADER: [&str; 12] = [
    "Filed",
    "Symbol",
    "Owner",
    "Role",
    "Table",
    "Entry",
    "Date",
    "Direction",
    "Shares",
    "Price",
    "Value USD",
    "Stake",
];

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn amount(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        format!("{:.2}", value)
    }
}

fn table_row(row: &Row) -> Vec<String> {
    vec![
        text(&row.filed_at),
        text(&row.issuer_symbol),
        text(&row.owner_name),
        format!("{:.2}", row.role_score),
        row.table.to_string(),
        row.entry.to_string(),
        text(&row.transaction_date),
        row.direction.to_string(),
        amount(row.shares),
        amount(row.price_per_share),
        amount(row.value_usd),
        format!("{:.4}", row.stake_change),
    ]
}

impl<W: Write> OutputWriter for TableWriter<W> {
    fn write_results(&mut self, results: &Flattened) -> Result<()> {
        if results.is_empty() {
            writeln!(self.writer, "No rows.")?;
            self.writer.flush()?;
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(TABLE_HEADER.to_vec());
        for row in &results.rows {
            table.add_row(table_row(row));
        }

        writeln!(self.writer, "{table}")?;
        writeln!(
            self.writer,
            "{} rows from {} filings ({} skipped)",
            results.stats.rows_emitted,
            results.stats.filings_seen,
            results.stats.filings_skipped
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
