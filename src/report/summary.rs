//! Conversion summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::converter::{format_temperature, Conversion};

/// Summary of a single conversion, rendered as a table
#[derive(Debug, Clone, Copy)]
pub struct ConversionSummary {
    pub conversion: Conversion,
}

impl ConversionSummary {
    pub fn new(conversion: Conversion) -> Self {
        Self { conversion }
    }

    /// Build the summary table
    pub fn table(&self) -> Table {
        let c = &self.conversion;

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Field").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("🌡️  Input"),
            Cell::new(format_temperature(c.input, c.from)),
        ]);
        table.add_row(vec![Cell::new("📏 From"), Cell::new(c.from.label())]);
        table.add_row(vec![Cell::new("🎯 To"), Cell::new(c.to.label())]);
        table.add_row(vec![
            Cell::new("✅ Result"),
            Cell::new(c.display())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("CONVERSION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        // Indent the table
        for line in self.table().to_string().lines() {
            println!("    {}", line);
        }
    }
}
