use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement,
    Table, TableComponent,
};

/// Builder for consistently styled terminal tables
#[derive(Clone)]
pub struct TableBuilder {
    table: Table,
}

/// Table styling presets
#[derive(Debug, Clone, PartialEq)]
pub enum TableStyle {
    /// Bordered table with a header row
    Boxed,
    /// Only outer borders, used for the step report body
    Plain,
}

impl TableBuilder {
    /// Create a new table builder with default styling
    pub fn new() -> Self {
        let mut table = Table::new();

        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);

        Self { table }
    }

    pub fn with_style(style: TableStyle) -> Self {
        let mut builder = Self::new();
        if style == TableStyle::Plain {
            builder
                .table
                .remove_style(TableComponent::HorizontalLines)
                .remove_style(TableComponent::LeftBorderIntersections)
                .remove_style(TableComponent::RightBorderIntersections)
                .remove_style(TableComponent::MiddleIntersections);
        }
        builder
    }

    /// Set table headers in bold
    pub fn headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header_cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| Cell::new(h.into()).add_attribute(Attribute::Bold))
            .collect();

        self.table.set_header(header_cells);
        self
    }

    /// Add a row with custom styled cells
    pub fn styled_row(&mut self, cells: Vec<Cell>) -> &mut Self {
        self.table.add_row(cells);
        self
    }

    /// Add a single line of text
    pub fn line<S: Into<String>>(&mut self, text: S) -> &mut Self {
        self.table.add_row(vec![Cell::new(text.into())]);
        self
    }

    pub fn build(self) -> String {
        self.table.to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper functions for creating styled cells
pub mod cells {
    use super::*;

    /// Highlighted cell for the current entry
    pub fn current<S: Into<String>>(text: S) -> Cell {
        Cell::new(text.into())
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold)
    }

    pub fn muted<S: Into<String>>(text: S) -> Cell {
        Cell::new(text.into()).fg(Color::DarkGrey)
    }

    pub fn normal<S: Into<String>>(text: S) -> Cell {
        Cell::new(text.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_builder_basic() {
        let mut builder = TableBuilder::new();
        builder.headers(vec!["Step", "Address"]);
        builder.styled_row(vec![cells::current("Navigation (1)"), cells::muted("file:///r.html?step=0")]);
        let table = builder.build();

        assert!(table.contains("Step"));
        assert!(table.contains("Navigation (1)"));
        assert!(table.contains("file:///r.html?step=0"));
    }

    #[test]
    fn test_plain_style() {
        let mut builder = TableBuilder::with_style(TableStyle::Plain);
        builder.line("performance: 0.99");
        builder.line("seo: 1");
        let table = builder.build();

        assert!(table.contains("performance: 0.99"));
        assert!(table.contains("seo: 1"));
    }
}
