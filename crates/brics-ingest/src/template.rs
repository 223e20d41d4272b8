use std::path::Path;

use brics_model::Template;

use crate::error::Result;
use crate::table::read_csv_table;

/// Load the BRICS data-element template, keeping any rows it already holds.
pub fn read_template(path: &Path) -> Result<Template> {
    let table = read_csv_table(path)?;
    let mut template = Template::new(table.headers);
    for row in table.rows {
        template.push_row(row);
    }
    tracing::info!(
        path = %path.display(),
        columns = template.columns().len(),
        rows = template.len(),
        "loaded BRICS template"
    );
    Ok(template)
}
