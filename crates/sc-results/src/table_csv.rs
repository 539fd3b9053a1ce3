//! Cell tables as CSV, the staging format the solver reads.

use crate::{ResultsError, ResultsResult};
use sc_cell::{CellTable, Layer, PropertySchema};
use sc_core::numeric::Real;

/// Render a table with header `index,keys...` and one row per layer.
///
/// Numbers print in shortest round-trip form, so parsing the output
/// reproduces the staged values exactly.
pub fn cell_to_csv(table: &CellTable) -> String {
    let mut out = String::new();

    out.push_str(table.index_name());
    for key in table.schema().keys() {
        out.push(',');
        out.push_str(key);
    }
    out.push('\n');

    for (no, layer) in table.rows() {
        out.push_str(&no.to_string());
        out.push(',');
        out.push_str(layer.name());
        for value in layer.values() {
            out.push(',');
            out.push_str(&format!("{value}"));
        }
        out.push('\n');
    }

    out
}

/// Parse a table written by `cell_to_csv`.
///
/// The index column must run 1, 2, 3, ... in file order; every data row must
/// carry exactly the schema's value count.
pub fn cell_from_csv(text: &str) -> ResultsResult<CellTable> {
    let mut lines = text.lines().enumerate();

    let (_, header) = lines.next().ok_or_else(|| csv_err(1, "empty input"))?;
    let mut columns = header.split(',');
    let index_name = columns.next().unwrap_or("").trim();
    if index_name.is_empty() {
        return Err(csv_err(1, "missing index column name"));
    }
    let keys: Vec<String> = columns.map(|k| k.trim().to_string()).collect();
    if keys.is_empty() {
        return Err(csv_err(1, "header carries no schema keys"));
    }
    let schema = PropertySchema::new(keys)?;

    let mut layers = Vec::new();
    for (i, line) in lines {
        let lineno = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split(',');

        let index_field = fields.next().unwrap_or("").trim();
        let index: usize = index_field
            .parse()
            .map_err(|_| csv_err(lineno, &format!("bad index '{index_field}'")))?;
        if index != layers.len() + 1 {
            return Err(csv_err(
                lineno,
                &format!("index {index} out of order, expected {}", layers.len() + 1),
            ));
        }

        let name = fields
            .next()
            .ok_or_else(|| csv_err(lineno, "missing layer name"))?
            .trim();

        let mut values = Vec::with_capacity(schema.value_count());
        for field in fields {
            let field = field.trim();
            let value: Real = field
                .parse()
                .map_err(|_| csv_err(lineno, &format!("bad number '{field}'")))?;
            values.push(value);
        }
        if values.len() != schema.value_count() {
            return Err(csv_err(
                lineno,
                &format!(
                    "row carries {} values, schema expects {}",
                    values.len(),
                    schema.value_count()
                ),
            ));
        }

        layers.push(Layer::build(&schema, name, &values)?);
    }

    Ok(CellTable::from_parts(index_name, schema, layers)?)
}

fn csv_err(line: usize, what: &str) -> ResultsError {
    ResultsError::Csv {
        line,
        what: what.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_cell::{LayerSet, assemble_cell, stack_layers};

    fn table() -> CellTable {
        let schema = PropertySchema::mechanical();
        let raw = LayerSet::from_pairs(vec![
            ("case".to_string(), vec![70e9, 2700.0, 100e-6, 0.7]),
            ("anode".to_string(), vec![10e9, 2260.0, 60e-6, 0.6]),
        ])
        .unwrap();
        assemble_cell(stack_layers(&schema, &raw, 1).unwrap())
    }

    #[test]
    fn csv_layout_matches_staging_format() {
        let csv = cell_to_csv(&table());
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("layer_no,name,E,rho,x,alpha"));
        assert_eq!(lines.next(), Some("1,case,70000000000,2700,0.0001,0.7"));
        assert_eq!(lines.next(), Some("2,anode,10000000000,2260,0.00006,0.6"));
        assert_eq!(lines.next(), Some("3,case,70000000000,2700,0.0001,0.7"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn csv_round_trips_exactly() {
        let original = table();
        let parsed = cell_from_csv(&cell_to_csv(&original)).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn bad_number_reports_the_line() {
        let text = "layer_no,name,x\n1,case,0.0001\n2,anode,sixty\n";
        let err = cell_from_csv(text).unwrap_err();
        match err {
            ResultsError::Csv { line, what } => {
                assert_eq!(line, 3);
                assert!(what.contains("sixty"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn out_of_order_index_is_rejected() {
        let text = "layer_no,name,x\n1,case,0.0001\n3,anode,0.00006\n";
        let err = cell_from_csv(text).unwrap_err();
        assert!(matches!(err, ResultsError::Csv { line: 3, .. }));
    }

    #[test]
    fn short_row_is_rejected() {
        let text = "layer_no,name,E,rho,x,alpha\n1,case,70000000000,2700\n";
        let err = cell_from_csv(text).unwrap_err();
        assert!(matches!(err, ResultsError::Csv { line: 2, .. }));
    }

    #[test]
    fn header_only_gives_empty_table() {
        let parsed = cell_from_csv("row,name,x\n").unwrap();
        assert_eq!(parsed.index_name(), "row");
        assert!(parsed.is_empty());
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(cell_from_csv("").is_err());
        assert!(cell_from_csv(",name,x\n").is_err());
    }
}
