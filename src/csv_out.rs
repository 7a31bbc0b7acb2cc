//! Semicolon-delimited output with decimal commas.

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::Result;
use crate::model::Export;

pub const DELIMITER: u8 = b';';
pub const DECIMAL_SEPARATOR: &str = ",";

/// Shortest round-trip decimal form with a comma separator.
///
/// `12.5` becomes `12,5` and `3.0` becomes `3`; no exponent is ever used.
pub fn format_decimal(value: f64) -> String {
    value.to_string().replace('.', DECIMAL_SEPARATOR)
}

/// Write the header and one row per timestamp. Returns the number of data rows.
///
/// Cells are written unquoted, so each line equals [`Export::headers`] or
/// [`Export::row`].
pub fn write_export<W: Write>(export: &Export, out: W) -> Result<usize> {
    let mut wtr = WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Never)
        .from_writer(out);

    wtr.write_record(export.header_record())?;

    let times = export.times();
    for t in &times {
        wtr.write_record(export.row_record(t))?;
    }

    wtr.flush()?;
    Ok(times.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(12.5), "12,5");
        assert_eq!(format_decimal(3.0), "3");
        assert_eq!(format_decimal(-0.25), "-0,25");
        assert_eq!(format_decimal(1e21), "1000000000000000000000");
        assert_eq!(format_decimal(0.0000001), "0,0000001");
    }

    #[test]
    fn test_write_export_lines() {
        let export = Export::from_slice(
            br#"{"errno": 0, "result": [
                {"variable": "V1", "unit": "kWh", "name": "", "data": [
                    {"time": "2021-01-01 09:00:00 CET+0100", "value": 1.5},
                    {"time": "2021-01-01 09:05:00 CET+0100", "value": 2.0}
                ]},
                {"variable": "V2", "unit": "W", "name": "", "data": [
                    {"time": "2021-01-01 09:00:00 CET+0100", "value": 100}
                ]}
            ]}"#,
        )
        .unwrap();

        let mut buf = Vec::new();
        let rows = write_export(&export, &mut buf).unwrap();

        assert_eq!(rows, 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "time;V1[kWh];V2[W]\n2021-01-01 09:00:00;1,5;100\n2021-01-01 09:05:00;2;\n"
        );
    }

    #[test]
    fn test_cells_are_not_quoted() {
        let export = Export::from_slice(
            br#"{"result": [{"variable": "a \"b\"", "unit": "x;y", "data": []}]}"#,
        )
        .unwrap();

        let mut buf = Vec::new();
        write_export(&export, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "time;a \"b\"[x;y]\n");
    }

    #[test]
    fn test_header_only_when_no_readings() {
        let export = Export::from_slice(b"{}").unwrap();
        let mut buf = Vec::new();
        assert_eq!(write_export(&export, &mut buf).unwrap(), 0);
        assert_eq!(buf, b"time\n");
    }
}
