use tbe::Result;

use csv::Writer;
use serde::Serialize;

/// Serializes the rows into a CSV string, header included.
pub fn rows_to_csv<S: Serialize>(rows: &[S]) -> Result<String> {
    let mut writer = Writer::from_writer(vec![]);

    for row in rows {
        writer.serialize(row)?;
    }

    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;

    return Ok(string);
}
