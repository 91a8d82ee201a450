//! A human readable table of a PNG's records.

use super::*;

/// Column widths for [`Png::render_summary`].
///
/// All columns are right aligned, and values wider than their column just
/// push the rest of the line over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SummaryFormat {
  pub ty_width: usize,
  pub len_width: usize,
  pub crc_width: usize,
  /// Width of attribute names on the indented lines.
  pub name_width: usize,
  /// Width of attribute values on the indented lines.
  pub value_width: usize,
}
impl Default for SummaryFormat {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self { ty_width: 6, len_width: 10, crc_width: 16, name_width: 20, value_width: 10 }
  }
}

impl Png {
  /// Renders one line per record, plus an indented line per attribute for the
  /// chunk kinds that have them.
  ///
  /// ```text
  ///   type   data_len              crc
  ///   IHDR         13       0x907753DE
  ///                 width:          1
  ///   ...
  /// ```
  #[must_use]
  pub fn render_summary(&self, format: &SummaryFormat, line_sep: &str) -> String {
    let mut out = String::new();
    // writing to a String can't fail
    let _ = self.write_summary(&mut out, format, line_sep);
    out
  }

  /// Like [`render_summary`](Png::render_summary), but into any writer.
  pub fn write_summary<W: core::fmt::Write>(
    &self, w: &mut W, format: &SummaryFormat, line_sep: &str,
  ) -> core::fmt::Result {
    let SummaryFormat { ty_width, len_width, crc_width, name_width, value_width } = *format;
    write!(w, "{:>ty_width$} {:>len_width$} {:>crc_width$}", "type", "data_len", "crc")?;
    for record in &self.records {
      w.write_str(line_sep)?;
      match record {
        PngRecord::Chunk(chunk) => {
          let crc = format!("{:#010X}", chunk.crc());
          write!(w, "{:>ty_width$} {:>len_width$} {crc:>crc_width$}", chunk.ty(), chunk.data().len())?;
          for attribute in chunk.attributes() {
            w.write_str(line_sep)?;
            write!(w, "   {:>name_width$}: ", attribute.name)?;
            match (attribute.get)(chunk) {
              Some(value) => write!(w, "{value:>value_width$}")?,
              None => write!(w, "{:>value_width$}", "?")?,
            }
          }
        }
        PngRecord::Tail(bytes) => {
          write!(w, "{:>ty_width$} {:>len_width$} {:>crc_width$}", "(tail)", bytes.len(), "-")?;
        }
      }
    }
    Ok(())
  }
}

impl core::fmt::Display for Png {
  /// The summary table with default widths and `\n` line breaks.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    self.write_summary(f, &SummaryFormat::default(), "\n")
  }
}
