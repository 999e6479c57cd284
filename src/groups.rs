//! Parallel-group documents: an XML tree whose root holds an `<xdata>`
//! group of `<x>` elements and a `<ydata>` group of `<y>` elements, one
//! element per sample.
//!
//! Values are written with exactly 6 decimal digits, so a document only
//! round-trips up to 1e-6 absolute precision.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::errors::{ParseError, TabError, TabResult};
use crate::sample::SampleSet;

const INDENT: &str = "    ";

////////////////////////////////////////////////////////////////////////
//
// Writer

/// Write `set` to `path` as a parallel-group document, creating the
/// containing directory if absent.
pub fn write_groups(set: &SampleSet, path: &Path) -> TabResult<()> {
    crate::ensure_parent_dir(path)?;
    let file = File::create(path).map_err(TabError::FileSystem)?;
    let mut out = BufWriter::new(file);
    write_document(set, &mut out).map_err(TabError::FileSystem)?;
    out.flush().map_err(TabError::FileSystem)?;
    debug!("{} samples written to {}", set.len(), path.display());
    Ok(())
}

fn write_document(set: &SampleSet, out: &mut impl Write) -> io::Result<()> {
    write!(out, "<dataset>\n{0}<xdata>\n", INDENT)?;
    for &x in set.xs() {
        write!(out, "{0}{0}<x>{1:.6}</x>\n", INDENT, x)?;
    }
    write!(out, "{0}</xdata>\n{0}<ydata>\n", INDENT)?;
    for &y in set.ys() {
        write!(out, "{0}{0}<y>{1:.6}</y>\n", INDENT, y)?;
    }
    write!(out, "{0}</ydata>\n</dataset>\n", INDENT)
}

////////////////////////////////////////////////////////////////////////
//
// Reader

/// Read a parallel-group document back into a [`SampleSet`].
///
/// A missing file is reported as [`TabError::NotFound`]; a document that
/// exists but cannot be parsed as [`TabError::Parse`].
pub fn read_groups(path: &Path) -> TabResult<SampleSet> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(TabError::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(TabError::FileSystem(e)),
    };
    let (xs, ys) = parse_document(&text)?;
    debug!("{} samples read from {}", xs.len(), path.display());
    Ok(SampleSet::from_parts(xs, ys))
}

fn parse_document(text: &str) -> Result<(Vec<f64>, Vec<f64>), ParseError> {
    let mut sc = Scanner::new(text);
    sc.skip_declaration();
    let root = sc.open_tag()?;
    let mut xs: Option<Vec<f64>> = None;
    let mut ys: Option<Vec<f64>> = None;
    while !sc.at_close() {
        let group = sc.open_tag()?;
        let (slot, element) = match group {
            "xdata" => (&mut xs, "x"),
            "ydata" => (&mut ys, "y"),
            other => return Err(ParseError::UnexpectedElement(other.into())),
        };
        if slot.is_some() {
            return Err(ParseError::UnexpectedElement(group.into()));
        }
        *slot = Some(parse_group(&mut sc, group, element)?);
    }
    sc.close_tag(root)?;
    if !sc.eof() {
        return Err(ParseError::malformed("content after the document root",
                                         sc.pos));
    }
    let xs = xs.ok_or(ParseError::MissingGroup("xdata"))?;
    let ys = ys.ok_or(ParseError::MissingGroup("ydata"))?;
    if xs.len() != ys.len() {
        return Err(ParseError::UnequalGroups { xdata: xs.len(),
                                               ydata: ys.len() });
    }
    Ok((xs, ys))
}

fn parse_group<'a>(sc: &mut Scanner<'a>, group: &'a str,
                   element: &'static str) -> Result<Vec<f64>, ParseError> {
    let mut values = Vec::new();
    while !sc.at_close() {
        let name = sc.open_tag()?;
        if name != element {
            return Err(ParseError::UnexpectedElement(name.into()));
        }
        let text = sc.text();
        let value: f64 = text.parse()
            .map_err(|_| ParseError::BadNumber(text.into()))?;
        if !value.is_finite() {
            return Err(ParseError::BadNumber(text.into()));
        }
        values.push(value);
        sc.close_tag(name)?;
    }
    sc.close_tag(group)?;
    Ok(values)
}

/// Cursor over the document text.  Tag names are restricted to ASCII
/// alphanumerics and underscores, which covers every document the writer
/// can produce.
struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Scanner { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Skip a leading `<?xml ...?>` declaration if present.
    fn skip_declaration(&mut self) {
        self.skip_whitespace();
        if self.rest().starts_with("<?") {
            if let Some(end) = self.rest().find("?>") {
                self.pos += end + 2;
            }
        }
    }

    fn eof(&mut self) -> bool {
        self.skip_whitespace();
        self.pos == self.text.len()
    }

    /// True if the next markup is a closing tag (not consumed).
    fn at_close(&mut self) -> bool {
        self.skip_whitespace();
        self.rest().starts_with("</")
    }

    /// Consume `<name>` and return the element name.
    fn open_tag(&mut self) -> Result<&'a str, ParseError> {
        self.skip_whitespace();
        if !self.rest().starts_with('<') {
            return Err(ParseError::malformed("expected an opening tag",
                                             self.pos));
        }
        self.pos += 1;
        let name = self.tag_name()?;
        Ok(name)
    }

    /// Consume `</name>`, checking the name against the open element.
    fn close_tag(&mut self, name: &str) -> Result<(), ParseError> {
        self.skip_whitespace();
        if !self.rest().starts_with("</") {
            return Err(ParseError::malformed("expected a closing tag",
                                             self.pos));
        }
        self.pos += 2;
        let found = self.tag_name()?;
        if found != name {
            return Err(ParseError::MismatchedClose {
                expected: name.into(),
                found: found.into(),
            });
        }
        Ok(())
    }

    fn tag_name(&mut self) -> Result<&'a str, ParseError> {
        let rest = self.rest();
        let end = rest.find('>')
            .ok_or(ParseError::malformed("unterminated tag", self.pos))?;
        let name = &rest[..end];
        if name.is_empty()
            || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ParseError::malformed("bad tag name", self.pos));
        }
        self.pos += end + 1;
        Ok(name)
    }

    /// Text content up to the next `<`, surrounding whitespace trimmed.
    fn text(&mut self) -> &'a str {
        let rest = self.rest();
        let end = rest.find('<').unwrap_or(rest.len());
        self.pos += end;
        rest[..end].trim()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::{parse_document, read_groups, write_document, write_groups};
    use crate::errors::{ParseError, TabError};
    use crate::grid::Grid;
    use crate::sample::SampleSet;

    fn tmp(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("functab-{}-{}", std::process::id(), name))
    }

    #[test]
    fn document_shape() {
        let set = SampleSet::from_parts(vec![0., 0.5], vec![1., 0.25]);
        let mut out = Vec::new();
        write_document(&set, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(),
                   "<dataset>\n\
                    \x20   <xdata>\n\
                    \x20       <x>0.000000</x>\n\
                    \x20       <x>0.500000</x>\n\
                    \x20   </xdata>\n\
                    \x20   <ydata>\n\
                    \x20       <y>1.000000</y>\n\
                    \x20       <y>0.250000</y>\n\
                    \x20   </ydata>\n\
                    </dataset>\n");
    }

    #[test]
    fn round_trip_is_exact_to_1e6() {
        let grid = Grid::with_step(-10., 10., 0.5).unwrap();
        let set = SampleSet::tabulate(|x| (x * x).sin() / 3., &grid);
        let path = tmp("roundtrip.xml");
        write_groups(&set, &path).unwrap();
        let back = read_groups(&path).unwrap();
        assert_eq!(back.len(), set.len());
        for ((x0, y0), (x1, y1)) in set.iter().zip(back.iter()) {
            assert!((x0 - x1).abs() <= 1e-6);
            assert!((y0 - y1).abs() <= 1e-6);
        }
    }

    #[test]
    fn creates_missing_directory_tree() {
        let base = tmp("groups-tree");
        let _ = fs::remove_dir_all(&base);
        let path = base.join("nested").join("out.xml");
        let set = SampleSet::from_parts(vec![1.], vec![2.]);
        write_groups(&set, &path).unwrap();
        assert!(path.is_file());
        fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn missing_file_is_not_found() {
        let path = tmp("no-such-document.xml");
        let _ = fs::remove_file(&path);
        assert!(matches!(read_groups(&path), Err(TabError::NotFound(_))));
    }

    #[test]
    fn accepts_any_root_tag_and_group_order() {
        let (xs, ys) = parse_document(
            "<?xml version=\"1.0\"?>\n\
             <r><ydata><y>2</y></ydata><xdata><x>1</x></xdata></r>").unwrap();
        assert_eq!(xs, vec![1.]);
        assert_eq!(ys, vec![2.]);
    }

    #[test]
    fn non_numeric_text_is_a_parse_error() {
        let r = parse_document(
            "<d><xdata><x>abc</x></xdata><ydata><y>1</y></ydata></d>");
        assert!(matches!(r, Err(ParseError::BadNumber(_))));
        let r = parse_document(
            "<d><xdata><x>nan</x></xdata><ydata><y>1</y></ydata></d>");
        assert!(matches!(r, Err(ParseError::BadNumber(_))));
    }

    #[test]
    fn structural_errors_are_parse_errors() {
        assert!(matches!(
            parse_document("<d><xdata><x>1</x></xdata></d>"),
            Err(ParseError::MissingGroup("ydata"))));
        assert!(matches!(
            parse_document("<d><points><x>1</x></points></d>"),
            Err(ParseError::UnexpectedElement(_))));
        assert!(matches!(
            parse_document("<d><xdata><x>1</x></ydata></d>"),
            Err(ParseError::MismatchedClose { .. })));
        assert!(matches!(
            parse_document("<d><xdata><x>1</x></xdata>\
                            <ydata><y>1</y><y>2</y></ydata></d>"),
            Err(ParseError::UnequalGroups { xdata: 1, ydata: 2 })));
        assert!(matches!(
            parse_document("<d><xdata></xdata><ydata></ydata></d>junk"),
            Err(ParseError::Malformed { .. })));
        assert!(matches!(
            parse_document("<d><xdata><x>1"),
            Err(ParseError::Malformed { .. })));
    }
}
