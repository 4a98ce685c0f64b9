//! Run-length-encoded pattern decoding.
//!
//! The accepted dialect: `#`-prefixed lines are metadata and dropped, the
//! remaining lines form one token stream. Decimal digits accumulate a run
//! count, `o` emits that many alive cells, `b` that many dead cells
//! (count defaults to 1), `$` terminates the current row. `!` and every
//! other character are ignored; the final row closes implicitly at end of
//! stream. Rows are right-padded with dead cells to the longest row, so
//! the result is always rectangular.

/// An immutable decoded pattern: flat row-major boolean matrix
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Pattern {
    #[inline]
    pub fn width(&self) -> usize { self.width }

    #[inline]
    pub fn height(&self) -> usize { self.height }

    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x] != 0
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }
}

/// Decode an RLE pattern text into a rectangular matrix.
///
/// Fails when the input contains no row data at all (an empty matrix has
/// no defined row length); the error carries no grid side effects.
pub fn decode(text: &str) -> Result<Pattern, String> {
    let stream: String = text
        .lines()
        .filter(|line| !line.starts_with('#'))
        .collect();

    let mut rows: Vec<Vec<u8>> = Vec::new();
    let mut current_row: Vec<u8> = Vec::new();
    let mut count = 0usize;
    let mut has_count = false;

    for ch in stream.chars() {
        match ch {
            '0'..='9' => {
                count = count * 10 + (ch as usize - '0' as usize);
                has_count = true;
            }
            'b' | 'o' => {
                let run = if has_count { count } else { 1 };
                let value = (ch == 'o') as u8;
                current_row.extend(std::iter::repeat(value).take(run));
                count = 0;
                has_count = false;
            }
            '$' => {
                rows.push(std::mem::take(&mut current_row));
            }
            _ => {} // '!', whitespace and anything else
        }
    }
    rows.push(current_row);

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if width == 0 {
        return Err("RLE pattern contains no row data".to_string());
    }

    let height = rows.len();
    let mut cells = Vec::with_capacity(width * height);
    for mut row in rows {
        row.resize(width, 0);
        cells.extend_from_slice(&row);
    }

    Ok(Pattern { width, height, cells })
}

/// Decode and pad into a dead-cell canvas of the requested size, copying
/// only the overlapping region. The source is never cropped beyond the
/// min(target, source) copy window.
pub fn decode_sized(text: &str, width: usize, height: usize) -> Result<Pattern, String> {
    let source = decode(text)?;
    if width == 0 || height == 0 {
        return Err("target pattern size must be positive".to_string());
    }

    let mut cells = vec![0u8; width * height];
    for y in 0..height.min(source.height) {
        for x in 0..width.min(source.width) {
            cells[y * width + x] = source.cells[y * source.width + x];
        }
    }

    Ok(Pattern { width, height, cells })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_coords(pattern: &Pattern) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..pattern.height() {
            for x in 0..pattern.width() {
                if pattern.is_alive(x, y) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn decodes_canonical_glider() {
        let glider = decode("bo$2bo$3o!").unwrap();
        assert_eq!(glider.width(), 3);
        assert_eq!(glider.height(), 3);
        assert_eq!(
            alive_coords(&glider),
            vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn decodes_blinker_as_single_row() {
        let blinker = decode("3o!").unwrap();
        assert_eq!(blinker.width(), 3);
        assert_eq!(blinker.height(), 1);
        assert_eq!(blinker.alive_count(), 3);
    }

    #[test]
    fn header_lines_are_ignored() {
        let text = "#N Glider\n#C period 4\nbo$2bo$3o!";
        let with_header = decode(text).unwrap();
        let without = decode("bo$2bo$3o!").unwrap();
        assert_eq!(with_header, without);
    }

    #[test]
    fn multi_digit_runs_accumulate() {
        let pattern = decode("12bo!").unwrap();
        assert_eq!(pattern.width(), 13);
        assert_eq!(pattern.alive_count(), 1);
        assert!(pattern.is_alive(12, 0));
    }

    #[test]
    fn short_rows_are_padded_to_the_longest() {
        let pattern = decode("o$3o!").unwrap();
        assert_eq!(pattern.width(), 3);
        assert_eq!(pattern.height(), 2);
        assert!(pattern.is_alive(0, 0));
        assert!(!pattern.is_alive(1, 0));
        assert!(!pattern.is_alive(2, 0));
    }

    #[test]
    fn final_row_closes_without_terminator() {
        let pattern = decode("2o$2o").unwrap();
        assert_eq!(pattern.height(), 2);
        assert_eq!(pattern.alive_count(), 4);
    }

    #[test]
    fn double_terminator_yields_blank_row() {
        let pattern = decode("3o$$3o!").unwrap();
        assert_eq!(pattern.height(), 3);
        assert_eq!((0..3).filter(|&x| pattern.is_alive(x, 1)).count(), 0);
    }

    #[test]
    fn empty_input_is_a_decode_error() {
        assert!(decode("").is_err());
        assert!(decode("#N nothing but headers").is_err());
        assert!(decode("!").is_err());
    }

    #[test]
    fn sized_decoding_pads_into_larger_canvas() {
        let pattern = decode_sized("3o!", 5, 4).unwrap();
        assert_eq!(pattern.width(), 5);
        assert_eq!(pattern.height(), 4);
        assert_eq!(pattern.alive_count(), 3);
        assert!(pattern.is_alive(0, 0));
        assert!(!pattern.is_alive(3, 0));
    }

    #[test]
    fn sized_decoding_copies_only_the_overlap() {
        let pattern = decode_sized("3o$3o!", 2, 1).unwrap();
        assert_eq!(pattern.width(), 2);
        assert_eq!(pattern.height(), 1);
        assert_eq!(pattern.alive_count(), 2);
    }
}
