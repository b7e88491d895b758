use anyhow::{bail, ensure, Context, Result};

/// Bounding box and live cells of a pattern decoded from RLE.
pub struct Rle {
    pub width: usize,
    pub height: usize,
    /// `(x, y)` pairs; `x` runs along a line of the RLE body, `y` advances on `$`.
    pub cells: Vec<(usize, usize)>,
}

/// Parses the run-length encoded pattern format (`x = 3, y = 1` header, `b`/`o`/`$`/`!` body).
///
/// Comment lines starting with `#` are skipped. Rule suffixes in the header are ignored.
pub fn parse_rle(data: &str) -> Result<Rle> {
    let mut lines = data.lines().map(str::trim).filter(|l| !l.is_empty());
    let header = loop {
        match lines.next() {
            Some(line) if line.starts_with('#') => continue,
            Some(line) => break line,
            None => bail!("RLE data has no header line"),
        }
    };

    let mut width = None;
    let mut height = None;
    for field in header.split(',') {
        let Some((key, value)) = field.split_once('=') else {
            bail!("malformed header field {:?}", field.trim());
        };
        match key.trim() {
            "x" => width = Some(value.trim().parse::<usize>().context("bad width")?),
            "y" => height = Some(value.trim().parse::<usize>().context("bad height")?),
            _ => {}
        }
    }
    let width = width.context("header has no `x`")?;
    let height = height.context("header has no `y`")?;

    let (mut x, mut y, mut cnt) = (0usize, 0usize, None::<usize>);
    let mut cells = vec![];
    'body: for line in lines {
        for ch in line.chars() {
            let run = cnt.unwrap_or(1);
            match ch {
                '0'..='9' => {
                    let digit = ch as usize - '0' as usize;
                    cnt = Some(run_digits(cnt, digit)?);
                    continue;
                }
                'o' | 'b' => {
                    let end = x.checked_add(run).context("run overflows row")?;
                    ensure!(end <= width, "row {} overflows width {}", y, width);
                    if ch == 'o' {
                        ensure!(y < height, "pattern overflows height {}", height);
                        cells.extend((x..end).map(|cx| (cx, y)));
                    }
                    x = end;
                }
                '$' => (x, y) = (0, y.checked_add(run).context("run overflows pattern")?),
                '!' => break 'body,
                c if c.is_whitespace() => continue,
                c => bail!("unexpected symbol {:?} in RLE body", c),
            }
            cnt = None;
        }
    }
    Ok(Rle {
        width,
        height,
        cells,
    })
}

fn run_digits(cnt: Option<usize>, digit: usize) -> Result<usize> {
    cnt.unwrap_or(0)
        .checked_mul(10)
        .and_then(|v| v.checked_add(digit))
        .context("run count overflow")
}

#[cfg(test)]
mod tests {
    use super::parse_rle;

    #[test]
    fn test_glider() {
        let rle = parse_rle("#N Glider\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!\n").unwrap();
        assert_eq!((rle.width, rle.height), (3, 3));
        assert_eq!(rle.cells, vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_multiline_and_blank_runs() {
        let rle = parse_rle("x = 4, y = 3\no2$\n3bo!").unwrap();
        assert_eq!(rle.cells, vec![(0, 0), (3, 2)]);
    }

    #[test]
    fn test_errors() {
        assert!(parse_rle("").is_err());
        assert!(parse_rle("x = 2\no!").is_err());
        assert!(parse_rle("x = 2, y = 1\n3o!").is_err());
        assert!(parse_rle("x = 2, y = 1\nq!").is_err());
        assert!(parse_rle("x = 1, y = 1\n$o!").is_err());
    }

    #[test]
    fn test_huge_runs_are_rejected() {
        assert!(parse_rle("x = 2, y = 1\nb18446744073709551615b!").is_err());
        assert!(parse_rle("x = 2, y = 1\n18446744073709551615$18446744073709551615$o!").is_err());
        assert!(parse_rle("x = 1, y = 1\n184467440737095516150o!").is_err());
        // rejected before any cell of the run is produced
        assert!(parse_rle("x = 1, y = 1\n200000000o!").is_err());
    }
}
