use std::io::BufRead;

use crate::core::error::Result;

/// Forward-only line iterator over a buffered reader.
///
/// Trailing `\n` and `\r\n` are stripped. Only one line is held in memory at
/// a time; I/O errors from the underlying reader surface as `Err` items and
/// terminate iteration at the caller's discretion.
pub struct LineSplitter<R> {
    reader: R,
}

impl<R: BufRead> LineSplitter<R> {
    pub fn new(reader: R) -> Self {
        LineSplitter { reader }
    }
}

impl<R: BufRead> Iterator for LineSplitter<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(err) => Some(Err(err.into())),
        }
    }
}
