use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

use crate::error::SimplifyError;

/// The memory-mapped input dump. Zero-length files are not mapped.
pub struct InputDump {
    mmap: Option<Mmap>,
}

#[derive(Debug, PartialEq)]
pub struct InputLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl InputDump {
    pub fn open(input_path: &Path) -> Result<Self, SimplifyError> {
        let read_err = |source| SimplifyError::Read {
            path: input_path.to_path_buf(),
            source,
        };

        let file = File::open(input_path).map_err(read_err)?;
        let len = file.metadata().map_err(read_err)?.len();
        if len == 0 {
            return Ok(Self { mmap: None });
        }

        // the dump is not modified while we run
        let mmap = unsafe { Mmap::map(&file) }.map_err(read_err)?;
        Ok(Self { mmap: Some(mmap) })
    }

    pub fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    /// Lines numbered from 1, with a trailing `\r` removed. Each line is
    /// decoded on its own so one bad line doesn't take the rest down.
    pub fn lines(&self) -> impl Iterator<Item = Result<InputLine<'_>, SimplifyError>> {
        split_lines(self.bytes())
    }
}

pub fn split_lines(bytes: &[u8]) -> impl Iterator<Item = Result<InputLine<'_>, SimplifyError>> {
    let ends_with_newline = bytes.last() == Some(&b'\n');
    let mut pieces: Vec<&[u8]> = if bytes.is_empty() {
        Vec::new()
    } else {
        bytes.split(|b| *b == b'\n').collect()
    };
    if ends_with_newline {
        pieces.pop();
    }

    pieces.into_iter().enumerate().map(|(i, raw)| {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        std::str::from_utf8(raw)
            .map(|text| InputLine { number: i + 1, text })
            .map_err(|source| SimplifyError::Encoding {
                line: i + 1,
                source,
            })
    })
}
