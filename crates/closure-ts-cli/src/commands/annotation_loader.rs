use std::io::{self, Read};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),

    #[error("no annotations given")]
    Empty,
}

/// Resolve positional annotations. A lone `-` reads them from stdin.
pub fn load_annotations(args: &[String]) -> Result<Vec<String>, LoadError> {
    let annotations = match args {
        [only] if only == "-" => split_lines(&read_stdin()?),
        _ => args.to_vec(),
    };

    if annotations.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(annotations)
}

fn read_stdin() -> Result<String, LoadError> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// One annotation per non-blank line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve a single annotation. `-` reads the whole of stdin.
pub fn load_annotation(arg: &str) -> Result<String, LoadError> {
    if arg == "-" {
        return Ok(read_stdin()?.trim().to_string());
    }
    Ok(arg.to_string())
}
