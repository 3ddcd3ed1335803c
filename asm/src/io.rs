use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use crate::{error::Error, Assembly};

pub fn read_source(path: &Path) -> Result<String, Error> {
    let name = path.display().to_string();
    let mut file = File::open(path).map_err(|e| Error::FileOpen(name.clone(), e))?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|e| Error::FileRead(name, e))?;
    Ok(text)
}

/// Writes one 16-character word per line.
pub fn write_output(path: &Path, assembly: &Assembly) -> Result<(), Error> {
    let name = path.display().to_string();
    let file = File::create(path).map_err(|e| Error::FileCreate(name.clone(), e))?;
    let mut out = BufWriter::new(file);
    out.write_all(assembly.output().as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| Error::FileWrite(name, e))
}

/// `<input>.hack`, next to the input.
pub fn default_output(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_owned();
    path.push(".hack");
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name() {
        assert_eq!(
            default_output(Path::new("prog/Max.asm")),
            PathBuf::from("prog/Max.asm.hack")
        );
    }

    #[test]
    fn round_trip_through_disk() {
        let dir = std::env::temp_dir().join(format!("hackasm-io-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("Add.asm");
        std::fs::write(&input, "@2\nD=A\n").unwrap();

        let source = read_source(&input).unwrap();
        let assembly = crate::assemble(&source).unwrap();
        let output = default_output(&input);
        write_output(&output, &assembly).unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "0000000000000010\n1110110000010000\n"
        );
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_input() {
        let err = read_source(Path::new("/nonexistent/hackasm/Missing.asm")).unwrap_err();
        assert!(matches!(err, Error::FileOpen(..)));
    }
}
