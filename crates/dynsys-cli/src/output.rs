//! Human and JSON rendering of command reports.

use std::fmt::Display;
use std::io::Write;

use serde::Serialize;

use crate::error::{CliError, Result};

/// Write `report` as one JSON line or as its human form.
pub fn emit<R, W>(out: &mut W, json: bool, report: &R) -> Result<()>
where
    R: Serialize + Display,
    W: Write + ?Sized,
{
    if json {
        serde_json::to_writer(&mut *out, report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{report}")?;
    }
    Ok(())
}

/// Print `error` once and return its exit code.
pub fn report_error<W: Write + ?Sized>(err: &mut W, error: &CliError) -> i32 {
    let _ = writeln!(err, "{error}");
    error.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Serialize)]
    struct Sample {
        value: u8,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "value={}", self.value)
        }
    }

    #[test]
    fn json_and_human() {
        let mut buf = Vec::new();
        emit(&mut buf, true, &Sample { value: 7 }).expect("json");
        emit(&mut buf, false, &Sample { value: 7 }).expect("human");
        assert_eq!(String::from_utf8(buf).expect("utf8"), "{\"value\":7}\nvalue=7\n");
    }

    #[test]
    fn errors_are_reported_once() {
        let mut buf = Vec::new();
        let code = report_error(&mut buf, &CliError::invalid("order needs --count or --items"));
        assert_eq!(code, 2);
        assert_eq!(
            String::from_utf8(buf).expect("utf8"),
            "invalid argument: order needs --count or --items\n"
        );
    }
}
