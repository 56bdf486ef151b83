use std::io::Write;

use anyhow::{Context, Result};
use quadsum_stream::{Error, InputSpec, STREAMS, digest_streams, open_group};
use tracing::{info, warn};

use crate::cli::app::App;
use crate::output::format_line;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub hashed: usize,
    pub failed: usize,
}

/// Hash every complete group of four in argument order.
///
/// A failing group is reported on `err` and skipped; only a failure to write
/// results to `out` aborts the run.
pub fn run<O: Write, E: Write>(app: &App, out: &mut O, err: &mut E) -> Result<Summary> {
    let options = app.digest_options();
    let groups = app.files.chunks_exact(STREAMS);
    let leftover = groups.remainder();
    let mut summary = Summary::default();

    for (index, group) in groups.enumerate() {
        let specs: [InputSpec; STREAMS] =
            std::array::from_fn(|i| InputSpec::from(group[i].as_path()));
        info!(group = index + 1, first = %specs[0], "hashing group");

        let hashed =
            open_group(&specs).and_then(|mut inputs| digest_streams(&mut inputs, &options));
        let digests = match hashed {
            Ok(digests) => digests,
            Err(e) => {
                warn!(group = index + 1, error = %e, "group skipped");
                report(err, &e)?;
                summary.failed += 1;
                continue;
            }
        };

        for (spec, digest) in specs.iter().zip(&digests) {
            writeln!(out, "{}", format_line(digest, spec, app.tag))
                .with_context(|| "Failed to write digest")?;
        }
        summary.hashed += 1;
    }

    if !leftover.is_empty() {
        writeln!(
            err,
            "Incomplete group: {} file(s) left over, files are hashed {STREAMS} at a time",
            leftover.len()
        )
        .with_context(|| "Failed to write diagnostic")?;
        summary.failed += 1;
    }

    Ok(summary)
}

fn report<E: Write>(err: &mut E, e: &Error) -> Result<()> {
    let written = match e {
        Error::OpenFailure { path, source } => {
            writeln!(err, "Could not open `{}': {source}", path.display())
        }
        other => writeln!(err, "Failed to hash! {other}"),
    };
    written.with_context(|| "Failed to write diagnostic")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use quadsum_stream::Blake2bHasher;
    use std::path::Path;
    use tempfile::tempdir;

    fn app(args: &[&str], files: &[&Path]) -> App {
        let mut argv: Vec<String> = vec!["quadsum".into()];
        argv.extend(args.iter().map(|a| a.to_string()));
        argv.extend(files.iter().map(|f| f.display().to_string()));
        App::try_parse_from(argv).unwrap()
    }

    fn run_to_strings(app: &App) -> (Summary, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = run(app, &mut out, &mut err).unwrap();
        (
            summary,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_one_group_prints_four_lines() {
        let dir = tempdir().unwrap();
        let paths: Vec<_> = (1..=4).map(|i| dir.path().join(format!("f{i}"))).collect();
        for path in &paths {
            std::fs::write(path, b"abc").unwrap();
        }
        let files: Vec<&Path> = paths.iter().map(|p| p.as_path()).collect();

        let (summary, out, err) = run_to_strings(&app(&["-l", "256"], &files));

        let hex = Blake2bHasher::digest(32, b"abc").unwrap().to_hex();
        let expected: String = paths
            .iter()
            .map(|p| format!("{hex}  {}\n", p.display()))
            .collect();
        assert_eq!(out, expected);
        assert!(err.is_empty());
        assert_eq!(summary, Summary { hashed: 1, failed: 0 });
    }

    #[test]
    fn test_failed_group_does_not_stop_later_groups() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good");
        let missing = dir.path().join("missing");
        let short = dir.path().join("short");
        std::fs::write(&good, b"0123456789").unwrap();
        std::fs::write(&short, b"012345678").unwrap();

        let files = [
            // open failure
            good.as_path(), missing.as_path(), good.as_path(), good.as_path(),
            // length mismatch
            good.as_path(), good.as_path(), short.as_path(), good.as_path(),
            // fine
            good.as_path(), good.as_path(), good.as_path(), good.as_path(),
        ];
        let (summary, out, err) = run_to_strings(&app(&["--tag"], &files));

        assert_eq!(summary, Summary { hashed: 1, failed: 2 });
        assert_eq!(out.lines().count(), 4);
        assert!(out.lines().all(|l| l.starts_with("BLAKE2b (")));

        let diagnostics: Vec<&str> = err.lines().collect();
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].starts_with("Could not open `"));
        assert!(diagnostics[0].contains("missing"));
        assert!(diagnostics[1].starts_with("Failed to hash!"));
    }

    #[test]
    fn test_incomplete_trailing_group() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("x");
        std::fs::write(&file, b"x").unwrap();

        let files = [file.as_path(); 6];
        let (summary, out, err) = run_to_strings(&app(&[], &files));

        assert_eq!(summary, Summary { hashed: 1, failed: 1 });
        assert_eq!(out.lines().count(), 4);
        assert!(err.starts_with("Incomplete group: 2 file(s)"));
    }
}
