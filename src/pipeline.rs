use std::io::Write;
use std::path::{Path, PathBuf};

use crate::classify::classify;
use crate::discover::find_first_containing;
use crate::error::ScanError;
use crate::extract::{echo_pages, join_pages};
use crate::keywords::{PERMIT_BANNER, PERMIT_CATEGORIES, SGI_BANNER, SGI_CATEGORIES};
use crate::model::MatchReport;
use crate::options::{PageLayout, PermitOptions, SgiOptions};
use crate::pdf_reader::PageSource;
use crate::persist::save_text;
use crate::report::{write_banner, write_reports};
use crate::warning::ScanWarning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Extraction produced nothing usable; analysis and saving were skipped.
    Aborted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRun {
    pub input: PathBuf,
    pub text: String,
    pub reports: Vec<MatchReport>,
    pub warnings: Vec<ScanWarning>,
    pub outcome: Outcome,
}

impl PipelineRun {
    fn aborted(input: PathBuf, warnings: Vec<ScanWarning>) -> Self {
        Self {
            input,
            text: String::new(),
            reports: Vec::new(),
            warnings,
            outcome: Outcome::Aborted,
        }
    }
}

fn ensure_exists(path: &Path) -> Result<(), ScanError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ScanError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Electrical permit: page-marked text saved first, then four category reports.
///
/// # Errors
///
/// Returns [`ScanError::FileNotFound`] for a missing input, an extraction
/// error when the document cannot be parsed, or an I/O error on output.
pub fn run_electrical_permit(
    options: &PermitOptions,
    source: &impl PageSource,
    out: &mut impl Write,
) -> Result<PipelineRun, ScanError> {
    ensure_exists(&options.input)?;

    writeln!(out, "Extraction du contenu du PDF Permis Électrique...")?;
    let extraction = source.read_pages(&options.input)?;
    tracing::debug!(pages = extraction.page_count(), "permit document read");

    let text = join_pages(&extraction.pages, PageLayout::Marked);
    save_text(&options.output, &text)?;
    writeln!(out, "Contenu sauvegardé dans: {}", options.output.display())?;

    write_banner(out, PERMIT_BANNER)?;
    let reports = classify(&text, &PERMIT_CATEGORIES);
    write_reports(out, &reports)?;

    Ok(PipelineRun {
        input: options.input.clone(),
        text,
        reports,
        warnings: extraction.warnings,
        outcome: Outcome::Completed,
    })
}

/// The explicit input, or the first matching file in the document folder.
///
/// # Errors
///
/// Returns [`ScanError::NoMatchingFile`] when no file name matches, or
/// [`ScanError::ListDir`] when the folder cannot be listed.
pub fn resolve_sgi_input(options: &SgiOptions) -> Result<PathBuf, ScanError> {
    if let Some(input) = &options.input {
        return Ok(input.clone());
    }

    find_first_containing(&options.doc_dir, &options.name_contains)?.ok_or_else(|| {
        ScanError::NoMatchingFile {
            dir: options.doc_dir.clone(),
            needle: options.name_contains.clone(),
        }
    })
}

/// SGI document: pages echoed while read, two reports, raw text saved last.
///
/// Extraction failures and empty documents end the run early with
/// [`Outcome::Aborted`] instead of an error.
///
/// # Errors
///
/// Returns an error when the input cannot be resolved or found, or on I/O
/// failures while printing or saving.
pub fn run_sgi_document(
    options: &SgiOptions,
    source: &impl PageSource,
    out: &mut impl Write,
) -> Result<PipelineRun, ScanError> {
    let input = resolve_sgi_input(options)?;
    ensure_exists(&input)?;

    writeln!(out, "Extraction du contenu du PDF...")?;
    let extraction = match source.read_pages(&input) {
        Ok(extraction) => extraction,
        Err(error) if error.is_extraction_failure() => {
            tracing::debug!(%error, "SGI extraction failed");
            writeln!(out, "Erreur lors de l'extraction: {error}")?;
            writeln!(out, "Échec de l'extraction du contenu")?;
            return Ok(PipelineRun::aborted(input, Vec::new()));
        }
        Err(error) => return Err(error),
    };

    echo_pages(out, &extraction.pages)?;
    let text = join_pages(&extraction.pages, PageLayout::Raw);
    if text.is_empty() {
        writeln!(out, "Échec de l'extraction du contenu")?;
        return Ok(PipelineRun::aborted(input, extraction.warnings));
    }

    writeln!(out)?;
    write_banner(out, SGI_BANNER)?;
    let reports = classify(&text, &SGI_CATEGORIES);
    write_reports(out, &reports)?;

    save_text(&options.output, &text)?;
    writeln!(out)?;
    writeln!(out, "Contenu sauvegardé dans: {}", options.output.display())?;

    Ok(PipelineRun {
        input,
        text,
        reports,
        warnings: extraction.warnings,
        outcome: Outcome::Completed,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use pretty_assertions::assert_eq;
    use tempfile::{TempDir, tempdir};

    use super::{Outcome, resolve_sgi_input, run_electrical_permit, run_sgi_document};
    use crate::error::ScanError;
    use crate::model::Extraction;
    use crate::options::{PermitOptions, SgiOptions};
    use crate::pdf_reader::{PageSource, StaticPages};

    struct FailingSource;

    impl PageSource for FailingSource {
        fn read_pages(&self, _input: &Path) -> Result<Extraction, ScanError> {
            Err(ScanError::PdfExtract("stream ended early".to_string()))
        }
    }

    fn workspace() -> (TempDir, PathBuf) {
        let dir = tempdir().expect("tempdir should be created");
        let input = dir.path().join("input.pdf");
        fs::write(&input, b"%PDF-1.5").expect("placeholder input");
        (dir, input)
    }

    fn printed(out: Vec<u8>) -> String {
        String::from_utf8(out).expect("utf-8 console output")
    }

    #[test]
    fn permit_run_saves_marked_text_and_reports() {
        let (dir, input) = workspace();
        let options = PermitOptions {
            input,
            output: dir.path().join("permit.txt"),
        };
        let source = StaticPages::new(["Permis de travail\nNom: Dupont\nHabilitation B1V"]);

        let mut out = Vec::new();
        let run = run_electrical_permit(&options, &source, &mut out).expect("run should succeed");

        assert_eq!(run.outcome, Outcome::Completed);
        let saved = fs::read_to_string(&options.output).expect("output saved");
        assert_eq!(saved, run.text);
        assert!(saved.starts_with("--- PAGE 1 ---\n\nPermis de travail\n"));

        let console = printed(out);
        assert!(console.starts_with("Extraction du contenu du PDF Permis Électrique...\n"));
        assert!(console.contains("ANALYSE DU CONTENU - PERMIS ÉLECTRIQUE"));
        assert!(
            console.contains("\nNIVEAUX D'HABILITATION IDENTIFIÉS:\nLigne 4: Habilitation B1V\n")
        );
        assert!(console.contains("Ligne 3: Nom: Dupont"));
    }

    #[test]
    fn permit_run_indexes_include_marker_lines() {
        let (dir, input) = workspace();
        let options = PermitOptions {
            input,
            output: dir.path().join("permit.txt"),
        };
        let source = StaticPages::new(["Signature"]);

        let run = run_electrical_permit(&options, &source, &mut Vec::<u8>::new())
            .expect("run should succeed");
        let required = &run.reports[1];
        assert_eq!(required.matches.len(), 1);
        assert_eq!(required.matches[0].index, 2);
    }

    #[test]
    fn permit_run_with_no_pages_saves_empty_text() {
        let (dir, input) = workspace();
        let options = PermitOptions {
            input,
            output: dir.path().join("permit.txt"),
        };

        let run = run_electrical_permit(&options, &StaticPages::default(), &mut Vec::<u8>::new())
            .expect("run should succeed");
        assert_eq!(run.text, "");
        assert!(run.reports.iter().all(|report| report.is_empty()));
        assert_eq!(fs::read_to_string(&options.output).expect("saved"), "");
    }

    #[test]
    fn permit_run_reports_missing_input() {
        let dir = tempdir().expect("tempdir should be created");
        let options = PermitOptions {
            input: dir.path().join("absent.pdf"),
            output: dir.path().join("permit.txt"),
        };

        let mut out = Vec::<u8>::new();
        let error = run_electrical_permit(&options, &StaticPages::default(), &mut out)
            .expect_err("missing input should fail");
        assert!(matches!(error, ScanError::FileNotFound { .. }), "{error:?}");
        assert!(out.is_empty());
        assert!(!options.output.exists());
    }

    #[test]
    fn permit_run_propagates_extraction_failure() {
        let (dir, input) = workspace();
        let options = PermitOptions {
            input,
            output: dir.path().join("permit.txt"),
        };

        let error = run_electrical_permit(&options, &FailingSource, &mut Vec::<u8>::new())
            .expect_err("extraction failure should propagate");
        assert!(error.is_extraction_failure());
        assert!(!options.output.exists());
    }

    #[test]
    fn sgi_run_echoes_pages_then_reports_then_saves() {
        let (dir, input) = workspace();
        let options = SgiOptions {
            input: Some(input),
            output: dir.path().join("sgi.txt"),
            ..SgiOptions::default()
        };
        let source = StaticPages::new(["1. OBJET\nChamp requis *\n", "texte libre"]);

        let mut out = Vec::new();
        let run = run_sgi_document(&options, &source, &mut out).expect("run should succeed");

        assert_eq!(run.outcome, Outcome::Completed);
        assert_eq!(run.text, "1. OBJET\nChamp requis *\ntexte libre");
        assert_eq!(
            fs::read_to_string(&options.output).expect("saved"),
            run.text
        );

        let console = printed(out);
        let rule = "=".repeat(80);
        let expected = format!(
            "Extraction du contenu du PDF...\n\
             Nombre de pages: 2\n{rule}\n\
             \n--- PAGE 1 ---\n1. OBJET\nChamp requis *\n\n{dashes}\n\
             \n--- PAGE 2 ---\ntexte libre\n{dashes}\n\
             \n{rule}\nANALYSE DU CONTENU\n{rule}\n\
             \nSECTIONS IDENTIFIÉES:\nLigne 0: 1. OBJET\n\
             \nCHAMPS OBLIGATOIRES IDENTIFIÉS:\nLigne 1: Champ requis *\n\
             \nContenu sauvegardé dans: {}\n",
            options.output.display(),
            dashes = "-".repeat(40),
        );
        assert_eq!(console, expected);
    }

    #[test]
    fn sgi_run_aborts_gracefully_on_extraction_failure() {
        let (dir, input) = workspace();
        let options = SgiOptions {
            input: Some(input),
            output: dir.path().join("sgi.txt"),
            ..SgiOptions::default()
        };

        let mut out = Vec::new();
        let run = run_sgi_document(&options, &FailingSource, &mut out).expect("graceful abort");

        assert_eq!(run.outcome, Outcome::Aborted);
        assert!(run.reports.is_empty());
        assert!(!options.output.exists());
        let console = printed(out);
        assert!(console.contains(
            "Erreur lors de l'extraction: failed to extract PDF text: stream ended early"
        ));
        assert!(console.ends_with("Échec de l'extraction du contenu\n"));
    }

    #[test]
    fn sgi_run_treats_empty_document_as_failure() {
        let (dir, input) = workspace();
        let options = SgiOptions {
            input: Some(input),
            output: dir.path().join("sgi.txt"),
            ..SgiOptions::default()
        };

        let mut out = Vec::new();
        let run = run_sgi_document(&options, &StaticPages::default(), &mut out)
            .expect("graceful abort");
        assert_eq!(run.outcome, Outcome::Aborted);
        assert!(!options.output.exists());
        assert!(printed(out).contains("Nombre de pages: 0"));
    }

    #[test]
    fn sgi_input_is_discovered_in_doc_folder() {
        let dir = tempdir().expect("tempdir should be created");
        fs::write(dir.path().join("Permis electrique_.pdf"), b"").expect("fixture");
        fs::write(dir.path().join("SGI-PPHSSES-TOA-601.pdf"), b"").expect("fixture");
        let options = SgiOptions {
            doc_dir: dir.path().to_path_buf(),
            ..SgiOptions::default()
        };

        let input = resolve_sgi_input(&options).expect("SGI file should be found");
        assert_eq!(input, dir.path().join("SGI-PPHSSES-TOA-601.pdf"));
    }

    #[test]
    fn sgi_without_candidate_is_no_matching_file() {
        let dir = tempdir().expect("tempdir should be created");
        fs::write(dir.path().join("Permis electrique_.pdf"), b"").expect("fixture");
        let options = SgiOptions {
            doc_dir: dir.path().to_path_buf(),
            output: dir.path().join("sgi.txt"),
            ..SgiOptions::default()
        };

        let error = run_sgi_document(&options, &StaticPages::new(["x"]), &mut Vec::<u8>::new())
            .expect_err("no candidate should fail");
        assert!(matches!(error, ScanError::NoMatchingFile { .. }), "{error:?}");
    }
}
