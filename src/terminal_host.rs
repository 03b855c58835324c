use jenkins_dashboard::{JobSummary, OutputSurface, SelectionUi};
use std::io::{BufRead, Write};

/// Numbered job list on the terminal. An empty line, `q` or end of input cancels.
pub struct TerminalPicker<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPicker<R, W> {
    pub fn new(input: R, output: W) -> TerminalPicker<R, W> {
        TerminalPicker { input, output }
    }

    fn prompt(&mut self, jobs: &[JobSummary]) -> std::io::Result<Option<usize>> {
        for (i, job) in jobs.iter().enumerate() {
            writeln!(self.output, "{:>3}) {:<8} {}", i + 1, job.status, job.name)?;
        }

        loop {
            write!(self.output, "Pick a job (1-{}, q to cancel): ", jobs.len())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let answer = line.trim();
            if answer.is_empty() || answer.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(n) if n >= 1 && n <= jobs.len() => return Ok(Some(n - 1)),
                _ => writeln!(self.output, "'{}' is not one of the listed jobs.", answer)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> SelectionUi for TerminalPicker<R, W> {
    fn select(&mut self, jobs: &[JobSummary]) -> Option<usize> {
        match self.prompt(jobs) {
            Ok(picked) => picked,
            Err(e) => {
                warn!("Unable to read the job selection: {}", e);
                None
            }
        }
    }
}

pub struct TextPanel<W> {
    output: W,
}

impl<W: Write> TextPanel<W> {
    pub fn new(output: W) -> TextPanel<W> {
        TextPanel { output }
    }
}

impl<W: Write> OutputSurface for TextPanel<W> {
    fn show(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{}", text) {
            warn!("Unable to write the command output: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jenkins_dashboard::JobStatus;

    fn jobs() -> Vec<JobSummary> {
        vec![
            JobSummary {
                name: "app".to_string(),
                status: JobStatus::Success,
            },
            JobSummary {
                name: "lib".to_string(),
                status: JobStatus::Failure,
            },
        ]
    }

    fn pick(input: &str) -> (Option<usize>, String) {
        let mut output = Vec::new();
        let picked = TerminalPicker::new(input.as_bytes(), &mut output).select(&jobs());
        (picked, String::from_utf8(output).unwrap())
    }

    #[test]
    fn picks_are_one_based() {
        let (picked, shown) = pick("2\n");
        assert_eq!(picked, Some(1));
        assert!(shown.contains("  1) SUCCESS  app"));
        assert!(shown.contains("  2) FAILURE  lib"));
    }

    #[test]
    fn invalid_answers_are_asked_again() {
        let (picked, shown) = pick("7\nabc\n1\n");
        assert_eq!(picked, Some(0));
        assert!(shown.contains("'7' is not one of the listed jobs."));
        assert!(shown.contains("'abc' is not one of the listed jobs."));
    }

    #[test]
    fn blank_q_and_eof_cancel() {
        assert_eq!(pick("\n").0, None);
        assert_eq!(pick("q\n").0, None);
        assert_eq!(pick("").0, None);
    }

    #[test]
    fn panel_writes_text_verbatim() {
        let mut output = Vec::new();
        TextPanel::new(&mut output).show("HTTP Status Code: 201");
        assert_eq!(String::from_utf8(output).unwrap(), "HTTP Status Code: 201\n");
    }
}
