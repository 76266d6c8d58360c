//! Plain-text results file
//!
//! Layout:
//!
//! ```text
//! Round length: 4
//!
//!
//! AlwaysCooperate  VS  AlwaysDefect
//! CCCC
//! DDDD
//! AlwaysCooperate score: 0.0
//!    AlwaysDefect score: 5.0
//!
//!
//!
//! AVERAGE SCORES
//! #1 AlwaysDefect:    5.0
//! #2 AlwaysCooperate: 0.0
//! ```

use std::io::Write;

use crate::error::Result;
use crate::leaderboard::Standing;
use crate::tournament::{PairingReport, TournamentReport};

/// Shortest representation that reads back to the same value, always with a fraction
pub fn format_score(score: f64) -> String {
    format!("{:?}", score)
}

/// Writes a run to any byte sink, one section at a time
pub struct ResultsWriter<W: Write> {
    out: W,
}

impl<W: Write> ResultsWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_header(&mut self, round_length: u32) -> Result<()> {
        write!(self.out, "Round length: {}\n\n\n", round_length)?;
        Ok(())
    }

    pub fn write_pairing(&mut self, pairing: &PairingReport) -> Result<()> {
        let width = pairing.name_a.len().max(pairing.name_b.len());
        writeln!(self.out, "{}  VS  {}", pairing.name_a, pairing.name_b)?;
        writeln!(self.out, "{}", pairing.transcript_a)?;
        writeln!(self.out, "{}", pairing.transcript_b)?;
        writeln!(self.out, "{:>width$} score: {}", pairing.name_a, format_score(pairing.score_a))?;
        write!(self.out, "{:>width$} score: {}\n\n\n", pairing.name_b, format_score(pairing.score_b))?;
        // keep completed pairings on disk if a later one aborts the run
        self.out.flush()?;
        Ok(())
    }

    pub fn write_standings(&mut self, standings: &[Standing]) -> Result<()> {
        write!(self.out, "\nAVERAGE SCORES\n")?;
        let rank_width = standings.len().to_string().len();
        let name_width = standings.iter().map(|s| s.name.len()).max().unwrap_or(0) + 1;
        for standing in standings {
            let label = format!("{}:", standing.name);
            writeln!(
                self.out,
                "#{:>rank_width$} {:<name_width$} {}",
                standing.rank,
                label,
                format_score(standing.average)
            )?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Whole report in one go
    pub fn write_report(&mut self, report: &TournamentReport) -> Result<()> {
        self.write_header(report.round_length)?;
        for pairing in &report.pairings {
            self.write_pairing(pairing)?;
        }
        self.write_standings(&report.standings)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
