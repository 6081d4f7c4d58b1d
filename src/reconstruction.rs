//! Reconstructions: a scramble and the solve that was done on it, and checking that the solve
//! really solves the scramble.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::cube333::moves::Move333;
use crate::cube333::parse::{parse_required, strip_comment};
use crate::error::Error;
use crate::moves::MoveSequence;
use crate::simulator::Simulator;

/// Check that `solve` solves `scramble`: apply both, in order, to a solved `S` and ask it whether
/// it is still solved.
pub fn validate<S: Simulator>(
    scramble: &MoveSequence<Move333>,
    solve: &MoveSequence<Move333>,
) -> Result<bool, Error> {
    let state = S::solved()
        .apply(&scramble.canonical_string())?
        .apply(&solve.canonical_string())?;
    Ok(state.is_solved())
}

/// A solve of a scrambled cube, along with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    url: String,
    scramble: MoveSequence<Move333>,
    solve: MoveSequence<Move333>,
}

impl Reconstruction {
    /// Put together a reconstruction from already parsed moves.
    pub fn new(
        url: impl Into<String>,
        scramble: MoveSequence<Move333>,
        solve: MoveSequence<Move333>,
    ) -> Reconstruction {
        Reconstruction {
            url: url.into(),
            scramble,
            solve,
        }
    }

    /// Parse a scramble and a solve, both of which need to contain at least one move.
    pub fn from_notation(
        url: impl Into<String>,
        scramble: &str,
        solve: &str,
    ) -> Result<Reconstruction, Error> {
        Ok(Reconstruction::new(
            url,
            parse_required(scramble, "scramble")?,
            parse_required(solve, "solve")?,
        ))
    }

    /// Read a reconstruction block: the first non-blank line is the scramble, every line after it
    /// is part of the solve and may end in a `//` comment.
    ///
    /// ```text
    /// D2 R2 B' U2 F' R2 B L2 B' L' D' F L F U' R' D
    ///
    /// x2 // inspection
    /// R' F R U' D2 // cross
    /// ```
    pub fn from_text(url: impl Into<String>, text: &str) -> Result<Reconstruction, Error> {
        let mut lines = text.lines().map(str::trim_start).filter(|l| !l.is_empty());

        let scramble = lines.next().unwrap_or_default();
        let solve = lines.map(strip_comment).collect::<Vec<_>>().join(" ");

        let reconstruction = Reconstruction::from_notation(url, scramble, &solve)?;
        debug!(
            "{}: {} scramble moves, {} solve moves",
            reconstruction.url,
            reconstruction.scramble.len(),
            reconstruction.solve.len()
        );
        Ok(reconstruction)
    }

    /// Where this reconstruction came from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The scramble.
    pub fn scramble(&self) -> &MoveSequence<Move333> {
        &self.scramble
    }

    /// The solve.
    pub fn solve(&self) -> &MoveSequence<Move333> {
        &self.solve
    }

    /// Whether the solve solves the scramble on `S`.
    pub fn is_valid<S: Simulator>(&self) -> Result<bool, Error> {
        validate::<S>(&self.scramble, &self.solve)
    }

    /// Like [`is_valid`](Self::is_valid), but an unsolved cube is an error.
    pub fn check<S: Simulator>(&self) -> Result<(), Error> {
        if self.is_valid::<S>()? {
            Ok(())
        } else {
            Err(Error::ValidationFailed {
                url: self.url.clone(),
            })
        }
    }

    /// The form reconstructions are stored in.
    pub fn to_record(&self) -> Record {
        Record {
            url: self.url.clone(),
            scramble: self.scramble.symbols(),
            solve: self.solve.symbols(),
        }
    }
}

/// A reconstruction as it is written to disk, every move kept as the symbol it was written with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Where the reconstruction came from.
    pub url: String,
    /// Scramble symbols, e.g. `["R", "U2'"]`.
    pub scramble: Vec<String>,
    /// Solve symbols.
    pub solve: Vec<String>,
}

impl Record {
    /// Turn a stored record back into moves. Every symbol has to be a single catalog symbol.
    pub fn into_reconstruction(self) -> Result<Reconstruction, Error> {
        let moves = |symbols: Vec<String>| -> Result<MoveSequence<Move333>, Error> {
            symbols
                .iter()
                .map(|s| s.parse::<Move333>())
                .collect::<Result<Vec<_>, _>>()
                .map(MoveSequence)
        };
        Ok(Reconstruction::new(
            self.url,
            moves(self.scramble)?,
            moves(self.solve)?,
        ))
    }
}

/// Read and check a batch of reconstruction blocks, given as `(url, text)` pairs. Every block gets
/// its own result; a block that fails does not stop the rest.
pub fn check_all<S, I, U, T>(blocks: I) -> Vec<Result<Reconstruction, Error>>
where
    S: Simulator,
    I: IntoIterator<Item = (U, T)>,
    U: Into<String>,
    T: AsRef<str>,
{
    let results: Vec<_> = blocks
        .into_iter()
        .map(|(url, text)| {
            let url: String = url.into();
            let checked = Reconstruction::from_text(url.clone(), text.as_ref())
                .and_then(|r| r.check::<S>().map(|()| r));
            if let Err(e) = &checked {
                warn!("Error processing {url}: {e}");
            }
            checked
        })
        .collect();

    let valid = results.iter().filter(|r| r.is_ok()).count();
    info!("{valid} of {} reconstructions are valid", results.len());
    results
}
