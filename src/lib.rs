//! Fold a sheet of transparent paper covered in dots.
//!
//! The puzzle input lists dot coordinates and a sequence of fold
//! instructions, separated by a blank line. Each fold reflects every dot on
//! or past the crease back onto the near side; dots that land on the same
//! cell merge. After all folds the surviving dots spell out a picture.
//!
//! Behaviors:
//! - Points are deduplicated set-style; a fold never grows the set.
//! - Folds apply strictly in input order.
//! - Malformed input is reported as a structured [`ParseError`], never a
//!   panic.
//! - Rendering marks dots with `#` and empty cells with a space.
//!
//! Quick start:
//!
//! ```
//! use paperfold::{fold_set, parse, render};
//!
//! let data = parse("0,0\n2,0\n\nfold along x=1\n".as_bytes()).expect("valid input");
//! let mut points = data.points;
//! for &fold in &data.folds {
//!     points = fold_set(&points, fold);
//! }
//! assert_eq!(points.len(), 1); // (2,0) folded onto (0,0)
//!
//! let mut out = Vec::new();
//! render(&points, &mut out).unwrap();
//! assert_eq!(out, b"#\n");
//! ```

pub mod geometry;
pub mod parser;
pub mod render;

pub use geometry::{Axis, Fold, Point, PointSet, fold_set};
pub use parser::{Data, ParseError, parse, parse_file};
pub use render::render;
