//! Polygon fixture files: parsing and expected-vs-actual checking.
//!
//! A fixture is a whitespace separated stream of records:
//!
//! ```text
//! n            vertex count
//! x,y          repeated n times
//! flag         Yes / Y (any case) for convex, anything else for not convex
//! count        expected vertex count
//! perimeter    expected effective perimeter
//! ```
//!
//! The effective perimeter is the raw perimeter for convex polygons and `0`
//! for non-convex ones, so a non-convex record must list `0`.

use std::path::Path;

use crate::error::{DatasetError, PolygonError};
use crate::geometry::{Point, Polygon};

/// Comparison tolerance for perimeters; fixture values are rounded.
pub const FIXTURE_TOLERANCE: f64 = 1e-2;

/// One polygon record with its expected properties.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonRecord {
    /// 1-based position in the fixture.
    pub index: usize,
    pub points: Vec<Point>,
    /// The convex flag token as written.
    pub convex_token: String,
    pub expected_convex: bool,
    pub expected_num_points: usize,
    pub expected_perimeter: f64,
}

impl PolygonRecord {
    /// Builds a polygon whose capacity is the record's vertex count.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::CapacityExceeded` only if the record is
    /// internally inconsistent.
    pub fn build(&self) -> Result<Polygon, PolygonError> {
        Polygon::from_points(self.points.len(), self.points.iter().copied())
    }
}

/// Outcome of a single named check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub name: &'static str,
    pub passed: bool,
}

/// Actual properties of one record and the checks run against them.
#[derive(Debug, Clone)]
pub struct RecordReport {
    pub record: PolygonRecord,
    pub polygon: Polygon,
    pub actual_convex: bool,
    pub raw_perimeter: f64,
    pub effective_perimeter: f64,
    pub checks: Vec<Check>,
}

impl RecordReport {
    /// Checks that failed.
    pub fn failures(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// Pass/fail totals over all checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    /// Tallies every check of every report.
    #[must_use]
    pub fn from_reports(reports: &[RecordReport]) -> Self {
        reports
            .iter()
            .flat_map(|r| &r.checks)
            .fold(Self::default(), |mut s, c| {
                if c.passed {
                    s.passed += 1;
                } else {
                    s.failed += 1;
                }
                s
            })
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Returns `true` for the truthy convex flag forms `yes` and `y`, in any case.
#[must_use]
pub fn parse_flag(token: &str) -> bool {
    token.eq_ignore_ascii_case("yes") || token.eq_ignore_ascii_case("y")
}

struct Tokens<'a> {
    inner: std::iter::Peekable<std::str::SplitWhitespace<'a>>,
    record: usize,
}

impl<'a> Tokens<'a> {
    fn field(&mut self, field: &'static str) -> Result<&'a str, DatasetError> {
        self.inner.next().ok_or(DatasetError::MissingField {
            record: self.record,
            field,
        })
    }

    fn number<T: std::str::FromStr>(&mut self, field: &'static str) -> Result<T, DatasetError> {
        let token = self.field(field)?;
        token.parse().map_err(|_| DatasetError::BadNumber {
            record: self.record,
            field,
            token: token.to_owned(),
        })
    }

    /// Reads `x,y`. Whitespace may surround the comma, so `x,` `y`,
    /// `x` `,y` and `x` `,` `y` are accepted as well.
    fn point(&mut self) -> Result<Point, DatasetError> {
        let token = self.field("point")?;
        let (x, rest) = match token.split_once(',') {
            Some((x, y)) => (x, y),
            None => match self.inner.next_if(|next| next.starts_with(',')) {
                Some(next) => (token, &next[1..]),
                None => {
                    return Err(DatasetError::BadPoint {
                        record: self.record,
                        token: token.to_owned(),
                    })
                }
            },
        };
        let y = if rest.is_empty() {
            self.field("point")?
        } else {
            rest
        };
        let bad = || DatasetError::BadPoint {
            record: self.record,
            token: token.to_owned(),
        };
        let x: f64 = x.parse().map_err(|_| bad())?;
        let y: f64 = y.parse().map_err(|_| bad())?;
        Ok(Point::new(x, y))
    }
}

/// Parses every record of a fixture.
///
/// # Errors
///
/// A malformed or truncated record aborts the parse with a `DatasetError`
/// naming the 1-based record and the offending field.
pub fn parse(input: &str) -> Result<Vec<PolygonRecord>, DatasetError> {
    let mut tokens = Tokens {
        inner: input.split_whitespace().peekable(),
        record: 0,
    };
    let mut records = Vec::new();

    loop {
        let Some(count_token) = tokens.inner.next() else {
            break;
        };
        tokens.record += 1;
        let n: usize = count_token.parse().map_err(|_| DatasetError::BadNumber {
            record: tokens.record,
            field: "vertex count",
            token: count_token.to_owned(),
        })?;

        let points = (0..n)
            .map(|_| tokens.point())
            .collect::<Result<Vec<_>, _>>()?;
        let convex_token = tokens.field("convex flag")?.to_owned();
        let expected_num_points = tokens.number("expected vertex count")?;
        let expected_perimeter = tokens.number("expected perimeter")?;

        records.push(PolygonRecord {
            index: tokens.record,
            points,
            expected_convex: parse_flag(&convex_token),
            convex_token,
            expected_num_points,
            expected_perimeter,
        });
    }

    Ok(records)
}

/// Reads and parses a fixture file.
///
/// # Errors
///
/// Returns `DatasetError::Io` if the file cannot be read, or any parse error.
pub fn load(path: &Path) -> Result<Vec<PolygonRecord>, DatasetError> {
    let input = std::fs::read_to_string(path)?;
    let records = parse(&input)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded polygon fixture");
    Ok(records)
}

fn almost_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= FIXTURE_TOLERANCE
}

/// Builds the record's polygon and compares its properties with the expected ones.
///
/// # Errors
///
/// Returns `DatasetError::Polygon` if the polygon cannot be built.
pub fn check(record: &PolygonRecord) -> Result<RecordReport, DatasetError> {
    let polygon = record.build().map_err(|source| DatasetError::Polygon {
        record: record.index,
        source,
    })?;

    let actual_convex = polygon.is_convex();
    let raw_perimeter = polygon.perimeter();
    let effective_perimeter = if actual_convex { raw_perimeter } else { 0.0 };

    let mut checks = vec![
        Check {
            name: "vertex count matches",
            passed: polygon.num_points() == record.expected_num_points,
        },
        Check {
            name: "convex flag matches",
            passed: actual_convex == record.expected_convex,
        },
    ];
    if !actual_convex {
        checks.push(Check {
            name: "non-convex polygon lists zero perimeter",
            passed: almost_equal(record.expected_perimeter, 0.0),
        });
    }
    checks.push(Check {
        name: "effective perimeter matches",
        passed: almost_equal(effective_perimeter, record.expected_perimeter),
    });

    for c in checks.iter().filter(|c| !c.passed) {
        tracing::warn!(record = record.index, check = c.name, "fixture check failed");
    }

    Ok(RecordReport {
        record: record.clone(),
        polygon,
        actual_convex,
        raw_perimeter,
        effective_perimeter,
        checks,
    })
}

/// Checks every record.
///
/// # Errors
///
/// Stops at the first record whose polygon cannot be built.
pub fn check_all(records: &[PolygonRecord]) -> Result<Vec<RecordReport>, DatasetError> {
    records.iter().map(check).collect()
}
