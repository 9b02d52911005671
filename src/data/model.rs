use std::fmt;

// ---------------------------------------------------------------------------
// Record – one data line of the source file
// ---------------------------------------------------------------------------

/// A single `TIME VALUE COLOR` triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub time: f64,
    pub value: f64,
    /// Weight fed into the colour scale.
    pub color: f64,
}

impl Record {
    pub fn new(time: f64, value: f64, color: f64) -> Self {
        Record { time, value, color }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.time, self.value, self.color)
    }
}

// ---------------------------------------------------------------------------
// Range / Bounds – per-column extents
// ---------------------------------------------------------------------------

/// Closed interval `[min, max]` over the finite values of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Extent of the finite values in `values`, `None` if there are none.
    pub fn of(values: &[f64]) -> Option<Range> {
        values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(Range { min: v, max: v }),
                Some(r) => Some(Range {
                    min: r.min.min(v),
                    max: r.max.max(v),
                }),
            })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub time: Range,
    pub value: Range,
    pub color: Range,
}

// ---------------------------------------------------------------------------
// Dataset – three index-aligned columns
// ---------------------------------------------------------------------------

/// The parsed contents of one file.
///
/// `time[i]`, `value[i]` and `color[i]` always describe the same record.
/// The columns are private and only grow together through [`Dataset::push`],
/// so their lengths can never diverge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    time: Vec<f64>,
    value: Vec<f64>,
    color: Vec<f64>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Dataset {
            time: Vec::with_capacity(capacity),
            value: Vec::with_capacity(capacity),
            color: Vec::with_capacity(capacity),
        }
    }

    /// Append one record to all three columns.
    pub fn push(&mut self, record: Record) {
        self.time.push(record.time);
        self.value.push(record.value);
        self.color.push(record.color);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn value(&self) -> &[f64] {
        &self.value
    }

    pub fn color(&self) -> &[f64] {
        &self.color
    }

    pub fn get(&self, index: usize) -> Option<Record> {
        Some(Record {
            time: *self.time.get(index)?,
            value: *self.value.get(index)?,
            color: *self.color.get(index)?,
        })
    }

    /// Iterate over the records in file order.
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.time
            .iter()
            .zip(&self.value)
            .zip(&self.color)
            .map(|((&time, &value), &color)| Record { time, value, color })
    }

    /// Per-column extents, `None` unless every column has a finite value.
    pub fn bounds(&self) -> Option<Bounds> {
        Some(Bounds {
            time: Range::of(&self.time)?,
            value: Range::of(&self.value)?,
            color: Range::of(&self.color)?,
        })
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut dataset = Dataset::with_capacity(iter.size_hint().0);
        for record in iter {
            dataset.push(record);
        }
        dataset
    }
}

impl Extend<Record> for Dataset {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}
