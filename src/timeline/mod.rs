//! Photo timeline data module.
//!
//! This module holds the read-only photo data the application browses:
//! - `Photo` records attributed to a year, month and day
//! - The `Month` calendar enum
//! - `PhotoLibrary`, the ordered photo collection plus the years on offer
//! - Pure filtering projections used by every view

mod filter;
mod sample;

pub use filter::{day_buckets, days_in_month, photos_in_month, photos_in_year, photos_on_day};

use fake::Dummy;
use std::fmt;

/// Specifying the twelve calendar months.
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, Dummy)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months in calendar order.
    ///
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Return the zero-based position of the month in the year.
    ///
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Return the month at the given zero-based position, if any.
    ///
    pub fn from_index(index: usize) -> Option<Month> {
        Month::ALL.get(index).copied()
    }

    /// Return the three-letter label.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Defines photo data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Photo {
    pub id: String,
    #[dummy(faker = "2021..2024")]
    pub year: i32,
    pub month: Month,
    #[dummy(faker = "1..32")]
    pub day: u32,
    pub image_ref: String,
}

impl Photo {
    pub fn new(id: &str, year: i32, month: Month, day: u32, image_ref: &str) -> Self {
        Photo {
            id: id.to_owned(),
            year,
            month,
            day,
            image_ref: image_ref.to_owned(),
        }
    }
}

/// Read-only photo collection together with the years offered for browsing.
///
#[derive(Clone, Debug, Default)]
pub struct PhotoLibrary {
    photos: Vec<Photo>,
    years: Vec<i32>,
}

impl PhotoLibrary {
    /// Return a new library. Years are kept in the order given and are not
    /// derived from the photos, so a year may be offered without photos.
    ///
    pub fn new(photos: Vec<Photo>, years: Vec<i32>) -> Self {
        PhotoLibrary { photos, years }
    }

    /// Return the built-in sample library.
    ///
    pub fn sample() -> Self {
        sample::library()
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Return the position of the given year in the offered years.
    ///
    pub fn year_index(&self, year: i32) -> Option<usize> {
        self.years.iter().position(|y| *y == year)
    }
}
