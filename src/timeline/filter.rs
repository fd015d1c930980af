//! Filtering projections over the photo collection.
//!
//! Every function here is a pure, exact-match filter that keeps the source
//! order of the photos it returns.

use super::{Month, Photo};

/// Days per month, January first. February is fixed at 28 days.
///
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Return the number of days shown for the given month.
///
pub fn days_in_month(month: Month) -> u32 {
    DAYS_IN_MONTH[month.index()]
}

/// Return photos taken in the given year.
///
pub fn photos_in_year(photos: &[Photo], year: i32) -> Vec<&Photo> {
    photos.iter().filter(|p| p.year == year).collect()
}

/// Return photos taken in the given month of the given year.
///
pub fn photos_in_month(photos: &[Photo], year: i32, month: Month) -> Vec<&Photo> {
    photos
        .iter()
        .filter(|p| p.year == year && p.month == month)
        .collect()
}

/// Return photos taken on the given day.
///
pub fn photos_on_day(photos: &[Photo], year: i32, month: Month, day: u32) -> Vec<&Photo> {
    photos
        .iter()
        .filter(|p| p.year == year && p.month == month && p.day == day)
        .collect()
}

/// Group a month's photos by day, one bucket per day of the month starting at
/// day 1. Photos attributed to a day past the end of the month are not shown.
///
pub fn day_buckets(photos: &[Photo], year: i32, month: Month) -> Vec<(u32, Vec<&Photo>)> {
    (1..=days_in_month(month))
        .map(|day| (day, photos_on_day(photos, year, month, day)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::PhotoLibrary;
    use fake::{Fake, Faker};
    use std::collections::HashSet;

    fn fake_photos(count: usize) -> Vec<Photo> {
        (0..count)
            .map(|i| Photo {
                id: i.to_string(),
                ..Faker.fake::<Photo>()
            })
            .collect()
    }

    #[test]
    fn days_in_month_table() {
        assert_eq!(days_in_month(Month::Jan), 31);
        assert_eq!(days_in_month(Month::Feb), 28);
        assert_eq!(days_in_month(Month::Apr), 30);
        assert_eq!(days_in_month(Month::Dec), 31);
        let total: u32 = Month::ALL.iter().map(|m| days_in_month(*m)).sum();
        assert_eq!(total, 365);
    }

    #[test]
    fn photos_in_year_sample() {
        let library = PhotoLibrary::sample();
        assert_eq!(photos_in_year(library.photos(), 2023).len(), 7);
        assert!(photos_in_year(library.photos(), 2021).is_empty());
    }

    #[test]
    fn photos_in_month_sample() {
        let library = PhotoLibrary::sample();
        let jan = photos_in_month(library.photos(), 2023, Month::Jan);
        assert_eq!(jan.len(), 6);
        let feb = photos_in_month(library.photos(), 2023, Month::Feb);
        assert_eq!(feb.len(), 1);
        assert_eq!(feb[0].id, "3");
    }

    #[test]
    fn photos_on_day_keeps_source_order() {
        let library = PhotoLibrary::sample();
        let ids: Vec<&str> = photos_on_day(library.photos(), 2023, Month::Jan, 2)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "4", "5", "6", "7"]);
    }

    #[test]
    fn day_buckets_cover_the_whole_month() {
        let library = PhotoLibrary::sample();
        let buckets = day_buckets(library.photos(), 2023, Month::Feb);
        assert_eq!(buckets.len(), 28);
        assert_eq!(buckets.first().map(|(d, _)| *d), Some(1));
        assert_eq!(buckets.last().map(|(d, _)| *d), Some(28));
        assert_eq!(buckets[2].1.len(), 1);
    }

    #[test]
    fn day_buckets_match_exact_day_filter() {
        let photos = fake_photos(500);
        for year in 2021..2024 {
            for month in Month::ALL {
                for (day, bucket) in day_buckets(&photos, year, month) {
                    let expected: Vec<&Photo> = photos
                        .iter()
                        .filter(|p| p.year == year && p.month == month && p.day == day)
                        .collect();
                    assert_eq!(bucket, expected);
                }
            }
        }
    }

    #[test]
    fn day_buckets_place_each_photo_once() {
        let photos = fake_photos(500);
        for month in Month::ALL {
            let mut seen = HashSet::new();
            for (_, bucket) in day_buckets(&photos, 2022, month) {
                for photo in bucket {
                    assert!(seen.insert(photo.id.clone()), "photo {} listed twice", photo.id);
                }
            }
            let shown = photos
                .iter()
                .filter(|p| p.year == 2022 && p.month == month && p.day <= days_in_month(month))
                .count();
            assert_eq!(seen.len(), shown);
        }
    }

    #[test]
    fn day_buckets_skip_days_past_month_end() {
        let photos = vec![
            Photo::new("a", 2024, Month::Feb, 29, "ref"),
            Photo::new("b", 2024, Month::Feb, 28, "ref"),
        ];
        let buckets = day_buckets(&photos, 2024, Month::Feb);
        let shown: Vec<&str> = buckets
            .iter()
            .flat_map(|(_, b)| b.iter().map(|p| p.id.as_str()))
            .collect();
        assert_eq!(shown, vec!["b"]);
    }
}
