use super::{Month, Photo, PhotoLibrary};

const PLACEHOLDER_REF: &str = "https://placehold.co/150";

const YEARS: [i32; 3] = [2021, 2022, 2023];

/// Build the sample library shipped with the application.
///
pub fn library() -> PhotoLibrary {
    let photos = vec![
        Photo::new("1", 2023, Month::Jan, 2, PLACEHOLDER_REF),
        Photo::new("2", 2023, Month::Jan, 15, PLACEHOLDER_REF),
        Photo::new("3", 2023, Month::Feb, 3, PLACEHOLDER_REF),
        Photo::new("4", 2023, Month::Jan, 2, PLACEHOLDER_REF),
        Photo::new("5", 2023, Month::Jan, 2, PLACEHOLDER_REF),
        Photo::new("6", 2023, Month::Jan, 2, PLACEHOLDER_REF),
        Photo::new("7", 2023, Month::Jan, 2, PLACEHOLDER_REF),
    ];
    PhotoLibrary::new(photos, YEARS.to_vec())
}
