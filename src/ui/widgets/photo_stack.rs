//! Scattered thumbnail stack.
//!
//! A stack draws up to `MAX_THUMBNAILS` tiles on a small circle around the
//! centre of its area, each tilted and layered at random. Randomness comes from
//! a per-stack seed so a stack keeps its look between frames.

use crate::timeline::{Month, Photo};
use crate::ui::theme::Theme;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use std::f64::consts::PI;

pub const MAX_THUMBNAILS: usize = 10;

/// Largest tilt in degrees either way.
///
pub const MAX_ROTATION: f64 = 25.0;

/// Circle radius as a share of the stack's width and height.
///
const RADIUS_RATIO: f64 = 25.0 / 160.0;

const EMPTY_LABEL: &str = "No photos";

/// Position of one thumbnail relative to the stack centre.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Offset on the unit circle
    pub dx: f64,
    pub dy: f64,
    /// Tilt in degrees, within `[-MAX_ROTATION, MAX_ROTATION)`
    pub rotation: f64,
    /// Draw order, 1 is drawn first
    pub z: usize,
}

/// Lay out a stack of `count` photos. Only the first `MAX_THUMBNAILS` get a
/// placement, but the angle step is spread over the whole count.
///
pub fn scatter<R: Rng>(count: usize, rng: &mut R) -> Vec<Placement> {
    let mut z_order: Vec<usize> = (1..=count).collect();
    z_order.shuffle(rng);
    (0..count.min(MAX_THUMBNAILS))
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / count as f64;
            Placement {
                dx: angle.cos(),
                dy: angle.sin(),
                rotation: rng.gen_range(-MAX_ROTATION..MAX_ROTATION),
                z: z_order[i],
            }
        })
        .collect()
}

/// Identifies the period a stack is drawn for.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackKey {
    Year(i32),
    Month(i32, Month),
    Day(i32, Month, u32),
}

impl StackKey {
    fn value(&self) -> u64 {
        let (year, month, day) = match *self {
            StackKey::Year(year) => (year, 0, 0),
            StackKey::Month(year, month) => (year, month.index() as u64 + 1, 0),
            StackKey::Day(year, month, day) => (year, month.index() as u64 + 1, day as u64),
        };
        ((year as u64) << 16) | (month << 8) | day
    }

    /// Return the RNG that decorates this stack for the given session seed.
    ///
    pub fn rng(&self, session_seed: u64) -> StdRng {
        StdRng::seed_from_u64(session_seed ^ self.value().wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

/// Tile drawn for a thumbnail, leaning with its tilt.
///
fn tile(rotation: f64) -> &'static str {
    if rotation < -MAX_ROTATION / 3.0 {
        "╲▣╲"
    } else if rotation > MAX_ROTATION / 3.0 {
        "╱▣╱"
    } else {
        "[▣]"
    }
}

/// Widget drawing a photo stack into its area.
///
pub struct PhotoStack<'a> {
    photos: &'a [&'a Photo],
    key: StackKey,
    seed: u64,
    revealed: usize,
    theme: &'a Theme,
}

impl<'a> PhotoStack<'a> {
    pub fn new(photos: &'a [&'a Photo], key: StackKey, seed: u64, theme: &'a Theme) -> Self {
        PhotoStack {
            photos,
            key,
            seed,
            revealed: MAX_THUMBNAILS,
            theme,
        }
    }

    /// Show only the first `revealed` thumbnails.
    ///
    pub fn revealed(mut self, revealed: usize) -> Self {
        self.revealed = revealed;
        self
    }
}

impl Widget for PhotoStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let centre_x = area.x as f64 + area.width as f64 / 2.0;
        let centre_y = area.y as f64 + area.height as f64 / 2.0;

        if self.photos.is_empty() {
            let width = (EMPTY_LABEL.len() as u16).min(area.width);
            let x = area.x + (area.width - width) / 2;
            buf.set_stringn(
                x,
                centre_y as u16,
                EMPTY_LABEL,
                width as usize,
                Style::default()
                    .fg(self.theme.text_muted.to_color())
                    .add_modifier(Modifier::ITALIC),
            );
            return;
        }

        let radius_x = (area.width as f64 * RADIUS_RATIO).max(1.0);
        let radius_y = (area.height as f64 * RADIUS_RATIO).max(0.5);
        let colors = [
            self.theme.primary.to_color(),
            self.theme.secondary.to_color(),
            self.theme.accent.to_color(),
            self.theme.info.to_color(),
        ];

        let mut rng = self.key.rng(self.seed);
        let mut placements: Vec<(usize, Placement)> = scatter(self.photos.len(), &mut rng)
            .into_iter()
            .enumerate()
            .take(self.revealed)
            .collect();
        placements.sort_by_key(|(_, placement)| placement.z);

        for (i, placement) in placements {
            let tile = tile(placement.rotation);
            let tile_width = tile.chars().count() as f64;
            let x = (centre_x + placement.dx * radius_x - tile_width / 2.0).round();
            let y = (centre_y + placement.dy * radius_y).round();
            let max_x = (area.right() as f64 - tile_width).max(area.x as f64);
            let x = x.clamp(area.x as f64, max_x) as u16;
            let y = y.clamp(area.y as f64, (area.bottom() - 1) as f64) as u16;
            buf.set_stringn(
                x,
                y,
                tile,
                (area.right() - x) as usize,
                Style::default().fg(colors[i % colors.len()]),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_caps_thumbnails() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(scatter(3, &mut rng).len(), 3);
        assert_eq!(scatter(25, &mut rng).len(), MAX_THUMBNAILS);
        assert!(scatter(0, &mut rng).is_empty());
    }

    #[test]
    fn scatter_spreads_angles_over_full_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let placements = scatter(20, &mut rng);
        // With 20 photos only half the circle is used by the first 10
        assert!(placements.iter().all(|p| p.dy >= -1e-9));
        let first = &placements[0];
        assert!((first.dx - 1.0).abs() < 1e-9);
        assert!(first.dy.abs() < 1e-9);
    }

    #[test]
    fn scatter_rotation_and_z_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let placements = scatter(6, &mut rng);
        let mut z: Vec<usize> = placements.iter().map(|p| p.z).collect();
        z.sort();
        assert_eq!(z, vec![1, 2, 3, 4, 5, 6]);
        assert!(placements
            .iter()
            .all(|p| p.rotation >= -MAX_ROTATION && p.rotation < MAX_ROTATION));
        assert!(placements
            .iter()
            .all(|p| ((p.dx * p.dx + p.dy * p.dy) - 1.0).abs() < 1e-9));
    }

    #[test]
    fn stack_rng_is_stable_per_key() {
        let key = StackKey::Day(2023, Month::Jan, 2);
        let a = scatter(5, &mut key.rng(99));
        let b = scatter(5, &mut key.rng(99));
        assert_eq!(a, b);
        let other = scatter(5, &mut StackKey::Day(2023, Month::Jan, 3).rng(99));
        assert_ne!(a, other);
    }

    #[test]
    fn empty_stack_renders_placeholder() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 16, 5);
        let mut buf = Buffer::empty(area);
        PhotoStack::new(&[], StackKey::Year(2021), 0, &theme).render(area, &mut buf);
        let row: String = (0..area.width)
            .map(|x| buf.get(x, 2).symbol().to_string())
            .collect();
        assert!(row.contains("No photos"));
    }

    #[test]
    fn revealed_limits_drawn_tiles() {
        let theme = Theme::default();
        let photo = Photo::new("1", 2023, Month::Jan, 2, "ref");
        let photos = vec![&photo, &photo, &photo];
        let area = Rect::new(0, 0, 20, 7);
        let mut buf = Buffer::empty(area);
        PhotoStack::new(&photos, StackKey::Year(2023), 3, &theme)
            .revealed(0)
            .render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));

        PhotoStack::new(&photos, StackKey::Year(2023), 3, &theme).render(area, &mut buf);
        let tiles = buf.content.iter().filter(|cell| cell.symbol() == "▣").count();
        assert!(tiles >= 1);
    }
}
