//! ASCII moon for the phase at the requested time, annotated with moonrise
//! and moonset.
//!
//! ```text
//!    ..@@@@      Moon Rise: 18:07:41
//!  ...@@@@@@@    Moon Set: 05:27:40
//! ....@@@@@@@@
//! ....@@@@@@@@   Waxing Gibbous
//!  ...@@@@@@@    Illumination: 71%
//!    ..@@@@
//! ```

use crate::model::Hms;

pub const MOON_ROWS: usize = 6;
const LIT: char = '@';
const DARK: char = '.';

/// Phase name for an elongation (Moon − Sun) in degrees.
pub fn phase_name(phase_deg: f64) -> &'static str {
    const NAMES: [&str; 8] = [
        "New Moon",
        "Waxing Crescent",
        "First Quarter",
        "Waxing Gibbous",
        "Full Moon",
        "Waning Gibbous",
        "Last Quarter",
        "Waning Crescent",
    ];
    let sector = ((phase_deg.rem_euclid(360.0) + 22.5) / 45.0).floor() as usize % 8;
    NAMES[sector]
}

/// Illuminated fraction of the disc, 0..=1.
pub fn illumination(phase_deg: f64) -> f64 {
    (1.0 - phase_deg.to_radians().cos()) / 2.0
}

/// Draw the disc `rows` lines tall (twice as many columns, since terminal
/// cells are about twice as tall as wide). Seen from the southern
/// hemisphere the lit side is mirrored.
pub fn art(phase_deg: f64, rows: usize, southern: bool) -> Vec<String> {
    let p = phase_deg.rem_euclid(360.0) / 360.0;
    let cols = rows * 2;
    let waxing = p < 0.5;
    let terminator = if waxing {
        (2.0 * std::f64::consts::PI * p).cos()
    } else {
        (2.0 * std::f64::consts::PI * (p - 0.5)).cos()
    };

    (0..rows)
        .map(|r| {
            let y = 1.0 - 2.0 * (r as f64 + 0.5) / rows as f64;
            let half = (1.0 - y * y).sqrt();
            let row: String = (0..cols)
                .map(|c| {
                    let x = 2.0 * (c as f64 + 0.5) / cols as f64 - 1.0;
                    if x.abs() > half {
                        ' '
                    } else if (waxing && x > half * terminator)
                        || (!waxing && x < half * terminator)
                    {
                        LIT
                    } else {
                        DARK
                    }
                })
                .collect();
            if southern {
                row.chars().rev().collect()
            } else {
                row
            }
        })
        .collect()
}

fn clock(label: &str, hours: Option<f64>) -> String {
    match hours {
        Some(h) => format!("{} {}", label, Hms::from_hours(h)),
        None => format!("{} --:--:--", label),
    }
}

/// Panel lines: each art row indented by one space, with annotations
/// separated by a tab.
pub fn panel(phase_deg: f64, latitude: f64, moonrise: Option<f64>, moonset: Option<f64>) -> Vec<String> {
    let notes = [
        clock("Moon Rise:", moonrise),
        clock("Moon Set:", moonset),
        String::new(),
        phase_name(phase_deg).to_string(),
        format!("Illumination: {:.0}%", illumination(phase_deg) * 100.0),
        String::new(),
    ];
    art(phase_deg, MOON_ROWS, latitude < 0.0)
        .into_iter()
        .zip(notes.iter())
        .map(|(row, note)| {
            if note.is_empty() {
                format!(" {}", row)
            } else {
                format!(" {}\t{}", row, note)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(rows: &[String]) -> usize {
        rows.iter().map(|r| r.matches(LIT).count()).sum()
    }

    #[test]
    fn names_by_sector() {
        assert_eq!(phase_name(0.0), "New Moon");
        assert_eq!(phase_name(359.0), "New Moon");
        assert_eq!(phase_name(90.0), "First Quarter");
        assert_eq!(phase_name(180.0), "Full Moon");
        assert_eq!(phase_name(200.0), "Full Moon");
        assert_eq!(phase_name(250.0), "Last Quarter");
        assert_eq!(phase_name(300.0), "Waning Crescent");
    }

    #[test]
    fn illumination_extremes() {
        assert!(illumination(0.0).abs() < 1e-12);
        assert!((illumination(180.0) - 1.0).abs() < 1e-12);
        assert!((illumination(90.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn new_moon_is_dark_and_full_moon_is_lit() {
        let new = art(0.0, MOON_ROWS, false);
        let full = art(180.0, MOON_ROWS, false);
        assert_eq!(lit(&new), 0);
        assert!(full.iter().all(|r| !r.contains(DARK)));
        assert!(lit(&full) > 0);
    }

    #[test]
    fn first_quarter_lights_the_right_half() {
        let rows = art(90.0, MOON_ROWS, false);
        for row in &rows {
            let chars: Vec<char> = row.chars().collect();
            let (left, right) = chars.split_at(chars.len() / 2);
            assert!(!left.contains(&LIT), "{:?}", row);
            assert!(!right.contains(&DARK), "{:?}", row);
        }
    }

    #[test]
    fn southern_hemisphere_mirrors() {
        let north = art(60.0, MOON_ROWS, false);
        let south = art(60.0, MOON_ROWS, true);
        for (n, s) in north.iter().zip(&south) {
            assert_eq!(n.chars().rev().collect::<String>(), *s);
        }
    }

    #[test]
    fn panel_annotates_rise_and_set() {
        let lines = panel(170.0, 12.97, Some(18.128), None);
        assert_eq!(lines.len(), MOON_ROWS);
        assert!(lines.iter().all(|l| l.starts_with(' ')));
        assert!(lines[0].ends_with("\tMoon Rise: 18:07:41"));
        assert!(lines[1].ends_with("\tMoon Set: --:--:--"));
        assert!(lines[3].ends_with("Full Moon"));
        assert!(lines[4].ends_with("Illumination: 99%"));
        assert!(!lines[2].contains('\t'));
    }
}
