use super::names::{Category, SanskritNames};
use super::{Element, Panchanga};
use crate::error::Result;
use crate::model::Hms;

/// Names and end times of an element; a skipped element adds a second line
/// to each.
fn name_and_time(element: &Element, category: Category, names: &SanskritNames) -> Result<(String, String)> {
    let mut name_lines = Vec::new();
    let mut time_lines = Vec::new();
    for span in element.spans() {
        name_lines.push(names.name(category, span.index)?);
        time_lines.push(Hms::from_hours(span.ends).to_string());
    }
    Ok((name_lines.join("\n"), time_lines.join("\n")))
}

/// The text of the panchanga panel.
pub fn lines(p: &Panchanga, names: &SanskritNames) -> Result<Vec<String>> {
    let mut month = names.name(Category::Masa, p.masa.index)?.to_string();
    if p.masa.adhika {
        month = format!("Adhika {}", month.to_lowercase());
    }

    let (tithi, tithi_time) = name_and_time(&p.tithi, Category::Tithi, names)?;
    let (nakshatra, nakshatra_time) = name_and_time(&p.nakshatra, Category::Nakshatra, names)?;
    let (yoga, yoga_time) = name_and_time(&p.yoga, Category::Yoga, names)?;

    Ok(vec![
        String::new(),
        format!("Śālivāhana śaka {}", p.years.saka),
        format!("Vikrama samvat {}", p.years.vikrama),
        format!("{} samvatsara", names.name(Category::Samvatsara, p.samvatsara)?),
        names.name(Category::Ayana, p.ayana.index())?.to_string(),
        format!("Surya Rāśi: {}", names.name(Category::Raasi, p.raasi)?),
        format!("{} ṛtu", names.name(Category::Ritu, p.ritu)?),
        format!("{} māsa", month),
        format!("tithi: {}", tithi),
        format!("tithi time: {}", tithi_time),
        format!("vara: {}", names.name(Category::Vaara, p.vaara)?),
        format!("nakshatra: {}", nakshatra),
        format!("nakshatra time: {}", nakshatra_time),
        format!("yoga: {}", yoga),
        format!("yoga time: {}", yoga_time),
        format!("karana: {}", names.name(Category::Karana, p.karana)?),
        " -- ".to_string(),
        format!("GataKali: {}", p.years.kali),
        format!("KaliDay: {}", p.ahargana as i64),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Ayana, Masa, Span, Years};
    use crate::data;

    fn element(index: u32, ends: f64) -> Element {
        Element {
            current: Span { index, ends },
            skipped: None,
        }
    }

    fn sample() -> Panchanga {
        Panchanga {
            tithi: Element {
                current: Span {
                    index: 3,
                    ends: 8.0289,
                },
                skipped: Some(Span {
                    index: 4,
                    ends: 29.0157,
                }),
            },
            nakshatra: element(23, 10.3905),
            yoga: element(17, 26.6683),
            karana: 6,
            vaara: 0,
            masa: Masa {
                index: 10,
                adhika: false,
            },
            ritu: 4,
            raasi: 9,
            ayana: Ayana::Dakshinayana,
            samvatsara: 37,
            years: Years {
                kali: 5124,
                saka: 1945,
                vikrama: 2080,
            },
            ahargana: 1_871_858.0,
            sunrise: 6.75,
            sunset: 18.2,
            moonrise: None,
            moonset: None,
            day_duration: 11.45,
        }
    }

    #[test]
    fn panel_lines_in_order() {
        let names = data::bundled_names().unwrap();
        let out = lines(&sample(), &names).unwrap();
        assert_eq!(out.len(), 19);
        assert_eq!(out[0], "");
        assert_eq!(out[1], "Śālivāhana śaka 1945");
        assert_eq!(out[2], "Vikrama samvat 2080");
        assert_eq!(out[3], "Śobhakṛt samvatsara");
        assert_eq!(out[4], "Dakṣiṇāyana");
        assert_eq!(out[5], "Surya Rāśi: Dhanus");
        assert_eq!(out[6], "Hemanta ṛtu");
        assert_eq!(out[7], "Pauṣa māsa");
        assert_eq!(out[10], "vara: Ravivāra");
        assert_eq!(out[15], "karana: Gara");
        assert_eq!(out[16], " -- ");
        assert_eq!(out[17], "GataKali: 5124");
        assert_eq!(out[18], "KaliDay: 1871858");
    }

    #[test]
    fn skipped_tithi_adds_second_line() {
        let names = data::bundled_names().unwrap();
        let out = lines(&sample(), &names).unwrap();
        assert_eq!(out[8], "tithi: Śukla pakṣa Tṛtīyā\nŚukla pakṣa Caturthī");
        assert_eq!(out[9], "tithi time: 08:01:44\n29:00:57");
        assert_eq!(out[12], "nakshatra time: 10:23:26");
    }

    #[test]
    fn adhika_month_is_lowercased() {
        let names = data::bundled_names().unwrap();
        let mut p = sample();
        p.masa = Masa {
            index: 5,
            adhika: true,
        };
        let out = lines(&p, &names).unwrap();
        assert_eq!(out[7], "Adhika śrāvaṇa māsa");
    }
}
