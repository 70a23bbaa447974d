use std::sync::LazyLock;

use regex::Regex;

/// Percentages extracted from pasted label text. Anything the text
/// does not state stays unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelNutrients {
    pub protein_pct: Option<f64>,
    pub fat_pct: Option<f64>,
    pub fibre_pct: Option<f64>,
    pub ash_pct: Option<f64>,
    pub moisture_pct: Option<f64>,
}

// Keyword sets cover the label wordings seen on UK/FR/ES packaging.
static PROTEIN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)protein|protéin").unwrap());
static FAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)fat|fat content|matières grasses|grasa").unwrap());
static FIBRE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)fibre|fiber|cellulose|fibra").unwrap());
static ASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ash|cendra|cendres|ceniza").unwrap());
static MOISTURE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)moisture|humidité|humedad").unwrap());

static VALUE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*%").unwrap());

/// Pull analytical-constituent percentages out of pasted label text.
///
/// Scans line by line: the first line matching a nutrient keyword that
/// also carries an `NN%` value wins for that nutrient.
pub fn parse_label_text(text: &str) -> LabelNutrients {
    LabelNutrients {
        protein_pct: find_value(text, &PROTEIN_RE),
        fat_pct: find_value(text, &FAT_RE),
        fibre_pct: find_value(text, &FIBRE_RE),
        ash_pct: find_value(text, &ASH_RE),
        moisture_pct: find_value(text, &MOISTURE_RE),
    }
}

fn find_value(text: &str, keyword: &Regex) -> Option<f64> {
    text.lines().find_map(|line| {
        if !keyword.is_match(line) {
            return None;
        }
        let caps = VALUE_RE.captures(line)?;
        caps[1].parse().ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_english_label() {
        let text = "Analytical Constituents\nProtein 42%\nFat Content 15.5%\nCrude Fibre 6%\nCrude Ash 10%\nMoisture 8%";
        let parsed = parse_label_text(text);

        assert_eq!(parsed.protein_pct, Some(42.0));
        assert_eq!(parsed.fat_pct, Some(15.5));
        assert_eq!(parsed.fibre_pct, Some(6.0));
        assert_eq!(parsed.ash_pct, Some(10.0));
        assert_eq!(parsed.moisture_pct, Some(8.0));
    }

    #[test]
    fn test_parse_french_label() {
        let text = "Protéine 17.1 %\nMatières grasses 6.5%\nCellulose 0.2%\nCendres brutes 1.9%\nHumidité 74.6%";
        let parsed = parse_label_text(text);

        assert_eq!(parsed.protein_pct, Some(17.1));
        assert_eq!(parsed.fat_pct, Some(6.5));
        assert_eq!(parsed.fibre_pct, Some(0.2));
        assert_eq!(parsed.ash_pct, Some(1.9));
        assert_eq!(parsed.moisture_pct, Some(74.6));
    }

    #[test]
    fn test_parse_missing_fields_stay_unset() {
        let text = "Protein 30%\nFat 12%";
        let parsed = parse_label_text(text);

        assert_eq!(parsed.protein_pct, Some(30.0));
        assert_eq!(parsed.fat_pct, Some(12.0));
        assert_eq!(parsed.fibre_pct, None);
        assert_eq!(parsed.moisture_pct, None);
    }

    #[test]
    fn test_parse_keyword_without_value_keeps_scanning() {
        let text = "Protein content:\nCrude Protein 38%";
        let parsed = parse_label_text(text);
        assert_eq!(parsed.protein_pct, Some(38.0));
    }

    #[test]
    fn test_parse_garbage_yields_nothing() {
        assert_eq!(parse_label_text("feed twice a day"), LabelNutrients::default());
    }
}
