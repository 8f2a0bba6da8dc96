// ABOUTME: Positional segmenter for anchor-inline listings where all fields live in one anchor.
// ABOUTME: Splits the anchor's rendered text on the block separator and classifies segments by index.

use crate::gazetteer::SALARY_LABEL;

/// Separator inserted at each block boundary when an anchor's text is
/// flattened, so adjacent fields are never silently concatenated.
pub const SEGMENT_SEPARATOR: char = '|';

/// Classification of the lead segment of an anchor's text.
///
/// Some listings prefix the title with a short lowercase company tag
/// ("eso Inžinierius ..."). The heuristic is inherently ambiguous for
/// titles that legitimately start with a short lowercase word, so it lives
/// in one place as an explicit variant-returning classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleLead {
    Tagged { tag: String, title: String },
    Untagged(String),
}

/// Classify the lead segment: a first whitespace token that is entirely
/// lowercase (at least one cased character, none uppercase) and at most
/// four characters long is taken as the company tag; the remaining tokens,
/// space-joined, become the title.
pub fn classify_lead(lead: &str) -> TitleLead {
    let mut tokens = lead.split_whitespace();
    let Some(first) = tokens.next() else {
        return TitleLead::Untagged(String::new());
    };

    let is_lowercase_word = first.chars().any(char::is_lowercase)
        && !first.chars().any(char::is_uppercase);
    if is_lowercase_word && first.chars().count() <= 4 {
        TitleLead::Tagged {
            tag: first.to_string(),
            title: tokens.collect::<Vec<_>>().join(" "),
        }
    } else {
        TitleLead::Untagged(lead.to_string())
    }
}

/// Fields recovered from a single anchor's segmented text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorFields {
    pub title: String,
    pub company_tag: Option<String>,
    pub location: Option<String>,
    pub work_type: Option<String>,
    pub salary: Option<String>,
}

/// Segment flattened anchor text into typed fields.
///
/// Strictly positional: segment 0 is title (plus optional tag), 1 is
/// location, 2 is work type. Salary is the first of the remaining segments
/// containing a currency symbol or the salary label, with the label
/// stripped. Segments are never reinterpreted once classified.
pub fn segment(text: &str) -> AnchorFields {
    let parts: Vec<&str> = text
        .split(SEGMENT_SEPARATOR)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let mut fields = AnchorFields::default();
    let Some(&lead) = parts.first() else {
        return fields;
    };

    match classify_lead(lead) {
        TitleLead::Tagged { tag, title } => {
            fields.company_tag = Some(tag);
            fields.title = title;
        }
        TitleLead::Untagged(title) => fields.title = title,
    }

    fields.location = parts.get(1).map(|p| p.to_string());
    fields.work_type = parts.get(2).map(|p| p.to_string());

    for part in parts.iter().skip(3) {
        if part.contains(SALARY_LABEL) || part.contains('€') {
            fields.salary = Some(part.replace(SALARY_LABEL, "").trim().to_string());
            break;
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn segments_full_anchor_text() {
        let fields = segment("abc Engineer|Vilnius|Full-time|Atlyginimas 1500-2000€");
        assert_eq!(fields.company_tag.as_deref(), Some("abc"));
        assert_eq!(fields.title, "Engineer");
        assert_eq!(fields.location.as_deref(), Some("Vilnius"));
        assert_eq!(fields.work_type.as_deref(), Some("Full-time"));
        assert_eq!(fields.salary.as_deref(), Some("1500-2000€"));
    }

    #[test]
    fn capitalized_lead_has_no_tag() {
        let fields = segment("Senior Engineer|Vilnius");
        assert_eq!(fields.company_tag, None);
        assert_eq!(fields.title, "Senior Engineer");
        assert_eq!(fields.location.as_deref(), Some("Vilnius"));
        assert_eq!(fields.work_type, None);
        assert_eq!(fields.salary, None);
    }

    #[test]
    fn long_lowercase_lead_is_not_a_tag() {
        // Five characters is past the tag limit.
        assert_eq!(
            classify_lead("grupe Vadovas"),
            TitleLead::Untagged("grupe Vadovas".to_string())
        );
    }

    #[test]
    fn numeric_lead_is_not_a_tag() {
        assert_eq!(
            classify_lead("24/7 Operatorius"),
            TitleLead::Untagged("24/7 Operatorius".to_string())
        );
    }

    #[test]
    fn tag_length_counts_chars_not_bytes() {
        // "ūkio" is four characters but five bytes.
        let fields = segment("ūkio Specialistas|Kaunas");
        assert_eq!(fields.company_tag.as_deref(), Some("ūkio"));
        assert_eq!(fields.title, "Specialistas");
    }

    #[test]
    fn single_segment_yields_title_only() {
        let fields = segment("eso Elektrikas");
        assert_eq!(fields.company_tag.as_deref(), Some("eso"));
        assert_eq!(fields.title, "Elektrikas");
        assert_eq!(fields.location, None);
        assert_eq!(fields.work_type, None);
        assert_eq!(fields.salary, None);
    }

    #[test]
    fn salary_scan_takes_first_matching_segment() {
        let fields = segment("Vadovas|Vilnius|Full-time|Terminuota sutartis|Atlyginimas 2000-2500€|3000€");
        assert_eq!(fields.salary.as_deref(), Some("2000-2500€"));
    }

    #[test]
    fn empty_segments_are_dropped() {
        let fields = segment("  |Vadovas| |Vilnius|");
        assert_eq!(fields.title, "Vadovas");
        assert_eq!(fields.location.as_deref(), Some("Vilnius"));
    }

    #[test]
    fn empty_text_yields_empty_fields() {
        assert_eq!(segment(""), AnchorFields::default());
    }
}
