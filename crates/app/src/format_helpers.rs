/// Shared formatting utilities for the UI layer.
///
/// Amounts are whole rupees. Grouping follows the Indian system: the last
/// three digits, then pairs (`24,50,000`).

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Group digits the Indian way: `2450000` → `24,50,000`.
pub fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// `₹25,000`.
pub fn rupees(amount: u64) -> String {
    format!("₹{}", group_indian(amount))
}

/// Lakh abbreviation with one decimal, trailing `.0` dropped: `₹24.5L`, `₹5L`.
pub fn lakhs(amount: u64) -> String {
    let value = amount as f64 / 100_000.0;
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("₹{}L", rounded as u64)
    } else {
        format!("₹{rounded:.1}L")
    }
}

/// Thousands abbreviation used on chart axes: `₹420K`.
pub fn thousands(amount: u64) -> String {
    format!("₹{}K", amount / 1_000)
}

/// One decimal place: `91.6%`.
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Up to two uppercase initials for an avatar: "Priya Sharma" → "PS".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Format an ISO date (`2024-03-15`) as `Mar 15, 2024`.
///
/// Anything that does not look like an ISO date is returned unchanged.
pub fn format_date_human(date_str: &str) -> String {
    let (Some(year), Some(month), Some(day)) =
        (date_str.get(..4), date_str.get(5..7), date_str.get(8..10))
    else {
        return date_str.to_string();
    };
    let month = month.parse::<usize>().ok().filter(|m| (1..=12).contains(m));
    let day = day.parse::<u32>().ok();

    match (month, day) {
        (Some(m), Some(d)) => format!("{} {}, {}", MONTH_NAMES[m - 1], d, year),
        _ => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn indian_grouping() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(5_000), "5,000");
        assert_eq!(group_indian(25_000), "25,000");
        assert_eq!(group_indian(125_000), "1,25,000");
        assert_eq!(group_indian(2_450_000), "24,50,000");
        assert_eq!(group_indian(123_456_789), "12,34,56,789");
    }

    #[test]
    fn rupee_amounts() {
        assert_eq!(rupees(5_000), "₹5,000");
        assert_eq!(rupees(8_000), "₹8,000");
    }

    #[test]
    fn lakh_abbreviation() {
        assert_eq!(lakhs(2_450_000), "₹24.5L");
        assert_eq!(lakhs(500_000), "₹5L");
        assert_eq!(lakhs(420_000), "₹4.2L");
    }

    #[test]
    fn thousands_abbreviation() {
        assert_eq!(thousands(420_000), "₹420K");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(percent(91.578), "91.6%");
        assert_eq!(percent(85.0), "85.0%");
    }

    #[test]
    fn initials_take_two_words() {
        assert_eq!(initials("Priya Sharma"), "PS");
        assert_eq!(initials("demo student account"), "DS");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn human_dates() {
        assert_eq!(format_date_human("2024-03-15"), "Mar 15, 2024");
        assert_eq!(format_date_human("2024-02-05T10:00:00Z"), "Feb 5, 2024");
        assert_eq!(format_date_human("Feb 15-16"), "Feb 15-16");
        assert_eq!(format_date_human("2024-13-01"), "2024-13-01");
    }
}
