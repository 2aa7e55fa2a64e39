//! Metric tiles shown at the top of every dashboard.
//!
//! A [`StatDescriptor`] is a pure display value: dashboards build a list of
//! them from their sample data on each render and hand it to the stat grid.

use serde::{Deserialize, Serialize};

/// Accent color of a stat tile.
///
/// Parsing never fails: any key outside the four known ones resolves to
/// [`StatColor::Primary`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum StatColor {
    #[default]
    Primary,
    Success,
    Warning,
    Destructive,
}

impl StatColor {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "success" => StatColor::Success,
            "warning" => StatColor::Warning,
            "destructive" => StatColor::Destructive,
            _ => StatColor::Primary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatColor::Primary => "primary",
            StatColor::Success => "success",
            StatColor::Warning => "warning",
            StatColor::Destructive => "destructive",
        }
    }

    /// CSS modifier class carrying the foreground/background pair.
    pub fn style_class(&self) -> &'static str {
        match self {
            StatColor::Primary => "stat-tone-primary",
            StatColor::Success => "stat-tone-success",
            StatColor::Warning => "stat-tone-warning",
            StatColor::Destructive => "stat-tone-destructive",
        }
    }

    /// `good` when `ok`, otherwise `bad`.
    pub fn pick(ok: bool, good: StatColor, bad: StatColor) -> Self {
        if ok {
            good
        } else {
            bad
        }
    }
}

impl From<&str> for StatColor {
    fn from(key: &str) -> Self {
        Self::from_key(key)
    }
}

impl From<String> for StatColor {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl From<StatColor> for String {
    fn from(color: StatColor) -> Self {
        color.as_str().to_string()
    }
}

/// Period-over-period change shown as a badge on a tile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Trend {
    pub value: f64,
    pub is_positive: bool,
}

impl Trend {
    pub fn up(value: f64) -> Self {
        Self {
            value,
            is_positive: true,
        }
    }

    pub fn down(value: f64) -> Self {
        Self {
            value,
            is_positive: false,
        }
    }

    /// `+2.1%` when positive, the bare value otherwise.
    pub fn label(&self) -> String {
        if self.is_positive {
            format!("+{}%", self.value)
        } else {
            format!("{}%", self.value)
        }
    }

    pub fn style_class(&self) -> &'static str {
        if self.is_positive {
            "stat-trend-up"
        } else {
            "stat-trend-down"
        }
    }
}

/// Icon drawn on a tile or quick-action card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum StatIcon {
    #[default]
    Chart,
    Clock,
    Award,
    CreditCard,
    Building,
    Users,
    BookOpen,
    Calendar,
    Bell,
    FileText,
    Clipboard,
    Alert,
    GraduationCap,
    TrendingUp,
    UserCheck,
    Shield,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatDescriptor {
    pub title: String,
    pub value: String,
    pub icon: StatIcon,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: StatColor,
    #[serde(default)]
    pub trend: Option<Trend>,
}

impl StatDescriptor {
    pub fn new(title: impl Into<String>, value: impl ToString, icon: StatIcon) -> Self {
        Self {
            title: title.into(),
            value: value.to_string(),
            icon,
            description: None,
            color: StatColor::Primary,
            trend: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color(mut self, color: StatColor) -> Self {
        self.color = color;
        self
    }

    pub fn trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_color_keys_parse() {
        assert_eq!(StatColor::from_key("success"), StatColor::Success);
        assert_eq!(StatColor::from_key("Warning"), StatColor::Warning);
        assert_eq!(StatColor::from_key(" destructive "), StatColor::Destructive);
        assert_eq!(StatColor::from_key("primary"), StatColor::Primary);
    }

    #[test]
    fn unknown_color_falls_back_to_primary() {
        for key in ["", "info", "danger", "#ff0000", "succes"] {
            let color = StatColor::from_key(key);
            assert_eq!(color, StatColor::Primary, "key {key:?}");
            assert_eq!(color.style_class(), "stat-tone-primary");
        }
    }

    #[test]
    fn unknown_color_in_json_deserializes_to_primary() {
        let json = r#"{"title":"Rooms","value":"98","icon":"Building","color":"teal"}"#;
        let stat: StatDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(stat.color, StatColor::Primary);
        assert_eq!(stat.trend, None);
    }

    #[test]
    fn color_serializes_as_key() {
        let json = serde_json::to_string(&StatColor::Warning).unwrap();
        assert_eq!(json, r#""warning""#);
    }

    #[test]
    fn every_color_has_its_own_class() {
        let classes = [
            StatColor::Primary,
            StatColor::Success,
            StatColor::Warning,
            StatColor::Destructive,
        ]
        .map(|c| c.style_class());
        let distinct: std::collections::HashSet<&str> = classes.into_iter().collect();
        assert_eq!(distinct.len(), classes.len());
    }

    #[test]
    fn trend_labels() {
        assert_eq!(Trend::up(2.1).label(), "+2.1%");
        assert_eq!(Trend::up(5.0).label(), "+5%");
        assert_eq!(Trend::down(1.5).label(), "1.5%");
        assert_eq!(Trend::down(1.5).style_class(), "stat-trend-down");
    }

    #[test]
    fn builder_sets_optional_fields() {
        let stat = StatDescriptor::new("Pending Fees", "₹5,000", StatIcon::CreditCard)
            .description("Due March 15")
            .color(StatColor::Warning);
        assert_eq!(stat.description.as_deref(), Some("Due March 15"));
        assert_eq!(stat.color, StatColor::Warning);
        assert!(stat.trend.is_none());
    }

    #[test]
    fn pick_selects_by_condition() {
        assert_eq!(
            StatColor::pick(85.0 >= 75.0, StatColor::Success, StatColor::Warning),
            StatColor::Success
        );
        assert_eq!(
            StatColor::pick(false, StatColor::Success, StatColor::Warning),
            StatColor::Warning
        );
    }
}
