use shared_types::{
    AdmissionApplication, ClassShare, FeeCollectionPoint, GeneratedReport, Kpi, MonthlyCount,
    Profile, QuickAction, Role, StatColor, StatDescriptor, StatIcon, Trend,
};

use crate::format_helpers::{group_indian, lakhs};
use crate::routes::dashboard::{welcome_heading, DashboardConfig, Panel};

pub const TOTAL_STUDENTS: u32 = 1_250;
pub const TOTAL_FACULTY: u32 = 85;
pub const MONTHLY_REVENUE: u64 = 2_450_000;
pub const MONTHLY_GROWTH: f64 = 8.5;

pub fn kpis() -> Vec<Kpi> {
    [
        ("Attendance Rate", 92.3),
        ("Fee Collection Rate", 89.7),
        ("Faculty Satisfaction", 87.0),
        ("Student Satisfaction", 91.0),
    ]
    .into_iter()
    .map(|(label, value)| Kpi {
        label: label.into(),
        value,
    })
    .collect()
}

pub fn monthly_admissions() -> Vec<MonthlyCount> {
    [("Jan", 45), ("Feb", 52), ("Mar", 38), ("Apr", 65), ("May", 48), ("Jun", 71)]
        .into_iter()
        .map(|(month, value)| MonthlyCount {
            month: month.into(),
            value,
        })
        .collect()
}

pub fn fee_collection() -> Vec<FeeCollectionPoint> {
    [
        ("Jan", 420_000, 80_000),
        ("Feb", 450_000, 65_000),
        ("Mar", 380_000, 95_000),
        ("Apr", 510_000, 45_000),
        ("May", 475_000, 70_000),
        ("Jun", 520_000, 55_000),
    ]
    .into_iter()
    .map(|(month, collected, pending)| FeeCollectionPoint {
        month: month.into(),
        collected,
        pending,
    })
    .collect()
}

pub fn class_distribution() -> Vec<ClassShare> {
    [
        ("Class 1-5", 485, "#0088FE"),
        ("Class 6-8", 376, "#00C49F"),
        ("Class 9-10", 285, "#FFBB28"),
        ("Class 11-12", 104, "#FF8042"),
    ]
    .into_iter()
    .map(|(label, students, color)| ClassShare {
        label: label.into(),
        students,
        color: color.into(),
    })
    .collect()
}

pub fn pending_admissions() -> Vec<AdmissionApplication> {
    [
        ("Rahul Sharma", "Class 9", "Documents Pending", "2024-02-15"),
        ("Priya Patel", "Class 11", "Payment Pending", "2024-02-14"),
        ("Ankit Kumar", "Class 7", "Interview Scheduled", "2024-02-16"),
    ]
    .into_iter()
    .map(|(name, class_name, status, date)| AdmissionApplication {
        name: name.into(),
        class_name: class_name.into(),
        status: status.into(),
        date: date.into(),
    })
    .collect()
}

pub fn reports() -> Vec<GeneratedReport> {
    [
        ("Monthly Fee Collection Report", "Financial", "2024-02-01"),
        ("Student Performance Analysis", "Academic", "2024-02-03"),
        ("Faculty Attendance Report", "HR", "2024-02-05"),
        ("Infrastructure Maintenance", "Operations", "2024-02-07"),
    ]
    .into_iter()
    .map(|(title, category, date)| GeneratedReport {
        title: title.into(),
        category: category.into(),
        date: date.into(),
    })
    .collect()
}

pub fn quick_actions() -> Vec<QuickAction> {
    [
        ("User Management", "Manage students, faculty and staff", StatIcon::Users),
        ("Academic Management", "Classes, subjects and timetables", StatIcon::BookOpen),
        ("Fee Management", "Fee structures and collections", StatIcon::CreditCard),
        ("System Reports", "Generate and export reports", StatIcon::Alert),
    ]
    .into_iter()
    .map(|(title, description, icon)| QuickAction {
        title: title.into(),
        description: description.into(),
        icon,
    })
    .collect()
}

pub fn config(profile: Option<&Profile>) -> DashboardConfig {
    let stats = vec![
        StatDescriptor::new("Total Students", group_indian(u64::from(TOTAL_STUDENTS)), StatIcon::Users)
            .description("Enrolled this year")
            .trend(Trend::up(MONTHLY_GROWTH)),
        StatDescriptor::new("Faculty Members", TOTAL_FACULTY, StatIcon::GraduationCap)
            .description("Teaching staff"),
        StatDescriptor::new("Monthly Revenue", lakhs(MONTHLY_REVENUE), StatIcon::CreditCard)
            .description("Fee collections")
            .color(StatColor::Success),
        StatDescriptor::new("Monthly Growth", format!("{MONTHLY_GROWTH}%"), StatIcon::TrendingUp)
            .description("New admissions")
            .color(StatColor::Success),
    ];

    DashboardConfig {
        role: Role::Admin,
        header_title: "Admin Portal",
        welcome: welcome_heading("Welcome", profile, Role::Admin),
        subtitle: "Comprehensive school management and analytics dashboard".into(),
        stats,
        sidebar: None,
        panels: vec![
            Panel::Kpis(kpis()),
            Panel::ClassDistribution(class_distribution()),
            Panel::MonthlyAdmissions(monthly_admissions()),
            Panel::FeeCollection(fee_collection()),
            Panel::PendingAdmissions(pending_admissions()),
            Panel::Reports(reports()),
            Panel::QuickActions(quick_actions()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn distribution_covers_every_student() {
        let enrolled: u32 = class_distribution().iter().map(|c| c.students).sum();
        assert_eq!(enrolled, TOTAL_STUDENTS);
    }

    #[test]
    fn headline_values() {
        let config = config(None);
        let values: Vec<&str> = config.stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["1,250", "85", "₹24.5L", "8.5%"]);
        assert_eq!(config.welcome, "Welcome, Administrator!");
    }

    #[test]
    fn kpis_are_percentages() {
        assert!(kpis().iter().all(|k| (0.0..=100.0).contains(&k.value)));
    }
}
