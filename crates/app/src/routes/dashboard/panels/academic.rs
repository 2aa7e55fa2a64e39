use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdInfo};
use dioxus_free_icons::Icon;
use shared_types::{
    AttendanceSummary, CourseMaterial, FacultyTask, ReportCard, ScheduleEntry, StatIcon,
    SubjectMark, TaughtClass,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, CardTone, Progress, ProgressIndicator,
};

use super::{use_acknowledger, PanelCard};
use crate::acknowledgments::{AckAction, AckLedger};
use crate::badges::{grade_badge, priority_badge};
use crate::format_helpers::{format_date_human, percent};
use crate::notify::Notice;

/// True when attendance has dropped under `threshold` percent.
pub(crate) fn below_threshold(summary: &AttendanceSummary, threshold: f64) -> bool {
    summary.percentage < threshold
}

#[component]
pub(crate) fn AttendancePanel(summary: AttendanceSummary, threshold: f64) -> Element {
    let low = below_threshold(&summary, threshold);
    let rate = percent(summary.percentage);
    let absent = summary.absent();

    rsx! {
        PanelCard {
            title: "Attendance Overview",
            icon: StatIcon::Clock,
            description: "Days present this academic year",
            tone: if low { CardTone::Accent } else { CardTone::Plain },
            div { class: "attendance-headline",
                span { class: "attendance-rate", "{rate}" }
                span { class: "attendance-caption", "{summary.present} of {summary.total} days" }
            }
            Progress {
                value: Some(summary.percentage),
                ProgressIndicator {}
            }
            div { class: "attendance-breakdown",
                div { span { class: "figure figure-success", "{summary.present}" } span { "Present" } }
                div { span { class: "figure figure-destructive", "{absent}" } span { "Absent" } }
                div { span { class: "figure", "{summary.total}" } span { "Total Days" } }
            }
            if low {
                p { class: "panel-warning",
                    Icon::<LdInfo> { icon: LdInfo, width: 14, height: 14 }
                    "Attendance is below the required {threshold}%."
                }
            }
        }
    }
}

#[component]
pub(crate) fn MarksPanel(marks: Vec<SubjectMark>, show_dates: bool) -> Element {
    rsx! {
        PanelCard {
            title: "Recent Performance",
            icon: StatIcon::TrendingUp,
            description: "Your latest exam results",
            div { class: "panel-list",
                for mark in marks.iter() {
                    div { key: "{mark.subject}", class: "panel-row",
                        div { class: "panel-row-main",
                            p { class: "panel-row-title", "{mark.subject}" }
                            p { class: "panel-row-meta",
                                "{mark.exam}"
                                if show_dates {
                                    if let Some(date) = &mark.date {
                                        " • {format_date_human(date)}"
                                    }
                                }
                            }
                        }
                        div { class: "panel-row-end",
                            span { class: "mark-score", "{mark.marks}/{mark.total_marks}" }
                            Badge { variant: grade_badge(&mark.grade), "{mark.grade}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn TimetablePanel(entries: Vec<ScheduleEntry>, detail_label: &'static str) -> Element {
    rsx! {
        PanelCard {
            title: "Today's Schedule",
            icon: StatIcon::Calendar,
            div { class: "panel-list",
                for entry in entries.iter() {
                    div { key: "{entry.period}", class: "panel-row timetable-row",
                        span { class: "period-chip", "P{entry.period}" }
                        div { class: "panel-row-main",
                            p { class: "panel-row-title", "{entry.subject}" }
                            p { class: "panel-row-meta", "{detail_label}: {entry.detail}" }
                        }
                        div { class: "panel-row-end panel-row-stack",
                            span { "{entry.time}" }
                            if let Some(room) = &entry.room {
                                span { class: "panel-row-meta", "Room {room}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn MaterialsPanel(materials: Vec<CourseMaterial>) -> Element {
    let ack = use_acknowledger();

    rsx! {
        PanelCard {
            title: "Course Materials",
            icon: StatIcon::FileText,
            description: "Download study materials",
            div { class: "panel-list",
                for material in materials.into_iter() {
                    {
                        let key = AckLedger::key("material", &material.title);
                        let downloaded = ack.status(&key) == Some(AckAction::Downloaded);
                        let title = material.title.clone();
                        rsx! {
                            div { key: "{material.title}", class: "panel-row",
                                div { class: "panel-row-main",
                                    p { class: "panel-row-title", "{material.title}" }
                                    p { class: "panel-row-meta",
                                        "{material.subject} • {material.format} • {format_date_human(&material.uploaded)}"
                                    }
                                }
                                div { class: "panel-row-end",
                                    if downloaded {
                                        Badge { variant: BadgeVariant::Success, "Downloaded" }
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        size: ButtonSize::Small,
                                        onclick: move |_| {
                                            ack.record(
                                                key.clone(),
                                                AckAction::Downloaded,
                                                Notice::download_started(&title),
                                            )
                                        },
                                        Icon::<LdDownload> { icon: LdDownload, width: 14, height: 14 }
                                        "Download"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn ReportCardsPanel(reports: Vec<ReportCard>) -> Element {
    let ack = use_acknowledger();

    rsx! {
        PanelCard {
            title: "Report Cards",
            icon: StatIcon::Award,
            description: "Term results",
            div { class: "panel-list",
                for report in reports.into_iter() {
                    {
                        let key = AckLedger::key("report-card", &report.term);
                        let term = report.term.clone();
                        let score = percent(report.percentage);
                        rsx! {
                            div { key: "{report.term}", class: "panel-row",
                                div { class: "panel-row-main",
                                    p { class: "panel-row-title", "{report.term}" }
                                    p { class: "panel-row-meta",
                                        "{report.subjects} subjects • Issued {format_date_human(&report.date)}"
                                    }
                                }
                                div { class: "panel-row-end",
                                    span { class: "mark-score", "{score}" }
                                    Badge { variant: grade_badge(&report.grade), "{report.grade}" }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        size: ButtonSize::Icon,
                                        aria_label: "Download report card",
                                        onclick: move |_| {
                                            ack.record(
                                                key.clone(),
                                                AckAction::Downloaded,
                                                Notice::download_started(&format!("{term} report card")),
                                            )
                                        },
                                        Icon::<LdDownload> { icon: LdDownload, width: 14, height: 14 }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn ClassesPanel(classes: Vec<TaughtClass>) -> Element {
    let ack = use_acknowledger();

    rsx! {
        PanelCard {
            title: "My Classes",
            icon: StatIcon::BookOpen,
            description: "Classes assigned this term",
            div { class: "panel-list",
                for class in classes.into_iter() {
                    {
                        let label = format!("{} - {}", class.class_name, class.section);
                        let opening = format!("{label} roster");
                        rsx! {
                            div { key: "{label}", class: "panel-row",
                                div { class: "panel-row-main",
                                    p { class: "panel-row-title", "{label}" }
                                    p { class: "panel-row-meta", "{class.subject} • {class.students} students" }
                                }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    size: ButtonSize::Small,
                                    onclick: move |_| ack.notify(Notice::opening(&opening)),
                                    "View"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn TasksPanel(tasks: Vec<FacultyTask>) -> Element {
    rsx! {
        PanelCard {
            title: "Pending Tasks",
            icon: StatIcon::Clipboard,
            div { class: "panel-list",
                for task in tasks.iter() {
                    div { key: "{task.id}", class: "panel-row",
                        div { class: "panel-row-main",
                            p { class: "panel-row-title", "{task.task}" }
                            p { class: "panel-row-meta", "Due {format_date_human(&task.deadline)}" }
                        }
                        Badge { variant: priority_badge(task.priority), "{task.priority.label()}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        let summary = AttendanceSummary {
            present: 75,
            total: 100,
            percentage: 75.0,
        };
        assert!(!below_threshold(&summary, 75.0));
        assert!(below_threshold(&summary, 85.0));
    }

    #[test]
    fn marks_show_dates_only_when_asked() {
        let marks = vec![SubjectMark {
            subject: "Hindi".into(),
            exam: "Unit Test".into(),
            marks: 91,
            total_marks: 100,
            grade: "A+".into(),
            date: Some("2024-02-05".into()),
        }];

        let dated = dioxus_ssr::render_element(rsx! {
            MarksPanel { marks: marks.clone(), show_dates: true }
        });
        assert!(dated.contains("Feb 5, 2024"));
        assert!(dated.contains("91/100"));

        let plain = dioxus_ssr::render_element(rsx! {
            MarksPanel { marks, show_dates: false }
        });
        assert!(!plain.contains("Feb 5, 2024"));
    }

    #[test]
    fn low_attendance_warns() {
        let summary = AttendanceSummary {
            present: 70,
            total: 100,
            percentage: 70.0,
        };
        let html = dioxus_ssr::render_element(rsx! {
            AttendancePanel { summary, threshold: 75.0 }
        });
        assert!(html.contains("below the required 75%"));
        assert!(html.contains("70.0%"));
    }
}
