use dioxus::prelude::*;
use shared_types::StatIcon;
use shared_ui::{Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::components::Glyph;
use crate::routes::Route;

pub(crate) struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: StatIcon,
}

pub(crate) const FEATURES: [Feature; 9] = [
    Feature {
        title: "Student Portal",
        description: "Access attendance, marks, timetable, course materials, and fee status in one place.",
        icon: StatIcon::UserCheck,
    },
    Feature {
        title: "Parent Dashboard",
        description: "Monitor your child's progress, view attendance, download report cards, and track fees.",
        icon: StatIcon::Users,
    },
    Feature {
        title: "Faculty Management",
        description: "Enter marks, update attendance, upload course materials, and approve student leave.",
        icon: StatIcon::GraduationCap,
    },
    Feature {
        title: "Hostel Management",
        description: "Streamlined hostel operations with leave approvals and occupancy tracking.",
        icon: StatIcon::Building,
    },
    Feature {
        title: "Analytics Dashboard",
        description: "Comprehensive analytics for administrators with detailed insights and reports.",
        icon: StatIcon::Chart,
    },
    Feature {
        title: "Payment Integration",
        description: "Secure fee payments through Razorpay with automatic receipt generation.",
        icon: StatIcon::CreditCard,
    },
    Feature {
        title: "Secure Authentication",
        description: "JWT-based authentication with role-based access control and audit logs.",
        icon: StatIcon::Shield,
    },
    Feature {
        title: "Document Management",
        description: "Secure file uploads, document verification, and digital certificate storage.",
        icon: StatIcon::FileText,
    },
    Feature {
        title: "Notifications",
        description: "Real-time notifications for important updates, announcements, and deadlines.",
        icon: StatIcon::Bell,
    },
];

#[component]
pub fn Features() -> Element {
    let nav = navigator();

    rsx! {
        section { class: "features",
            div { class: "features-intro",
                h2 { class: "section-title", "Comprehensive School Management" }
                p { class: "section-lead",
                    "Everything you need to run a modern educational institution, from student \
                     management to administrative operations, all in one integrated platform."
                }
            }

            div { class: "features-grid",
                for feature in FEATURES.iter() {
                    Card { class: "feature-card",
                        CardHeader {
                            span { class: "feature-icon", Glyph { icon: feature.icon, size: 24 } }
                            CardTitle { "{feature.title}" }
                        }
                        CardContent {
                            CardDescription { "{feature.description}" }
                        }
                    }
                }
            }

            div { class: "features-cta",
                h3 { "Ready to transform your school's digital infrastructure?" }
                p {
                    "Join thousands of schools across Rajasthan already using Acharya to \
                     streamline their operations."
                }
                div { class: "features-cta-actions",
                    Button {
                        size: ButtonSize::Large,
                        onclick: move |_| { nav.push(Route::Auth {}); },
                        "Get Started Today"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Large,
                        onclick: move |_| { nav.push(Route::Contact {}); },
                        "Schedule Demo"
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
    fn feature_titles_are_unique() {
        let mut titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), FEATURES.len());
    }

    #[test]
    fn feature_grid_opens_with_the_student_portal() {
        assert_eq!(FEATURES[0].title, "Student Portal");
        assert_eq!(FEATURES[8].icon, StatIcon::Bell);
    }
}
