//! Single-card information pages linked from the site header and footer.

use dioxus::prelude::*;
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader};

use super::footer::{CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE};
use crate::routes::Route;

#[component]
fn InfoPage(
    title: String,
    lead: String,
    card_title: String,
    lines: Vec<String>,
    #[props(default)] show_portal_link: bool,
) -> Element {
    let nav = navigator();

    rsx! {
        section { class: "info-page",
            PageHeader { title: title.clone(), subtitle: lead }
            Card { class: "info-card",
                CardHeader {
                    CardTitle { "{card_title}" }
                }
                CardContent {
                    for line in lines.iter() {
                        CardDescription { "{line}" }
                    }
                    if show_portal_link {
                        Button {
                            onclick: move |_| { nav.push(Route::Auth {}); },
                            "Go to the Portal"
                        }
                    }
                }
            }
        }
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[component]
pub fn About() -> Element {
    rsx! {
        InfoPage {
            title: "About Acharya",
            lead: "A Government of Rajasthan initiative for digital school administration.",
            card_title: "Our Mission",
            lines: lines(&[
                "Acharya connects students, parents, faculty and administrators of government schools on one platform.",
                "Attendance, marks, fees, hostel operations and notices are available to every role from a single sign-in.",
            ]),
        }
    }
}

#[component]
pub fn Faculty() -> Element {
    rsx! {
        InfoPage {
            title: "Faculty",
            lead: "Over 5,000 teachers across Rajasthan use Acharya every day.",
            card_title: "For Teachers",
            lines: lines(&[
                "Record attendance, enter marks, share course materials and review student leave requests.",
                "Faculty accounts are issued by the school administration.",
            ]),
            show_portal_link: true,
        }
    }
}

#[component]
pub fn Gallery() -> Element {
    rsx! {
        InfoPage {
            title: "Gallery",
            lead: "Moments from schools connected to Acharya.",
            card_title: "Coming Soon",
            lines: lines(&["Photographs from annual days, science exhibitions and sports meets will appear here."]),
        }
    }
}

#[component]
pub fn Notices() -> Element {
    rsx! {
        InfoPage {
            title: "Notices",
            lead: "Circulars and announcements from the Education Directorate.",
            card_title: "Latest Notices",
            lines: lines(&[
                "Mid-term examinations begin on 15 March 2024.",
                "Fee payment for the final installment is due by 15 March 2024.",
                "Signed-in users receive school-specific notices on their dashboard.",
            ]),
            show_portal_link: true,
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        InfoPage {
            title: "Contact Us",
            lead: "We are happy to help schools, parents and students.",
            card_title: "Education Directorate",
            lines: vec![
                format!("Email: {CONTACT_EMAIL}"),
                format!("Phone: {CONTACT_PHONE}"),
                format!("Address: {CONTACT_ADDRESS}"),
            ],
        }
    }
}

#[component]
pub fn Admissions() -> Element {
    rsx! {
        InfoPage {
            title: "Admissions",
            lead: "Applications for the 2024-25 session are open.",
            card_title: "How to Apply",
            lines: lines(&[
                "Choose the Admission role on the portal to start or track an application.",
                "Keep the birth certificate, transfer certificate and previous report card ready for upload.",
            ]),
            show_portal_link: true,
        }
    }
}

#[component]
pub fn Fees() -> Element {
    rsx! {
        InfoPage {
            title: "Fee Payment",
            lead: "Pay school and hostel fees online.",
            card_title: "Paying Fees",
            lines: lines(&[
                "Students and parents can see the fee schedule, pending installments and receipts on their dashboard.",
                "Receipts are generated automatically once a payment is confirmed.",
            ]),
            show_portal_link: true,
        }
    }
}
