use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdGraduationCap, LdMail, LdMapPin, LdPhone};
use dioxus_free_icons::Icon;

use crate::routes::Route;

pub(crate) const CONTACT_EMAIL: &str = "info@acharya.raj.gov.in";
pub(crate) const CONTACT_PHONE: &str = "+91-141-2234567";
pub(crate) const CONTACT_ADDRESS: &str = "Education Directorate, Jaipur, Rajasthan";

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer-grid",
                div { class: "site-footer-brand",
                    div { class: "site-brand",
                        span { class: "site-brand-mark",
                            Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 22, height: 22 }
                        }
                        span { class: "site-brand-text",
                            span { class: "site-brand-name", "Acharya" }
                            span { class: "site-brand-tagline", "Education Portal" }
                        }
                    }
                    p { "Empowering education through digital transformation for a better tomorrow." }
                }

                div { class: "site-footer-column",
                    h4 { "Quick Links" }
                    Link { to: Route::About {}, "About Us" }
                    Link { to: Route::Faculty {}, "Faculty" }
                    Link { to: Route::Gallery {}, "Gallery" }
                    Link { to: Route::Notices {}, "Notices" }
                }

                div { class: "site-footer-column",
                    h4 { "Student Services" }
                    Link { to: Route::Login {}, "Student Portal" }
                    Link { to: Route::Login {}, "Parent Portal" }
                    Link { to: Route::Admissions {}, "Admissions" }
                    Link { to: Route::Fees {}, "Fee Payment" }
                }

                div { class: "site-footer-column",
                    h4 { "Contact Us" }
                    span { class: "site-footer-contact",
                        Icon::<LdMail> { icon: LdMail, width: 16, height: 16 }
                        "{CONTACT_EMAIL}"
                    }
                    span { class: "site-footer-contact",
                        Icon::<LdPhone> { icon: LdPhone, width: 16, height: 16 }
                        "{CONTACT_PHONE}"
                    }
                    span { class: "site-footer-contact",
                        Icon::<LdMapPin> { icon: LdMapPin, width: 16, height: 16 }
                        "{CONTACT_ADDRESS}"
                    }
                }
            }
            p { class: "site-footer-legal",
                "© 2024 Acharya Education Portal, Government of Rajasthan. All rights reserved."
            }
        }
    }
}
